//! Prelude module for convenient imports
//!
//! Re-exports the types needed for the usual unroll, parse, relabel, export sequence.
//!
//! # Example
//!
//! ```rust,no_run
//! use topsim_pipelines::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = daliuge_to_graph("path/to/pgt.json")?;
//! let relabeled = relabel(&graph, "T")?;
//! write_topsim(&relabeled, "path/to/workflow.json")?;
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{EdgeAttributes, NodeAttributes, WorkflowGraph};

// Physical graph parsing
pub use crate::pgt::{IntoWorkflowGraph, PgtRecord, PhysicalGraph, SLEEP_APP, daliuge_to_graph};

// Relabeling and cost generation
pub use crate::relabel::{CostModel, Relabeler, relabel};

// Output formats
pub use crate::export::{NodeLinkData, TopsimWorkflow, write_dot, write_topsim};

// External translator and pipeline
pub use crate::lgt::update_number_of_channels;
pub use crate::pipeline::{PipelineOptions, json_to_topsim, produce_final_workflow_structure};
pub use crate::unroll::{Unroller, unroll_logical_graph};

// Error types
pub use crate::error::{
    ExportError, GraphError, LgtError, ParseError, PipelineError, UnrollError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
