//! # topsim-pipelines - EAGLE/DALiuGE to topsim workflow conversion
//!
//! **topsim-pipelines** turns radio-astronomy workflow descriptions into the workflow files
//! read by the `topsim` telescope operations simulator. It understands three formats:
//!
//! - the EAGLE **logical graph template** (LGT), a compact description with scatter/loop
//!   constructs,
//! - the DALiuGE **physical graph template** (PGT), the unrolled form produced by
//!   `dlg unroll`,
//! - the simulator's NetworkX-style **node-link** JSON wrapped in a small header.
//!
//! ## Core Workflow
//!
//! 1.  **Unroll**: `Unroller` runs the DALiuGE translator on an LGT and stores the PGT.
//! 2.  **Parse**: `PhysicalGraph` reads the PGT and rebuilds the task graph, linking
//!     producers to consumers through the data drops between them.
//! 3.  **Relabel**: `Relabeler` renames nodes to `<prefix><n>` in topological order and can
//!     attach seeded synthetic costs.
//! 4.  **Export**: `TopsimWorkflow` writes the simulator file; `write_dot` draws the graph.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use topsim_pipelines::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Unroll an EAGLE graph with the `dlg` translator on PATH.
//!     let pgt_path = Unroller::default().unroll("data/eagle_lgt.graph", "data/daliuge_pgt.json")?;
//!
//!     // Rebuild the task graph and give it readable ids with generated costs.
//!     let graph = PhysicalGraph::from_file(&pgt_path)?.into_graph()?;
//!     let costs = CostModel::new(100.0, 20.0, 2.0).with_seed(42);
//!     let relabeled = Relabeler::new("T").with_costs(costs).relabel(&graph)?;
//!
//!     // Write the simulator workflow and a dot file for inspection.
//!     TopsimWorkflow::from_graph(&relabeled).save("data/topsim_workflow.json")?;
//!     write_dot(&relabeled, "data/topsim_workflow.dot")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod export;
pub mod graph;
pub mod lgt;
pub mod pgt;
pub mod pipeline;
pub mod prelude;
pub mod relabel;
pub mod unroll;
