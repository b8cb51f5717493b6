//! Unrolled DALiuGE physical graph templates.
//!
//! A physical graph is a flat JSON array mixing compute records (those with an `app`) and
//! data-artifact records (those declaring `producers`/`consumers`). [`PhysicalGraph`]
//! loads that array and rebuilds the task graph from it.

use crate::error::ParseError;
use crate::graph::WorkflowGraph;
use std::fs;
use std::path::Path;

pub mod conversion;
pub mod parser;
pub mod record;

pub use conversion::IntoWorkflowGraph;
pub use parser::{ArtifactLinks, EdgeIndex, build_edge_index};
pub use record::{DropRef, PgtRecord, SLEEP_APP};

use parser::GraphBuilder;

/// The record list of an unrolled physical graph template.
#[derive(Debug, Clone, Default)]
pub struct PhysicalGraph {
    pub records: Vec<PgtRecord>,
}

impl PhysicalGraph {
    /// Reads and parses a physical graph JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let records: Vec<PgtRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Builds the task graph without consuming the records.
    pub fn to_graph(&self) -> Result<WorkflowGraph, ParseError> {
        GraphBuilder::new(&self.records).build()
    }
}

impl From<Vec<PgtRecord>> for PhysicalGraph {
    fn from(records: Vec<PgtRecord>) -> Self {
        Self { records }
    }
}

impl IntoWorkflowGraph for PhysicalGraph {
    type Error = ParseError;

    fn into_graph(self) -> Result<WorkflowGraph, ParseError> {
        self.to_graph()
    }
}

/// Reads a physical graph file straight into a `WorkflowGraph`.
pub fn daliuge_to_graph(path: impl AsRef<Path>) -> Result<WorkflowGraph, ParseError> {
    PhysicalGraph::from_file(path)?.into_graph()
}
