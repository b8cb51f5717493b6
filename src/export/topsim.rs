use super::node_link::NodeLinkData;
use crate::error::ExportError;
use crate::graph::WorkflowGraph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsimHeader {
    /// Whether node costs are already expressed in simulator time units.
    pub time: bool,
}

/// The workflow file layout read by the topsim simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsimWorkflow {
    pub header: TopsimHeader,
    pub graph: NodeLinkData,
}

impl TopsimWorkflow {
    pub fn from_graph(graph: &WorkflowGraph) -> Self {
        Self {
            header: TopsimHeader { time: false },
            graph: NodeLinkData::from(graph),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, ExportError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Writes the workflow as 2-space indented JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("  -> Wrote topsim workflow to '{}'", path.display());
        Ok(path.to_path_buf())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Wraps `graph` in the simulator envelope and writes it to `path`.
pub fn write_topsim(graph: &WorkflowGraph, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    TopsimWorkflow::from_graph(graph).save(path)
}
