use super::record::{DropRef, PgtRecord};
use crate::error::{GraphError, ParseError};
use crate::graph::{EdgeAttributes, NodeAttributes, WorkflowGraph};
use ahash::AHashMap;

/// Producers and consumers declared for one data artifact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactLinks {
    pub producers: Vec<String>,
    pub consumers: Vec<String>,
}

/// Data-artifact id -> the nodes writing and reading it.
pub type EdgeIndex = AHashMap<String, ArtifactLinks>;

/// Builds a `WorkflowGraph` from physical-graph records in three passes.
///
/// Producer/consumer declarations may refer to records further down the list, so nodes are
/// created first, then the artifact index, and only then the edges.
pub(super) struct GraphBuilder<'a> {
    records: &'a [PgtRecord],
    graph: WorkflowGraph,
}

impl<'a> GraphBuilder<'a> {
    pub(super) fn new(records: &'a [PgtRecord]) -> Self {
        Self {
            records,
            graph: WorkflowGraph::new(),
        }
    }

    pub(super) fn build(mut self) -> Result<WorkflowGraph, ParseError> {
        log::info!(
            "Building workflow graph from {} physical graph records",
            self.records.len()
        );
        self.add_compute_nodes()?;
        let edge_index = build_edge_index(self.records)?;
        self.add_edges(&edge_index)?;

        for attributes in self.graph.attributes_mut() {
            attributes.label = attributes.nm.clone();
        }

        log::info!(
            "  -> {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(self.graph)
    }

    fn add_compute_nodes(&mut self) -> Result<(), ParseError> {
        let records = self.records;
        for (record_index, record) in records.iter().enumerate() {
            if !record.is_compute() {
                continue;
            }
            if record.is_sleep_app() {
                log::debug!(
                    "Skipping SleepApp record {} ('{}')",
                    record_index,
                    record.oid.as_deref().unwrap_or("?")
                );
                continue;
            }
            let oid = require_oid(record, record_index)?;
            let nm = record.nm.clone().ok_or_else(|| ParseError::MissingField {
                record_index,
                oid: oid.to_string(),
                field: "nm",
            })?;
            let tw = record.tw.ok_or_else(|| ParseError::MissingField {
                record_index,
                oid: oid.to_string(),
                field: "tw",
            })?;
            self.graph.add_node(oid, NodeAttributes::new(nm, tw));
        }
        Ok(())
    }

    fn add_edges(&mut self, edge_index: &EdgeIndex) -> Result<(), ParseError> {
        let records = self.records;
        for (record_index, record) in records.iter().enumerate() {
            if record.is_sleep_app() {
                continue;
            }
            if record.outputs.is_none() && record.inputs.is_none() {
                continue;
            }
            let oid = require_oid(record, record_index)?;

            for output in record.outputs.iter().flatten() {
                let links = lookup(edge_index, output, oid)?;
                for consumer in &links.consumers {
                    self.connect(oid, consumer, output)?;
                }
            }
            for input in record.inputs.iter().flatten() {
                let links = lookup(edge_index, input, oid)?;
                for producer in &links.producers {
                    self.connect(producer, oid, input)?;
                }
            }
        }
        Ok(())
    }

    /// Adds `source -> target`, naming the artifact that declared the link if either
    /// endpoint is not a node.
    fn connect(
        &mut self,
        source: &str,
        target: &str,
        artifact: &DropRef,
    ) -> Result<(), ParseError> {
        match self.graph.add_edge(source, target, EdgeAttributes::default()) {
            Ok(_) => Ok(()),
            Err(GraphError::UnknownNode(missing)) => {
                let peer = if missing == source { target } else { source };
                Err(ParseError::UnknownNode {
                    artifact_id: artifact.as_str().to_string(),
                    peer_node_id: peer.to_string(),
                    missing_node_id: missing,
                })
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Collects producer and consumer declarations for every record that has them.
pub fn build_edge_index(records: &[PgtRecord]) -> Result<EdgeIndex, ParseError> {
    let mut index = EdgeIndex::new();
    for (record_index, record) in records.iter().enumerate() {
        if let Some(producers) = &record.producers {
            let oid = require_oid(record, record_index)?;
            index.entry(oid.to_string()).or_default().producers = ids(producers);
        }
        if let Some(consumers) = &record.consumers {
            let oid = require_oid(record, record_index)?;
            index.entry(oid.to_string()).or_default().consumers = ids(consumers);
        }
    }
    Ok(index)
}

fn lookup<'e>(
    edge_index: &'e EdgeIndex,
    artifact: &DropRef,
    referenced_by: &str,
) -> Result<&'e ArtifactLinks, ParseError> {
    edge_index
        .get(artifact.as_str())
        .ok_or_else(|| ParseError::UndeclaredArtifact {
            artifact_id: artifact.as_str().to_string(),
            referenced_by: referenced_by.to_string(),
        })
}

fn require_oid(record: &PgtRecord, record_index: usize) -> Result<&str, ParseError> {
    record
        .oid
        .as_deref()
        .ok_or_else(|| ParseError::MissingField {
            record_index,
            oid: "<none>".to_string(),
            field: "oid",
        })
}

fn ids(refs: &[DropRef]) -> Vec<String> {
    refs.iter().map(|r| r.as_str().to_string()).collect()
}
