//! The directed workflow graph shared by the parser, relabeler and exporters.
//!
//! Nodes are keyed by string id and keep their insertion order, which is the order the
//! physical graph declared them in. Edges are simple: adding the same `source -> target`
//! twice updates the existing edge instead of creating a parallel one.

use crate::error::GraphError;
use ahash::AHashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

mod topo;

/// Attributes carried by a workflow node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Display name (`nm` in the physical graph).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    /// Computation weight (`tw` in the physical graph, or a generated cost).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp: Option<f64>,
    /// Generic label picked up by visualization tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl NodeAttributes {
    pub fn new(nm: impl Into<String>, comp: f64) -> Self {
        Self {
            nm: Some(nm.into()),
            comp: Some(comp),
            label: None,
        }
    }
}

/// Attributes carried by a producer -> consumer edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Data volume moved along the edge, only present once costs are generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowNode {
    pub id: String,
    pub attributes: NodeAttributes,
}

/// A simple directed graph of workflow tasks.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    graph: DiGraph<WorkflowNode, EdgeAttributes>,
    index: AHashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, or replaces the attributes of an existing node with the same id.
    pub fn add_node(&mut self, id: impl Into<String>, attributes: NodeAttributes) -> NodeIndex {
        let id = id.into();
        if let Some(&idx) = self.index.get(&id) {
            self.graph[idx].attributes = attributes;
            return idx;
        }
        let idx = self.graph.add_node(WorkflowNode {
            id: id.clone(),
            attributes,
        });
        self.index.insert(id, idx);
        idx
    }

    /// Adds `source -> target`. Both endpoints must already exist.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        attributes: EdgeAttributes,
    ) -> Result<EdgeIndex, GraphError> {
        let from = self.require(source)?;
        let to = self.require(target)?;
        Ok(self.graph.update_edge(from, to, attributes))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&NodeAttributes> {
        self.index.get(id).map(|&idx| &self.graph[idx].attributes)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeAttributes> {
        let idx = *self.index.get(id)?;
        Some(&mut self.graph[idx].attributes)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&from), Some(&to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&EdgeAttributes> {
        let from = *self.index.get(source)?;
        let to = *self.index.get(target)?;
        self.graph
            .find_edge(from, to)
            .map(|edge| &self.graph[edge])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &WorkflowNode> {
        self.graph.node_weights()
    }

    /// Mutable access to every node's attributes, in insertion order.
    pub fn attributes_mut(&mut self) -> impl Iterator<Item = &mut NodeAttributes> {
        self.graph.node_weights_mut().map(|node| &mut node.attributes)
    }

    /// Edges as `(source_id, target_id, attributes)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeAttributes)> {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].id.as_str(),
                self.graph[edge.target()].id.as_str(),
                edge.weight(),
            )
        })
    }

    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut found: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        found.sort();
        found
            .into_iter()
            .map(|n| self.graph[n].id.as_str())
            .collect()
    }

    fn require(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }
}
