//! Renames DALiuGE node ids to short sequential identifiers.
//!
//! Node `i` of the output is the `i`-th node of the graph's topological order, so the
//! numeric suffixes themselves form a valid execution order.

use crate::error::GraphError;
use crate::graph::{EdgeAttributes, WorkflowGraph};
use ahash::AHashMap;

mod costs;

pub use costs::CostModel;

/// Relabels a graph to `<prefix><index>` ids, optionally generating costs on the way.
#[derive(Debug, Clone)]
pub struct Relabeler {
    prefix: String,
    costs: Option<CostModel>,
}

impl Relabeler {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            costs: None,
        }
    }

    pub fn with_costs(mut self, costs: CostModel) -> Self {
        self.costs = Some(costs);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn relabel(&self, graph: &WorkflowGraph) -> Result<WorkflowGraph, GraphError> {
        if let Some(costs) = &self.costs {
            costs.validate()?;
        }
        let order = graph.topological_order()?;
        log::info!(
            "Relabeling {} nodes with prefix '{}'",
            order.len(),
            self.prefix
        );

        let mut translation: AHashMap<&str, String> = AHashMap::with_capacity(order.len());
        let mut relabeled = WorkflowGraph::new();
        let mut sampler = self.costs.as_ref().map(CostModel::sampler);

        for (index, &old_id) in order.iter().enumerate() {
            let new_id = format!("{}{}", self.prefix, index);
            let mut attributes = graph.node(old_id).cloned().unwrap_or_default();
            if let Some(sampler) = sampler.as_mut() {
                attributes.comp = Some(sampler.computation());
            }
            relabeled.add_node(new_id.clone(), attributes);
            translation.insert(old_id, new_id);
        }

        for (source, target, attributes) in graph.edges() {
            let (Some(from), Some(to)) = (translation.get(source), translation.get(target))
            else {
                return Err(GraphError::UnknownNode(format!("{} -> {}", source, target)));
            };
            let mut attributes = attributes.clone();
            if let Some(sampler) = sampler.as_ref() {
                let source_comp = relabeled.node(from).and_then(|n| n.comp).unwrap_or(0.0);
                attributes = EdgeAttributes {
                    transfer_data: Some(sampler.transfer(source_comp)),
                };
            }
            relabeled.add_edge(from, to, attributes)?;
        }

        Ok(relabeled)
    }
}

/// Topologically relabels `graph` with `prefix`, keeping its attributes.
pub fn relabel(graph: &WorkflowGraph, prefix: &str) -> Result<WorkflowGraph, GraphError> {
    Relabeler::new(prefix).relabel(graph)
}
