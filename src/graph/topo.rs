use super::WorkflowGraph;
use crate::error::GraphError;
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

impl WorkflowGraph {
    /// Returns node ids in a topological order.
    ///
    /// Kahn's algorithm with a min-heap over insertion indices: whenever several nodes are
    /// ready at once, the one declared earliest comes first. The order is therefore fully
    /// determined by the graph and the order its nodes were added in.
    pub fn topological_order(&self) -> Result<Vec<&str>, GraphError> {
        let mut in_degree = vec![0usize; self.graph.node_count()];
        for edge in self.graph.edge_references() {
            in_degree[edge.target().index()] += 1;
        }

        let mut ready: BinaryHeap<Reverse<NodeIndex>> = self
            .graph
            .node_indices()
            .filter(|idx| in_degree[idx.index()] == 0)
            .map(Reverse)
            .collect();

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some(Reverse(idx)) = ready.pop() {
            order.push(self.graph[idx].id.as_str());
            for next in self.graph.neighbors(idx) {
                let degree = &mut in_degree[next.index()];
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        if order.len() < self.graph.node_count() {
            let on_cycle = self.node_on_cycle(&in_degree);
            return Err(GraphError::Cycle(self.graph[on_cycle].id.clone()));
        }
        Ok(order)
    }

    /// Finds a node on a cycle once Kahn's algorithm has stalled.
    ///
    /// Every node left with a non-zero in-degree has a predecessor in the same state, so
    /// walking backwards through such predecessors must revisit a node, and the first
    /// revisited node lies on a cycle.
    fn node_on_cycle(&self, in_degree: &[usize]) -> NodeIndex {
        let stuck = |idx: &NodeIndex| in_degree[idx.index()] > 0;
        let mut current = match self.graph.node_indices().find(stuck) {
            Some(idx) => idx,
            None => return NodeIndex::new(0),
        };
        let mut visited = vec![false; self.graph.node_count()];
        while !visited[current.index()] {
            visited[current.index()] = true;
            match self
                .graph
                .neighbors_directed(current, Direction::Incoming)
                .filter(stuck)
                .min()
            {
                Some(previous) => current = previous,
                None => break,
            }
        }
        current
    }
}
