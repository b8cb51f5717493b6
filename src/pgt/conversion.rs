use crate::graph::WorkflowGraph;

/// A source format that can be turned into a `WorkflowGraph`.
///
/// Implemented for the unrolled physical graph and for node-link data read back from a
/// simulator file. Other front ends (a different translator's output, a hand-written
/// test fixture) plug in the same way.
///
/// # Example
///
/// ```rust,no_run
/// use topsim_pipelines::graph::{NodeAttributes, WorkflowGraph};
/// use topsim_pipelines::pgt::IntoWorkflowGraph;
///
/// struct Chain(Vec<(String, f64)>);
///
/// impl IntoWorkflowGraph for Chain {
///     type Error = topsim_pipelines::error::GraphError;
///
///     fn into_graph(self) -> Result<WorkflowGraph, Self::Error> {
///         let mut graph = WorkflowGraph::new();
///         let mut previous: Option<String> = None;
///         for (id, cost) in self.0 {
///             graph.add_node(id.clone(), NodeAttributes::new(id.clone(), cost));
///             if let Some(prev) = previous.replace(id.clone()) {
///                 graph.add_edge(&prev, &id, Default::default())?;
///             }
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoWorkflowGraph {
    type Error;

    /// Consumes the source and builds the directed task graph.
    fn into_graph(self) -> Result<WorkflowGraph, Self::Error>;
}
