use crate::error::GraphError;
use crate::graph::{EdgeAttributes, NodeAttributes, WorkflowGraph};
use crate::pgt::IntoWorkflowGraph;
use serde::{Deserialize, Serialize};

/// NetworkX-compatible node-link representation of a directed graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkData {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    #[serde(default)]
    pub graph: serde_json::Map<String, serde_json::Value>,
    pub nodes: Vec<NodeLinkNode>,
    #[serde(alias = "edges")]
    pub links: Vec<NodeLinkEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    #[serde(flatten)]
    pub attributes: NodeAttributes,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    #[serde(flatten)]
    pub attributes: EdgeAttributes,
    pub source: String,
    pub target: String,
}

fn default_directed() -> bool {
    true
}

impl From<&WorkflowGraph> for NodeLinkData {
    fn from(graph: &WorkflowGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeLinkNode {
                attributes: node.attributes.clone(),
                id: node.id.clone(),
            })
            .collect();
        let links = graph
            .edges()
            .map(|(source, target, attributes)| NodeLinkEdge {
                attributes: attributes.clone(),
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();
        Self {
            directed: true,
            multigraph: false,
            graph: serde_json::Map::new(),
            nodes,
            links,
        }
    }
}

impl IntoWorkflowGraph for NodeLinkData {
    type Error = GraphError;

    fn into_graph(self) -> Result<WorkflowGraph, GraphError> {
        let mut graph = WorkflowGraph::new();
        for node in self.nodes {
            graph.add_node(node.id, node.attributes);
        }
        for link in self.links {
            graph.add_edge(&link.source, &link.target, link.attributes)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_attributes_are_flattened() {
        let mut graph = WorkflowGraph::new();
        graph.add_node("T0", NodeAttributes::new("Gridding", 30.0));

        let value = serde_json::to_value(NodeLinkData::from(&graph)).unwrap();
        let node = &value["nodes"][0];
        assert_eq!(node["id"], "T0");
        assert_eq!(node["nm"], "Gridding");
        assert_eq!(node["comp"], 30.0);
        assert!(node.get("label").is_none());
        assert_eq!(value["directed"], true);
        assert_eq!(value["links"], serde_json::json!([]));
    }

    #[test]
    fn test_reads_networkx_output_with_integer_costs() {
        let json = r#"{
            "directed": true, "multigraph": false, "graph": {},
            "nodes": [{"comp": 10, "id": "a"}, {"comp": 20, "id": "b"}],
            "links": [{"transfer_data": 5, "source": "a", "target": "b"}]
        }"#;
        let data: NodeLinkData = serde_json::from_str(json).unwrap();
        let graph = data.into_graph().unwrap();

        assert_eq!(graph.node("b").unwrap().comp, Some(20.0));
        assert_eq!(graph.edge("a", "b").unwrap().transfer_data, Some(5.0));
    }

    #[test]
    fn test_dangling_link_is_rejected() {
        let json = r#"{"nodes": [{"id": "a"}], "links": [{"source": "a", "target": "z"}]}"#;
        let data: NodeLinkData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.into_graph().unwrap_err(),
            GraphError::UnknownNode("z".to_string())
        );
    }
}
