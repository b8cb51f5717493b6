use crate::error::ExportError;
use crate::graph::{EdgeAttributes, NodeAttributes, WorkflowGraph};
use itertools::Itertools;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the graph as Graphviz dot text, quoting every id.
///
/// Written out by hand in the `strict digraph` layout networkx/pydot produce, since
/// `petgraph::dot::Dot` names nodes by index rather than by oid.
pub fn to_dot(graph: &WorkflowGraph) -> String {
    let mut output = String::new();
    writeln!(&mut output, "strict digraph {{").unwrap();

    for node in graph.nodes() {
        writeln!(
            &mut output,
            "{}{};",
            quote(&node.id),
            format_attributes(&node_attributes(&node.attributes))
        )
        .unwrap();
    }
    for (source, target, attributes) in graph.edges() {
        writeln!(
            &mut output,
            "{} -> {}{};",
            quote(source),
            quote(target),
            format_attributes(&edge_attributes(attributes))
        )
        .unwrap();
    }

    writeln!(&mut output, "}}").unwrap();
    output
}

/// Writes the dot rendering of `graph` to `path`.
pub fn write_dot(graph: &WorkflowGraph, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    fs::write(path, to_dot(graph)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("  -> Wrote dot graph to '{}'", path.display());
    Ok(path.to_path_buf())
}

fn node_attributes(attributes: &NodeAttributes) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(comp) = attributes.comp {
        pairs.push(("comp", comp.to_string()));
    }
    if let Some(label) = &attributes.label {
        pairs.push(("label", quote(label)));
    }
    if let Some(nm) = &attributes.nm {
        pairs.push(("nm", quote(nm)));
    }
    pairs
}

fn edge_attributes(attributes: &EdgeAttributes) -> Vec<(&'static str, String)> {
    attributes
        .transfer_data
        .map(|data| vec![("transfer_data", data.to_string())])
        .unwrap_or_default()
}

fn format_attributes(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    format!(
        " [{}]",
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .join(", ")
    )
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_output_layout() {
        let mut graph = WorkflowGraph::new();
        graph.add_node("a", NodeAttributes::new("Say \"hi\"", 2.0));
        graph.add_node("b", NodeAttributes::default());
        graph.add_edge("a", "b", EdgeAttributes::default()).unwrap();

        let dot = to_dot(&graph);
        let lines: Vec<&str> = dot.lines().collect();
        assert_eq!(
            lines,
            vec![
                "strict digraph {",
                r#""a" [comp=2, nm="Say \"hi\""];"#,
                r#""b";"#,
                r#""a" -> "b";"#,
                "}",
            ]
        );
    }
}
