//! Common test fixtures: physical graphs and logical graph templates.
use std::collections::BTreeSet;
use topsim_pipelines::prelude::*;

/// Two apps linked through one data drop: `A -> d1 -> B`.
#[allow(dead_code)]
pub const SIMPLE_PGT_JSON: &str = r#"[
    {"oid": "A", "app": "x", "tw": 1, "nm": "A", "outputs": ["d1"]},
    {"oid": "d1", "producers": ["A"], "consumers": ["B"]},
    {"oid": "B", "app": "y", "tw": 2, "nm": "B", "inputs": ["d1"]}
]"#;

/// A SleepApp `S` producing `d2`, which `C` consumes.
#[allow(dead_code)]
pub const SLEEP_PRODUCER_PGT_JSON: &str = r#"[
    {"oid": "S", "app": "dlg.apps.simple.SleepApp", "tw": 5, "nm": "Sleep", "outputs": ["d2"]},
    {"oid": "d2", "producers": ["S"], "consumers": ["C"]},
    {"oid": "C", "app": "dlg.apps.simple.CopyApp", "tw": 3, "nm": "Copy", "inputs": ["d2"]}
]"#;

/// A two-channel scatter as `dlg unroll` writes it.
///
/// `Load` fans out to two `Grid` instances which both feed `Image`. Data drops are
/// declared after the apps that use them, one app uses the newer `{oid: name}` reference
/// form, an unconnected SleepApp sits in the middle and a metadata object trails the list.
#[allow(dead_code)]
pub const SCATTER_PGT_JSON: &str = r##"[
    {"oid": "2_-1_0", "app": "dlg.apps.simple.CopyApp", "nm": "Load", "tw": 4,
     "outputs": ["2_-2_0/0", "2_-2_0/1"], "node": "#0", "island": "#0"},
    {"oid": "2_-3_0/0", "app": "dlg.apps.simple.RandomArrayApp", "nm": "Grid", "tw": 10,
     "inputs": ["2_-2_0/0"], "outputs": ["2_-4_0/0"]},
    {"oid": "2_-3_0/1", "app": "dlg.apps.simple.RandomArrayApp", "nm": "Grid", "tw": 12,
     "inputs": [{"2_-2_0/1": "Visibilities"}], "outputs": [{"2_-4_0/1": "Grid"}]},
    {"oid": "2_-9_0", "app": "dlg.apps.simple.SleepApp", "nm": "Wait", "tw": 1,
     "outputs": ["2_-10_0"]},
    {"oid": "2_-5_0", "app": "dlg.apps.simple.AverageArraysApp", "nm": "Image", "tw": 7,
     "inputs": ["2_-4_0/0", "2_-4_0/1"]},
    {"oid": "2_-2_0/0", "type": "plain", "storage": "Memory", "nm": "Visibilities",
     "producers": ["2_-1_0"], "consumers": ["2_-3_0/0"]},
    {"oid": "2_-2_0/1", "type": "plain", "storage": "Memory", "nm": "Visibilities",
     "producers": ["2_-1_0"], "consumers": ["2_-3_0/1"]},
    {"oid": "2_-4_0/0", "type": "plain", "storage": "Memory", "nm": "Grid",
     "producers": ["2_-3_0/0"], "consumers": ["2_-5_0"]},
    {"oid": "2_-4_0/1", "type": "plain", "storage": "Memory", "nm": "Grid",
     "producers": [{"2_-3_0/1": "Grid"}], "consumers": ["2_-5_0"]},
    {"oid": "2_-10_0", "type": "plain", "storage": "Memory", "nm": "Nothing",
     "producers": ["2_-9_0"], "consumers": []},
    {"reprodata": {"rmode": "1", "meta_data": {"repro_protocol": 0.1}}}
]"##;

/// Minimal EAGLE logical graph with one Scatter construct.
#[allow(dead_code)]
pub const SCATTER_LGT_JSON: &str = r#"{
    "modelData": {"fileType": "graph", "repoService": "GitHub"},
    "nodeDataArray": [
        {"key": -1, "category": "Scatter", "text": "Channels", "copies": 1,
         "fields": [{"name": "num_of_copies", "text": "Number of copies", "value": 1}]},
        {"key": -3, "category": "PythonApp", "text": "Grid", "group": -1}
    ],
    "linkDataArray": []
}"#;

#[allow(dead_code)]
pub fn parse(json: &str) -> WorkflowGraph {
    PhysicalGraph::from_json(json)
        .expect("Failed to parse physical graph JSON")
        .into_graph()
        .expect("Failed to build graph")
}

/// Node ids of `graph` as a sorted set.
#[allow(dead_code)]
pub fn node_set(graph: &WorkflowGraph) -> BTreeSet<String> {
    graph.nodes().map(|n| n.id.clone()).collect()
}

/// Edges of `graph` as a sorted set of `(source, target)` pairs.
#[allow(dead_code)]
pub fn edge_set(graph: &WorkflowGraph) -> BTreeSet<(String, String)> {
    graph
        .edges()
        .map(|(s, t, _)| (s.to_string(), t.to_string()))
        .collect()
}

/// Numeric suffix of a relabeled id, e.g. `T12` -> 12.
#[allow(dead_code)]
pub fn suffix(id: &str, prefix: &str) -> usize {
    id.strip_prefix(prefix)
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(|| panic!("'{}' does not look like {}<n>", id, prefix))
}
