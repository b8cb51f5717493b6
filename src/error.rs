use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an unrolled physical graph into a `WorkflowGraph`.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read physical graph '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse physical graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {record_index} ('{oid}') is missing required field '{field}'")]
    MissingField {
        record_index: usize,
        oid: String,
        field: &'static str,
    },

    #[error(
        "Data artifact '{artifact_id}' referenced by node '{referenced_by}' was never declared with producers or consumers"
    )]
    UndeclaredArtifact {
        artifact_id: String,
        referenced_by: String,
    },

    #[error(
        "Node '{missing_node_id}' is not in the graph, but artifact '{artifact_id}' connects it to '{peer_node_id}'"
    )]
    UnknownNode {
        missing_node_id: String,
        artifact_id: String,
        peer_node_id: String,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised by structural graph operations (ordering, relabeling, cost generation).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Graph contains a cycle through node '{0}', no topological order exists")]
    Cycle(String),

    #[error("Invalid cost model: {0}")]
    InvalidCostModel(String),

    #[error("Node '{0}' does not exist in the graph")]
    UnknownNode(String),
}

/// Errors that can occur while writing or reading back exported graph files.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to (de)serialize simulator JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors from running the external graph translator.
#[derive(Error, Debug)]
pub enum UnrollError {
    #[error("Logical graph template '{0}' does not exist")]
    MissingInput(PathBuf),

    #[error("Failed to launch translator '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Translation failed (exit code {code:?}): {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("Translator '{0}' exited successfully but produced no output")]
    EmptyOutput(String),

    #[error("Could not write physical graph to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from editing an EAGLE logical graph template.
#[derive(Error, Debug)]
pub enum LgtError {
    #[error("Could not access logical graph template '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse logical graph template JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logical graph template has no 'nodeDataArray' list")]
    MissingNodeDataArray,

    #[error("Logical graph template contains no Scatter construct to set channels on")]
    NoScatter,

    #[error("Number of channels must be at least 1")]
    ZeroChannels,
}

/// Any failure of the end-to-end LGT to simulator pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Lgt(#[from] LgtError),

    #[error(transparent)]
    Unroll(#[from] UnrollError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
