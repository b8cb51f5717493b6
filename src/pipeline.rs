//! End-to-end conversions chaining the translator, parser, relabeler and exporters.

use crate::error::PipelineError;
use crate::export::TopsimWorkflow;
use crate::lgt;
use crate::pgt::daliuge_to_graph;
use crate::relabel::{CostModel, Relabeler};
use crate::unroll::Unroller;
use std::path::{Path, PathBuf};

/// Settings for [`produce_final_workflow_structure`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub unroller: Unroller,
    /// Prefix of the relabeled node ids.
    pub prefix: String,
    pub costs: Option<CostModel>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            unroller: Unroller::default(),
            prefix: "T".to_string(),
            costs: None,
        }
    }
}

impl PipelineOptions {
    fn relabeler(&self) -> Relabeler {
        let relabeler = Relabeler::new(self.prefix.clone());
        match &self.costs {
            Some(costs) => relabeler.with_costs(costs.clone()),
            None => relabeler,
        }
    }
}

/// Converts a physical graph file into a topsim workflow file, keeping DALiuGE ids.
pub fn json_to_topsim(
    pgt_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf, PipelineError> {
    convert(pgt_path, output_path, None)
}

/// Converts a physical graph file into a topsim workflow file, relabeling first when a
/// relabeler is given.
pub fn convert(
    pgt_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    relabeler: Option<&Relabeler>,
) -> Result<PathBuf, PipelineError> {
    let graph = daliuge_to_graph(pgt_path)?;
    let graph = match relabeler {
        Some(relabeler) => relabeler.relabel(&graph)?,
        None => graph,
    };
    Ok(TopsimWorkflow::from_graph(&graph).save(output_path)?)
}

/// Produces the topsim workflow for `lgt_path` unrolled with `channels` channels.
///
/// A channel-adjusted copy of the LGT is written next to `pgt_path`, which receives the
/// translator output. The returned value is the complete simulator document.
pub fn produce_final_workflow_structure(
    lgt_path: impl AsRef<Path>,
    pgt_path: impl AsRef<Path>,
    channels: u32,
    options: &PipelineOptions,
) -> Result<serde_json::Value, PipelineError> {
    let pgt_path = pgt_path.as_ref();
    let adjusted_lgt = pgt_path.with_extension(format!("{}ch.graph", channels));

    log::info!(
        "Producing workflow for {} channel(s) via '{}'",
        channels,
        adjusted_lgt.display()
    );
    lgt::write_lgt_with_channels(lgt_path, &adjusted_lgt, channels)?;
    options.unroller.unroll(&adjusted_lgt, pgt_path)?;

    let graph = daliuge_to_graph(pgt_path)?;
    let relabeled = options.relabeler().relabel(&graph)?;
    Ok(TopsimWorkflow::from_graph(&relabeled).to_value()?)
}
