use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use topsim_pipelines::prelude::*;

/// Converts EAGLE/DALiuGE workflow graphs into topsim simulator workflows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Unroll an EAGLE logical graph template into a physical graph with `dlg`
    Unroll {
        /// Path to the logical graph template
        lgt_path: PathBuf,
        /// Where to write the physical graph JSON
        output: PathBuf,
        #[command(flatten)]
        translator: TranslatorArgs,
    },
    /// Convert an unrolled physical graph into a topsim workflow file
    Convert {
        /// Path to the physical graph JSON
        pgt_path: PathBuf,
        /// Where to write the topsim workflow JSON
        output: PathBuf,
        /// Keep the DALiuGE oids instead of relabeling nodes
        #[arg(long)]
        keep_ids: bool,
        #[command(flatten)]
        relabel: RelabelArgs,
        /// Also draw the resulting graph to this dot file
        #[arg(long)]
        dot: Option<PathBuf>,
    },
    /// Draw an unrolled physical graph as a Graphviz dot file
    Dot {
        /// Path to the physical graph JSON
        pgt_path: PathBuf,
        /// Where to write the dot file
        output: PathBuf,
    },
    /// Set the number of channels (Scatter copies) of a logical graph template in place
    Channels {
        /// Path to the logical graph template
        lgt_path: PathBuf,
        /// Number of channels
        channels: u32,
    },
    /// Run the whole chain: channels, unroll, parse, relabel and export
    Pipeline {
        /// Path to the logical graph template
        lgt_path: PathBuf,
        /// Where to write the intermediate physical graph JSON
        pgt_path: PathBuf,
        /// Where to write the topsim workflow JSON
        output: PathBuf,
        /// Number of channels
        #[arg(short, long, default_value_t = 1)]
        channels: u32,
        #[command(flatten)]
        translator: TranslatorArgs,
        #[command(flatten)]
        relabel: RelabelArgs,
    },
}

#[derive(Args, Debug)]
struct TranslatorArgs {
    /// The translator executable
    #[arg(long, default_value = "dlg")]
    dlg: String,
}

#[derive(Args, Debug)]
struct RelabelArgs {
    /// Prefix of the relabeled node ids
    #[arg(short, long, default_value = "T")]
    prefix: String,

    /// Mean computation cost; enables synthetic cost generation
    #[arg(long)]
    mean: Option<f64>,

    /// Half-width of the uniform distribution around the mean
    #[arg(long, default_value_t = 0.0)]
    range: f64,

    /// Computation-to-communication ratio
    #[arg(long, default_value_t = 1.0)]
    ccr: f64,

    /// Scales every generated computation cost
    #[arg(long, default_value_t = 1.0)]
    multiplier: f64,

    /// Make data transfer dominate computation
    #[arg(long)]
    data_intensive: bool,

    /// Seed for the cost generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl RelabelArgs {
    fn cost_model(&self) -> Option<CostModel> {
        self.mean.map(|mean| {
            CostModel::new(mean, self.range, self.ccr)
                .with_multiplier(self.multiplier)
                .data_intensive(self.data_intensive)
                .with_seed(self.seed)
        })
    }

    fn relabeler(&self) -> Relabeler {
        let relabeler = Relabeler::new(self.prefix.clone());
        match self.cost_model() {
            Some(costs) => relabeler.with_costs(costs),
            None => relabeler,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let start = Instant::now();
    if let Err(e) = run(cli.command) {
        exit_with_error(&e.to_string());
    }
    log::info!("Finished in {:?}", start.elapsed());
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Unroll {
            lgt_path,
            output,
            translator,
        } => {
            let unroller = Unroller::builder().program(translator.dlg).build();
            let path = unroller.unroll(&lgt_path, &output)?;
            println!("Physical graph written to '{}'", path.display());
        }
        Command::Convert {
            pgt_path,
            output,
            keep_ids,
            relabel,
            dot,
        } => {
            let graph = daliuge_to_graph(&pgt_path)?;
            let graph = if keep_ids {
                graph
            } else {
                relabel.relabeler().relabel(&graph)?
            };
            let path = TopsimWorkflow::from_graph(&graph).save(&output)?;
            println!(
                "Topsim workflow with {} nodes and {} edges written to '{}'",
                graph.node_count(),
                graph.edge_count(),
                path.display()
            );
            if let Some(dot_path) = dot {
                write_dot(&graph, &dot_path)?;
                println!("Dot graph written to '{}'", dot_path.display());
            }
        }
        Command::Dot { pgt_path, output } => {
            let graph = daliuge_to_graph(&pgt_path)?;
            let path = write_dot(&graph, &output)?;
            println!("Dot graph written to '{}'", path.display());
        }
        Command::Channels { lgt_path, channels } => {
            let path = update_number_of_channels(&lgt_path, channels)?;
            println!("Set {} channel(s) in '{}'", channels, path.display());
        }
        Command::Pipeline {
            lgt_path,
            pgt_path,
            output,
            channels,
            translator,
            relabel,
        } => {
            let options = PipelineOptions {
                unroller: Unroller::builder().program(translator.dlg).build(),
                prefix: relabel.prefix.clone(),
                costs: relabel.cost_model(),
            };
            let workflow =
                produce_final_workflow_structure(&lgt_path, &pgt_path, channels, &options)?;
            let json = serde_json::to_string_pretty(&workflow)?;
            std::fs::write(&output, json)?;
            println!("Topsim workflow written to '{}'", output.display());
        }
    }
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
