use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use graphkit::export::{ExportFormat, RenderSink, WriterSink};
use graphkit::graph::{EdgeMode, Graph, GraphKind};

#[derive(Parser)]
#[command(name = "graphkit")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Build graphs from intervals and run classical graph algorithms on them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command that builds a graph.
#[derive(Args)]
struct GraphOptions {
    /// Node interval, e.g. "a-f" or "1-20"
    interval: String,

    /// How to connect the nodes: random or circular
    #[arg(short, long, default_value = "circular")]
    mode: EdgeMode,

    /// Build an undirected graph
    #[arg(short, long)]
    undirected: bool,

    /// Seed for random edge generation
    #[arg(short, long)]
    seed: Option<u64>,
}

impl GraphOptions {
    fn build(&self) -> Result<Graph> {
        let kind = if self.undirected {
            GraphKind::Undirected
        } else {
            GraphKind::Directed
        };

        let graph = match self.seed {
            Some(seed) => Graph::from_interval_with_rng(
                &self.interval,
                self.mode,
                kind,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Graph::from_interval(&self.interval, self.mode, kind),
        };

        graph.with_context(|| format!("Failed to build graph from '{}'", self.interval))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a graph and export it for rendering
    Generate {
        #[command(flatten)]
        graph: GraphOptions,

        /// Output format: json, csv, markdown or dot
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },
    /// Generate a graph and print the results of every analysis
    Analyze {
        #[command(flatten)]
        graph: GraphOptions,
    },
    /// Show version information
    Version,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn analyze(mut graph: Graph) -> Result<()> {
    println!("{}", graph);
    println!();

    println!("kind:      {}", graph.kind());
    println!("connected: {}", graph.is_connected());
    println!("cyclic:    {}", graph.is_cyclic());
    println!("euler:     {}", graph.eulerian());
    if let (Some(min), Some(max)) = (graph.min_rank(), graph.max_rank()) {
        println!("rank:      min {} / max {} (regular: {})", min, max, graph.is_regular());
    }

    if let Some(first) = graph.nodes().first().cloned() {
        println!("dfs({}):    {}", first, graph.dfs(&first)?.join(" "));
        println!("bfs({}):    {}", first, graph.bfs(&first)?.join(" "));
    }

    println!();
    println!("coloring:");
    for (node, color) in graph.greedy_coloring().iter() {
        println!("    {} -> {}", node, color);
    }

    match graph.floyd_warshall() {
        Ok(distances) => {
            println!();
            println!("shortest paths:");
            println!("{}", distances);
        }
        Err(e) => tracing::info!("skipping shortest paths: {}", e),
    }

    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { graph, format }) => {
            let graph = graph.build()?;
            let mut sink = WriterSink::new(format, io::stdout().lock());
            sink.render(&graph.render_data())
                .context("Failed to write graph")?;
        }
        Some(Commands::Analyze { graph }) => {
            analyze(graph.build()?)?;
        }
        Some(Commands::Version) => {
            println!("graphkit v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("graphkit - graphs and graph algorithms");
            println!("Run 'graphkit generate a-f' to build and export a graph");
            println!("Run 'graphkit analyze 1-6 --mode random' to analyze one");
            println!("Run 'graphkit --help' for more information");
        }
    }

    Ok(())
}
