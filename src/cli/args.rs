// src/cli/args.rs
use crate::config::RankMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rankpath",
    version,
    about = "Shortest paths, spanning forests and PageRank over entity graphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Configuration file (defaults to ./rankpath.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Show debug diagnostics and every canvas update
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank entities with the Markov-chain random-walk model
    Rank(RankArgs),
    /// Find the cheapest path between two nodes
    Path(PathArgs),
    /// Compute a minimum spanning forest
    Forest(ForestArgs),
}

/// How an input file describes connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildMode {
    /// Alternating subject / comma-separated reference lines (directed)
    #[default]
    References,
    /// Space-separated groups of co-occurring entities (bidirectional)
    Cooccurrence,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GraphSource {
    /// Newline-delimited list of valid entity names
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub entities: Option<PathBuf>,
    /// Connection data to build the graph from
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = BuildMode::References)]
    pub mode: BuildMode,
    /// Extra names to exclude, one per line
    #[arg(long, value_name = "FILE")]
    pub exclude: Option<PathBuf>,
    /// Generate a random geometric graph instead of reading files
    #[arg(long)]
    pub random: bool,
    /// Seed for the random graph
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
    /// Exact node count for the random graph
    #[arg(long, requires = "random")]
    pub nodes: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub source: GraphSource,
    /// Teleportation probability
    #[arg(long)]
    pub damping: Option<f64>,
    /// Number of rounds
    #[arg(long)]
    pub iterations: Option<usize>,
    /// Entries to report
    #[arg(long)]
    pub top: Option<usize>,
    /// Stop once the distance diagnostic drops to or below this value
    #[arg(long)]
    pub tolerance: Option<f64>,
    #[arg(long, value_enum)]
    pub rank_mode: Option<RankMode>,
    /// Print the ranking after every round. Rounds are always recorded
    /// (and included in `--json`); without this flag only the final
    /// ranking and the distance per round are printed.
    #[arg(long)]
    pub every_round: bool,
    /// Emit the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub source: GraphSource,
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct ForestArgs {
    #[command(flatten)]
    pub source: GraphSource,
}
