use crate::relevance::Metric;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "speclink",
    version,
    about = "Document link graph and relevance ground truth"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./speclink.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// List unmatched references and progress details
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the link graph of a corpus and save it as JSON
    Extract {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        matching: MatchingArgs,
    },
    /// Recompute links from the (edited) references of a link-graph file
    Relink {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        matching: MatchingArgs,
    },
    /// Score a link-graph file and write matrix and ground truth
    Score {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(long, short, value_name = "DIR", default_value = "relevance_results")]
        output: PathBuf,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Extract and score a corpus in one run
    Run {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        #[arg(long, short, value_name = "DIR", default_value = "relevance_results")]
        output: PathBuf,
        #[command(flatten)]
        matching: MatchingArgs,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Print the ground-truth entry of one document
    Truth {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(long, short, value_name = "ID")]
        query: String,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct MatchingArgs {
    /// Minimum similarity for a fuzzy match
    #[arg(long, value_name = "RATIO")]
    pub similarity: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,
    /// Minimum relevance for a document to count as relevant
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Keep at most this many relevant documents per query
    #[arg(long, conflicts_with = "no_top_k")]
    pub top_k: Option<usize>,
    /// Keep every relevant document
    #[arg(long)]
    pub no_top_k: bool,
}
