use clap::Parser;
use domset::graph::{run_benchmark, BenchmarkConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Compare greedy and local-search dominating sets on random graphs
#[derive(Parser, Debug)]
#[command(name = "compare_dominating_sets")]
#[command(about = "Times greedy and local-search dominating set heuristics", long_about = None)]
struct Args {
    /// Number of nodes in each random graph
    #[arg(short, long, default_value_t = 10)]
    nodes: usize,

    /// Probability of an edge between any two nodes
    #[arg(short, long, default_value_t = 0.3)]
    edge_probability: f64,

    /// Number of random graphs to average over
    #[arg(short, long, default_value_t = 1)]
    repetitions: usize,

    /// Seed for the graph generator
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

impl From<Args> for BenchmarkConfig {
    fn from(args: Args) -> Self {
        BenchmarkConfig {
            node_count: args.nodes,
            edge_probability: args.edge_probability,
            repetitions: args.repetitions,
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = BenchmarkConfig::from(Args::parse());
    match run_benchmark(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
