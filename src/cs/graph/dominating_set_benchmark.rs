use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::error::{GraphError, Result};
use crate::graph::{
    build_graph, greedy_dominating_set, is_dominating, reduce_dominating_set, Graph,
};

/// A heuristic that produces a dominating set for a graph.
pub trait DominatingSetSolver {
    fn name(&self) -> &'static str;
    fn solve<V>(&self, graph: &Graph<V>) -> BTreeSet<V>
    where
        V: Ord + Copy + Debug;
}

/// Maximum-coverage greedy selection, see [`greedy_dominating_set`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl DominatingSetSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve<V>(&self, graph: &Graph<V>) -> BTreeSet<V>
    where
        V: Ord + Copy + Debug,
    {
        greedy_dominating_set(graph)
    }
}

/// Removal-only local search, see [`reduce_dominating_set`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearchSolver;

impl DominatingSetSolver for LocalSearchSolver {
    fn name(&self) -> &'static str {
        "local search"
    }

    fn solve<V>(&self, graph: &Graph<V>) -> BTreeSet<V>
    where
        V: Ord + Copy + Debug,
    {
        reduce_dominating_set(graph)
    }
}

/// One timed solver invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRun<V> {
    pub dominating_set: BTreeSet<V>,
    pub elapsed: Duration,
}

/// Runs `solver` once on `graph` and measures wall-clock time.
pub fn time_solver<S, V>(solver: &S, graph: &Graph<V>) -> TimedRun<V>
where
    S: DominatingSetSolver,
    V: Ord + Copy + Debug,
{
    let start = Instant::now();
    let dominating_set = solver.solve(graph);
    TimedRun {
        dominating_set,
        elapsed: start.elapsed(),
    }
}

/// Parameters of a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub node_count: usize,
    pub edge_probability: f64,
    pub repetitions: usize,
    pub seed: u64,
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::invalid_input(format!(
                "edge probability must be in [0, 1], got {}",
                self.edge_probability
            )));
        }
        if self.repetitions == 0 {
            return Err(GraphError::invalid_input(
                "benchmark needs at least one repetition",
            ));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            edge_probability: 0.3,
            repetitions: 1,
            seed: 42,
        }
    }
}

/// Averages for a single solver across all repetitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSummary {
    pub name: &'static str,
    pub average_elapsed: Duration,
    pub average_size: f64,
    /// Result of the final repetition.
    pub last_set: BTreeSet<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub last_edge_count: usize,
    pub greedy: SolverSummary,
    pub local_search: SolverSummary,
}

struct Accumulator {
    name: &'static str,
    total_elapsed: Duration,
    total_size: usize,
    last_set: BTreeSet<usize>,
}

impl Accumulator {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            total_elapsed: Duration::ZERO,
            total_size: 0,
            last_set: BTreeSet::new(),
        }
    }

    fn record(&mut self, graph: &Graph<usize>, run: TimedRun<usize>) -> Result<()> {
        if !is_dominating(graph, &run.dominating_set)? {
            return Err(GraphError::NotDominating { solver: self.name });
        }
        self.total_elapsed += run.elapsed;
        self.total_size += run.dominating_set.len();
        self.last_set = run.dominating_set;
        Ok(())
    }

    fn summarize(self, repetitions: usize) -> SolverSummary {
        let divisor = u32::try_from(repetitions).unwrap_or(u32::MAX);
        SolverSummary {
            name: self.name,
            average_elapsed: self.total_elapsed / divisor,
            average_size: self.total_size as f64 / repetitions as f64,
            last_set: self.last_set,
        }
    }
}

/// Compares both solvers on freshly generated random graphs.
///
/// Each repetition draws a new G(n, p) graph from a `ChaCha20Rng` seeded with
/// `config.seed`, runs both solvers on it, and checks that both results
/// dominate the graph.
///
/// # Errors
/// * `InvalidInput` if the configuration is invalid
/// * `NotDominating` if a solver returns a set that does not dominate its graph
///
/// # Examples
/// ```
/// use domset::graph::{run_benchmark, BenchmarkConfig};
///
/// let report = run_benchmark(&BenchmarkConfig::default()).unwrap();
/// assert_eq!(report.greedy.name, "greedy");
/// ```
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    config.validate()?;

    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let mut greedy = Accumulator::new(GreedySolver.name());
    let mut local_search = Accumulator::new(LocalSearchSolver.name());
    let mut last_edge_count = 0;

    for repetition in 0..config.repetitions {
        let graph = build_graph(config.node_count, config.edge_probability, &mut rng)?;
        last_edge_count = graph.edge_count();

        greedy.record(&graph, time_solver(&GreedySolver, &graph))?;
        local_search.record(&graph, time_solver(&LocalSearchSolver, &graph))?;

        info!(
            "repetition {}/{}: {} nodes, {} edges, greedy size {}, local search size {}",
            repetition + 1,
            config.repetitions,
            graph.node_count(),
            last_edge_count,
            greedy.last_set.len(),
            local_search.last_set.len()
        );
    }

    Ok(BenchmarkReport {
        config: config.clone(),
        last_edge_count,
        greedy: greedy.summarize(config.repetitions),
        local_search: local_search.summarize(config.repetitions),
    })
}

impl fmt::Display for SolverSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Time to complete {} algorithm: {:.6} seconds",
            self.name,
            self.average_elapsed.as_secs_f64()
        )?;
        writeln!(f, "Average {} set size: {:.2}", self.name, self.average_size)?;
        write!(f, "Dominating set ({}): {:?}", self.name, self.last_set)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} nodes, edge probability {}, {} repetition(s), seed {}",
            self.config.node_count,
            self.config.edge_probability,
            self.config.repetitions,
            self.config.seed
        )?;
        writeln!(f, "Last graph: {} edges", self.last_edge_count)?;
        writeln!(f, "{}", self.greedy)?;
        write!(f, "{}", self.local_search)
    }
}
