pub mod adjacency;
pub mod dominating_set_benchmark;
pub mod domination;
pub mod greedy_dominating_set;
pub mod local_search_dominating_set;
pub mod random_graph;

#[cfg(test)]
mod tests;

pub use adjacency::Graph;
pub use dominating_set_benchmark::{
    run_benchmark, time_solver, BenchmarkConfig, BenchmarkReport, DominatingSetSolver,
    GreedySolver, LocalSearchSolver, SolverSummary, TimedRun,
};
pub use domination::{is_dominating, undominated_nodes};
pub use greedy_dominating_set::greedy_dominating_set;
pub use local_search_dominating_set::reduce_dominating_set;
pub use random_graph::build_graph;
