use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::graph::{is_dominating, Graph};

/// Reduces the full node set to a minimal dominating set.
///
/// Starts from every node of the graph, which trivially dominates it, and
/// repeatedly removes the first member (in ascending order) whose removal
/// keeps the set dominating. The scan restarts after every removal and the
/// search stops once a full scan finds nothing removable.
///
/// The result is minimal, meaning no single node can be dropped from it, but it
/// is not necessarily a minimum dominating set.
///
/// # Arguments
/// * `graph` - The undirected graph to dominate
///
/// # Returns
/// * A minimal dominating set of `graph`; empty if the graph is empty
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use domset::graph::{reduce_dominating_set, Graph};
///
/// let graph = Graph::from_edges(0..4, [(0, 1), (2, 3)]).unwrap();
/// assert_eq!(reduce_dominating_set(&graph), BTreeSet::from([1, 3]));
/// ```
///
/// # Complexity
/// * Time: O(V³ · d) worst case: up to V removals, each after a scan of up to
///   V domination checks
/// * Space: O(V)
pub fn reduce_dominating_set<V>(graph: &Graph<V>) -> BTreeSet<V>
where
    V: Ord + Copy + Debug,
{
    let mut dominating_set = graph.node_set();
    let mut removals = 0usize;

    while let Some(node) = first_removable(graph, &dominating_set) {
        trace!("local search: removed redundant node {node:?}");
        dominating_set.remove(&node);
        removals += 1;
    }

    debug!(
        "local search: dominating set of size {} after {} removals",
        dominating_set.len(),
        removals
    );
    dominating_set
}

/// Returns the first member of `dominating_set` that can be dropped while the
/// remainder still dominates `graph`.
fn first_removable<V>(graph: &Graph<V>, dominating_set: &BTreeSet<V>) -> Option<V>
where
    V: Ord + Copy + Debug,
{
    let mut trial = dominating_set.clone();
    for &node in dominating_set {
        trial.remove(&node);
        // Members always come from the graph, so the check cannot fail.
        if is_dominating(graph, &trial).unwrap_or(false) {
            return Some(node);
        }
        trial.insert(node);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_minimal(graph: &Graph<u32>, set: &BTreeSet<u32>) {
        assert!(is_dominating(graph, set).unwrap());
        for node in set {
            let mut smaller = set.clone();
            smaller.remove(node);
            assert!(
                !is_dominating(graph, &smaller).unwrap(),
                "{node} could still be removed from {set:?}"
            );
        }
    }

    #[test]
    fn test_reduce_path_of_three() {
        let graph = Graph::from_edges(0..3, [(0, 1), (1, 2)]).unwrap();
        let result = reduce_dominating_set(&graph);
        assert_eq!(result, BTreeSet::from([1]));
        assert_minimal(&graph, &result);
    }

    #[test]
    fn test_reduce_two_disjoint_edges() {
        let graph = Graph::from_edges(0..4, [(0, 1), (2, 3)]).unwrap();
        let result = reduce_dominating_set(&graph);
        assert_eq!(result.len(), 2);
        assert_minimal(&graph, &result);
    }

    #[test]
    fn test_reduce_isolated_nodes() {
        let graph: Graph<u32> = Graph::with_nodes(0..5);
        assert_eq!(reduce_dominating_set(&graph), graph.node_set());
    }

    #[test]
    fn test_reduce_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(reduce_dominating_set(&graph).is_empty());
    }

    #[test]
    fn test_reduce_complete_graph_keeps_one_node() {
        let edges = (0..5u32).flat_map(|u| (u + 1..5).map(move |v| (u, v)));
        let graph = Graph::from_edges(0..5, edges).unwrap();
        let result = reduce_dominating_set(&graph);
        // Lower nodes are dropped first, so the survivor is the highest one
        assert_eq!(result, BTreeSet::from([4]));
    }

    #[test]
    fn test_reduce_result_is_minimal_on_cycle() {
        let graph = Graph::from_edges(
            0..7,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 0)],
        )
        .unwrap();
        let result = reduce_dominating_set(&graph);
        assert_minimal(&graph, &result);
        assert_eq!(result, reduce_dominating_set(&graph));
    }
}
