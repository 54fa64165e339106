use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::graph::Graph;

/// Computes a dominating set with the maximum-coverage greedy heuristic.
///
/// Treats domination as set cover: node `v` covers itself and its neighbors.
/// Each round picks, among the still-uncovered nodes, the one with the most
/// uncovered neighbors, adds it to the result, and marks it and its neighbors
/// as covered. Only uncovered nodes are eligible for selection. Ties go to the
/// lowest identifier.
///
/// # Arguments
/// * `graph` - The undirected graph to dominate
///
/// # Returns
/// * A set of nodes dominating `graph`; empty if the graph is empty
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use domset::graph::{greedy_dominating_set, Graph};
///
/// let graph = Graph::from_edges(0..3, [(0, 1), (1, 2)]).unwrap();
/// assert_eq!(greedy_dominating_set(&graph), BTreeSet::from([1]));
/// ```
///
/// # Complexity
/// * Time: O(V² · d) where d is the maximum degree
/// * Space: O(V)
pub fn greedy_dominating_set<V>(graph: &Graph<V>) -> BTreeSet<V>
where
    V: Ord + Copy + Debug,
{
    let mut dominating_set = BTreeSet::new();
    let mut uncovered = graph.node_set();

    // The chosen node is itself uncovered, so every round shrinks `uncovered`.
    while let Some((node, gain)) = best_uncovered_node(graph, &uncovered) {
        trace!("greedy: selected {node:?} covering {gain} uncovered neighbors");
        dominating_set.insert(node);
        uncovered.remove(&node);
        if let Ok(neighbors) = graph.neighbors(&node) {
            for neighbor in neighbors {
                uncovered.remove(neighbor);
            }
        }
    }

    debug!(
        "greedy: dominating set of size {} for {} nodes",
        dominating_set.len(),
        graph.node_count()
    );
    dominating_set
}

/// Finds the uncovered node with the most uncovered neighbors.
///
/// Returns the first maximum in ascending order, or `None` once everything is
/// covered.
fn best_uncovered_node<V>(graph: &Graph<V>, uncovered: &BTreeSet<V>) -> Option<(V, usize)>
where
    V: Ord + Copy + Debug,
{
    let mut best: Option<(V, usize)> = None;
    for &v in uncovered {
        let gain = graph
            .neighbors(&v)
            .map(|neighbors| neighbors.intersection(uncovered).count())
            .unwrap_or(0);
        match best {
            Some((_, best_gain)) if gain <= best_gain => {}
            _ => best = Some((v, gain)),
        }
    }
    best
}
