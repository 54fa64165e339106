use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::error::Result;
use crate::graph::Graph;

/// Checks whether `candidate` is a dominating set of `graph`.
///
/// A set dominates the graph when every node is either in the set or adjacent
/// to one of its members. The empty set dominates only the empty graph.
///
/// # Arguments
/// * `graph` - The graph to check against
/// * `candidate` - The node subset to test
///
/// # Returns
/// * `Ok(true)` - If every node of the graph is covered
/// * `Ok(false)` - If at least one node is left uncovered
/// * `Err(GraphError::VertexNotFound)` - If `candidate` contains a node not in the graph
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use domset::graph::{is_dominating, Graph};
///
/// let graph = Graph::from_edges(0..3, [(0, 1), (1, 2)]).unwrap();
/// assert!(is_dominating(&graph, &BTreeSet::from([1])).unwrap());
/// assert!(!is_dominating(&graph, &BTreeSet::from([0])).unwrap());
/// ```
///
/// # Complexity
/// * Time: O(|candidate| · d · log V) where d is the average degree
/// * Space: O(V)
pub fn is_dominating<V>(graph: &Graph<V>, candidate: &BTreeSet<V>) -> Result<bool>
where
    V: Ord + Copy + Debug,
{
    let covered = covered_nodes(graph, candidate)?;
    Ok(covered.len() == graph.node_count())
}

/// Returns the nodes of `graph` that `candidate` leaves uncovered.
///
/// The result is empty exactly when `candidate` dominates the graph.
pub fn undominated_nodes<V>(graph: &Graph<V>, candidate: &BTreeSet<V>) -> Result<BTreeSet<V>>
where
    V: Ord + Copy + Debug,
{
    let covered = covered_nodes(graph, candidate)?;
    Ok(graph
        .nodes()
        .filter(|v| !covered.contains(v))
        .copied()
        .collect())
}

/// Union of `candidate` and the neighborhoods of its members.
fn covered_nodes<V>(graph: &Graph<V>, candidate: &BTreeSet<V>) -> Result<BTreeSet<V>>
where
    V: Ord + Copy + Debug,
{
    let mut covered = candidate.clone();
    for v in candidate {
        covered.extend(graph.neighbors(v)?.iter().copied());
    }
    Ok(covered)
}
