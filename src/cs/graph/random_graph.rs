use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Generates an Erdős–Rényi random graph G(n, p).
///
/// Nodes are `0..node_count`. Every unordered pair `(i, j)` with `i < j` is
/// visited in lexicographic order and joined with probability
/// `edge_probability`, one draw per pair, so a seeded RNG always yields the
/// same graph.
///
/// # Arguments
/// - `node_count`: Number of nodes.
/// - `edge_probability`: Probability of each edge, in `[0, 1]`.
/// - `rng`: Source of randomness.
///
/// # Errors
/// * `InvalidInput` if `edge_probability` is outside `[0, 1]` or NaN
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use domset::graph::build_graph;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let graph = build_graph(10, 0.3, &mut rng).unwrap();
/// assert_eq!(graph.node_count(), 10);
/// ```
pub fn build_graph<R>(node_count: usize, edge_probability: f64, rng: &mut R) -> Result<Graph<usize>>
where
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(GraphError::invalid_input(format!(
            "edge probability must be in [0, 1], got {edge_probability}"
        )));
    }

    let mut graph = Graph::with_nodes(0..node_count);
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                graph.add_edge(i, j)?;
            }
        }
    }
    Ok(graph)
}
