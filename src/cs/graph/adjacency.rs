use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::error::{GraphError, Result};

/// An undirected, unweighted graph stored as adjacency sets.
///
/// Nodes and neighbor sets are kept in `BTree` containers so every traversal
/// runs in ascending identifier order. The constructors guarantee that the
/// adjacency relation is symmetric, has no self-loops, and only refers to
/// nodes of the graph.
///
/// # Examples
/// ```
/// use domset::graph::Graph;
///
/// let graph = Graph::from_edges(0..3, [(0, 1), (1, 2)]).unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.neighbors(&1).unwrap().contains(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V> Graph<V>
where
    V: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        Graph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Creates a graph of isolated nodes.
    pub fn with_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Graph::new();
        for v in nodes {
            graph.add_node(v);
        }
        graph
    }

    /// Builds a graph from a node list and an undirected edge list.
    ///
    /// Edge endpoints missing from `nodes` are added.
    ///
    /// # Errors
    /// * `InvalidInput` if an edge is a self-loop
    pub fn from_edges<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Graph::with_nodes(nodes);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a `node -> neighbors` mapping.
    ///
    /// The mapping must already describe an undirected graph: every neighbor
    /// must be a key, and `v` listing `u` requires `u` to list `v`.
    ///
    /// # Errors
    /// * `InvalidInput` if a node lists itself or the mapping is asymmetric
    /// * `VertexNotFound` if a neighbor is not a key of the mapping
    pub fn from_adjacency(adjacency: BTreeMap<V, BTreeSet<V>>) -> Result<Self> {
        for (u, neighbors) in &adjacency {
            for v in neighbors {
                if u == v {
                    return Err(GraphError::invalid_input(format!(
                        "self-loop on node {u:?}"
                    )));
                }
                match adjacency.get(v) {
                    None => return Err(GraphError::VertexNotFound),
                    Some(back) if !back.contains(u) => {
                        return Err(GraphError::invalid_input(format!(
                            "asymmetric adjacency: {u:?} lists {v:?} but {v:?} does not list {u:?}"
                        )));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(Graph { adjacency })
    }

    /// Adds an isolated node. Existing nodes are left untouched.
    pub fn add_node(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// Adds the undirected edge `u - v`, inserting missing endpoints.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<()> {
        if u == v {
            return Err(GraphError::invalid_input(format!(
                "self-loop on node {u:?}"
            )));
        }
        self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        Ok(())
    }

    /// Returns the nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn node_set(&self) -> BTreeSet<V> {
        self.adjacency.keys().copied().collect()
    }

    pub fn neighbors(&self, v: &V) -> Result<&BTreeSet<V>> {
        self.adjacency.get(v).ok_or(GraphError::VertexNotFound)
    }

    pub fn degree(&self, v: &V) -> Result<usize> {
        self.neighbors(v).map(BTreeSet::len)
    }

    pub fn has_node(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V> Default for Graph<V>
where
    V: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
