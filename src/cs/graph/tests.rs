use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeSet;

use crate::graph::{
    build_graph, greedy_dominating_set, is_dominating, reduce_dominating_set, Graph,
};

fn random_graphs() -> Vec<Graph<usize>> {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    let mut graphs = Vec::new();
    for &node_count in &[1, 2, 5, 10, 25] {
        for &edge_probability in &[0.0, 0.1, 0.3, 0.7, 1.0] {
            graphs.push(build_graph(node_count, edge_probability, &mut rng).unwrap());
        }
    }
    graphs
}

#[test]
fn test_greedy_always_dominates() {
    for graph in random_graphs() {
        let result = greedy_dominating_set(&graph);
        assert!(is_dominating(&graph, &result).unwrap(), "{graph:?}");
    }
}

#[test]
fn test_reduce_always_dominates_and_is_minimal() {
    for graph in random_graphs() {
        let result = reduce_dominating_set(&graph);
        assert!(is_dominating(&graph, &result).unwrap(), "{graph:?}");
        for node in &result {
            let mut smaller = result.clone();
            smaller.remove(node);
            assert!(!is_dominating(&graph, &smaller).unwrap());
        }
    }
}

#[test]
fn test_full_set_dominates_and_empty_set_only_dominates_empty_graph() {
    for graph in random_graphs() {
        assert!(is_dominating(&graph, &graph.node_set()).unwrap());
        assert_eq!(
            is_dominating(&graph, &BTreeSet::new()).unwrap(),
            graph.is_empty()
        );
    }
}

#[test]
fn test_algorithms_are_deterministic() {
    for graph in random_graphs() {
        assert_eq!(greedy_dominating_set(&graph), greedy_dominating_set(&graph));
        assert_eq!(reduce_dominating_set(&graph), reduce_dominating_set(&graph));
    }
}

#[test]
fn test_relabeling_keeps_results_valid() {
    // Reversing identifiers changes tie-breaks but never validity
    for graph in random_graphs() {
        let top = graph.node_count();
        let mut relabeled = Graph::with_nodes(graph.nodes().map(|&v| top - v));
        for &u in graph.nodes() {
            for &v in graph.neighbors(&u).unwrap() {
                relabeled.add_edge(top - u, top - v).unwrap();
            }
        }
        assert!(is_dominating(&relabeled, &greedy_dominating_set(&relabeled)).unwrap());
        assert!(is_dominating(&relabeled, &reduce_dominating_set(&relabeled)).unwrap());
    }
}

#[test]
fn test_scenarios_agree_across_algorithms() {
    let two_edges = Graph::from_edges(0..4, [(0, 1), (2, 3)]).unwrap();
    assert_eq!(greedy_dominating_set(&two_edges).len(), 2);
    assert_eq!(reduce_dominating_set(&two_edges).len(), 2);

    let isolated: Graph<usize> = Graph::with_nodes(0..5);
    assert_eq!(greedy_dominating_set(&isolated).len(), 5);
    assert_eq!(reduce_dominating_set(&isolated).len(), 5);

    let empty: Graph<usize> = Graph::new();
    assert!(greedy_dominating_set(&empty).is_empty());
    assert!(reduce_dominating_set(&empty).is_empty());
    assert!(is_dominating(&empty, &BTreeSet::new()).unwrap());
}

#[test]
fn test_graph_shared_across_threads() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let graph = build_graph(30, 0.2, &mut rng).unwrap();

    let (greedy, reduced) = std::thread::scope(|s| {
        let greedy = s.spawn(|| greedy_dominating_set(&graph));
        let reduced = s.spawn(|| reduce_dominating_set(&graph));
        (greedy.join().unwrap(), reduced.join().unwrap())
    });

    assert_eq!(greedy, greedy_dominating_set(&graph));
    assert_eq!(reduced, reduce_dominating_set(&graph));
}
