//! Shared fixtures for unit tests

use rand::Rng;

use crate::{ops::*, repr::Graph, *};

/// Edges of the 8-vertex graph used to cross-check most metrics.
/// It is connected, has diameter 4 (between 0 and 7) and contains three triangles.
pub(crate) const REFERENCE_EDGES: [(Node, Node); 12] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 4),
    (2, 5),
    (3, 4),
    (3, 5),
    (3, 6),
    (4, 6),
    (5, 6),
    (6, 7),
];

/// The reference graph on 8 vertices
pub(crate) fn reference_graph(directed: bool) -> Graph {
    Graph::from_edges(8, directed, REFERENCE_EDGES).unwrap()
}

/// Pairwise hop distances of the undirected reference graph
pub(crate) const REFERENCE_DISTANCES: [[NumNodes; 8]; 8] = [
    [0, 1, 1, 2, 2, 2, 3, 4],
    [1, 0, 1, 1, 2, 2, 2, 3],
    [1, 1, 0, 2, 1, 1, 2, 3],
    [2, 1, 2, 0, 1, 1, 1, 2],
    [2, 2, 1, 1, 0, 2, 1, 2],
    [2, 2, 1, 1, 2, 0, 1, 2],
    [3, 2, 2, 1, 1, 1, 0, 1],
    [4, 3, 3, 2, 2, 2, 1, 0],
];

/// Creates a graph with at most `m` random edges (without self-loops) on `n` vertices
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges, directed: bool) -> Graph {
    let mut graph = Graph::new(n, directed);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            graph.add_edge(u, v).unwrap();
        }
    }
    graph
}

/// Asserts that both slices agree entry-wise up to an absolute error of `eps`
pub(crate) fn assert_all_close(actual: &[f64], expected: &[f64], eps: f64) {
    assert_eq!(actual.len(), expected.len(), "lengths differ");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= eps,
            "entry {i}: {a} differs from {e} by more than {eps}\nactual: {actual:?}"
        );
    }
}
