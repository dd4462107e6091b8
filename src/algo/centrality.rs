/*!
Spectral centralities computed by power iteration.

Both measures repeatedly apply a linear operator to a score vector until two consecutive iterates
are close or an iteration cap is reached. Scores are propagated along arcs `u -> v`, i.e. along
the adjacency lists; for undirected graphs this is the plain adjacency matrix.
*/

use tracing::debug;

use super::*;

/// Squared euclidean distance between two score vectors
fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Configuration shared by all power iterations
#[derive(Debug, Clone, Copy)]
pub struct PowerIteration {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl PowerIteration {
    /// Creates the default configuration (tolerance `1e-6`, at most 100 iterations)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence threshold on the (squared) distance of consecutive iterates
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Eigenvector centrality: starts from all ones, computes `next[v] = Σ_{u -> v} curr[u]`
    /// and L2-normalizes. Stops once the squared distance of consecutive iterates is at most the
    /// tolerance. A graph without edges yields all zeros.
    pub fn eigenvector<G>(&self, graph: &G) -> Vec<f64>
    where
        G: AdjacencyList,
    {
        let n = graph.len();
        if graph.vertices_with_neighbors().next().is_none() {
            return vec![0.0; n];
        }

        let mut curr = vec![1.0; n];
        let mut next = vec![0.0; n];

        for iteration in 1..=self.max_iterations {
            next.fill(0.0);
            for u in graph.vertices() {
                let score = curr[u as usize];
                for v in graph.neighbors_of(u) {
                    next[v as usize] += score;
                }
            }

            let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm == 0.0 {
                // all mass left the graph (e.g. along a DAG)
                return vec![0.0; n];
            }
            next.iter_mut().for_each(|x| *x /= norm);

            let distance = squared_distance(&curr, &next);
            std::mem::swap(&mut curr, &mut next);
            if distance <= self.tolerance {
                debug!(iteration, "eigenvector centrality converged");
                break;
            }
        }

        curr
    }

    /// PageRank with damping factor `alpha`: starts from `1/n` and computes
    /// `next[v] = (1 - alpha) / n + alpha * Σ_{u -> v} curr[u] / outdeg(u)`.
    /// Stops once `n` times the squared distance of consecutive iterates is at most the
    /// tolerance, or after the iteration cap.
    ///
    /// ** Panics if `alpha` is not in `[0, 1]` **
    pub fn pagerank<G>(&self, graph: &G, alpha: f64) -> Vec<f64>
    where
        G: AdjacencyList,
    {
        assert!(
            (0.0..=1.0).contains(&alpha),
            "damping factor {alpha} is not a probability"
        );

        let n = graph.len();
        if n == 0 {
            return Vec::new();
        }

        let teleport = (1.0 - alpha) / n as f64;
        let mut curr = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        for iteration in 1..=self.max_iterations {
            next.fill(teleport);
            for u in graph.vertices() {
                let degree = graph.degree_of(u);
                if degree == 0 {
                    continue;
                }
                let share = alpha * curr[u as usize] / degree as f64;
                for v in graph.neighbors_of(u) {
                    next[v as usize] += share;
                }
            }

            let distance = squared_distance(&curr, &next);
            std::mem::swap(&mut curr, &mut next);
            if n as f64 * distance <= self.tolerance {
                debug!(iteration, "pagerank converged");
                break;
            }
        }

        curr
    }
}

/// Exposes the spectral centralities with the default [`PowerIteration`] directly on graphs
pub trait SpectralCentrality: AdjacencyList + Sized {
    /// See [`PowerIteration::eigenvector`]
    fn eigenvector_centrality(&self) -> Vec<f64> {
        PowerIteration::new().eigenvector(self)
    }

    /// See [`PowerIteration::pagerank`]
    fn pagerank(&self, alpha: f64) -> Vec<f64> {
        PowerIteration::new().pagerank(self, alpha)
    }
}

impl<G> SpectralCentrality for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};

    fn tight() -> PowerIteration {
        PowerIteration::new().tolerance(1e-24).max_iterations(10_000)
    }

    #[test]
    fn eigenvector_of_regular_graphs_is_uniform() {
        for graph in [Graph::complete(6).unwrap(), Graph::cycle(7).unwrap()] {
            let n = graph.len();
            let expected = vec![1.0 / (n as f64).sqrt(); n];
            assert_all_close(&graph.eigenvector_centrality(), &expected, 1e-12);
        }
    }

    #[test]
    fn eigenvector_without_edges() {
        assert_eq!(Graph::new(4, false).eigenvector_centrality(), vec![0.0; 4]);
        assert!(Graph::new(0, false).eigenvector_centrality().is_empty());

        // every walk along a DAG dies out
        let dag = Graph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(dag.eigenvector_centrality(), vec![0.0; 3]);
    }

    #[test]
    fn eigenvector_is_fixed_point() {
        let graph = reference_graph(false);
        let x = tight().eigenvector(&graph);

        let norm: f64 = x.iter().map(|v| v * v).sum();
        assert!((norm - 1.0).abs() < 1e-9);

        let mut ax = vec![0.0; x.len()];
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                ax[v as usize] += x[u as usize];
            }
        }
        let lambda = ax.iter().map(|v| v * v).sum::<f64>().sqrt();
        let scaled: Vec<f64> = x.iter().map(|v| v * lambda).collect();
        assert_all_close(&ax, &scaled, 1e-8);

        // the hub of the reference graph scores highest, the pendant vertex lowest
        let best = (0..8).max_by(|&a, &b| x[a].total_cmp(&x[b])).unwrap();
        let worst = (0..8).min_by(|&a, &b| x[a].total_cmp(&x[b])).unwrap();
        assert_eq!(worst, 7);
        assert_eq!(best, 3);
    }

    #[test]
    fn default_configuration() {
        let config = PowerIteration::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn pagerank_uniform_cases() {
        let cycle = Graph::cycle(10).unwrap();
        assert_all_close(&cycle.pagerank(0.85), &[0.1; 10], 1e-12);

        let graph = reference_graph(false);
        assert_all_close(&graph.pagerank(0.0), &[0.125; 8], 1e-15);

        let capped = PowerIteration::new().max_iterations(0).pagerank(&graph, 0.85);
        assert_all_close(&capped, &[0.125; 8], 0.0);
        assert!(Graph::new(0, true).pagerank(0.5).is_empty());
    }

    #[test]
    fn pagerank_is_fixed_point() {
        let graph = reference_graph(false);
        let alpha = 0.85;
        let rank = tight().pagerank(&graph, alpha);

        assert!((rank.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let mut expected = vec![(1.0 - alpha) / 8.0; 8];
        for u in graph.vertices() {
            let share = alpha * rank[u as usize] / graph.degree_of(u) as f64;
            for v in graph.neighbors_of(u) {
                expected[v as usize] += share;
            }
        }
        assert_all_close(&rank, &expected, 1e-10);
    }

    #[test]
    fn pagerank_favors_sinks_of_many_arcs() {
        let mut graph = Graph::new(6, true);
        for leaf in 1..6 {
            graph.add_edge(leaf, 0).unwrap();
        }
        graph.add_edge(0, 1).unwrap();

        let rank = graph.pagerank(0.85);
        assert!(rank[0] > rank[1]);
        assert!(rank[1] > rank[2]);
        assert!((rank[2] - rank[5]).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn pagerank_rejects_invalid_damping() {
        reference_graph(false).pagerank(1.5);
    }
}
