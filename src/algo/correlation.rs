/*!
Degree correlation measures.

All measures use the (out-)degree as reported by [`AdjacencyList::degree_of`] and consider every
adjacency entry, i.e. each undirected edge is seen from both of its endpoints.
*/

use super::*;

/// Joint degree matrix: entry `(ki, kj)` counts the adjacency entries `u -> v` with
/// `deg(u) = ki` and `deg(v) = kj`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeMatrix {
    dim: usize,
    entries: Vec<u64>,
}

impl DegreeMatrix {
    /// Number of rows (and columns), i.e. the maximum degree plus one
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// ** Panics if `ki` or `kj` exceed the maximum degree **
    pub fn get(&self, ki: NumNodes, kj: NumNodes) -> u64 {
        assert!((ki as usize) < self.dim && (kj as usize) < self.dim);
        self.entries[ki as usize * self.dim + kj as usize]
    }

    /// Returns row `ki`
    pub fn row(&self, ki: NumNodes) -> &[u64] {
        let start = ki as usize * self.dim;
        &self.entries[start..start + self.dim]
    }
}

/// Average of `values` (`0.0` for an empty iterator)
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), x| (s + x, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Correlations between the degrees of adjacent vertices
pub trait DegreeCorrelation: AdjacencyList + Sized {
    /// Computes the joint degree matrix of dimension `max_degree + 1`
    fn degree_matrix(&self) -> DegreeMatrix {
        let dim = self.max_degree() as usize + 1;
        let mut entries = vec![0u64; dim * dim];
        for u in self.vertices() {
            let row = self.degree_of(u) as usize * dim;
            for v in self.neighbors_of(u) {
                entries[row + self.degree_of(v) as usize] += 1;
            }
        }
        DegreeMatrix { dim, entries }
    }

    /// Average degree of the neighbors of `u` (`0.0` for isolated vertices)
    /// ** Panics if `u >= n` **
    fn neighbor_degree(&self, u: Node) -> f64 {
        mean(self.neighbors_of(u).map(|v| self.degree_of(v) as f64))
    }

    /// Average neighbor degree of every vertex together with the maximum degree
    fn neighbor_degrees(&self) -> (Vec<f64>, NumNodes) {
        (
            self.vertices().map(|u| self.neighbor_degree(u)).collect(),
            self.max_degree(),
        )
    }

    /// `knn[k]` is the average neighbor degree of the vertices of degree `k`
    /// (`0.0` if no vertex has degree `k`)
    fn knn(&self) -> Vec<f64> {
        let (neighbor_degrees, max_degree) = self.neighbor_degrees();
        let mut sums = vec![0.0; max_degree as usize + 1];
        let mut counts = vec![0usize; max_degree as usize + 1];

        for (u, nd) in neighbor_degrees.into_iter().enumerate() {
            let k = self.degree_of(u as Node) as usize;
            sums[k] += nd;
            counts[k] += 1;
        }

        sums.into_iter()
            .zip(counts)
            .map(|(sum, count)| if count == 0 { 0.0 } else { sum / count as f64 })
            .collect()
    }

    /// Pearson correlation between the degree of each vertex and the average degree of its
    /// neighbors. Returns `NaN` if either quantity has zero variance.
    fn assortativity(&self) -> f64 {
        let (neighbor_degrees, _) = self.neighbor_degrees();
        let degrees: Vec<f64> = self.degrees().map(|d| d as f64).collect();

        let mean_degree = mean(degrees.iter().copied());
        let mean_neighbor = mean(neighbor_degrees.iter().copied());

        let mut covariance = 0.0;
        let mut var_degree = 0.0;
        let mut var_neighbor = 0.0;
        for (k, nd) in degrees.iter().zip(&neighbor_degrees) {
            let dk = k - mean_degree;
            let dn = nd - mean_neighbor;
            covariance += dk * dn;
            var_degree += dk * dk;
            var_neighbor += dn * dn;
        }

        if var_degree == 0.0 || var_neighbor == 0.0 {
            return f64::NAN;
        }
        covariance / (var_degree * var_neighbor).sqrt()
    }
}

impl<G> DegreeCorrelation for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn reference_degree_matrix() {
        let matrix = reference_graph(false).degree_matrix();
        assert_eq!(matrix.dim(), 5);
        assert_eq!(matrix.get(1, 4), 1);
        assert_eq!(matrix.get(4, 1), 1);
        assert_eq!(matrix.get(2, 3), 1);
        assert_eq!(matrix.get(4, 4), 2);
        assert_eq!(matrix.get(3, 4), 8);
        assert_eq!(matrix.row(0), &[0, 0, 0, 0, 0]);

        let total: u64 = (0..5).map(|k| matrix.row(k).iter().sum::<u64>()).sum();
        assert_eq!(total, 24);
        for ki in 0..5 {
            for kj in 0..5 {
                assert_eq!(matrix.get(ki, kj), matrix.get(kj, ki));
            }
        }
    }

    #[test]
    fn reference_neighbor_degrees() {
        let graph = reference_graph(false);
        let (neighbor_degrees, max_degree) = graph.neighbor_degrees();
        assert_eq!(max_degree, 4);
        assert_all_close(
            &neighbor_degrees,
            &[3.5, 10.0 / 3.0, 2.75, 3.25, 4.0, 4.0, 2.75, 4.0],
            1e-12,
        );

        assert_all_close(
            &graph.knn(),
            &[0.0, 4.0, 3.5, 34.0 / 9.0, 35.0 / 12.0],
            1e-12,
        );
        assert_eq!(Graph::new(3, false).neighbor_degree(1), 0.0);
    }

    #[test]
    fn assortativity() {
        for n in 4..10 {
            let star = Graph::star(n).unwrap();
            assert!((star.assortativity() + 1.0).abs() < 1e-12);
        }

        assert!(Graph::cycle(6).unwrap().assortativity().is_nan());
        assert!(Graph::new(4, false).assortativity().is_nan());

        let r = reference_graph(false).assortativity();
        assert!((r + 0.697_407_948_946).abs() < 1e-9);
    }
}
