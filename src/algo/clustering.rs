use super::*;

/// Global triangle statistics of an undirected graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triplets {
    /// Number of ordered neighbor pairs `(v, w)` with `v != w` around any centre vertex,
    /// i.e. `Σ_u deg(u) * (deg(u) - 1)`
    pub triplets: u64,
    /// Number of triangles, each counted once
    pub triangles: u64,
}

impl Triplets {
    /// `3 * triangles / triplets` (`0.0` if there are no triplets)
    pub fn transitivity(&self) -> f64 {
        if self.triplets == 0 {
            0.0
        } else {
            3.0 * self.triangles as f64 / self.triplets as f64
        }
    }
}

/// Degree statistics and triangle-based clustering measures.
///
/// Local and global clustering are defined on undirected graphs only; self-loops never close a
/// triangle.
pub trait Clustering: AdjacencyList + AdjacencyTest + GraphType + Sized {
    /// Total degree of every vertex; for directed graphs this is `in + out`
    fn total_degrees(&self) -> Vec<NumNodes> {
        if self.is_undirected() {
            return self.degrees().collect();
        }
        let (in_degrees, out_degrees) = self.directed_degrees();
        in_degrees
            .into_iter()
            .zip(out_degrees)
            .map(|(i, o)| i + o)
            .collect()
    }

    /// Returns the in- and out-degrees of every vertex
    /// ** Panics if the graph is undirected **
    fn directed_degrees(&self) -> (Vec<NumNodes>, Vec<NumNodes>) {
        assert!(self.is_directed(), "in-degrees require a directed graph");
        let mut in_degrees = vec![0; self.len()];
        for v in self.vertices().flat_map(|u| self.neighbors_of(u)) {
            in_degrees[v as usize] += 1;
        }
        (in_degrees, self.degrees().collect())
    }

    /// Local clustering coefficient: the fraction of neighbor pairs of `u` that are adjacent
    /// themselves. Vertices with fewer than two neighbors get `0`. Self-loops are ignored.
    ///
    /// ** Panics if the graph is directed **
    fn clustering(&self) -> Vec<f64> {
        assert!(self.is_undirected(), "clustering requires an undirected graph");
        self.vertices()
            .map(|u| {
                let (pairs, links) = neighbor_links(self, u);
                if pairs == 0 {
                    0.0
                } else {
                    links as f64 / pairs as f64
                }
            })
            .collect()
    }

    /// Counts triplets and triangles
    /// ** Panics if the graph is directed **
    fn triplets(&self) -> Triplets {
        assert!(self.is_undirected(), "triplets require an undirected graph");
        let (triplets, links) = self
            .vertices()
            .map(|u| neighbor_links(self, u))
            .fold((0, 0), |(t, l), (pairs, links)| (t + pairs, l + links));

        // every triangle is seen twice from each of its three corners
        Triplets {
            triplets,
            triangles: links / 6,
        }
    }

    /// See [`Triplets::transitivity`]
    fn transitivity(&self) -> f64 {
        self.triplets().transitivity()
    }
}

impl<G> Clustering for G where G: AdjacencyList + AdjacencyTest + GraphType + Sized {}

/// Returns the number of ordered neighbor pairs of `u` and how many of them are adjacent
fn neighbor_links<G>(graph: &G, u: Node) -> (u64, u64)
where
    G: AdjacencyList + AdjacencyTest,
{
    let degree = graph.neighbors_of(u).filter(|&v| v != u).count() as u64;
    let links = graph
        .neighbors_of(u)
        .filter(|&v| v != u)
        .flat_map(|v| graph.neighbors_of(v).filter(move |&w| w != u && w != v))
        .filter(|&w| graph.has_edge(u, w))
        .count() as u64;
    (degree * degree.saturating_sub(1), links)
}
