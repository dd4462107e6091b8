/*!
Hop distances (geodesics) between vertices.

All computations run one BFS per source, hence `all_geodesic_distances` and the derived measures
take `O(n * (n + m))` time. Unreachable pairs are reported as `None`.
*/

use super::*;

/// Histogram of pairwise hop distances over all ordered pairs `(u, v)`, including `(v, v)`.
///
/// `histogram.len() == diameter + 1`. For `d < diameter`, `histogram[d]` counts the pairs at
/// distance `d`, while the last entry `histogram[diameter]` holds the number of **unreachable**
/// pairs. The number of pairs at distance exactly `diameter` is kept in `at_diameter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeodesicDistribution {
    /// Pair counts per distance; the last entry counts the unreachable pairs
    pub histogram: Vec<u64>,
    /// Largest finite distance between any two vertices
    pub diameter: NumNodes,
    /// Number of pairs at distance exactly `diameter`
    pub at_diameter: u64,
}

impl GeodesicDistribution {
    /// Number of ordered pairs without a connecting path
    pub fn unreachable(&self) -> u64 {
        self.histogram[self.diameter as usize]
    }
}

/// Hop distances along (out-)arcs, computed by breadth-first search
pub trait Geodesics: AdjacencyList + Sized {
    /// Returns the hop distance from `s` to every vertex
    /// ** Panics if `s >= n` **
    fn geodesic_distances_from(&self, s: Node) -> Vec<Option<NumNodes>> {
        self.bfs(s).into_depths()
    }

    /// Returns the hop distance from `u` to `v`; the search stops as soon as `v` is reached
    /// ** Panics if `u >= n || v >= n` **
    fn geodesic_distance(&self, u: Node, v: Node) -> Option<NumNodes> {
        let mut bfs = self.bfs(u);
        while !bfs.did_visit_node(v) {
            bfs.next()?;
        }
        bfs.depth_of(v)
    }

    /// Returns the matrix of all pairwise hop distances
    fn all_geodesic_distances(&self) -> Vec<Vec<Option<NumNodes>>> {
        self.vertices()
            .map(|s| self.geodesic_distances_from(s))
            .collect()
    }

    /// Returns the distance histogram over all ordered pairs
    fn geodesic_distribution(&self) -> GeodesicDistribution {
        let mut counts: Vec<u64> = Vec::new();
        let mut unreachable = 0;

        for s in self.vertices() {
            for distance in self.geodesic_distances_from(s) {
                match distance {
                    Some(d) => {
                        let d = d as usize;
                        if counts.len() <= d {
                            counts.resize(d + 1, 0);
                        }
                        counts[d] += 1;
                    }
                    None => unreachable += 1,
                }
            }
        }

        let diameter = counts.len().saturating_sub(1);
        let at_diameter = counts.get(diameter).copied().unwrap_or(0);
        counts.resize(diameter + 1, 0);
        counts[diameter] = unreachable;

        GeodesicDistribution {
            histogram: counts,
            diameter: diameter as NumNodes,
            at_diameter,
        }
    }

    /// Returns the closeness `1 / Σ_v dist(u, v)` of every vertex `u`, summing over reachable `v`
    /// only. Vertices that reach nothing get closeness `0`.
    fn closeness(&self) -> Vec<f64> {
        self.vertices()
            .map(|s| {
                let total: u64 = self
                    .geodesic_distances_from(s)
                    .into_iter()
                    .flatten()
                    .map(u64::from)
                    .sum();
                if total == 0 { 0.0 } else { 1.0 / total as f64 }
            })
            .collect()
    }
}

impl<G> Geodesics for G where G: AdjacencyList + Sized {}
