use tracing::debug;

use super::*;

/// Result of a k-core decomposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KCore {
    /// `cores[u]` is the largest `k` such that `u` belongs to the k-core
    pub cores: Vec<NumNodes>,
    /// Largest core number of any vertex
    pub degeneracy: NumNodes,
}

/// Buckets of active vertices keyed by their residual degree.
/// `position[u]` is the index of `u` inside its bucket, allowing O(1) removal.
struct DegreeBuckets {
    buckets: Vec<Vec<Node>>,
    position: Vec<usize>,
}

impl DegreeBuckets {
    fn new(degrees: &[NumNodes], max_degree: NumNodes) -> Self {
        let mut buckets = vec![Vec::new(); max_degree as usize + 1];
        let mut position = vec![0; degrees.len()];
        for (u, &d) in degrees.iter().enumerate() {
            position[u] = buckets[d as usize].len();
            buckets[d as usize].push(u as Node);
        }
        Self { buckets, position }
    }

    fn remove(&mut self, u: Node, degree: NumNodes) {
        let bucket = &mut self.buckets[degree as usize];
        let pos = self.position[u as usize];
        bucket.swap_remove(pos);
        if let Some(&moved) = bucket.get(pos) {
            self.position[moved as usize] = pos;
        }
    }

    fn insert(&mut self, u: Node, degree: NumNodes) {
        let bucket = &mut self.buckets[degree as usize];
        self.position[u as usize] = bucket.len();
        bucket.push(u);
    }

    /// Removes some vertex from the lowest non-empty bucket at or above `*lowest`
    fn pop_lowest(&mut self, lowest: &mut NumNodes) -> Option<Node> {
        while (*lowest as usize) < self.buckets.len() {
            if let Some(u) = self.buckets[*lowest as usize].pop() {
                return Some(u);
            }
            *lowest += 1;
        }
        None
    }
}

/// k-core decomposition of undirected graphs.
///
/// The k-core is the maximal subgraph in which every vertex has degree at least `k`; the core
/// number of a vertex is the largest `k` whose k-core contains it.
pub trait CoreDecomposition: AdjacencyList + GraphType + Sized {
    /// Computes the core number of every vertex by repeatedly peeling a vertex of minimum
    /// residual degree. Runs in `O(n + m)` expected time.
    ///
    /// # Errors
    /// Fails if the set of peeled vertices cannot be allocated.
    ///
    /// ** Panics if the graph is directed **
    fn k_cores(&self) -> Result<KCore> {
        assert!(
            self.is_undirected(),
            "k-core decomposition requires an undirected graph"
        );

        let mut residual = self.degrees().collect::<Vec<_>>();
        let mut buckets = DegreeBuckets::new(&residual, self.max_degree());
        let mut peeled = IntSet::with_minimum(self.len())?;
        let mut cores = vec![0; self.len()];

        let mut k = 0;
        let mut lowest = 0;
        while let Some(u) = buckets.pop_lowest(&mut lowest) {
            k = k.max(lowest);
            cores[u as usize] = k;
            peeled.put(u)?;

            for v in self.neighbors_of(u) {
                if peeled.contains(v) {
                    continue;
                }
                let degree = residual[v as usize];
                buckets.remove(v, degree);
                buckets.insert(v, degree - 1);
                residual[v as usize] = degree - 1;
                lowest = lowest.min(degree - 1);
            }
        }

        debug!(n = self.len(), degeneracy = k, "computed k-cores");
        Ok(KCore {
            cores,
            degeneracy: k,
        })
    }

    /// Returns the largest `k` such that the k-core is non-empty
    ///
    /// # Errors
    /// See [`CoreDecomposition::k_cores`].
    fn degeneracy(&self) -> Result<NumNodes> {
        Ok(self.k_cores()?.degeneracy)
    }
}

impl<G> CoreDecomposition for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use itertools::Itertools;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn small() {
        let graph = Graph::from_edges(5, false, [(1, 2), (2, 3), (2, 4), (3, 4)]).unwrap();
        let kcore = graph.k_cores().unwrap();
        assert_eq!(kcore.cores, vec![0, 1, 2, 2, 2]);
        assert_eq!(kcore.degeneracy, 2);
    }

    #[test]
    fn nested_shells() {
        let mut graph = Graph::new(20, false);
        graph.connect_clique(&[0, 1, 2, 3, 4], false).unwrap();
        for i in 5..10 {
            graph.connect_star(i, [i - 5, i - 4, i - 3]).unwrap();
        }
        for i in 10..15 {
            graph.connect_star(i, [i - 5, i - 4]).unwrap();
        }
        for i in 15..20 {
            graph.add_edge(i, i - 5).unwrap();
        }

        let kcore = graph.k_cores().unwrap();
        let expected = [4, 3, 2, 1]
            .into_iter()
            .flat_map(|k| std::iter::repeat_n(k, 5))
            .collect::<Vec<NumNodes>>();
        assert_eq!(kcore.cores, expected);
        assert_eq!(kcore.degeneracy, 4);
    }

    #[test]
    fn known_graphs() {
        for n in 3..10 {
            assert!(Graph::cycle(n).unwrap().k_cores().unwrap().cores.iter().all(|&k| k == 2));
            assert!(Graph::complete(n).unwrap().k_cores().unwrap().cores.iter().all(|&k| k == n - 1));
            assert_eq!(Graph::complete(n).unwrap().degeneracy().unwrap(), n - 1);
        }
        assert_eq!(Graph::new(0, false).k_cores().unwrap().cores, Vec::<NumNodes>::new());
        assert_eq!(Graph::new(3, false).degeneracy().unwrap(), 0);
    }

    #[test]
    fn trees_are_one_cores() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for n in [2, 5, 30, 200] {
            let mut tree = Graph::new(n, false);
            for i in 1..n {
                tree.add_edge(i, rng.random_range(0..i)).unwrap();
            }
            assert!(tree.k_cores().unwrap().cores.iter().all(|&k| k == 1));
        }
        assert!(Graph::star(9).unwrap().k_cores().unwrap().cores.iter().all(|&k| k == 1));
        assert!(Graph::path(9).unwrap().k_cores().unwrap().cores.iter().all(|&k| k == 1));
    }

    /// Core numbers by definition: for growing `k`, repeatedly drop vertices with fewer than `k`
    /// remaining neighbors
    fn naive_cores(graph: &Graph) -> Vec<NumNodes> {
        let mut cores = vec![0; graph.len()];
        for k in 1..=graph.max_degree() {
            let mut alive = graph.vertices().collect_vec();
            loop {
                let before = alive.len();
                let snapshot = alive.clone();
                alive.retain(|&u| {
                    graph
                        .neighbors_of(u)
                        .filter(|&v| v != u && snapshot.contains(&v))
                        .count() as NumNodes
                        >= k
                });
                if alive.len() == before {
                    break;
                }
            }
            for u in alive {
                cores[u as usize] = k;
            }
        }
        cores
    }

    #[test]
    fn random_graphs_match_definition() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x6b63);
        for (n, m) in [(10, 20), (30, 90), (50, 300), (80, 200)] {
            let graph = random_graph(rng, n, m, false);
            assert_eq!(graph.k_cores().unwrap().cores, naive_cores(&graph));
        }
    }

    #[test]
    fn self_loops_are_skipped_once_peeled() {
        let mut graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 2)]).unwrap();
        graph.add_edge(0, 0).unwrap();
        graph.add_edge(3, 3).unwrap();
        assert_eq!(graph.k_cores().unwrap().cores, vec![2, 2, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn directed_graphs_are_rejected() {
        let _ = Graph::new(3, true).k_cores();
    }
}
