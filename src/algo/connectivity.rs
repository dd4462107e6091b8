use std::collections::VecDeque;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Returns the number of distinct labels, i.e. the number of components (or communities)
/// described by a label vector. Labels need not be contiguous.
pub fn num_components(labels: &[Node]) -> NumNodes {
    labels.iter().unique().count() as NumNodes
}

/// Groups vertices by their label; entry `c` holds the vertices labelled `c` in increasing
/// order. The result has `max(labels) + 1` entries, so unused labels yield empty sets.
pub fn components(labels: &[Node]) -> Result<Vec<IntSet>> {
    let bound = labels.iter().max().map_or(0, |&l| l as usize + 1);
    let mut sizes = vec![0usize; bound];
    for &l in labels {
        sizes[l as usize] += 1;
    }

    let mut members = Vec::new();
    members.try_reserve_exact(sizes.len())?;
    for size in sizes {
        members.push(IntSet::with_minimum(size)?);
    }

    for (u, &l) in labels.iter().enumerate() {
        members[l as usize].put(u as Node)?;
    }
    Ok(members)
}

/// Weak connectivity: edges are treated as undirected, for directed graphs arcs are followed
/// in both directions.
pub trait Connectivity: AdjacencyList + GraphType + Sized {
    /// Labels every vertex with the id of its component. Components are numbered `0, 1, ...`
    /// in order of their smallest vertex.
    fn component_labels(&self) -> Vec<Node> {
        let reverse = self.is_directed().then(|| {
            let mut reverse = vec![Vec::new(); self.len()];
            for Edge(u, v) in self.edges(false) {
                reverse[v as usize].push(u);
            }
            reverse
        });

        let mut labels = vec![INVALID_NODE; self.len()];
        let mut queue = VecDeque::new();
        let mut label = 0;

        for s in self.vertices_range() {
            if labels[s as usize] != INVALID_NODE {
                continue;
            }

            labels[s as usize] = label;
            queue.push_back(s);
            while let Some(u) = queue.pop_front() {
                let reverse_arcs = reverse.iter().flat_map(|r| r[u as usize].iter().copied());
                for v in self.neighbors_of(u).chain(reverse_arcs) {
                    if labels[v as usize] == INVALID_NODE {
                        labels[v as usize] = label;
                        queue.push_back(v);
                    }
                }
            }

            label += 1;
        }

        debug!(n = self.len(), components = label, "labelled components");
        labels
    }

    /// Returns the number of (weakly) connected components
    fn number_of_components(&self) -> NumNodes {
        num_components(&self.component_labels())
    }

    /// Returns *true* if the graph has at most one component
    fn is_connected(&self) -> bool {
        self.number_of_components() <= 1
    }

    /// Returns the membership sets of all components indexed by label
    fn components(&self) -> Result<Vec<IntSet>> {
        components(&self.component_labels())
    }

    /// Returns the subgraph induced by the largest component (ties are broken towards the
    /// component containing the smallest vertex), or a copy if the graph is connected.
    fn giant_component(&self) -> Result<Self>
    where
        Self: InducedSubgraph + Clone,
    {
        let labels = self.component_labels();

        let mut frequency: FxHashMap<Node, NumNodes> = FxHashMap::default();
        for &l in &labels {
            *frequency.entry(l).or_default() += 1;
        }
        if frequency.len() <= 1 {
            return Ok(self.clone());
        }

        let (giant, size) = frequency
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .unwrap_or((0, 0));
        debug!(label = giant, size, "extracting giant component");

        let vertices = labels
            .iter()
            .positions(|&l| l == giant)
            .map(|u| u as Node)
            .collect_vec();
        self.subset(&vertices)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType + Sized {}
