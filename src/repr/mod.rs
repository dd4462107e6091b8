/*!
# Graph Representation

[`Graph`] stores `n` vertices `0..n`, each owning an [`IntSet`] of adjacents, and optionally a
side table of edge weights.

- For **undirected** graphs, `v ∈ adj(u) ⇔ u ∈ adj(v)` and every logical edge is counted once.
- For **directed** graphs, only `adj(u)` receives `v` when adding the arc `(u, v)`.

Vertex indices are dense and never renumbered in place; [`InducedSubgraph::subset`] produces a new graph
with its own indexing instead.
*/

use std::fmt::Display;

use crate::{error::Result, ops::*, utils::IntSet, *};

mod weights;

pub use weights::*;

/// A graph with dense vertex ids backed by one [`IntSet`] per vertex
#[derive(Debug, Clone)]
pub struct Graph {
    adjacencies: Vec<IntSet>,
    num_edges: NumEdges,
    directed: bool,
    weights: Option<EdgeWeights>,
}

impl Graph {
    /// Creates an unweighted graph with `n` isolated vertices.
    /// Aborts if the adjacency tables cannot be allocated; see [`Graph::try_new`].
    pub fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            adjacencies: vec![IntSet::new(); n as usize],
            num_edges: 0,
            directed,
            weights: None,
        }
    }

    /// Creates an unweighted graph with `n` isolated vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfMemory`](crate::error::GraphError::OutOfMemory) if the
    /// adjacency tables cannot be allocated.
    pub fn try_new(n: NumNodes, directed: bool) -> Result<Self> {
        let mut adjacencies = Vec::new();
        adjacencies.try_reserve_exact(n as usize)?;
        for _ in 0..n {
            adjacencies.push(IntSet::with_minimum(0)?);
        }
        Ok(Self {
            adjacencies,
            num_edges: 0,
            directed,
            weights: None,
        })
    }

    /// Creates a weighted graph with `n` isolated vertices
    pub fn new_weighted(n: NumNodes, directed: bool) -> Self {
        Self {
            weights: Some(EdgeWeights::new()),
            ..Self::new(n, directed)
        }
    }

    /// Creates an unweighted graph from a collection of edges
    pub fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n, directed);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Returns *true* if the graph carries edge weights
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Returns the weight table of a weighted graph
    pub fn edge_weights(&self) -> Option<&EdgeWeights> {
        self.weights.as_ref()
    }

    /// Returns the adjacency set of `u`
    /// ** Panics if `u >= n` **
    pub fn adjacent_set(&self, u: Node) -> &IntSet {
        &self.adjacencies[u as usize]
    }

    #[inline]
    fn assert_vertex(&self, u: Node) {
        assert!(
            (u as usize) < self.adjacencies.len(),
            "vertex {u} out of range (n = {})",
            self.adjacencies.len()
        );
    }

    /// Inserts an edge into the adjacency sets and, for weighted graphs, the weight table.
    /// Returns *true* if the edge already existed. On failure the graph is unchanged.
    fn insert_edge(&mut self, u: Node, v: Node, weight: f64) -> Result<bool> {
        self.assert_vertex(u);
        self.assert_vertex(v);

        if self.adjacencies[u as usize].contains(v) {
            return Ok(true);
        }

        if let Some(weights) = self.weights.as_mut() {
            weights.reserve_one()?;
        }

        self.adjacencies[u as usize].put(v)?;
        if !self.directed && u != v {
            if let Err(err) = self.adjacencies[v as usize].put(u) {
                self.adjacencies[u as usize].remove(v);
                return Err(err);
            }
        }

        if let Some(weights) = self.weights.as_mut() {
            weights.push(u, v, weight);
        }
        self.num_edges += 1;
        Ok(false)
    }

    /// Adds the edge `(u, v)` with weight `w`; a no-op if the edge already exists.
    /// ** Panics if the graph is unweighted or `u >= n || v >= n` **
    pub fn add_weighted_edge(&mut self, u: Node, v: Node, weight: f64) -> Result<()> {
        assert!(self.is_weighted(), "graph is unweighted");
        self.insert_edge(u, v, weight).map(|_| ())
    }

    /// Sorts the weight table so that [`Graph::weight`] uses binary search
    pub fn sort_edges(&mut self) {
        if let Some(weights) = self.weights.as_mut() {
            weights.sort();
        }
    }

    /// Returns the weight of the edge `(u, v)`:
    /// - `f64::INFINITY` if the vertices are not adjacent,
    /// - `1.0` if the graph is unweighted,
    /// - the stored weight otherwise.
    ///
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: Node, v: Node) -> f64 {
        if !self.has_edge(u, v) {
            return f64::INFINITY;
        }
        match &self.weights {
            None => 1.0,
            Some(weights) => weights.lookup(u, v).unwrap_or(f64::INFINITY),
        }
    }

    /// Relinks every adjacency set in table order for faster iteration.
    /// This changes the order in which neighbors are reported.
    pub fn optimize(&mut self) {
        self.adjacencies.iter_mut().for_each(IntSet::optimize);
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adjacencies.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacencies[u as usize].iter()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacencies[u as usize].len() as NumNodes
    }

    fn adjacents(&self, u: Node) -> Vec<Node> {
        self.adjacencies[u as usize].to_vec()
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_vertex(v);
        self.adjacencies[u as usize].contains(v)
    }
}

impl GraphEdgeEditing for Graph {
    /// Edges added to a weighted graph without an explicit weight get weight `1.0`
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.insert_edge(u, v, 1.0)
    }
}

impl InducedSubgraph for Graph {
    /// Returns the subgraph induced by `vertices`; vertex `k` of the result is `vertices[k]`.
    /// Weights (and the sortedness of the weight table) are carried over.
    ///
    /// ** Panics if a vertex is out of range or listed twice **
    fn subset(&self, vertices: &[Node]) -> Result<Graph> {
        let mut position: Vec<Option<OptionalNode>> = vec![None; self.len()];
        for (k, &v) in vertices.iter().enumerate() {
            self.assert_vertex(v);
            assert!(position[v as usize].is_none(), "vertex {v} listed twice");
            position[v as usize] = OptionalNode::new(k as Node);
        }

        let mut sub = Graph {
            adjacencies: Vec::new(),
            num_edges: 0,
            directed: self.directed,
            weights: self.weights.as_ref().map(|_| EdgeWeights::new()),
        };
        sub.adjacencies.try_reserve_exact(vertices.len())?;
        for &u in vertices {
            sub.adjacencies
                .push(IntSet::with_minimum(self.degree_of(u) as usize)?);
        }

        for (k, &u) in vertices.iter().enumerate() {
            for v in self.neighbors_of(u) {
                let Some(l) = position[v as usize].map(|l| l.get()) else {
                    continue;
                };
                if self.directed || k as Node <= l {
                    sub.insert_edge(k as Node, l, self.weight(u, v))?;
                }
            }
        }

        if self.weights.as_ref().is_some_and(EdgeWeights::is_sorted) {
            sub.sort_edges();
        }

        Ok(sub)
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (u, adj) in self.adjacencies.iter().enumerate() {
            writeln!(f, "{u}: {adj}")?;
        }
        Ok(())
    }
}
