/*!
# Graph Operations

Traits through which algorithms (and external collaborators such as layout or propagation code)
access a graph. Every algorithm in [`algo`](crate::algo) is implemented generically over these
traits and thus works on any representation providing them.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::Result, *};

/// Access to the vertex set `0..n`
pub trait GraphNodeOrder {
    /// Number of vertices `n`
    fn number_of_nodes(&self) -> NumNodes;

    /// `n` as `usize`, convenient for sizing metric vectors
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Iterates over all vertices in increasing order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used where
    /// additional mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* for the graph without vertices
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Access to the number of logical edges
pub trait GraphEdgeOrder {
    /// Returns the number of (logical) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if no edge was inserted yet
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Distinguishes directed from undirected graphs at runtime
pub trait GraphType {
    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Neighborhood queries; every metric in [`algo`](crate::algo) is built on these
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Iterates over the adjacents of `u` in insertion order (out-neighbors if directed).
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Size of the adjacency set of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns a point-in-time copy of the neighborhood of `u`
    /// ** Panics if `u >= n` **
    fn adjacents(&self, u: Node) -> Vec<Node> {
        self.neighbors_of(u).collect_vec()
    }

    /// Like [`AdjacencyList::neighbors_of`], but yields `u` itself first
    /// ** Panics if `u >= n` **
    fn closed_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }

    /// Returns an iterator over the (out-)degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum (out-)degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a distribution `(degree, count)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Vertices with at least one adjacent
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Edges `(u, v)` for every adjacent `v` of `u`; with `only_normalized` those with `u > v` are skipped.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// All adjacency entries as edges, grouped by source vertex.
    /// Pass `only_normalized` to see each undirected edge once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Same as [`AdjacencyList::edges`] but lexicographically sorted, independent of insertion order
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| {
            let mut edges = self.edges_of(u, only_normalized).collect_vec();
            edges.sort_unstable();
            edges.into_iter()
        })
    }
}

/// Constant-time (expected) adjacency tests
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if `u` is adjacent to itself
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously, in which case nothing changes.
    ///
    /// # Errors
    /// Fails if an adjacency table cannot grow.
    ///
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds the edge *(u,v)* to the graph if it is not yet present.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_add_edge(u, v).map(|_| ())
    }

    /// Adds every edge of `edges`, stopping at the first failure
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// Trait for extracting induced subgraphs
pub trait InducedSubgraph: Sized {
    /// Returns the subgraph induced by `vertices` where vertex `k` of the result corresponds to
    /// `vertices[k]` in `self`.
    ///
    /// # Errors
    /// Fails if the new adjacency tables cannot be allocated.
    fn subset(&self, vertices: &[Node]) -> Result<Self>;
}
