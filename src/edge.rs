use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A weight record of the edge table of weighted graphs.
///
/// The endpoints are always stored normalized, so `{u, v}` and `{v, u}` share one record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdge {
    /// Normalized endpoints
    pub edge: Edge,
    pub weight: f64,
}

impl WeightedEdge {
    /// Creates the canonical record for `{u, v}`
    pub fn new(u: Node, v: Node, weight: f64) -> Self {
        Self {
            edge: Edge(u, v).normalized(),
            weight,
        }
    }

    /// Orders records by their endpoints only
    pub fn cmp_endpoints(&self, other: &Self) -> Ordering {
        self.edge.cmp(&other.edge)
    }
}
