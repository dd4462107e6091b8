/*!
`netmetrics` is a graph library for computing structural metrics of complex networks:
connectivity, hop distances, betweenness, k-cores, spectral centralities, degree correlations
and clustering.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

A [`Graph`](crate::repr::Graph) stores one [`IntSet`](crate::utils::IntSet) per vertex. The set is
an open-addressing hash table that additionally threads its live entries in insertion order,
hence neighbor iteration is deterministic and follows the order in which edges were added.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v)` is stored in both adjacency lists and counted once.
- In a **directed** graph, the edge has orientation and is only stored in the list of `u`.

Graphs may optionally carry edge weights, which are kept in a side table keyed by the
normalized endpoints.

# Design

All algorithms are implemented via traits on the graph itself, making them usable without any
configuration. Algorithms with tuning knobs are additionally provided as configurable structs
(*Builder* / *Setter* pattern), e.g. [`BetweennessCentrality`](crate::algo::BetweennessCentrality)
which distributes the BFS sources over scoped worker threads.

Preconditions (vertices in range, directedness) are asserted and panic when violated. Running out
of memory while growing a table is reported as [`GraphError::OutOfMemory`](crate::error::GraphError).

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`algo`] includes the metric traits such as BFS (`graph.bfs(start_node)`), components, betweenness, ...
- [`gens`] includes deterministic builders for paths, cycles, stars and cliques,
- [`io`] reads and writes the edge-list text format,
- [`utils`] includes the [`IntSet`](crate::utils::IntSet).

In most use-cases, `use netmetrics::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `netmetrics::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
