/*!
# Graph Generators

Deterministic builders for graphs with a known structure. They are mainly used to assemble
instances whose metrics are known in closed form (e.g. the betweenness of a star centre).

- [`GeneratorSubstructures`] adds paths, cycles, stars and cliques to an existing graph.
- [`KnownGraph`] constructs complete undirected graphs of these shapes on `0..n`.
*/

use crate::{error::Result, prelude::*};

mod substructures;

pub use substructures::*;

/// Constructors for small undirected graphs of a well-known shape
pub trait KnownGraph: Sized {
    /// Path `0 - 1 - ... - (n-1)`
    fn path(n: NumNodes) -> Result<Self>;

    /// Cycle `0 - 1 - ... - (n-1) - 0`; requires `n >= 3`
    fn cycle(n: NumNodes) -> Result<Self>;

    /// Star with centre `0` and leaves `1..n`
    fn star(n: NumNodes) -> Result<Self>;

    /// Complete graph without self-loops
    fn complete(n: NumNodes) -> Result<Self>;
}

impl KnownGraph for Graph {
    fn path(n: NumNodes) -> Result<Self> {
        let mut graph = Graph::new(n, false);
        graph.connect_path(0..n)?;
        Ok(graph)
    }

    fn cycle(n: NumNodes) -> Result<Self> {
        assert!(n >= 3, "a simple cycle needs at least three nodes");
        let mut graph = Graph::new(n, false);
        graph.connect_cycle(0..n)?;
        Ok(graph)
    }

    fn star(n: NumNodes) -> Result<Self> {
        let mut graph = Graph::new(n, false);
        graph.connect_star(0, 1..n)?;
        Ok(graph)
    }

    fn complete(n: NumNodes) -> Result<Self> {
        let mut graph = Graph::new(n, false);
        let nodes: Vec<Node> = (0..n).collect();
        graph.connect_clique(&nodes, false)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_graph_sizes() {
        for n in 3..12 {
            assert_eq!(Graph::path(n).unwrap().number_of_edges(), n - 1);
            assert_eq!(Graph::cycle(n).unwrap().number_of_edges(), n);
            assert_eq!(Graph::star(n).unwrap().number_of_edges(), n - 1);
            assert_eq!(Graph::complete(n).unwrap().number_of_edges(), n * (n - 1) / 2);
        }

        assert_eq!(Graph::path(1).unwrap().number_of_edges(), 0);
        assert_eq!(Graph::star(0).unwrap().number_of_nodes(), 0);
    }
}
