/*!
# Substructure Generators

Adds small motifs to a graph that already exists, which is how the test graphs with
closed-form metrics are assembled. Supported motifs:

- **Paths**
- **Cycles**
- **Stars**
- **Cliques**

# Example

```rust
use netmetrics::{prelude::*, gens::*};

let mut g = Graph::new(5, true);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.ordered_edges(false).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, stars, cliques)
/// between existing vertices.
///
/// Blanket-implemented for every graph with [`GraphEdgeEditing`].
/// Edges that already exist are left untouched.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use netmetrics::{prelude::*, gens::*};
    ///
    /// let mut g = Graph::new(4, false);
    /// g.connect_path([0, 1, 2, 3]).unwrap();
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(2, 1));
    /// assert!(g.has_edge(3, 2));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects `center` to every node in `leaves`
    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each node also gets a self-loop.
    /// - For undirected graphs, each pair is connected once.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) -> Result<()>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf)?;
        }
        Ok(())
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) -> Result<()> {
        for &u in nodes {
            for &v in nodes {
                let e = Edge(u, v);
                if (!with_loops && e.is_loop()) || (self.is_undirected() && !e.is_normalized()) {
                    continue;
                }

                self.try_add_edge(u, v)?;
            }
        }
        Ok(())
    }
}
