/*!
Breadth-first traversal.

[`Bfs`] is a lazy iterator visiting vertices in breadth-first order while recording the hop
distance of every discovered vertex. It underlies the geodesic computations and can be
restarted at unvisited vertices to sweep the whole graph.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    /// `INVALID_NODE` marks undiscovered vertices
    depths: Vec<NumNodes>,
    queue: VecDeque<Node>,
    num_discovered: usize,
    stop_at: Option<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut depths = vec![INVALID_NODE; graph.len()];
        depths[start as usize] = 0;
        Self {
            graph,
            depths,
            queue: VecDeque::from(vec![start]),
            num_discovered: 1,
            stop_at: None,
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Returns *true* if `u` has been discovered (it may not have been returned yet)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.depths[u as usize] != INVALID_NODE
    }

    /// Returns the hop distance from the start of the traversal tree containing `u`,
    /// or `None` if `u` has not been discovered yet
    pub fn depth_of(&self, u: Node) -> Option<NumNodes> {
        let depth = self.depths[u as usize];
        (depth != INVALID_NODE).then_some(depth)
    }

    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.did_visit_node(u)) {
            None => false,
            Some(u) => {
                self.depths[u as usize] = 0;
                self.num_discovered += 1;
                self.queue.push_back(u);
                true
            }
        }
    }

    /// Consumes the traversal and returns the depth of every vertex (`None` if undiscovered)
    pub fn into_depths(mut self) -> Vec<Option<NumNodes>> {
        self.by_ref().for_each(drop);
        self.depths
            .into_iter()
            .map(|d| (d != INVALID_NODE).then_some(d))
            .collect()
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            let next_depth = self.depths[u as usize] + 1;
            for v in self.graph.neighbors_of(u) {
                if self.depths[v as usize] == INVALID_NODE {
                    self.depths[v as usize] = next_depth;
                    self.num_discovered += 1;
                    self.queue.push_back(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.num_discovered),
        )
    }
}

/// Exposes traversal algorithms directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns *true* if there is a (directed) path from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    fn is_node_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).stop_at(v).any(|x| x == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
