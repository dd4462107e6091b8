/*!
Betweenness centrality via Brandes' algorithm.

For every source `s`, a BFS computes the hop distance, the number `σ` of shortest paths and the
shortest-path predecessors of every vertex, recording the order in which vertices are settled.
Walking this order backwards accumulates the dependencies
`δ[v] += σ[v] / σ[w] * (1 + δ[w])` for every predecessor `v` of `w`, and `δ[w]` is added to the
centrality of every `w ≠ s`. A full run takes `O(n * m)` time and `O(n + m)` scratch space.

The sources are independent, so [`BetweennessCentrality`] can split them into residue classes
modulo the number of threads and run one class per scoped worker. Each worker owns its scratch
state and result vector and the partial results are summed once all workers are joined.
*/

use std::{collections::VecDeque, num::NonZero, thread};

use smallvec::SmallVec;
use tracing::{debug, warn};

use super::*;

/// Scratch state of a single-source pass, reused across sources
struct BrandesState {
    distance: Vec<NumNodes>,
    sigma: Vec<f64>,
    delta: Vec<f64>,
    predecessors: Vec<SmallVec<[Node; 4]>>,
    order: Vec<Node>,
    queue: VecDeque<Node>,
}

impl BrandesState {
    fn new(n: usize) -> Self {
        Self {
            distance: vec![INVALID_NODE; n],
            sigma: vec![0.0; n],
            delta: vec![0.0; n],
            predecessors: vec![SmallVec::new(); n],
            order: Vec::with_capacity(n),
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Adds the dependencies of all vertices on source `s` to `centrality`
    fn accumulate<G: AdjacencyList>(&mut self, graph: &G, s: Node, centrality: &mut [f64]) {
        let Self {
            distance,
            sigma,
            delta,
            predecessors,
            order,
            queue,
        } = self;

        distance[s as usize] = 0;
        sigma[s as usize] = 1.0;
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            order.push(u);
            let next = distance[u as usize] + 1;
            for v in graph.neighbors_of(u) {
                if distance[v as usize] == INVALID_NODE {
                    distance[v as usize] = next;
                    queue.push_back(v);
                }
                if distance[v as usize] == next {
                    sigma[v as usize] += sigma[u as usize];
                    predecessors[v as usize].push(u);
                }
            }
        }

        for &w in order.iter().rev() {
            let coefficient = (1.0 + delta[w as usize]) / sigma[w as usize];
            for &v in &predecessors[w as usize] {
                delta[v as usize] += sigma[v as usize] * coefficient;
            }
            if w != s {
                centrality[w as usize] += delta[w as usize];
            }
        }

        // only settled vertices were touched
        for &w in order.iter() {
            distance[w as usize] = INVALID_NODE;
            sigma[w as usize] = 0.0;
            delta[w as usize] = 0.0;
            predecessors[w as usize].clear();
        }
        order.clear();
    }
}

/// Runs Brandes' accumulation for the given sources and returns the unscaled sums
fn accumulate_sources<G, I>(graph: &G, sources: I) -> Vec<f64>
where
    G: AdjacencyList,
    I: IntoIterator<Item = Node>,
{
    let mut state = BrandesState::new(graph.len());
    let mut centrality = vec![0.0; graph.len()];
    for s in sources {
        state.accumulate(graph, s, &mut centrality);
    }
    centrality
}

/// Configuration of the betweenness computation.
///
/// Results are reported on the doubled scale of the usual metric tables by default:
/// a star's centre scores `2(n-1)(n-2)` and the middle of a path with an odd number `n` of
/// vertices scores `(n-1)^2`. A scale of `1.0` yields the plain sum over ordered pairs.
///
/// # Example
/// ```
/// use netmetrics::{algo::*, gens::*, prelude::*};
///
/// let star = Graph::star(5).unwrap();
/// let centrality = BetweennessCentrality::new().num_threads(2).compute(&star);
/// assert_eq!(centrality, vec![24.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BetweennessCentrality {
    num_threads: usize,
    scale: f64,
}

impl Default for BetweennessCentrality {
    fn default() -> Self {
        Self {
            num_threads: 1,
            scale: 2.0,
        }
    }
}

impl BetweennessCentrality {
    /// Creates a serial configuration with the default scale `2.0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads; `0` uses the available parallelism
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Sets the factor all results are multiplied with
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    fn effective_threads(&self, n: usize) -> usize {
        let threads = match self.num_threads {
            0 => thread::available_parallelism().map_or(1, NonZero::get),
            t => t,
        };
        threads.min(n.max(1))
    }

    /// Computes the betweenness of all vertices on the calling thread
    pub fn compute_serial<G>(&self, graph: &G) -> Vec<f64>
    where
        G: AdjacencyList,
    {
        debug!(n = graph.len(), "computing betweenness serially");
        let mut centrality = accumulate_sources(graph, graph.vertices_range());
        self.apply_scale(&mut centrality);
        centrality
    }

    /// Computes the betweenness of all vertices using the configured number of threads.
    ///
    /// If a worker cannot be spawned or joined, a warning is logged, all parallel results are
    /// discarded and the serial algorithm runs instead.
    pub fn compute<G>(&self, graph: &G) -> Vec<f64>
    where
        G: AdjacencyList + Sync,
    {
        let threads = self.effective_threads(graph.len());
        if threads <= 1 {
            return self.compute_serial(graph);
        }

        debug!(n = graph.len(), threads, "computing betweenness in parallel");
        match Self::accumulate_parallel(graph, threads) {
            Some(mut centrality) => {
                self.apply_scale(&mut centrality);
                centrality
            }
            None => {
                warn!(threads, "parallel betweenness failed, falling back to serial");
                self.compute_serial(graph)
            }
        }
    }

    /// Worker `t` processes the sources `s ≡ t (mod threads)`. Returns `None` if any worker
    /// failed to spawn or to complete.
    fn accumulate_parallel<G>(graph: &G, threads: usize) -> Option<Vec<f64>>
    where
        G: AdjacencyList + Sync,
    {
        let n = graph.number_of_nodes();

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(threads);
            let mut complete = true;

            for t in 0..threads {
                let spawned = thread::Builder::new()
                    .name(format!("brandes-{t}"))
                    .spawn_scoped(scope, move || {
                        accumulate_sources(graph, (t as Node..n).step_by(threads))
                    });

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(err) => {
                        warn!(worker = t, %err, "cannot spawn betweenness worker");
                        complete = false;
                        break;
                    }
                }
            }

            // join all handles, also after a failure
            let mut centrality = vec![0.0; n as usize];
            for (t, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(partial) if complete => {
                        for (total, x) in centrality.iter_mut().zip(partial) {
                            *total += x;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {
                        warn!(worker = t, "betweenness worker panicked");
                        complete = false;
                    }
                }
            }

            complete.then_some(centrality)
        })
    }

    fn apply_scale(&self, centrality: &mut [f64]) {
        if self.scale != 1.0 {
            centrality.iter_mut().for_each(|x| *x *= self.scale);
        }
    }
}

/// Exposes betweenness centrality with the default configuration directly on graphs
pub trait Betweenness: AdjacencyList + Sized {
    /// Betweenness of every vertex computed on the calling thread
    fn betweenness(&self) -> Vec<f64> {
        BetweennessCentrality::new().compute_serial(self)
    }

    /// Betweenness of every vertex computed by `num_threads` workers
    fn betweenness_parallel(&self, num_threads: usize) -> Vec<f64>
    where
        Self: Sync,
    {
        BetweennessCentrality::new()
            .num_threads(num_threads)
            .compute(self)
    }
}

impl<G> Betweenness for G where G: AdjacencyList + Sized {}
