/*!
# Network Metrics

This module provides the analysis routines built on top of [`Graph`](crate::repr::Graph) and the
operation traits in [`ops`](crate::ops). All algorithms are re-exported at the top level of this
module and are implemented as traits on the graph itself, so you can simply do:
```rust
use netmetrics::{algo::*, prelude::*};

let graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]).unwrap();
assert!(graph.is_connected());
assert_eq!(graph.betweenness(), vec![0.0, 8.0, 8.0, 0.0]);
```
Algorithms with tuning knobs ([`BetweennessCentrality`], [`PowerIteration`]) are additionally
available as configurable structs.
*/

mod betweenness;
mod centrality;
mod clustering;
mod connectivity;
mod correlation;
mod geodesic;
mod kcore;
mod traversal;

use crate::{error::Result, prelude::*, utils::*};

pub use betweenness::*;
pub use centrality::*;
pub use clustering::*;
pub use connectivity::*;
pub use correlation::*;
pub use geodesic::*;
pub use kcore::*;
pub use traversal::*;
