/*!
# Utilities

Provides the [`IntSet`], the integer set backing every adjacency list of a
[`Graph`](crate::repr::Graph). Algorithms also use it directly wherever they need a membership
test combined with stable iteration order (e.g. component membership).
*/

pub mod int_set;

pub use int_set::{IntSet, MAX_KEY};
