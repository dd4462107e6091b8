/*!
# Node Representation

We choose `Node = u32` as graphs analysed here stay well below `2^32` vertices.
This saves space in adjacency tables compared to `usize` and lets metric vectors be indexed
directly by `u as usize`.
*/

use std::num::NonZero;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 2`.
/// The two largest values are reserved as sentinels by [`IntSet`](crate::utils::IntSet).
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }

    /// Gets the underlying Node-Value as an index
    pub const fn index(&self) -> usize {
        self.get() as usize
    }
}
