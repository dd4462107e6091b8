/*!
# IntSet

A mutable set of small non-negative integers backing every adjacency list of a [`Graph`](crate::repr::Graph).

The set combines two structures living in one contiguous slot table:
- an **open-addressing hash table** (hash `31 * key mod capacity`, linear scanning) whose
  capacity is always taken from a fixed sequence of primes, and
- an **intrusive singly-linked chain** threading exactly the live slots in insertion order.

Membership queries hit the table, while iteration, positional access and the set algebra
walk the chain and never touch the (sparse) table.

The table never exceeds a utilization of `0.75`. Inserting beyond that reallocates to the next
prime and reinserts all keys in chain order, so iteration order survives growth. Removed slots
are marked as deleted (keeping collision chains intact) and are purged by an in-place rebuild
once live and deleted slots together reach the utilization target.
*/

use std::{
    fmt::{Debug, Display},
    iter::FusedIterator,
};

use rand::Rng;

use crate::{error::Result, node::*};

/// Fraction of the table that may be occupied before it is rebuilt
const UTILIZATION_RATE: f64 = 0.75;

/// A freshly created set always accommodates at least this many elements without growing
const MIN_EXPECTED_ELEMENTS: usize = 8;

/// Key of a slot that was never used since the last rebuild
const VACANT: Node = INVALID_NODE;

/// Key of a slot whose element was removed
const DELETED: Node = INVALID_NODE - 1;

/// Largest value an [`IntSet`] can store
pub const MAX_KEY: Node = INVALID_NODE - 2;

/// Table capacities. Each prime is roughly double its predecessor; all fit into a [`Node`]
/// so slot indices can be stored as [`OptionalNode`].
const PRIMES: [u64; 32] = [
    2, 3, 7, 13, 23, 47, 97, 193, 383, 769, 1531, 3067, 6143, 12289, 24571, 49157, 98299, 196613,
    393209, 786433, 1572869, 3145721, 6291449, 12582917, 25165813, 50331653, 100663291, 201326611,
    402653189, 805306357, 1610612741, 3221225473,
];

#[derive(Debug, Clone, Copy)]
struct Slot {
    key: Node,
    next: Option<OptionalNode>,
}

impl Slot {
    const EMPTY: Slot = Slot {
        key: VACANT,
        next: None,
    };

    #[inline]
    fn is_live(&self) -> bool {
        self.key <= MAX_KEY
    }
}

/// Result of searching the table for a key
enum Lookup {
    /// The key lives in this slot
    Found(usize),
    /// The key is absent and may be stored in this slot
    Vacant(usize),
}

#[inline]
fn link(pos: usize) -> Option<OptionalNode> {
    OptionalNode::new(pos as Node)
}

#[inline]
fn fits(elements: usize, capacity: usize) -> bool {
    elements as f64 <= capacity as f64 * UTILIZATION_RATE
}

/// Index into [`PRIMES`] of the smallest table holding `minimum` elements
fn size_index_for(minimum: usize) -> usize {
    let minimum = minimum.max(MIN_EXPECTED_ELEMENTS);
    let preferred = (minimum as f64 / UTILIZATION_RATE).ceil() as u64;
    PRIMES
        .iter()
        .position(|&p| p >= preferred)
        .unwrap_or(PRIMES.len() - 1)
}

/// Set of non-negative integers with O(1)-expected `put`/`contains` and stable insertion-order
/// iteration.
///
/// # Example
/// ```
/// use netmetrics::utils::IntSet;
///
/// let mut set = IntSet::new();
/// set.put(5).unwrap();
/// set.put(1).unwrap();
/// set.put(5).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_vec(), vec![5, 1]);
/// ```
#[derive(Clone)]
pub struct IntSet {
    size_idx: usize,
    len: usize,
    deleted: usize,
    slots: Vec<Slot>,
    head: Option<OptionalNode>,
    tail: Option<OptionalNode>,
}

impl Default for IntSet {
    fn default() -> Self {
        let size_idx = size_index_for(0);
        Self {
            size_idx,
            len: 0,
            deleted: 0,
            slots: vec![Slot::EMPTY; PRIMES[size_idx] as usize],
            head: None,
            tail: None,
        }
    }
}

impl IntSet {
    /// Creates an empty set with the default minimum capacity.
    /// Aborts if the table cannot be allocated; `with_minimum(0)` is the fallible equivalent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set that can hold `minimum` elements before it needs to grow.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfMemory`](crate::error::GraphError::OutOfMemory) if the table
    /// cannot be allocated.
    pub fn with_minimum(minimum: usize) -> Result<Self> {
        Self::with_size_index(size_index_for(minimum))
    }

    /// Collects the values of an iterator into a new set (duplicates are ignored)
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = Node>,
    {
        let iter = iter.into_iter();
        let mut set = Self::with_minimum(iter.size_hint().0)?;
        for key in iter {
            set.put(key)?;
        }
        Ok(set)
    }

    fn with_size_index(size_idx: usize) -> Result<Self> {
        assert!(size_idx < PRIMES.len(), "IntSet capacity overflow");
        let capacity = PRIMES[size_idx] as usize;

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, Slot::EMPTY);

        Ok(Self {
            size_idx,
            len: 0,
            deleted: 0,
            slots,
            head: None,
            tail: None,
        })
    }

    /// Returns the number of elements in the set
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if the set has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the underlying hash table (always one of the table primes)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn home_slot(&self, key: Node) -> usize {
        ((31 * key as u64) % self.slots.len() as u64) as usize
    }

    /// Linear scan from the home slot. Terminates as there is always a vacant slot in the table.
    fn lookup(&self, key: Node) -> Lookup {
        let capacity = self.slots.len();
        let mut pos = self.home_slot(key);
        let mut reusable = None;

        loop {
            match self.slots[pos].key {
                k if k == key => return Lookup::Found(pos),
                VACANT => return Lookup::Vacant(reusable.unwrap_or(pos)),
                DELETED if reusable.is_none() => reusable = Some(pos),
                _ => {}
            }

            pos += 1;
            if pos == capacity {
                pos = 0;
            }
        }
    }

    /// Returns *true* if `key` is in the set
    pub fn contains(&self, key: Node) -> bool {
        key <= MAX_KEY && matches!(self.lookup(key), Lookup::Found(_))
    }

    /// Inserts `key` into the set.
    /// Returns *true* if the element was already present.
    ///
    /// # Errors
    /// Fails only if the table needs to grow and the allocation fails. The set is then left
    /// unchanged.
    ///
    /// ** Panics if `key > MAX_KEY` **
    pub fn put(&mut self, key: Node) -> Result<bool> {
        assert!(key <= MAX_KEY, "IntSet cannot store {key}");

        if let Lookup::Found(_) = self.lookup(key) {
            return Ok(true);
        }

        self.reserve_one()?;
        self.insert_absent(key);
        Ok(false)
    }

    /// Makes room for one more element, either by growing or by purging deleted slots
    fn reserve_one(&mut self) -> Result<()> {
        let capacity = self.slots.len();
        if !fits(self.len + 1, capacity) {
            self.rehash(self.size_idx + 1)
        } else if !fits(self.len + self.deleted + 1, capacity) {
            self.rehash(self.size_idx)
        } else {
            Ok(())
        }
    }

    /// Inserts a key known to be absent without checking the utilization
    fn insert_absent(&mut self, key: Node) {
        let pos = match self.lookup(key) {
            Lookup::Vacant(pos) => pos,
            Lookup::Found(_) => unreachable!("key {key} is already present"),
        };

        if self.slots[pos].key == DELETED {
            self.deleted -= 1;
        }
        self.slots[pos] = Slot { key, next: None };

        match self.tail {
            Some(tail) => self.slots[tail.index()].next = link(pos),
            None => self.head = link(pos),
        }
        self.tail = link(pos);
        self.len += 1;
    }

    /// Moves all elements into a fresh table of the given size, preserving chain order
    fn rehash(&mut self, size_idx: usize) -> Result<()> {
        let mut rebuilt = Self::with_size_index(size_idx)?;
        for key in self.iter() {
            rebuilt.insert_absent(key);
        }
        *self = rebuilt;
        Ok(())
    }

    /// Removes `key` from the set.
    /// Returns *true* if the element was present.
    pub fn remove(&mut self, key: Node) -> bool {
        if key > MAX_KEY {
            return false;
        }
        let pos = match self.lookup(key) {
            Lookup::Found(pos) => pos,
            Lookup::Vacant(_) => return false,
        };

        // the chain is singly-linked, so the predecessor has to be searched for
        let mut prev: Option<usize> = None;
        let mut cur = self.head;
        while let Some(c) = cur {
            if c.index() == pos {
                break;
            }
            prev = Some(c.index());
            cur = self.slots[c.index()].next;
        }

        self.unlink(prev, pos);
        true
    }

    /// Removes the live slot `pos` whose chain predecessor is `prev`
    fn unlink(&mut self, prev: Option<usize>, pos: usize) {
        let next = self.slots[pos].next;
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        if next.is_none() {
            self.tail = prev.and_then(link);
        }

        self.slots[pos] = Slot {
            key: DELETED,
            next: None,
        };
        self.len -= 1;
        self.deleted += 1;
    }

    /// Removes and returns the oldest element of the set in O(1)
    pub fn pop_front(&mut self) -> Option<Node> {
        let head = self.head?.index();
        let key = self.slots[head].key;
        self.unlink(None, head);
        Some(key)
    }

    /// Removes all elements in `O(len)` without shrinking the table.
    ///
    /// Only the live slots are reset; deleted slots stay marked until the next rebuild.
    pub fn clear(&mut self) {
        let mut cur = self.head;
        while let Some(c) = cur {
            let slot = &mut self.slots[c.index()];
            cur = slot.next;
            *slot = Slot::EMPTY;
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over all elements in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cur: self.head,
            remaining: self.len,
        }
    }

    /// Returns the `pos`-th element in insertion order.
    /// ** Panics if `pos >= self.len()` **
    pub fn get(&self, pos: usize) -> Node {
        assert!(pos < self.len, "position {pos} out of bounds (len {})", self.len);
        self.iter().nth(pos).unwrap_or(INVALID_NODE)
    }

    /// Returns the position of `key` in insertion order, i.e. the inverse of [`IntSet::get`]
    pub fn index_of(&self, key: Node) -> Option<usize> {
        if !self.contains(key) {
            return None;
        }
        self.iter().position(|x| x == key)
    }

    /// Copies all elements into a `Vec` in insertion order
    pub fn to_vec(&self) -> Vec<Node> {
        self.iter().collect()
    }

    /// Adds all elements of `other` to `self`.
    ///
    /// # Errors
    /// On allocation failure, elements of `other` visited before the failure remain inserted.
    pub fn union(&mut self, other: &IntSet) -> Result<()> {
        for key in other.iter() {
            self.put(key)?;
        }
        Ok(())
    }

    /// Removes all elements of `other` from `self`
    pub fn difference(&mut self, other: &IntSet) {
        for key in other.iter() {
            self.remove(key);
        }
    }

    /// Retains only the elements of `self` that are also in `other`
    pub fn intersection(&mut self, other: &IntSet) {
        let mut prev: Option<usize> = None;
        let mut cur = self.head;

        while let Some(c) = cur {
            let pos = c.index();
            cur = self.slots[pos].next;

            if other.contains(self.slots[pos].key) {
                prev = Some(pos);
            } else {
                self.unlink(prev, pos);
            }
        }
    }

    /// Returns a uniformly random element of the set or `None` if it is empty.
    ///
    /// Let `N` be the number of elements and `P` the table size. Sampling random slots until a
    /// live one is hit takes `P / N` tries in expectation, while walking the chain to a random
    /// position takes `N / 2` steps. With a try costing about eight steps, sampling wins
    /// exactly if `N > 4 * sqrt(P)`.
    pub fn random_element<R>(&self, rng: &mut R) -> Option<Node>
    where
        R: Rng + ?Sized,
    {
        if self.len == 0 {
            return None;
        }

        let capacity = self.slots.len();
        if self.len as f64 > 4.0 * (capacity as f64).sqrt() {
            loop {
                let slot = self.slots[rng.random_range(0..capacity)];
                if slot.is_live() {
                    return Some(slot.key);
                }
            }
        }

        self.iter().nth(rng.random_range(0..self.len))
    }

    /// Relinks the chain to follow the table order, improving memory locality of iteration.
    /// This changes the iteration order of the set.
    pub fn optimize(&mut self) {
        let mut prev: Option<usize> = None;
        self.head = None;

        for pos in 0..self.slots.len() {
            if !self.slots[pos].is_live() {
                continue;
            }
            match prev {
                Some(p) => self.slots[p].next = link(pos),
                None => self.head = link(pos),
            }
            prev = Some(pos);
        }

        if let Some(p) = prev {
            self.slots[p].next = None;
        }
        self.tail = prev.and_then(link);
    }
}

/// Iterator over the elements of an [`IntSet`] in chain order
#[derive(Clone)]
pub struct Iter<'a> {
    slots: &'a [Slot],
    cur: Option<OptionalNode>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots[self.cur?.index()];
        self.cur = slot.next;
        self.remaining -= 1;
        Some(slot.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntSet {
    type Item = Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal if they have the same members, regardless of order
impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|x| other.contains(x))
    }
}

impl Eq for IntSet {}

impl Display for IntSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "}}")
    }
}

impl Debug for IntSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn set_of(keys: impl IntoIterator<Item = Node>) -> IntSet {
        IntSet::try_from_iter(keys).unwrap()
    }

    #[test]
    fn repeated_put_is_idempotent() {
        let mut set = IntSet::with_minimum(10).unwrap();
        for i in 0..10 {
            for _ in 0..10 {
                set.put(i).unwrap();
            }
        }
        assert_eq!(set.len(), 10);
        assert!(set.put(3).unwrap());
        assert!(!set.put(10).unwrap());
    }

    #[test]
    fn capacity_follows_primes() {
        assert_eq!(IntSet::new().capacity(), 13);
        assert_eq!(IntSet::with_minimum(10).unwrap().capacity(), 23);
        assert_eq!(IntSet::with_minimum(100).unwrap().capacity(), 193);

        let mut set = IntSet::new();
        for i in 0..5000 {
            set.put(i * 7).unwrap();
            assert!(PRIMES.contains(&(set.capacity() as u64)));
            assert!(fits(set.len(), set.capacity()));
        }
    }

    #[test]
    fn growth_preserves_insertion_order() {
        let keys = (0..3000u32).map(|i| (i * 7919) % 10007).collect_vec();
        let set = set_of(keys.iter().copied());
        assert_eq!(set.to_vec(), keys);
        for (pos, &key) in keys.iter().enumerate() {
            assert_eq!(set.get(pos), key);
            assert_eq!(set.index_of(key), Some(pos));
        }
        assert_eq!(set.index_of(10008), None);
    }

    #[test]
    fn remove_then_contains() {
        let mut set = set_of(0..20);
        assert!(set.remove(0));
        assert!(set.remove(19));
        assert!(set.remove(7));
        assert!(!set.remove(7));
        assert!(!set.remove(100));

        assert!(!set.contains(0));
        assert!(!set.contains(7));
        assert!(!set.contains(19));
        assert_eq!(set.len(), 17);
        assert_eq!(
            set.to_vec(),
            (1..19).filter(|&x| x != 7).collect_vec()
        );

        // appending after removing the tail must keep the chain intact
        set.put(42).unwrap();
        assert_eq!(set.iter().last(), Some(42));
    }

    #[test]
    fn removing_everything_resets_chain() {
        let mut set = set_of([4, 8, 15]);
        for key in [8, 4, 15] {
            assert!(set.remove(key));
        }
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);

        set.put(16).unwrap();
        set.put(23).unwrap();
        assert_eq!(set.to_vec(), vec![16, 23]);
    }

    #[test]
    fn collision_chains_survive_removal() {
        // 0, 13 and 26 share their home slot in a table of 13
        let mut set = IntSet::new();
        for key in [0, 13, 26] {
            set.put(key).unwrap();
        }
        assert_eq!(set.capacity(), 13);
        assert!(set.remove(13));
        assert!(set.contains(26));
        assert!(set.put(26).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn churn_purges_deleted_slots() {
        let mut set = IntSet::new();
        for round in 0..10_000u32 {
            set.put(round).unwrap();
            if round >= 4 {
                assert!(set.remove(round - 4));
            }
        }
        assert_eq!(set.len(), 4);
        assert_eq!(set.to_vec(), vec![9996, 9997, 9998, 9999]);
        assert_eq!(set.capacity(), 13);
    }

    #[test]
    fn pop_front_follows_insertion_order() {
        let mut set = set_of([9, 2, 5]);
        assert_eq!(set.pop_front(), Some(9));
        assert_eq!(set.pop_front(), Some(2));
        set.put(1).unwrap();
        assert_eq!(set.pop_front(), Some(5));
        assert_eq!(set.pop_front(), Some(1));
        assert_eq!(set.pop_front(), None);
    }

    #[test]
    fn even_odd_operations() {
        let mut even1 = set_of((0..10).map(|i| 2 * i));
        let mut even2 = even1.clone();
        let odd = set_of((0..10).map(|i| 2 * i + 1));

        even1.union(&odd).unwrap();
        assert_eq!(even1.len(), 20);

        even2.difference(&odd);
        assert_eq!(even2.len(), 10);

        even2.intersection(&odd);
        assert_eq!(even2.len(), 0);
        assert!(even2.iter().next().is_none());
    }

    #[test]
    fn intersection_keeps_order_and_tail() {
        let mut a = set_of([5, 1, 9, 3, 7]);
        let b = set_of([7, 3, 5]);
        a.intersection(&b);
        assert_eq!(a.to_vec(), vec![5, 3, 7]);

        a.put(11).unwrap();
        assert_eq!(a.to_vec(), vec![5, 3, 7, 11]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut set = set_of(0..1000);
        let capacity = set.capacity();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        assert!(!set.contains(5));
        set.put(5).unwrap();
        assert_eq!(set.to_vec(), vec![5]);
    }

    #[test]
    fn clear_touches_only_live_slots() {
        let mut set = IntSet::with_minimum(1_000_000).unwrap();
        let capacity = set.capacity();
        for _ in 0..10_000 {
            set.put(1).unwrap();
            set.clear();
        }
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        assert!(!set.contains(1));
        assert_eq!(set.iter().count(), 0);

        set.put(7).unwrap();
        set.put(1).unwrap();
        assert_eq!(set.to_vec(), vec![7, 1]);
    }

    #[test]
    fn clear_keeps_deleted_markers_consistent() {
        // 0, 13 and 26 share the home slot of a 13-slot table
        let mut set = set_of([0, 13, 26]);
        assert_eq!(set.capacity(), 13);
        assert!(set.remove(13));
        set.clear();

        for key in [0, 13, 26] {
            assert!(!set.contains(key));
        }
        assert!(!set.put(26).unwrap());
        assert!(!set.put(0).unwrap());
        assert!(set.contains(26) && set.contains(0));
        assert!(!set.contains(13));
        assert_eq!(set.to_vec(), vec![26, 0]);

        // churn on a cleared set never grows the table
        for round in 0..100 {
            set.put(round).unwrap();
            set.clear();
        }
        assert_eq!(set.capacity(), 13);
        assert!(set.is_empty());
    }

    #[test]
    fn random_element_is_member() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        assert_eq!(IntSet::new().random_element(rng), None);

        // chain walk
        let small = set_of([3, 1, 4]);
        let mut seen = BTreeSet::new();
        for _ in 0..200 {
            let x = small.random_element(rng).unwrap();
            assert!(small.contains(x));
            seen.insert(x);
        }
        assert_eq!(seen.len(), 3);

        // slot sampling
        let large = set_of((0..2000).map(|i| i * 3));
        assert!(large.len() as f64 > 4.0 * (large.capacity() as f64).sqrt());
        for _ in 0..200 {
            assert!(large.contains(large.random_element(rng).unwrap()));
        }
    }

    #[test]
    fn optimize_follows_table_order() {
        let mut set = set_of([40, 2, 17, 5]);
        set.optimize();
        let mut sorted_by_slot = set.to_vec();
        sorted_by_slot.sort_by_key(|&k| set.home_slot(k));
        assert_eq!(set.to_vec(), sorted_by_slot);
        assert_eq!(set, set_of([2, 5, 17, 40]));

        set.put(99).unwrap();
        assert_eq!(set.iter().last(), Some(99));
    }

    #[test]
    fn formatting() {
        let set = set_of([3, 1, 2]);
        assert_eq!(format!("{set}"), "{3, 1, 2}");
        assert_eq!(format!("{set:?}"), "{3, 1, 2}");
        assert_eq!(format!("{}", IntSet::new()), "{}");
    }

    proptest! {
        #[test]
        fn union_is_set_union(
            a in prop::collection::vec(0u32..300, 0..120),
            b in prop::collection::vec(0u32..300, 0..120),
        ) {
            let mut set = set_of(a.iter().copied());
            set.union(&set_of(b.iter().copied())).unwrap();

            let model: BTreeSet<_> = a.iter().chain(b.iter()).copied().collect();
            prop_assert_eq!(set.len(), model.len());
            prop_assert!(model.iter().all(|&x| set.contains(x)));
        }

        #[test]
        fn difference_is_set_difference(
            a in prop::collection::vec(0u32..300, 0..120),
            b in prop::collection::vec(0u32..300, 0..120),
        ) {
            let mut set = set_of(a.iter().copied());
            set.difference(&set_of(b.iter().copied()));

            let b_model: BTreeSet<_> = b.iter().copied().collect();
            let model: BTreeSet<_> = a.iter().copied().filter(|x| !b_model.contains(x)).collect();
            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.iter().collect::<BTreeSet<_>>(), model);
        }

        #[test]
        fn intersection_is_set_intersection(
            a in prop::collection::vec(0u32..300, 0..120),
            b in prop::collection::vec(0u32..300, 0..120),
        ) {
            let mut set = set_of(a.iter().copied());
            set.intersection(&set_of(b.iter().copied()));

            let b_model: BTreeSet<_> = b.iter().copied().collect();
            let model: BTreeSet<_> = a.iter().copied().filter(|x| b_model.contains(x)).collect();
            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.iter().collect::<BTreeSet<_>>(), model);
        }

        #[test]
        fn iteration_enumerates_live_elements(
            ops in prop::collection::vec((any::<bool>(), 0u32..64), 0..400),
        ) {
            let mut set = IntSet::new();
            let mut model: Vec<Node> = Vec::new();

            for (insert, key) in ops {
                if insert {
                    let present = set.put(key).unwrap();
                    prop_assert_eq!(present, model.contains(&key));
                    if !present {
                        model.push(key);
                    }
                } else {
                    let removed = set.remove(key);
                    prop_assert_eq!(removed, model.contains(&key));
                    model.retain(|&x| x != key);
                    prop_assert!(!set.contains(key));
                }
            }

            prop_assert_eq!(set.to_vec(), model.clone());
            let by_position = (0..set.len()).map(|i| set.get(i)).collect_vec();
            prop_assert_eq!(by_position, model);
        }
    }
}
