use crate::{edge::*, error::Result, node::*};

/// Side table storing one weight per logical edge of a weighted [`Graph`](super::Graph).
///
/// Records are keyed by the normalized endpoints, hence `(u, v)` and `(v, u)` share a weight even
/// in directed graphs. Lookups use binary search while the table is sorted and fall back to a
/// linear scan otherwise.
#[derive(Debug, Clone)]
pub struct EdgeWeights {
    records: Vec<WeightedEdge>,
    sorted: bool,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            sorted: true,
        }
    }
}

impl EdgeWeights {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of weight records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns *true* if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns *true* if lookups may use binary search
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Makes room for one more record so that a subsequent [`EdgeWeights::push`] cannot fail
    pub fn reserve_one(&mut self) -> Result<()> {
        self.records.try_reserve(1)?;
        Ok(())
    }

    /// Appends a record for `{u, v}` and marks the table as unsorted
    pub fn push(&mut self, u: Node, v: Node, weight: f64) {
        self.records.push(WeightedEdge::new(u, v, weight));
        self.sorted = false;
    }

    /// Sorts the records by their endpoints
    pub fn sort(&mut self) {
        self.records.sort_unstable_by(WeightedEdge::cmp_endpoints);
        self.sorted = true;
    }

    /// Returns the weight of `{u, v}` if a record exists
    pub fn lookup(&self, u: Node, v: Node) -> Option<f64> {
        let key = Edge(u, v).normalized();
        if self.sorted {
            self.records
                .binary_search_by(|r| r.edge.cmp(&key))
                .ok()
                .map(|i| self.records[i].weight)
        } else {
            self.records
                .iter()
                .find(|r| r.edge == key)
                .map(|r| r.weight)
        }
    }

    /// Iterates over all records in table order
    pub fn iter(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.records.iter()
    }
}
