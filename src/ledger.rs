//! Numeric ledger: a multiset of integers kept alongside a cosmology.
//!
//! Removal is bulk: `remove(n)` drops every occurrence of `n`, not just one.
//! Callers expecting per-occurrence removal must count with
//! [`NumberLedger::multiplicity`] and re-add what they want to keep.

use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLedger {
    /// value -> number of occurrences (never zero); the cardinality is derived from it
    counts: BTreeMap<i64, usize>,
}

impl NumberLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one occurrence of `n`.
    pub fn add(&mut self, n: i64) {
        *self.counts.entry(n).or_insert(0) += 1;
    }

    /// Remove every occurrence of `n`. Returns how many were removed;
    /// removing an absent value is a no-op returning 0.
    pub fn remove(&mut self, n: i64) -> usize {
        self.counts.remove(&n).unwrap_or(0)
    }

    /// Cardinality, counting duplicates.
    pub fn count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn multiplicity(&self, n: i64) -> usize {
        self.counts.get(&n).copied().unwrap_or(0)
    }

    pub fn contains(&self, n: i64) -> bool {
        self.counts.contains_key(&n)
    }

    /// Every occurrence in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.counts
            .iter()
            .flat_map(|(&value, &count)| std::iter::repeat(value).take(count))
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl FromIterator<i64> for NumberLedger {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut ledger = NumberLedger::new();
        for n in iter {
            ledger.add(n);
        }
        ledger
    }
}

impl fmt::Display for NumberLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str("]")
    }
}
