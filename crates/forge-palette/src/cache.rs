//! Process-wide memoization for pure color derivations.
//!
//! Every derivation in this crate is a pure function of its inputs, so a
//! result computed once can be handed out for the rest of the session. Each
//! operation owns one static [`Memo`]; entries are keyed by the full input
//! and never invalidated. Input cardinality is driven by what a user types,
//! so the maps stay small without an eviction policy.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// An unbounded memo table for one operation.
pub struct Memo<V> {
    operation: &'static str,
    entries: Mutex<BTreeMap<String, V>>,
}

impl<V: Clone> Memo<V> {
    /// Create an empty table. `operation` names the cached function in logs.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self {
            operation,
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs while the table is locked; it must not touch this
    /// same memo.
    pub fn get_or_insert_with(&self, key: String, compute: impl FnOnce() -> V) -> V {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = entries.get(&key) {
            tracing::trace!(operation = self.operation, %key, "memo hit");
            return hit.clone();
        }
        let value = compute();
        entries.insert(key, value.clone());
        value
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn computes_once_per_key() {
        let memo: Memo<u32> = Memo::new("test");
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            7
        };

        assert_eq!(memo.get_or_insert_with("a".into(), compute), 7);
        assert_eq!(memo.get_or_insert_with("a".into(), compute), 7);
        assert_eq!(calls.get(), 1);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn distinct_keys_are_cached_separately() {
        let memo: Memo<String> = Memo::new("test");
        assert!(memo.is_empty());
        memo.get_or_insert_with("x".into(), || "one".into());
        let second = memo.get_or_insert_with("y".into(), || "two".into());
        assert_eq!(second, "two");
        assert_eq!(memo.len(), 2);
    }
}
