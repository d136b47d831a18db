// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo tables scoped to a single call.
//!
//! A `MemoTable` caches the result of a pure function by its input. It is a
//! plain owned value: the call that creates it is the only one that sees it,
//! and it is dropped when that call returns.

use std::collections::HashMap;
use std::hash::Hash;

/// Cache of `f(key)` results, with hit and miss counts.
#[derive(Debug, Clone)]
pub struct MemoTable<K, V> {
    table: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V> MemoTable<K, V> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `key`, computing and storing `compute(&key)` on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        use std::collections::hash_map::Entry;

        match self.table.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let value = compute(entry.key());
                entry.insert(value)
            }
        }
    }

    /// True if `key` has already been computed.
    pub fn contains(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Lookups answered from the table.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to compute.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: Eq + Hash, V> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
