// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded, ordered multiset of visited states keyed by `(actor_count,
//! heap_bytes_used)` for cheap candidate filtering, with a final
//! snapshot-equality check deciding real membership.

use mc_core::{Snapshot, StateNum};
use std::collections::{BTreeMap, VecDeque};

/// Returned by [`VisitedStates::add`] when an equal state was already
/// present; carries the canonical state's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRecord {
    pub original_num: StateNum,
}

struct Entry<Snap> {
    num: StateNum,
    key: (usize, usize),
    snapshot: Snap,
}

/// Ordered multiset of (pointer-to-)State keyed by `(actor_count,
/// heap_bytes_used)`. Candidate lookup is O(log n) in that key; the
/// snapshot-equal check (the expensive part) only runs on key matches.
pub struct VisitedStates<Snap> {
    cap: usize,
    buckets: BTreeMap<(usize, usize), Vec<usize>>,
    entries: VecDeque<Entry<Snap>>,
}

impl<Snap: Snapshot> VisitedStates<Snap> {
    /// `cap == 0` means unbounded (the caller is expected to have already
    /// checked `max_visited_states > 0` before constructing this at all —
    /// see the explorer, which only builds one when the config enables
    /// state-equality reduction).
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buckets: BTreeMap::new(),
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// If an equal state is already present, return its canonical `num`
    /// without inserting. Otherwise insert `(num, snapshot)` and return
    /// `None`, evicting the oldest entry first if at capacity.
    pub fn add(
        &mut self,
        num: StateNum,
        snapshot: Snap,
        actor_count: usize,
        heap_bytes_used: usize,
    ) -> Option<HitRecord> {
        let key = (actor_count, heap_bytes_used);

        if let Some(indices) = self.buckets.get(&key) {
            for &idx in indices {
                if self.entries[idx].snapshot.equal(&snapshot) {
                    tracing::debug!(
                        incoming = %num,
                        original = %self.entries[idx].num,
                        "visited-state hit"
                    );
                    return Some(HitRecord {
                        original_num: self.entries[idx].num,
                    });
                }
            }
        }

        if self.cap > 0 && self.entries.len() >= self.cap {
            self.evict_oldest();
        }

        let idx = self.entries.len();
        self.entries.push_back(Entry {
            num,
            key,
            snapshot,
        });
        self.buckets.entry(key).or_default().push(idx);
        None
    }

    fn evict_oldest(&mut self) {
        // Indices stored in `buckets` are offsets into `entries`; since we
        // only ever pop from the front, every stored index must be
        // decremented by one after the pop to stay valid.
        if self.entries.pop_front().is_none() {
            return;
        }
        let mut rebuilt: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            rebuilt.entry(entry.key).or_default().push(idx);
        }
        self.buckets = rebuilt;
    }
}

#[cfg(test)]
#[path = "visited_tests.rs"]
mod tests;
