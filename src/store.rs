//! Bounded insertion-ordered position store.
//!
//! Maps route pathnames to captured scroll offsets:
//! - Insertion order is preserved; updating an existing path keeps its slot
//! - Capacity is enforced by the caller via `trim_to_capacity` before insert
//! - Eviction removes exactly the oldest-inserted entry
//!
//! Entries leave the store two ways: evicted when over capacity, or consumed
//! by a successful restore (restores are one-shot).

use log::debug;

/// Insertion-ordered `pathname -> offset` map.
///
/// Backed by a `Vec` of pairs: capacities are single-digit in practice, so a
/// linear scan beats hashing and keeps insertion order for free.
#[derive(Debug, Default)]
pub struct PositionStore {
    entries: Vec<(String, u64)>,
}

impl PositionStore {
    pub fn new() -> Self {
        PositionStore {
            entries: Vec::new(),
        }
    }

    /// Insert or update the offset for `path`. An existing path is updated
    /// in place and keeps the position of its first insertion.
    pub fn set(&mut self, path: &str, offset: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| p == path) {
            entry.1 = offset;
        } else {
            self.entries.push((path.to_string(), offset));
        }
    }

    /// Look up the stored offset for `path`. A stored `0` is a real value;
    /// callers must branch on presence, not on the offset itself.
    pub fn get(&self, path: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|&(_, offset)| offset)
    }

    /// Remove the entry for `path` if present. Silent no-op otherwise.
    pub fn delete(&mut self, path: &str) {
        self.entries.retain(|(p, _)| p != path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// If the store holds more than `max` entries, evict the single
    /// oldest-inserted one. Capture calls this before every insert, and a
    /// capture adds at most one entry, so one eviction is always enough.
    pub fn trim_to_capacity(&mut self, max: usize) {
        if self.entries.len() > max {
            let (path, offset) = self.entries.remove(0);
            debug!("evicted oldest entry {path} (offset {offset})");
        }
    }
}
