//! The poset store: id-keyed ownership of every live poset.
//!
//! An explicit, lifecycle-scoped arena rather than process-global state:
//! callers hold the store and address posets through opaque ids, keeping
//! O(1) lookup without any hidden shared mutability.

use crate::error::{Result, StoreError};
use pods_core::{Poset, Repr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for a poset.
///
/// Allocated from a store-wide monotonic counter and never reused while
/// the store lives (~2^64 allocations before overflow, practically
/// unreachable).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PosetId(pub u64);

impl fmt::Display for PosetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns the id → poset table and the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosetStore {
    next_id: u64,
    posets: BTreeMap<PosetId, Poset>,
}

impl PosetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and install an empty poset under it.
    pub fn create(&mut self) -> PosetId {
        let id = PosetId(self.next_id);
        self.next_id += 1;
        self.posets.insert(id, Poset::new());
        id
    }

    /// Discard the poset entirely, releasing all elements and relations.
    pub fn delete(&mut self, id: PosetId) -> Result<()> {
        self.posets
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::PosetNotFound(id))
    }

    /// Resolve an id to its poset.
    pub fn get(&self, id: PosetId) -> Result<&Poset> {
        self.posets.get(&id).ok_or(StoreError::PosetNotFound(id))
    }

    /// Resolve an id to its poset, mutably.
    pub fn get_mut(&mut self, id: PosetId) -> Result<&mut Poset> {
        self.posets
            .get_mut(&id)
            .ok_or(StoreError::PosetNotFound(id))
    }

    /// Whether the id names a live poset.
    pub fn contains(&self, id: PosetId) -> bool {
        self.posets.contains_key(&id)
    }

    /// Number of live posets.
    pub fn len(&self) -> usize {
        self.posets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posets.is_empty()
    }

    // Pass-throughs composing id resolution with the engine operations.

    /// Number of live elements in the poset.
    pub fn size(&self, id: PosetId) -> Result<usize> {
        Ok(self.get(id)?.len())
    }

    /// Reset the poset to empty in place; the id stays valid.
    pub fn clear(&mut self, id: PosetId) -> Result<()> {
        self.get_mut(id)?.clear();
        Ok(())
    }

    /// Insert an element into the poset.
    pub fn insert(&mut self, id: PosetId, value: &str) -> Result<Repr> {
        Ok(self.get_mut(id)?.insert(value)?)
    }

    /// Remove an element from the poset.
    pub fn remove(&mut self, id: PosetId, value: &str) -> Result<()> {
        Ok(self.get_mut(id)?.remove(value)?)
    }

    /// Record the relation `a < b` in the poset.
    pub fn order(&mut self, id: PosetId, a: &str, b: &str) -> Result<()> {
        Ok(self.get_mut(id)?.order(a, b)?)
    }

    /// Delete the directly stored relation `a < b` from the poset.
    pub fn unorder(&mut self, id: PosetId, a: &str, b: &str) -> Result<()> {
        Ok(self.get_mut(id)?.unorder(a, b)?)
    }

    /// Whether `a <= b` holds in the poset.
    pub fn holds(&self, id: PosetId, a: &str, b: &str) -> Result<bool> {
        Ok(self.get(id)?.holds(a, b)?)
    }
}
