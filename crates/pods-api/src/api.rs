//! The sentinel-returning facade over the poset store.

use parking_lot::RwLock;
use pods_registry::{PosetId, PosetStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared, lock-guarded facade exposing the nine store operations.
///
/// Cloning is cheap and every clone addresses the same store. Each call
/// acquires the lock once, runs to completion, and releases it; there is
/// no atomicity across calls.
#[derive(Clone, Debug, Default)]
pub struct PosetApi {
    store: Arc<RwLock<PosetStore>>,
}

impl PosetApi {
    /// Create a facade over a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new poset, returning its id.
    pub fn new_poset(&self) -> u64 {
        let id = self.store.write().create();
        debug!(%id, "new_poset");
        id.0
    }

    /// Discard a poset. Returns `false` if the id is not live.
    pub fn delete(&self, id: u64) -> bool {
        debug!(id, "delete");
        match self.store.write().delete(PosetId(id)) {
            Ok(()) => true,
            Err(err) => {
                warn!(id, %err, "delete failed");
                false
            }
        }
    }

    /// Number of elements in a poset. Returns `0` if the id is not live.
    pub fn size(&self, id: u64) -> usize {
        debug!(id, "size");
        match self.store.read().size(PosetId(id)) {
            Ok(count) => count,
            Err(err) => {
                warn!(id, %err, "size failed");
                0
            }
        }
    }

    /// Insert an element. Returns `false` on any failure.
    pub fn insert(&self, id: u64, value: Option<&str>) -> bool {
        debug!(id, value = ?value, "insert");
        let Some(value) = require("insert", "value", value) else {
            return false;
        };
        match self.store.write().insert(PosetId(id), value) {
            Ok(_) => true,
            Err(err) => {
                warn!(id, value, %err, "insert failed");
                false
            }
        }
    }

    /// Remove an element. Returns `false` on any failure.
    pub fn remove(&self, id: u64, value: Option<&str>) -> bool {
        debug!(id, value = ?value, "remove");
        let Some(value) = require("remove", "value", value) else {
            return false;
        };
        match self.store.write().remove(PosetId(id), value) {
            Ok(()) => true,
            Err(err) => {
                warn!(id, value, %err, "remove failed");
                false
            }
        }
    }

    /// Record the relation `value1 < value2`. Returns `false` on any
    /// failure.
    pub fn add(&self, id: u64, value1: Option<&str>, value2: Option<&str>) -> bool {
        debug!(id, value1 = ?value1, value2 = ?value2, "add");
        let Some((a, b)) = require_pair("add", value1, value2) else {
            return false;
        };
        match self.store.write().order(PosetId(id), a, b) {
            Ok(()) => true,
            Err(err) => {
                warn!(id, value1 = a, value2 = b, %err, "add failed");
                false
            }
        }
    }

    /// Delete the directly stored relation `value1 < value2`. Returns
    /// `false` on any failure.
    pub fn del(&self, id: u64, value1: Option<&str>, value2: Option<&str>) -> bool {
        debug!(id, value1 = ?value1, value2 = ?value2, "del");
        let Some((a, b)) = require_pair("del", value1, value2) else {
            return false;
        };
        match self.store.write().unorder(PosetId(id), a, b) {
            Ok(()) => true,
            Err(err) => {
                warn!(id, value1 = a, value2 = b, %err, "del failed");
                false
            }
        }
    }

    /// Whether `value1 <= value2` holds. Returns `false` on any failure,
    /// indistinguishable from a genuine negative by design - consult the
    /// diagnostics when that matters.
    pub fn test(&self, id: u64, value1: Option<&str>, value2: Option<&str>) -> bool {
        debug!(id, value1 = ?value1, value2 = ?value2, "test");
        let Some((a, b)) = require_pair("test", value1, value2) else {
            return false;
        };
        match self.store.read().holds(PosetId(id), a, b) {
            Ok(answer) => answer,
            Err(err) => {
                warn!(id, value1 = a, value2 = b, %err, "test failed");
                false
            }
        }
    }

    /// Reset a poset to empty in place. Returns `false` if the id is not
    /// live.
    pub fn clear(&self, id: u64) -> bool {
        debug!(id, "clear");
        match self.store.write().clear(PosetId(id)) {
            Ok(()) => true,
            Err(err) => {
                warn!(id, %err, "clear failed");
                false
            }
        }
    }

    /// Snapshot of the element values of a poset, empty if the id is not
    /// live.
    pub fn elements(&self, id: u64) -> Vec<String> {
        match self.store.read().get(PosetId(id)) {
            Ok(poset) => poset.values().map(String::from).collect(),
            Err(err) => {
                warn!(id, %err, "elements failed");
                Vec::new()
            }
        }
    }

    /// Number of live posets in the store.
    pub fn poset_count(&self) -> usize {
        self.store.read().len()
    }
}

fn require<'a>(op: &str, name: &str, value: Option<&'a str>) -> Option<&'a str> {
    if value.is_none() {
        warn!(op, name, "malformed value (missing)");
    }
    value
}

/// Both values are checked before bailing, so a call with two malformed
/// values reports both.
fn require_pair<'a>(
    op: &str,
    value1: Option<&'a str>,
    value2: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    let a = require(op, "value1", value1);
    let b = require(op, "value2", value2);
    Some((a?, b?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_instead_of_errors() {
        let api = PosetApi::new();
        // Nothing is live yet.
        assert!(!api.delete(42));
        assert_eq!(api.size(42), 0);
        assert!(!api.clear(42));
        assert!(!api.test(42, Some("a"), Some("b")));
    }

    #[test]
    fn malformed_values_are_rejected_up_front() {
        let api = PosetApi::new();
        let id = api.new_poset();
        assert!(!api.insert(id, None));
        assert!(!api.add(id, None, None));
        assert!(!api.del(id, Some("a"), None));
        assert_eq!(api.size(id), 0);
    }

    #[test]
    fn clones_share_the_store() {
        let api = PosetApi::new();
        let other = api.clone();
        let id = api.new_poset();
        assert!(other.insert(id, Some("x")));
        assert_eq!(api.size(id), 1);
    }
}
