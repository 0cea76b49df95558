//! Integration tests for the poset store.
//!
//! Tests cover:
//! - Full lifecycle across several posets
//! - The engine invariants observed through the store surface
//! - Snapshot round-trip of a populated store

use pods_registry::{PosetStore, StoreError};

#[test]
fn full_lifecycle() {
    let mut store = PosetStore::new();
    let id = store.create();

    for v in ["A", "B", "C"] {
        store.insert(id, v).unwrap();
    }
    store.order(id, "A", "B").unwrap();
    store.order(id, "B", "C").unwrap();

    assert!(store.holds(id, "A", "B").unwrap());
    assert!(store.holds(id, "B", "C").unwrap());
    assert!(store.holds(id, "A", "C").unwrap());

    store.unorder(id, "A", "B").unwrap();
    assert!(!store.holds(id, "A", "B").unwrap());
    assert!(store.holds(id, "B", "C").unwrap());
    assert!(store.holds(id, "A", "C").unwrap());

    store.delete(id).unwrap();
    assert!(matches!(
        store.holds(id, "A", "C"),
        Err(StoreError::PosetNotFound(_))
    ));
}

#[test]
fn bridging_element_removal_through_the_store() {
    let mut store = PosetStore::new();
    let id = store.create();
    for v in ["a", "b", "c"] {
        store.insert(id, v).unwrap();
    }
    store.order(id, "a", "b").unwrap();
    store.order(id, "b", "c").unwrap();

    store.remove(id, "b").unwrap();
    assert_eq!(store.size(id).unwrap(), 2);
    assert!(store.holds(id, "a", "c").unwrap());
}

#[test]
fn many_posets_do_not_interfere() {
    let mut store = PosetStore::new();
    let ids: Vec<_> = (0..10).map(|_| store.create()).collect();

    for (i, &id) in ids.iter().enumerate() {
        store.insert(id, &format!("v{}", i)).unwrap();
    }
    assert_eq!(store.len(), 10);
    for (i, &id) in ids.iter().enumerate() {
        assert_eq!(store.size(id).unwrap(), 1);
        assert!(store.holds(id, &format!("v{}", i), &format!("v{}", i)).unwrap());
    }

    for &id in &ids[..5] {
        store.delete(id).unwrap();
    }
    assert_eq!(store.len(), 5);
}

#[test]
fn snapshot_round_trip() {
    let mut store = PosetStore::new();
    let id = store.create();
    for v in ["x", "y", "z"] {
        store.insert(id, v).unwrap();
    }
    store.order(id, "x", "y").unwrap();
    store.order(id, "y", "z").unwrap();

    let json = serde_json::to_string(&store).unwrap();
    let mut restored: PosetStore = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, store);
    assert!(restored.holds(id, "x", "z").unwrap());

    // The restored counter keeps allocating fresh ids.
    let next = restored.create();
    assert_ne!(next, id);
}
