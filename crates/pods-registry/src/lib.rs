//! # pods-registry
//!
//! The poset registry of the ordbase Partial-Order Data Store.
//!
//! A [`PosetStore`] owns every live poset, keyed by an opaque [`PosetId`]
//! allocated from a store-wide monotonic counter. Ids are never reused
//! while the store lives. Registry preconditions (id resolution) compose
//! in front of the engine operations, so a single [`StoreError`] covers
//! both "no such poset" and every engine failure.
//!
//! ## Example
//!
//! ```rust
//! use pods_registry::PosetStore;
//!
//! let mut store = PosetStore::new();
//! let id = store.create();
//! store.insert(id, "A").unwrap();
//! store.insert(id, "B").unwrap();
//! store.order(id, "A", "B").unwrap();
//! assert!(store.holds(id, "A", "B").unwrap());
//! assert_eq!(store.size(id).unwrap(), 2);
//! ```

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{PosetId, PosetStore};
