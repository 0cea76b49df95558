//! # pods-api
//!
//! Sentinel-returning API surface for the ordbase Partial-Order Data Store.
//!
//! [`PosetApi`] adapts the registry's `Result`-based operations to a flat
//! surface that never propagates an error: every failure maps to a sentinel
//! (`false`, or `0` for counts) and is reported as a `tracing` diagnostic
//! instead. Values arrive as `Option<&str>` so a missing value can be
//! rejected as malformed rather than panicking anywhere deeper.
//!
//! The facade holds the store behind a [`parking_lot::RwLock`] so it can be
//! cloned and shared; the engine itself stays synchronization-free and each
//! call runs to completion under the lock.
//!
//! ## Example
//!
//! ```rust
//! use pods_api::PosetApi;
//!
//! let api = PosetApi::new();
//! let id = api.new_poset();
//! assert!(api.insert(id, Some("A")));
//! assert!(api.insert(id, Some("B")));
//! assert!(api.add(id, Some("A"), Some("B")));
//! assert!(api.test(id, Some("A"), Some("B")));
//!
//! // Failures surface as sentinels, never as panics or errors.
//! assert!(!api.insert(id, None));
//! assert!(!api.test(id, Some("A"), Some("missing")));
//! ```

pub mod api;

pub use api::PosetApi;
