//! # pods-core
//!
//! The relation-maintenance engine of the ordbase Partial-Order Data Store.
//!
//! This crate provides:
//! - String interning with per-poset integer representatives
//! - Direct-edge relation storage with symmetric predecessor/successor sets
//! - Breadth-first reachability queries
//! - The [`Poset`] engine: element and relation lifecycle with acyclicity,
//!   antisymmetry, and closure-soundness maintained across every operation
//!
//! ## Example
//!
//! ```rust
//! use pods_core::Poset;
//!
//! let mut poset = Poset::new();
//! poset.insert("A").unwrap();
//! poset.insert("B").unwrap();
//! poset.insert("C").unwrap();
//! poset.order("A", "B").unwrap();
//! poset.order("B", "C").unwrap();
//!
//! // Transitivity: A < C without a direct edge.
//! assert!(poset.holds("A", "C").unwrap());
//!
//! // Antisymmetry: the reverse relation is rejected.
//! assert!(poset.order("C", "A").is_err());
//! ```

pub mod error;
pub mod graph;
pub mod interner;
pub mod poset;
pub mod reach;

pub use error::{PosetError, Result};
pub use graph::{Node, RelationGraph};
pub use interner::{Interner, Repr};
pub use poset::Poset;
pub use reach::reachable;
