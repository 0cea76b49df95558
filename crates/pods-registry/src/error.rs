//! Error types for the registry layer.

use crate::store::PosetId;
use pods_core::PosetError;
use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No live poset with this id.
    #[error("poset {0} not found")]
    PosetNotFound(PosetId),

    /// An engine-level failure inside a resolved poset.
    #[error(transparent)]
    Poset(#[from] PosetError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
