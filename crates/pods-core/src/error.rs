//! Error types for the relation engine.

use thiserror::Error;

/// Errors raised by per-poset operations.
///
/// Every operation either fully succeeds or returns one of these with the
/// poset left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PosetError {
    /// The value is already an element of the poset.
    #[error("element \"{0}\" already exists")]
    ElementExists(String),

    /// The value is not an element of the poset.
    #[error("element \"{0}\" not found")]
    ElementNotFound(String),

    /// At least one endpoint of a relation operation is not an element.
    /// Reported jointly: the error does not distinguish which of the two
    /// values is missing.
    #[error("element \"{0}\" or \"{1}\" not found")]
    EndpointsMissing(String, String),

    /// The relation is reflexive, already implied, or would violate
    /// antisymmetry.
    #[error("relation (\"{0}\", \"{1}\") cannot be added")]
    CannotOrder(String, String),

    /// The relation is reflexive, not directly stored, or still implied by
    /// another path once the direct edge is removed.
    #[error("relation (\"{0}\", \"{1}\") cannot be deleted")]
    CannotUnorder(String, String),
}

/// Result type for relation-engine operations.
pub type Result<T> = std::result::Result<T, PosetError>;
