//! String interning - bijective value ⇄ representative association.
//!
//! Each poset names its elements by a small integer surrogate rather than
//! by the string itself, giving cheap graph-node keys and deduplicated
//! storage of the values.

use crate::error::{PosetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-poset integer surrogate for an interned string value.
///
/// Allocated from a monotonic per-poset counter and never reused after the
/// owning element is removed, so a stale representative self-invalidates
/// instead of silently aliasing a later element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Repr(pub u32);

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The value ⇄ representative bijection of one poset.
///
/// Invariant: no string maps to two representatives and no representative
/// is named by two strings. Both directions are stored so membership and
/// enumeration are cheap either way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interner {
    /// Next representative to hand out. ~4 * 10^9 values before exhaustion,
    /// enough that reuse never becomes a concern in practice.
    next: u32,
    by_value: BTreeMap<String, Repr>,
    by_repr: BTreeMap<Repr, String>,
}

impl Interner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a value to its representative, if interned.
    pub fn resolve(&self, value: &str) -> Option<Repr> {
        self.by_value.get(value).copied()
    }

    /// Look up the value a representative names, if still live.
    pub fn value_of(&self, repr: Repr) -> Option<&str> {
        self.by_repr.get(&repr).map(String::as_str)
    }

    /// Intern a fresh value, allocating the next representative.
    ///
    /// Fails with [`PosetError::ElementExists`] if the value already
    /// resolves.
    pub fn intern(&mut self, value: &str) -> Result<Repr> {
        if self.by_value.contains_key(value) {
            return Err(PosetError::ElementExists(value.to_string()));
        }
        let repr = Repr(self.next);
        self.next += 1;
        self.by_value.insert(value.to_string(), repr);
        self.by_repr.insert(repr, value.to_string());
        Ok(repr)
    }

    /// Drop the association for `value`, returning the retired
    /// representative. The representative is never reassigned within this
    /// poset.
    pub fn release(&mut self, value: &str) -> Result<Repr> {
        match self.by_value.remove(value) {
            Some(repr) => {
                self.by_repr.remove(&repr);
                Ok(repr)
            }
            None => Err(PosetError::ElementNotFound(value.to_string())),
        }
    }

    /// Number of live associations.
    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Iterate over the interned values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.by_value.keys().map(String::as_str)
    }

    /// Reset to empty, restarting representative numbering from zero.
    pub fn clear(&mut self) {
        self.next = 0;
        self.by_value.clear();
        self.by_repr.clear();
    }
}
