//! The relation engine: one mutable partially ordered set over strings.
//!
//! A [`Poset`] owns an [`Interner`] and a [`RelationGraph`] and keeps three
//! invariants across every operation:
//! - acyclicity: no representative reaches itself via a nonempty path
//! - antisymmetry: `a` reachable from `b` and `b` from `a` only when `a == b`
//! - closure-soundness: no true relation is ever lost by an internal edge
//!   rewrite; removal algorithms re-materialize bridged relations
//!
//! Each operation is atomic with respect to those invariants: it either
//! fully succeeds or fails leaving the poset untouched.

use crate::error::{PosetError, Result};
use crate::graph::RelationGraph;
use crate::interner::{Interner, Repr};
use crate::reach::reachable;
use serde::{Deserialize, Serialize};

/// A mutable poset over string-valued elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poset {
    interner: Interner,
    graph: RelationGraph,
}

impl Poset {
    /// Create an empty poset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// Whether `value` is an element.
    pub fn contains(&self, value: &str) -> bool {
        self.interner.resolve(value).is_some()
    }

    /// Iterate over the element values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.interner.values()
    }

    /// Reset to empty in place, restarting representative numbering as if
    /// the poset were newly created.
    pub fn clear(&mut self) {
        self.interner.clear();
        self.graph.clear();
    }

    /// Insert `value` as a new element, unrelated to every existing one.
    ///
    /// Fails with [`PosetError::ElementExists`] if already present.
    pub fn insert(&mut self, value: &str) -> Result<Repr> {
        let repr = self.interner.intern(value)?;
        self.graph.add_node(repr);
        Ok(repr)
    }

    /// Remove `value` and every relation it participates in.
    ///
    /// Relations that held only by transiting through the removed element
    /// survive: for predecessors `P` and successors `S` of the node, every
    /// `p -> s` pair is materialized as a direct edge before the node is
    /// dropped. Never fails once the element resolves.
    pub fn remove(&mut self, value: &str) -> Result<()> {
        let repr = self
            .interner
            .resolve(value)
            .ok_or_else(|| PosetError::ElementNotFound(value.to_string()))?;
        if let Some((preds, succs)) = self.graph.remove_node(repr) {
            self.graph.link_all(&preds, &succs);
        }
        self.interner.release(value)?;
        Ok(())
    }

    /// Record the relation `a < b`.
    ///
    /// Fails with [`PosetError::EndpointsMissing`] when either value does
    /// not resolve, and with [`PosetError::CannotOrder`] when the relation
    /// is reflexive, already implied, or would violate antisymmetry.
    ///
    /// On success exactly one direct edge is inserted; existing edges are
    /// never rewritten, so redundant direct edges may accumulate over time.
    /// That is deliberate: relation deletion operates on the direct edge
    /// set as stored, and trimming it would change which deletions succeed.
    pub fn order(&mut self, a: &str, b: &str) -> Result<()> {
        let (ra, rb) = self.resolve_pair(a, b)?;
        if ra == rb || reachable(&self.graph, ra, rb) || reachable(&self.graph, rb, ra) {
            return Err(PosetError::CannotOrder(a.to_string(), b.to_string()));
        }
        self.graph.insert_edge(ra, rb);
        Ok(())
    }

    /// Delete the directly stored relation `a < b`.
    ///
    /// Fails with [`PosetError::EndpointsMissing`] when either value does
    /// not resolve, and with [`PosetError::CannotUnorder`] when `a == b`,
    /// when no direct edge `a -> b` exists, or when the relation would
    /// still be implied by another path after the edge is removed - in the
    /// last case the edge is reinstated and the poset is left untouched.
    ///
    /// A legal deletion re-materializes the relations that transited the
    /// removed edge: `a` is linked to every successor of `b`, and every
    /// predecessor of `a` is linked to `b`.
    pub fn unorder(&mut self, a: &str, b: &str) -> Result<()> {
        let (ra, rb) = self.resolve_pair(a, b)?;
        if ra == rb || !self.graph.has_edge(ra, rb) {
            return Err(PosetError::CannotUnorder(a.to_string(), b.to_string()));
        }

        self.graph.remove_edge(ra, rb);
        if reachable(&self.graph, ra, rb) {
            // Still implied via another path: roll back and refuse.
            self.graph.insert_edge(ra, rb);
            return Err(PosetError::CannotUnorder(a.to_string(), b.to_string()));
        }

        // a < b < x held for every successor x of b, and p < a < b for
        // every predecessor p of a; both must survive the edge removal.
        let succs_of_b = self.graph.succs(rb).cloned().unwrap_or_default();
        for s in succs_of_b {
            self.graph.insert_edge(ra, s);
        }
        let preds_of_a = self.graph.preds(ra).cloned().unwrap_or_default();
        for p in preds_of_a {
            self.graph.insert_edge(p, rb);
        }
        Ok(())
    }

    /// Whether `a <= b` holds, without mutation.
    ///
    /// Fails with [`PosetError::EndpointsMissing`] when either value does
    /// not resolve.
    pub fn holds(&self, a: &str, b: &str) -> Result<bool> {
        let (ra, rb) = self.resolve_pair(a, b)?;
        Ok(reachable(&self.graph, ra, rb))
    }

    /// Read access to the direct-edge graph.
    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<(Repr, Repr)> {
        match (self.interner.resolve(a), self.interner.resolve(b)) {
            (Some(ra), Some(rb)) => Ok((ra, rb)),
            _ => Err(PosetError::EndpointsMissing(a.to_string(), b.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poset_with(values: &[&str]) -> Poset {
        let mut poset = Poset::new();
        for v in values {
            poset.insert(v).unwrap();
        }
        poset
    }

    #[test]
    fn fresh_element_is_reflexive_and_unrelated() {
        let poset = poset_with(&["a", "b"]);
        assert!(poset.holds("a", "a").unwrap());
        assert!(!poset.holds("a", "b").unwrap());
        assert!(!poset.holds("b", "a").unwrap());
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut poset = poset_with(&["a"]);
        assert_eq!(
            poset.insert("a"),
            Err(PosetError::ElementExists("a".to_string()))
        );
        assert_eq!(poset.len(), 1);
    }

    #[test]
    fn order_is_transitive() {
        let mut poset = poset_with(&["a", "b", "c"]);
        poset.order("a", "b").unwrap();
        poset.order("b", "c").unwrap();
        assert!(poset.holds("a", "c").unwrap());
    }

    #[test]
    fn antisymmetry_rejects_the_reverse() {
        let mut poset = poset_with(&["a", "b"]);
        poset.order("a", "b").unwrap();
        assert_eq!(
            poset.order("b", "a"),
            Err(PosetError::CannotOrder("b".to_string(), "a".to_string()))
        );
    }

    #[test]
    fn implied_and_reflexive_orders_are_rejected() {
        let mut poset = poset_with(&["a", "b", "c"]);
        poset.order("a", "b").unwrap();
        poset.order("b", "c").unwrap();
        // Already implied transitively.
        assert!(poset.order("a", "c").is_err());
        // Reflexive.
        assert!(poset.order("a", "a").is_err());
    }

    #[test]
    fn order_with_missing_endpoint_reports_both() {
        let mut poset = poset_with(&["a"]);
        assert_eq!(
            poset.order("a", "zzz"),
            Err(PosetError::EndpointsMissing(
                "a".to_string(),
                "zzz".to_string()
            ))
        );
    }

    #[test]
    fn removing_a_bridge_preserves_the_relation() {
        let mut poset = poset_with(&["a", "b", "c"]);
        poset.order("a", "b").unwrap();
        poset.order("b", "c").unwrap();

        poset.remove("b").unwrap();
        assert!(poset.holds("a", "c").unwrap());
        assert!(!poset.contains("b"));
        assert_eq!(poset.len(), 2);
    }

    #[test]
    fn unorder_refuses_a_still_implied_relation() {
        let mut poset = poset_with(&["a", "b", "c"]);
        poset.order("a", "c").unwrap();
        poset.order("a", "b").unwrap();
        poset.order("b", "c").unwrap();

        // a < c is direct and also implied via b; deletion must fail and
        // leave the edge in place.
        let before = poset.clone();
        assert!(poset.unorder("a", "c").is_err());
        assert_eq!(poset, before);
        assert!(poset.holds("a", "c").unwrap());
    }

    #[test]
    fn unorder_requires_a_direct_edge() {
        let mut poset = poset_with(&["a", "b", "c"]);
        poset.order("a", "b").unwrap();
        poset.order("b", "c").unwrap();
        // a < c holds but only transitively.
        assert!(poset.unorder("a", "c").is_err());
        // Reflexive deletion is always refused.
        assert!(poset.unorder("a", "a").is_err());
    }

    #[test]
    fn unorder_relinks_across_the_removed_edge() {
        let mut poset = poset_with(&["p", "a", "b", "x"]);
        poset.order("p", "a").unwrap();
        poset.order("a", "b").unwrap();
        poset.order("b", "x").unwrap();

        poset.unorder("a", "b").unwrap();
        assert!(!poset.holds("a", "b").unwrap());
        // Relations that transited a -> b survive, as direct edges now.
        assert!(poset.holds("a", "x").unwrap());
        assert!(poset.holds("p", "b").unwrap());
        assert_eq!(poset.graph().len(), 4);
    }

    #[test]
    fn reference_scenario() {
        let mut poset = poset_with(&["A", "B", "C"]);
        poset.order("A", "B").unwrap();
        poset.order("B", "C").unwrap();

        assert!(poset.holds("A", "B").unwrap());
        assert!(poset.holds("B", "C").unwrap());
        assert!(poset.holds("A", "C").unwrap());

        poset.unorder("A", "B").unwrap();
        assert!(!poset.holds("A", "B").unwrap());
        assert!(poset.holds("B", "C").unwrap());
        assert!(poset.holds("A", "C").unwrap());
    }

    #[test]
    fn insert_remove_insert_gets_a_fresh_representative() {
        let mut poset = Poset::new();
        let first = poset.insert("a").unwrap();
        poset.remove("a").unwrap();
        assert_eq!(poset.len(), 0);
        let second = poset.insert("a").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn clear_resets_numbering() {
        let mut poset = poset_with(&["a", "b"]);
        poset.order("a", "b").unwrap();
        poset.clear();
        assert!(poset.is_empty());
        let repr = poset.insert("fresh").unwrap();
        assert_eq!(repr, Repr(0));
    }

    #[test]
    fn serde_round_trip_preserves_state() {
        let mut poset = poset_with(&["a", "b", "c"]);
        poset.order("a", "b").unwrap();
        poset.order("b", "c").unwrap();

        let json = serde_json::to_string(&poset).unwrap();
        let back: Poset = serde_json::from_str(&json).unwrap();
        assert_eq!(poset, back);
        assert!(back.holds("a", "c").unwrap());
    }
}
