//! Direct-edge relation storage for one poset.
//!
//! Each live representative owns a [`Node`]: the set of representatives
//! directly recorded as strictly less than it (predecessors) and strictly
//! greater (successors). Edges are always recorded symmetrically as a
//! pred/succ pair, never one-sided.
//!
//! The direct edge set is not kept minimal: relation and element removal
//! may materialize edges that are redundant with the transitive closure,
//! and those edges persist. What is maintained is closure-soundness - the
//! closure derivable from the stored edges always equals the true order.

use crate::interner::Repr;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-representative adjacency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Representatives directly recorded as strictly less than this one.
    pub preds: BTreeSet<Repr>,
    /// Representatives directly recorded as strictly greater than this one.
    pub succs: BTreeSet<Repr>,
}

/// The direct-edge table of one poset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGraph {
    nodes: BTreeMap<Repr, Node>,
}

impl RelationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `repr` has a live node.
    pub fn contains(&self, repr: Repr) -> bool {
        self.nodes.contains_key(&repr)
    }

    /// Install an empty node for a freshly interned representative.
    pub fn add_node(&mut self, repr: Repr) {
        self.nodes.entry(repr).or_default();
    }

    /// The node for `repr`, if live.
    pub fn node(&self, repr: Repr) -> Option<&Node> {
        self.nodes.get(&repr)
    }

    /// Successor set of `repr`, if live.
    pub fn succs(&self, repr: Repr) -> Option<&BTreeSet<Repr>> {
        self.nodes.get(&repr).map(|node| &node.succs)
    }

    /// Predecessor set of `repr`, if live.
    pub fn preds(&self, repr: Repr) -> Option<&BTreeSet<Repr>> {
        self.nodes.get(&repr).map(|node| &node.preds)
    }

    /// Whether the edge `from -> to` is directly stored.
    pub fn has_edge(&self, from: Repr, to: Repr) -> bool {
        self.nodes
            .get(&from)
            .map(|node| node.succs.contains(&to))
            .unwrap_or(false)
    }

    /// Insert the direct edge `from -> to`, updating both sides.
    ///
    /// Returns `false` without touching anything if either node is not
    /// live, so the pred/succ symmetry invariant cannot be half-applied.
    /// Inserting an already-present edge is a no-op returning `true`.
    pub fn insert_edge(&mut self, from: Repr, to: Repr) -> bool {
        if !self.nodes.contains_key(&from) || !self.nodes.contains_key(&to) {
            return false;
        }
        if let Some(node) = self.nodes.get_mut(&from) {
            node.succs.insert(to);
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.preds.insert(from);
        }
        true
    }

    /// Remove the direct edge `from -> to` from both sides, if present.
    pub fn remove_edge(&mut self, from: Repr, to: Repr) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.succs.remove(&to);
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.preds.remove(&from);
        }
    }

    /// Detach `repr` from every neighbor and drop its node, returning the
    /// predecessor and successor sets it held. Returns `None` if the node
    /// was not live.
    pub fn remove_node(&mut self, repr: Repr) -> Option<(BTreeSet<Repr>, BTreeSet<Repr>)> {
        let node = self.nodes.remove(&repr)?;
        for &p in &node.preds {
            if let Some(pred) = self.nodes.get_mut(&p) {
                pred.succs.remove(&repr);
            }
        }
        for &s in &node.succs {
            if let Some(succ) = self.nodes.get_mut(&s) {
                succ.preds.remove(&repr);
            }
        }
        Some((node.preds, node.succs))
    }

    /// Cartesian re-materialization: insert `p -> s` for every pair with
    /// `p` in `preds` and `s` in `succs`.
    ///
    /// Used by the removal algorithms to keep alive relations that held
    /// only by transiting through a removed bridging node.
    pub fn link_all(&mut self, preds: &BTreeSet<Repr>, succs: &BTreeSet<Repr>) {
        for &p in preds {
            for &s in succs {
                self.insert_edge(p, s);
            }
        }
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(nodes: &[u32]) -> RelationGraph {
        let mut graph = RelationGraph::new();
        for &n in nodes {
            graph.add_node(Repr(n));
        }
        graph
    }

    #[test]
    fn edges_are_symmetric() {
        let mut graph = graph_with(&[0, 1]);
        assert!(graph.insert_edge(Repr(0), Repr(1)));

        assert!(graph.has_edge(Repr(0), Repr(1)));
        assert!(graph.succs(Repr(0)).unwrap().contains(&Repr(1)));
        assert!(graph.preds(Repr(1)).unwrap().contains(&Repr(0)));

        graph.remove_edge(Repr(0), Repr(1));
        assert!(!graph.has_edge(Repr(0), Repr(1)));
        assert!(graph.preds(Repr(1)).unwrap().is_empty());
    }

    #[test]
    fn insert_edge_refuses_dead_endpoints() {
        let mut graph = graph_with(&[0]);
        assert!(!graph.insert_edge(Repr(0), Repr(7)));
        assert!(graph.succs(Repr(0)).unwrap().is_empty());
    }

    #[test]
    fn remove_node_detaches_and_reports_neighbors() {
        let mut graph = graph_with(&[0, 1, 2]);
        graph.insert_edge(Repr(0), Repr(1));
        graph.insert_edge(Repr(1), Repr(2));

        let (preds, succs) = graph.remove_node(Repr(1)).unwrap();
        assert_eq!(preds.into_iter().collect::<Vec<_>>(), vec![Repr(0)]);
        assert_eq!(succs.into_iter().collect::<Vec<_>>(), vec![Repr(2)]);

        // No dangling references to the removed node.
        assert!(!graph.contains(Repr(1)));
        assert!(graph.node(Repr(1)).is_none());
        assert!(graph.succs(Repr(0)).unwrap().is_empty());
        assert!(graph.preds(Repr(2)).unwrap().is_empty());
    }

    #[test]
    fn link_all_materializes_every_pair() {
        let mut graph = graph_with(&[0, 1, 2, 3]);
        let preds: BTreeSet<Repr> = [Repr(0), Repr(1)].into_iter().collect();
        let succs: BTreeSet<Repr> = [Repr(2), Repr(3)].into_iter().collect();
        graph.link_all(&preds, &succs);

        for p in [0, 1] {
            for s in [2, 3] {
                assert!(graph.has_edge(Repr(p), Repr(s)));
            }
        }
    }
}
