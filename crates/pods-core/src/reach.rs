//! Reachability queries over the direct-edge graph.

use crate::graph::RelationGraph;
use crate::interner::Repr;
use std::collections::{BTreeSet, VecDeque};

/// Breadth-first reachability over successor edges.
///
/// `from == to` is immediately true (reflexivity). Otherwise the traversal
/// follows stored successor edges and answers whether `to` is ever reached.
/// Visited representatives are deduplicated so diamond-shaped graphs stay
/// O(V + E) instead of re-visiting shared descendants exponentially.
///
/// Read-only: this is both the `test` query and the validation primitive
/// behind relation addition and removal.
pub fn reachable(graph: &RelationGraph, from: Repr, to: Repr) -> bool {
    if from == to {
        return true;
    }

    let mut visited: BTreeSet<Repr> = BTreeSet::new();
    let mut frontier: VecDeque<Repr> = VecDeque::new();

    if let Some(succs) = graph.succs(from) {
        for &s in succs {
            if visited.insert(s) {
                frontier.push_back(s);
            }
        }
    }

    while let Some(repr) = frontier.pop_front() {
        if repr == to {
            return true;
        }
        if let Some(succs) = graph.succs(repr) {
            for &s in succs {
                if visited.insert(s) {
                    frontier.push_back(s);
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: u32) -> RelationGraph {
        let mut graph = RelationGraph::new();
        for n in 0..len {
            graph.add_node(Repr(n));
        }
        for n in 1..len {
            graph.insert_edge(Repr(n - 1), Repr(n));
        }
        graph
    }

    #[test]
    fn reflexive_without_any_edges() {
        let mut graph = RelationGraph::new();
        graph.add_node(Repr(0));
        assert!(reachable(&graph, Repr(0), Repr(0)));
    }

    #[test]
    fn follows_transitive_paths() {
        let graph = chain(5);
        assert!(reachable(&graph, Repr(0), Repr(4)));
        assert!(!reachable(&graph, Repr(4), Repr(0)));
        assert!(!reachable(&graph, Repr(2), Repr(1)));
    }

    #[test]
    fn diamond_terminates_and_answers() {
        // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
        let mut graph = RelationGraph::new();
        for n in 0..4 {
            graph.add_node(Repr(n));
        }
        graph.insert_edge(Repr(0), Repr(1));
        graph.insert_edge(Repr(0), Repr(2));
        graph.insert_edge(Repr(1), Repr(3));
        graph.insert_edge(Repr(2), Repr(3));

        assert!(reachable(&graph, Repr(0), Repr(3)));
        assert!(!reachable(&graph, Repr(1), Repr(2)));
    }

    #[test]
    fn disconnected_nodes_are_unreachable() {
        let mut graph = RelationGraph::new();
        graph.add_node(Repr(0));
        graph.add_node(Repr(1));
        assert!(!reachable(&graph, Repr(0), Repr(1)));
    }
}
