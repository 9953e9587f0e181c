//! Adjacency model for "must come before" edges.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Directed graph mapping each declared node to its ordered successors.
///
/// Keys are remembered in the order they were first declared, so iteration
/// over [`Graph::all_nodes`] is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    edges: HashMap<N, Vec<N>>,
    /// Insertion order of keys
    order: Vec<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `node` as a key with no outgoing edges. Idempotent.
    pub fn add_node(&mut self, node: N) {
        self.successors_mut(node);
    }

    /// Adds the edge `from -> to`: `from` must precede `to`
    pub fn add_edge(&mut self, from: N, to: N) {
        self.successors_mut(from).push(to);
    }

    /// Declares `from` and appends every target to its successors
    pub fn add_edges(&mut self, from: N, targets: impl IntoIterator<Item = N>) {
        self.successors_mut(from).extend(targets);
    }

    fn successors_mut(&mut self, node: N) -> &mut Vec<N> {
        if !self.edges.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.edges.entry(node).or_default()
    }

    /// Successors of `node` in declared order. Empty for unknown nodes.
    pub fn successors(&self, node: &N) -> &[N] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Declared keys in insertion order
    pub fn all_nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// True if `node` is a key or appears as a successor
    pub fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node) || self.edges.values().any(|succ| succ.contains(node))
    }

    /// Number of declared keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct nodes, counting successor-only nodes
    pub fn node_count(&self) -> usize {
        let mut seen: HashSet<&N> = self.order.iter().collect();
        seen.extend(self.edges.values().flatten());
        seen.len()
    }

    /// Number of declared edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (from, targets) in iter {
            graph.add_edges(from, targets);
        }
        graph
    }
}
