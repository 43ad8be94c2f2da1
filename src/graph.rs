//! Multigraph adjacency store.
//!
//! Tracks node existence and undirected adjacency, allowing parallel
//! edges between the same pair of nodes. Edges are stored under the
//! naturally-lesser endpoint only, so src/dst order never causes
//! duplicate bookkeeping. This layer knows nothing about roles, ports
//! or metadata; the topology model layers those on top.

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::natsort;

/// Unordered multigraph of named nodes.
#[derive(Debug, Clone, Default)]
pub struct MultiGraph {
    /// adjacency[src] lists every dst linked to src, where (src, dst)
    /// is the canonical (natural-sorted) form of the pair. Parallel
    /// edges appear as repeated entries.
    adjacency: HashMap<String, Vec<String>>,
}

impl MultiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, node: &str) {
        self.adjacency.entry(node.to_string()).or_default();
    }

    /// Record an undirected edge between `a` and `b`.
    ///
    /// The pair is canonicalized by natural order and the entry stored
    /// on the lesser endpoint only. Unknown endpoints are registered
    /// implicitly; calling again with the same pair records a parallel
    /// edge.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let (src, dst) = natsort::canonical_pair(a, b);
        let dst_owned = dst.to_string();
        self.add_node(dst);
        self.adjacency
            .entry(src.to_string())
            .or_default()
            .push(dst_owned);
    }

    /// Whether `node` has been registered.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Registered node names, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// All edges as canonical (src, dst) pairs, one per stored entry
    /// (parallel edges repeat), in storage order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency.iter().flat_map(|(src, dsts)| {
            dsts.iter().map(move |dst| (src.as_str(), dst.as_str()))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Raw adjacency list for `node`: the canonical-form neighbors
    /// stored under it, duplicates included for parallel edges.
    pub fn neighbors(&self, node: &str) -> Result<&[String], TopologyError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| TopologyError::UnknownNode(node.to_string()))
    }
}
