//! Topology type definitions.
//!
//! This file contains the node role classification, per-node metadata
//! record and the canonical link key used to store link metadata and
//! ports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::natsort;
use crate::options::Options;

/// Functional classification of a node. Exactly one per node; a node
/// registered without a role is `Plain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Bare node with no role flag
    #[default]
    Plain,
    /// End host (NIC ports number from 0)
    Host,
    /// Switch (ports number from 1)
    Switch,
    /// Legacy switch (bridge)
    LegacySwitch,
    /// Legacy router
    LegacyRouter,
    /// Transit Portal router / endpoint
    TransitPortalRouter,
    /// Host interface (physical interface to bridge to)
    HostInterface,
}

/// Metadata recorded for a registered node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub role: NodeRole,
    pub options: Options,
}

impl NodeInfo {
    pub fn new(role: NodeRole, options: Options) -> Self {
        Self { role, options }
    }
}

/// Canonical link key: the endpoint pair ordered by natural sort.
///
/// Both (a, b) and (b, a) construct the same key, so link metadata and
/// lookups are insensitive to argument order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    src: String,
    dst: String,
}

impl LinkKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (src, dst) = natsort::canonical_pair(a, b);
        Self {
            src: src.to_string(),
            dst: dst.to_string(),
        }
    }

    /// The naturally-lesser endpoint.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// The naturally-greater endpoint.
    pub fn dst(&self) -> &str {
        &self.dst
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.src, &self.dst)
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.src, self.dst)
    }
}
