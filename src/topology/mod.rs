//! Network topology model.
//!
//! This module contains the topology model itself plus its supporting
//! types: role classification, canonical link keys, per-role default
//! option sets and the canned shape builders.

pub mod builders;
pub mod defaults;
pub mod model;
pub mod types;

// Re-export key types and functions for easier access
pub use builders::{linear, single_switch, single_switch_reversed};
pub use defaults::{load_defaults, TopologyDefaults};
pub use model::Topology;
pub use types::{LinkKey, NodeInfo, NodeRole};
