//! # Nettopo - In-memory network topology model
//!
//! This library provides a declarative, in-memory description of a
//! network topology: a labeled multigraph of nodes (hosts, switches,
//! legacy switches/routers, transit-portal routers, host interfaces)
//! connected by links, each link carrying a deterministic pair of port
//! numbers.
//!
//! ## Overview
//!
//! Nettopo is consumed by emulation or provisioning layers that need a
//! stable, enumerable answer to "what connects to what, on which port"
//! before bringing up real or virtual network elements. Two algorithms
//! back that contract:
//!
//! - **Deterministic port assignment**: when a link is added without
//!   explicit ports, each endpoint gets the next free port number —
//!   switches number from 1, everything else from 0.
//! - **Natural ordering**: every sorted enumeration compares embedded
//!   numeric runs numerically, so `h2` lists before `h10`. Enumeration
//!   order is part of the contract, not an accident of storage.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `natsort`: natural (alphanumeric-aware) ordering primitive
//! - `graph`: multigraph adjacency store with parallel-edge support
//! - `options`: open option bags attached to nodes and links
//! - `error`: topology lookup errors
//! - `topology`: the model itself — roles, ports, metadata, defaults
//!   and canned shape builders
//!
//! ## Example Usage
//!
//! ```rust
//! use nettopo::{Options, Topology};
//!
//! let mut topo = Topology::new();
//! let s1 = topo.add_switch("s1", Options::new());
//! let h1 = topo.add_host("h1", Options::new());
//! topo.add_link(&h1, &s1)?;
//!
//! // Host NIC 0 faces switch port 1.
//! assert_eq!(topo.port("h1", "s1"), Some((0, 1)));
//! assert_eq!(topo.nodes(true), vec!["h1", "s1"]);
//! # Ok::<(), nettopo::TopologyError>(())
//! ```
//!
//! ## Error Handling
//!
//! Lookups on never-added nodes or links return
//! [`TopologyError`](error::TopologyError). Internal invariant
//! breaches (an asymmetric port table) are defects and panic rather
//! than surfacing as recoverable errors.
//!
//! ## Concurrency
//!
//! Construction is single-threaded and append-only; a fully-built
//! topology is read-only and safe to share for concurrent reads.

pub mod error;
pub mod graph;
pub mod natsort;
pub mod options;
pub mod topology;

pub use error::TopologyError;
pub use graph::MultiGraph;
pub use options::{OptionValue, Options};
pub use topology::{
    linear, load_defaults, single_switch, single_switch_reversed, LinkKey, NodeInfo, NodeRole,
    Topology, TopologyDefaults,
};
