//! The topology model.
//!
//! Wraps the multigraph store and layers semantics on top: role
//! classification, per-node and per-link option bags, deterministic
//! port numbering and natural-sorted enumeration views. An emulation
//! or provisioning layer reads the finished model through `nodes()`,
//! `links()`, `port()` and the info accessors to bring up real or
//! virtual network elements.
//!
//! Construction is single-threaded and append-only: nodes and links
//! are added one at a time and never removed, which is what makes the
//! automatic port numbering collision-free.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::TopologyError;
use crate::graph::MultiGraph;
use crate::natsort;
use crate::options::Options;
use crate::topology::defaults::TopologyDefaults;
use crate::topology::types::{LinkKey, NodeInfo, NodeRole};

/// In-memory network topology: nodes, links, ports and metadata.
#[derive(Debug, Default)]
pub struct Topology {
    graph: MultiGraph,
    node_info: HashMap<String, NodeInfo>,
    link_info: HashMap<LinkKey, Options>,
    /// ports[src][dst] is the port on src that connects to dst.
    ports: HashMap<String, HashMap<String, u32>>,
    defaults: TopologyDefaults,
}

impl Topology {
    /// Empty topology with empty default option sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty topology with per-role default options.
    pub fn with_defaults(defaults: TopologyDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    fn insert_node(&mut self, name: &str, role: NodeRole, options: Options) -> String {
        debug!("Registering node '{}' with role {:?}", name, role);
        self.graph.add_node(name);
        self.node_info
            .insert(name.to_string(), NodeInfo::new(role, options));
        name.to_string()
    }

    /// Register a bare node, storing `options` verbatim as its
    /// metadata. Re-adding an existing name replaces its metadata and
    /// role. Returns the name.
    pub fn add_node(&mut self, name: &str, options: Options) -> String {
        self.insert_node(name, NodeRole::Plain, options)
    }

    /// Convenience method: add a host. Substitutes the host default
    /// options when `options` is empty.
    pub fn add_host(&mut self, name: &str, options: Options) -> String {
        let options = if options.is_empty() {
            self.defaults.host.clone()
        } else {
            options
        };
        self.insert_node(name, NodeRole::Host, options)
    }

    /// Convenience method: add a switch.
    pub fn add_switch(&mut self, name: &str, options: Options) -> String {
        let options = if options.is_empty() {
            self.defaults.switch.clone()
        } else {
            options
        };
        self.insert_node(name, NodeRole::Switch, options)
    }

    /// Convenience method: add a legacy switch (bridge).
    pub fn add_legacy_switch(&mut self, name: &str, options: Options) -> String {
        let options = if options.is_empty() {
            self.defaults.legacy_switch.clone()
        } else {
            options
        };
        self.insert_node(name, NodeRole::LegacySwitch, options)
    }

    /// Convenience method: add a legacy router.
    pub fn add_legacy_router(&mut self, name: &str, options: Options) -> String {
        let options = if options.is_empty() {
            self.defaults.legacy_router.clone()
        } else {
            options
        };
        self.insert_node(name, NodeRole::LegacyRouter, options)
    }

    /// Convenience method: add a Transit Portal router / endpoint.
    pub fn add_transit_portal_router(&mut self, name: &str, options: Options) -> String {
        let options = if options.is_empty() {
            self.defaults.transit_portal_router.clone()
        } else {
            options
        };
        self.insert_node(name, NodeRole::TransitPortalRouter, options)
    }

    /// Convenience method: add a host interface (physical interface to
    /// bridge to).
    pub fn add_host_interface(&mut self, name: &str, options: Options) -> String {
        let options = if options.is_empty() {
            self.defaults.host_interface.clone()
        } else {
            options
        };
        self.insert_node(name, NodeRole::HostInterface, options)
    }

    /// Link two registered nodes with auto-assigned ports and default
    /// link options.
    pub fn add_link(&mut self, node1: &str, node2: &str) -> Result<LinkKey, TopologyError> {
        self.add_link_with(node1, node2, None, None, Options::new())
    }

    /// Link two registered nodes.
    ///
    /// `port1` / `port2` override the automatic port assignment on the
    /// corresponding endpoint. An empty `options` bag falls back to
    /// the link default options. Both endpoints must already be
    /// registered; on an unknown endpoint nothing is mutated.
    ///
    /// A second link between the same pair keeps both edges in the
    /// store, but link metadata and ports are keyed by the canonical
    /// pair and therefore reflect only the latest call.
    pub fn add_link_with(
        &mut self,
        node1: &str,
        node2: &str,
        port1: Option<u32>,
        port2: Option<u32>,
        options: Options,
    ) -> Result<LinkKey, TopologyError> {
        // Validate and compute everything before the first write so a
        // failed call leaves no partial state.
        if !self.node_info.contains_key(node1) {
            return Err(TopologyError::UnknownNode(node1.to_string()));
        }
        if !self.node_info.contains_key(node2) {
            return Err(TopologyError::UnknownNode(node2.to_string()));
        }
        let port1 = port1.unwrap_or_else(|| self.next_port(node1));
        let port2 = port2.unwrap_or_else(|| self.next_port(node2));
        let options = if options.is_empty() {
            self.defaults.link.clone()
        } else {
            options
        };

        let key = LinkKey::new(node1, node2);
        if self.link_info.contains_key(&key) {
            warn!(
                "Link {} already recorded; replacing its metadata and port assignment",
                key
            );
        }
        debug!("Adding link {} with ports ({}, {})", key, port1, port2);

        self.ports
            .entry(node1.to_string())
            .or_default()
            .insert(node2.to_string(), port1);
        self.ports
            .entry(node2.to_string())
            .or_default()
            .insert(node1.to_string(), port2);
        self.link_info.insert(key.clone(), options);
        self.graph.add_edge(node1, node2);

        Ok(key)
    }

    /// Next auto-assigned port on `node`: the number of distinct
    /// neighbors already in its port table, plus 1 for switches so
    /// switch ports number from 1 while host NICs number from 0.
    fn next_port(&self, node: &str) -> u32 {
        let used = self.ports.get(node).map_or(0, |table| table.len() as u32);
        let base = if self.role_is(node, NodeRole::Switch) {
            1
        } else {
            0
        };
        used + base
    }

    fn role_is(&self, node: &str, role: NodeRole) -> bool {
        self.node_info
            .get(node)
            .is_some_and(|info| info.role == role)
    }

    /// Role classification of a node.
    pub fn role(&self, name: &str) -> Result<NodeRole, TopologyError> {
        self.node_info
            .get(name)
            .map(|info| info.role)
            .ok_or_else(|| TopologyError::UnknownNode(name.to_string()))
    }

    /// Returns true if the node is a host.
    pub fn is_host(&self, name: &str) -> Result<bool, TopologyError> {
        Ok(self.role(name)? == NodeRole::Host)
    }

    /// Returns true if the node is a switch.
    pub fn is_switch(&self, name: &str) -> Result<bool, TopologyError> {
        Ok(self.role(name)? == NodeRole::Switch)
    }

    /// Returns true if the node is a legacy switch.
    pub fn is_legacy_switch(&self, name: &str) -> Result<bool, TopologyError> {
        Ok(self.role(name)? == NodeRole::LegacySwitch)
    }

    /// Returns true if the node is a legacy router.
    pub fn is_legacy_router(&self, name: &str) -> Result<bool, TopologyError> {
        Ok(self.role(name)? == NodeRole::LegacyRouter)
    }

    /// Returns true if the node is a Transit Portal router.
    pub fn is_transit_portal_router(&self, name: &str) -> Result<bool, TopologyError> {
        Ok(self.role(name)? == NodeRole::TransitPortalRouter)
    }

    /// Returns true if the node is a host interface.
    pub fn is_host_interface(&self, name: &str) -> Result<bool, TopologyError> {
        Ok(self.role(name)? == NodeRole::HostInterface)
    }

    /// All registered node names, natural-sorted when `sort` is true,
    /// raw store order otherwise.
    pub fn nodes(&self, sort: bool) -> Vec<String> {
        let mut names: Vec<String> = self.graph.nodes().map(str::to_string).collect();
        if sort {
            natsort::sort_natural(&mut names);
        }
        names
    }

    fn nodes_with_role(&self, role: NodeRole, sort: bool) -> Vec<String> {
        self.nodes(sort)
            .into_iter()
            .filter(|name| self.role_is(name, role))
            .collect()
    }

    /// All hosts.
    pub fn hosts(&self, sort: bool) -> Vec<String> {
        self.nodes_with_role(NodeRole::Host, sort)
    }

    /// All switches.
    pub fn switches(&self, sort: bool) -> Vec<String> {
        self.nodes_with_role(NodeRole::Switch, sort)
    }

    /// All legacy switches.
    pub fn legacy_switches(&self, sort: bool) -> Vec<String> {
        self.nodes_with_role(NodeRole::LegacySwitch, sort)
    }

    /// All legacy routers.
    pub fn legacy_routers(&self, sort: bool) -> Vec<String> {
        self.nodes_with_role(NodeRole::LegacyRouter, sort)
    }

    /// All Transit Portal routers.
    pub fn transit_portal_routers(&self, sort: bool) -> Vec<String> {
        self.nodes_with_role(NodeRole::TransitPortalRouter, sort)
    }

    /// All host interfaces.
    pub fn host_interfaces(&self, sort: bool) -> Vec<String> {
        self.nodes_with_role(NodeRole::HostInterface, sort)
    }

    /// All links as canonical (src, dst) pairs. When sorting, pairs
    /// are ordered by a composite natural key: src first, then dst, so
    /// (h2, s1) sorts before (h10, s1).
    pub fn links(&self, sort: bool) -> Vec<(String, String)> {
        let mut links: Vec<(String, String)> = self
            .graph
            .edges()
            .map(|(src, dst)| (src.to_string(), dst.to_string()))
            .collect();
        if sort {
            links.sort_by(|a, b| {
                natsort::natural_cmp(&a.0, &b.0).then_with(|| natsort::natural_cmp(&a.1, &b.1))
            });
        }
        links
    }

    /// Port pair for a recorded link: (port on src leading to dst,
    /// port on dst leading to src). None when no link has been
    /// recorded between the two.
    ///
    /// # Panics
    ///
    /// Panics if the port table holds an entry for src->dst but not
    /// the reciprocal dst->src. The two are always written together,
    /// so an asymmetry is an internal defect, not a caller error.
    pub fn port(&self, src: &str, dst: &str) -> Option<(u32, u32)> {
        let src_port = self.ports.get(src)?.get(dst)?;
        let dst_port = self
            .ports
            .get(dst)
            .and_then(|table| table.get(src))
            .unwrap_or_else(|| panic!("port table asymmetry between '{}' and '{}'", src, dst));
        Some((*src_port, *dst_port))
    }

    /// Link metadata for the canonical pair (src, dst), insensitive to
    /// argument order.
    pub fn link_info(&self, src: &str, dst: &str) -> Result<&Options, TopologyError> {
        let key = LinkKey::new(src, dst);
        match self.link_info.get(&key) {
            Some(info) => Ok(info),
            None => Err(TopologyError::UnknownLink(
                key.src().to_string(),
                key.dst().to_string(),
            )),
        }
    }

    /// Replace link metadata for the canonical pair (src, dst).
    pub fn set_link_info(&mut self, src: &str, dst: &str, info: Options) {
        self.link_info.insert(LinkKey::new(src, dst), info);
    }

    /// Metadata for a node.
    pub fn node_info(&self, name: &str) -> Result<&NodeInfo, TopologyError> {
        self.node_info
            .get(name)
            .ok_or_else(|| TopologyError::UnknownNode(name.to_string()))
    }

    /// Replace a node's option bag. The role tag is kept as-is.
    pub fn set_node_info(&mut self, name: &str, options: Options) -> Result<(), TopologyError> {
        match self.node_info.get_mut(name) {
            Some(info) => {
                info.options = options;
                Ok(())
            }
            None => Err(TopologyError::UnknownNode(name.to_string())),
        }
    }

    /// The underlying multigraph store, for adjacency queries.
    pub fn graph(&self) -> &MultiGraph {
        &self.graph
    }
}
