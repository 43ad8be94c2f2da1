//! Canned topology shapes.
//!
//! Thin builders for the standard test shapes: a single-switch star, a
//! reversed-port star and a linear chain of switches. They exercise
//! only the public model API and exist so embedding tools and tests do
//! not have to re-write the same loops.

use crate::error::TopologyError;
use crate::options::Options;
use crate::topology::model::Topology;

/// Single switch `s1` connected to hosts `h1..hk`, auto-assigned ports.
pub fn single_switch(k: u32) -> Result<Topology, TopologyError> {
    let mut topo = Topology::new();
    let switch = topo.add_switch("s1", Options::new());
    for h in 1..=k {
        let host = topo.add_host(&format!("h{}", h), Options::new());
        topo.add_link(&host, &switch)?;
    }
    Ok(topo)
}

/// Single switch `s1` connected to hosts `h1..hk` with reversed port
/// numbering: the lowest-numbered host lands on the highest-numbered
/// switch port. Useful to verify that custom port numbers are honored.
pub fn single_switch_reversed(k: u32) -> Result<Topology, TopologyError> {
    let mut topo = Topology::new();
    let switch = topo.add_switch("s1", Options::new());
    for h in 1..=k {
        let host = topo.add_host(&format!("h{}", h), Options::new());
        topo.add_link_with(&host, &switch, Some(0), Some(k - h + 1), Options::new())?;
    }
    Ok(topo)
}

/// Linear chain of `switches` switches with `hosts_per_switch` hosts
/// on each. Hosts are named `h{i}` when there is one per switch,
/// `h{j}s{i}` otherwise.
pub fn linear(switches: u32, hosts_per_switch: u32) -> Result<Topology, TopologyError> {
    let mut topo = Topology::new();
    let mut last_switch: Option<String> = None;
    for i in 1..=switches {
        let switch = topo.add_switch(&format!("s{}", i), Options::new());
        for j in 1..=hosts_per_switch {
            let name = if hosts_per_switch == 1 {
                format!("h{}", i)
            } else {
                format!("h{}s{}", j, i)
            };
            let host = topo.add_host(&name, Options::new());
            topo.add_link(&host, &switch)?;
        }
        if let Some(prev) = &last_switch {
            topo.add_link(&switch, prev)?;
        }
        last_switch = Some(switch);
    }
    Ok(topo)
}
