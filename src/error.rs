//! Topology lookup errors.

/// Errors returned by topology lookups and mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    #[error("No link recorded between {0} and {1}")]
    UnknownLink(String, String),
}
