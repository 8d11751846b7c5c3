//! Opaque ID newtype for graph nodes.

use serde::{Deserialize, Serialize};

/// Opaque, copyable ID of a node within one [`Graph`](crate::Graph).
///
/// A `NodeId` is an arena index: it is only meaningful for the graph that
/// produced it, and it stays valid for that graph's whole lifetime (nodes are
/// never removed or reordered). A netlist node's *mate* is a `NodeId` into
/// the device graph's arena, which is how the netlist↔device cycle is broken
/// without shared ownership.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates an ID from a raw `u32` index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize` for container access.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
