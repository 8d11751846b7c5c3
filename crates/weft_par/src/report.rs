//! Human-readable naming and the unroutable-edge report.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use weft_graph::{Label, NodeId};

/// Maps labels to human-readable names for error messages and reports.
///
/// The engine never needs names to operate; they exist purely so that a
/// failed placement can say "3 nodes need GP_DFF" instead of "3 nodes need
/// label 17". Unnamed labels render as `label N`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LabelMap {
    names: HashMap<u32, String>,
}

impl LabelMap {
    /// Creates an empty label map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a name with a label, replacing any previous name.
    pub fn insert(&mut self, label: Label, name: impl Into<String>) {
        self.names.insert(label.as_raw(), name.into());
    }

    /// Returns the name for a label, or `label N` when unnamed.
    pub fn name(&self, label: Label) -> String {
        match self.names.get(&label.as_raw()) {
            Some(name) => name.clone(),
            None => format!("label {label}"),
        }
    }
}

/// One netlist edge whose endpoints' mates are not connected in the device
/// graph by a matching-port edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnroutableEdge {
    /// Netlist node the edge leaves from.
    pub source: NodeId,
    /// Netlist node the edge arrives at.
    pub dest: NodeId,
    /// Port name on the source node.
    pub source_port: String,
    /// Port name on the destination node.
    pub dest_port: String,
    /// Display name of the source: the label name plus the node index.
    pub source_name: String,
    /// Display name of the destination.
    pub dest_name: String,
}

impl fmt::Display for UnroutableEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.source_name, self.source_port, self.dest_name, self.dest_port
        )
    }
}
