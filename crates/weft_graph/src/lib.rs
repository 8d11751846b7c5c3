//! Labeled bipartite graph primitives for the weft place-and-route core.
//!
//! Two graphs participate in a placement: the *netlist* graph (logic
//! primitives and signal connections) and the *device* graph (hardware sites
//! and routable paths). Both draw labels from one shared [`LabelSpace`]; a
//! netlist node may be placed on any device node whose primary or alternate
//! label set contains the netlist node's primary label. The assignment
//! itself is the *mate* field on netlist nodes, a nullable index into the
//! device arena.
//!
//! This crate knows nothing about devices, cells, or the annealing engine —
//! only nodes, labels, edges, and mates. The engine lives in `weft_par`.
//!
//! # Construction
//!
//! ```
//! use weft_graph::{Graph, LabelSpace, Node};
//!
//! let mut labels = LabelSpace::new();
//! let ff = labels.alloc();
//!
//! let mut device: Graph<&str> = Graph::new();
//! let slot = device.add_node(Node::new(ff, "FF slot 0"));
//! let slot2 = device.add_node(Node::new(ff, "FF slot 1"));
//! device.add_edge(slot, "q", slot2, "d");
//! device.index_nodes_by_label();
//!
//! assert_eq!(device.nodes_with_label(ff), 2);
//! ```

#![warn(missing_docs)]

mod arena;
pub mod dot;
mod graph;
mod ids;
mod label;
mod node;
pub mod smt2;
pub mod text;

pub use arena::Arena;
pub use graph::Graph;
pub use ids::NodeId;
pub use label::{Label, LabelSpace};
pub use node::{Edge, Node};
pub use smt2::{PortId, PortInterner};
pub use text::TextFormatError;
