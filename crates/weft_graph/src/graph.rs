//! The graph container: node arena plus label index.

use crate::arena::Arena;
use crate::ids::NodeId;
use crate::label::Label;
use crate::node::{Edge, Node};
use std::collections::HashMap;

/// A labeled directed graph: either the logical netlist or the physical
/// device fabric.
///
/// The graph owns its nodes in an arena ([`NodeId`]s stay valid for the
/// graph's lifetime) and maintains a lazily built label index. Edges always
/// connect two nodes of the same graph — [`add_edge`](Self::add_edge) takes
/// two of this graph's own IDs, so a cross-graph edge cannot be expressed.
///
/// Lifecycle: create empty, add nodes, attach edges, set alternate labels,
/// call [`index_nodes_by_label`](Self::index_nodes_by_label) once all label
/// sets are final, then hand the graph to the engine. Any later label
/// mutation drops the index; label queries on an unindexed graph yield empty
/// results rather than errors.
#[derive(Clone, Debug)]
pub struct Graph<P> {
    nodes: Arena<Node<P>>,
    label_index: Option<HashMap<Label, Vec<NodeId>>>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self::new()
    }
}

const EMPTY_BUCKET: &[NodeId] = &[];

impl<P> Graph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            label_index: None,
        }
    }

    /// Adds a node, taking ownership, and returns its ID.
    ///
    /// Drops the label index if one was built.
    pub fn add_node(&mut self, node: Node<P>) -> NodeId {
        self.label_index = None;
        self.nodes.alloc(node)
    }

    /// Returns the node with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not produced by this graph.
    pub fn node(&self, id: NodeId) -> &Node<P> {
        self.nodes.get(id)
    }

    /// Returns a mutable reference to the node with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not produced by this graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<P> {
        self.nodes.get_mut(id)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::edge_count).sum()
    }

    /// Iterates over node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.ids()
    }

    /// Iterates over `(NodeId, &Node)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<P>)> {
        self.nodes.iter()
    }

    /// Adds a directed edge from `source` to `dest` with the given port
    /// names. Both IDs must belong to this graph.
    ///
    /// # Panics
    ///
    /// Panics if either ID is out of this graph's arena range.
    pub fn add_edge(&mut self, source: NodeId, source_port: &str, dest: NodeId, dest_port: &str) {
        assert!(
            self.nodes.contains(source) && self.nodes.contains(dest),
            "edge endpoints must be nodes of this graph"
        );
        self.nodes.get_mut(source).push_edge(Edge {
            source,
            dest,
            source_port: source_port.to_string(),
            dest_port: dest_port.to_string(),
        });
    }

    /// Replaces the primary label of a node. Drops the label index.
    pub fn relabel(&mut self, id: NodeId, label: Label) {
        self.label_index = None;
        self.nodes.get_mut(id).relabel(label);
    }

    /// Appends an alternate label to a node. Alternates rank below the
    /// primary label and below earlier alternates. Drops the label index.
    pub fn add_alternate_label(&mut self, id: NodeId, label: Label) {
        self.label_index = None;
        self.nodes.get_mut(id).push_alternate(label);
    }

    /// Builds the label → nodes index.
    ///
    /// Must be called after every node has its final label set. Nodes are
    /// bucketed by primary label first, then a second pass appends each node
    /// under its alternate labels, so within a bucket primary holders always
    /// precede alternate holders.
    pub fn index_nodes_by_label(&mut self) {
        let mut index: HashMap<Label, Vec<NodeId>> = HashMap::new();
        for (id, node) in self.nodes.iter() {
            index.entry(node.label()).or_default().push(id);
        }
        for (id, node) in self.nodes.iter() {
            for &alt in node.alternate_labels() {
                index.entry(alt).or_default().push(id);
            }
        }
        self.label_index = Some(index);
    }

    /// Returns `true` if the label index is currently built.
    pub fn is_indexed(&self) -> bool {
        self.label_index.is_some()
    }

    /// Returns the nodes that accept the given label, primary holders first.
    ///
    /// Empty if the index has not been built.
    pub fn label_bucket(&self, label: Label) -> &[NodeId] {
        self.label_index
            .as_ref()
            .and_then(|index| index.get(&label))
            .map_or(EMPTY_BUCKET, Vec::as_slice)
    }

    /// Returns how many nodes accept the given label.
    ///
    /// Zero if the index has not been built.
    pub fn nodes_with_label(&self, label: Label) -> usize {
        self.label_bucket(label).len()
    }

    /// Returns the `k`-th node accepting the given label, in priority order.
    pub fn node_with_label(&self, label: Label, k: usize) -> Option<NodeId> {
        self.label_bucket(label).get(k).copied()
    }
}
