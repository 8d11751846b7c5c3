//! Routability testing and the unroutable cost term.
//!
//! A netlist edge is routable iff the device graph has an edge between the
//! two endpoint mates whose port names match exactly. Device edges are never
//! consumed: any number of netlist edges may ride the same device edge, and
//! overuse of shared fabric is the congestion hook's concern, not this
//! module's.

use std::collections::BTreeSet;
use weft_graph::{Edge, Graph, NodeId};

/// Position of a netlist edge: owning source node plus positional index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRef {
    /// The node owning the edge.
    pub node: NodeId,
    /// The edge's position within that node's outbound list.
    pub index: usize,
}

/// The unroutable edges of one placement state, with the netlist nodes they
/// touch.
#[derive(Clone, Debug, Default)]
pub struct RouteCheck {
    /// Every unroutable netlist edge, in netlist insertion order.
    pub edges: Vec<EdgeRef>,
    /// Netlist nodes incident (as source or destination) to any unroutable
    /// edge, ascending and deduplicated.
    pub nodes: Vec<NodeId>,
}

impl RouteCheck {
    /// Returns `true` if every netlist edge was routable.
    pub fn is_clean(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Returns `true` if the device graph carries `edge` under the current
/// mates: both endpoints mated, and a device edge with exactly matching port
/// names runs between the two mates.
pub fn edge_routable<NP, DP>(netlist: &Graph<NP>, device: &Graph<DP>, edge: &Edge) -> bool {
    let (Some(source_mate), Some(dest_mate)) = (
        netlist.node(edge.source).mate(),
        netlist.node(edge.dest).mate(),
    ) else {
        return false;
    };
    device.node(source_mate).edges().iter().any(|dev_edge| {
        dev_edge.dest == dest_mate
            && dev_edge.source_port == edge.source_port
            && dev_edge.dest_port == edge.dest_port
    })
}

/// Evaluates the unroutable cost term: `penalty` per unroutable edge.
///
/// Pure with respect to the mate assignment; evaluating twice on the same
/// state gives the same answer. Duplicate netlist edges are charged
/// independently.
pub fn unroutable_cost<NP, DP>(
    netlist: &Graph<NP>,
    device: &Graph<DP>,
    penalty: u64,
) -> (u64, RouteCheck) {
    let mut cost = 0u64;
    let mut check = RouteCheck::default();
    let mut touched: BTreeSet<NodeId> = BTreeSet::new();

    for (id, node) in netlist.nodes() {
        for (index, edge) in node.edges().iter().enumerate() {
            if !edge_routable(netlist, device, edge) {
                cost += penalty;
                check.edges.push(EdgeRef { node: id, index });
                touched.insert(edge.source);
                touched.insert(edge.dest);
            }
        }
    }

    check.nodes = touched.into_iter().collect();
    (cost, check)
}
