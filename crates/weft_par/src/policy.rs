//! Device-family policy hooks.
//!
//! The engine's algorithm is fixed; everything a device family legitimately
//! disagrees about — placement order, candidate selection, move legality,
//! shared-fabric congestion — goes through [`PlacePolicy`]. Every method has
//! a default body, so [`DefaultPolicy`] (a unit struct) runs the plain
//! engine, and a concrete device policy overrides only what it must.
//!
//! Apart from `initial_placement`, whose whole job is to write mates, hooks
//! may read the mate assignment but must not mutate it.

use crate::report::UnroutableEdge;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;
use weft_diagnostics::DiagnosticSink;
use weft_graph::{Graph, NodeId};

/// Read-only view of the placement state handed to policy hooks.
pub struct PlaceContext<'a, NP, DP> {
    /// The netlist graph, mates included.
    pub netlist: &'a Graph<NP>,
    /// The device graph.
    pub device: &'a Graph<DP>,
    /// Netlist nodes incident to an unroutable edge in the current state,
    /// ascending and deduplicated.
    pub unroutable: &'a [NodeId],
}

/// The six policy operations the engine consults at fixed points of the
/// optimization loop.
pub trait PlacePolicy<NP, DP> {
    /// Produces the starting placement. Returns `true` iff every netlist
    /// node was mated.
    ///
    /// The default is greedy assignment by label bucket
    /// ([`greedy_initial_placement`]); device families that must place
    /// pin-constrained nodes first override this and typically delegate to
    /// the greedy pass for the remainder.
    fn initial_placement(
        &mut self,
        netlist: &mut Graph<NP>,
        device: &Graph<DP>,
        _rng: &mut StdRng,
    ) -> bool {
        greedy_initial_placement(netlist, device)
    }

    /// Collects the netlist nodes worth moving this iteration into `bad`.
    ///
    /// Must produce at least one node whenever the current cost is non-zero;
    /// an empty result is treated as failure to converge. The default is the
    /// unroutable-incident set; policies with a congestion model add the
    /// nodes whose mates contribute overuse.
    fn find_suboptimal_placements(&self, ctx: &PlaceContext<'_, NP, DP>, bad: &mut Vec<NodeId>) {
        bad.extend_from_slice(ctx.unroutable);
    }

    /// Proposes a replacement device site for `pivot`, or `None` when the
    /// policy has no candidate this round.
    ///
    /// The default draws uniformly from the device bucket of the pivot's
    /// primary label.
    fn candidate_for(
        &self,
        ctx: &PlaceContext<'_, NP, DP>,
        pivot: NodeId,
        rng: &mut StdRng,
    ) -> Option<NodeId> {
        let bucket = ctx.device.label_bucket(ctx.netlist.node(pivot).label());
        if bucket.is_empty() {
            None
        } else {
            Some(bucket[rng.gen_range(0..bucket.len())])
        }
    }

    /// Vetoes a proposed move of `pivot` from `old_mate` to `new_mate`.
    ///
    /// The default permits everything; device policies forbid moves that
    /// would break pin locks or device-class constraints.
    fn can_move(
        &self,
        _ctx: &PlaceContext<'_, NP, DP>,
        _pivot: NodeId,
        _old_mate: Option<NodeId>,
        _new_mate: NodeId,
    ) -> bool {
        true
    }

    /// Current overuse of shared routing resources, in cost units.
    ///
    /// The 1:1 mate test cannot see a shared resource oversubscribed by
    /// several otherwise-routable edges; a policy that models one reports
    /// the overuse here.
    fn congestion_cost(&self, _ctx: &PlaceContext<'_, NP, DP>) -> u64 {
        0
    }

    /// Timing-driven cost term. Reserved; the base engine contributes 0.
    fn timing_cost(&self, _ctx: &PlaceContext<'_, NP, DP>) -> u64 {
        0
    }

    /// Reports the final unroutable edges of a failed placement.
    ///
    /// Called once, after the best-seen placement has been restored. The
    /// default is a no-op; device policies usually log names recovered from
    /// node payloads.
    fn report_unroutes(
        &self,
        _ctx: &PlaceContext<'_, NP, DP>,
        _unroutes: &[UnroutableEdge],
        _sink: &DiagnosticSink,
    ) {
    }
}

/// The base engine policy: every hook at its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPolicy;

impl<NP, DP> PlacePolicy<NP, DP> for DefaultPolicy {}

/// Greedy initial placement by label bucket.
///
/// Walks netlist nodes in insertion order; each unmated node takes the first
/// unoccupied device node from the bucket of its primary label (primary
/// holders before alternates). Already-mated nodes keep their mates, so a
/// placement that is already complete is left untouched. Returns `true` iff
/// every netlist node ends up mated.
pub fn greedy_initial_placement<NP, DP>(netlist: &mut Graph<NP>, device: &Graph<DP>) -> bool {
    let mut used: HashSet<NodeId> = netlist
        .nodes()
        .filter_map(|(_, node)| node.mate())
        .collect();

    let mut fully_placed = true;
    for id in netlist.node_ids().collect::<Vec<_>>() {
        if netlist.node(id).mate().is_some() {
            continue;
        }
        let label = netlist.node(id).label();
        let choice = device
            .label_bucket(label)
            .iter()
            .copied()
            .find(|site| !used.contains(site));
        match choice {
            Some(site) => {
                netlist.node_mut(id).set_mate(Some(site));
                used.insert(site);
            }
            None => fully_placed = false,
        }
    }
    fully_placed
}
