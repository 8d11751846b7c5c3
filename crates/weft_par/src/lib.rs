//! Generic place-and-route engine for the weft toolchain.
//!
//! This crate maps a logical netlist graph onto a physical device graph
//! (both from `weft_graph`, sharing one label space) by mutating the mate
//! fields of netlist nodes. The algorithm is simulated annealing: greedy
//! initial placement by label bucket, then iterative move/swap proposals
//! accepted by the Metropolis criterion under a geometrically cooling
//! temperature, with the best placement snapshotted throughout.
//!
//! Device-family behavior — placement order, candidate choice, forbidden
//! moves, shared-fabric congestion — is injected through [`PlacePolicy`].
//! The engine knows nothing about what the nodes mean; it sees only labels,
//! edges, ports, and mates.
//!
//! # Usage
//!
//! ```
//! use weft_diagnostics::DiagnosticSink;
//! use weft_graph::{Graph, LabelSpace, Node};
//! use weft_par::{place_and_route, LabelMap, ParConfig};
//!
//! let mut labels = LabelSpace::new();
//! let blk = labels.alloc();
//!
//! let mut netlist: Graph<()> = Graph::new();
//! netlist.add_node(Node::new(blk, ()));
//!
//! let mut device: Graph<()> = Graph::new();
//! device.add_node(Node::new(blk, ()));
//!
//! let sink = DiagnosticSink::new();
//! let summary = place_and_route(
//!     &mut netlist,
//!     &mut device,
//!     LabelMap::new(),
//!     ParConfig::default(),
//!     &sink,
//! )
//! .unwrap();
//! assert!(summary.verdict.is_routed());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod policy;
pub mod report;

pub use config::ParConfig;
pub use cost::{edge_routable, unroutable_cost, EdgeRef, RouteCheck};
pub use engine::{ParEngine, PlaceVerdict};
pub use error::{ParError, ParResult};
pub use policy::{greedy_initial_placement, DefaultPolicy, PlaceContext, PlacePolicy};
pub use report::{LabelMap, UnroutableEdge};

use weft_diagnostics::DiagnosticSink;
use weft_graph::Graph;

/// The outcome of a [`place_and_route`] run.
#[derive(Clone, Debug)]
pub struct PlaceSummary {
    /// How the run ended.
    pub verdict: PlaceVerdict,
    /// Best total cost seen (0 when routed).
    pub best_cost: u64,
    /// Optimization iterations performed.
    pub iterations: u32,
    /// Unroutable edges of the final placement (empty when routed).
    pub unroutable: Vec<UnroutableEdge>,
}

/// Places `netlist` onto `device` with the default policy.
///
/// Convenience wrapper over [`ParEngine`] for callers with no device-family
/// policy of their own. The placement lands in the netlist's mate fields;
/// the returned summary carries the verdict and diagnostics.
pub fn place_and_route<NP, DP>(
    netlist: &mut Graph<NP>,
    device: &mut Graph<DP>,
    label_map: LabelMap,
    config: ParConfig,
    sink: &DiagnosticSink,
) -> ParResult<PlaceSummary> {
    let mut engine = ParEngine::new(netlist, device, label_map, DefaultPolicy, config, sink);
    let verdict = engine.place_and_route()?;
    Ok(PlaceSummary {
        verdict,
        best_cost: engine.best_cost(),
        iterations: engine.iterations(),
        unroutable: engine.unroutable_edges().to_vec(),
    })
}
