//! SMT2 feasibility encoding of the placement problem.
//!
//! [`write_device`] emits the device side: one uninterpreted constant per
//! device node, a pairwise-distinct assertion, and the two relations
//! `device-acceptable-label` and `device-has-edge`. [`write_netlist`] emits
//! the netlist side against those definitions: each netlist constant equals
//! some device node, netlist constants are pairwise distinct (injective
//! placement), every node's primary label is acceptable at its chosen site,
//! and every netlist edge maps to a device edge.
//!
//! Port names are interned to integer indices through a caller-supplied
//! [`PortInterner`] shared between the two emissions. All iteration is in
//! insertion order, so re-emitting the same graphs yields byte-identical
//! output.

use crate::graph::Graph;
use std::io::{self, Write};

/// Interned port-name index used in the SMT2 encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PortId(u32);

impl PortId {
    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `PortId` wraps a `u32` which is always a valid `usize` on 32-bit
// and 64-bit platforms. `try_from_usize` rejects values that don't fit.
unsafe impl lasso::Key for PortId {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(PortId)
    }
}

/// The port-name dictionary for an SMT2 emission.
///
/// Indices are assigned in first-use order, so emitting the device graph and
/// then the netlist graph with the same interner gives both sides a
/// consistent port numbering.
pub struct PortInterner {
    rodeo: lasso::Rodeo<PortId>,
}

impl Default for PortInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl PortInterner {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self {
            rodeo: lasso::Rodeo::new(),
        }
    }

    /// Interns a port name, returning its index. Re-interning an existing
    /// name returns the index assigned on first use.
    pub fn get_or_intern(&mut self, name: &str) -> PortId {
        self.rodeo.get_or_intern(name)
    }

    /// Resolves an index back to the port name.
    ///
    /// # Panics
    ///
    /// Panics if the index was not produced by this dictionary.
    pub fn resolve(&self, id: PortId) -> &str {
        self.rodeo.resolve(&id)
    }

    /// Returns the number of distinct port names interned so far.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if no port names have been interned.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

/// Emits the device-side encoding.
///
/// Declares the `node` sort, one constant per device node, distinctness,
/// and the `device-acceptable-label` / `device-has-edge` relations. Both
/// relations carry a leading `false` disjunct so an empty graph still emits
/// well-formed SMT2.
pub fn write_device<P>(
    graph: &Graph<P>,
    ports: &mut PortInterner,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "(declare-sort node 0)")?;
    for id in graph.node_ids() {
        writeln!(out, "(declare-const dev-node-{} node)", id.as_raw())?;
    }
    if graph.node_count() >= 2 {
        writeln!(out, "(assert (distinct")?;
        for id in graph.node_ids() {
            writeln!(out, "\tdev-node-{}", id.as_raw())?;
        }
        writeln!(out, "))")?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "(define-fun device-acceptable-label ((n node) (l Int)) Bool (or"
    )?;
    writeln!(out, "\tfalse")?;
    for (id, node) in graph.nodes() {
        writeln!(
            out,
            "\t(and (= n dev-node-{}) (= l {}))",
            id.as_raw(),
            node.label()
        )?;
        for alt in node.alternate_labels() {
            writeln!(out, "\t(and (= n dev-node-{}) (= l {alt}))", id.as_raw())?;
        }
    }
    writeln!(out, "))")?;
    writeln!(out)?;

    writeln!(
        out,
        "(define-fun device-has-edge ((n1 node) (p1 Int) (n2 node) (p2 Int)) Bool (or"
    )?;
    writeln!(out, "\tfalse")?;
    for (_, node) in graph.nodes() {
        for edge in node.edges() {
            let sport = ports.get_or_intern(&edge.source_port);
            let dport = ports.get_or_intern(&edge.dest_port);
            writeln!(
                out,
                "\t(and (= n1 dev-node-{}) (= p1 {}) (= n2 dev-node-{}) (= p2 {}))",
                edge.source.as_raw(),
                sport.as_raw(),
                edge.dest.as_raw(),
                dport.as_raw()
            )?;
        }
    }
    writeln!(out, "))")?;
    writeln!(out)?;
    Ok(())
}

/// Emits the netlist-side encoding against a previously emitted device of
/// `device_node_count` nodes.
pub fn write_netlist<P>(
    graph: &Graph<P>,
    ports: &mut PortInterner,
    device_node_count: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    for id in graph.node_ids() {
        writeln!(out, "(declare-const net-node-{} node)", id.as_raw())?;
        if device_node_count == 0 {
            // No device nodes to equal; the instance is unsatisfiable.
            writeln!(out, "(assert false)")?;
            continue;
        }
        // The device constants are pairwise distinct, so asserting that this
        // set is NOT distinct forces the netlist constant onto one of them.
        write!(out, "(assert (not (distinct ")?;
        for dev in 0..device_node_count {
            write!(out, "dev-node-{dev} ")?;
        }
        writeln!(out, "net-node-{})))", id.as_raw())?;
    }
    writeln!(out)?;

    if graph.node_count() >= 2 {
        writeln!(out, "(assert (distinct")?;
        for id in graph.node_ids() {
            writeln!(out, "\tnet-node-{}", id.as_raw())?;
        }
        writeln!(out, "))")?;
        writeln!(out)?;
    }

    writeln!(out, "(assert (and")?;
    writeln!(out, "\ttrue")?;
    for (id, node) in graph.nodes() {
        writeln!(
            out,
            "\t(device-acceptable-label net-node-{} {})",
            id.as_raw(),
            node.label()
        )?;
    }
    writeln!(out, "))")?;
    writeln!(out)?;

    writeln!(out, "(assert (and")?;
    writeln!(out, "\ttrue")?;
    for (_, node) in graph.nodes() {
        for edge in node.edges() {
            let sport = ports.get_or_intern(&edge.source_port);
            let dport = ports.get_or_intern(&edge.dest_port);
            writeln!(
                out,
                "\t(device-has-edge net-node-{} {} net-node-{} {})",
                edge.source.as_raw(),
                sport.as_raw(),
                edge.dest.as_raw(),
                dport.as_raw()
            )?;
        }
    }
    writeln!(out, "))")?;
    writeln!(out)?;
    Ok(())
}
