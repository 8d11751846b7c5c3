//! Directed-graph description for visualization.
//!
//! Each node becomes a record-shaped node with three compartments: the port
//! names of inbound edges, the label list (primary, then alternates in
//! parentheses), and the port names of outbound edges. Every edge is written
//! as `nSRC:"port" -> nDST:"port";`. Nodes and ports appear in insertion
//! order so repeated dumps of the same graph are byte-identical.

use crate::graph::Graph;
use crate::ids::NodeId;
use crate::node::Node;
use std::collections::HashMap;
use std::io::{self, Write};

/// Writes the graph as a directed-graph description.
pub fn write_dot<P>(graph: &Graph<P>, out: &mut impl Write) -> io::Result<()> {
    // Inbound ports are only discoverable by scanning every edge once.
    let mut inbound: HashMap<NodeId, Vec<&str>> = HashMap::new();
    for (_, node) in graph.nodes() {
        for edge in node.edges() {
            let ports = inbound.entry(edge.dest).or_default();
            if !ports.contains(&edge.dest_port.as_str()) {
                ports.push(&edge.dest_port);
            }
        }
    }

    writeln!(out, "digraph pargraph {{")?;
    writeln!(out, "node [shape=record];")?;

    for (id, node) in graph.nodes() {
        write!(out, "n{} [label=\"", id.as_raw())?;

        if let Some(ports) = inbound.get(&id) {
            write!(out, "{{")?;
            for (k, port) in ports.iter().enumerate() {
                if k > 0 {
                    write!(out, "|")?;
                }
                write!(out, "<{port}> {port}")?;
            }
            write!(out, "}}|")?;
        }

        write!(out, "{}", node.label())?;
        if !node.alternate_labels().is_empty() {
            write!(out, " (")?;
            for (k, alt) in node.alternate_labels().iter().enumerate() {
                if k > 0 {
                    write!(out, ", ")?;
                }
                write!(out, "{alt}")?;
            }
            write!(out, ")")?;
        }

        let outbound = outbound_ports(node);
        if !outbound.is_empty() {
            write!(out, "|{{")?;
            for (k, port) in outbound.iter().enumerate() {
                if k > 0 {
                    write!(out, "|")?;
                }
                write!(out, "<{port}> {port}")?;
            }
            write!(out, "}}")?;
        }

        writeln!(out, "\"];")?;
    }

    for (_, node) in graph.nodes() {
        for edge in node.edges() {
            writeln!(
                out,
                "n{}:\"{}\" -> n{}:\"{}\";",
                edge.source.as_raw(),
                edge.source_port,
                edge.dest.as_raw(),
                edge.dest_port
            )?;
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}

/// Distinct outbound port names of a node, in first-use order.
fn outbound_ports<P>(node: &Node<P>) -> Vec<&str> {
    let mut ports: Vec<&str> = Vec::new();
    for edge in node.edges() {
        if !ports.contains(&edge.source_port.as_str()) {
            ports.push(&edge.source_port);
        }
    }
    ports
}
