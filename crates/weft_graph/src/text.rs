//! Line-oriented plain-text graph interchange.
//!
//! The format is the one used by the offline constraint-solver experiments:
//! a node count, then for every node its label count, one label per line
//! (primary first), its edge count, and one `source_port dest_index
//! dest_port` line per outbound edge. Port names therefore must not contain
//! whitespace.
//!
//! Reading produces a payload-free graph; payloads are a runtime-only
//! attachment and are not part of the interchange format.

use crate::graph::Graph;
use crate::ids::NodeId;
use crate::label::Label;
use crate::node::Node;
use std::io::{self, Write};

/// Error produced when parsing the plain-text graph format.
#[derive(Debug, thiserror::Error)]
pub enum TextFormatError {
    /// The input ended before the declared structure was complete.
    #[error("unexpected end of input at line {line}")]
    UnexpectedEnd {
        /// 1-based line number where more input was expected.
        line: usize,
    },
    /// A line that should hold a single integer did not parse.
    #[error("expected an integer at line {line}, found {found:?}")]
    InvalidNumber {
        /// 1-based line number of the offending line.
        line: usize,
        /// The text found instead.
        found: String,
    },
    /// A node declared zero labels; the primary label is required.
    #[error("node {node} has no labels (line {line})")]
    MissingPrimaryLabel {
        /// Index of the offending node.
        node: usize,
        /// 1-based line number of the label count.
        line: usize,
    },
    /// An edge line did not have the `source_port dest_index dest_port` shape.
    #[error("malformed edge at line {line}: {found:?}")]
    MalformedEdge {
        /// 1-based line number of the offending line.
        line: usize,
        /// The text found.
        found: String,
    },
    /// An edge referenced a node index outside the declared node count.
    #[error("edge destination {dest} out of range (graph has {count} nodes, line {line})")]
    DestOutOfRange {
        /// The out-of-range destination index.
        dest: usize,
        /// The declared node count.
        count: usize,
        /// 1-based line number of the offending line.
        line: usize,
    },
}

/// Writes a graph in the plain-text interchange format.
pub fn write_text<P>(graph: &Graph<P>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", graph.node_count())?;
    for (_, node) in graph.nodes() {
        writeln!(out, "{}", 1 + node.alternate_labels().len())?;
        writeln!(out, "{}", node.label())?;
        for alt in node.alternate_labels() {
            writeln!(out, "{alt}")?;
        }
        writeln!(out, "{}", node.edge_count())?;
        for edge in node.edges() {
            writeln!(
                out,
                "{} {} {}",
                edge.source_port,
                edge.dest.as_raw(),
                edge.dest_port
            )?;
        }
    }
    Ok(())
}

struct Lines<'a> {
    iter: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn next(&mut self) -> Result<&'a str, TextFormatError> {
        self.line += 1;
        self.iter
            .next()
            .ok_or(TextFormatError::UnexpectedEnd { line: self.line })
    }

    fn next_usize(&mut self) -> Result<usize, TextFormatError> {
        let text = self.next()?;
        text.trim()
            .parse()
            .map_err(|_| TextFormatError::InvalidNumber {
                line: self.line,
                found: text.to_string(),
            })
    }
}

/// Parses a graph from the plain-text interchange format.
///
/// The result carries `()` payloads; labels and edges round-trip exactly.
pub fn read_text(input: &str) -> Result<Graph<()>, TextFormatError> {
    let mut lines = Lines {
        iter: input.lines(),
        line: 0,
    };
    let mut graph = Graph::new();

    let node_count = lines.next_usize()?;

    // First pass allocates every node so edges can point forward.
    struct PendingEdge {
        source: NodeId,
        source_port: String,
        dest: usize,
        dest_port: String,
        line: usize,
    }
    let mut pending = Vec::new();

    for node_idx in 0..node_count {
        let label_count = lines.next_usize()?;
        if label_count == 0 {
            return Err(TextFormatError::MissingPrimaryLabel {
                node: node_idx,
                line: lines.line,
            });
        }
        let primary = Label::from_raw(lines.next_usize()? as u32);
        let id = graph.add_node(Node::new(primary, ()));
        for _ in 1..label_count {
            let alt = Label::from_raw(lines.next_usize()? as u32);
            graph.add_alternate_label(id, alt);
        }

        let edge_count = lines.next_usize()?;
        for _ in 0..edge_count {
            let text = lines.next()?;
            let mut fields = text.split_whitespace();
            let (sport, dest, dport) = match (fields.next(), fields.next(), fields.next()) {
                (Some(s), Some(d), Some(p)) if fields.next().is_none() => (s, d, p),
                _ => {
                    return Err(TextFormatError::MalformedEdge {
                        line: lines.line,
                        found: text.to_string(),
                    })
                }
            };
            let dest: usize = dest.parse().map_err(|_| TextFormatError::MalformedEdge {
                line: lines.line,
                found: text.to_string(),
            })?;
            pending.push(PendingEdge {
                source: id,
                source_port: sport.to_string(),
                dest,
                dest_port: dport.to_string(),
                line: lines.line,
            });
        }
    }

    for edge in pending {
        if edge.dest >= node_count {
            return Err(TextFormatError::DestOutOfRange {
                dest: edge.dest,
                count: node_count,
                line: edge.line,
            });
        }
        graph.add_edge(
            edge.source,
            &edge.source_port,
            NodeId::from_raw(edge.dest as u32),
            &edge.dest_port,
        );
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph<()> {
        let mut g = Graph::new();
        let a = g.add_node(Node::new(Label::from_raw(0), ()));
        let b = g.add_node(Node::new(Label::from_raw(1), ()));
        g.add_alternate_label(b, Label::from_raw(0));
        g.add_edge(a, "o", b, "i");
        g.add_edge(b, "q", a, "d");
        g
    }

    fn to_string<P>(g: &Graph<P>) -> String {
        let mut buf = Vec::new();
        write_text(g, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn write_format() {
        let text = to_string(&sample_graph());
        assert_eq!(text, "2\n1\n0\n1\no 1 i\n2\n1\n0\n1\nq 0 d\n");
    }

    #[test]
    fn roundtrip_is_byte_identical() {
        let g = sample_graph();
        let first = to_string(&g);
        let reread = read_text(&first).unwrap();
        let second = to_string(&reread);
        assert_eq!(first, second);
    }

    #[test]
    fn roundtrip_preserves_structure() {
        let g = sample_graph();
        let back = read_text(&to_string(&g)).unwrap();
        assert_eq!(back.node_count(), 2);
        assert_eq!(back.edge_count(), 2);
        let b = NodeId::from_raw(1);
        assert_eq!(
            back.node(b).alternate_labels(),
            &[Label::from_raw(0)]
        );
        assert_eq!(back.node(b).edges()[0].dest_port, "d");
    }

    #[test]
    fn empty_graph_roundtrip() {
        let g: Graph<()> = Graph::new();
        let text = to_string(&g);
        assert_eq!(text, "0\n");
        assert_eq!(read_text(&text).unwrap().node_count(), 0);
    }

    #[test]
    fn truncated_input() {
        let err = read_text("2\n1\n0\n").unwrap_err();
        assert!(matches!(err, TextFormatError::UnexpectedEnd { .. }));
    }

    #[test]
    fn bad_number() {
        let err = read_text("x\n").unwrap_err();
        assert!(matches!(err, TextFormatError::InvalidNumber { line: 1, .. }));
    }

    #[test]
    fn zero_labels_rejected() {
        let err = read_text("1\n0\n0\n").unwrap_err();
        assert!(matches!(err, TextFormatError::MissingPrimaryLabel { .. }));
    }

    #[test]
    fn malformed_edge_rejected() {
        let err = read_text("1\n1\n0\n1\nonly_two fields\n").unwrap_err();
        assert!(matches!(err, TextFormatError::MalformedEdge { .. }));
    }

    #[test]
    fn forward_reference_allowed() {
        // Node 0's edge points at node 1, which is declared later.
        let g = read_text("2\n1\n0\n1\no 1 i\n1\n1\n0\n").unwrap();
        assert_eq!(g.node(NodeId::from_raw(0)).edges()[0].dest, NodeId::from_raw(1));
    }

    #[test]
    fn dest_out_of_range_rejected() {
        let err = read_text("1\n1\n0\n1\no 5 i\n").unwrap_err();
        assert!(matches!(
            err,
            TextFormatError::DestOutOfRange { dest: 5, count: 1, .. }
        ));
    }
}
