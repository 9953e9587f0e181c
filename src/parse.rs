//! Edge-list text format.
//!
//! ```text
//! # comment
//! a -> b c d
//! c -> d
//! lonely
//! ```
//!
//! Each line declares one source node followed by the nodes it must precede.
//! A bare name (or `name ->`) declares a node without outgoing edges.

use crate::error::{Result, TopoError};
use crate::graph::Graph;
use tracing::debug;

const ARROW: &str = "->";

/// Parse an edge list into a graph keyed by node name
pub fn parse_edges(input: &str) -> Result<Graph<String>> {
    let mut graph = Graph::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let (source, targets) = match line.split_once(ARROW) {
            Some((lhs, rhs)) => {
                if rhs.contains(ARROW) {
                    return Err(TopoError::parse(line_no, "more than one '->' on a line"));
                }
                (lhs, rhs)
            }
            None => (line, ""),
        };

        let mut sources = source.split_whitespace();
        let from = sources
            .next()
            .ok_or_else(|| TopoError::parse(line_no, "missing source node before '->'"))?;
        if let Some(extra) = sources.next() {
            return Err(TopoError::parse(
                line_no,
                format!("expected a single source node, found '{from}' and '{extra}'"),
            ));
        }

        graph.add_edges(
            from.to_string(),
            targets.split_whitespace().map(str::to_string),
        );
    }

    debug!(
        keys = graph.len(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
