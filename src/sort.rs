//! Depth-first topological sort with cycle detection.
//!
//! Every node moves through three states: unvisited (no entry in the mark
//! map), in progress (on the current exploration path) and done (its whole
//! reachable subgraph has been emitted). Reaching an in-progress node again
//! means the path loops back on itself.
//!
//! The exploration runs on an explicit stack of frames instead of recursion,
//! so graph depth is bounded by heap memory rather than the call stack. A
//! frame finishes in exactly the order a recursive `visit` would return.

use crate::error::{Result, TopoError};
use crate::graph::Graph;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// A pending `visit(node)` call, resuming at successor `next`
struct Frame<'g, N> {
    node: &'g N,
    next: usize,
}

/// Orders every node of `graph` so that for each edge `u -> v`, `u` comes
/// before `v`.
///
/// Keys are explored in insertion order and successors in declared order,
/// so the same graph always yields the same sequence.
///
/// Returns [`TopoError::CycleDetected`] as soon as the exploration revisits
/// an in-progress node. No partial order is returned in that case.
pub fn topological_sort<N>(graph: &Graph<N>) -> Result<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    debug!(keys = graph.len(), "topological sort started");

    let order: Vec<N> = explore(graph)?.into_iter().cloned().collect();
    debug!(nodes = order.len(), "topological sort finished");
    Ok(order)
}

/// Returns true if `graph` has no directed cycle
pub fn is_acyclic<N>(graph: &Graph<N>) -> bool
where
    N: Eq + Hash + Clone + Debug,
{
    explore(graph).is_ok()
}

/// Runs the exploration and returns borrowed nodes in topological order
fn explore<N>(graph: &Graph<N>) -> Result<Vec<&N>>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut marks: HashMap<&N, Mark> = HashMap::new();
    let mut finished: Vec<&N> = Vec::new();
    let mut stack: Vec<Frame<'_, N>> = Vec::new();

    for root in graph.all_nodes() {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root, Mark::InProgress);
        stack.push(Frame { node: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match graph.successors(node).get(frame.next) {
                Some(succ) => {
                    frame.next += 1;
                    match marks.get(succ) {
                        Some(Mark::InProgress) => {
                            warn!(node = ?succ, "cycle detected while ordering graph");
                            return Err(TopoError::CycleDetected);
                        }
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(succ, Mark::InProgress);
                            stack.push(Frame { node: succ, next: 0 });
                        }
                    }
                }
                None => {
                    stack.pop();
                    marks.insert(node, Mark::Done);
                    finished.push(node);
                }
            }
        }
    }

    // Post-order finish, reversed: the last node to finish comes first
    finished.reverse();
    Ok(finished)
}
