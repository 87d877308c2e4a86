//! Layer assignment on the acyclic working graph.

use super::work::{NodeId, WorkGraph};
use crate::options::Ranker;
use std::collections::VecDeque;

/// Assigns `layer` to every node and returns the number of layers.
pub fn run(wg: &mut WorkGraph, ranker: Ranker) -> usize {
    let order = topological_order(wg);
    longest_path(wg, &order);
    if ranker == Ranker::Compact {
        compact(wg, &order);
    }
    let count = wg.max_layer().map_or(0, |max| max + 1);
    tracing::trace!(layers = count, ?ranker, "rank");
    count
}

/// Kahn's algorithm; ready nodes are released in enumeration order.
pub fn topological_order(wg: &WorkGraph) -> Vec<NodeId> {
    let mut indegree: Vec<usize> = wg.node_ids().map(|v| wg.in_segments(v).len()).collect();
    let mut queue: VecDeque<NodeId> = wg.node_ids().filter(|v| indegree[v.0] == 0).collect();
    let mut out: Vec<NodeId> = Vec::with_capacity(wg.nodes.len());

    while let Some(v) = queue.pop_front() {
        out.push(v);
        for w in wg.successors(v) {
            indegree[w.0] -= 1;
            if indegree[w.0] == 0 {
                queue.push_back(w);
            }
        }
    }

    debug_assert_eq!(out.len(), wg.nodes.len(), "ranking requires an acyclic graph");
    out
}

/// Sources sit on layer 0; everything else one below its deepest predecessor.
fn longest_path(wg: &mut WorkGraph, order: &[NodeId]) {
    for &v in order {
        let layer = wg
            .predecessors(v)
            .map(|u| wg.node(u).layer + 1)
            .max()
            .unwrap_or(0);
        wg.node_mut(v).layer = layer;
    }
}

/// Backward pass: a node whose nearest successor is more than one layer away moves down to sit
/// right above it. Nodes without successors stay where they are.
fn compact(wg: &mut WorkGraph, order: &[NodeId]) {
    for &v in order.iter().rev() {
        let layer = wg.node(v).layer;
        let Some(min_succ) = wg.successors(v).map(|w| wg.node(w).layer).min() else {
            continue;
        };
        if min_succ > layer + 1 {
            wg.node_mut(v).layer = min_succ - 1;
        }
    }
}
