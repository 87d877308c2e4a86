//! Break cycles by reversing a feedback arc set (FAS).
//!
//! The default variant reverses the back edges of a depth-first search started from every
//! unvisited vertex in enumeration order. `Acyclicer::Greedy` reverses the set picked by
//! [`super::greedy_fas`] instead. Self-loops never reach this pass: they are not segments.

use super::greedy_fas;
use super::work::{NodeId, WorkGraph};
use crate::options::Acyclicer;

/// Reverses a feedback arc set in place and returns how many segments were flipped.
pub fn run(wg: &mut WorkGraph, acyclicer: Acyclicer) -> usize {
    let fas = match acyclicer {
        Acyclicer::Dfs => dfs_fas(wg),
        Acyclicer::Greedy => greedy_fas::greedy_fas(wg),
    };
    for &ix in &fas {
        wg.reverse_segment(ix);
    }
    if !fas.is_empty() {
        wg.reindex();
    }
    tracing::trace!(reversed = fas.len(), "acyclic");
    fas.len()
}

/// Segment indices of the DFS back edges.
///
/// The search is iterative so deep chains do not overflow the stack.
pub fn dfs_fas(wg: &WorkGraph) -> Vec<usize> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        New,
        OnStack,
        Done,
    }

    let mut mark = vec![Mark::New; wg.nodes.len()];
    let mut fas: Vec<usize> = Vec::new();
    // (node, index of the next out segment to look at)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for (root, _) in wg.vertices() {
        if mark[root.0] != Mark::New {
            continue;
        }
        mark[root.0] = Mark::OnStack;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let Some(&seg) = wg.out_segments(v).get(next) else {
                mark[v.0] = Mark::Done;
                stack.pop();
                continue;
            };
            top.1 += 1;

            let w = wg.segments[seg].head;
            match mark[w.0] {
                Mark::OnStack => fas.push(seg),
                Mark::New => {
                    mark[w.0] = Mark::OnStack;
                    stack.push((w, 0));
                }
                Mark::Done => {}
            }
        }
    }

    fas
}
