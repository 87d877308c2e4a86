//! Greedy feedback arc set selection (Eades, Lin & Smyth).
//!
//! Nodes are kept in buckets by `out - in` degree. Sinks and sources are peeled off first;
//! otherwise the node with the largest surplus is removed and its incoming segments from nodes
//! still alive join the arc set. Parallel segments each count once.
//!
//! A node that changes bucket is pushed again with a fresh stamp; entries whose stamp is stale
//! are skipped when popped, so every move is O(1).

use super::work::{NodeId, WorkGraph};
use std::collections::VecDeque;

struct Buckets {
    buckets: Vec<VecDeque<(NodeId, u32)>>,
    stamp: Vec<u32>,
    zero_idx: i64,
    in_deg: Vec<i64>,
    out_deg: Vec<i64>,
    alive: Vec<bool>,
    remaining: usize,
}

impl Buckets {
    fn last(&self) -> usize {
        self.buckets.len() - 1
    }

    fn assign(&mut self, v: NodeId) {
        self.stamp[v.0] = self.stamp[v.0].wrapping_add(1);

        let (in_v, out_v) = (self.in_deg[v.0], self.out_deg[v.0]);
        let idx = if out_v == 0 {
            0
        } else if in_v == 0 {
            self.last()
        } else {
            (out_v - in_v + self.zero_idx).clamp(0, self.last() as i64) as usize
        };

        self.buckets[idx].push_front((v, self.stamp[v.0]));
    }

    fn pop(&mut self, idx: usize) -> Option<NodeId> {
        while let Some((v, stamp)) = self.buckets[idx].pop_back() {
            if self.alive[v.0] && self.stamp[v.0] == stamp {
                return Some(v);
            }
        }
        None
    }

    /// Removes `v`; with `fas` set, its incoming segments from live nodes are collected.
    fn remove(&mut self, wg: &WorkGraph, v: NodeId, mut fas: Option<&mut Vec<usize>>) {
        if !self.alive[v.0] {
            return;
        }
        self.alive[v.0] = false;
        self.remaining -= 1;

        for &seg in wg.in_segments(v) {
            let u = wg.segments[seg].tail;
            if !self.alive[u.0] {
                continue;
            }
            if let Some(fas) = fas.as_deref_mut() {
                fas.push(seg);
            }
            self.out_deg[u.0] -= 1;
            self.assign(u);
        }

        for &seg in wg.out_segments(v) {
            let w = wg.segments[seg].head;
            if !self.alive[w.0] {
                continue;
            }
            self.in_deg[w.0] -= 1;
            self.assign(w);
        }
    }
}

/// Segment indices whose reversal makes the working graph acyclic.
pub fn greedy_fas(wg: &WorkGraph) -> Vec<usize> {
    let n = wg.nodes.len();
    if n <= 1 {
        return Vec::new();
    }

    let in_deg: Vec<i64> = wg
        .node_ids()
        .map(|v| wg.in_segments(v).len() as i64)
        .collect();
    let out_deg: Vec<i64> = wg
        .node_ids()
        .map(|v| wg.out_segments(v).len() as i64)
        .collect();
    let max_in = in_deg.iter().copied().max().unwrap_or(0);
    let max_out = out_deg.iter().copied().max().unwrap_or(0);

    let bucket_len = (max_out + max_in + 3).max(3) as usize;
    let mut b = Buckets {
        buckets: (0..bucket_len).map(|_| VecDeque::new()).collect(),
        stamp: vec![0; n],
        zero_idx: max_in + 1,
        in_deg,
        out_deg,
        alive: vec![true; n],
        remaining: n,
    };
    for v in wg.node_ids() {
        b.assign(v);
    }

    let mut fas: Vec<usize> = Vec::new();
    while b.remaining > 0 {
        while let Some(v) = b.pop(0) {
            b.remove(wg, v, None);
        }
        let last = b.last();
        while let Some(v) = b.pop(last) {
            b.remove(wg, v, None);
        }
        if b.remaining == 0 {
            break;
        }

        // With the middle buckets empty every live node is a sink or a source again, and the
        // next round drains it.
        if let Some(v) = (1..last).rev().find_map(|i| b.pop(i)) {
            b.remove(wg, v, Some(&mut fas));
        }
    }

    fas.sort_unstable();
    fas
}
