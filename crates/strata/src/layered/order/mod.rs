//! Node ordering / crossing minimization.
//!
//! Layers start from a depth-first seed that gives every connected component its own contiguous
//! run of slots, then alternate median down-sweeps and up-sweeps within those runs. Each
//! full sweep is optionally followed by adjacent-swap transposition. The best ordering seen is
//! kept; the loop stops when a sweep brings no improvement or the budget runs out.

mod cross_count;
mod init_order;
mod median;
mod transpose;

pub use cross_count::cross_count;
pub use init_order::init_order;
pub use median::{median, sort_by_median};
pub use transpose::transpose;

use super::work::{NodeId, WorkGraph};

#[derive(Debug, Clone, Copy)]
pub struct OrderOptions {
    pub max_sweeps: usize,
    pub transpose: bool,
}

/// Orders every layer in place (`wg.layers` and each node's `order`) and returns the final
/// crossing count.
pub fn order(wg: &mut WorkGraph, opts: OrderOptions) -> usize {
    let mut layers = init_order(wg);
    wg.assign_order(&layers);

    let mut best_cc = cross_count(wg, &layers);
    let mut best = layers.clone();

    for sweep in 0..opts.max_sweeps {
        if best_cc == 0 {
            break;
        }

        down_sweep(wg, &mut layers);
        up_sweep(wg, &mut layers);
        if opts.transpose {
            transpose(wg, &mut layers);
        }

        let cc = cross_count(wg, &layers);
        tracing::trace!(sweep, crossings = cc, "order sweep");
        if cc >= best_cc {
            break;
        }
        best_cc = cc;
        best.clone_from(&layers);
    }

    wg.assign_order(&best);
    wg.layers = best;
    best_cc
}

fn down_sweep(wg: &mut WorkGraph, layers: &mut [Vec<NodeId>]) {
    for r in 1..layers.len() {
        reorder(wg, &mut layers[r], true);
    }
}

fn up_sweep(wg: &mut WorkGraph, layers: &mut [Vec<NodeId>]) {
    for r in (0..layers.len().saturating_sub(1)).rev() {
        reorder(wg, &mut layers[r], false);
    }
}

/// Sorts one layer by the median slot of its neighbours in the fixed layer above (`upward`) or
/// below. Nodes only move within their component's run.
fn reorder(wg: &mut WorkGraph, layer: &mut Vec<NodeId>, upward: bool) {
    let keys: Vec<Option<f64>> = layer
        .iter()
        .map(|&v| {
            let mut slots: Vec<usize> = if upward {
                wg.predecessors(v).map(|u| wg.node(u).order).collect()
            } else {
                wg.successors(v).map(|w| wg.node(w).order).collect()
            };
            median(&mut slots)
        })
        .collect();

    let mut sorted: Vec<NodeId> = Vec::with_capacity(layer.len());
    let mut start = 0;
    for run in layer.chunk_by(|&a, &b| wg.node(a).component == wg.node(b).component) {
        let end = start + run.len();
        sorted.extend(sort_by_median(run, &keys[start..end]));
        start = end;
    }
    *layer = sorted;
    for (i, &v) in layer.iter().enumerate() {
        wg.node_mut(v).order = i;
    }
}
