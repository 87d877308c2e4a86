//! Coordinate assignment.
//!
//! Layers are stacked top to bottom: a layer's band is as tall as its tallest node (self-loops
//! included) and bands are `rank_sep` apart. Each connected component is packed on its own:
//! within a layer its nodes sit left to right at their minimum separation, and each layer is
//! optionally centred against the component's widest one. Components then sit side by side.
//! Optional balancing passes pull nodes towards the mean x of their neighbours without ever
//! breaking the separation.

use super::work::{NodeId, WorkGraph};
use crate::route;

#[derive(Debug, Clone, Copy)]
pub struct PositionOptions {
    pub node_sep: f64,
    pub rank_sep: f64,
    pub edge_sep: f64,
    pub dummy_width: f64,
    pub self_loop_size: f64,
    pub center_layers: bool,
    pub balance_iterations: usize,
}

pub fn position(wg: &mut WorkGraph, opts: &PositionOptions) {
    position_y(wg, opts);
    let bounds = position_x(wg, opts);
    for _ in 0..opts.balance_iterations {
        balance(wg, opts, &bounds, true);
        balance(wg, opts, &bounds, false);
    }
}

fn position_y(wg: &mut WorkGraph, opts: &PositionOptions) {
    let layers = std::mem::take(&mut wg.layers);
    let mut top = 0.0;
    for layer in &layers {
        let band = layer
            .iter()
            .map(|&v| {
                let n = wg.node(v);
                route::self_loop_height(n.height, opts.self_loop_size, n.self_loops)
            })
            .fold(0.0, f64::max);
        for &v in layer {
            wg.node_mut(v).y = top + band / 2.0;
        }
        top += band + opts.rank_sep;
    }
    wg.layers = layers;
}

/// Room left of the centre.
fn left_half(wg: &WorkGraph, v: NodeId, opts: &PositionOptions) -> f64 {
    let node = wg.node(v);
    if node.is_dummy() {
        opts.dummy_width / 2.0
    } else {
        node.width / 2.0
    }
}

/// Room right of the centre, self-loops included.
fn right_half(wg: &WorkGraph, v: NodeId, opts: &PositionOptions) -> f64 {
    let node = wg.node(v);
    if node.is_dummy() {
        opts.dummy_width / 2.0
    } else {
        node.width / 2.0 + route::self_loop_reach(opts.self_loop_size, node.self_loops)
    }
}

fn sep(wg: &WorkGraph, v: NodeId, opts: &PositionOptions) -> f64 {
    if wg.node(v).is_dummy() {
        opts.edge_sep
    } else {
        opts.node_sep
    }
}

/// Minimum centre distance between `a` and its right neighbour `b`.
fn min_distance(wg: &WorkGraph, a: NodeId, b: NodeId, opts: &PositionOptions) -> f64 {
    right_half(wg, a, opts) + (sep(wg, a, opts) + sep(wg, b, opts)) / 2.0 + left_half(wg, b, opts)
}

/// One component's slots `start..end` within a layer and the width they span.
struct Run {
    start: usize,
    end: usize,
    component: usize,
    width: f64,
}

/// Packs each component on its own, then places the components side by side, `node_sep` apart.
/// Returns the horizontal extent of every component.
fn position_x(wg: &mut WorkGraph, opts: &PositionOptions) -> Vec<(f64, f64)> {
    let layers = std::mem::take(&mut wg.layers);
    let mut component_width = vec![0.0f64; wg.component_count()];
    let mut local: Vec<Vec<f64>> = Vec::with_capacity(layers.len());
    let mut runs: Vec<Vec<Run>> = Vec::with_capacity(layers.len());

    for layer in &layers {
        let mut xs: Vec<f64> = Vec::with_capacity(layer.len());
        let mut layer_runs: Vec<Run> = Vec::new();
        for run in layer.chunk_by(|&a, &b| wg.node(a).component == wg.node(b).component) {
            let start = xs.len();
            let mut x = left_half(wg, run[0], opts);
            xs.push(x);
            for pair in run.windows(2) {
                x += min_distance(wg, pair[0], pair[1], opts);
                xs.push(x);
            }
            let width = x + right_half(wg, run[run.len() - 1], opts);
            let component = wg.node(run[0]).component;
            if component >= component_width.len() {
                component_width.resize(component + 1, 0.0);
            }
            component_width[component] = component_width[component].max(width);
            layer_runs.push(Run {
                start,
                end: xs.len(),
                component,
                width,
            });
        }
        local.push(xs);
        runs.push(layer_runs);
    }

    let mut bounds: Vec<(f64, f64)> = Vec::with_capacity(component_width.len());
    let mut left = 0.0;
    for width in &component_width {
        bounds.push((left, left + width));
        left += width + opts.node_sep;
    }

    for ((layer, xs), layer_runs) in layers.iter().zip(&local).zip(&runs) {
        for run in layer_runs {
            let (left, right) = bounds[run.component];
            let shift = if opts.center_layers {
                left + (right - left - run.width) / 2.0
            } else {
                left
            };
            for i in run.start..run.end {
                wg.node_mut(layer[i]).x = xs[i] + shift;
            }
        }
    }

    wg.layers = layers;
    bounds
}

/// One pass over the layers (downwards using predecessors, upwards using successors). Each node
/// moves towards the mean x of its neighbours, clamped between its current left and right
/// neighbours at minimum separation and kept inside its component's extent.
fn balance(wg: &mut WorkGraph, opts: &PositionOptions, bounds: &[(f64, f64)], downward: bool) {
    let layers = std::mem::take(&mut wg.layers);
    let indices: Vec<usize> = if downward {
        (1..layers.len()).collect()
    } else {
        (0..layers.len().saturating_sub(1)).rev().collect()
    };

    for r in indices {
        let layer = &layers[r];
        for (i, &v) in layer.iter().enumerate() {
            let xs: Vec<f64> = if downward {
                wg.predecessors(v).map(|u| wg.node(u).x).collect()
            } else {
                wg.successors(v).map(|w| wg.node(w).x).collect()
            };
            if xs.is_empty() {
                continue;
            }
            let target = xs.iter().sum::<f64>() / xs.len() as f64;

            let (left, right) = bounds
                .get(wg.node(v).component)
                .copied()
                .unwrap_or((f64::NEG_INFINITY, f64::INFINITY));
            let lo = i
                .checked_sub(1)
                .map(|j| wg.node(layer[j]).x + min_distance(wg, layer[j], v, opts))
                .unwrap_or(f64::NEG_INFINITY)
                .max(left + left_half(wg, v, opts));
            let hi = layer
                .get(i + 1)
                .map(|&n| wg.node(n).x - min_distance(wg, v, n, opts))
                .unwrap_or(f64::INFINITY)
                .min(right - right_half(wg, v, opts));
            if lo <= hi {
                wg.node_mut(v).x = target.clamp(lo, hi);
            }
        }
    }

    wg.layers = layers;
}
