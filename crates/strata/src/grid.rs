//! Straight-line grid strategy.
//!
//! Vertices fill a `ceil(sqrt(n))`-column grid row by row in enumeration order. Columns are as
//! wide as their widest vertex (plus self-loop room), rows as tall as their tallest one.

use crate::coordinate_system;
use crate::model::{EdgeLayout, LayoutResult, VertexLayout};
use crate::options::LayoutOptions;
use crate::route;
use crate::util::Rect;
use crate::view::GraphSnapshot;

/// Number of columns used for `n` vertices.
pub fn columns(n: usize) -> usize {
    let mut cols = (n as f64).sqrt().ceil() as usize;
    // Guard against the float rounding down for perfect squares.
    while cols * cols < n {
        cols += 1;
    }
    cols.max(1)
}

pub fn run(g: &GraphSnapshot, options: &LayoutOptions) -> LayoutResult {
    let ids: Vec<&str> = g.nodes().collect();
    let n = ids.len();
    let cols = columns(n);
    let rows = n.div_ceil(cols);

    let mut loops = vec![0usize; n];
    for key in g.edges().filter(|k| k.is_self_loop()) {
        if let Some(v) = g.node_position(&key.v) {
            loops[v] += 1;
        }
    }

    let sizes: Vec<(f64, f64)> = ids
        .iter()
        .map(|&id| {
            let label = g.node(id).copied().unwrap_or_default();
            coordinate_system::adjust_size(options.rankdir, label.width, label.height)
        })
        .collect();

    let mut col_width = vec![0.0f64; cols];
    let mut row_height = vec![0.0f64; rows];
    for (v, &(w, h)) in sizes.iter().enumerate() {
        let footprint = w + 2.0 * route::self_loop_reach(options.self_loop_size, loops[v]);
        let height = route::self_loop_height(h, options.self_loop_size, loops[v]);
        col_width[v % cols] = col_width[v % cols].max(footprint);
        row_height[v / cols] = row_height[v / cols].max(height);
    }

    let col_left = offsets(&col_width, options.node_sep);
    let row_top = offsets(&row_height, options.rank_sep);

    let mut result = LayoutResult::default();
    for (v, id) in ids.iter().enumerate() {
        let (row, col) = (v / cols, v % cols);
        let (width, height) = sizes[v];
        result.vertices.insert(
            id.to_string(),
            VertexLayout {
                x: col_left[col] + col_width[col] / 2.0,
                y: row_top[row] + row_height[row] / 2.0,
                width,
                height,
                layer: row,
                order: col,
            },
        );
    }

    let mut loops_seen = vec![0usize; n];
    for key in g.edges() {
        let (Some(v), Some(w)) = (g.node_position(&key.v), g.node_position(&key.w)) else {
            continue;
        };
        let (Some(src), Some(dst)) = (result.vertex(&key.v), result.vertex(&key.w)) else {
            continue;
        };
        let (src, dst) = (Rect::from(src), Rect::from(dst));
        let points = if v == w {
            let nth = loops_seen[v];
            loops_seen[v] += 1;
            route::self_loop(src, options.self_loop_size, nth)
        } else {
            route::styled(route::straight(src, dst), options.edge_style, false)
        };
        result.edges.insert(
            key.clone(),
            EdgeLayout {
                points,
                reversed: false,
            },
        );
    }

    coordinate_system::undo(&mut result, options.rankdir);
    result.finish(options.margin);
    result
}

/// Start of each band when `sizes` are laid out `gap` apart.
fn offsets(sizes: &[f64], gap: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(sizes.len());
    let mut cursor = 0.0;
    for size in sizes {
        out.push(cursor);
        cursor += size + gap;
    }
    out
}
