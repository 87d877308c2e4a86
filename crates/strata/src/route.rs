//! Edge path primitives shared by every strategy.
//!
//! Paths are built in the top-to-bottom frame: layers grow along +y, and a layer's baseline is
//! horizontal. [`crate::coordinate_system`] maps them into the requested direction afterwards.

use crate::model::Point;
use crate::options::EdgeStyle;
use crate::util::{Rect, intersect_rect};

/// Boundary-to-boundary path from `src` to `dst` through `via`.
pub fn polyline(src: Rect, dst: Rect, via: &[Point]) -> Vec<Point> {
    let first_target = via.first().copied().unwrap_or_else(|| dst.center());
    let last_source = via.last().copied().unwrap_or_else(|| src.center());

    let mut points = Vec::with_capacity(via.len() + 2);
    points.push(intersect_rect(src, first_target));
    points.extend_from_slice(via);
    points.push(intersect_rect(dst, last_source));
    points
}

pub fn straight(src: Rect, dst: Rect) -> Vec<Point> {
    polyline(src, dst, &[])
}

/// How far `loops` self-loops of `size` reach past the right border of their vertex.
pub fn self_loop_reach(size: f64, loops: usize) -> f64 {
    size.max(1.0) * loops as f64
}

/// Vertical room a vertex `height` tall needs once its `loops` self-loops are drawn.
pub fn self_loop_height(height: f64, size: f64, loops: usize) -> f64 {
    height.max(self_loop_reach(size, loops))
}

/// Loop leaving and re-entering the right side of `rect`. `nth` spreads several loops on the
/// same vertex apart; each one reaches `size * (nth + 1)` past the border and spans
/// [`self_loop_height`] vertically.
pub fn self_loop(rect: Rect, size: f64, nth: usize) -> Vec<Point> {
    let reach = self_loop_reach(size, nth + 1);
    let right = rect.x + rect.width / 2.0;
    let anchor = rect.height / 4.0;
    let half = (rect.height / 2.0).max(reach / 2.0);
    let y = rect.y;

    vec![
        Point::new(right, y - anchor),
        Point::new(right + 2.0 * reach / 3.0, y - half),
        Point::new(right + reach, y),
        Point::new(right + 2.0 * reach / 3.0, y + half),
        Point::new(right, y + anchor),
    ]
}

/// Arc between two vertices sharing a layer. It leaves from the top of `src`, peaks `lift` above
/// the taller of the two, and lands on the top of `dst`, so it never runs along the baseline.
pub fn same_layer_arc(src: Rect, dst: Rect, lift: f64) -> Vec<Point> {
    let src_top = src.y - src.height / 2.0;
    let dst_top = dst.y - dst.height / 2.0;
    let peak = src_top.min(dst_top) - lift.max(1.0);

    vec![
        Point::new(src.x, src_top),
        Point::new((src.x + dst.x) / 2.0, peak),
        Point::new(dst.x, dst_top),
    ]
}

/// Replaces every slanted segment by a vertical-horizontal-vertical dog-leg.
pub fn orthogonalize(points: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut out = vec![first];
    let mut prev = first;
    for &p in rest {
        if p.x != prev.x && p.y != prev.y {
            let mid = (prev.y + p.y) / 2.0;
            out.push(Point::new(prev.x, mid));
            out.push(Point::new(p.x, mid));
        }
        out.push(p);
        prev = p;
    }
    out
}

/// Same-layer arcs become a three-sided bracket above the layer.
pub fn orthogonal_arc(arc: &[Point]) -> Vec<Point> {
    match arc {
        [start, peak, end] => vec![
            *start,
            Point::new(start.x, peak.y),
            Point::new(end.x, peak.y),
            *end,
        ],
        _ => arc.to_vec(),
    }
}

/// Applies `style` to a path built by [`polyline`] (or [`same_layer_arc`] when `arc` is set).
pub fn styled(points: Vec<Point>, style: EdgeStyle, arc: bool) -> Vec<Point> {
    match (style, arc) {
        (EdgeStyle::Polyline, _) => points,
        (EdgeStyle::Orthogonal, false) => orthogonalize(&points),
        (EdgeStyle::Orthogonal, true) => orthogonal_arc(&points),
    }
}
