//! Edge routing: turns positioned chains back into one path per original edge.

use super::work::{EdgeSlot, NodeId, WorkGraph};
use crate::model::{EdgeLayout, LayoutResult, Point, VertexLayout};
use crate::options::EdgeStyle;
use crate::route;
use crate::util::Rect;

#[derive(Debug, Clone, Copy)]
pub struct RouteOptions {
    pub rank_sep: f64,
    pub self_loop_size: f64,
    pub edge_style: EdgeStyle,
}

fn rect(wg: &WorkGraph, v: NodeId) -> Rect {
    let n = wg.node(v);
    Rect {
        x: n.x,
        y: n.y,
        width: n.width,
        height: n.height,
    }
}

/// Builds the (top-to-bottom, untranslated) result from a positioned working graph.
pub fn route(wg: &WorkGraph, opts: &RouteOptions) -> LayoutResult {
    let mut result = LayoutResult::default();

    for (v, id) in wg.vertices() {
        let n = wg.node(v);
        result.vertices.insert(
            id.to_string(),
            VertexLayout {
                x: n.x,
                y: n.y,
                width: n.width,
                height: n.height,
                layer: n.layer,
                order: n.order,
            },
        );
    }

    for (key, slot) in &wg.slots {
        let edge = match *slot {
            EdgeSlot::SelfLoop { node, nth } => EdgeLayout {
                points: route::self_loop(rect(wg, node), opts.self_loop_size, nth),
                reversed: false,
            },
            EdgeSlot::Chain(c) => {
                let chain = &wg.chains[c];
                let (src, dst) = (rect(wg, chain.tail), rect(wg, chain.head));

                let same_layer = wg.node(chain.tail).layer == wg.node(chain.head).layer;
                let path = if same_layer {
                    route::same_layer_arc(src, dst, opts.rank_sep / 2.0)
                } else {
                    let via: Vec<Point> = chain
                        .dummies
                        .iter()
                        .map(|&d| Point::new(wg.node(d).x, wg.node(d).y))
                        .collect();
                    route::polyline(src, dst, &via)
                };
                let mut points = route::styled(path, opts.edge_style, same_layer);

                if chain.reversed {
                    points.reverse();
                }
                EdgeLayout {
                    points,
                    reversed: chain.reversed,
                }
            }
        };
        result.edges.insert(key.clone(), edge);
    }

    result
}
