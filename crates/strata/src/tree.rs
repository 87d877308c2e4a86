//! Rooted tree strategy.
//!
//! A breadth-first spanning forest is grown from every source (vertex without incoming edges)
//! in enumeration order; vertices only reachable through a cycle start extra trees. Trees of one
//! connected component are placed next to each other. Depth is the layer. Each subtree gets a
//! horizontal span wide enough for its children and every parent is centred over its children.
//! Edges that are not tree edges are routed by the same rules as the layered strategy: arcs
//! inside a layer, loops on a single vertex, straight lines otherwise.

use crate::coordinate_system;
use crate::model::{EdgeLayout, LayoutResult, VertexLayout};
use crate::options::LayoutOptions;
use crate::route;
use crate::util::Rect;
use crate::view::{GraphSnapshot, component_index};
use std::collections::VecDeque;

struct TreeNode {
    width: f64,
    height: f64,
    self_loops: usize,
    children: Vec<usize>,
    depth: usize,
    span: f64,
    x: f64,
    y: f64,
}

pub fn run(g: &GraphSnapshot, options: &LayoutOptions) -> LayoutResult {
    let ids: Vec<&str> = g.nodes().collect();
    let mut nodes: Vec<TreeNode> = ids
        .iter()
        .map(|&id| {
            let label = g.node(id).copied().unwrap_or_default();
            let (width, height) =
                coordinate_system::adjust_size(options.rankdir, label.width, label.height);
            TreeNode {
                width,
                height,
                self_loops: 0,
                children: Vec::new(),
                depth: 0,
                span: 0.0,
                x: 0.0,
                y: 0.0,
            }
        })
        .collect();

    // Oriented adjacency: undirected edges point from the earlier-enumerated endpoint.
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    let mut has_in = vec![false; ids.len()];
    for key in g.edges() {
        let (Some(v), Some(w)) = (g.node_position(&key.v), g.node_position(&key.w)) else {
            continue;
        };
        if v == w {
            nodes[v].self_loops += 1;
            continue;
        }
        let (v, w) = if g.is_directed() {
            (v, w)
        } else {
            (v.min(w), v.max(w))
        };
        out[v].push(w);
        has_in[w] = true;
    }

    let bfs = spanning_forest(&mut nodes, &out, &has_in);
    // Trees of one component sit next to each other.
    let components = component_index(g);
    let mut roots: Vec<usize> = bfs.iter().copied().filter(|&v| nodes[v].depth == 0).collect();
    roots.sort_by_key(|&r| components.get(r).copied().unwrap_or(0));
    tracing::trace!(roots = roots.len(), "tree forest");

    // Spans, children first.
    for &v in bfs.iter().rev() {
        let loops = route::self_loop_reach(options.self_loop_size, nodes[v].self_loops);
        let own = nodes[v].width + 2.0 * loops;
        let kids = children_span(&nodes, v, options.node_sep);
        nodes[v].span = own.max(kids);
    }

    // Horizontal placement, parents first.
    let mut lefts = vec![0.0; nodes.len()];
    let mut cursor = 0.0;
    for &r in &roots {
        lefts[r] = cursor;
        cursor += nodes[r].span + options.node_sep;
    }
    for &v in &bfs {
        let left = lefts[v];
        nodes[v].x = left + nodes[v].span / 2.0;
        let block = children_span(&nodes, v, options.node_sep);
        let mut child_left = left + (nodes[v].span - block) / 2.0;
        for i in 0..nodes[v].children.len() {
            let c = nodes[v].children[i];
            lefts[c] = child_left;
            child_left += nodes[c].span + options.node_sep;
        }
    }

    // Depth bands.
    let depth_count = nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0);
    let mut band = vec![0.0f64; depth_count];
    for n in &nodes {
        let height = route::self_loop_height(n.height, options.self_loop_size, n.self_loops);
        band[n.depth] = band[n.depth].max(height);
    }
    let mut tops = Vec::with_capacity(depth_count);
    let mut top = 0.0;
    for h in &band {
        tops.push(top);
        top += h + options.rank_sep;
    }
    for n in &mut nodes {
        n.y = tops[n.depth] + band[n.depth] / 2.0;
    }

    // In-layer order follows x.
    let mut by_depth: Vec<Vec<usize>> = vec![Vec::new(); depth_count];
    for v in 0..nodes.len() {
        by_depth[nodes[v].depth].push(v);
    }
    let mut order = vec![0usize; nodes.len()];
    for layer in &mut by_depth {
        layer.sort_by(|&a, &b| nodes[a].x.total_cmp(&nodes[b].x).then(a.cmp(&b)));
        for (i, &v) in layer.iter().enumerate() {
            order[v] = i;
        }
    }

    let mut result = LayoutResult::default();
    for (v, id) in ids.iter().enumerate() {
        let n = &nodes[v];
        result.vertices.insert(
            id.to_string(),
            VertexLayout {
                x: n.x,
                y: n.y,
                width: n.width,
                height: n.height,
                layer: n.depth,
                order: order[v],
            },
        );
    }

    let rect = |v: usize| Rect {
        x: nodes[v].x,
        y: nodes[v].y,
        width: nodes[v].width,
        height: nodes[v].height,
    };
    let mut loops_seen = vec![0usize; nodes.len()];
    for key in g.edges() {
        let (Some(v), Some(w)) = (g.node_position(&key.v), g.node_position(&key.w)) else {
            continue;
        };
        let edge = if v == w {
            let nth = loops_seen[v];
            loops_seen[v] += 1;
            EdgeLayout {
                points: route::self_loop(rect(v), options.self_loop_size, nth),
                reversed: false,
            }
        } else if nodes[v].depth == nodes[w].depth {
            let arc = route::same_layer_arc(rect(v), rect(w), options.rank_sep / 2.0);
            EdgeLayout {
                points: route::styled(arc, options.edge_style, true),
                reversed: false,
            }
        } else {
            let line = route::straight(rect(v), rect(w));
            EdgeLayout {
                points: route::styled(line, options.edge_style, false),
                reversed: nodes[w].depth < nodes[v].depth,
            }
        };
        result.edges.insert(key.clone(), edge);
    }

    coordinate_system::undo(&mut result, options.rankdir);
    result.finish(options.margin);
    result
}

/// Width of `v`'s children laid side by side.
fn children_span(nodes: &[TreeNode], v: usize, node_sep: f64) -> f64 {
    let children = &nodes[v].children;
    if children.is_empty() {
        return 0.0;
    }
    children.iter().map(|&c| nodes[c].span).sum::<f64>()
        + node_sep * (children.len() - 1) as f64
}

/// Breadth-first spanning forest; fills `children` and `depth` and returns the visit order.
fn spanning_forest(nodes: &mut [TreeNode], out: &[Vec<usize>], has_in: &[bool]) -> Vec<usize> {
    let n = nodes.len();
    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    let sources = (0..n).filter(|&v| !has_in[v]);
    let rest = 0..n;
    for root in sources.chain(rest) {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        nodes[root].depth = 0;
        let mut queue = VecDeque::from([root]);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &w in &out[v] {
                if visited[w] {
                    continue;
                }
                visited[w] = true;
                nodes[w].depth = nodes[v].depth + 1;
                nodes[v].children.push(w);
                queue.push_back(w);
            }
        }
    }

    order
}
