//! The read-only Graph View contract and the per-run snapshot built from it.
//!
//! Layout never works on a caller's live graph. A [`GraphSnapshot`] is copied from any
//! [`GraphView`] and the pipeline builds its own working model from that copy.

use crate::error::{Error, Result};
use crate::graphlib::{EdgeKey, Graph, GraphOptions, alg};

/// Vertex label of a [`GraphSnapshot`]: the size hint the layout must respect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexLabel {
    pub width: f64,
    pub height: f64,
}

impl VertexLabel {
    /// Negative or non-finite sizes collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        fn clean(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self {
            width: clean(width),
            height: clean(height),
        }
    }
}

pub type GraphSnapshot = Graph<VertexLabel, ()>;

pub trait SizeHint {
    fn size_hint(&self) -> (f64, f64);
}

impl SizeHint for VertexLabel {
    fn size_hint(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl SizeHint for (f64, f64) {
    fn size_hint(&self) -> (f64, f64) {
        *self
    }
}

impl SizeHint for () {
    fn size_hint(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// What the layout engine needs from a graph owned by someone else.
pub trait GraphView {
    fn is_directed(&self) -> bool;

    /// Vertex ids in a stable enumeration order. Layouts are deterministic in this order.
    fn vertices(&self) -> Vec<String>;

    fn out_edges(&self, v: &str) -> Vec<EdgeKey>;

    fn in_edges(&self, v: &str) -> Vec<EdgeKey>;

    /// `(width, height)` of `v`.
    fn size_hint(&self, v: &str) -> (f64, f64);
}

impl<N, E> GraphView for Graph<N, E>
where
    N: Default + SizeHint + 'static,
    E: Default + 'static,
{
    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn vertices(&self) -> Vec<String> {
        self.node_ids()
    }

    fn out_edges(&self, v: &str) -> Vec<EdgeKey> {
        Graph::out_edges(self, v, None)
    }

    fn in_edges(&self, v: &str) -> Vec<EdgeKey> {
        Graph::in_edges(self, v, None)
    }

    fn size_hint(&self, v: &str) -> (f64, f64) {
        self.node(v).map(SizeHint::size_hint).unwrap_or((0.0, 0.0))
    }
}

fn empty_snapshot(directed: bool) -> GraphSnapshot {
    Graph::new(GraphOptions {
        multigraph: true,
        directed,
    })
}

fn copy_vertices<V: GraphView + ?Sized>(view: &V, g: &mut GraphSnapshot) -> Vec<String> {
    let vertices = view.vertices();
    for v in &vertices {
        let (width, height) = view.size_hint(v);
        g.set_node(v.clone(), VertexLabel::new(width, height));
    }
    vertices
}

/// Copies `view` into a snapshot. Edges pointing at vertices the view does not enumerate are
/// dropped.
pub fn snapshot<V: GraphView + ?Sized>(view: &V) -> GraphSnapshot {
    let mut g = empty_snapshot(view.is_directed());
    for v in copy_vertices(view, &mut g) {
        for e in view.out_edges(&v) {
            if !g.has_node(&e.v) || !g.has_node(&e.w) {
                tracing::warn!(edge = %e, "dropping edge with a missing endpoint");
                continue;
            }
            g.set_edge_named(e.v, e.w, e.name, None);
        }
    }
    g
}

/// Like [`snapshot`], but a dangling edge is an error.
pub fn try_snapshot<V: GraphView + ?Sized>(view: &V) -> Result<GraphSnapshot> {
    let mut g = empty_snapshot(view.is_directed());
    for v in copy_vertices(view, &mut g) {
        for e in view.out_edges(&v) {
            if !g.has_node(&e.v) || !g.has_node(&e.w) {
                return Err(Error::MissingEndpoint { edge: e });
            }
            g.set_edge_named(e.v, e.w, e.name, None);
        }
    }
    Ok(g)
}

/// Weakly connected component of every vertex, indexed by enumeration position. Components are
/// numbered in the order their first vertex is enumerated.
pub fn component_index(g: &GraphSnapshot) -> Vec<usize> {
    let mut index = vec![0usize; g.node_count()];
    for (c, members) in alg::components(g).iter().enumerate() {
        for id in members {
            if let Some(v) = g.node_position(id) {
                index[v] = c;
            }
        }
    }
    index
}
