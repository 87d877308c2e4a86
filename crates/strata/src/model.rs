//! Layout result types and geometry primitives.
//!
//! These are plain `Clone` data so a published result can be shared as an immutable snapshot.

use crate::graphlib::EdgeKey;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of one vertex. `x`/`y` is the centre of its box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layer: usize,
    pub order: usize,
}

impl VertexLayout {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `p` lies inside the box, borders included (with `eps` slack).
    pub fn contains(&self, p: Point, eps: f64) -> bool {
        (p.x - self.x).abs() <= self.width / 2.0 + eps
            && (p.y - self.y).abs() <= self.height / 2.0 + eps
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeLayout {
    /// Control points from the edge's true source to its true target.
    pub points: Vec<Point>,
    /// Whether the layout had to lay this edge out against its direction.
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub vertices: IndexMap<String, VertexLayout>,
    pub edges: IndexMap<EdgeKey, EdgeLayout>,
    pub width: f64,
    pub height: f64,
    /// Edge crossings between adjacent layers after ordering (layered strategy only).
    pub crossings: usize,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, id: &str) -> Option<&VertexLayout> {
        self.vertices.get(id)
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.vertices.get(id).map(VertexLayout::center)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&EdgeLayout> {
        self.edges.get(key)
    }

    pub fn path(&self, key: &EdgeKey) -> Option<&[Point]> {
        self.edges.get(key).map(|e| e.points.as_slice())
    }

    /// Translates everything so the drawing's top-left bound sits at `(margin, margin)` and
    /// records the overall size.
    pub(crate) fn finish(&mut self, margin: f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for v in self.vertices.values() {
            min_x = min_x.min(v.x - v.width / 2.0);
            max_x = max_x.max(v.x + v.width / 2.0);
            min_y = min_y.min(v.y - v.height / 2.0);
            max_y = max_y.max(v.y + v.height / 2.0);
        }
        for e in self.edges.values() {
            for p in &e.points {
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }

        if !min_x.is_finite() || !min_y.is_finite() {
            self.width = 0.0;
            self.height = 0.0;
            return;
        }

        let dx = margin - min_x;
        let dy = margin - min_y;
        for v in self.vertices.values_mut() {
            v.x += dx;
            v.y += dy;
        }
        for e in self.edges.values_mut() {
            for p in &mut e.points {
                p.x += dx;
                p.y += dy;
            }
        }

        self.width = max_x - min_x + 2.0 * margin;
        self.height = max_y - min_y + 2.0 * margin;
    }
}
