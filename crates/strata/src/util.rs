//! Geometry helpers shared by the strategies.
//!
//! Helpers here never panic on degenerate input (zero-size boxes, coincident points); they fall
//! back to a deterministic answer instead.

use crate::model::{Point, VertexLayout};

/// Axis-aligned box given by its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<&VertexLayout> for Rect {
    fn from(v: &VertexLayout) -> Self {
        Self {
            x: v.x,
            y: v.y,
            width: v.width,
            height: v.height,
        }
    }
}

/// Point where the segment from the centre of `rect` towards `point` leaves the box.
pub fn intersect_rect(rect: Rect, point: Point) -> Point {
    let x = rect.x;
    let y = rect.y;

    let dx = point.x - x;
    let dy = point.y - y;
    let mut w = rect.width / 2.0;
    let mut h = rect.height / 2.0;

    if w <= 0.0 && h <= 0.0 {
        return rect.center();
    }
    if dx == 0.0 && dy == 0.0 {
        return Point { x: x + w, y };
    }

    let (sx, sy) = if dy.abs() * w > dx.abs() * h || dx == 0.0 {
        if dy < 0.0 {
            h = -h;
        }
        (h * dx / dy, h)
    } else {
        if dx < 0.0 {
            w = -w;
        }
        (w, w * dy / dx)
    };

    Point {
        x: x + sx,
        y: y + sy,
    }
}
