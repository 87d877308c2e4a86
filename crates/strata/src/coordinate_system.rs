//! Coordinate system adjustment helpers.
//!
//! Strategies assume a top-to-bottom coordinate system. For left-to-right / right-to-left
//! layouts vertex sizes are swapped on the way in, and the finished result has its axes swapped
//! back; bottom-to-top and right-to-left mirror the rank axis.

use crate::model::LayoutResult;
use crate::options::RankDir;

/// `(width, height)` as seen by a top-to-bottom pipeline.
pub fn adjust_size(rankdir: RankDir, width: f64, height: f64) -> (f64, f64) {
    match rankdir {
        RankDir::LR | RankDir::RL => (height, width),
        RankDir::TB | RankDir::BT => (width, height),
    }
}

pub fn undo(result: &mut LayoutResult, rankdir: RankDir) {
    match rankdir {
        RankDir::BT | RankDir::RL => reverse_y(result),
        RankDir::TB | RankDir::LR => {}
    }

    match rankdir {
        RankDir::LR | RankDir::RL => swap_xy(result),
        RankDir::TB | RankDir::BT => {}
    }
}

fn reverse_y(result: &mut LayoutResult) {
    for v in result.vertices.values_mut() {
        v.y = -v.y;
    }
    for e in result.edges.values_mut() {
        for p in &mut e.points {
            p.y = -p.y;
        }
    }
}

fn swap_xy(result: &mut LayoutResult) {
    for v in result.vertices.values_mut() {
        (v.x, v.y) = (v.y, v.x);
        (v.width, v.height) = (v.height, v.width);
    }
    for e in result.edges.values_mut() {
        for p in &mut e.points {
            (p.x, p.y) = (p.y, p.x);
        }
    }
}
