//! The layered (Sugiyama-style) strategy.
//!
//! Each run builds a fresh [`work::WorkGraph`] from the snapshot, pushes it through the phases
//! below in order and assembles a [`LayoutResult`]. Nothing survives between runs.

pub mod acyclic;
pub mod greedy_fas;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;
pub mod route;
pub mod work;

use crate::coordinate_system;
use crate::model::LayoutResult;
use crate::options::LayoutOptions;
use crate::view::GraphSnapshot;

pub fn run(g: &GraphSnapshot, options: &LayoutOptions) -> LayoutResult {
    let mut wg = work::WorkGraph::build(g, options.rankdir);

    acyclic::run(&mut wg, options.acyclicer);
    let layer_count = rank::run(&mut wg, options.ranker);
    normalize::run(&mut wg, layer_count);
    let crossings = order::order(
        &mut wg,
        order::OrderOptions {
            max_sweeps: options.max_sweeps,
            transpose: options.transpose,
        },
    );
    position::position(
        &mut wg,
        &position::PositionOptions {
            node_sep: options.node_sep,
            rank_sep: options.rank_sep,
            edge_sep: options.edge_sep,
            dummy_width: options.dummy_width,
            self_loop_size: options.self_loop_size,
            center_layers: options.center_layers,
            balance_iterations: options.balance_iterations,
        },
    );

    let mut result = route::route(
        &wg,
        &route::RouteOptions {
            rank_sep: options.rank_sep,
            self_loop_size: options.self_loop_size,
            edge_style: options.edge_style,
        },
    );
    result.crossings = crossings;
    coordinate_system::undo(&mut result, options.rankdir);
    result.finish(options.margin);
    result
}
