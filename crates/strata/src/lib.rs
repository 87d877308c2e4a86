#![forbid(unsafe_code)]

//! Automatic graph layout.
//!
//! `strata` computes layer indices, in-layer order, 2D coordinates and routed edge paths for an
//! arbitrary (possibly cyclic, possibly disconnected) graph. The layered strategy is a
//! Sugiyama-style pipeline:
//!
//! 1. cycle breaking ([`layered::acyclic`])
//! 2. layer assignment ([`layered::rank`])
//! 3. dummy node expansion ([`layered::normalize`])
//! 4. crossing minimization ([`layered::order`])
//! 5. coordinate assignment ([`layered::position`])
//! 6. edge routing ([`layered::route`])
//!
//! [`LayoutManager`] wraps a strategy with the incremental mutation protocol consumed by
//! renderers.

pub use strata_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod coordinate_system;
pub mod error;
pub mod grid;
pub mod layered;
pub mod manager;
pub mod model;
pub mod options;
pub mod route;
pub mod strategy;
pub mod tree;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use graphlib::EdgeKey;
pub use manager::{GraphEvent, LayoutManager, LayoutState};
pub use model::{EdgeLayout, LayoutResult, Point, VertexLayout};
pub use options::{Acyclicer, Algorithm, EdgeStyle, LayoutOptions, RankDir, Ranker};
pub use strategy::{GridLayout, LayeredLayout, Strategy, TreeLayout, layout};
pub use view::{GraphSnapshot, GraphView, SizeHint, VertexLabel, snapshot, try_snapshot};
