//! Graph container APIs used by `strata`.
//!
//! The container keeps vertices and edges in insertion order, which is what makes layouts
//! deterministic: every algorithm downstream enumerates in this order.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions, alg};
