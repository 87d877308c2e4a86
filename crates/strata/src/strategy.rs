//! Layout strategies.
//!
//! A strategy has exactly one capability: turn a snapshot into a [`LayoutResult`]. The built-in
//! ones are picked through [`Algorithm`]; callers can hand [`crate::LayoutManager`] their own.

use crate::model::LayoutResult;
use crate::options::{Algorithm, LayoutOptions};
use crate::view::GraphSnapshot;
use crate::{grid, layered, tree};

pub trait Strategy {
    fn compute(&self, graph: &GraphSnapshot) -> LayoutResult;
}

// Blanket implementation for closures
impl<F> Strategy for F
where
    F: Fn(&GraphSnapshot) -> LayoutResult,
{
    fn compute(&self, graph: &GraphSnapshot) -> LayoutResult {
        self(graph)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayeredLayout {
    pub options: LayoutOptions,
}

impl Strategy for LayeredLayout {
    fn compute(&self, graph: &GraphSnapshot) -> LayoutResult {
        layered::run(graph, &self.options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    pub options: LayoutOptions,
}

impl Strategy for TreeLayout {
    fn compute(&self, graph: &GraphSnapshot) -> LayoutResult {
        tree::run(graph, &self.options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    pub options: LayoutOptions,
}

impl Strategy for GridLayout {
    fn compute(&self, graph: &GraphSnapshot) -> LayoutResult {
        grid::run(graph, &self.options)
    }
}

impl LayoutOptions {
    /// The built-in strategy selected by `algorithm`, configured with these options.
    pub fn strategy(&self) -> Box<dyn Strategy + Send + Sync> {
        let options = self.clone();
        match self.algorithm {
            Algorithm::Layered => Box::new(LayeredLayout { options }),
            Algorithm::Tree => Box::new(TreeLayout { options }),
            Algorithm::Grid => Box::new(GridLayout { options }),
        }
    }
}

/// One-shot layout of `graph` with the strategy `options.algorithm` names.
pub fn layout(graph: &GraphSnapshot, options: &LayoutOptions) -> LayoutResult {
    match options.algorithm {
        Algorithm::Layered => layered::run(graph, options),
        Algorithm::Tree => tree::run(graph, options),
        Algorithm::Grid => grid::run(graph, options),
    }
}
