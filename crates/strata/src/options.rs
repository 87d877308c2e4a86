//! Layout configuration.
//!
//! Every knob has a default, so a partial JSON document (or `LayoutOptions::default()`) is a
//! complete configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Layered,
    Tree,
    Grid,
}

/// Direction layers advance in. The pipeline always works top-to-bottom and maps the result
/// into the requested direction at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Acyclicer {
    /// Reverse the back edges found by a depth-first search.
    #[default]
    Dfs,
    /// Reverse a greedy feedback arc set (Eades, Lin & Smyth).
    Greedy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ranker {
    #[default]
    LongestPath,
    /// Longest path, then pull vertices down next to their nearest successor.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeStyle {
    #[default]
    Polyline,
    Orthogonal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOptions {
    pub algorithm: Algorithm,
    pub rankdir: RankDir,
    /// Horizontal gap between neighbouring vertices of a layer.
    pub node_sep: f64,
    /// Gap between the tallest vertices of two consecutive layers.
    pub rank_sep: f64,
    /// Horizontal gap contributed by a dummy node.
    pub edge_sep: f64,
    pub margin: f64,
    /// Width a dummy node occupies for spacing purposes.
    pub dummy_width: f64,
    /// Horizontal room reserved per self-loop on the right of its vertex.
    pub self_loop_size: f64,
    pub acyclicer: Acyclicer,
    pub ranker: Ranker,
    /// Upper bound on down+up median sweeps.
    pub max_sweeps: usize,
    pub transpose: bool,
    pub center_layers: bool,
    pub balance_iterations: usize,
    pub edge_style: EdgeStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Layered,
            rankdir: RankDir::TB,
            node_sep: 50.0,
            rank_sep: 50.0,
            edge_sep: 20.0,
            margin: 0.0,
            dummy_width: 10.0,
            self_loop_size: 20.0,
            acyclicer: Acyclicer::Dfs,
            ranker: Ranker::LongestPath,
            max_sweeps: 4,
            transpose: true,
            center_layers: true,
            balance_iterations: 0,
            edge_style: EdgeStyle::Polyline,
        }
    }
}

impl LayoutOptions {
    /// Parses and validates a JSON options document. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        let spacings = [
            ("nodeSep", self.node_sep),
            ("rankSep", self.rank_sep),
            ("edgeSep", self.edge_sep),
            ("margin", self.margin),
            ("selfLoopSize", self.self_loop_size),
        ];
        for (name, value) in spacings {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption {
                    name,
                    reason: format!("expected a finite, non-negative value, got {value}"),
                });
            }
        }
        if !self.dummy_width.is_finite() || self.dummy_width <= 0.0 {
            return Err(Error::InvalidOption {
                name: "dummyWidth",
                reason: format!("expected a finite, positive value, got {}", self.dummy_width),
            });
        }
        Ok(())
    }
}
