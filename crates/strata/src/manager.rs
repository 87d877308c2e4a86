//! The Layout Manager: a retained graph snapshot, a strategy and the latest published result.
//!
//! Mutation hooks only touch the snapshot and the state; nothing is recomputed until
//! [`LayoutManager::layout`] runs. A result, once published, is never mutated: the next run
//! replaces the `Arc`, so a reader holding an older one keeps a consistent picture.

use crate::error::Result;
use crate::graphlib::{EdgeKey, Graph, GraphOptions};
use crate::model::{LayoutResult, Point};
use crate::options::LayoutOptions;
use crate::strategy::Strategy;
use crate::view::{GraphSnapshot, GraphView, VertexLabel, snapshot};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    /// No layout has completed yet.
    #[default]
    Uninitialized,
    /// The published result matches the snapshot.
    LaidOut,
    /// The snapshot changed since the last layout.
    Dirty,
}

/// A Graph View notification, forwarded to the matching mutation hook by
/// [`LayoutManager::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    VertexAdded { id: String, width: f64, height: f64 },
    VertexRemoved(String),
    EdgeAdded(EdgeKey),
    EdgeRemoved(EdgeKey),
}

pub struct LayoutManager {
    strategy: Box<dyn Strategy + Send + Sync>,
    graph: GraphSnapshot,
    state: LayoutState,
    result: Option<Arc<LayoutResult>>,
}

impl std::fmt::Debug for LayoutManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutManager")
            .field("graph", &self.graph)
            .field("state", &self.state)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::with_strategy(LayoutOptions::default().strategy())
    }
}

impl LayoutManager {
    /// A manager running the built-in strategy `options.algorithm` names.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_strategy(options.strategy()))
    }

    pub fn with_strategy(strategy: Box<dyn Strategy + Send + Sync>) -> Self {
        Self {
            strategy,
            graph: Graph::new(GraphOptions {
                multigraph: true,
                directed: true,
            }),
            state: LayoutState::Uninitialized,
            result: None,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// The retained snapshot the next layout will run against.
    pub fn graph(&self) -> &GraphSnapshot {
        &self.graph
    }

    /// Replaces the retained snapshot with a copy of `view`.
    pub fn sync<V: GraphView + ?Sized>(&mut self, view: &V) {
        self.graph = snapshot(view);
        self.mark_dirty();
    }

    pub fn add_vertex(&mut self, id: impl Into<String>, width: f64, height: f64) {
        let id = id.into();
        let label = VertexLabel::new(width, height);
        if self.graph.node(&id) == Some(&label) {
            return;
        }
        self.graph.set_node(id, label);
        self.mark_dirty();
    }

    /// Adds an edge; missing endpoints are added as zero-size vertices.
    pub fn add_edge(&mut self, key: EdgeKey) {
        if self.graph.has_edge_key(&key) {
            return;
        }
        self.graph.set_edge_named(key.v, key.w, key.name, None);
        self.mark_dirty();
    }

    /// Removes a vertex together with every edge that references it.
    pub fn remove_vertex(&mut self, id: &str) {
        if self.graph.remove_node(id) {
            self.mark_dirty();
        }
    }

    pub fn remove_edge(&mut self, key: &EdgeKey) {
        if self.graph.remove_edge_key(key) {
            self.mark_dirty();
        }
    }

    pub fn apply(&mut self, event: GraphEvent) {
        match event {
            GraphEvent::VertexAdded { id, width, height } => self.add_vertex(id, width, height),
            GraphEvent::VertexRemoved(id) => self.remove_vertex(&id),
            GraphEvent::EdgeAdded(key) => self.add_edge(key),
            GraphEvent::EdgeRemoved(key) => self.remove_edge(&key),
        }
    }

    fn mark_dirty(&mut self) {
        if self.state == LayoutState::LaidOut {
            self.state = LayoutState::Dirty;
        }
    }

    /// Runs the strategy against the snapshot and publishes the result. While the manager is
    /// laid out the published result is returned as is.
    pub fn layout(&mut self) -> Arc<LayoutResult> {
        if self.state == LayoutState::LaidOut {
            if let Some(result) = &self.result {
                tracing::debug!("layout is up to date, serving cached result");
                return Arc::clone(result);
            }
        }

        let result = Arc::new(self.strategy.compute(&self.graph));
        tracing::debug!(
            vertices = result.vertices.len(),
            edges = result.edges.len(),
            crossings = result.crossings,
            "layout"
        );
        self.result = Some(Arc::clone(&result));
        self.state = LayoutState::LaidOut;
        result
    }

    /// Whether at least one layout has been published.
    pub fn is_initialized(&self) -> bool {
        self.result.is_some()
    }

    /// The latest published result, if any.
    pub fn result(&self) -> Option<Arc<LayoutResult>> {
        self.result.clone()
    }

    /// Path of `key` in the latest result; empty when the edge is unknown or no layout ran yet.
    pub fn route_edge(&self, key: &EdgeKey) -> Vec<Point> {
        self.result
            .as_ref()
            .and_then(|r| r.path(key))
            .map(<[Point]>::to_vec)
            .unwrap_or_default()
    }

    /// Centre of `id` in the latest result.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.result.as_ref().and_then(|r| r.position(id))
    }
}
