//! The working model of one layered run.
//!
//! Nodes and segments live in flat arenas addressed by small integer handles. The model is built
//! from a [`GraphSnapshot`] at the start of a run and dropped once the result is published; it
//! never refers back to the caller's graph except through vertex ids.

use crate::coordinate_system;
use crate::graphlib::EdgeKey;
use crate::options::RankDir;
use crate::view::{GraphSnapshot, component_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Vertex,
    Dummy,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub width: f64,
    pub height: f64,
    /// Self-loops hanging off this vertex; each reserves room on its right.
    pub self_loops: usize,
    /// Weakly connected component; every layer keeps a component's nodes in one contiguous run.
    pub component: usize,
    pub layer: usize,
    pub order: usize,
    pub x: f64,
    pub y: f64,
}

impl Node {
    fn new(kind: NodeKind, width: f64, height: f64) -> Self {
        Self {
            kind,
            width,
            height,
            self_loops: 0,
            component: 0,
            layer: 0,
            order: 0,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn is_dummy(&self) -> bool {
        self.kind == NodeKind::Dummy
    }
}

/// A working edge. After cycle breaking `tail -> head` always points down the layering.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub tail: NodeId,
    pub head: NodeId,
    /// Index of the [`Chain`] this segment belongs to.
    pub chain: usize,
    pub reversed: bool,
}

/// One original (non-loop) edge and the dummy nodes it was expanded into.
#[derive(Debug, Clone)]
pub struct Chain {
    pub key: EdgeKey,
    pub tail: NodeId,
    pub head: NodeId,
    /// Laid out against the original direction (cycle breaking or undirected orientation).
    pub reversed: bool,
    /// Dummies from `tail` to `head`, one per intermediate layer.
    pub dummies: Vec<NodeId>,
}

/// How an original edge is represented, in snapshot edge order.
#[derive(Debug, Clone, Copy)]
pub enum EdgeSlot {
    Chain(usize),
    SelfLoop { node: NodeId, nth: usize },
}

#[derive(Debug, Default)]
pub struct WorkGraph {
    pub nodes: Vec<Node>,
    pub segments: Vec<Segment>,
    pub chains: Vec<Chain>,
    pub slots: Vec<(EdgeKey, EdgeSlot)>,
    pub layers: Vec<Vec<NodeId>>,
    component_count: usize,
    vertex_ids: Vec<String>,
    out: Vec<Vec<usize>>,
    in_: Vec<Vec<usize>>,
}

impl WorkGraph {
    /// Builds the model: one node per vertex (in enumeration order), one segment per non-loop
    /// edge. Undirected edges are oriented from the earlier-enumerated endpoint.
    pub fn build(g: &GraphSnapshot, rankdir: RankDir) -> Self {
        let mut wg = WorkGraph::default();
        let components = component_index(g);
        wg.component_count = components.iter().map(|&c| c + 1).max().unwrap_or(0);

        for (id, label) in g.nodes().filter_map(|id| Some((id, g.node(id)?))) {
            let (width, height) =
                coordinate_system::adjust_size(rankdir, label.width, label.height);
            let mut node = Node::new(NodeKind::Vertex, width, height);
            node.component = components.get(wg.nodes.len()).copied().unwrap_or(0);
            wg.nodes.push(node);
            wg.vertex_ids.push(id.to_string());
        }

        for key in g.edges() {
            let (Some(v), Some(w)) = (g.node_position(&key.v), g.node_position(&key.w)) else {
                continue;
            };
            if v == w {
                let nth = wg.nodes[v].self_loops;
                wg.nodes[v].self_loops += 1;
                wg.slots.push((
                    key.clone(),
                    EdgeSlot::SelfLoop {
                        node: NodeId(v),
                        nth,
                    },
                ));
                continue;
            }

            let (tail, head, reversed) = if g.is_directed() || v < w {
                (v, w, false)
            } else {
                (w, v, true)
            };
            let chain = wg.chains.len();
            wg.chains.push(Chain {
                key: key.clone(),
                tail: NodeId(tail),
                head: NodeId(head),
                reversed,
                dummies: Vec::new(),
            });
            wg.segments.push(Segment {
                tail: NodeId(tail),
                head: NodeId(head),
                chain,
                reversed,
            });
            wg.slots.push((key.clone(), EdgeSlot::Chain(chain)));
        }

        wg.reindex();
        wg
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Vertex nodes paired with their ids, in enumeration order.
    pub fn vertices(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.vertex_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (NodeId(i), id.as_str()))
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn add_dummy(&mut self, layer: usize, component: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(NodeKind::Dummy, 0.0, 0.0);
        node.layer = layer;
        node.component = component;
        self.nodes.push(node);
        id
    }

    /// Rebuilds adjacency after segments or nodes changed.
    pub fn reindex(&mut self) {
        self.out = vec![Vec::new(); self.nodes.len()];
        self.in_ = vec![Vec::new(); self.nodes.len()];
        for (ix, s) in self.segments.iter().enumerate() {
            self.out[s.tail.0].push(ix);
            self.in_[s.head.0].push(ix);
        }
    }

    pub fn out_segments(&self, n: NodeId) -> &[usize] {
        &self.out[n.0]
    }

    pub fn in_segments(&self, n: NodeId) -> &[usize] {
        &self.in_[n.0]
    }

    pub fn successors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out[n.0].iter().map(|&s| self.segments[s].head)
    }

    pub fn predecessors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.in_[n.0].iter().map(|&s| self.segments[s].tail)
    }

    /// Flips a segment (and its chain) in place.
    pub fn reverse_segment(&mut self, ix: usize) {
        let s = &mut self.segments[ix];
        (s.tail, s.head) = (s.head, s.tail);
        s.reversed = !s.reversed;
        let chain = &mut self.chains[s.chain];
        (chain.tail, chain.head) = (chain.head, chain.tail);
        chain.reversed = !chain.reversed;
    }

    pub fn max_layer(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.layer).max()
    }

    /// Writes each node's position within `layers` into `order`.
    pub fn assign_order(&mut self, layers: &[Vec<NodeId>]) {
        for layer in layers {
            for (i, &n) in layer.iter().enumerate() {
                self.nodes[n.0].order = i;
            }
        }
    }
}
