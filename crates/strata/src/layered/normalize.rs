//! Normalize long segments by inserting dummy nodes.
//!
//! After this pass every segment joins two adjacent layers, so ordering and positioning can
//! treat a long edge as a chain of one-layer hops. The chain's dummies are recorded on its
//! [`Chain`](super::work::Chain) for routing.

use super::work::{NodeId, Segment, WorkGraph};

/// Splits long segments, fills `wg.layers` and returns the number of dummies created.
pub fn run(wg: &mut WorkGraph, layer_count: usize) -> usize {
    let segments = std::mem::take(&mut wg.segments);
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut dummies = 0usize;

    for seg in segments {
        let tail_rank = wg.node(seg.tail).layer;
        let head_rank = wg.node(seg.head).layer;
        if head_rank <= tail_rank + 1 {
            out.push(seg);
            continue;
        }

        let component = wg.node(seg.tail).component;
        let mut prev = seg.tail;
        for r in tail_rank + 1..head_rank {
            let dummy = wg.add_dummy(r, component);
            wg.chains[seg.chain].dummies.push(dummy);
            out.push(Segment {
                tail: prev,
                head: dummy,
                ..seg
            });
            prev = dummy;
            dummies += 1;
        }
        out.push(Segment { tail: prev, ..seg });
    }

    wg.segments = out;
    wg.reindex();
    wg.layers = layers_of(wg, layer_count);
    tracing::trace!(dummies, "normalize");
    dummies
}

/// Nodes grouped by layer, each group in node-id order.
fn layers_of(wg: &WorkGraph, layer_count: usize) -> Vec<Vec<NodeId>> {
    let mut layers: Vec<Vec<NodeId>> = vec![Vec::new(); layer_count];
    for v in wg.node_ids() {
        let layer = wg.node(v).layer;
        if layer >= layers.len() {
            layers.resize_with(layer + 1, Vec::new);
        }
        layers[layer].push(v);
    }
    layers
}
