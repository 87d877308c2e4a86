use crate::layered::work::{NodeId, WorkGraph};

/// Initial order: a depth-first walk from every node, component by component, shallowest layers
/// first and enumeration order within a layer. Each component therefore occupies one contiguous
/// run per layer, and the runs follow component order.
pub fn init_order(wg: &WorkGraph) -> Vec<Vec<NodeId>> {
    let Some(max_layer) = wg.max_layer() else {
        return Vec::new();
    };
    let mut layers: Vec<Vec<NodeId>> = vec![Vec::new(); max_layer + 1];
    let mut visited = vec![false; wg.nodes.len()];

    let mut roots: Vec<NodeId> = wg.node_ids().collect();
    roots.sort_by_key(|&v| (wg.node(v).component, wg.node(v).layer, v));

    let mut stack: Vec<NodeId> = Vec::new();
    for root in roots {
        stack.push(root);
        while let Some(v) = stack.pop() {
            if visited[v.0] {
                continue;
            }
            visited[v.0] = true;
            layers[wg.node(v).layer].push(v);

            // Reversed so the first successor is visited first.
            let succ: Vec<NodeId> = wg.successors(v).collect();
            stack.extend(succ.into_iter().rev().filter(|w| !visited[w.0]));
        }
    }

    layers
}
