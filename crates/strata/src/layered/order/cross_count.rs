use crate::layered::work::{NodeId, WorkGraph};

/// Total crossings between every pair of adjacent layers.
pub fn cross_count(wg: &WorkGraph, layering: &[Vec<NodeId>]) -> usize {
    let mut pos = vec![0usize; wg.nodes.len()];
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            pos[v.0] = i;
        }
    }

    layering
        .windows(2)
        .map(|pair| two_layer_cross_count(wg, &pos, &pair[0], &pair[1]))
        .sum()
}

/// Accumulator-tree count (Barth, Jünger & Mutzel): segments are visited sorted by north end
/// and then south end, and each one adds the segments already seen that end further east.
fn two_layer_cross_count(
    wg: &WorkGraph,
    pos: &[usize],
    north: &[NodeId],
    south: &[NodeId],
) -> usize {
    if south.is_empty() {
        return 0;
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = wg.successors(v).map(|w| pos[w.0]).collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for entry in south_entries {
        let mut index = entry + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}
