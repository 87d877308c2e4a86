use crate::layered::work::{NodeId, WorkGraph};

/// Crossings among the segments of `u` and `v` towards one neighbouring layer when `u` sits left
/// of `v`, given the slots their segments end at.
fn pair_crossings(u_ends: &[usize], v_ends: &[usize]) -> usize {
    u_ends
        .iter()
        .map(|&a| v_ends.iter().filter(|&&b| a > b).count())
        .sum()
}

fn ends(wg: &WorkGraph, v: NodeId, upward: bool) -> Vec<usize> {
    if upward {
        wg.predecessors(v).map(|u| wg.node(u).order).collect()
    } else {
        wg.successors(v).map(|w| wg.node(w).order).collect()
    }
}

/// Swaps adjacent nodes while that strictly lowers the crossings with both neighbouring layers.
/// Returns the number of swaps performed. `wg` orders must match `layers` on entry.
pub fn transpose(wg: &mut WorkGraph, layers: &mut [Vec<NodeId>]) -> usize {
    let mut swaps = 0usize;
    // Every accepted swap lowers the total, so this bound is only a backstop.
    let max_passes = layers.iter().map(Vec::len).sum::<usize>().max(1);

    for _ in 0..max_passes {
        let mut improved = false;
        for layer in layers.iter_mut() {
            for i in 0..layer.len().saturating_sub(1) {
                let (u, v) = (layer[i], layer[i + 1]);
                let (u_up, v_up) = (ends(wg, u, true), ends(wg, v, true));
                let (u_down, v_down) = (ends(wg, u, false), ends(wg, v, false));

                let kept = pair_crossings(&u_up, &v_up) + pair_crossings(&u_down, &v_down);
                let swapped = pair_crossings(&v_up, &u_up) + pair_crossings(&v_down, &u_down);
                if swapped < kept {
                    layer.swap(i, i + 1);
                    wg.node_mut(u).order = i + 1;
                    wg.node_mut(v).order = i;
                    swaps += 1;
                    improved = true;
                }
            }
        }
        if !improved {
            break;
        }
    }

    swaps
}
