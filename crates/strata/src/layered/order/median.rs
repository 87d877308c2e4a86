/// Median of `positions`; the mean of the two middle values when the count is even.
pub fn median(positions: &mut [usize]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    positions.sort_unstable();
    let mid = positions.len() / 2;
    if positions.len() % 2 == 1 {
        Some(positions[mid] as f64)
    } else {
        Some((positions[mid - 1] + positions[mid]) as f64 / 2.0)
    }
}

/// Reorders `layer` by `keys` (one per node, same index).
///
/// Nodes without a key keep their slot; the others fill the remaining slots sorted by key, with
/// their previous relative order breaking ties.
pub fn sort_by_median<T: Copy>(layer: &[T], keys: &[Option<f64>]) -> Vec<T> {
    debug_assert_eq!(layer.len(), keys.len());

    let mut movable: Vec<(f64, usize)> = keys
        .iter()
        .enumerate()
        .filter_map(|(i, k)| k.map(|k| (k, i)))
        .collect();
    movable.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut sorted = movable.into_iter();
    layer
        .iter()
        .zip(keys)
        .map(|(&node, key)| match key {
            None => node,
            Some(_) => sorted.next().map_or(node, |(_, i)| layer[i]),
        })
        .collect()
}
