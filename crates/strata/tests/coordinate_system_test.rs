use strata::coordinate_system::{adjust_size, undo};
use strata::{EdgeKey, EdgeLayout, LayoutResult, Point, RankDir, VertexLayout};

fn sample() -> LayoutResult {
    let mut result = LayoutResult::default();
    result.vertices.insert(
        "a".to_string(),
        VertexLayout {
            x: 10.0,
            y: 30.0,
            width: 4.0,
            height: 8.0,
            layer: 1,
            order: 0,
        },
    );
    result.edges.insert(
        EdgeKey::simple("a", "a"),
        EdgeLayout {
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            reversed: false,
        },
    );
    result
}

#[test]
fn adjust_size_swaps_for_horizontal_directions() {
    assert_eq!(adjust_size(RankDir::TB, 4.0, 8.0), (4.0, 8.0));
    assert_eq!(adjust_size(RankDir::BT, 4.0, 8.0), (4.0, 8.0));
    assert_eq!(adjust_size(RankDir::LR, 4.0, 8.0), (8.0, 4.0));
    assert_eq!(adjust_size(RankDir::RL, 4.0, 8.0), (8.0, 4.0));
}

#[test]
fn undo_top_to_bottom_is_identity() {
    let mut result = sample();
    undo(&mut result, RankDir::TB);
    assert_eq!(result, sample());
}

#[test]
fn undo_bottom_to_top_mirrors_the_rank_axis() {
    let mut result = sample();
    undo(&mut result, RankDir::BT);
    let v = &result.vertices["a"];
    assert_eq!((v.x, v.y), (10.0, -30.0));
    assert_eq!(
        result.edges[0].points,
        vec![Point::new(1.0, -2.0), Point::new(3.0, -4.0)]
    );
}

#[test]
fn undo_left_to_right_swaps_axes_and_sizes() {
    let mut result = sample();
    undo(&mut result, RankDir::LR);
    let v = &result.vertices["a"];
    assert_eq!((v.x, v.y), (30.0, 10.0));
    assert_eq!((v.width, v.height), (8.0, 4.0));
    assert_eq!(result.edges[0].points[1], Point::new(4.0, 3.0));
}

#[test]
fn undo_right_to_left_mirrors_then_swaps() {
    let mut result = sample();
    undo(&mut result, RankDir::RL);
    let v = &result.vertices["a"];
    assert_eq!((v.x, v.y), (-30.0, 10.0));
    assert_eq!(result.edges[0].points[0], Point::new(-2.0, 1.0));
}

#[test]
fn undo_keeps_layer_and_order() {
    let mut result = sample();
    undo(&mut result, RankDir::RL);
    let v = &result.vertices["a"];
    assert_eq!((v.layer, v.order), (1, 0));
}
