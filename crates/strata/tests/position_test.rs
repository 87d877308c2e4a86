use strata::graphlib::GraphOptions;
use strata::{GraphSnapshot, LayoutOptions, LayoutResult, VertexLabel, layout};

fn new_graph() -> GraphSnapshot {
    GraphSnapshot::new(GraphOptions {
        multigraph: true,
        directed: true,
    })
}

fn add(g: &mut GraphSnapshot, id: &str, width: f64, height: f64) {
    g.set_node(id, VertexLabel::new(width, height));
}

fn assert_no_overlap(result: &LayoutResult) {
    let layer_count = result.vertices.values().map(|v| v.layer + 1).max().unwrap_or(0);
    for layer in 0..layer_count {
        let mut row: Vec<_> = result.vertices.values().filter(|v| v.layer == layer).collect();
        row.sort_by_key(|v| v.order);
        for pair in row.windows(2) {
            let right_of_left = pair[0].x + pair[0].width / 2.0;
            let left_of_right = pair[1].x - pair[1].width / 2.0;
            assert!(
                right_of_left <= left_of_right + 1e-9,
                "layer {layer}: {:?} overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn position_stacks_layers_and_centres_them() {
    let mut g = new_graph();
    add(&mut g, "a", 100.0, 40.0);
    add(&mut g, "b", 60.0, 20.0);
    add(&mut g, "c", 60.0, 20.0);
    g.set_edge("a", "b");
    g.set_edge("a", "c");

    let result = layout(&g, &LayoutOptions::default());

    let a = result.vertex("a").copied().unwrap_or_default();
    let b = result.vertex("b").copied().unwrap_or_default();
    let c = result.vertex("c").copied().unwrap_or_default();
    assert_eq!((a.x, a.y), (85.0, 20.0));
    assert_eq!((b.x, b.y), (30.0, 100.0));
    assert_eq!((c.x, c.y), (140.0, 100.0));
    assert_eq!((result.width, result.height), (170.0, 110.0));
}

#[test]
fn position_without_centring_packs_layers_from_the_left() {
    let mut g = new_graph();
    add(&mut g, "a", 100.0, 40.0);
    add(&mut g, "b", 60.0, 20.0);
    add(&mut g, "c", 60.0, 20.0);
    g.set_edge("a", "b");
    g.set_edge("a", "c");

    let options = LayoutOptions {
        center_layers: false,
        ..LayoutOptions::default()
    };
    let result = layout(&g, &options);
    assert_eq!(result.position("a").map(|p| p.x), Some(50.0));
    assert_eq!(result.position("b").map(|p| p.x), Some(30.0));
}

#[test]
fn position_uses_the_tallest_vertex_of_each_layer() {
    let mut g = new_graph();
    add(&mut g, "a", 10.0, 10.0);
    add(&mut g, "b", 10.0, 80.0);
    add(&mut g, "c", 10.0, 10.0);
    g.set_edge("a", "c");

    let result = layout(&g, &LayoutOptions::default());
    // Layer 0 is 80 tall, so layer 1 starts at 80 + 50.
    assert_eq!(result.position("a").map(|p| p.y), Some(40.0));
    assert_eq!(result.position("b").map(|p| p.y), Some(40.0));
    assert_eq!(result.position("c").map(|p| p.y), Some(135.0));
}

#[test]
fn position_reserves_room_for_self_loops() {
    let mut g = new_graph();
    add(&mut g, "a", 40.0, 40.0);
    add(&mut g, "b", 40.0, 40.0);
    g.set_edge("a", "a");

    let result = layout(&g, &LayoutOptions::default());
    let a = result.position("a").unwrap_or_default();
    let b = result.position("b").unwrap_or_default();
    // half width + one loop + node_sep + half width
    assert_eq!(b.x - a.x, 20.0 + 20.0 + 50.0 + 20.0);
}

#[test]
fn position_gives_dummy_nodes_their_own_width() {
    let mut g = new_graph();
    for id in ["a", "b", "c", "x"] {
        add(&mut g, id, 20.0, 20.0);
    }
    g.set_path(&["a", "b", "c"]);
    g.set_edge("a", "c");
    g.set_edge("x", "b");

    let result = layout(&g, &LayoutOptions::default());
    // Layer 1 holds b and the dummy of a -> c, kept apart by the mean of both separations.
    let path = result
        .path(&strata::EdgeKey::simple("a", "c"))
        .map(<[_]>::to_vec)
        .unwrap_or_default();
    assert_eq!(path.len(), 3);
    let b = result.position("b").unwrap_or_default();
    assert!((path[1].x - b.x).abs() >= 10.0 + 35.0 - 1e-9);
    assert_no_overlap(&result);
}

#[test]
fn position_never_overlaps_vertices_in_a_layer() {
    let mut g = new_graph();
    let ids = ["a", "b", "c", "d", "e", "f", "g", "h"];
    for (i, id) in ids.iter().enumerate() {
        add(&mut g, id, 20.0 + 10.0 * i as f64, 15.0);
    }
    for (v, w) in [
        ("a", "c"),
        ("a", "d"),
        ("b", "d"),
        ("b", "e"),
        ("c", "f"),
        ("d", "f"),
        ("d", "g"),
        ("e", "h"),
        ("a", "h"),
        ("h", "a"),
    ] {
        g.set_edge(v, w);
    }

    for balance_iterations in [0, 1, 5] {
        let options = LayoutOptions {
            balance_iterations,
            ..LayoutOptions::default()
        };
        assert_no_overlap(&layout(&g, &options));
    }
}

#[test]
fn balancing_straightens_a_simple_chain() {
    let mut g = new_graph();
    add(&mut g, "a", 30.0, 10.0);
    add(&mut g, "b", 90.0, 10.0);
    add(&mut g, "c", 30.0, 10.0);
    g.set_path(&["a", "b", "c"]);

    let options = LayoutOptions {
        balance_iterations: 3,
        ..LayoutOptions::default()
    };
    let result = layout(&g, &options);
    let xs: Vec<f64> = ["a", "b", "c"]
        .iter()
        .filter_map(|id| result.position(id))
        .map(|p| p.x)
        .collect();
    assert_eq!(xs, vec![45.0, 45.0, 45.0]);
}

fn horizontal_span(result: &LayoutResult, ids: &[&str]) -> (f64, f64) {
    ids.iter()
        .filter_map(|id| result.vertex(id))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v.x - v.width / 2.0), hi.max(v.x + v.width / 2.0))
        })
}

fn assert_disjoint(a: (f64, f64), b: (f64, f64)) {
    assert!(a.1 <= b.0 || b.1 <= a.0, "{a:?} overlaps {b:?}");
}

#[test]
fn position_keeps_an_isolated_vertex_out_of_a_joined_pair() {
    let mut g = new_graph();
    for id in ["a", "b", "c", "x"] {
        add(&mut g, id, 40.0, 20.0);
    }
    g.set_edge("a", "x");
    g.set_edge("c", "x");

    let result = layout(&g, &LayoutOptions::default());

    let b = result.vertex("b").copied().unwrap_or_default();
    assert_eq!((b.layer, b.order), (0, 2));
    assert_disjoint(
        horizontal_span(&result, &["a", "c", "x"]),
        horizontal_span(&result, &["b"]),
    );
    assert_no_overlap(&result);
}

#[test]
fn position_gives_every_component_its_own_columns() {
    let mut g = new_graph();
    add(&mut g, "a1", 30.0, 10.0);
    add(&mut g, "b1", 30.0, 10.0);
    add(&mut g, "a2", 80.0, 10.0);
    add(&mut g, "b2", 20.0, 10.0);
    add(&mut g, "c2", 20.0, 10.0);
    add(&mut g, "a3", 50.0, 10.0);
    add(&mut g, "b3", 50.0, 10.0);
    add(&mut g, "c3", 50.0, 10.0);
    g.set_path(&["a1", "b1"]);
    g.set_edge("a2", "b2");
    g.set_edge("a2", "c2");
    g.set_path(&["a3", "b3", "c3"]);
    g.set_edge("a3", "c3");

    for center_layers in [true, false] {
        let options = LayoutOptions {
            center_layers,
            ..LayoutOptions::default()
        };
        let result = layout(&g, &options);
        let spans = [
            horizontal_span(&result, &["a1", "b1"]),
            horizontal_span(&result, &["a2", "b2", "c2"]),
            horizontal_span(&result, &["a3", "b3", "c3"]),
        ];
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                assert_disjoint(*a, *b);
            }
        }
        assert_no_overlap(&result);
    }
}

#[test]
fn stacked_self_loops_stay_clear_of_the_next_layer() {
    let mut g = new_graph();
    add(&mut g, "a", 40.0, 0.0);
    add(&mut g, "b", 40.0, 20.0);
    for i in 0..6 {
        g.set_edge_named("a", "a", Some(format!("loop{i}")), None);
    }
    g.set_edge("a", "b");

    let result = layout(&g, &LayoutOptions::default());

    let b = result.vertex("b").copied().unwrap_or_default();
    let top_of_b = b.y - b.height / 2.0;
    let loops: Vec<_> = result
        .edges
        .iter()
        .filter(|(key, _)| key.v == "a" && key.w == "a")
        .collect();
    assert_eq!(loops.len(), 6);
    for (key, edge) in loops {
        for p in &edge.points {
            assert!(p.y < top_of_b, "{key:?} reaches {p:?} below the top of b");
        }
    }
}
