use strata::graphlib::GraphOptions;
use strata::layered::work::{NodeKind, WorkGraph};
use strata::layered::{acyclic, normalize, rank};
use strata::{Acyclicer, EdgeKey, GraphSnapshot, RankDir, Ranker, VertexLabel};

fn new_graph() -> GraphSnapshot {
    let mut g = GraphSnapshot::new(GraphOptions {
        multigraph: true,
        directed: true,
    });
    g.set_default_node_label(|| VertexLabel::new(10.0, 10.0));
    g
}

fn normalized(g: &GraphSnapshot) -> (WorkGraph, usize) {
    let mut wg = WorkGraph::build(g, RankDir::TB);
    acyclic::run(&mut wg, Acyclicer::Dfs);
    let layers = rank::run(&mut wg, Ranker::LongestPath);
    let dummies = normalize::run(&mut wg, layers);
    (wg, dummies)
}

fn chain<'a>(wg: &'a WorkGraph, key: &EdgeKey) -> &'a strata::layered::work::Chain {
    wg.chains
        .iter()
        .find(|c| &c.key == key)
        .unwrap_or_else(|| panic!("missing chain {key}"))
}

#[test]
fn normalize_leaves_short_segments_alone() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);

    let (wg, dummies) = normalized(&g);
    assert_eq!(dummies, 0);
    assert_eq!(wg.segments.len(), 2);
    assert_eq!(wg.layers.len(), 3);
}

#[test]
fn normalize_splits_a_long_segment_into_a_dummy_chain() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);
    g.set_edge("a", "c");

    let (wg, dummies) = normalized(&g);
    assert_eq!(dummies, 1);
    assert_eq!(wg.segments.len(), 4);

    let long = chain(&wg, &EdgeKey::simple("a", "c"));
    assert_eq!(long.dummies.len(), 1);
    let dummy = wg.node(long.dummies[0]);
    assert_eq!(dummy.kind, NodeKind::Dummy);
    assert_eq!(dummy.layer, 1);
    assert_eq!((dummy.width, dummy.height), (0.0, 0.0));
    assert!(wg.layers[1].contains(&long.dummies[0]));
}

#[test]
fn every_segment_spans_exactly_one_layer_after_normalize() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d", "e"]);
    g.set_edge("a", "e");
    g.set_edge("b", "e");
    g.set_edge("e", "a");

    let (wg, _) = normalized(&g);
    for s in &wg.segments {
        assert_eq!(wg.node(s.head).layer, wg.node(s.tail).layer + 1);
    }
}

#[test]
fn normalize_propagates_the_reversed_flag_to_every_segment() {
    let mut g = new_graph();
    g.set_path(&["A", "B", "C", "D", "A"]);

    let (wg, dummies) = normalized(&g);
    assert_eq!(dummies, 2);

    let back = wg
        .chains
        .iter()
        .position(|c| c.key == EdgeKey::simple("D", "A"))
        .unwrap_or_else(|| panic!("missing D -> A"));
    assert!(wg.chains[back].reversed);
    assert_eq!(wg.chains[back].dummies.len(), 2);

    let segments: Vec<_> = wg.segments.iter().filter(|s| s.chain == back).collect();
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| s.reversed));
}

#[test]
fn layers_form_a_dense_range() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d"]);
    g.set_edge("a", "d");
    g.ensure_node("z");

    let (wg, _) = normalized(&g);
    assert_eq!(wg.layers.len(), 4);
    assert!(wg.layers.iter().all(|layer| !layer.is_empty()));
    let total: usize = wg.layers.iter().map(Vec::len).sum();
    assert_eq!(total, wg.nodes.len());
}
