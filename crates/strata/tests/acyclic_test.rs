use strata::graphlib::{EdgeKey, Graph, GraphOptions, alg};
use strata::layered::acyclic;
use strata::layered::greedy_fas::greedy_fas;
use strata::layered::work::WorkGraph;
use strata::{Acyclicer, GraphSnapshot, RankDir, VertexLabel};

fn new_graph() -> GraphSnapshot {
    let mut g = GraphSnapshot::new(GraphOptions {
        multigraph: true,
        directed: true,
    });
    g.set_default_node_label(|| VertexLabel::new(10.0, 10.0));
    g
}

fn segment_graph(wg: &WorkGraph) -> Graph<(), ()> {
    let mut g: Graph<(), ()> = Graph::new(GraphOptions {
        multigraph: true,
        directed: true,
    });
    for v in wg.node_ids() {
        g.ensure_node(v.0.to_string());
    }
    for (i, s) in wg.segments.iter().enumerate() {
        g.set_edge_named(
            s.tail.0.to_string(),
            s.head.0.to_string(),
            Some(i.to_string()),
            None,
        );
    }
    g
}

fn reversed_keys(wg: &WorkGraph) -> Vec<EdgeKey> {
    wg.chains
        .iter()
        .filter(|c| c.reversed)
        .map(|c| c.key.clone())
        .collect()
}

/// Deterministic pseudo-random edges over `n` vertices.
fn scrambled_graph(n: usize, edges: usize, seed: u64) -> GraphSnapshot {
    let mut g = new_graph();
    for i in 0..n {
        g.ensure_node(format!("n{i}"));
    }
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    for i in 0..edges {
        let v = next() % n;
        let w = next() % n;
        g.set_edge_named(format!("n{v}"), format!("n{w}"), Some(format!("e{i}")), None);
    }
    g
}

#[test]
fn acyclic_run_does_not_change_an_already_acyclic_graph() {
    for acyclicer in [Acyclicer::Dfs, Acyclicer::Greedy] {
        let mut g = new_graph();
        g.set_path(&["a", "b", "d"]);
        g.set_path(&["a", "c", "d"]);

        let mut wg = WorkGraph::build(&g, RankDir::TB);
        assert_eq!(acyclic::run(&mut wg, acyclicer), 0);
        assert!(reversed_keys(&wg).is_empty());
    }
}

#[test]
fn acyclic_run_reverses_exactly_one_edge_of_a_four_cycle() {
    for acyclicer in [Acyclicer::Dfs, Acyclicer::Greedy] {
        let mut g = new_graph();
        g.set_path(&["A", "B", "C", "D", "A"]);

        let mut wg = WorkGraph::build(&g, RankDir::TB);
        assert_eq!(acyclic::run(&mut wg, acyclicer), 1);
        assert_eq!(reversed_keys(&wg), vec![EdgeKey::simple("D", "A")]);
        assert!(alg::is_acyclic(&segment_graph(&wg)));
    }
}

#[test]
fn acyclic_run_ignores_self_loops() {
    let mut g = new_graph();
    g.set_edge("a", "a");
    g.set_edge("a", "b");
    g.set_edge("b", "b");

    let mut wg = WorkGraph::build(&g, RankDir::TB);
    assert_eq!(wg.segments.len(), 1);
    assert_eq!(acyclic::run(&mut wg, Acyclicer::Dfs), 0);
    assert_eq!(wg.node(wg.segments[0].tail).self_loops, 1);
}

#[test]
fn acyclic_run_breaks_every_parallel_back_edge() {
    let mut g = new_graph();
    g.set_edge("a", "b");
    g.set_edge_named("b", "a", Some("x"), None);
    g.set_edge_named("b", "a", Some("y"), None);

    let mut wg = WorkGraph::build(&g, RankDir::TB);
    assert_eq!(acyclic::run(&mut wg, Acyclicer::Dfs), 2);
    assert!(alg::is_acyclic(&segment_graph(&wg)));
}

#[test]
fn acyclic_run_breaks_disjoint_cycles() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "a"]);
    g.set_path(&["c", "d", "e", "c"]);

    let mut wg = WorkGraph::build(&g, RankDir::TB);
    assert_eq!(acyclic::run(&mut wg, Acyclicer::Dfs), 2);
    assert_eq!(
        reversed_keys(&wg),
        vec![EdgeKey::simple("b", "a"), EdgeKey::simple("e", "c")]
    );
}

#[test]
fn acyclic_run_always_yields_a_dag() {
    for seed in 1..=20u64 {
        for acyclicer in [Acyclicer::Dfs, Acyclicer::Greedy] {
            let g = scrambled_graph(12, 30, seed);
            let mut wg = WorkGraph::build(&g, RankDir::TB);
            acyclic::run(&mut wg, acyclicer);
            assert!(
                alg::is_acyclic(&segment_graph(&wg)),
                "seed {seed} with {acyclicer:?} left a cycle"
            );
        }
    }
}

#[test]
fn reversing_twice_restores_the_original_direction() {
    let mut g = new_graph();
    g.set_edge("a", "b");

    let mut wg = WorkGraph::build(&g, RankDir::TB);
    wg.reverse_segment(0);
    assert!(wg.chains[0].reversed);
    wg.reverse_segment(0);
    assert!(!wg.chains[0].reversed);
    assert_eq!(wg.chains[0].tail, wg.segments[0].tail);
}

#[test]
fn greedy_fas_returns_nothing_for_trivial_graphs() {
    let g = new_graph();
    assert!(greedy_fas(&WorkGraph::build(&g, RankDir::TB)).is_empty());

    let mut g = new_graph();
    g.ensure_node("a");
    assert!(greedy_fas(&WorkGraph::build(&g, RankDir::TB)).is_empty());
}

#[test]
fn greedy_fas_returns_a_single_edge_for_a_two_cycle() {
    let mut g = new_graph();
    g.set_edge("a", "b");
    g.set_edge("b", "a");

    let wg = WorkGraph::build(&g, RankDir::TB);
    assert_eq!(greedy_fas(&wg).len(), 1);
}

#[test]
fn greedy_fas_breaks_every_spoke_of_a_two_way_hub() {
    let mut g = new_graph();
    for i in 0..200 {
        let spoke = format!("s{i}");
        g.set_edge("hub", spoke.as_str());
        g.set_edge(spoke.as_str(), "hub");
    }

    let wg = WorkGraph::build(&g, RankDir::TB);
    let fas = greedy_fas(&wg);
    assert_eq!(fas.len(), 200);
    assert_eq!(greedy_fas(&wg), fas);

    let mut wg = WorkGraph::build(&g, RankDir::TB);
    assert_eq!(acyclic::run(&mut wg, Acyclicer::Greedy), 200);
    assert!(alg::is_acyclic(&segment_graph(&wg)));
}
