use strata_graphlib::{Graph, GraphOptions};

fn undirected() -> Graph<(), i32> {
    Graph::new(GraphOptions {
        directed: false,
        ..Default::default()
    })
}

#[test]
fn undirected_edges_are_symmetric() {
    let mut g = undirected();
    g.set_edge_with_label("b", "a", 7);

    assert!(g.has_edge("a", "b", None));
    assert!(g.has_edge("b", "a", None));
    assert_eq!(g.edge("a", "b", None), Some(&7));
    assert_eq!(g.edge("b", "a", None), Some(&7));
}

#[test]
fn undirected_edges_are_incident_for_in_and_out_edges() {
    let mut g = undirected();
    g.set_edge("a", "b");
    g.set_edge("b", "c");

    assert_eq!(g.out_edges("b", None).len(), 2);
    assert_eq!(g.in_edges("b", None).len(), 2);
    assert_eq!(g.out_edges("b", Some("a")).len(), 1);
    assert_eq!(g.in_edges("b", Some("c")).len(), 1);
}

#[test]
fn undirected_successors_predecessors_and_neighbors_are_the_same() {
    let mut g = undirected();
    g.set_edge("a", "b");
    g.set_edge("b", "c");

    let mut succ = g.successors("b");
    let mut pred = g.predecessors("b");
    let mut neigh = g.neighbors("b");
    succ.sort();
    pred.sort();
    neigh.sort();

    assert_eq!(succ, vec!["a", "c"]);
    assert_eq!(pred, vec!["a", "c"]);
    assert_eq!(neigh, vec!["a", "c"]);
}

#[test]
fn undirected_self_loops_are_listed_once() {
    let mut g = undirected();
    g.set_edge("a", "a");
    assert_eq!(g.node_edges("a").len(), 1);
    assert_eq!(g.successors("a"), vec!["a"]);
}
