use aoc_graph::{AnyGraph, Builder};

#[test]
fn empty_builder_materializes_empty_graphs() {
    let b = Builder::new();
    assert!(b.is_empty());
    assert_eq!(b.dense_digraph().len(), 0);
    assert_eq!(b.dense_digraph_w().len(), 0);
    assert_eq!(b.dense_graph().len(), 0);
    assert_eq!(b.dense_graph_w().len(), 0);
    assert_eq!(b.sparse_digraph().len(), 0);
    assert_eq!(b.sparse_digraph_w().len(), 0);
    assert_eq!(b.sparse_digraph().edge_count(), 0);
}

#[test]
fn labels_are_allocated_in_first_use_order() {
    let mut b = Builder::new();
    b.add_edge_l("x", "y");
    b.add_edge_l("z", "x");
    assert_eq!(b.len(), 3);
    assert_eq!(b.vertex("x"), 0);
    assert_eq!(b.vertex("y"), 1);
    assert_eq!(b.vertex("z"), 2);

    let g = b.sparse_digraph();
    assert_eq!(g.vertex("z"), Some(2));
    assert_eq!(g.vertex("missing"), None);
    assert_eq!(g.label(1), "y");
    assert_eq!(g.names(&[2, 0]), vec!["z", "x"]);
}

#[test]
fn isolated_vertices_survive_materialization() {
    let mut b = Builder::new();
    let a = b.vertex("a");
    b.vertex("lonely");
    let c = b.vertex("c");
    b.add_edge(a, c);

    let g = b.dense_digraph();
    assert_eq!(g.len(), 3);
    assert_eq!(g.num_succ(1), 0);
    assert_eq!(g.num_pred(1), 0);
    assert!(g.edge(a, c));
}

#[test]
fn add_path_links_consecutive_labels() {
    let mut b = Builder::new();
    b.add_path_l(&["a", "b", "c", "d"]);
    assert_eq!(b.edge_count(), 3);

    let g = b.sparse_digraph();
    assert_eq!(g.succ_slice(0), [1]);
    assert_eq!(g.succ_slice(1), [2]);
    assert_eq!(g.succ_slice(2), [3]);
    assert!(g.succ_slice(3).is_empty());
}

#[test]
fn materialized_graphs_are_independent() {
    let mut b = Builder::new();
    b.add_path_l(&["a", "b", "c"]);

    let mut first = b.dense_digraph();
    let second = b.dense_digraph();
    first.del_edge(0, 1);

    assert!(!first.edge(0, 1));
    assert!(second.edge(0, 1));

    // The builder keeps accepting edges after materializing.
    b.add_edge_l("c", "a");
    assert!(b.dense_digraph().edge(2, 0));
    assert!(!second.edge(2, 0));
}

#[test]
fn undirected_dense_graphs_are_symmetric() {
    let mut b = Builder::new();
    b.add_edge_l("a", "b");
    b.add_edge_wl("b", "c", 5);
    b.add_edge_wl("c", "b", 2);

    let g = b.dense_graph();
    for u in 0..g.len() {
        for v in 0..g.len() {
            assert_eq!(g.edge(u, v), g.edge(v, u), "({u}, {v})");
        }
    }
    assert!(g.edge(1, 0));

    let gw = b.dense_graph_w();
    assert_eq!(gw.weight(1, 2), 7);
    assert_eq!(gw.weight(2, 1), 7);
    assert_eq!(gw.weight(0, 1), 1);
    assert_eq!(gw.weight(1, 0), 1);
}

#[test]
fn undirected_weighted_self_loop_is_inserted_in_both_directions() {
    let mut b = Builder::new();
    b.add_edge_wl("a", "a", 4);
    b.add_edge_wl("a", "b", 3);
    let g = b.dense_graph_w();
    assert_eq!(g.weight(0, 0), 8);
    assert_eq!(g.weight(0, 1), 3);
    assert_eq!(g.weight(1, 0), 3);
    assert!(b.dense_graph().edge(0, 0));
}
