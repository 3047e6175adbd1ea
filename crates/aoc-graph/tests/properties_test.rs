use aoc_graph::{Builder, EdgeCursor, LabelMap, WeightedCursor, successors};
use proptest::prelude::*;

const MAX_VERTS: usize = 8;

fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1..=MAX_VERTS).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1i64..10);
        (Just(n), prop::collection::vec(edge, 0..24))
    })
}

fn builder_for(n: usize, edges: &[(usize, usize, i64)]) -> Builder {
    let mut b = Builder::new();
    for v in 0..n {
        b.vertex(&format!("v{v}"));
    }
    for &(u, v, w) in edges {
        b.add_edge_w(u, v, w);
    }
    b
}

/// Random DAG: only edges from a lower to a higher index.
fn dag_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    edges_strategy().prop_map(|(n, edges)| {
        let edges = edges
            .into_iter()
            .filter(|&(u, v, _)| u != v)
            .map(|(u, v, w)| (u.min(v), u.max(v), w))
            .collect();
        (n, edges)
    })
}

proptest! {
    #[test]
    fn labels_round_trip(labels in prop::collection::vec("[a-e]{1,3}", 0..32)) {
        let mut m = LabelMap::new();
        let first: Vec<usize> = labels.iter().map(|l| m.get(l)).collect();
        for (l, &v) in labels.iter().zip(&first) {
            prop_assert_eq!(m.label(v), l.as_str());
            prop_assert_eq!(m.get(l), v);
        }
    }

    #[test]
    fn dense_edge_iff_some_edge_was_added((n, edges) in edges_strategy()) {
        let g = builder_for(n, &edges).dense_digraph();
        for u in 0..n {
            for v in 0..n {
                let added = edges.iter().any(|&(a, b, _)| (a, b) == (u, v));
                prop_assert_eq!(g.edge(u, v), added);
            }
        }
    }

    #[test]
    fn dense_weights_sum_duplicates((n, edges) in edges_strategy()) {
        let g = builder_for(n, &edges).dense_digraph_w();
        for u in 0..n {
            for v in 0..n {
                let sum: i64 = edges
                    .iter()
                    .filter(|&&(a, b, _)| (a, b) == (u, v))
                    .map(|&(_, _, w)| w)
                    .sum();
                prop_assert_eq!(g.weight(u, v), sum);
            }
        }
    }

    #[test]
    fn sparse_keeps_every_edge_in_order((n, edges) in edges_strategy()) {
        let g = builder_for(n, &edges).sparse_digraph_w();
        for u in 0..n {
            let want: Vec<(usize, i64)> = edges
                .iter()
                .filter(|&&(a, _, _)| a == u)
                .map(|&(_, b, w)| (b, w))
                .collect();
            prop_assert_eq!(g.num_succ(u), want.len());
            let got: Vec<(usize, i64)> = successors(&g, u)
                .map(|it| (it.head(), it.weight()))
                .collect();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn dense_iteration_matches_the_matrix((n, edges) in edges_strategy()) {
        let g = builder_for(n, &edges).dense_digraph();
        for u in 0..n {
            let got: Vec<usize> = successors(&g, u).map(|it| it.head()).collect();
            let want: Vec<usize> = (0..n).filter(|&v| g.edge(u, v)).collect();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn topo_order_respects_every_edge((n, edges) in dag_strategy()) {
        let b = builder_for(n, &edges);
        let orders = [
            b.dense_digraph().topo_sort(false),
            b.sparse_digraph().topo_sort(false),
            b.sparse_digraph_w().topo_sort(false),
        ];
        for order in orders {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());

            let mut pos = vec![0; n];
            for (i, &v) in order.iter().enumerate() {
                pos[v] = i;
            }
            for &(u, v, _) in &edges {
                prop_assert!(pos[u] < pos[v]);
            }
        }
    }

    #[test]
    fn keep_edges_preserves_queries((n, edges) in edges_strategy()) {
        let b = builder_for(n, &edges);
        let mut dense = b.dense_digraph();
        let reference = b.dense_digraph();
        dense.topo_sort(true);
        let mut sparse = b.sparse_digraph();
        let sparse_ref = b.sparse_digraph();
        sparse.topo_sort(true);
        let mut sparse_w = b.sparse_digraph_w();
        let sparse_w_ref = b.sparse_digraph_w();
        sparse_w.topo_sort(true);
        for u in 0..n {
            prop_assert_eq!(sparse.succ_slice(u), sparse_ref.succ_slice(u));
            let got: Vec<(usize, i64)> = successors(&sparse_w, u)
                .map(|it| (it.head(), it.weight()))
                .collect();
            let want: Vec<(usize, i64)> = successors(&sparse_w_ref, u)
                .map(|it| (it.head(), it.weight()))
                .collect();
            prop_assert_eq!(got, want);
            for v in 0..n {
                prop_assert_eq!(dense.edge(u, v), reference.edge(u, v));
            }
        }
    }
}
