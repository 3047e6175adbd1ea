//! Incremental graph construction.
//!
//! A [`Builder`] records edges verbatim, with no duplicate checking. Pick one of:
//! - make sure the input lists each edge once,
//! - accept that a sparse graph will be a multigraph,
//! - use a dense graph, where the adjacency matrix merges duplicates.
//!
//! The builder can be materialized any number of times. Every graph it produces owns its
//! storage; nothing is shared with the builder or with other graphs.

use crate::dense::{Dense, DenseW};
use crate::labels::LabelMap;
use crate::sparse::{Span, Sparse, SparseW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawEdge {
    from: usize,
    to: usize,
    weight: i64,
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    verts: LabelMap,
    edges: Vec<RawEdge>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices added so far.
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex index for `label`, creating the vertex if necessary.
    pub fn vertex(&mut self, label: &str) -> usize {
        self.verts.get(label)
    }

    pub fn add_edge_w(&mut self, from: usize, to: usize, weight: i64) {
        self.edges.push(RawEdge { from, to, weight });
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.add_edge_w(from, to, 1);
    }

    pub fn add_edge_wl(&mut self, from: &str, to: &str, weight: i64) {
        let from = self.vertex(from);
        let to = self.vertex(to);
        self.add_edge_w(from, to, weight);
    }

    pub fn add_edge_l(&mut self, from: &str, to: &str) {
        self.add_edge_wl(from, to, 1);
    }

    /// Adds an edge between every pair of consecutive labels.
    pub fn add_path_l(&mut self, labels: &[&str]) {
        for pair in labels.windows(2) {
            self.add_edge_l(pair[0], pair[1]);
        }
    }

    pub fn dense_digraph(&self) -> Dense {
        let n = self.len();
        let mut adj = vec![false; n * n];
        for e in &self.edges {
            adj[e.from * n + e.to] = true;
        }
        self.log_materialized("dense_digraph");
        Dense::from_parts(self.verts.clone(), adj)
    }

    /// Weighted dense digraph. Repeated edges between the same pair sum their weights.
    pub fn dense_digraph_w(&self) -> DenseW {
        let n = self.len();
        let mut adj = vec![0; n * n];
        for e in &self.edges {
            adj[e.from * n + e.to] += e.weight;
        }
        self.log_materialized("dense_digraph_w");
        DenseW::from_parts(self.verts.clone(), adj)
    }

    /// Undirected dense graph: every edge is stored in both directions.
    pub fn dense_graph(&self) -> Dense {
        let n = self.len();
        let mut adj = vec![false; n * n];
        for e in &self.edges {
            adj[e.from * n + e.to] = true;
            adj[e.to * n + e.from] = true;
        }
        self.log_materialized("dense_graph");
        Dense::from_parts(self.verts.clone(), adj)
    }

    /// Undirected weighted dense graph. Edges between the same two vertices sum up regardless
    /// of the order they were recorded in. Both directions are always added, so a self-loop
    /// contributes twice its weight.
    pub fn dense_graph_w(&self) -> DenseW {
        let n = self.len();
        let mut adj = vec![0; n * n];
        for e in &self.edges {
            adj[e.from * n + e.to] += e.weight;
            adj[e.to * n + e.from] += e.weight;
        }
        self.log_materialized("dense_graph_w");
        DenseW::from_parts(self.verts.clone(), adj)
    }

    pub fn sparse_digraph(&self) -> Sparse {
        let mut heads = vec![0; self.edges.len()];
        let spans = self.scatter(|slot, e| heads[slot] = e.to);
        self.log_materialized("sparse_digraph");
        Sparse::from_parts(self.verts.clone(), heads, spans)
    }

    pub fn sparse_digraph_w(&self) -> SparseW {
        let mut heads = vec![0; self.edges.len()];
        let mut weights = vec![0; self.edges.len()];
        let spans = self.scatter(|slot, e| {
            heads[slot] = e.to;
            weights[slot] = e.weight;
        });
        self.log_materialized("sparse_digraph_w");
        SparseW::from_parts(Sparse::from_parts(self.verts.clone(), heads, spans), weights)
    }

    /// Two-pass counting sort of the edges by tail: count out-degrees, prefix-sum them into
    /// per-vertex spans, then hand every edge its slot in the flat adjacency array. Edges of one
    /// vertex keep their insertion order.
    fn scatter(&self, mut place: impl FnMut(usize, &RawEdge)) -> Vec<Span> {
        let n = self.len();
        let mut offsets = vec![0usize; n + 1];
        for e in &self.edges {
            offsets[e.from + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }
        let spans = offsets
            .windows(2)
            .map(|w| Span {
                start: w[0],
                end: w[1],
            })
            .collect();

        let mut fill = offsets;
        for e in &self.edges {
            place(fill[e.from], e);
            fill[e.from] += 1;
        }
        spans
    }

    fn log_materialized(&self, kind: &'static str) {
        tracing::debug!(
            kind,
            vertices = self.len(),
            edges = self.edges.len(),
            "materialized graph"
        );
    }
}
