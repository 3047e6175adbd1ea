//! Topological sorting (Kahn's algorithm) and other helpers over [`AnyGraph`].
//!
//! The sorts consume the edges they walk. With `keep_edges` set, the adjacency storage is
//! snapshotted first and put back afterwards: the whole matrix for [`Dense`], only the span
//! table for the sparse graphs. Without it, the graph is left with no outgoing edges at all
//! (every vertex that made it into the order has had its out-edges removed).
//!
//! On a cyclic graph the returned order is partial: vertices on or behind a cycle never reach
//! in-degree zero and are left out. Compare the order's length to the vertex count, or use the
//! `topo_sort_checked` variants, if that matters.
//!
//! Ties between several ready vertices are broken by a LIFO stack; the resulting order is not
//! otherwise specified.

use crate::cursor::{AnyGraph, EdgeCursor};
use crate::dense::Dense;
use crate::error::{Error, Result};
use crate::sparse::{Sparse, SparseW};

/// In-degree of every vertex (parallel edges counted separately).
pub fn in_degrees<G: AnyGraph>(g: &G) -> Vec<usize> {
    let mut deg = vec![0; g.len()];
    for u in 0..g.len() {
        g.for_succ(u, |v| {
            deg[v] += 1;
            true
        });
    }
    deg
}

fn complete(order: Vec<usize>, total: usize) -> Result<Vec<usize>> {
    if order.len() == total {
        Ok(order)
    } else {
        Err(Error::Cycle {
            sorted: order.len(),
            total,
        })
    }
}

fn log_partial(sorted: usize, total: usize) {
    if sorted < total {
        tracing::debug!(
            sorted,
            total,
            "topological order is partial; graph has a cycle"
        );
    }
}

impl Dense {
    /// Topological order of the vertices.
    pub fn topo_sort(&mut self, keep_edges: bool) -> Vec<usize> {
        let saved = keep_edges.then(|| self.adj.clone());

        let n = self.len();
        let mut stack: Vec<usize> = (0..n).filter(|&v| self.num_pred(v) == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(u) = stack.pop() {
            order.push(u);
            let mut it = self.succ(u);
            while it.is_valid() {
                let v = it.head();
                self.del_edge(u, v);
                if self.num_pred(v) == 0 {
                    stack.push(v);
                }
                it = self.next(it);
            }
        }

        if let Some(adj) = saved {
            self.adj = adj;
        }
        log_partial(order.len(), n);
        order
    }

    /// Like [`Dense::topo_sort`], but fails with [`Error::Cycle`] if some vertex is left out.
    pub fn topo_sort_checked(&mut self, keep_edges: bool) -> Result<Vec<usize>> {
        let order = self.topo_sort(keep_edges);
        complete(order, self.len())
    }
}

impl Sparse {
    /// Topological order of the vertices.
    pub fn topo_sort(&mut self, keep_edges: bool) -> Vec<usize> {
        let saved = keep_edges.then(|| self.spans.clone());

        let n = self.len();
        let mut np = in_degrees(&*self);
        let mut stack: Vec<usize> = (0..n).filter(|&v| np[v] == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(u) = stack.pop() {
            order.push(u);
            let span = std::mem::take(&mut self.spans[u]);
            for &v in &self.heads[span.start..span.end] {
                np[v] -= 1;
                if np[v] == 0 {
                    stack.push(v);
                }
            }
        }

        if let Some(spans) = saved {
            self.spans = spans;
        }
        log_partial(order.len(), n);
        order
    }

    pub fn topo_sort_checked(&mut self, keep_edges: bool) -> Result<Vec<usize>> {
        let order = self.topo_sort(keep_edges);
        complete(order, self.len())
    }
}

impl SparseW {
    /// Topological order of the vertices. Weights are ignored; consuming edges leaves the
    /// weight array in place and only empties the adjacency spans.
    pub fn topo_sort(&mut self, keep_edges: bool) -> Vec<usize> {
        self.graph.topo_sort(keep_edges)
    }

    pub fn topo_sort_checked(&mut self, keep_edges: bool) -> Result<Vec<usize>> {
        self.graph.topo_sort_checked(keep_edges)
    }
}
