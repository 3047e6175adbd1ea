//! Adjacency-list graphs in compressed sparse row layout.
//!
//! All edge heads live in one contiguous `heads` array; vertex `u` owns the slice
//! `heads[spans[u].start..spans[u].end]`, in edge insertion order. The weighted variant keeps a
//! `weights` array parallel to `heads`.
//!
//! Duplicate edges are kept as separate entries. Point queries ([`Sparse::edge`],
//! [`SparseW::weight`]) see only the first match; iteration yields every entry.

use crate::cursor::{AnyGraph, END, EdgeCursor, WeightedCursor};
use crate::labels::LabelMap;

/// A vertex's range in the flat head array. Topological sort consumes edges by emptying spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    fn len(self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseCursor {
    u: usize,
    v: usize,
    i: usize,
}

impl SparseCursor {
    const END: Self = Self {
        u: END,
        v: END,
        i: END,
    };

    /// Position of the current edge within its tail's adjacency list.
    pub fn index(&self) -> usize {
        self.i
    }
}

impl EdgeCursor for SparseCursor {
    fn is_valid(&self) -> bool {
        self.i != END
    }

    fn tail(&self) -> usize {
        self.u
    }

    fn head(&self) -> usize {
        self.v
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseCursorW {
    cursor: SparseCursor,
    w: i64,
}

impl SparseCursorW {
    const END: Self = Self {
        cursor: SparseCursor::END,
        w: 0,
    };

    pub fn index(&self) -> usize {
        self.cursor.i
    }
}

impl EdgeCursor for SparseCursorW {
    fn is_valid(&self) -> bool {
        self.cursor.is_valid()
    }

    fn tail(&self) -> usize {
        self.cursor.u
    }

    fn head(&self) -> usize {
        self.cursor.v
    }
}

impl WeightedCursor for SparseCursorW {
    fn weight(&self) -> i64 {
        self.w
    }
}

/// Unweighted sparse digraph (a multigraph if the builder saw duplicate edges).
#[derive(Debug, Clone)]
pub struct Sparse {
    pub(crate) labels: LabelMap,
    pub(crate) heads: Vec<usize>,
    pub(crate) spans: Vec<Span>,
}

impl Sparse {
    pub(crate) fn from_parts(labels: LabelMap, heads: Vec<usize>, spans: Vec<Span>) -> Self {
        debug_assert_eq!(spans.len(), labels.len());
        Self {
            labels,
            heads,
            spans,
        }
    }

    /// The successors of `u`, in insertion order.
    pub fn succ_slice(&self, u: usize) -> &[usize] {
        let span = self.spans[u];
        &self.heads[span.start..span.end]
    }

    /// Number of edges still present in the graph.
    pub fn edge_count(&self) -> usize {
        self.spans.iter().map(|s| s.len()).sum()
    }

    pub fn edge(&self, u: usize, v: usize) -> bool {
        self.succ_slice(u).contains(&v)
    }

    /// 1 if the edge exists, 0 otherwise.
    pub fn weight(&self, u: usize, v: usize) -> i64 {
        i64::from(self.edge(u, v))
    }

    pub fn succ(&self, u: usize) -> SparseCursor {
        match self.succ_slice(u).first() {
            Some(&v) => SparseCursor { u, v, i: 0 },
            None => SparseCursor::END,
        }
    }

    pub fn next(&self, it: SparseCursor) -> SparseCursor {
        if !it.is_valid() {
            return it;
        }
        let i = it.i + 1;
        match self.succ_slice(it.u).get(i) {
            Some(&v) => SparseCursor { u: it.u, v, i },
            None => SparseCursor::END,
        }
    }

    pub fn for_succ<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        self.succ_slice(u).iter().all(|&v| cb(v))
    }

    /// Like [`Sparse::for_succ`], with the (always 1) weight passed along.
    pub fn for_succ_w<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize, i64) -> bool,
    {
        self.for_succ(u, |v| cb(v, 1))
    }

    /// O(1).
    pub fn num_succ(&self, u: usize) -> usize {
        self.spans[u].len()
    }

    /// The `i`'th successor of `u`. O(1).
    pub fn succ_i(&self, u: usize, i: usize) -> usize {
        self.succ_slice(u)[i]
    }

    /// The `i`'th predecessor of `v`, ordered by tail index.
    ///
    /// This walks every adjacency list, O(|V| + |E|); keep it out of hot loops.
    pub fn pred_i(&self, v: usize, i: usize) -> Option<usize> {
        (0..self.spans.len())
            .flat_map(|u| {
                self.succ_slice(u)
                    .iter()
                    .filter(move |&&head| head == v)
                    .map(move |_| u)
            })
            .nth(i)
    }
}

impl AnyGraph for Sparse {
    type Cursor = SparseCursor;

    fn label_map(&self) -> &LabelMap {
        &self.labels
    }

    fn weight(&self, u: usize, v: usize) -> i64 {
        Sparse::weight(self, u, v)
    }

    fn succ(&self, u: usize) -> SparseCursor {
        Sparse::succ(self, u)
    }

    fn next(&self, it: SparseCursor) -> SparseCursor {
        Sparse::next(self, it)
    }

    fn for_succ<F>(&self, u: usize, cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        Sparse::for_succ(self, u, cb)
    }

    fn has_weights(&self) -> bool {
        false
    }
}

/// Weighted sparse digraph: a [`Sparse`] plus one weight per adjacency entry.
#[derive(Debug, Clone)]
pub struct SparseW {
    pub(crate) graph: Sparse,
    pub(crate) weights: Vec<i64>,
}

impl SparseW {
    pub(crate) fn from_parts(graph: Sparse, weights: Vec<i64>) -> Self {
        debug_assert_eq!(graph.heads.len(), weights.len());
        Self { graph, weights }
    }

    /// The same graph with the weights ignored.
    pub fn unweighted(&self) -> &Sparse {
        &self.graph
    }

    pub fn succ_slice(&self, u: usize) -> &[usize] {
        self.graph.succ_slice(u)
    }

    /// Weights of `u`'s out-edges, parallel to [`SparseW::succ_slice`].
    pub fn succ_weights(&self, u: usize) -> &[i64] {
        let span = self.graph.spans[u];
        &self.weights[span.start..span.end]
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the edge exists with a non-zero weight.
    pub fn edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v) != 0
    }

    /// Weight of the first `(u, v)` entry, or 0 if there is none.
    ///
    /// This is a linear scan of `u`'s list; when iterating, read the weight off the cursor.
    pub fn weight(&self, u: usize, v: usize) -> i64 {
        self.succ_slice(u)
            .iter()
            .position(|&head| head == v)
            .map_or(0, |i| self.succ_weights(u)[i])
    }

    fn with_weight(&self, it: SparseCursor) -> SparseCursorW {
        if !it.is_valid() {
            return SparseCursorW::END;
        }
        SparseCursorW {
            cursor: it,
            w: self.succ_weights(it.u)[it.i],
        }
    }

    pub fn succ(&self, u: usize) -> SparseCursorW {
        self.with_weight(self.graph.succ(u))
    }

    pub fn next(&self, it: SparseCursorW) -> SparseCursorW {
        self.with_weight(self.graph.next(it.cursor))
    }

    pub fn for_succ<F>(&self, u: usize, cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        self.graph.for_succ(u, cb)
    }

    pub fn for_succ_w<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize, i64) -> bool,
    {
        self.succ_slice(u)
            .iter()
            .zip(self.succ_weights(u))
            .all(|(&v, &w)| cb(v, w))
    }

    pub fn num_succ(&self, u: usize) -> usize {
        self.graph.num_succ(u)
    }

    pub fn succ_i(&self, u: usize, i: usize) -> usize {
        self.graph.succ_i(u, i)
    }

    /// See [`Sparse::pred_i`]; O(|V| + |E|).
    pub fn pred_i(&self, v: usize, i: usize) -> Option<usize> {
        self.graph.pred_i(v, i)
    }
}

impl AnyGraph for SparseW {
    type Cursor = SparseCursorW;

    fn label_map(&self) -> &LabelMap {
        &self.graph.labels
    }

    fn weight(&self, u: usize, v: usize) -> i64 {
        SparseW::weight(self, u, v)
    }

    fn succ(&self, u: usize) -> SparseCursorW {
        SparseW::succ(self, u)
    }

    fn next(&self, it: SparseCursorW) -> SparseCursorW {
        SparseW::next(self, it)
    }

    fn for_succ<F>(&self, u: usize, cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        SparseW::for_succ(self, u, cb)
    }

    fn has_weights(&self) -> bool {
        true
    }
}
