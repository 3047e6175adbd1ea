//! Adjacency-matrix graphs.
//!
//! The matrix is one flat `N * N` array in row-major order: cell `u * N + v` describes the edge
//! `(u, v)`. Edge tests are O(1); neighbourhood walks scan a whole row or column, skipping
//! absent edges one cell at a time.

use crate::cursor::{AnyGraph, END, EdgeCursor};
use crate::labels::LabelMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Row,
    Column,
}

/// Cursor over the successors (row scan) or predecessors (column scan) of a dense graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseCursor {
    u: usize,
    v: usize,
    scan: Scan,
}

impl DenseCursor {
    fn end(scan: Scan) -> Self {
        Self {
            u: END,
            v: END,
            scan,
        }
    }
}

impl EdgeCursor for DenseCursor {
    fn is_valid(&self) -> bool {
        self.u != END
    }

    fn tail(&self) -> usize {
        self.u
    }

    fn head(&self) -> usize {
        self.v
    }
}

/// Finds the first present cell at or after `(u, v)` along the scan direction.
fn scan_from<T>(
    adj: &[T],
    n: usize,
    mut u: usize,
    mut v: usize,
    scan: Scan,
    present: impl Fn(&T) -> bool,
) -> DenseCursor {
    while u < n && v < n {
        if present(&adj[u * n + v]) {
            return DenseCursor { u, v, scan };
        }
        match scan {
            Scan::Row => v += 1,
            Scan::Column => u += 1,
        }
    }
    DenseCursor::end(scan)
}

fn advance<T>(adj: &[T], n: usize, it: DenseCursor, present: impl Fn(&T) -> bool) -> DenseCursor {
    if !it.is_valid() {
        return it;
    }
    match it.scan {
        Scan::Row => scan_from(adj, n, it.u, it.v + 1, Scan::Row, present),
        Scan::Column => scan_from(adj, n, it.u + 1, it.v, Scan::Column, present),
    }
}

/// Unweighted dense graph. Duplicate edges collapse into a single `true` cell.
#[derive(Debug, Clone)]
pub struct Dense {
    pub(crate) labels: LabelMap,
    pub(crate) adj: Vec<bool>,
}

impl Dense {
    pub(crate) fn from_parts(labels: LabelMap, adj: Vec<bool>) -> Self {
        debug_assert_eq!(adj.len(), labels.len() * labels.len());
        Self { labels, adj }
    }

    fn n(&self) -> usize {
        self.labels.len()
    }

    fn row(&self, u: usize) -> &[bool] {
        let n = self.n();
        &self.adj[u * n..(u + 1) * n]
    }

    pub fn edge(&self, u: usize, v: usize) -> bool {
        self.adj[u * self.n() + v]
    }

    /// 1 if the edge exists, 0 otherwise.
    pub fn weight(&self, u: usize, v: usize) -> i64 {
        i64::from(self.edge(u, v))
    }

    pub fn succ(&self, u: usize) -> DenseCursor {
        scan_from(&self.adj, self.n(), u, 0, Scan::Row, |&e| e)
    }

    pub fn pred(&self, v: usize) -> DenseCursor {
        scan_from(&self.adj, self.n(), 0, v, Scan::Column, |&e| e)
    }

    /// Moves a cursor from [`Dense::succ`] or [`Dense::pred`] one step further.
    pub fn next(&self, it: DenseCursor) -> DenseCursor {
        advance(&self.adj, self.n(), it, |&e| e)
    }

    pub fn for_succ<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e)
            .all(|(v, _)| cb(v))
    }

    /// Like [`Dense::for_succ`], with the (always 1) weight passed along.
    pub fn for_succ_w<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize, i64) -> bool,
    {
        self.for_succ(u, |v| cb(v, 1))
    }

    /// O(|V|).
    pub fn num_succ(&self, u: usize) -> usize {
        self.row(u).iter().filter(|&&e| e).count()
    }

    /// O(|V|).
    pub fn num_pred(&self, v: usize) -> usize {
        self.adj
            .iter()
            .skip(v)
            .step_by(self.n())
            .filter(|&&e| e)
            .count()
    }

    /// Removes the edge `(u, v)`; a no-op if it does not exist.
    pub fn del_edge(&mut self, u: usize, v: usize) {
        let n = self.n();
        self.adj[u * n + v] = false;
    }
}

impl AnyGraph for Dense {
    type Cursor = DenseCursor;

    fn label_map(&self) -> &LabelMap {
        &self.labels
    }

    fn weight(&self, u: usize, v: usize) -> i64 {
        Dense::weight(self, u, v)
    }

    fn succ(&self, u: usize) -> DenseCursor {
        Dense::succ(self, u)
    }

    fn next(&self, it: DenseCursor) -> DenseCursor {
        Dense::next(self, it)
    }

    fn for_succ<F>(&self, u: usize, cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        Dense::for_succ(self, u, cb)
    }

    fn has_weights(&self) -> bool {
        false
    }
}

/// Weighted dense graph. A zero cell means "no edge"; duplicate edges sum their weights.
#[derive(Debug, Clone)]
pub struct DenseW {
    pub(crate) labels: LabelMap,
    pub(crate) adj: Vec<i64>,
}

impl DenseW {
    pub(crate) fn from_parts(labels: LabelMap, adj: Vec<i64>) -> Self {
        debug_assert_eq!(adj.len(), labels.len() * labels.len());
        Self { labels, adj }
    }

    fn n(&self) -> usize {
        self.labels.len()
    }

    fn row(&self, u: usize) -> &[i64] {
        let n = self.n();
        &self.adj[u * n..(u + 1) * n]
    }

    /// True if the edge exists with a non-zero weight.
    pub fn edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v) != 0
    }

    pub fn weight(&self, u: usize, v: usize) -> i64 {
        self.adj[u * self.n() + v]
    }

    pub fn succ(&self, u: usize) -> DenseCursor {
        scan_from(&self.adj, self.n(), u, 0, Scan::Row, |&w| w != 0)
    }

    pub fn pred(&self, v: usize) -> DenseCursor {
        scan_from(&self.adj, self.n(), 0, v, Scan::Column, |&w| w != 0)
    }

    pub fn next(&self, it: DenseCursor) -> DenseCursor {
        advance(&self.adj, self.n(), it, |&w| w != 0)
    }

    pub fn for_succ<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        self.for_succ_w(u, |v, _| cb(v))
    }

    pub fn for_succ_w<F>(&self, u: usize, mut cb: F) -> bool
    where
        F: FnMut(usize, i64) -> bool,
    {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .all(|(v, &w)| cb(v, w))
    }

    pub fn num_succ(&self, u: usize) -> usize {
        self.row(u).iter().filter(|&&w| w != 0).count()
    }

    pub fn num_pred(&self, v: usize) -> usize {
        self.adj
            .iter()
            .skip(v)
            .step_by(self.n())
            .filter(|&&w| w != 0)
            .count()
    }
}

impl AnyGraph for DenseW {
    type Cursor = DenseCursor;

    fn label_map(&self) -> &LabelMap {
        &self.labels
    }

    fn weight(&self, u: usize, v: usize) -> i64 {
        DenseW::weight(self, u, v)
    }

    fn succ(&self, u: usize) -> DenseCursor {
        DenseW::succ(self, u)
    }

    fn next(&self, it: DenseCursor) -> DenseCursor {
        DenseW::next(self, it)
    }

    fn for_succ<F>(&self, u: usize, cb: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        DenseW::for_succ(self, u, cb)
    }

    fn has_weights(&self) -> bool {
        true
    }
}
