//! The edge cursor protocol shared by every graph representation.
//!
//! A cursor is a small `Copy` value pointing at one edge `(tail, head)`. It is obtained from
//! [`AnyGraph::succ`] and advanced with [`AnyGraph::next`]; once the neighbourhood is exhausted
//! the graph hands back an invalid sentinel cursor, on which only [`EdgeCursor::is_valid`] is
//! meaningful.
//!
//! Generic algorithms ([`crate::alg`], [`crate::dot`]) are written once against [`AnyGraph`]
//! and work on dense and sparse, weighted and unweighted graphs alike.

use crate::labels::LabelMap;

/// Internal index marker of an exhausted cursor.
pub(crate) const END: usize = usize::MAX;

pub trait EdgeCursor: Copy {
    fn is_valid(&self) -> bool;

    fn tail(&self) -> usize;

    fn head(&self) -> usize;

    fn at(&self) -> (usize, usize) {
        (self.tail(), self.head())
    }
}

pub trait WeightedCursor: EdgeCursor {
    fn weight(&self) -> i64;
}

/// The common subset of all graph types.
///
/// Dispatch through this trait is static, but walking a dense graph through cursors still pays
/// for the row scan, so hot loops are better off using the concrete type's own methods.
pub trait AnyGraph {
    type Cursor: EdgeCursor;

    fn label_map(&self) -> &LabelMap;

    /// Number of vertices.
    fn len(&self) -> usize {
        self.label_map().len()
    }

    fn is_empty(&self) -> bool {
        self.label_map().is_empty()
    }

    /// Index of the vertex called `label`, if the graph has one.
    fn vertex(&self, label: &str) -> Option<usize> {
        self.label_map().find(label)
    }

    fn label(&self, v: usize) -> &str {
        self.label_map().label(v)
    }

    /// Maps a list of vertex indices (e.g. a topological order) back to their labels.
    fn names(&self, vs: &[usize]) -> Vec<&str> {
        vs.iter().map(|&v| self.label(v)).collect()
    }

    /// Weight of the edge `(u, v)`, or 0 if there is none. Unweighted graphs report 1 for
    /// every existing edge.
    fn weight(&self, u: usize, v: usize) -> i64;

    fn succ(&self, u: usize) -> Self::Cursor;

    fn next(&self, it: Self::Cursor) -> Self::Cursor;

    /// Calls `cb` for every successor of `u` until it returns `false`. Returns `true` if the
    /// end of the list was reached.
    fn for_succ<F>(&self, u: usize, cb: F) -> bool
    where
        F: FnMut(usize) -> bool;

    fn has_weights(&self) -> bool;
}

/// Iterator over the out-edge cursors of one vertex.
pub struct Successors<'a, G: AnyGraph> {
    graph: &'a G,
    cursor: G::Cursor,
}

impl<G: AnyGraph> Iterator for Successors<'_, G> {
    type Item = G::Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.is_valid() {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.graph.next(current);
        Some(current)
    }
}

/// Adapts the cursor protocol to a standard iterator: `for it in successors(&g, u) { .. }`.
pub fn successors<G: AnyGraph>(graph: &G, u: usize) -> Successors<'_, G> {
    Successors {
        graph,
        cursor: graph.succ(u),
    }
}
