#![forbid(unsafe_code)]

//! Small integer-indexed graphs with string-labeled vertices.
//!
//! Edges are collected in a [`Builder`] (by vertex index or by label) and then materialized as
//! one of four representations:
//!
//! | type       | storage                          | duplicates      |
//! |------------|----------------------------------|-----------------|
//! | [`Dense`]  | `N * N` bool matrix              | merged          |
//! | [`DenseW`] | `N * N` weight matrix, 0 = none  | weights summed  |
//! | [`Sparse`] | CSR adjacency list               | kept (multigraph) |
//! | [`SparseW`]| CSR adjacency + parallel weights | kept (multigraph) |
//!
//! All four implement [`AnyGraph`], so generic code ([`alg::in_degrees`], [`write_dot`]) runs
//! on any of them.
//!
//! ```
//! use aoc_graph::{AnyGraph, Builder};
//!
//! let mut b = Builder::new();
//! b.add_path_l(&["a", "b", "c"]);
//! let mut g = b.sparse_digraph();
//! let order = g.topo_sort(false);
//! assert_eq!(g.names(&order), vec!["a", "b", "c"]);
//! ```

pub mod alg;
pub mod builder;
pub mod cursor;
pub mod dense;
pub mod dot;
pub mod error;
pub mod labels;
pub mod sparse;

pub use builder::Builder;
pub use cursor::{AnyGraph, EdgeCursor, Successors, WeightedCursor, successors};
pub use dense::{Dense, DenseCursor, DenseW};
pub use dot::{Attrs, DotOptions, write_dot};
pub use error::{Error, Result};
pub use labels::LabelMap;
pub use sparse::{Sparse, SparseCursor, SparseCursorW, SparseW};
