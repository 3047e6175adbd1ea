//! GraphViz (`.dot`) export.
//!
//! Vertices are written as `nV` with their label as the default `label` attribute; weighted
//! graphs also label every edge with its weight. Attribute values are emitted verbatim, so
//! callers must quote strings themselves (`"\"red\""`).

use crate::cursor::{AnyGraph, EdgeCursor, successors};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Settings for [`write_dot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Graph name written after the `digraph` / `graph` keyword.
    pub name: String,
    /// Emit a `digraph` with `->` edges. An undirected export writes `--` edges and skips
    /// `(u, v)` when `v < u`, so a symmetric graph yields each edge once.
    pub directed: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            name: "G".to_string(),
            directed: true,
        }
    }
}

impl DotOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }
}

/// Ordered `key=value` attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

pub type NodeAttrFn<'a> = &'a dyn Fn(usize) -> Attrs;
pub type EdgeAttrFn<'a> = &'a dyn Fn(usize, usize) -> Attrs;

/// Writes `g` in GraphViz format.
///
/// `node_attr` and `edge_attr` are optional and add extra attributes to vertices and edges. A
/// `label` returned by either takes precedence over the default vertex label / edge weight.
///
/// The default edge label is `g.weight(u, v)`, so parallel edges of a sparse multigraph all
/// carry the weight of the first `(u, v)` entry.
pub fn write_dot<G, W>(
    g: &G,
    w: &mut W,
    opts: &DotOptions,
    node_attr: Option<NodeAttrFn<'_>>,
    edge_attr: Option<EdgeAttrFn<'_>>,
) -> Result<()>
where
    G: AnyGraph,
    W: Write + ?Sized,
{
    let (keyword, edge_op) = if opts.directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    writeln!(w, "{keyword} {} {{", opts.name)?;

    for v in 0..g.len() {
        let attrs = node_attr.map(|f| f(v)).unwrap_or_default();
        let label = format!("\"{}\"", g.label(v));
        write!(w, "  n{v} [")?;
        write_attrs(w, &attrs, &[("label", label.as_str())])?;
        writeln!(w, "];")?;
    }

    let mut edges = 0usize;
    for u in 0..g.len() {
        for it in successors(g, u) {
            let v = it.head();
            if !opts.directed && v < u {
                continue;
            }
            let attrs = edge_attr.map(|f| f(u, v)).unwrap_or_default();
            write!(w, "  n{u} {edge_op} n{v} [")?;
            if g.has_weights() {
                let label = format!("\"{}\"", g.weight(u, v));
                write_attrs(w, &attrs, &[("label", label.as_str())])?;
            } else {
                write_attrs(w, &attrs, &[])?;
            }
            writeln!(w, "];")?;
            edges += 1;
        }
    }

    writeln!(w, "}}")?;
    tracing::trace!(name = %opts.name, vertices = g.len(), edges, "wrote dot graph");
    Ok(())
}

/// Writes the caller's attributes, then every default whose key the caller did not set.
fn write_attrs<W: Write + ?Sized>(
    w: &mut W,
    attrs: &Attrs,
    defaults: &[(&str, &str)],
) -> std::io::Result<()> {
    let extra = defaults.iter().filter(|(k, _)| !attrs.contains_key(k));
    for (i, (k, v)) in attrs.iter().chain(extra.copied()).enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        write!(w, "{k}={v}")?;
    }
    Ok(())
}
