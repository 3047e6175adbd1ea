//! String label <-> dense vertex index mapping.
//!
//! Indices are handed out in first-use order, so the first label ever requested is vertex 0.

use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    index: HashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `label`, allocating the next free one if the label is new.
    pub fn get(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Looks up an existing label without allocating.
    pub fn find(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Label of vertex `v`. Panics if `v` was never allocated.
    pub fn label(&self, v: usize) -> &str {
        &self.labels[v]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().enumerate().map(|(i, l)| (i, l.as_str()))
    }
}
