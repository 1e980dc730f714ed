// src/relevance/cooccurrence.rs
//! Reference co-occurrence: how many documents cite two targets together.

use crate::graph::DocumentGraph;
use crate::normalize::normalize;
use std::collections::BTreeSet;

/// Symmetric count matrix over the normalized keys of every raw reference.
/// The diagonal is always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooccurrenceMatrix {
    keys: Vec<String>,
    counts: Vec<usize>,
}

impl CooccurrenceMatrix {
    /// Reference keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.binary_search_by(|probe| probe.as_str().cmp(key)).ok()
    }

    /// Count for two keys. Raw reference text is normalized first.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<usize> {
        let i = self.index_of(&normalize(a))?;
        let j = self.index_of(&normalize(b))?;
        Some(self.at(i, j))
    }

    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> usize {
        self.counts[i * self.keys.len() + j]
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[usize] {
        let n = self.keys.len();
        &self.counts[i * n..(i + 1) * n]
    }
}

/// Counts, for each pair of reference keys, the documents whose raw
/// references contain both. Resolved or not does not matter; a document
/// citing one key twice counts once.
#[must_use]
pub fn cooccurrence(graph: &DocumentGraph) -> CooccurrenceMatrix {
    let per_document: Vec<BTreeSet<String>> = graph
        .documents()
        .map(|d| d.raw_references.iter().map(|r| normalize(r)).collect())
        .collect();

    let keys: Vec<String> = per_document
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let n = keys.len();
    let mut counts = vec![0; n * n];

    for refs in &per_document {
        let indices: Vec<usize> = refs
            .iter()
            .filter_map(|k| keys.binary_search(k).ok())
            .collect();
        for (pos, &i) in indices.iter().enumerate() {
            for &j in &indices[pos + 1..] {
                counts[i * n + j] += 1;
                counts[j * n + i] += 1;
            }
        }
    }

    CooccurrenceMatrix { keys, counts }
}
