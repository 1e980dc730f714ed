// src/relevance/components.rs
//! The three pairwise component scores over an index-based adjacency view.

use crate::graph::DocumentGraph;
use std::collections::{BTreeSet, HashMap};

/// Component scores for one ordered pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub direct: f64,
    pub bidirectional: f64,
    pub common: f64,
}

impl ComponentScores {
    pub const DIAGONAL: Self = Self {
        direct: 1.0,
        bidirectional: 1.0,
        common: 1.0,
    };
}

/// Dense-index adjacency built once per scoring run.
pub(crate) struct Adjacency {
    pub(crate) ids: Vec<String>,
    pub(crate) index: HashMap<String, usize>,
    out: Vec<BTreeSet<usize>>,
}

impl Adjacency {
    pub(crate) fn from_graph(graph: &DocumentGraph) -> Self {
        let ids: Vec<String> = graph.ids().map(str::to_string).collect();
        let index: HashMap<String, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut out = vec![BTreeSet::new(); ids.len()];
        for link in graph.links() {
            if let (Some(&s), Some(&t)) = (index.get(&link.source_id), index.get(&link.target_id)) {
                out[s].insert(t);
            }
        }

        Self { ids, index, out }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.out[a].contains(&b)
    }

    pub(crate) fn components(&self, a: usize, b: usize) -> ComponentScores {
        if a == b {
            return ComponentScores::DIAGONAL;
        }
        ComponentScores {
            direct: self.direct(a, b),
            bidirectional: self.bidirectional(a, b),
            common: self.common(a, b),
        }
    }

    /// 1.0 if `a -> b` exists.
    fn direct(&self, a: usize, b: usize) -> f64 {
        if self.has_edge(a, b) {
            1.0
        } else {
            0.0
        }
    }

    /// 1.0 for a mutual pair, 0.5 for one direction, 0.0 otherwise.
    fn bidirectional(&self, a: usize, b: usize) -> f64 {
        match (self.has_edge(a, b), self.has_edge(b, a)) {
            (true, true) => 1.0,
            (true, false) | (false, true) => 0.5,
            (false, false) => 0.0,
        }
    }

    /// Jaccard coefficient of the out-neighbor sets with `a` and `b` removed.
    #[allow(clippy::cast_precision_loss)]
    fn common(&self, a: usize, b: usize) -> f64 {
        let excluded = |n: &&usize| **n != a && **n != b;
        let left: BTreeSet<usize> = self.out[a].iter().filter(excluded).copied().collect();
        let right: BTreeSet<usize> = self.out[b].iter().filter(excluded).copied().collect();

        let shared = left.intersection(&right).count();
        let union = left.len() + right.len() - shared;
        if union == 0 {
            return 0.0;
        }
        shared as f64 / union as f64
    }
}
