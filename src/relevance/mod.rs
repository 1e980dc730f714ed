// src/relevance/mod.rs
//! Pairwise relevance scoring over a [`DocumentGraph`].

mod components;
mod cooccurrence;
pub mod stats;

pub use components::ComponentScores;
pub use cooccurrence::{cooccurrence, CooccurrenceMatrix};

use crate::error::{LinkError, Result};
use crate::graph::DocumentGraph;
use clap::ValueEnum;
use components::Adjacency;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights of the combined score. Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_direct")]
    pub direct: f64,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: f64,
    #[serde(default = "default_common")]
    pub common: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            direct: default_direct(),
            bidirectional: default_bidirectional(),
            common: default_common(),
        }
    }
}

const fn default_direct() -> f64 { 0.5 }
const fn default_bidirectional() -> f64 { 0.3 }
const fn default_common() -> f64 { 0.2 }

impl Weights {
    /// # Errors
    /// Returns `InvalidWeights` if a weight is negative or not finite, or
    /// if the weights do not sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        let all = [self.direct, self.bidirectional, self.common];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(self.invalid("weights must be finite and non-negative"));
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(self.invalid(&format!("weights sum to {sum}, expected 1.0")));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> LinkError {
        LinkError::InvalidWeights {
            direct: self.direct,
            bidirectional: self.bidirectional,
            common: self.common,
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn combine(&self, c: &ComponentScores) -> f64 {
        (self.direct * c.direct + self.bidirectional * c.bidirectional + self.common * c.common)
            .clamp(0.0, 1.0)
    }
}

/// Which score fills the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Direct,
    Bidirectional,
    #[value(name = "common_links")]
    CommonLinks,
    #[default]
    Combined,
}

impl Metric {
    fn select(self, c: &ComponentScores, weights: &Weights) -> f64 {
        match self {
            Self::Direct => c.direct,
            Self::Bidirectional => c.bidirectional,
            Self::CommonLinks => c.common,
            Self::Combined => weights.combine(c),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Direct => "direct",
            Self::Bidirectional => "bidirectional",
            Self::CommonLinks => "common_links",
            Self::Combined => "combined",
        };
        f.write_str(s)
    }
}

/// An off-diagonal matrix cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceEdge {
    pub source: String,
    pub target: String,
    pub relevance: f64,
}

/// Square matrix of scores over ids in ascending order. Row = query.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceMatrix {
    ids: Vec<String>,
    values: Vec<f64>,
    metric: Metric,
}

impl RelevanceMatrix {
    /// Builds a matrix from precomputed rows, e.g. scores produced elsewhere.
    ///
    /// Returns `None` unless `ids` are strictly ascending and `rows` is a
    /// square `ids.len()` by `ids.len()` table. The diagonal is set to 1.0.
    #[must_use]
    pub fn from_rows(ids: Vec<String>, rows: Vec<Vec<f64>>, metric: Metric) -> Option<Self> {
        let n = ids.len();
        if rows.len() != n || rows.iter().any(|r| r.len() != n) {
            return None;
        }
        if ids.windows(2).any(|w| w[0] >= w[1]) {
            return None;
        }
        let mut values: Vec<f64> = rows.into_iter().flatten().collect();
        for i in 0..n {
            values[i * n + i] = 1.0;
        }
        Some(Self { ids, values, metric })
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.binary_search_by(|probe| probe.as_str().cmp(id)).ok()
    }

    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.at(i, j))
    }

    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.ids.len() + j]
    }

    /// Scores from one query document to every document, in id order.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.ids.len();
        &self.values[i * n..(i + 1) * n]
    }

    /// Off-diagonal cells at or above `threshold`, row by row.
    #[must_use]
    pub fn edges_above(&self, threshold: f64) -> Vec<RelevanceEdge> {
        let n = self.ids.len();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                let relevance = self.at(i, j);
                if relevance >= threshold {
                    edges.push(RelevanceEdge {
                        source: self.ids[i].clone(),
                        target: self.ids[j].clone(),
                        relevance,
                    });
                }
            }
        }
        edges
    }

    /// SHA-256 over the ids and the bit pattern of every cell.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for id in &self.ids {
            hasher.update(id.as_bytes());
            hasher.update([0u8]);
        }
        for v in &self.values {
            hasher.update(v.to_bits().to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

/// Computes the full matrix. All or nothing: no partial matrix on error.
///
/// Rows are computed in parallel; each cell depends only on the graph, so
/// the result does not depend on scheduling.
///
/// # Errors
/// Returns `InvalidWeights` before any work if the weights are invalid and
/// `EmptyCorpus` if the graph has no documents.
pub fn score(graph: &DocumentGraph, weights: &Weights, metric: Metric) -> Result<RelevanceMatrix> {
    weights.validate()?;
    if graph.is_empty() {
        return Err(LinkError::EmptyCorpus);
    }

    let adjacency = Adjacency::from_graph(graph);
    let n = adjacency.len();

    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        metric.select(&adjacency.components(i, j), weights)
                    }
                })
                .collect()
        })
        .collect();

    Ok(RelevanceMatrix {
        ids: adjacency.ids,
        values: rows.into_iter().flatten().collect(),
        metric,
    })
}

/// Component scores for a single ordered pair.
///
/// # Errors
/// Returns `UnknownDocument` if either id is not in the graph.
pub fn components(graph: &DocumentGraph, a: &str, b: &str) -> Result<ComponentScores> {
    let adjacency = Adjacency::from_graph(graph);
    let i = lookup(&adjacency, a)?;
    let j = lookup(&adjacency, b)?;
    Ok(adjacency.components(i, j))
}

fn lookup(adjacency: &Adjacency, id: &str) -> Result<usize> {
    adjacency
        .index
        .get(id)
        .copied()
        .ok_or_else(|| LinkError::UnknownDocument(id.to_string()))
}
