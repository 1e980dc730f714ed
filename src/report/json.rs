// src/report/json.rs
use crate::error::Result;
use crate::graph::DocumentGraph;
use crate::ground_truth::{GroundTruthEntry, GroundTruthStats};
use crate::pipeline::ScoreOutput;
use crate::relevance::{stats::MatrixStats, Metric, Weights};
use serde::Serialize;

/// Run summary written next to the matrix.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub timestamp: &'a str,
    pub total_documents: usize,
    pub total_links: usize,
    pub total_unmatched_links: usize,
    pub metric: Metric,
    pub weights: Weights,
    pub top_k: Option<usize>,
    pub fingerprint: String,
    pub statistics: &'a MatrixStats,
    pub ground_truth_stats: &'a GroundTruthStats,
}

impl<'a> Summary<'a> {
    #[must_use]
    pub fn new(
        timestamp: &'a str,
        graph: &DocumentGraph,
        output: &'a ScoreOutput,
        weights: Weights,
        top_k: Option<usize>,
    ) -> Self {
        Self {
            timestamp,
            total_documents: graph.len(),
            total_links: graph.link_count(),
            total_unmatched_links: graph.unmatched_links().len(),
            metric: output.matrix.metric(),
            weights,
            top_k,
            fingerprint: output.matrix.fingerprint(),
            statistics: &output.matrix_stats,
            ground_truth_stats: &output.truth_stats,
        }
    }
}

/// Ground truth as consumed by the search-evaluation harness.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_ground_truth(entries: &[GroundTruthEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// # Errors
/// Returns error if serialization fails.
pub fn format_summary(summary: &Summary<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
