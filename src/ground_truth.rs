// src/ground_truth.rs
//! Per-query relevant-document lists derived from a relevance matrix.

use crate::error::{LinkError, Result};
use crate::relevance::RelevanceMatrix;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevantDoc {
    pub doc_id: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthEntry {
    pub query_doc: String,
    /// Sorted by descending relevance, then ascending id.
    pub relevant_docs: Vec<RelevantDoc>,
    /// Qualifying documents before the `top_k` cut.
    pub total_relevant: usize,
    pub threshold: f64,
}

/// Builds one entry per document of the matrix, in id order.
///
/// Documents with no neighbor at or above `threshold` get an entry with an
/// empty `relevant_docs` list.
///
/// # Errors
/// Returns `InvalidThreshold` unless `threshold` is a finite value in [0, 1].
pub fn build_ground_truth(
    matrix: &RelevanceMatrix,
    threshold: f64,
    top_k: Option<usize>,
) -> Result<Vec<GroundTruthEntry>> {
    check_threshold(threshold)?;
    Ok((0..matrix.len())
        .map(|i| entry_at(matrix, i, threshold, top_k))
        .collect())
}

/// Builds the entry for a single query document.
///
/// # Errors
/// Returns `InvalidThreshold` for a bad threshold and `UnknownDocument` if
/// `query` is not a document of the matrix.
pub fn ground_truth_for(
    matrix: &RelevanceMatrix,
    query: &str,
    threshold: f64,
    top_k: Option<usize>,
) -> Result<GroundTruthEntry> {
    check_threshold(threshold)?;
    let i = matrix
        .index_of(query)
        .ok_or_else(|| LinkError::UnknownDocument(query.to_string()))?;
    Ok(entry_at(matrix, i, threshold, top_k))
}

fn entry_at(
    matrix: &RelevanceMatrix,
    i: usize,
    threshold: f64,
    top_k: Option<usize>,
) -> GroundTruthEntry {
    let ids = matrix.ids();
    let mut relevant: Vec<RelevantDoc> = matrix
        .row(i)
        .iter()
        .enumerate()
        .filter(|&(j, &score)| j != i && score >= threshold)
        .map(|(j, &score)| RelevantDoc {
            doc_id: ids[j].clone(),
            relevance: score,
        })
        .collect();

    relevant.sort_by(by_relevance_then_id);
    let total_relevant = relevant.len();
    if let Some(k) = top_k {
        relevant.truncate(k);
    }

    GroundTruthEntry {
        query_doc: ids[i].clone(),
        relevant_docs: relevant,
        total_relevant,
        threshold,
    }
}

fn by_relevance_then_id(a: &RelevantDoc, b: &RelevantDoc) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

pub(crate) fn check_threshold(value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LinkError::InvalidThreshold {
            name: "relevance threshold",
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundTruthStats {
    pub total_queries: usize,
    pub avg_relevant_per_query: f64,
    pub queries_with_no_relevant: usize,
}

impl GroundTruthStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(entries: &[GroundTruthEntry]) -> Self {
        let total_queries = entries.len();
        let total: usize = entries.iter().map(|e| e.total_relevant).sum();
        Self {
            total_queries,
            avg_relevant_per_query: if total_queries == 0 {
                0.0
            } else {
                total as f64 / total_queries as f64
            },
            queries_with_no_relevant: entries.iter().filter(|e| e.total_relevant == 0).count(),
        }
    }
}
