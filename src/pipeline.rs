// src/pipeline.rs
//! Batch pipeline: corpus -> graph -> matrix -> ground truth.
//!
//! Each stage consumes the finished output of the previous one.

use crate::config::Config;
use crate::corpus::{self, ReferenceReader};
use crate::error::Result;
use crate::graph::{builder, DocumentGraph};
use crate::ground_truth::{self, GroundTruthEntry, GroundTruthStats};
use crate::relevance::{self, stats::MatrixStats, CooccurrenceMatrix, Metric, RelevanceMatrix};
use std::path::Path;

/// Everything produced by the scoring stage.
#[derive(Debug, Clone)]
pub struct ScoreOutput {
    pub matrix: RelevanceMatrix,
    /// Common-neighbor (Jaccard) matrix, exported next to `matrix`.
    pub common_links: RelevanceMatrix,
    pub cooccurrence: CooccurrenceMatrix,
    pub ground_truth: Vec<GroundTruthEntry>,
    pub matrix_stats: MatrixStats,
    pub truth_stats: GroundTruthStats,
}

/// Reads the corpus under `root` and builds its link graph.
///
/// # Errors
/// Returns error on invalid configuration, unreadable corpus, or an empty
/// corpus.
pub fn extract(root: &Path, config: &Config, reader: &dyn ReferenceReader) -> Result<DocumentGraph> {
    config.validate()?;
    let sources = corpus::load(root, &config.corpus, reader)?;
    builder::build(sources, config.matching.similarity_threshold)
}

/// Scores a graph and derives its ground truth.
///
/// # Errors
/// Returns error on invalid configuration or an empty graph. Nothing is
/// produced in that case.
pub fn score(graph: &DocumentGraph, config: &Config) -> Result<ScoreOutput> {
    config.validate()?;
    let gt = &config.ground_truth;

    let weights = &config.scoring.weights;
    let matrix = relevance::score(graph, weights, config.scoring.metric)?;
    let common_links = if matrix.metric() == Metric::CommonLinks {
        matrix.clone()
    } else {
        relevance::score(graph, weights, Metric::CommonLinks)?
    };
    let ground_truth = ground_truth::build_ground_truth(&matrix, gt.threshold, gt.top_k)?;
    let matrix_stats = MatrixStats::compute(&matrix, gt.threshold);
    let truth_stats = GroundTruthStats::compute(&ground_truth);

    Ok(ScoreOutput {
        matrix,
        common_links,
        cooccurrence: relevance::cooccurrence(graph),
        ground_truth,
        matrix_stats,
        truth_stats,
    })
}

/// Runs extraction and scoring as one batch.
///
/// # Errors
/// Returns the first error of either stage.
pub fn run(
    root: &Path,
    config: &Config,
    reader: &dyn ReferenceReader,
) -> Result<(DocumentGraph, ScoreOutput)> {
    let graph = extract(root, config, reader)?;
    let output = score(&graph, config)?;
    Ok((graph, output))
}
