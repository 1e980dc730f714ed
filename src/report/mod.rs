// src/report/mod.rs
//! Writes graph and scoring results to disk.

pub mod console;
pub mod csv;
pub mod json;

use crate::error::{LinkError, Result};
use crate::graph::interchange::{atomic_write, LinkGraphFile};
use crate::graph::DocumentGraph;
use crate::pipeline::ScoreOutput;
use crate::relevance::Weights;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the files written by [`write_scores`].
#[derive(Debug, Clone)]
pub struct WrittenFiles {
    pub matrix: PathBuf,
    pub common_links: PathBuf,
    pub cooccurrence: PathBuf,
    pub edges: PathBuf,
    pub ground_truth: PathBuf,
    pub summary: PathBuf,
}

impl WrittenFiles {
    #[must_use]
    pub fn paths(&self) -> [&Path; 6] {
        [
            &self.matrix,
            &self.common_links,
            &self.cooccurrence,
            &self.edges,
            &self.ground_truth,
            &self.summary,
        ]
    }
}

/// `YYYYmmdd_HHMMSS` in local time, used to name output files.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Writes the link-graph interchange file.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_graph(graph: &DocumentGraph, corpus_path: &str, out: &Path) -> Result<()> {
    LinkGraphFile::from_graph(graph, corpus_path).save(out)
}

/// Writes the matrix, common-links matrix, co-occurrence and edge CSVs plus
/// ground-truth and summary JSON into `dir`, each suffixed with `stamp`.
///
/// # Errors
/// Returns error if the directory or any file cannot be written.
pub fn write_scores(
    dir: &Path,
    stamp: &str,
    graph: &DocumentGraph,
    output: &ScoreOutput,
    weights: Weights,
    top_k: Option<usize>,
) -> Result<WrittenFiles> {
    fs::create_dir_all(dir).map_err(|e| LinkError::io(e, dir))?;
    let files = WrittenFiles {
        matrix: dir.join(format!("relevance_matrix_{stamp}.csv")),
        common_links: dir.join(format!("relevance_matrix_common_links_{stamp}.csv")),
        cooccurrence: dir.join(format!("link_cooccurrence_{stamp}.csv")),
        edges: dir.join(format!("relevance_edges_{stamp}.csv")),
        ground_truth: dir.join(format!("ground_truth_{stamp}.json")),
        summary: dir.join(format!("summary_{stamp}.json")),
    };

    let edges = output.matrix.edges_above(output.matrix_stats.threshold);
    let summary = json::Summary::new(stamp, graph, output, weights, top_k);

    atomic_write(&files.matrix, &csv::format_matrix(&output.matrix))?;
    atomic_write(&files.common_links, &csv::format_matrix(&output.common_links))?;
    atomic_write(&files.cooccurrence, &csv::format_cooccurrence(&output.cooccurrence))?;
    atomic_write(&files.edges, &csv::format_edges(&edges))?;
    atomic_write(&files.ground_truth, &json::format_ground_truth(&output.ground_truth)?)?;
    atomic_write(&files.summary, &json::format_summary(&summary)?)?;
    Ok(files)
}
