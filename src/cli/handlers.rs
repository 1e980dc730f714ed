// src/cli/handlers.rs
//! Subcommand handlers.

use super::args::{MatchingArgs, ScoringArgs};
use crate::config::Config;
use crate::corpus::SidecarReader;
use crate::exit::SpeclinkExit;
use crate::graph::interchange::{self, LinkGraphFile};
use crate::graph::DocumentGraph;
use crate::ground_truth;
use crate::pipeline;
use crate::relevance;
use crate::report::{self, console};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

const EXTRACTION_DIR: &str = "extraction_results";

pub fn apply_matching(config: &mut Config, args: &MatchingArgs) {
    if let Some(similarity) = args.similarity {
        config.matching.similarity_threshold = similarity;
    }
}

pub fn apply_scoring(config: &mut Config, args: &ScoringArgs) {
    if let Some(metric) = args.metric {
        config.scoring.metric = metric;
    }
    if let Some(threshold) = args.threshold {
        config.ground_truth.threshold = threshold;
    }
    if args.no_top_k {
        config.ground_truth.top_k = None;
    } else if let Some(k) = args.top_k {
        config.ground_truth.top_k = Some(k);
    }
}

/// Handles `speclink extract`.
///
/// # Errors
/// Returns error if the corpus cannot be read or the graph cannot be saved.
pub fn handle_extract(config: &Config, dir: &Path, output: Option<&Path>) -> Result<SpeclinkExit> {
    let graph = extract_graph(config, dir)?;
    let out = output.map_or_else(
        || Path::new(EXTRACTION_DIR).join(format!("links_extracted_{}.json", report::timestamp())),
        Path::to_path_buf,
    );
    save_graph(&graph, &dir.display().to_string(), &out)?;
    print!("{}", console::format_extraction(&graph, config.verbose));
    Ok(SpeclinkExit::Success)
}

/// Handles `speclink relink`.
///
/// # Errors
/// Returns error if the file cannot be loaded, relinked or saved.
pub fn handle_relink(config: &Config, input: &Path, output: Option<&Path>) -> Result<SpeclinkExit> {
    config.validate()?;
    let file = load_file(input)?;
    let corpus_path = file.metadata.corpus_path.clone();
    let manual = file
        .links
        .iter()
        .filter(|l| l.match_type == crate::types::MatchType::Manual)
        .count();

    let graph = interchange::relink(file, config.matching.similarity_threshold)
        .with_context(|| format!("Failed to relink {}", input.display()))?;

    let out = output.map_or_else(|| relinked_path(input), Path::to_path_buf);
    save_graph(&graph, &corpus_path, &out)?;
    if config.verbose {
        eprintln!("{} kept {manual} manual link(s)", "•".dimmed());
    }
    print!("{}", console::format_extraction(&graph, config.verbose));
    Ok(SpeclinkExit::Success)
}

/// Handles `speclink score`.
///
/// # Errors
/// Returns error if the graph is invalid, scoring fails, or writing fails.
pub fn handle_score(config: &Config, input: &Path, out_dir: &Path) -> Result<SpeclinkExit> {
    let graph = load_graph(input)?;
    score_and_write(config, &graph, out_dir)
}

/// Handles `speclink run`.
///
/// # Errors
/// Returns the first failure of extraction, scoring or writing.
pub fn handle_run(config: &Config, dir: &Path, out_dir: &Path) -> Result<SpeclinkExit> {
    config.validate()?;
    let graph = extract_graph(config, dir)?;
    let out = out_dir.join(format!("links_extracted_{}.json", report::timestamp()));
    save_graph(&graph, &dir.display().to_string(), &out)?;
    print!("{}", console::format_extraction(&graph, config.verbose));
    score_and_write(config, &graph, out_dir)
}

/// Handles `speclink truth`.
///
/// # Errors
/// Returns error if the graph is invalid or `query` is not a document.
pub fn handle_truth(config: &Config, input: &Path, query: &str) -> Result<SpeclinkExit> {
    config.validate()?;
    let graph = load_graph(input)?;
    let matrix = relevance::score(&graph, &config.scoring.weights, config.scoring.metric)?;
    let gt = &config.ground_truth;
    let entry = ground_truth::ground_truth_for(&matrix, query, gt.threshold, gt.top_k)?;
    print!("{}", console::format_entry(&entry));
    Ok(SpeclinkExit::Success)
}

fn extract_graph(config: &Config, dir: &Path) -> Result<DocumentGraph> {
    if config.verbose {
        eprintln!("{} {}", "Scanning".dimmed(), dir.display());
    }
    let reader = SidecarReader::new(config.corpus.reference_suffix.clone());
    let graph = pipeline::extract(dir, config, &reader)
        .with_context(|| format!("Failed to extract links from {}", dir.display()))?;
    if config.verbose {
        for doc in graph.documents() {
            eprintln!(
                "   {} {} ({} refs, {} links)",
                "•".dimmed(),
                doc.path,
                doc.raw_references.len(),
                doc.resolved_link_count
            );
        }
    }
    Ok(graph)
}

fn score_and_write(config: &Config, graph: &DocumentGraph, out_dir: &Path) -> Result<SpeclinkExit> {
    let output = pipeline::score(graph, config)?;
    let files = report::write_scores(
        out_dir,
        &report::timestamp(),
        graph,
        &output,
        config.scoring.weights,
        config.ground_truth.top_k,
    )
    .with_context(|| format!("Failed to write results to {}", out_dir.display()))?;

    print!("{}", console::format_scores(&output));
    for path in files.paths() {
        println!("{} {}", "✓ Saved".green(), path.display());
    }
    Ok(SpeclinkExit::Success)
}

fn load_file(path: &Path) -> Result<LinkGraphFile> {
    LinkGraphFile::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn load_graph(path: &Path) -> Result<DocumentGraph> {
    load_file(path)?
        .into_graph()
        .with_context(|| format!("Invalid link graph in {}", path.display()))
}

fn save_graph(graph: &DocumentGraph, corpus_path: &str, out: &Path) -> Result<()> {
    report::write_graph(graph, corpus_path, out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("{} {}", "✓ Saved".green(), out.display());
    Ok(())
}

fn relinked_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "links".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_relinked.json"))
}
