// src/report/console.rs
//! Terminal summaries.

use crate::graph::DocumentGraph;
use crate::ground_truth::GroundTruthEntry;
use crate::pipeline::ScoreOutput;
use colored::Colorize;
use std::fmt::Write;

/// Summary of an extraction run. `verbose` lists every unmatched reference.
#[must_use]
pub fn format_extraction(graph: &DocumentGraph, verbose: bool) -> String {
    let mut out = String::new();
    let with_links = graph.documents().filter(|d| !d.raw_references.is_empty()).count();

    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    let _ = writeln!(out, "{}", " LINK EXTRACTION SUMMARY".cyan().bold());
    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    let _ = writeln!(out, "   Documents:               {}", graph.len().to_string().white());
    let _ = writeln!(out, "   Documents with refs:     {with_links}");
    let _ = writeln!(out, "   Documents without refs:  {}", graph.len() - with_links);
    let _ = writeln!(out, "   Links:                   {}", graph.link_count().to_string().green());
    let _ = writeln!(
        out,
        "   Unmatched references:    {}",
        format_count(graph.unmatched_links().len())
    );

    if verbose && !graph.unmatched_links().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Unmatched:".yellow().bold());
        for u in graph.unmatched_links() {
            let _ = writeln!(
                out,
                "   {} {} {} {}",
                u.source_id.dimmed(),
                "→".dimmed(),
                u.original_text,
                format!("[{}]", u.normalized_text).dimmed()
            );
        }
    }

    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    out
}

/// Summary of a scoring run.
#[must_use]
pub fn format_scores(output: &ScoreOutput) -> String {
    let mut out = String::new();
    let s = &output.matrix_stats;
    let g = &output.truth_stats;

    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    let _ = writeln!(out, "{}", " RELEVANCE MATRIX SUMMARY".cyan().bold());
    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    let _ = writeln!(out, "   Documents:               {}", output.matrix.len());
    let _ = writeln!(out, "   Metric:                  {}", output.matrix.metric());
    let _ = writeln!(out, "   Pairs (≥{:.2}):           {}", s.threshold, s.pairs_at_or_above);
    let _ = writeln!(out, "   Mean relevance:          {:.3}", s.mean);
    let _ = writeln!(out, "   Median relevance:        {:.3}", s.median);
    let _ = writeln!(out, "   Std relevance:           {:.3}", s.std_dev);
    let _ = writeln!(out, "   Min / max:               {:.3} / {:.3}", s.min, s.max);
    let _ = writeln!(out);
    let _ = writeln!(out, "   Queries:                 {}", g.total_queries);
    let _ = writeln!(out, "   Avg relevant / query:    {:.1}", g.avg_relevant_per_query);
    let _ = writeln!(
        out,
        "   Queries with none:       {}",
        format_count(g.queries_with_no_relevant)
    );
    let _ = writeln!(out, "   Co-occurring ref keys:   {}", output.cooccurrence.len());
    let _ = writeln!(out, "   Fingerprint:             {}", output.matrix.fingerprint().dimmed());
    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    out
}

/// One ground-truth entry as a ranked list.
#[must_use]
pub fn format_entry(entry: &GroundTruthEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} (threshold {}, {} relevant)",
        "Query:".cyan().bold(),
        entry.query_doc,
        entry.threshold,
        entry.total_relevant
    );
    if entry.relevant_docs.is_empty() {
        let _ = writeln!(out, "   {}", "(no relevant documents)".dimmed());
    }
    for (rank, doc) in entry.relevant_docs.iter().enumerate() {
        let _ = writeln!(out, "   {:>3}. {:.3}  {}", rank + 1, doc.relevance, doc.doc_id);
    }
    out
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().yellow().to_string()
    }
}
