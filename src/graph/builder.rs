// src/graph/builder.rs
//! Graph construction: normalize, match and record every raw reference.

use super::DocumentGraph;
use crate::error::{LinkError, Result};
use crate::matcher::{LinkMatcher, Resolution};
use crate::normalize::normalize;
use crate::types::{Document, Link, MatchType, SourceDocument, UnmatchedLink};

/// Builds a graph from reader output.
///
/// # Errors
/// Returns `EmptyCorpus` when `sources` is empty, or any error from
/// [`DocumentGraph::from_parts`].
pub fn build(sources: Vec<SourceDocument>, similarity_threshold: f64) -> Result<DocumentGraph> {
    build_with_links(sources, Vec::new(), similarity_threshold)
}

/// Builds a graph and merges extra hand-made links into it.
///
/// Extra links take precedence over a matched link for the same pair so
/// that their `manual` provenance survives.
///
/// # Errors
/// Same as [`build`].
pub fn build_with_links(
    sources: Vec<SourceDocument>,
    extra_links: Vec<Link>,
    similarity_threshold: f64,
) -> Result<DocumentGraph> {
    if sources.is_empty() {
        return Err(LinkError::EmptyCorpus);
    }

    let matcher = LinkMatcher::new(sources.iter().map(|s| s.id.as_str()), similarity_threshold);
    let mut links = extra_links;
    let mut unmatched = Vec::new();

    for source in &sources {
        for raw in &source.references {
            record(&source.id, raw, matcher.resolve(raw), &mut links, &mut unmatched);
        }
    }

    let documents = sources.into_iter().map(into_document).collect();
    DocumentGraph::from_parts(documents, links, unmatched)
}

fn record(
    source_id: &str,
    raw: &str,
    resolution: Resolution,
    links: &mut Vec<Link>,
    unmatched: &mut Vec<UnmatchedLink>,
) {
    let (target_id, match_type, score) = match resolution {
        Resolution::Exact(target) => (target, MatchType::Exact, None),
        Resolution::Fuzzy { target, score } => (target, MatchType::Fuzzy, Some(score)),
        Resolution::Manual(target) => (target, MatchType::Manual, None),
        Resolution::Unmatched { normalized } => {
            unmatched.push(UnmatchedLink {
                source_id: source_id.to_string(),
                original_text: raw.to_string(),
                normalized_text: normalized,
            });
            return;
        }
    };

    if target_id == source_id {
        return;
    }

    links.push(Link {
        source_id: source_id.to_string(),
        target_id,
        original_text: raw.to_string(),
        match_type,
        score,
    });
}

fn into_document(source: SourceDocument) -> Document {
    Document {
        normalized_name: normalize(&source.id),
        id: source.id,
        filename: source.filename,
        path: source.path,
        raw_references: source.references,
        resolved_link_count: 0,
    }
}
