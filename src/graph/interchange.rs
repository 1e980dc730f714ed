// src/graph/interchange.rs
//! The persisted link-graph file used for manual correction between runs.

use super::{builder, DocumentGraph};
use crate::error::{LinkError, Result};
use crate::types::{Document, Link, MatchType, SourceDocument, UnmatchedLink};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
    #[serde(default, alias = "source_directory")]
    pub corpus_path: String,
    #[serde(default)]
    pub total_documents: usize,
    #[serde(default, alias = "total_matched_links")]
    pub total_links: usize,
    #[serde(default)]
    pub total_unmatched_links: usize,
    #[serde(default, alias = "extraction_date")]
    pub timestamp: String,
}

/// On-disk form of a [`DocumentGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkGraphFile {
    pub metadata: GraphMetadata,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub unmatched_links: Vec<UnmatchedLink>,
}

impl LinkGraphFile {
    #[must_use]
    pub fn from_graph(graph: &DocumentGraph, corpus_path: &str) -> Self {
        Self {
            metadata: GraphMetadata {
                corpus_path: corpus_path.to_string(),
                total_documents: graph.len(),
                total_links: graph.link_count(),
                total_unmatched_links: graph.unmatched_links().len(),
                timestamp: Utc::now().to_rfc3339(),
            },
            documents: graph.documents().cloned().collect(),
            links: graph.links().cloned().collect(),
            unmatched_links: graph.unmatched_links().to_vec(),
        }
    }

    /// Rebuilds the graph exactly as recorded, manual links included.
    ///
    /// # Errors
    /// Returns `DuplicateDocument` or `DanglingLink` for inconsistent files.
    pub fn into_graph(self) -> Result<DocumentGraph> {
        DocumentGraph::from_parts(self.documents, self.links, self.unmatched_links)
    }

    /// Loads a link-graph file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LinkError::io(e, path))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the file atomically (temp file + rename).
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        atomic_write(path, &content)
    }
}

/// Recomputes every matched and unmatched link from the documents'
/// `raw_references`, keeping all `manual` links of the file.
///
/// # Errors
/// Returns `EmptyCorpus` for a file without documents, or any graph
/// construction error.
pub fn relink(file: LinkGraphFile, similarity_threshold: f64) -> Result<DocumentGraph> {
    let manual: Vec<Link> = file
        .links
        .into_iter()
        .filter(|l| l.match_type == MatchType::Manual)
        .collect();

    let sources = file
        .documents
        .into_iter()
        .map(|d| SourceDocument {
            id: d.id,
            filename: d.filename,
            path: d.path,
            references: d.raw_references,
        })
        .collect();

    builder::build_with_links(sources, manual, similarity_threshold)
}

pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LinkError::io(e, parent))?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| LinkError::io(e, &tmp))?;
    fs::rename(&tmp, path).map_err(|e| LinkError::io(e, path))
}
