// src/types.rs
//! Core records shared by the graph, the scorer and the interchange format.

use serde::{Deserialize, Serialize};

/// A document as handed over by the reference reader, before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub id: String,
    pub filename: String,
    pub path: String,
    /// Raw reference strings in the order they appear in the source.
    pub references: Vec<String>,
}

impl SourceDocument {
    #[must_use]
    pub fn new(id: impl Into<String>, references: Vec<String>) -> Self {
        let id = id.into();
        Self {
            filename: id.clone(),
            path: id.clone(),
            id,
            references,
        }
    }
}

/// A node of the link graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub path: String,
    pub normalized_name: String,
    #[serde(default, alias = "extracted_links")]
    pub raw_references: Vec<String>,
    #[serde(default)]
    pub resolved_link_count: usize,
}

/// How a link target was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Fuzzy,
    /// Added by hand in the interchange file.
    Manual,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Manual => "manual",
        };
        f.write_str(s)
    }
}

/// A resolved directed reference between two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(alias = "source")]
    pub source_id: String,
    #[serde(alias = "target")]
    pub target_id: String,
    #[serde(default)]
    pub original_text: String,
    pub match_type: MatchType,
    /// Similarity of a fuzzy match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Link {
    /// Creates a hand-added link.
    #[must_use]
    pub fn manual(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_id: source.into(),
            target_id: target.into(),
            original_text: String::new(),
            match_type: MatchType::Manual,
            score: None,
        }
    }

    #[must_use]
    pub fn is_self_link(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// A reference that could not be resolved to a known document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedLink {
    #[serde(alias = "source")]
    pub source_id: String,
    pub original_text: String,
    #[serde(alias = "normalized")]
    pub normalized_text: String,
}
