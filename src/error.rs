// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error(
        "Invalid weights (direct={direct}, bidirectional={bidirectional}, common={common}): {reason}"
    )]
    InvalidWeights {
        direct: f64,
        bidirectional: f64,
        common: f64,
        reason: String,
    },

    #[error("Invalid {name}: {value} (expected a finite value in [0, 1])")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("No such document: {0}")]
    UnknownDocument(String),

    #[error("Empty corpus: no documents to score")]
    EmptyCorpus,

    #[error("Duplicate document id: {0}")]
    DuplicateDocument(String),

    #[error("Link {source_id} -> {target_id} references a document that is not in the graph")]
    DanglingLink { source_id: String, target_id: String },

    #[error("Unmatched reference {original_text:?} belongs to unknown document {source_id}")]
    OrphanUnmatched {
        source_id: String,
        original_text: String,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;

impl LinkError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True for failures caused by user-supplied settings rather than data.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidWeights { .. } | Self::InvalidThreshold { .. } | Self::Toml(_)
        )
    }
}

// Allow `?` on std::io::Error by converting to LinkError::Io with unknown path.
impl From<std::io::Error> for LinkError {
    fn from(source: std::io::Error) -> Self {
        Self::io(source, "<unknown>")
    }
}
