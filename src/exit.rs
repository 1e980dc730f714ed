// src/exit.rs
//! Standardized process exit codes for `speclink`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::LinkError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SpeclinkExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, malformed input file).
    Error = 1,
    /// Invalid configuration (weights, thresholds, config file).
    InvalidInput = 2,
    /// No documents to score.
    EmptyCorpus = 3,
    /// A requested document id is not in the graph.
    UnknownDocument = 4,
}

impl SpeclinkExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code for an error surfaced to the CLI.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LinkError>() {
            Some(LinkError::EmptyCorpus) => Self::EmptyCorpus,
            Some(LinkError::UnknownDocument(_)) => Self::UnknownDocument,
            Some(e) if e.is_configuration() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for SpeclinkExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
