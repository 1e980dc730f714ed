pub mod types;

pub use self::types::{Config, CorpusConfig, GroundTruthConfig, MatchingConfig, ScoringConfig};

use crate::error::{LinkError, Result};
use crate::ground_truth;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "speclink.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `speclink.toml` in the working directory if present.
    ///
    /// # Errors
    /// Returns error if an explicit `path` is unreadable or any file found
    /// is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE)),
            None => Ok(Self::new()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LinkError::io(e, path))?;
        Self::parse_toml(&content)
    }

    /// # Errors
    /// Returns error if `content` is not valid TOML for this schema.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Checks weights and thresholds before any scoring starts.
    ///
    /// # Errors
    /// Returns `InvalidWeights` or `InvalidThreshold`.
    pub fn validate(&self) -> Result<()> {
        self.scoring.weights.validate()?;
        ground_truth::check_threshold(self.ground_truth.threshold)?;
        let similarity = self.matching.similarity_threshold;
        if !similarity.is_finite() || !(0.0..=1.0).contains(&similarity) {
            return Err(LinkError::InvalidThreshold {
                name: "similarity threshold",
                value: similarity,
            });
        }
        Ok(())
    }
}
