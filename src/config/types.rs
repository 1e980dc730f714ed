use crate::relevance::{Metric, Weights};
use serde::{Deserialize, Serialize};

/// Run configuration, loaded from `speclink.toml` and overridden by flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub ground_truth: GroundTruthConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(skip)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_similarity")]
    pub similarity_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self { similarity_threshold: default_similarity() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub metric: Metric,
    #[serde(default)]
    pub weights: Weights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundTruthConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Cap on stored relevant documents per query. `None` keeps all.
    #[serde(default = "default_top_k")]
    pub top_k: Option<usize>,
}

impl Default for GroundTruthConfig {
    fn default() -> Self {
        Self { threshold: default_threshold(), top_k: default_top_k() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Source document extensions, matched case-insensitively.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Reference sidecar `<file>.<suffix>` read next to each document.
    #[serde(default = "default_reference_suffix")]
    pub reference_suffix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            reference_suffix: default_reference_suffix(),
        }
    }
}

const fn default_similarity() -> f64 { crate::matcher::DEFAULT_SIMILARITY_THRESHOLD }
const fn default_threshold() -> f64 { 0.3 }
#[allow(clippy::unnecessary_wraps)]
const fn default_top_k() -> Option<usize> { Some(10) }

fn default_extensions() -> Vec<String> {
    vec!["xlsx".into(), "xlsm".into(), "xls".into()]
}

fn default_reference_suffix() -> String { "refs".to_string() }
