// src/matcher.rs
//! Resolves raw reference strings to known document ids.

use crate::normalize::{normalize, strip_extension};
use std::collections::BTreeMap;

/// Default minimum similarity for a fuzzy match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Outcome of resolving one reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Exact(String),
    Fuzzy { target: String, score: f64 },
    Manual(String),
    Unmatched { normalized: String },
}

impl Resolution {
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Exact(t) | Self::Manual(t) | Self::Fuzzy { target: t, .. } => Some(t),
            Self::Unmatched { .. } => None,
        }
    }
}

/// Index of known document ids keyed by their normalized form.
#[derive(Debug, Clone)]
pub struct LinkMatcher {
    /// Case-folded id -> lowest id with that spelling.
    by_name: BTreeMap<String, String>,
    /// Normalized key -> lowest id with that key.
    by_key: BTreeMap<String, String>,
    similarity_threshold: f64,
}

impl LinkMatcher {
    #[must_use]
    pub fn new<'a, I>(known_ids: I, similarity_threshold: f64) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut by_name = BTreeMap::new();
        let mut by_key = BTreeMap::new();
        for id in known_ids {
            insert_lowest(&mut by_name, name_key(id), id);
            insert_lowest(&mut by_key, normalize(id), id);
        }
        Self {
            by_name,
            by_key,
            similarity_threshold,
        }
    }

    /// Resolves a raw reference: a reference spelling out an id wins, then
    /// an exact key match, then the best fuzzy match.
    ///
    /// Ids sharing a key and equal fuzzy scores resolve to the
    /// lexicographically lowest id.
    #[must_use]
    pub fn resolve(&self, raw_reference: &str) -> Resolution {
        if let Some(id) = self.by_name.get(&name_key(raw_reference)) {
            return Resolution::Exact(id.clone());
        }

        let key = normalize(raw_reference);
        if let Some(id) = self.by_key.get(&key) {
            return Resolution::Exact(id.clone());
        }

        match self.best_fuzzy(&key) {
            Some((id, score)) if score >= self.similarity_threshold => Resolution::Fuzzy {
                target: id.to_string(),
                score,
            },
            _ => Resolution::Unmatched { normalized: key },
        }
    }

    fn best_fuzzy(&self, key: &str) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (candidate_key, id) in &self.by_key {
            let score = similarity(key, candidate_key);
            best = match best {
                Some((best_id, best_score))
                    if best_score > score || (best_score == score && best_id <= id.as_str()) =>
                {
                    Some((best_id, best_score))
                }
                _ => Some((id.as_str(), score)),
            };
        }
        best
    }
}

/// Trimmed, extension-less, lowercased spelling of a name.
fn name_key(name: &str) -> String {
    strip_extension(name.trim()).trim().to_lowercase()
}

fn insert_lowest(map: &mut BTreeMap<String, String>, key: String, id: &str) {
    map.entry(key)
        .and_modify(|existing| {
            if id < existing.as_str() {
                *existing = id.to_string();
            }
        })
        .or_insert_with(|| id.to_string());
}

/// Normalized edit-distance similarity in [0, 1] over Unicode scalar values.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max = a.len().max(b.len());
    if max == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / max as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
