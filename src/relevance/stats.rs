// src/relevance/stats.rs
//! Summary statistics over the off-diagonal cells of a matrix.

use super::RelevanceMatrix;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixStats {
    /// Number of ordered off-diagonal pairs.
    pub pairs: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub threshold: f64,
    pub pairs_at_or_above: usize,
}

impl MatrixStats {
    /// All values are 0.0 when the matrix has fewer than two documents.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(matrix: &RelevanceMatrix, threshold: f64) -> Self {
        let n = matrix.len();
        let mut values: Vec<f64> = (0..n)
            .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
            .map(|(i, j)| matrix.at(i, j))
            .collect();

        if values.is_empty() {
            return Self {
                pairs: 0,
                mean: 0.0,
                median: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                threshold,
                pairs_at_or_above: 0,
            };
        }

        values.sort_by(f64::total_cmp);
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

        Self {
            pairs: values.len(),
            mean,
            median: median_of_sorted(&values),
            std_dev: variance.sqrt(),
            min: values[0],
            max: values[values.len() - 1],
            threshold,
            pairs_at_or_above: values.iter().filter(|&&v| v >= threshold).count(),
        }
    }
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        f64::midpoint(values[mid - 1], values[mid])
    } else {
        values[mid]
    }
}
