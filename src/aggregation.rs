//! Descriptive aggregation over raw scores.
//!
//! Dimension means and per-alternative summary statistics for side-by-side
//! display. None of this feeds the ranking math: it reads the raw matrix,
//! not the normalized or weighted one, and applies no weights.

use serde::{Deserialize, Serialize};

use crate::core::ScoreMatrix;

/// Mean raw metric score per dimension per alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub alternatives: Vec<String>,
    pub dimensions: Vec<String>,
    /// `rows[i][j]`: mean score of `dimensions[i]` for `alternatives[j]`.
    pub rows: Vec<Vec<f64>>,
}

/// Average each dimension's metric rows per alternative, unweighted.
///
/// Dimensions keep first-appearance order from the matrix rows.
pub fn dimension_scores(matrix: &ScoreMatrix) -> DimensionScores {
    let mut dimensions: Vec<String> = Vec::new();
    let mut members: Vec<Vec<usize>> = Vec::new();
    for (idx, metric) in matrix.metrics().iter().enumerate() {
        match dimensions.iter().position(|d| d == &metric.dimension) {
            Some(pos) => members[pos].push(idx),
            None => {
                dimensions.push(metric.dimension.clone());
                members.push(vec![idx]);
            }
        }
    }

    let rows = members
        .iter()
        .map(|indices| {
            (0..matrix.alternative_count())
                .map(|col| {
                    let sum: f64 = indices.iter().map(|&i| matrix.rows()[i][col]).sum();
                    sum / indices.len() as f64
                })
                .collect()
        })
        .collect();

    DimensionScores {
        alternatives: matrix.alternatives().to_vec(),
        dimensions,
        rows,
    }
}

/// Descriptive statistics of one alternative's raw scores across all metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeSummary {
    pub alternative: String,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Mean, sample standard deviation, and extrema of each alternative's raw
/// scores. With fewer than two metrics the deviation is reported as zero.
pub fn summary_statistics(matrix: &ScoreMatrix) -> Vec<AlternativeSummary> {
    matrix
        .alternatives()
        .iter()
        .enumerate()
        .map(|(col, alternative)| {
            let values: Vec<f64> = matrix.rows().iter().map(|row| row[col]).collect();
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let std_dev = if values.len() < 2 {
                0.0
            } else {
                let variance =
                    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
                variance.sqrt()
            };
            AlternativeSummary {
                alternative: alternative.clone(),
                mean,
                std_dev,
                min: values.iter().copied().fold(f64::INFINITY, f64::min),
                max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            }
        })
        .collect()
}
