//! Core data types for the ranking pipeline.
//!
//! A [`ScoreMatrix`] holds raw scores with metrics as rows and alternatives
//! as columns, complete by construction. The derived matrices keep the same
//! shape but encode their processing stage in the type, so a raw matrix
//! cannot reach distance computation by accident.
//!
//! Row and column order is input order everywhere. That order is load-bearing:
//! it is the tie-break order of the final ranking.

use serde::{Deserialize, Serialize};

use crate::errors::RankingError;

/// Direction of preference for a metric.
///
/// A metric with no declared polarity is treated as benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher raw values are better.
    #[default]
    Benefit,
    /// Lower raw values are better.
    Cost,
}

/// A single evaluation criterion, grouped under a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub dimension: String,
    #[serde(default)]
    pub polarity: Polarity,
}

impl Metric {
    pub fn benefit(name: &str, dimension: &str) -> Self {
        Self {
            name: name.to_string(),
            dimension: dimension.to_string(),
            polarity: Polarity::Benefit,
        }
    }

    pub fn cost(name: &str, dimension: &str) -> Self {
        Self {
            name: name.to_string(),
            dimension: dimension.to_string(),
            polarity: Polarity::Cost,
        }
    }
}

/// Raw metric × alternative score matrix.
///
/// Scores share a unit per metric row; the algorithm assumes nothing else
/// about the scale. Construction rejects rows that do not carry exactly one
/// score per alternative, so every cell is present from here on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMatrix {
    alternatives: Vec<String>,
    metrics: Vec<Metric>,
    rows: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    /// Build a matrix from ordered rows of `(metric, scores)` pairs.
    ///
    /// `scores[j]` belongs to `alternatives[j]`. Fails with
    /// [`RankingError::IncompleteMatrix`] when a row's length differs from
    /// the alternative count.
    pub fn new(
        alternatives: Vec<String>,
        rows: Vec<(Metric, Vec<f64>)>,
    ) -> Result<Self, RankingError> {
        let mut metrics = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        for (metric, scores) in rows {
            if scores.len() != alternatives.len() {
                return Err(RankingError::IncompleteMatrix {
                    metric: metric.name,
                    expected: alternatives.len(),
                    actual: scores.len(),
                });
            }
            metrics.push(metric);
            values.push(scores);
        }
        Ok(Self {
            alternatives,
            metrics,
            rows: values,
        })
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

/// Score matrix after min-max normalization: every cell in [0, 1], cost
/// metrics direction-corrected so that larger is always better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    pub alternatives: Vec<String>,
    pub metrics: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Normalized matrix scaled by hierarchical weights: every cell in
/// [0, weight of its metric].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMatrix {
    pub alternatives: Vec<String>,
    pub metrics: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}
