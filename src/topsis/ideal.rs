//! Positive and negative ideal solution extraction.

use serde::{Deserialize, Serialize};

use crate::core::WeightedMatrix;
use crate::errors::RankingError;

/// Per-metric best (PIS) and worst (NIS) weighted values across
/// alternatives, indexed in matrix row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolution {
    pub metrics: Vec<String>,
    pub pis: Vec<f64>,
    pub nis: Vec<f64>,
}

/// Reduce each weighted row to its extrema.
///
/// Fails with [`RankingError::EmptyInput`] when there is no alternative
/// column to reduce over.
pub fn find_ideal(weighted: &WeightedMatrix) -> Result<IdealSolution, RankingError> {
    if weighted.alternatives.is_empty() {
        return Err(RankingError::EmptyInput("alternatives"));
    }

    let mut pis = Vec::with_capacity(weighted.rows.len());
    let mut nis = Vec::with_capacity(weighted.rows.len());
    for values in &weighted.rows {
        pis.push(values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        nis.push(values.iter().copied().fold(f64::INFINITY, f64::min));
    }

    Ok(IdealSolution {
        metrics: weighted.metrics.clone(),
        pis,
        nis,
    })
}
