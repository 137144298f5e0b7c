//! TOPSIS computation pipeline.
//!
//! Technique for Order of Preference by Similarity to Ideal Solution: rank
//! alternatives by relative closeness to a synthetic best (PIS) and worst
//! (NIS) performance profile. The stages run strictly in order:
//!
//! 1. min-max normalize the raw matrix, polarity-aware
//! 2. scale rows by hierarchical weights
//! 3. extract PIS/NIS per metric
//! 4. Euclidean distances of each alternative to both ideals
//! 5. relative-closeness scores and the final stable ordering
//!
//! Every stage is a pure synchronous transform; the whole pipeline is
//! deterministic and recomputed in full on every call.

pub mod distance;
pub mod ideal;
pub mod normalize;
pub mod ranking;
pub mod weighting;

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{NormalizedMatrix, ScoreMatrix, WeightedMatrix};
use crate::errors::RankingError;

pub use distance::AlternativeDistance;
pub use ideal::IdealSolution;
pub use ranking::{AlternativeScore, RankingRow, NEUTRAL_SCORE};

/// Everything one pipeline run produces. Intermediate matrices are kept so
/// downstream consumers can display or export any stage without recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisAnalysis {
    pub normalized: NormalizedMatrix,
    pub weighted: WeightedMatrix,
    pub ideal: IdealSolution,
    pub distances: Vec<AlternativeDistance>,
    pub scores: Vec<AlternativeScore>,
    pub ranking: Vec<RankingRow>,
}

/// Run the full pipeline over a raw score matrix and a flat hierarchical
/// weight map.
///
/// Fails with [`RankingError::EmptyInput`] when the matrix has no metrics or
/// no alternatives; every other input irregularity is covered by a
/// documented default (missing weight ⇒ 0, undeclared polarity ⇒ benefit,
/// zero distance sum ⇒ neutral score).
pub fn run_analysis(
    matrix: &ScoreMatrix,
    weights: &BTreeMap<String, f64>,
) -> Result<TopsisAnalysis, RankingError> {
    if matrix.metric_count() == 0 {
        return Err(RankingError::EmptyInput("metrics"));
    }
    if matrix.alternative_count() == 0 {
        return Err(RankingError::EmptyInput("alternatives"));
    }

    let normalized = normalize::normalize_matrix(matrix);
    debug!(
        "normalized {} metrics across {} alternatives",
        matrix.metric_count(),
        matrix.alternative_count()
    );

    let weighted = weighting::apply_weights(&normalized, weights);
    let ideal = ideal::find_ideal(&weighted)?;
    let distances = distance::distances(&weighted, &ideal);
    let scores = ranking::score(&distances);
    let ranking = ranking::rank(&scores, &distances);

    if let Some(top) = ranking.first() {
        debug!("top alternative: {} (score {:.4})", top.alternative, top.score);
    }

    Ok(TopsisAnalysis {
        normalized,
        weighted,
        ideal,
        distances,
        scores,
        ranking,
    })
}
