//! Relative-closeness scoring and the final ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::topsis::distance::AlternativeDistance;

/// Score assigned when an alternative is equidistant at zero from both
/// ideals. Such an alternative is simultaneously ideal and anti-ideal, which
/// means the data cannot distinguish it from anything; 0.5 marks it neutral
/// instead of dividing zero by zero.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Relative closeness of one alternative to the positive ideal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative: String,
    pub score: f64,
}

/// One row of the final ranking: position, alternative, and the distance
/// figures the score was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: usize,
    pub alternative: String,
    pub d_plus: f64,
    pub d_minus: f64,
    pub score: f64,
}

/// Compute `d_minus / (d_plus + d_minus)` per alternative, in input order.
///
/// A zero distance sum resolves to [`NEUTRAL_SCORE`].
pub fn score(distances: &[AlternativeDistance]) -> Vec<AlternativeScore> {
    distances
        .iter()
        .map(|d| {
            let total = d.d_plus + d.d_minus;
            let score = if total == 0.0 {
                NEUTRAL_SCORE
            } else {
                d.d_minus / total
            };
            AlternativeScore {
                alternative: d.alternative.clone(),
                score,
            }
        })
        .collect()
}

/// Order alternatives by descending score.
///
/// The sort is stable and `scores`/`distances` arrive in matrix column
/// order, so equal scores keep the input order of the alternatives. That
/// tie-break is a contract, not an accident of the sort.
pub fn rank(scores: &[AlternativeScore], distances: &[AlternativeDistance]) -> Vec<RankingRow> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .score
            .partial_cmp(&scores[a].score)
            .unwrap_or(Ordering::Equal)
    });

    order
        .into_iter()
        .enumerate()
        .map(|(position, idx)| RankingRow {
            rank: position + 1,
            alternative: scores[idx].alternative.clone(),
            d_plus: distances[idx].d_plus,
            d_minus: distances[idx].d_minus,
            score: scores[idx].score,
        })
        .collect()
}
