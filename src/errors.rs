//! Error types for ranking analysis operations.
//!
//! The pipeline is total over realistic malformed input: unknown polarity
//! falls back to benefit, a metric missing from the weight map gets weight
//! zero, and weight-sum validation is advisory. The variants here cover the
//! cases where no documented default exists and continuing would produce an
//! undefined ranking.

use thiserror::Error;

/// Failures surfaced by weight composition and the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// Every weight in a sibling group is zero. There is no meaningful way
    /// to partition the group, so normalization refuses instead of passing
    /// the input through unnormalized.
    #[error("cannot normalize weights: every weight in the group is zero")]
    DegenerateWeights,

    /// The score matrix has no alternatives or no metrics; a ranking over
    /// nothing is undefined and must not be returned as an empty list.
    #[error("score matrix has no {0}; ranking is undefined")]
    EmptyInput(&'static str),

    /// A metric row does not carry exactly one score per alternative.
    #[error("metric '{metric}' has {actual} scores but {expected} alternatives are defined")]
    IncompleteMatrix {
        metric: String,
        expected: usize,
        actual: usize,
    },
}
