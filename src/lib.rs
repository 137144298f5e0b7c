// Export modules for library usage
pub mod aggregation;
pub mod core;
pub mod errors;
pub mod output;
pub mod reference;
pub mod topsis;
pub mod weights;

// Re-export commonly used types
pub use crate::core::{Metric, NormalizedMatrix, Polarity, ScoreMatrix, WeightedMatrix};

pub use crate::errors::RankingError;

pub use crate::topsis::{
    run_analysis, AlternativeDistance, AlternativeScore, IdealSolution, RankingRow,
    TopsisAnalysis, NEUTRAL_SCORE,
};

pub use crate::aggregation::{
    dimension_scores, summary_statistics, AlternativeSummary, DimensionScores,
};

pub use crate::weights::{
    compose_from_ratings, compose_hierarchical, normalize, validate, WEIGHT_SUM_TOLERANCE,
};

pub use crate::output::{create_writer, OutputFormat, Report, ReportWriter};
