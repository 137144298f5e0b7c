pub mod types;

pub use types::{Metric, NormalizedMatrix, Polarity, ScoreMatrix, WeightedMatrix};
