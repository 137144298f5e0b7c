//! Application of hierarchical weights to the normalized matrix.

use std::collections::BTreeMap;

use crate::core::{NormalizedMatrix, WeightedMatrix};

/// Scale each normalized row by its metric's hierarchical weight.
///
/// A metric missing from `weights` gets weight zero: the row stays in the
/// matrix but contributes nothing to any distance, which is equivalent to
/// dropping the metric without disturbing the matrix shape.
pub fn apply_weights(
    normalized: &NormalizedMatrix,
    weights: &BTreeMap<String, f64>,
) -> WeightedMatrix {
    let rows = normalized
        .metrics
        .iter()
        .zip(&normalized.rows)
        .map(|(metric, values)| {
            let weight = weights.get(metric).copied().unwrap_or(0.0);
            values.iter().map(|v| v * weight).collect()
        })
        .collect();

    WeightedMatrix {
        alternatives: normalized.alternatives.clone(),
        metrics: normalized.metrics.clone(),
        rows,
    }
}
