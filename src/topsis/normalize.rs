//! Min-max normalization of the raw score matrix.

use crate::core::{NormalizedMatrix, Polarity, ScoreMatrix};

/// Rescale each metric row to [0, 1] across alternatives, direction-corrected
/// so that 1 is always the preferred end.
///
/// A row where every alternative scores the same carries no information on
/// that axis; every cell becomes exactly 0.5. The input matrix is not
/// mutated.
pub fn normalize_matrix(matrix: &ScoreMatrix) -> NormalizedMatrix {
    let rows = matrix
        .metrics()
        .iter()
        .zip(matrix.rows())
        .map(|(metric, values)| normalize_row(values, metric.polarity))
        .collect();

    NormalizedMatrix {
        alternatives: matrix.alternatives().to_vec(),
        metrics: matrix.metrics().iter().map(|m| m.name.clone()).collect(),
        rows,
    }
}

fn normalize_row(values: &[f64], polarity: Polarity) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![0.5; values.len()];
    }

    let range = max - min;
    values
        .iter()
        .map(|v| match polarity {
            Polarity::Benefit => (v - min) / range,
            Polarity::Cost => (max - v) / range,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Metric;
    use pretty_assertions::assert_eq;

    fn matrix(rows: Vec<(Metric, Vec<f64>)>) -> ScoreMatrix {
        let n = rows.first().map_or(0, |(_, v)| v.len());
        let alternatives = (0..n).map(|i| format!("P{i}")).collect();
        ScoreMatrix::new(alternatives, rows).unwrap()
    }

    #[test]
    fn benefit_metric_maps_min_to_zero_and_max_to_one() {
        let m = matrix(vec![(Metric::benefit("m", "d"), vec![1.0, 3.0, 5.0])]);
        let normalized = normalize_matrix(&m);
        assert_eq!(normalized.rows[0], vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn cost_metric_inverts_direction() {
        let m = matrix(vec![(Metric::cost("m", "d"), vec![1.0, 3.0, 5.0])]);
        let normalized = normalize_matrix(&m);
        assert_eq!(normalized.rows[0], vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn constant_row_becomes_one_half_everywhere() {
        let m = matrix(vec![(Metric::benefit("m", "d"), vec![4.0, 4.0, 4.0])]);
        let normalized = normalize_matrix(&m);
        assert_eq!(normalized.rows[0], vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn rows_are_normalized_independently() {
        let m = matrix(vec![
            (Metric::benefit("a", "d"), vec![0.0, 10.0]),
            (Metric::benefit("b", "d"), vec![100.0, 200.0]),
        ]);
        let normalized = normalize_matrix(&m);
        assert_eq!(normalized.rows[0], vec![0.0, 1.0]);
        assert_eq!(normalized.rows[1], vec![0.0, 1.0]);
    }
}
