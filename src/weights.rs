//! Weight normalization and hierarchical composition.
//!
//! Weights arrive in two shapes: a point allocation across dimensions
//! (typically 100 points) and ordinal 1–5 importance ratings per metric,
//! grouped by dimension. Each sibling group is normalized to sum 1.0, then
//! the final influence of a metric is the product of its dimension's weight
//! and its weight within that dimension. Two partitions of unity multiply
//! into a third, so the composed map sums to 1.0 as well.

use std::collections::BTreeMap;

use crate::errors::RankingError;

/// Acceptable deviation of a weight group's sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Scale a weight group so it sums to 1.0.
///
/// Fails with [`RankingError::DegenerateWeights`] when the group sums to
/// zero; an all-zero group has no meaningful partition and passing it
/// through unnormalized would poison every downstream sum.
pub fn normalize(weights: &BTreeMap<String, f64>) -> Result<BTreeMap<String, f64>, RankingError> {
    let total: f64 = weights.values().sum();
    if total == 0.0 {
        return Err(RankingError::DegenerateWeights);
    }
    Ok(weights
        .iter()
        .map(|(item, weight)| (item.clone(), weight / total))
        .collect())
}

/// Multiply each dimension's weight into its metrics' within-dimension
/// weights, flattening the hierarchy to a metric → weight map.
///
/// Metrics whose dimension is absent from `dimension_weights` are silently
/// omitted; the weighted-matrix step treats them as weight zero.
pub fn compose_hierarchical(
    dimension_weights: &BTreeMap<String, f64>,
    metric_weights: &BTreeMap<String, BTreeMap<String, f64>>,
) -> BTreeMap<String, f64> {
    let mut hierarchical = BTreeMap::new();
    for (dimension, dim_weight) in dimension_weights {
        if let Some(within) = metric_weights.get(dimension) {
            for (metric, metric_weight) in within {
                hierarchical.insert(metric.clone(), dim_weight * metric_weight);
            }
        }
    }
    hierarchical
}

/// Advisory check that a weight group sums to 1.0 within `tolerance`.
///
/// Never an error: callers decide whether an off allocation blocks the run.
pub fn validate(weights: &BTreeMap<String, f64>, tolerance: f64) -> bool {
    let total: f64 = weights.values().sum();
    (total - 1.0).abs() < tolerance
}

/// Turn ordinal 1–5 importance ratings into weights within one sibling group.
pub fn from_ratings(
    ratings: &BTreeMap<String, u8>,
) -> Result<BTreeMap<String, f64>, RankingError> {
    let as_weights: BTreeMap<String, f64> = ratings
        .iter()
        .map(|(item, rating)| (item.clone(), f64::from(*rating)))
        .collect();
    normalize(&as_weights)
}

/// Turn a point allocation across dimensions into dimension weights.
pub fn from_points(
    points: &BTreeMap<String, f64>,
) -> Result<BTreeMap<String, f64>, RankingError> {
    normalize(points)
}

/// Full interactive composition: a point allocation across dimensions plus
/// 1–5 ratings per metric grouped by dimension, down to one flat
/// hierarchical weight per metric.
pub fn compose_from_ratings(
    dimension_points: &BTreeMap<String, f64>,
    metric_ratings: &BTreeMap<String, BTreeMap<String, u8>>,
) -> Result<BTreeMap<String, f64>, RankingError> {
    let dimension_weights = from_points(dimension_points)?;
    let mut metric_weights = BTreeMap::new();
    for (dimension, ratings) in metric_ratings {
        metric_weights.insert(dimension.clone(), from_ratings(ratings)?);
    }
    Ok(compose_hierarchical(&dimension_weights, &metric_weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn normalize_scales_to_unit_sum() {
        let normalized = normalize(&map(&[("a", 2.0), ("b", 6.0)])).unwrap();
        assert_eq!(normalized, map(&[("a", 0.25), ("b", 0.75)]));
    }

    #[test]
    fn normalize_refuses_all_zero_group() {
        let err = normalize(&map(&[("a", 0.0), ("b", 0.0)])).unwrap_err();
        assert_eq!(err, RankingError::DegenerateWeights);
    }

    #[test]
    fn normalize_refuses_empty_group() {
        let err = normalize(&BTreeMap::new()).unwrap_err();
        assert_eq!(err, RankingError::DegenerateWeights);
    }

    #[test]
    fn compose_multiplies_dimension_into_metric_weights() {
        let dims = map(&[("perf", 0.6), ("cost", 0.4)]);
        let mut metrics = BTreeMap::new();
        metrics.insert("perf".to_string(), map(&[("latency", 0.5), ("throughput", 0.5)]));
        metrics.insert("cost".to_string(), map(&[("license", 1.0)]));

        let hierarchical = compose_hierarchical(&dims, &metrics);

        assert_eq!(hierarchical["latency"], 0.3);
        assert_eq!(hierarchical["throughput"], 0.3);
        assert_eq!(hierarchical["license"], 0.4);
    }

    #[test]
    fn compose_omits_dimensions_without_weight() {
        let dims = map(&[("perf", 1.0)]);
        let mut metrics = BTreeMap::new();
        metrics.insert("perf".to_string(), map(&[("latency", 1.0)]));
        metrics.insert("orphaned".to_string(), map(&[("unused", 1.0)]));

        let hierarchical = compose_hierarchical(&dims, &metrics);

        assert!(hierarchical.contains_key("latency"));
        assert!(!hierarchical.contains_key("unused"));
    }

    #[test]
    fn validate_accepts_sum_within_tolerance() {
        assert!(validate(&map(&[("a", 0.501), ("b", 0.5)]), WEIGHT_SUM_TOLERANCE));
        assert!(!validate(&map(&[("a", 0.6), ("b", 0.5)]), WEIGHT_SUM_TOLERANCE));
        assert!(!validate(&map(&[("a", 0.2)]), WEIGHT_SUM_TOLERANCE));
    }

    #[test]
    fn ratings_normalize_within_the_group() {
        let ratings: BTreeMap<String, u8> =
            [("docs".to_string(), 1), ("api".to_string(), 4)].into();
        let weights = from_ratings(&ratings).unwrap();
        assert_eq!(weights["docs"], 0.2);
        assert_eq!(weights["api"], 0.8);
    }

    #[test]
    fn full_composition_sums_to_one() {
        let points = map(&[("perf", 60.0), ("cost", 40.0)]);
        let mut ratings = BTreeMap::new();
        ratings.insert(
            "perf".to_string(),
            BTreeMap::from([("latency".to_string(), 3u8), ("throughput".to_string(), 5u8)]),
        );
        ratings.insert(
            "cost".to_string(),
            BTreeMap::from([("license".to_string(), 2u8), ("support".to_string(), 2u8)]),
        );

        let hierarchical = compose_from_ratings(&points, &ratings).unwrap();

        assert_eq!(hierarchical.len(), 4);
        assert!(validate(&hierarchical, WEIGHT_SUM_TOLERANCE));
        // 0.4 * (2 / 4) on each cost metric
        assert!((hierarchical["license"] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn degenerate_rating_group_fails_composition() {
        let points = map(&[("perf", 100.0)]);
        let mut ratings = BTreeMap::new();
        ratings.insert(
            "perf".to_string(),
            BTreeMap::from([("latency".to_string(), 0u8)]),
        );

        let err = compose_from_ratings(&points, &ratings).unwrap_err();
        assert_eq!(err, RankingError::DegenerateWeights);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_groups_sum_to_one(
            values in proptest::collection::vec(0.001..100.0f64, 1..12)
        ) {
            let weights: BTreeMap<String, f64> = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("w{i}"), *v))
                .collect();
            let normalized = normalize(&weights).unwrap();
            let total: f64 = normalized.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }

        #[test]
        fn composition_conserves_unit_sum(
            dim_values in proptest::collection::vec(0.1..10.0f64, 1..5),
            metric_values in proptest::collection::vec(0.1..10.0f64, 1..5)
        ) {
            // Same metric layout under every dimension keeps the case simple;
            // conservation only needs both levels to be partitions of unity.
            let dims: BTreeMap<String, f64> = dim_values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("dim{i}"), *v))
                .collect();
            let dims = normalize(&dims).unwrap();

            let mut metrics = BTreeMap::new();
            for dim in dims.keys() {
                let group: BTreeMap<String, f64> = metric_values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (format!("{dim}_m{i}"), *v))
                    .collect();
                metrics.insert(dim.clone(), normalize(&group).unwrap());
            }

            let hierarchical = compose_hierarchical(&dims, &metrics);
            let total: f64 = hierarchical.values().sum();
            prop_assert!((total - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        }
    }
}
