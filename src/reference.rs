//! Built-in reference dataset.
//!
//! The platforms under evaluation, the metric catalog with polarities, raw
//! scores on the 0–5 scale, and the default weights averaged from the
//! underlying expert survey. Everything is embedded; the crate reads no data
//! files.

use std::collections::BTreeMap;

use crate::core::{Metric, ScoreMatrix};
use crate::weights;

pub const KEBOOLA: &str = "Keboola";
pub const MICROSOFT_FABRIC: &str = "Microsoft Fabric";
pub const DATABRICKS: &str = "Databricks";

pub const TECHNICAL_EFFICIENCY: &str = "Technical Efficiency";
pub const DATA_QUALITY: &str = "Data Quality";
pub const CI_CD: &str = "CI/CD";
pub const USER_EXPERIENCE: &str = "User Experience";
pub const BUSINESS_IMPACT: &str = "Business Impact";

/// The evaluated platforms, in canonical display order.
pub fn platforms() -> Vec<String> {
    vec![
        KEBOOLA.to_string(),
        MICROSOFT_FABRIC.to_string(),
        DATABRICKS.to_string(),
    ]
}

/// The complete reference score matrix: 15 metrics across 5 dimensions,
/// scored 0–5 per platform. Cost metrics are the ones where a lower raw
/// score is the better result (latency, error rate, effort, cost, lock-in).
pub fn reference_matrix() -> ScoreMatrix {
    let rows = vec![
        (
            Metric::benefit("Pipeline throughput", TECHNICAL_EFFICIENCY),
            vec![3.8, 4.0, 4.7],
        ),
        (
            Metric::benefit("Resource utilization", TECHNICAL_EFFICIENCY),
            vec![4.1, 3.6, 4.4],
        ),
        (
            Metric::cost("Processing latency", TECHNICAL_EFFICIENCY),
            vec![2.4, 2.9, 1.8],
        ),
        (
            Metric::benefit("Validation coverage", DATA_QUALITY),
            vec![4.5, 3.7, 3.9],
        ),
        (
            Metric::benefit("Anomaly detection", DATA_QUALITY),
            vec![3.6, 4.2, 4.0],
        ),
        (Metric::cost("Error rate", DATA_QUALITY), vec![1.6, 2.3, 2.0]),
        (
            Metric::benefit("Deployment automation", CI_CD),
            vec![4.4, 3.9, 4.2],
        ),
        (Metric::benefit("Rollback speed", CI_CD), vec![4.2, 3.5, 3.8]),
        (
            Metric::cost("Integration effort", CI_CD),
            vec![2.0, 2.8, 3.1],
        ),
        (
            Metric::cost("Learning curve", USER_EXPERIENCE),
            vec![1.9, 2.6, 3.4],
        ),
        (
            Metric::benefit("Documentation quality", USER_EXPERIENCE),
            vec![4.0, 4.3, 4.1],
        ),
        (
            Metric::benefit("UI responsiveness", USER_EXPERIENCE),
            vec![4.3, 4.0, 3.5],
        ),
        (
            Metric::cost("Total cost of ownership", BUSINESS_IMPACT),
            vec![2.7, 3.1, 3.6],
        ),
        (
            Metric::benefit("Time to value", BUSINESS_IMPACT),
            vec![4.6, 3.8, 3.4],
        ),
        (
            Metric::cost("Vendor lock-in", BUSINESS_IMPACT),
            vec![2.2, 3.3, 2.5],
        ),
    ];

    ScoreMatrix::new(platforms(), rows).expect("reference dataset is complete")
}

/// Survey-averaged dimension weights; sums to 1.0.
pub fn default_dimension_weights() -> BTreeMap<String, f64> {
    BTreeMap::from([
        (TECHNICAL_EFFICIENCY.to_string(), 0.24),
        (DATA_QUALITY.to_string(), 0.22),
        (CI_CD.to_string(), 0.18),
        (USER_EXPERIENCE.to_string(), 0.16),
        (BUSINESS_IMPACT.to_string(), 0.20),
    ])
}

/// Survey-averaged metric weights within each dimension; each group sums
/// to 1.0.
pub fn default_metric_weights() -> BTreeMap<String, BTreeMap<String, f64>> {
    BTreeMap::from([
        (
            TECHNICAL_EFFICIENCY.to_string(),
            BTreeMap::from([
                ("Pipeline throughput".to_string(), 0.40),
                ("Resource utilization".to_string(), 0.25),
                ("Processing latency".to_string(), 0.35),
            ]),
        ),
        (
            DATA_QUALITY.to_string(),
            BTreeMap::from([
                ("Validation coverage".to_string(), 0.40),
                ("Anomaly detection".to_string(), 0.25),
                ("Error rate".to_string(), 0.35),
            ]),
        ),
        (
            CI_CD.to_string(),
            BTreeMap::from([
                ("Deployment automation".to_string(), 0.45),
                ("Rollback speed".to_string(), 0.25),
                ("Integration effort".to_string(), 0.30),
            ]),
        ),
        (
            USER_EXPERIENCE.to_string(),
            BTreeMap::from([
                ("Learning curve".to_string(), 0.35),
                ("Documentation quality".to_string(), 0.30),
                ("UI responsiveness".to_string(), 0.35),
            ]),
        ),
        (
            BUSINESS_IMPACT.to_string(),
            BTreeMap::from([
                ("Total cost of ownership".to_string(), 0.40),
                ("Time to value".to_string(), 0.35),
                ("Vendor lock-in".to_string(), 0.25),
            ]),
        ),
    ])
}

/// The flat metric → weight map the pipeline consumes, composed from the
/// default dimension and metric weights.
pub fn default_hierarchical_weights() -> BTreeMap<String, f64> {
    weights::compose_hierarchical(&default_dimension_weights(), &default_metric_weights())
}
