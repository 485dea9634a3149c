//! Model Insights - feature importance report
//!
//! Pairs the classifier's importance vector positionally with the
//! feature names and keeps the strongest indicators for the AI
//! Analytics view. Purely derived; recomputed on every view.

use serde::{Deserialize, Serialize};

use crate::logic::artifacts::ArtifactBundle;

/// Default number of indicators shown by the analytics view.
pub const TOP_INDICATORS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatIndicator {
    pub feature: String,
    pub influence: f32,
}

/// The `limit` highest-influence features, returned in ascending order
/// (horizontal bar charts draw bottom-up). The sort is stable: equal
/// influences keep the schema order.
pub fn top_indicators(bundle: &ArtifactBundle, limit: usize) -> Vec<ThreatIndicator> {
    let mut paired: Vec<ThreatIndicator> = bundle
        .schema
        .names()
        .iter()
        .cloned()
        .zip(bundle.importances.iter().copied())
        .map(|(feature, influence)| ThreatIndicator { feature, influence })
        .collect();

    paired.sort_by(|a, b| {
        a.influence
            .partial_cmp(&b.influence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let keep_from = paired.len().saturating_sub(limit);
    paired.split_off(keep_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::artifacts::tests::stub_bundle;

    #[test]
    fn test_returns_at_most_limit_entries_ascending() {
        let names: Vec<String> = (0..15).map(|i| format!("feature_{}", i)).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let importances: Vec<f32> = (0..15).map(|i| i as f32 / 15.0).collect();
        let bundle = stub_bundle(&name_refs, importances, 0, vec![1.0]);

        let report = top_indicators(&bundle, TOP_INDICATORS);
        assert_eq!(report.len(), 10);

        for pair in report.windows(2) {
            assert!(pair[0].influence <= pair[1].influence);
        }

        // The weakest five features never make the report.
        assert_eq!(report[0].feature, "feature_5");
        assert_eq!(report[9].feature, "feature_14");
    }

    #[test]
    fn test_short_importance_vector_is_returned_whole() {
        let bundle = stub_bundle(&["duration", "src_bytes"], vec![0.9, 0.1], 0, vec![1.0]);

        let report = top_indicators(&bundle, TOP_INDICATORS);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].feature, "src_bytes");
        assert_eq!(report[1].feature, "duration");
    }

    #[test]
    fn test_equal_influences_keep_schema_order() {
        let bundle = stub_bundle(
            &["alpha", "beta", "gamma"],
            vec![0.5, 0.5, 0.5],
            0,
            vec![1.0],
        );

        let report = top_indicators(&bundle, 3);
        let order: Vec<&str> = report.iter().map(|i| i.feature.as_str()).collect();
        assert_eq!(order, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_zero_limit_yields_empty_report() {
        let bundle = stub_bundle(&["duration"], vec![1.0], 0, vec![1.0]);
        assert!(top_indicators(&bundle, 0).is_empty());
    }
}
