use chrono::Utc;

use super::*;
use crate::logic::artifacts::tests::stub_bundle;
use crate::logic::dataset::{record, WorkingSample};

fn working_sample(class: u8) -> WorkingSample {
    let mut rec = record::fixture();
    rec.class = class;
    WorkingSample {
        id: "test-sample".to_string(),
        captured_at: Utc::now(),
        record: rec,
    }
}

fn full_schema_names() -> Vec<&'static str> {
    record::FEATURE_COLUMNS.to_vec()
}

#[test]
fn test_verdict_from_label() {
    assert_eq!(Verdict::from_label(0), Verdict::Normal);
    assert_eq!(Verdict::from_label(1), Verdict::Anomaly);
    assert_eq!(Verdict::from_label(7), Verdict::Normal);
}

#[test]
fn test_confidence_is_max_probability_in_percent() {
    assert_eq!(confidence_pct(&[0.25, 0.75]), 75.0);
    assert_eq!(confidence_pct(&[1.0, 0.0]), 100.0);
    assert_eq!(confidence_pct(&[]), 0.0);

    // Any probability vector summing to 1 stays within bounds.
    let cases: &[&[f32]] = &[&[0.5, 0.5], &[0.99, 0.01], &[0.1, 0.2, 0.7]];
    for probs in cases {
        let pct = confidence_pct(probs);
        assert!((0.0..=100.0).contains(&pct));
        let max = probs.iter().copied().fold(0.0f32, f32::max);
        assert_eq!(pct, max * 100.0);
    }
}

#[test]
fn test_scan_flags_anomaly_with_confidence() {
    let names = full_schema_names();
    let importances = vec![0.01; names.len()];
    let bundle = stub_bundle(&names, importances, 1, vec![0.08, 0.92]);

    let result = run_scan(&bundle, &working_sample(1)).unwrap();
    assert_eq!(result.verdict, Verdict::Anomaly);
    assert!((result.confidence - 92.0).abs() < 1e-4);
    assert_eq!(result.system_validation, "ANOMALY");
}

#[test]
fn test_scan_reports_ground_truth_mapping() {
    let names = full_schema_names();
    let bundle = stub_bundle(&names, vec![0.01; names.len()], 0, vec![0.97, 0.03]);

    let result = run_scan(&bundle, &working_sample(0)).unwrap();
    assert_eq!(result.verdict, Verdict::Normal);
    assert_eq!(result.system_validation, "NORMAL");

    let result = run_scan(&bundle, &working_sample(1)).unwrap();
    assert_eq!(result.system_validation, "ANOMALY");
}

#[test]
fn test_scan_is_deterministic_for_a_fixed_sample() {
    let names = full_schema_names();
    let bundle = stub_bundle(&names, vec![0.01; names.len()], 1, vec![0.2, 0.8]);
    let sample = working_sample(1);

    let first = run_scan(&bundle, &sample).unwrap();
    let second = run_scan(&bundle, &sample).unwrap();

    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.probabilities, second.probabilities);
}

#[test]
fn test_scan_fails_when_schema_exceeds_record() {
    // Schema asks for a feature the record type cannot supply.
    let bundle = stub_bundle(&["duration", "made_up_feature"], vec![0.5, 0.5], 0, vec![1.0]);

    let err = run_scan(&bundle, &working_sample(0)).unwrap_err();
    assert!(matches!(
        err,
        crate::error::SentinelError::MissingFeature(ref name) if name == "made_up_feature"
    ));
}

#[test]
fn test_scan_stats_accumulate() {
    let names = full_schema_names();
    let bundle = stub_bundle(&names, vec![0.01; names.len()], 1, vec![0.1, 0.9]);
    let stats = ScanStats::default();

    for _ in 0..3 {
        let result = run_scan(&bundle, &working_sample(1)).unwrap();
        stats.record(&result);
    }

    assert_eq!(stats.scans(), 3);
    assert_eq!(stats.anomalies(), 3);
    assert!(stats.avg_latency_ms() >= 0.0);
}
