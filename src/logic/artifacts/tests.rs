//! Artifact loading tests + shared stubs for the pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::error::SentinelError;
use crate::logic::schema::FeatureSchema;

// ============================================================================
// SHARED STUBS
// ============================================================================

/// Classifier stand-in returning a fixed verdict. Lets the pipeline and
/// analytics tests run without an ONNX file on disk.
pub struct FixedClassifier {
    pub label: i64,
    pub probabilities: Vec<f32>,
    pub importances: Vec<f32>,
}

impl Classifier for FixedClassifier {
    fn classify(&self, _features: &[f32]) -> Result<Classification, SentinelError> {
        Ok(Classification {
            label: self.label,
            probabilities: self.probabilities.clone(),
        })
    }

    fn feature_importances(&self) -> Result<Vec<f32>, SentinelError> {
        Ok(self.importances.clone())
    }
}

/// Bundle over an identity scaler and a fixed classifier.
pub fn stub_bundle(names: &[&str], importances: Vec<f32>, label: i64, probabilities: Vec<f32>) -> ArtifactBundle {
    let schema =
        FeatureSchema::from_names(names.iter().map(|s| s.to_string()).collect()).unwrap();
    let scaler = ScalerParams {
        mean: vec![0.0; names.len()],
        scale: vec![1.0; names.len()],
    };
    let classifier = FixedClassifier {
        label,
        probabilities,
        importances: importances.clone(),
    };

    ArtifactBundle::from_parts(
        schema,
        scaler,
        LabelEncoders::default(),
        importances,
        Box::new(classifier),
    )
}

/// Source serving a minimal one-feature artifact set while counting
/// every read per artifact kind.
struct CountingSource {
    reads: [AtomicUsize; 4],
}

impl CountingSource {
    fn new() -> Self {
        Self {
            reads: std::array::from_fn(|_| AtomicUsize::new(0)),
        }
    }

    fn index(kind: ArtifactKind) -> usize {
        ArtifactKind::ALL.iter().position(|k| *k == kind).unwrap()
    }

    fn reads(&self, kind: ArtifactKind) -> usize {
        self.reads[Self::index(kind)].load(Ordering::SeqCst)
    }
}

impl ArtifactSource for CountingSource {
    fn read(&self, kind: ArtifactKind) -> Result<Vec<u8>, SentinelError> {
        self.reads[Self::index(kind)].fetch_add(1, Ordering::SeqCst);
        Ok(match kind {
            ArtifactKind::FeatureNames => br#"["duration"]"#.to_vec(),
            ArtifactKind::Scaler => br#"{"mean":[0.0],"scale":[1.0]}"#.to_vec(),
            ArtifactKind::LabelEncoders => br#"{}"#.to_vec(),
            ArtifactKind::Classifier => vec![0u8; 8],
        })
    }
}

// ============================================================================
// MEMOIZATION
// ============================================================================

#[test]
fn test_memoized_load_reads_each_artifact_once() {
    let source = CountingSource::new();
    let cell = ArtifactCell::new();

    for _ in 0..2 {
        let bundle = cell
            .get_or_load(|| {
                ArtifactBundle::load_with(&source, |_bytes| {
                    let classifier = FixedClassifier {
                        label: 0,
                        probabilities: vec![1.0],
                        importances: vec![1.0],
                    };
                    Ok((Box::new(classifier) as Box<dyn Classifier>, vec![1.0]))
                })
                .map(Arc::new)
            })
            .unwrap();
        assert_eq!(bundle.schema.len(), 1);
    }

    for kind in ArtifactKind::ALL {
        assert_eq!(source.reads(kind), 1, "artifact {:?} read more than once", kind);
    }
}

#[test]
fn test_second_load_does_not_touch_source() {
    let loads = AtomicUsize::new(0);
    let cell = ArtifactCell::new();

    for _ in 0..2 {
        let bundle = cell
            .get_or_load(|| {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(stub_bundle(
                    &["duration"],
                    vec![1.0],
                    0,
                    vec![0.9, 0.1],
                )))
            })
            .unwrap();
        assert_eq!(bundle.schema.len(), 1);
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_load_is_not_memoized() {
    let cell = ArtifactCell::new();

    let err = cell
        .get_or_load(|| Err(SentinelError::EmptyDataset))
        .unwrap_err();
    assert!(matches!(err, SentinelError::EmptyDataset));
    assert!(!cell.is_loaded());

    // A later successful load still goes through.
    cell.get_or_load(|| Ok(Arc::new(stub_bundle(&["duration"], vec![1.0], 0, vec![1.0]))))
        .unwrap();
    assert!(cell.is_loaded());
}

// ============================================================================
// DIRECTORY SOURCE
// ============================================================================

#[test]
fn test_dir_source_reads_artifact_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(ArtifactKind::Scaler.file_name()),
        br#"{"mean":[0.0],"scale":[1.0]}"#,
    )
    .unwrap();

    let source = DirSource::new(dir.path().to_path_buf());
    let bytes = source.read(ArtifactKind::Scaler).unwrap();
    let scaler = ScalerParams::from_json(&bytes).unwrap();
    assert_eq!(scaler.len(), 1);
}

#[test]
fn test_artifact_kinds_map_to_distinct_files() {
    let mut names: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.file_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ArtifactKind::ALL.len());
}

#[test]
fn test_dir_source_names_the_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirSource::new(dir.path().to_path_buf());

    let err = source.read(ArtifactKind::FeatureNames).unwrap_err();
    assert!(matches!(
        err,
        SentinelError::ArtifactRead { name, .. } if name == crate::constants::FEATURE_NAMES_FILE
    ));
}

#[test]
fn test_bundle_load_fails_on_missing_artifact() {
    // Empty directory: the very first artifact read must abort the load.
    let dir = tempfile::tempdir().unwrap();
    let source = DirSource::new(dir.path().to_path_buf());

    let err = ArtifactBundle::load(&source).unwrap_err();
    assert!(matches!(err, SentinelError::ArtifactRead { .. }));
}

// ============================================================================
// CONSISTENCY CHECK
// ============================================================================

#[test]
fn test_consistency_accepts_matching_widths() {
    let bundle = stub_bundle(&["duration", "src_bytes"], vec![0.3, 0.7], 1, vec![0.2, 0.8]);
    assert!(bundle.check_consistency().is_ok());
}

#[test]
fn test_consistency_rejects_scaler_width_mismatch() {
    let mut bundle = stub_bundle(&["duration", "src_bytes"], vec![0.3, 0.7], 0, vec![1.0]);
    bundle.scaler = ScalerParams {
        mean: vec![0.0; 3],
        scale: vec![1.0; 3],
    };

    let err = bundle.check_consistency().unwrap_err();
    assert!(matches!(err, SentinelError::ArtifactMismatch(_)));
    assert!(err.to_string().contains("scaler"));
}

#[test]
fn test_consistency_rejects_importance_width_mismatch() {
    let mut bundle = stub_bundle(&["duration", "src_bytes"], vec![0.3, 0.7], 0, vec![1.0]);
    bundle.importances = vec![0.5];

    let err = bundle.check_consistency().unwrap_err();
    assert!(err.to_string().contains("importance"));
}
