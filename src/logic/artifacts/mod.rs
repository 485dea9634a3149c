//! Artifact Loading - the serialized model bundle
//!
//! Four artifacts make up a usable engine: the ONNX classifier, the
//! fitted scaler, the categorical label encoders, and the training-time
//! feature-name list. They are loaded together, checked against each
//! other, and memoized for the process lifetime; a partially loaded
//! bundle never exists.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;

use crate::constants;
use crate::error::SentinelError;
use crate::logic::schema::FeatureSchema;

pub mod classifier;
pub mod encoders;
pub mod scaler;

#[cfg(test)]
pub mod tests;

pub use classifier::{Classification, Classifier, OnnxClassifier};
pub use encoders::LabelEncoders;
pub use scaler::ScalerParams;

// ============================================================================
// ARTIFACT SOURCE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Classifier,
    Scaler,
    LabelEncoders,
    FeatureNames,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Classifier,
        ArtifactKind::Scaler,
        ArtifactKind::LabelEncoders,
        ArtifactKind::FeatureNames,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Classifier => constants::CLASSIFIER_FILE,
            ArtifactKind::Scaler => constants::SCALER_FILE,
            ArtifactKind::LabelEncoders => constants::LABEL_ENCODERS_FILE,
            ArtifactKind::FeatureNames => constants::FEATURE_NAMES_FILE,
        }
    }
}

/// Byte-level access to the artifact files. A trait seam so tests can
/// stand in for the filesystem.
pub trait ArtifactSource: Send + Sync {
    fn read(&self, kind: ArtifactKind) -> Result<Vec<u8>, SentinelError>;
}

/// Reads artifacts from a fixed directory (the `models/` folder).
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSource for DirSource {
    fn read(&self, kind: ArtifactKind) -> Result<Vec<u8>, SentinelError> {
        let path = self.dir.join(kind.file_name());
        std::fs::read(&path).map_err(|source| SentinelError::ArtifactRead {
            name: kind.file_name(),
            source,
        })
    }
}

// ============================================================================
// ARTIFACT BUNDLE
// ============================================================================

pub struct ArtifactBundle {
    pub schema: FeatureSchema,
    pub scaler: ScalerParams,
    pub encoders: LabelEncoders,
    /// Positional importance vector, one entry per schema name.
    pub importances: Vec<f32>,
    pub classifier: Box<dyn Classifier>,
    pub loaded_at: DateTime<Utc>,
}

impl std::fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("schema", &self.schema)
            .field("scaler", &self.scaler)
            .field("encoders", &self.encoders)
            .field("importances", &self.importances)
            .field("loaded_at", &self.loaded_at)
            .finish_non_exhaustive()
    }
}

impl ArtifactBundle {
    /// Deserialize all four artifacts and cross-check them. Any missing
    /// file, parse failure, or width mismatch fails the whole load.
    pub fn load(source: &dyn ArtifactSource) -> Result<Self, SentinelError> {
        Self::load_with(source, |bytes| {
            let onnx = OnnxClassifier::from_bytes(bytes)?;
            let importances = onnx.feature_importances()?;
            Ok((Box::new(onnx) as Box<dyn Classifier>, importances))
        })
    }

    /// Shared load path. The classifier builder is injected so tests can
    /// drive the full artifact read sequence without a serialized model.
    fn load_with(
        source: &dyn ArtifactSource,
        build_classifier: impl FnOnce(
            &[u8],
        )
            -> Result<(Box<dyn Classifier>, Vec<f32>), SentinelError>,
    ) -> Result<Self, SentinelError> {
        let schema = FeatureSchema::from_json(&source.read(ArtifactKind::FeatureNames)?)?;
        let scaler = ScalerParams::from_json(&source.read(ArtifactKind::Scaler)?)?;
        let encoders = LabelEncoders::from_json(&source.read(ArtifactKind::LabelEncoders)?)?;

        let model_bytes = source.read(ArtifactKind::Classifier)?;
        let (classifier, importances) = build_classifier(&model_bytes)?;

        let bundle = Self::from_parts(schema, scaler, encoders, importances, classifier);
        bundle.check_consistency()?;

        log::info!(
            "Artifact bundle loaded: {} features, {} encoded columns",
            bundle.schema.len(),
            bundle.encoders.column_count()
        );

        Ok(bundle)
    }

    pub fn from_parts(
        schema: FeatureSchema,
        scaler: ScalerParams,
        encoders: LabelEncoders,
        importances: Vec<f32>,
        classifier: Box<dyn Classifier>,
    ) -> Self {
        Self {
            schema,
            scaler,
            encoders,
            importances,
            classifier,
            loaded_at: Utc::now(),
        }
    }

    /// The scaler and importance vector must both cover exactly the
    /// columns the feature-name list declares. Whether the artifacts
    /// were fitted on the same *statistics* remains an external
    /// invariant this side cannot see.
    pub fn check_consistency(&self) -> Result<(), SentinelError> {
        let expected = self.schema.len();

        if self.scaler.len() != expected {
            return Err(SentinelError::ArtifactMismatch(format!(
                "scaler fitted on {} columns, feature list declares {}",
                self.scaler.len(),
                expected
            )));
        }

        if self.importances.len() != expected {
            return Err(SentinelError::ArtifactMismatch(format!(
                "classifier reports {} importance entries, feature list declares {}",
                self.importances.len(),
                expected
            )));
        }

        Ok(())
    }
}

// ============================================================================
// MEMOIZATION
// ============================================================================

/// Load-once cell for the artifact bundle. The second logical load in
/// the same process returns the memoized bundle without touching the
/// source again.
pub struct ArtifactCell {
    cell: OnceCell<Arc<ArtifactBundle>>,
}

impl ArtifactCell {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_load(
        &self,
        load: impl FnOnce() -> Result<Arc<ArtifactBundle>, SentinelError>,
    ) -> Result<Arc<ArtifactBundle>, SentinelError> {
        self.cell.get_or_try_init(load).cloned()
    }

    pub fn get(&self) -> Option<Arc<ArtifactBundle>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for ArtifactCell {
    fn default() -> Self {
        Self::new()
    }
}
