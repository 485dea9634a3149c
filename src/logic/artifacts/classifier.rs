//! Classifier - ONNX Runtime Integration
//!
//! Loads and runs the exported Random Forest. Kept behind a trait so
//! the pipeline can be exercised without a real model file.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::SentinelError;

/// Output tensor names of the sklearn-to-ONNX export (zipmap disabled).
const LABEL_OUTPUT: &str = "label";
const PROBABILITIES_OUTPUT: &str = "probabilities";

/// Custom metadata key the training export writes the Random Forest's
/// importance vector into (JSON array, one entry per feature).
const IMPORTANCES_METADATA_KEY: &str = "feature_importances";

/// Output of one classifier run: predicted class plus the full
/// per-class probability vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: i64,
    pub probabilities: Vec<f32>,
}

/// Seam for inference engines (ONNX today, stub in tests).
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &[f32]) -> Result<Classification, SentinelError>;
    fn feature_importances(&self) -> Result<Vec<f32>, SentinelError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

pub struct OnnxClassifier {
    // session.run takes &mut self in ort 2.0
    session: Mutex<Session>,
    importances: Vec<f32>,
}

impl OnnxClassifier {
    /// Build a session from the raw artifact bytes.
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, SentinelError> {
        log::info!("Loading ONNX classifier from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| SentinelError::Inference(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| SentinelError::Inference(format!("optimization level: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| SentinelError::ArtifactFormat {
                name: constants::CLASSIFIER_FILE,
                reason: e.to_string(),
            })?;

        let importances = read_importances(&session)?;
        log::info!("ONNX classifier loaded ({} importance entries)", importances.len());

        Ok(Self {
            session: Mutex::new(session),
            importances,
        })
    }
}

/// Pull the importance vector out of the model's custom metadata.
fn read_importances(session: &Session) -> Result<Vec<f32>, SentinelError> {
    let metadata = session
        .metadata()
        .map_err(|e| SentinelError::Inference(format!("model metadata: {}", e)))?;

    let raw = metadata
        .custom(IMPORTANCES_METADATA_KEY)
        .ok_or_else(|| SentinelError::ArtifactFormat {
            name: constants::CLASSIFIER_FILE,
            reason: format!("missing '{}' metadata entry", IMPORTANCES_METADATA_KEY),
        })?;

    serde_json::from_str(&raw).map_err(|e| SentinelError::ArtifactFormat {
        name: constants::CLASSIFIER_FILE,
        reason: format!("bad '{}' metadata: {}", IMPORTANCES_METADATA_KEY, e),
    })
}

impl Classifier for OnnxClassifier {
    fn classify(&self, features: &[f32]) -> Result<Classification, SentinelError> {
        let input = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| SentinelError::Inference(format!("input shape: {}", e)))?;

        let input_tensor = Value::from_array(input)
            .map_err(|e| SentinelError::Inference(format!("input tensor: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| SentinelError::Inference(format!("session run: {}", e)))?;

        let label_value = outputs
            .get(LABEL_OUTPUT)
            .ok_or_else(|| SentinelError::Inference(format!("model has no '{}' output", LABEL_OUTPUT)))?;
        let (_, labels) = label_value
            .try_extract_tensor::<i64>()
            .map_err(|e| SentinelError::Inference(format!("label extract: {}", e)))?;
        let label = labels
            .first()
            .copied()
            .ok_or_else(|| SentinelError::Inference("empty label output".to_string()))?;

        let prob_value = outputs.get(PROBABILITIES_OUTPUT).ok_or_else(|| {
            SentinelError::Inference(format!("model has no '{}' output", PROBABILITIES_OUTPUT))
        })?;
        let (_, probabilities) = prob_value
            .try_extract_tensor::<f32>()
            .map_err(|e| SentinelError::Inference(format!("probability extract: {}", e)))?;

        if probabilities.is_empty() {
            return Err(SentinelError::Inference("empty probability output".to_string()));
        }

        Ok(Classification {
            label,
            probabilities: probabilities.to_vec(),
        })
    }

    fn feature_importances(&self) -> Result<Vec<f32>, SentinelError> {
        Ok(self.importances.clone())
    }
}
