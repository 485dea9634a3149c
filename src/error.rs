//! Error types for the Sentinel core service.
//!
//! Two error families exist: artifact/load-time failures (fatal at
//! startup) and per-request failures (reported inline to the UI). All
//! variants render as human-readable text; Tauri commands flatten them
//! to `String` at the API boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentinelError {
    /// An artifact file could not be read from the models directory.
    #[error("artifact '{name}' could not be read: {source}")]
    ArtifactRead {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file was read but its content is not what the
    /// training export produces.
    #[error("artifact '{name}' is malformed: {reason}")]
    ArtifactFormat { name: &'static str, reason: String },

    /// The artifacts disagree with each other (e.g. scaler fitted on a
    /// different feature count than the feature-name list declares).
    #[error("artifact set is inconsistent: {0}")]
    ArtifactMismatch(String),

    /// Reading or parsing the validation dataset failed.
    #[error("validation dataset error: {0}")]
    Dataset(#[from] csv::Error),

    /// The validation dataset parsed but holds no rows to sample.
    #[error("validation dataset contains no rows")]
    EmptyDataset,

    /// A scan was requested before any packet was captured.
    #[error("no packet captured yet")]
    NoWorkingSample,

    /// The loaded feature-name sequence references a feature the
    /// sample record does not carry.
    #[error("feature '{0}' is missing from the sample record")]
    MissingFeature(String),

    /// A feature vector reached the scaler with the wrong width.
    #[error("feature vector has {got} values, scaler was fitted on {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// ONNX Runtime failure during session build or inference.
    #[error("inference failed: {0}")]
    Inference(String),
}
