//! Central Configuration Constants
//!
//! Single source of truth for artifact locations and file names.
//! To relocate the model directory, only edit this file (or set the
//! environment override).

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Sentinel AI";

/// Default directory holding the serialized artifacts and the
/// labeled validation dataset, relative to the working directory.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Serialized Random Forest classifier (ONNX export).
pub const CLASSIFIER_FILE: &str = "rf_classifier.onnx";

/// Fitted feature scaler parameters (JSON).
pub const SCALER_FILE: &str = "scaler.json";

/// Categorical label encoders fitted at training time (JSON).
pub const LABEL_ENCODERS_FILE: &str = "label_encoders.json";

/// Training-time feature order (JSON list of names).
pub const FEATURE_NAMES_FILE: &str = "feature_names.json";

/// Labeled validation dataset used as the sampling source.
pub const VALIDATION_DATASET_FILE: &str = "validation_with_labels.csv";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the models directory from environment or use default
pub fn models_dir() -> PathBuf {
    std::env::var("SENTINEL_MODELS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODELS_DIR))
}
