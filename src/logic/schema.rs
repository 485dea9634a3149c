//! Feature Schema - training-time feature order
//!
//! Runtime counterpart of a compiled-in feature layout: the
//! authoritative column order comes from the `feature_names.json`
//! artifact, not from this crate. Every vector handed to the scaler and
//! classifier MUST be aligned through this schema first, or predictions
//! are silently wrong.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::SentinelError;
use crate::logic::dataset::record::SampleRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Parse the feature-name artifact from its JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SentinelError> {
        let names: Vec<String> =
            serde_json::from_slice(bytes).map_err(|e| SentinelError::ArtifactFormat {
                name: constants::FEATURE_NAMES_FILE,
                reason: e.to_string(),
            })?;
        Self::from_names(names)
    }

    pub fn from_names(names: Vec<String>) -> Result<Self, SentinelError> {
        if names.is_empty() {
            return Err(SentinelError::ArtifactFormat {
                name: constants::FEATURE_NAMES_FILE,
                reason: "empty feature list".to_string(),
            });
        }

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(SentinelError::ArtifactFormat {
                    name: constants::FEATURE_NAMES_FILE,
                    reason: format!("duplicate feature name '{}'", name),
                });
            }
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Feature names in training-time order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Build the model input vector for one sample record: the i-th
    /// output value is the record's value for the i-th schema name.
    /// Fails eagerly, naming the first feature the record cannot supply.
    pub fn align(&self, record: &SampleRecord) -> Result<Vec<f32>, SentinelError> {
        self.names
            .iter()
            .map(|name| {
                record
                    .feature(name)
                    .ok_or_else(|| SentinelError::MissingFeature(name.clone()))
            })
            .collect()
    }
}
