//! Feature Scaler - standard-scaler parameters exported at training time.
//!
//! The scaler is fitted externally; this side only replays the affine
//! transform `(x - mean) / scale` per column.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::SentinelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerParams {
    /// Parse the scaler artifact from its JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SentinelError> {
        let params: ScalerParams =
            serde_json::from_slice(bytes).map_err(|e| SentinelError::ArtifactFormat {
                name: constants::SCALER_FILE,
                reason: e.to_string(),
            })?;

        if params.mean.len() != params.scale.len() {
            return Err(SentinelError::ArtifactFormat {
                name: constants::SCALER_FILE,
                reason: format!(
                    "mean has {} entries, scale has {}",
                    params.mean.len(),
                    params.scale.len()
                ),
            });
        }

        Ok(params)
    }

    /// Number of feature columns the scaler was fitted on.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Apply the fitted transform to one feature vector.
    ///
    /// Columns with a near-zero scale (constant at training time) map
    /// to 0.0 instead of dividing by noise.
    pub fn transform(&self, values: &[f32]) -> Result<Vec<f32>, SentinelError> {
        if values.len() != self.mean.len() {
            return Err(SentinelError::LengthMismatch {
                expected: self.mean.len(),
                got: values.len(),
            });
        }

        Ok(values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let scale = self.scale[i];
                if scale.abs() < 1e-8 {
                    0.0
                } else {
                    ((value as f64 - self.mean[i]) / scale) as f32
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_applies_mean_and_scale() {
        let scaler = ScalerParams {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 4.0],
        };

        let out = scaler.transform(&[14.0, 8.0]).unwrap();
        assert_eq!(out, vec![2.0, 2.0]);
    }

    #[test]
    fn test_transform_zero_scale_column() {
        let scaler = ScalerParams {
            mean: vec![5.0],
            scale: vec![0.0],
        };

        let out = scaler.transform(&[123.0]).unwrap();
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn test_transform_rejects_wrong_width() {
        let scaler = ScalerParams {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };

        let err = scaler.transform(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            SentinelError::LengthMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_from_json_rejects_uneven_vectors() {
        let raw = br#"{"mean":[0.0,1.0],"scale":[1.0]}"#;
        assert!(ScalerParams::from_json(raw).is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let raw = br#"{"mean":[0.5,1.5],"scale":[1.0,2.0]}"#;
        let scaler = ScalerParams::from_json(raw).unwrap();
        assert_eq!(scaler.len(), 2);
        assert_eq!(scaler.mean, vec![0.5, 1.5]);
    }
}
