//! Label Encoders - categorical code-to-name mapping.
//!
//! The validation dataset stores `protocol_type`, `service` and `flag`
//! as the integer codes the training pipeline assigned them. The
//! encoder artifact carries the fitted class lists (code = index) so the
//! UI can show "tcp" instead of a bare code.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::SentinelError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelEncoders {
    #[serde(flatten)]
    columns: HashMap<String, Vec<String>>,
}

impl LabelEncoders {
    /// Parse the encoder artifact from its JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SentinelError> {
        serde_json::from_slice(bytes).map_err(|e| SentinelError::ArtifactFormat {
            name: constants::LABEL_ENCODERS_FILE,
            reason: e.to_string(),
        })
    }

    /// Decode one categorical code back to its training-time class name.
    pub fn decode(&self, column: &str, code: u16) -> Option<&str> {
        self.columns
            .get(column)?
            .get(code as usize)
            .map(String::as_str)
    }

    /// Decode, falling back to the raw code when the column or code is
    /// unknown. Display-only helper; never used on the inference path.
    pub fn decode_or_code(&self, column: &str, code: u16) -> String {
        self.decode(column, code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }

    /// Number of encoded columns in the artifact.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> LabelEncoders {
        LabelEncoders::from_json(
            br#"{"protocol_type":["icmp","tcp","udp"],"flag":["REJ","S0","SF"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_known_code() {
        let encoders = fixture();
        assert_eq!(encoders.decode("protocol_type", 1), Some("tcp"));
        assert_eq!(encoders.decode("flag", 2), Some("SF"));
    }

    #[test]
    fn test_decode_unknown_column_or_code() {
        let encoders = fixture();
        assert_eq!(encoders.decode("service", 0), None);
        assert_eq!(encoders.decode("protocol_type", 99), None);
    }

    #[test]
    fn test_decode_or_code_falls_back() {
        let encoders = fixture();
        assert_eq!(encoders.decode_or_code("protocol_type", 2), "udp");
        assert_eq!(encoders.decode_or_code("service", 7), "7");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(LabelEncoders::from_json(b"[1,2,3]").is_err());
    }
}
