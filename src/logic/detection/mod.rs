//! Detection Pipeline - scan one captured packet
//!
//! Stateless, synchronous flow: drop the ground truth, align to the
//! training-time feature order, scale, classify, read back verdict and
//! confidence. Invoked once per user-initiated scan.

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::SentinelError;
use crate::logic::artifacts::ArtifactBundle;
use crate::logic::dataset::WorkingSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Normal,
    Anomaly,
}

impl Verdict {
    /// Binary classifier labels: 1 is the anomaly class, everything
    /// else is treated as normal.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Verdict::Anomaly
        } else {
            Verdict::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Normal => "NORMAL",
            Verdict::Anomaly => "ANOMALY",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub verdict: Verdict,
    /// Maximum class probability, as a percentage.
    pub confidence: f32,
    pub probabilities: Vec<f32>,
    /// Ground-truth label of the scanned sample ("System Validation").
    pub system_validation: String,
    pub inference_time_us: u64,
}

/// Confidence is the maximum class probability, scaled to percent.
pub fn confidence_pct(probabilities: &[f32]) -> f32 {
    let max = probabilities.iter().copied().fold(0.0f32, f32::max);
    (max * 100.0).clamp(0.0, 100.0)
}

/// Run the full inference pipeline on one working sample.
pub fn run_scan(
    bundle: &ArtifactBundle,
    sample: &WorkingSample,
) -> Result<ScanResult, SentinelError> {
    let start = std::time::Instant::now();

    // The record type already excludes `class` from feature lookups;
    // alignment is where the ground truth gets dropped.
    let aligned = bundle.schema.align(&sample.record)?;
    let scaled = bundle.scaler.transform(&aligned)?;
    let classification = bundle.classifier.classify(&scaled)?;

    let verdict = Verdict::from_label(classification.label);
    let confidence = confidence_pct(&classification.probabilities);

    Ok(ScanResult {
        verdict,
        confidence,
        probabilities: classification.probabilities,
        system_validation: sample.record.validation_label().to_string(),
        inference_time_us: start.elapsed().as_micros() as u64,
    })
}

// ============================================================================
// SCAN COUNTERS
// ============================================================================

/// Rolling counters for the engine status view. Lives in the app
/// context, not in a process global.
#[derive(Debug, Default)]
pub struct ScanStats {
    scans: AtomicU64,
    anomalies: AtomicU64,
    latency_sum_us: AtomicU64,
}

impl ScanStats {
    pub fn record(&self, result: &ScanResult) {
        self.scans.fetch_add(1, Ordering::Relaxed);
        if result.verdict == Verdict::Anomaly {
            self.anomalies.fetch_add(1, Ordering::Relaxed);
        }
        self.latency_sum_us
            .fetch_add(result.inference_time_us, Ordering::Relaxed);
    }

    pub fn scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    pub fn anomalies(&self) -> u64 {
        self.anomalies.load(Ordering::Relaxed)
    }

    pub fn avg_latency_ms(&self) -> f32 {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.scans();
        if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        }
    }
}
