use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub feature_count: usize,
    pub model: ModelStatus,
    pub inference: InferenceStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub engine: String, // "ONNX Runtime (CPU)"
    pub loaded: bool,
    pub loaded_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceStats {
    pub scans_run: u64,
    pub anomalies_flagged: u64,
    pub avg_latency_ms: f32,
}
