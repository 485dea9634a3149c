//! Tauri Commands - API for the three dashboard views
//!
//! Overview, Live Detection and AI Analytics each call a small set of
//! commands. All handlers flatten errors to `String` at the boundary;
//! the frontend renders them as inline notices.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::api::engine_status::{EngineStatus, InferenceStats, ModelStatus};
use crate::error::SentinelError;
use crate::logic::artifacts::ArtifactBundle;
use crate::logic::context::AppContext;
use crate::logic::dataset::WorkingSample;
use crate::logic::detection::Verdict;
use crate::logic::{analytics, dataset, detection, status};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Overview card numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub cpu_usage: f32,
    pub memory_usage: f32,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    pub process_count: usize,
    pub model_loaded: bool,
    pub scans_run: u64,
    pub anomalies_detected: u64,
    pub last_checked: String,
}

/// One hour of the simulated 24h traffic chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub hour: u8,
    pub normal_requests: u32,
    pub filtered_anomalies: u32,
}

/// Packet metadata table shown after a capture. Categorical codes are
/// decoded through the label-encoder artifact; the ground-truth label
/// is deliberately not exposed until a scan runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePreview {
    pub id: String,
    pub captured_at: String,
    pub duration: u64,
    pub protocol_type: String,
    pub service: String,
    pub flag: String,
    pub src_bytes: u64,
    pub dst_bytes: u64,
}

/// Scan verdict payload for the Live Detection view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub verdict: String,
    pub threat_detected: bool,
    pub confidence: f32,
    pub system_validation: String,
    pub inference_time_us: u64,
    pub probabilities: Vec<f32>,
}

fn preview_of(bundle: &ArtifactBundle, sample: &WorkingSample) -> SamplePreview {
    let record = &sample.record;
    SamplePreview {
        id: sample.id.clone(),
        captured_at: sample.captured_at.to_rfc3339(),
        duration: record.duration,
        protocol_type: bundle
            .encoders
            .decode_or_code("protocol_type", record.protocol_type),
        service: bundle.encoders.decode_or_code("service", record.service),
        flag: bundle.encoders.decode_or_code("flag", record.flag),
        src_bytes: record.src_bytes,
        dst_bytes: record.dst_bytes,
    }
}

// ============================================================================
// OVERVIEW COMMANDS
// ============================================================================

/// Card metrics for the overview dashboard (LIVE)
#[tauri::command]
pub async fn get_system_status(context: State<'_, AppContext>) -> Result<SystemStatus, String> {
    let metrics = status::sample_host();
    let stats = context.scan_stats();

    Ok(SystemStatus {
        cpu_usage: metrics.cpu_usage,
        memory_usage: metrics.memory_percent,
        memory_used_mb: metrics.memory_used_mb,
        memory_total_mb: metrics.memory_total_mb,
        process_count: metrics.process_count,
        model_loaded: context.model_loaded(),
        scans_run: stats.scans(),
        anomalies_detected: stats.anomalies(),
        last_checked: chrono::Utc::now().to_rfc3339(),
    })
}

/// Engine summary for the overview sidebar
#[tauri::command]
pub async fn get_engine_status(context: State<'_, AppContext>) -> Result<EngineStatus, String> {
    let bundle = context.loaded_bundle();
    let stats = context.scan_stats();

    Ok(EngineStatus {
        feature_count: bundle.as_ref().map(|b| b.schema.len()).unwrap_or(0),
        model: ModelStatus {
            engine: "ONNX Runtime (CPU)".to_string(),
            loaded: bundle.is_some(),
            loaded_at: bundle.map(|b| b.loaded_at.to_rfc3339()),
        },
        inference: InferenceStats {
            scans_run: stats.scans(),
            anomalies_flagged: stats.anomalies(),
            avg_latency_ms: stats.avg_latency_ms(),
        },
    })
}

/// Simulated 24h traffic series for the overview area chart. The
/// dashboard charts ambience, not recorded traffic.
#[tauri::command]
pub async fn get_traffic_snapshot() -> Result<Vec<TrafficPoint>, String> {
    let mut rng = rand::thread_rng();
    Ok((0..24)
        .map(|hour| TrafficPoint {
            hour,
            normal_requests: rng.gen_range(50..100),
            filtered_anomalies: rng.gen_range(50..100),
        })
        .collect())
}

// ============================================================================
// LIVE DETECTION COMMANDS
// ============================================================================

/// Draw one random row from the validation dataset and make it the
/// working sample. On failure the previous sample stays in place.
#[tauri::command]
pub async fn capture_sample(context: State<'_, AppContext>) -> Result<SamplePreview, String> {
    let bundle = context.artifacts().map_err(|e| e.to_string())?;
    let sample = dataset::draw_sample(context.dataset_path()).map_err(|e| e.to_string())?;

    let preview = preview_of(&bundle, &sample);
    log::info!("Captured validation sample {}", sample.id);
    context.set_working_sample(sample);

    Ok(preview)
}

/// The current working sample, if any.
#[tauri::command]
pub async fn get_current_sample(
    context: State<'_, AppContext>,
) -> Result<Option<SamplePreview>, String> {
    let bundle = context.artifacts().map_err(|e| e.to_string())?;
    Ok(context
        .working_sample()
        .map(|sample| preview_of(&bundle, &sample)))
}

/// Run the inference pipeline on the working sample.
#[tauri::command]
pub async fn run_scan(context: State<'_, AppContext>) -> Result<ScanReport, String> {
    let bundle = context.artifacts().map_err(|e| e.to_string())?;
    let sample = context
        .working_sample()
        .ok_or_else(|| SentinelError::NoWorkingSample.to_string())?;

    let result = detection::run_scan(&bundle, &sample).map_err(|e| e.to_string())?;
    context.scan_stats().record(&result);

    match result.verdict {
        Verdict::Anomaly => log::warn!(
            "Threat detected in sample {} (confidence {:.2}%)",
            sample.id,
            result.confidence
        ),
        Verdict::Normal => log::info!(
            "Sample {} classified clean (confidence {:.2}%)",
            sample.id,
            result.confidence
        ),
    }

    Ok(ScanReport {
        verdict: result.verdict.as_str().to_string(),
        threat_detected: result.verdict == Verdict::Anomaly,
        confidence: result.confidence,
        system_validation: result.system_validation,
        inference_time_us: result.inference_time_us,
        probabilities: result.probabilities,
    })
}

// ============================================================================
// AI ANALYTICS COMMANDS
// ============================================================================

/// Top feature importances for the analytics bar chart.
#[tauri::command]
pub async fn get_threat_indicators(
    context: State<'_, AppContext>,
    limit: Option<usize>,
) -> Result<Vec<analytics::ThreatIndicator>, String> {
    let bundle = context.artifacts().map_err(|e| e.to_string())?;
    Ok(analytics::top_indicators(
        &bundle,
        limit.unwrap_or(analytics::TOP_INDICATORS),
    ))
}

/// Model metadata for the analytics header
#[tauri::command]
pub async fn get_model_metadata(
    context: State<'_, AppContext>,
) -> Result<serde_json::Value, String> {
    let bundle = context.artifacts().map_err(|e| e.to_string())?;

    Ok(serde_json::json!({
        "engine": "ONNX Runtime (CPU)",
        "feature_count": bundle.schema.len(),
        "encoded_columns": bundle.encoders.column_count(),
        "classes": ["NORMAL", "ANOMALY"],
        "loaded_at": bundle.loaded_at.to_rfc3339(),
    }))
}
