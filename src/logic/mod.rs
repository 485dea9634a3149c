//! Logic Module - Business Logic & Engines
//!
//! ## Layout
//! - `artifacts/` - serialized model bundle (classifier, scaler, encoders)
//! - `schema` - training-time feature order and alignment
//! - `dataset/` - validation set sampling (the demo traffic source)
//! - `detection/` - the inference pipeline
//! - `analytics` - feature importance report
//! - `status` - live host metrics for the overview
//! - `context` - process-wide state handle

pub mod analytics;
pub mod artifacts;
pub mod context;
pub mod dataset;
pub mod detection;
pub mod schema;
pub mod status;
