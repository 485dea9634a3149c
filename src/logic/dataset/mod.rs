//! Validation Dataset - demo packet sampling
//!
//! The labeled validation CSV is the only "traffic" this build sees:
//! the Live Detection view draws one row at random and treats it as a
//! captured packet. The file is re-read on every draw; it is a demo
//! source, not a hot path.

pub mod record;


use std::path::Path;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SentinelError;

pub use record::SampleRecord;

/// The single currently-selected validation record. Held until the next
/// draw replaces it; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingSample {
    pub id: String,
    pub captured_at: DateTime<Utc>,
    pub record: SampleRecord,
}

/// Read the full validation dataset and draw one row uniformly at
/// random. Any read or parse failure surfaces as-is; the caller keeps
/// its previous working sample in that case.
pub fn draw_sample(path: &Path) -> Result<WorkingSample, SentinelError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = reader
        .deserialize::<SampleRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(SentinelError::EmptyDataset);
    }

    let total = records.len();
    let index = rand::thread_rng().gen_range(0..total);
    let record = records.swap_remove(index);

    log::debug!("Sampled validation row {} of {}", index, total);

    Ok(WorkingSample {
        id: Uuid::new_v4().to_string(),
        captured_at: Utc::now(),
        record,
    })
}
