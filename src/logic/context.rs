//! Application Context - process-wide state handle
//!
//! Explicit replacement for hidden global caches: constructed once in
//! `main`, handed to Tauri via `.manage()`, and reached from commands
//! through `tauri::State`. Holds the memoized artifact bundle, the
//! single working-sample slot, and the scan counters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants;
use crate::error::SentinelError;
use crate::logic::artifacts::{ArtifactBundle, ArtifactCell, DirSource};
use crate::logic::dataset::WorkingSample;
use crate::logic::detection::ScanStats;

pub struct AppContext {
    source: DirSource,
    artifacts: ArtifactCell,
    dataset_path: PathBuf,
    working_sample: RwLock<Option<WorkingSample>>,
    scan_stats: ScanStats,
}

impl AppContext {
    pub fn new(models_dir: PathBuf) -> Self {
        let dataset_path = models_dir.join(constants::VALIDATION_DATASET_FILE);
        Self {
            source: DirSource::new(models_dir),
            artifacts: ArtifactCell::new(),
            dataset_path,
            working_sample: RwLock::new(None),
            scan_stats: ScanStats::default(),
        }
    }

    /// Load-once accessor for the artifact bundle. The first call reads
    /// and validates all four artifacts; later calls return the
    /// memoized bundle without touching the filesystem.
    pub fn artifacts(&self) -> Result<Arc<ArtifactBundle>, SentinelError> {
        self.artifacts
            .get_or_load(|| ArtifactBundle::load(&self.source).map(Arc::new))
    }

    /// The bundle if it is already in memory; never triggers a load.
    pub fn loaded_bundle(&self) -> Option<Arc<ArtifactBundle>> {
        self.artifacts.get()
    }

    pub fn model_loaded(&self) -> bool {
        self.artifacts.is_loaded()
    }

    pub fn models_dir(&self) -> &Path {
        self.source.dir()
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    pub fn working_sample(&self) -> Option<WorkingSample> {
        self.working_sample.read().clone()
    }

    pub fn set_working_sample(&self, sample: WorkingSample) {
        *self.working_sample.write() = Some(sample);
    }

    pub fn scan_stats(&self) -> &ScanStats {
        &self.scan_stats
    }
}
