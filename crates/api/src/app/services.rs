//! Service wiring: the data source and the snapshot built from it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use storelens_pipeline::{build_snapshot, run, write_snapshot_files, Snapshot};
use storelens_sources::{DataSource, FetchOutcome};

/// Shared state behind every handler: the snapshot being served plus what
/// is needed to build the next one.
///
/// Readers always get a complete snapshot; a refresh builds the new one off
/// to the side and swaps it in atomically, so in-flight requests keep the
/// snapshot they started with.
pub struct AppServices {
    source: Arc<dyn DataSource>,
    snapshot: RwLock<Arc<Snapshot>>,
    snapshot_dir: Option<PathBuf>,
}

impl AppServices {
    /// Starts with an empty snapshot; call [`AppServices::refresh`] to
    /// populate it before serving.
    pub fn new(source: Arc<dyn DataSource>, snapshot_dir: Option<PathBuf>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(Arc::new(build_snapshot(FetchOutcome::default(), Utc::now()))),
            snapshot_dir,
        }
    }

    /// The snapshot handlers should serve right now.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Build a fresh snapshot from the sources, dump it to disk if a
    /// snapshot directory is configured, and swap it in.
    ///
    /// A failed dump is logged, not fatal: the in-memory swap still happens.
    pub async fn refresh(&self) -> Arc<Snapshot> {
        let fresh = Arc::new(run(self.source.as_ref()).await);

        if let Some(dir) = &self.snapshot_dir {
            if let Err(err) = write_snapshot_files(&fresh, dir) {
                tracing::warn!("Failed to write snapshot files: {:#}", err);
            }
        }

        {
            let mut current = match self.snapshot.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *current = Arc::clone(&fresh);
        }

        fresh
    }
}
