//! Snapshot diff engine
//!
//! Loads the previous and current size snapshots, classifies every file's
//! change (kept / added / deleted), buckets kept files by the magnitude of
//! their raw-size change, and renders the markdown report.

mod diff;
mod report;
pub mod storage;

pub use diff::{classify, ChangeStatus, SeverityBucket};
pub use report::{
    collect_buckets, render_added_or_deleted_row, render_kept_row, render_report, sanitize_path,
    ReportBuckets,
};
pub use storage::{
    FileSizeRecord, SizeMeasurement, Snapshot, SnapshotStorage, CURRENT_SNAPSHOT_FILE,
    PREVIOUS_SNAPSHOT_FILE,
};

use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::path::Path;

/// Snapshot diff driver
///
/// Wires storage, classification and rendering together behind one facade.
/// Both snapshots are materialized fully before classification starts; the
/// whole diff is a single synchronous pass over the union of their keys.
pub struct SizeTracker<FS: FileSystem = RealFileSystem> {
    storage: SnapshotStorage<FS>,
}

impl SizeTracker<RealFileSystem> {
    /// Create a tracker reading snapshots from `project_root` on the real
    /// filesystem
    pub fn new(project_root: &Path) -> Self {
        Self::with_fs(project_root, RealFileSystem)
    }
}

impl<FS: FileSystem> SizeTracker<FS> {
    /// Create a tracker with a custom filesystem implementation
    pub fn with_fs(project_root: &Path, fs: FS) -> Self {
        Self {
            storage: SnapshotStorage::new(project_root, fs),
        }
    }

    /// Load both snapshots and collect report rows into buckets
    pub fn collect(&self) -> Result<ReportBuckets> {
        let previous = self.storage.load_previous()?;
        let current = self.storage.load_current()?;
        Ok(collect_buckets(&previous, &current))
    }

    /// Render the full markdown report
    pub fn report(&self) -> Result<String> {
        Ok(render_report(&self.collect()?))
    }

    /// Copy the current snapshot over the previous one, making it the
    /// baseline for the next run
    pub fn promote(&self) -> Result<()> {
        self.storage.promote()?;
        Ok(())
    }
}
