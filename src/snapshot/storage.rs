//! Snapshot data model and persistence (I/O)

use crate::error::SizeSnapError;
use crate::infra::FileSystem;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the current snapshot, relative to the project root
pub const CURRENT_SNAPSHOT_FILE: &str = "size-snapshot.json";

/// File name of the previous (baseline) snapshot, relative to the project root
pub const PREVIOUS_SNAPSHOT_FILE: &str = "previous-snapshot.json";

/// One metric's byte count at two points in time
///
/// On the wire the fields are named `prev` and `current`. Sizes are `u64`,
/// so negative measurements are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMeasurement {
    /// Byte count in the previous snapshot
    #[serde(rename = "prev")]
    pub previous: u64,
    /// Byte count in the current snapshot
    pub current: u64,
}

/// One file's measurements across the three size metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSizeRecord {
    /// Uncompressed size
    pub raw: SizeMeasurement,
    /// Size after gzip compression
    pub gzip: SizeMeasurement,
    /// Size after brotli compression
    pub brotli: SizeMeasurement,
}

/// Mapping from build output file path to its size record.
///
/// A `BTreeMap` keeps iteration order deterministic across process runs, so
/// the same pair of snapshots always renders byte-identical report text.
pub type Snapshot = BTreeMap<String, FileSizeRecord>;

/// Handles snapshot persistence
pub struct SnapshotStorage<FS: FileSystem> {
    project_root: PathBuf,
    fs: FS,
}

impl<FS: FileSystem> SnapshotStorage<FS> {
    /// Create storage rooted at a project directory
    pub fn new(project_root: &Path, fs: FS) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            fs,
        }
    }

    fn current_path(&self) -> PathBuf {
        self.project_root.join(CURRENT_SNAPSHOT_FILE)
    }

    fn previous_path(&self) -> PathBuf {
        self.project_root.join(PREVIOUS_SNAPSHOT_FILE)
    }

    /// Load the current snapshot
    pub fn load_current(&self) -> Result<Snapshot, SizeSnapError> {
        self.load(self.current_path())
    }

    /// Load the previous (baseline) snapshot
    pub fn load_previous(&self) -> Result<Snapshot, SizeSnapError> {
        self.load(self.previous_path())
    }

    fn load(&self, path: PathBuf) -> Result<Snapshot, SizeSnapError> {
        if !path.exists() {
            return Err(SizeSnapError::SnapshotMissing { path });
        }

        let contents = self
            .fs
            .read_to_string(&path)
            .map_err(|source| SizeSnapError::Io {
                context: format!("Failed to read snapshot file {}", path.display()),
                source,
            })?;

        // Decode record-by-record so schema errors can name the offending path.
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(&contents)
            .map_err(|source| SizeSnapError::SnapshotParse {
                path: path.clone(),
                source,
            })?;

        let mut snapshot = Snapshot::new();
        for (file, value) in entries {
            let record: FileSizeRecord =
                serde_json::from_value(value).map_err(|source| SizeSnapError::MalformedRecord {
                    file: file.clone(),
                    path: path.clone(),
                    source,
                })?;
            snapshot.insert(file, record);
        }

        debug!(
            "Loaded {} file records from {}",
            snapshot.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Copy the current snapshot over the previous one, making it the
    /// baseline for the next run
    pub fn promote(&self) -> Result<(), SizeSnapError> {
        let from = self.current_path();
        if !from.exists() {
            return Err(SizeSnapError::SnapshotMissing { path: from });
        }

        let to = self.previous_path();
        self.fs
            .copy(&from, &to)
            .map_err(|source| SizeSnapError::Io {
                context: format!(
                    "Failed to promote {} to {}",
                    from.display(),
                    to.display()
                ),
                source,
            })?;
        debug!("Promoted {} to {}", from.display(), to.display());
        Ok(())
    }
}
