#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! size-snap library
//!
//! This library provides the core functionality for diffing bundle size
//! snapshots and rendering a markdown change report. It can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Classifying and rendering two in-memory snapshots:
//!
//! ```
//! use size_snap::snapshot::{
//!     collect_buckets, render_report, FileSizeRecord, SizeMeasurement, Snapshot,
//! };
//!
//! let record = FileSizeRecord {
//!     raw: SizeMeasurement { previous: 1000, current: 1300 },
//!     gzip: SizeMeasurement { previous: 500, current: 620 },
//!     brotli: SizeMeasurement { previous: 400, current: 490 },
//! };
//!
//! let mut previous = Snapshot::new();
//! let mut current = Snapshot::new();
//! previous.insert("dist/app.js".to_string(), record);
//! current.insert("dist/app.js".to_string(), record);
//!
//! // A 30% raw-size increase lands in the critical bucket.
//! let buckets = collect_buckets(&previous, &current);
//! assert_eq!(buckets.critical.len(), 1);
//! assert!(buckets.has_critical_changes());
//!
//! let report = render_report(&buckets);
//! assert!(report.contains("## Critical size changes"));
//! assert!(report.contains("▲ 300 B +30%"));
//! ```
//!
//! # Loading Snapshots From Disk
//!
//! The [`snapshot::SizeTracker`] facade reads `size-snapshot.json` and
//! `previous-snapshot.json` from a project root:
//!
//! ```no_run
//! use size_snap::snapshot::SizeTracker;
//! use std::path::Path;
//!
//! let tracker = SizeTracker::new(Path::new("."));
//! let report = tracker.report()?;
//! println!("{report}");
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Structured error types for snapshot loading
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Snapshot diff engine
pub mod snapshot;
