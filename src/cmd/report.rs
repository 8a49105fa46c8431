//! Report command implementation
//!
//! Handles the default `size-snap report` command which diffs the two
//! snapshots under the project root and prints the markdown report to
//! stdout.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::fmt::WARNING;
use crate::snapshot::{render_report, SizeTracker};

/// Diff the snapshots under `project_root` and print the markdown report
///
/// With `fail_on_critical`, exits with an error when the critical section
/// has any rows (added files, deleted files, or raw-size changes above 2%),
/// so CI pipelines can gate merges on it.
///
/// # Errors
///
/// Returns an error if either snapshot file is missing, unreadable, or
/// contains a malformed record, or if `fail_on_critical` tripped.
pub fn cmd_report(project_root: &Path, fail_on_critical: bool) -> Result<()> {
    let tracker = SizeTracker::new(project_root);
    let buckets = tracker.collect()?;
    println!("{}", render_report(&buckets));

    if fail_on_critical && buckets.has_critical_changes() {
        eprintln!(
            "{} {}",
            WARNING,
            style("Critical size changes detected").red().bold()
        );
        anyhow::bail!("critical size changes detected");
    }
    Ok(())
}
