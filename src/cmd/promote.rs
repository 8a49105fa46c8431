//! Promote command implementation
//!
//! Handles `size-snap promote`, which copies the current snapshot over the
//! previous one so the next CI run diffs against it.

use anyhow::Result;
use std::path::Path;

use crate::fmt::CHECKMARK;
use crate::snapshot::{SizeTracker, CURRENT_SNAPSHOT_FILE, PREVIOUS_SNAPSHOT_FILE};

/// Make the current snapshot the baseline for the next run
///
/// # Errors
///
/// Returns an error if the current snapshot is missing or the copy fails.
pub fn cmd_promote(project_root: &Path) -> Result<()> {
    let tracker = SizeTracker::new(project_root);
    tracker.promote()?;
    println!(
        "{} Promoted {} to {}",
        CHECKMARK, CURRENT_SNAPSHOT_FILE, PREVIOUS_SNAPSHOT_FILE
    );
    Ok(())
}
