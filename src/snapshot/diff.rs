//! Change classification and severity bucketing

use super::storage::Snapshot;

/// A file's membership status across the two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Present in both snapshots
    Kept,
    /// Present only in the current snapshot
    Added,
    /// Present only in the previous snapshot
    Deleted,
}

/// Classify a path by its membership in the two snapshots
///
/// Pure function of key-set membership; callers only invoke it for paths
/// drawn from the union of both snapshots' keys.
pub fn classify(path: &str, previous: &Snapshot, current: &Snapshot) -> ChangeStatus {
    let in_previous = previous.contains_key(path);
    let in_current = current.contains_key(path);

    if in_current && !in_previous {
        ChangeStatus::Added
    } else if in_previous && !in_current {
        ChangeStatus::Deleted
    } else {
        ChangeStatus::Kept
    }
}

/// Severity tier for a kept file's raw-size change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBucket {
    /// Raw size changed by more than 2%
    Critical,
    /// Raw size changed by more than 0.2% and at most 2%
    Significant,
    /// Raw size changed by at most 0.2%, or the percentage is undefined
    Unchanged,
}

impl SeverityBucket {
    /// Bucket a raw-metric percent delta by its unsigned magnitude
    ///
    /// `None` (undefined percentage) counts as zero magnitude. Added and
    /// deleted files are never bucketed by percentage; they have their own
    /// report sections.
    pub fn for_delta(delta: Option<f64>) -> Self {
        let magnitude = delta.map_or(0.0, f64::abs);
        if magnitude > 2.0 {
            SeverityBucket::Critical
        } else if magnitude > 0.2 {
            SeverityBucket::Significant
        } else {
            SeverityBucket::Unchanged
        }
    }
}
