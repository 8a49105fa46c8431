//! Row rendering and markdown report assembly
//!
//! Row producers are pure string functions so they can be tested without
//! going through the full template. Classification always operates on the
//! original path key; sanitizing is display-only.

use crate::fmt::{format_bytes, percent_delta, render_change};

use super::diff::{classify, ChangeStatus, SeverityBucket};
use super::storage::{FileSizeRecord, Snapshot};

/// Masking token scrubbed from displayed paths
const MASK_TOKEN: &str = "*******";

/// Glob artifact left behind by the snapshot generator
const GLOB_ARTIFACT: &str = "*.";

/// Repository-internal prefix stripped for readability
const INTERNAL_PREFIX: &str = "bliss-apps/joy-web/";

const TABLE_HEADER: &str = "| File Path | +/- Raw | Base | Current | +/- Gzip | Base | Current | +/- Brotli | Base | Current |";
const TABLE_ALIGN: &str =
    "| ----------| :---| :--- | :----- | :---| :--- | :----- | :---| :--- | :----- |";

/// Strip known noisy tokens from a path for display
pub fn sanitize_path(path: &str) -> String {
    path.replacen(MASK_TOKEN, "", 1)
        .replacen(GLOB_ARTIFACT, "", 1)
        .replacen(INTERNAL_PREFIX, "", 1)
}

/// Render the table row for a file present in both snapshots
pub fn render_kept_row(path: &str, record: &FileSizeRecord) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
        sanitize_path(path),
        render_change(&record.raw),
        format_bytes(record.raw.previous, 2),
        format_bytes(record.raw.current, 2),
        render_change(&record.gzip),
        format_bytes(record.gzip.previous, 2),
        format_bytes(record.gzip.current, 2),
        render_change(&record.brotli),
        format_bytes(record.brotli.previous, 2),
        format_bytes(record.brotli.current, 2),
    )
}

/// Render the table row for a file present in only one snapshot
///
/// The status label replaces the directional glyph for all three metrics;
/// the side the file is absent from renders as `format_bytes(0)`.
pub fn render_added_or_deleted_row(
    status: ChangeStatus,
    path: &str,
    record: &FileSizeRecord,
) -> String {
    let label = match status {
        ChangeStatus::Added => "New File",
        ChangeStatus::Deleted => "Deleted",
        ChangeStatus::Kept => return render_kept_row(path, record),
    };

    let mut row = format!("| {} |", sanitize_path(path));
    for metric in [record.raw, record.gzip, record.brotli] {
        let (base, current) = match status {
            ChangeStatus::Deleted => (format_bytes(metric.previous, 2), format_bytes(0, 2)),
            _ => (format_bytes(0, 2), format_bytes(metric.current, 2)),
        };
        row.push_str(&format!(" {label} | {base} | {current} |"));
    }
    row
}

/// Aggregated report rows, grouped by section
///
/// Returned explicitly from [`collect_buckets`] rather than accumulated in
/// shared state; row order within each bucket is the encounter order of the
/// pass that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBuckets {
    /// Rows for files present only in the current snapshot
    pub added: Vec<String>,
    /// Rows for files present only in the previous snapshot
    pub deleted: Vec<String>,
    /// Rows for kept files whose raw size changed by more than 2%
    pub critical: Vec<String>,
    /// Rows for kept files whose raw size changed by more than 0.2%
    pub significant: Vec<String>,
    /// Rows for kept files with no notable raw-size change
    pub unchanged: Vec<String>,
}

impl ReportBuckets {
    /// True when the critical section would contain any rows
    pub fn has_critical_changes(&self) -> bool {
        !self.added.is_empty() || !self.deleted.is_empty() || !self.critical.is_empty()
    }
}

/// Classify every path across the two snapshots and render its report row
///
/// The added/deleted/kept partition is computed once over the union of both
/// key sets: added rows are emitted while walking the current snapshot,
/// deleted rows while walking the previous one, so each path produces
/// exactly one row.
pub fn collect_buckets(previous: &Snapshot, current: &Snapshot) -> ReportBuckets {
    let mut buckets = ReportBuckets::default();

    for (path, record) in current {
        let status = classify(path, previous, current);
        if status == ChangeStatus::Added {
            buckets
                .added
                .push(render_added_or_deleted_row(status, path, record));
            continue;
        }

        // Paths drawn from the current snapshot are Kept from here on.
        let row = render_kept_row(path, record);
        match SeverityBucket::for_delta(percent_delta(&record.raw)) {
            SeverityBucket::Critical => buckets.critical.push(row),
            SeverityBucket::Significant => buckets.significant.push(row),
            SeverityBucket::Unchanged => buckets.unchanged.push(row),
        }
    }

    for (path, record) in previous {
        if classify(path, previous, current) == ChangeStatus::Deleted {
            buckets
                .deleted
                .push(render_added_or_deleted_row(ChangeStatus::Deleted, path, record));
        }
    }

    buckets
}

fn render_section(heading: &str, subtitle: Option<&str>, row_groups: &[&[String]]) -> String {
    let mut out = String::new();
    out.push_str(heading);
    out.push('\n');
    if let Some(subtitle) = subtitle {
        out.push_str(subtitle);
        out.push('\n');
    }
    out.push_str("<details>\n<summary>Expand to show</summary>\n\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_ALIGN);
    out.push('\n');
    for group in row_groups {
        for row in *group {
            out.push_str(row);
            out.push('\n');
        }
    }
    out.push_str("</details>\n");
    out
}

/// Render the full markdown report from collected buckets
///
/// Three `<details>`-collapsible sections in fixed order; the critical
/// section's table body is added rows, then deleted rows, then critical
/// rows.
pub fn render_report(buckets: &ReportBuckets) -> String {
    let mut out = String::new();
    out.push_str(&render_section(
        "## Critical size changes",
        Some("Change greater than 2%"),
        &[&buckets.added, &buckets.deleted, &buckets.critical],
    ));
    out.push('\n');
    out.push_str(&render_section(
        "## Significant size changes",
        Some("Change lesser than or equal to 2%"),
        &[&buckets.significant],
    ));
    out.push('\n');
    out.push_str(&render_section("## No changes", None, &[&buckets.unchanged]));
    out
}
