//! Test fixture creation utilities

use std::fs;
use std::io;
use std::path::Path;

/// File name the binary reads the current snapshot from
pub const CURRENT_SNAPSHOT_FILE: &str = "size-snapshot.json";

/// File name the binary reads the previous snapshot from
pub const PREVIOUS_SNAPSHOT_FILE: &str = "previous-snapshot.json";

/// Build one file's snapshot record with identical gzip/brotli shares
/// derived from the raw measurements
#[allow(dead_code)]
pub fn record(raw_prev: u64, raw_current: u64) -> String {
    format!(
        r#"{{
            "raw": {{"prev": {raw_prev}, "current": {raw_current}}},
            "gzip": {{"prev": {}, "current": {}}},
            "brotli": {{"prev": {}, "current": {}}}
        }}"#,
        raw_prev / 2,
        raw_current / 2,
        raw_prev / 3,
        raw_current / 3,
    )
}

/// Build a snapshot document from (path, record) pairs
#[allow(dead_code)]
pub fn snapshot(entries: &[(&str, String)]) -> String {
    let body = entries
        .iter()
        .map(|(path, record)| format!("\"{path}\": {record}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{{\n{body}\n}}")
}

/// Write both snapshot files into `dir`
#[allow(dead_code)]
pub fn write_snapshots(dir: &Path, previous: &str, current: &str) -> io::Result<()> {
    fs::write(dir.join(PREVIOUS_SNAPSHOT_FILE), previous)?;
    fs::write(dir.join(CURRENT_SNAPSHOT_FILE), current)?;
    Ok(())
}
