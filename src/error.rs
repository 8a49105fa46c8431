//! Structured error types for snapshot loading and validation
//!
//! Loader failures are fatal: a missing or malformed snapshot aborts the run
//! with an error naming the offending file, and for record-level schema
//! problems the offending path key inside it. Degenerate measurements (a
//! zero endpoint) are not errors and are handled by the renderer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or promoting snapshots
#[derive(Error, Debug)]
pub enum SizeSnapError {
    /// Snapshot file does not exist at the expected location
    #[error("Snapshot file not found: {path}")]
    SnapshotMissing {
        /// Expected snapshot location
        path: PathBuf,
    },

    /// Snapshot file is not a valid JSON object
    #[error("Failed to parse snapshot {path}")]
    SnapshotParse {
        /// Snapshot file that failed to parse
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// A file's record is missing a metric or carries an invalid size
    #[error("Malformed size record for \"{file}\" in {path}")]
    MalformedRecord {
        /// Path key of the offending record
        file: String,
        /// Snapshot file containing the record
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_input() {
        let err = SizeSnapError::SnapshotMissing {
            path: PathBuf::from("size-snapshot.json"),
        };
        assert!(err.to_string().contains("size-snapshot.json"));

        let source = serde_json::from_str::<u64>("-1").unwrap_err();
        let err = SizeSnapError::MalformedRecord {
            file: "dist/app.js".to_string(),
            path: PathBuf::from("previous-snapshot.json"),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("dist/app.js"));
        assert!(message.contains("previous-snapshot.json"));
    }

    #[test]
    fn test_errors_chain_their_sources() {
        use std::error::Error;

        let source = serde_json::from_str::<u64>("not json").unwrap_err();
        let err = SizeSnapError::SnapshotParse {
            path: PathBuf::from("size-snapshot.json"),
            source,
        };
        assert!(err.source().is_some());
    }
}
