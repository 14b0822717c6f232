//! Error types for snapshot resolution.
//!
//! Only conditions that abort the current test live here: missing
//! fixtures, generator faults, storage faults, and encoding faults.
//! Read failures that happen *during* comparison are not errors; the
//! comparators fold them into a failing `Comparison` so the calling
//! test decides whether that is fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort snapshot resolution for the current test.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// An input snapshot is missing and no generator was provided.
    #[error("snapshot file {} does not exist and no generator was provided", .path.display())]
    MissingFixture { path: PathBuf },

    /// A caller-supplied generator failed to produce data.
    #[error("snapshot generator failed: {source}")]
    Generator { source: io::Error },

    /// A snapshot file could not be opened or read back.
    #[error("failed to read snapshot file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The snapshot directory could not be created.
    #[error("failed to create snapshot directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// A newly recorded snapshot file could not be written.
    #[error("failed to write snapshot file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A value could not be encoded as JSON.
    #[error("failed to encode snapshot as JSON: {source}")]
    Serialize { source: serde_json::Error },
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
