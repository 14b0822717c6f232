//! Output snapshot matching.
//!
//! Resolves a named snapshot for the calling test and compares fresh
//! output against it. When no snapshot exists the actual output is
//! accepted as ground truth, persisted, and compared against its own
//! recorded copy, so a first run always passes and later runs are held
//! to the recorded bytes until an operator deletes the file.

use std::fs::File;
use std::io::{Cursor, ErrorKind, Read};

use log::debug;

use crate::errors::{SnapshotError, SnapshotResult};
use crate::loader::persist;
use crate::location::SnapshotLocation;
use crate::options::MatchOptions;

/// Outcome of comparing actual output against a recorded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Expected and actual were deemed equal.
    Match,
    /// The values differed, or one side could not be read. Carries a
    /// human-readable explanation.
    Mismatch(String),
}

impl Comparison {
    /// Whether the comparison passed.
    pub fn passed(&self) -> bool {
        matches!(self, Comparison::Match)
    }

    /// The diagnostic message; empty for a passing comparison.
    pub fn diagnostic(&self) -> &str {
        match self {
            Comparison::Match => "",
            Comparison::Mismatch(msg) => msg,
        }
    }
}

/// Compare `actual` against the recorded snapshot for `location`.
///
/// A missing snapshot is recorded from `actual` and the call reports a
/// pass; an existing snapshot is normalized alongside `actual` and
/// handed to the comparator. Storage faults are fatal. Read failures
/// during comparison come back as a failing [`Comparison`] so the
/// calling test decides whether they are fatal.
pub fn match_snapshot(
    location: &SnapshotLocation,
    actual: impl Read + 'static,
    options: MatchOptions,
) -> SnapshotResult<Comparison> {
    let path = location.snapshot_path(&options.snapshot_name, &options.file_extension);
    debug!("output snapshot file: {}", path.display());

    let (expected, actual): (Box<dyn Read>, Box<dyn Read>) = match File::open(&path) {
        Ok(file) => {
            debug!("using existing snapshot");
            (Box::new(file), Box::new(actual))
        }
        Err(ref e) if e.kind() == ErrorKind::NotFound => {
            debug!("recording new output snapshot");
            let mut actual = actual;
            let mut buffer = Vec::new();
            actual.read_to_end(&mut buffer).map_err(|e| SnapshotError::Write {
                path: path.clone(),
                source: e,
            })?;
            persist(&path, &buffer)?;
            let recorded = File::open(&path).map_err(|e| SnapshotError::Read {
                path: path.clone(),
                source: e,
            })?;
            (Box::new(recorded), Box::new(Cursor::new(buffer)))
        }
        Err(e) => return Err(SnapshotError::Read { path, source: e }),
    };

    let mut expected = (options.normalizer)(expected);
    let mut actual = (options.normalizer)(actual);
    Ok((options.comparator)(expected.as_mut(), actual.as_mut()))
}
