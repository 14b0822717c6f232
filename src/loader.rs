//! Input fixture loading.
//!
//! Resolves named input data for a test, creating it from a
//! caller-supplied generator on first use so later runs replay the same
//! bytes from disk.

use std::fs::{self, File};
use std::io::{Cursor, ErrorKind, Read};
use std::path::Path;

use log::debug;

use crate::errors::{SnapshotError, SnapshotResult};
use crate::location::SnapshotLocation;
use crate::options::LoadOptions;

/// Load the input fixture for `location`.
///
/// If the fixture file exists its contents are returned and any
/// generator is ignored. If it does not exist and a generator was
/// provided, the generator runs exactly once: its stream is drained,
/// persisted next to the owning test, and the same bytes are returned
/// to the caller. A missing fixture with no generator is fatal.
pub fn load_fixture(
    location: &SnapshotLocation,
    options: LoadOptions,
) -> SnapshotResult<Box<dyn Read>> {
    let path = location.snapshot_path(&options.snapshot_name, &options.file_extension);
    debug!("input snapshot file: {}", path.display());

    match File::open(&path) {
        Ok(file) => {
            debug!("using existing snapshot");
            Ok(Box::new(file))
        }
        Err(ref e) if e.kind() == ErrorKind::NotFound => {
            let generator = options
                .generator
                .ok_or_else(|| SnapshotError::MissingFixture { path: path.clone() })?;
            debug!("creating new input snapshot");
            let mut reader = generator().map_err(|e| SnapshotError::Generator { source: e })?;
            let mut buffer = Vec::new();
            reader
                .read_to_end(&mut buffer)
                .map_err(|e| SnapshotError::Generator { source: e })?;
            persist(&path, &buffer)?;
            Ok(Box::new(Cursor::new(buffer)))
        }
        Err(e) => Err(SnapshotError::Read { path, source: e }),
    }
}

/// Write `bytes` to `path`, creating intermediate directories as needed.
pub(crate) fn persist(path: &Path, bytes: &[u8]) -> SnapshotResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| SnapshotError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, bytes).map_err(|e| SnapshotError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
