//! Snapshot identity and on-disk placement.
//!
//! Every snapshot belongs to exactly one test. A [`SnapshotLocation`]
//! pairs the test's source file with a stable test name; artifacts live
//! in a `__snapshots__` directory next to that source file, keyed by the
//! test name, so two tests never collide even when they reuse a
//! snapshot name.

use std::path::{Path, PathBuf};

/// Identifies the test that owns a set of snapshot files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLocation {
    source_file: PathBuf,
    test_name: String,
}

impl SnapshotLocation {
    /// Create a location from a test source file and a stable test name.
    ///
    /// Prefer the `snapshot_location!` macro inside tests; this
    /// constructor is for code that manages the snapshot root
    /// explicitly (temporary directories, committed fixture trees).
    pub fn new(source_file: impl Into<PathBuf>, test_name: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            test_name: test_name.into(),
        }
    }

    /// The test source file this location is anchored to.
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// The unique name of the owning test.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Path of the snapshot named `name` + `extension` for this test:
    /// `<dir of source file>/__snapshots__/<test name>/<name><extension>`.
    pub fn snapshot_path(&self, name: &str, extension: &str) -> PathBuf {
        let dir = match self.source_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        dir.join("__snapshots__")
            .join(&self.test_name)
            .join(format!("{}{}", name, extension))
    }
}

/// Derive a stable test name from a fully qualified function path.
///
/// Strips the crate segment and the `::{{closure}}` frames the compiler
/// adds inside test bodies, then joins the remaining module path with
/// `__` so the name is usable as a single directory component.
pub fn test_name_from_fn_path(path: &str) -> String {
    let mut path = path.strip_suffix("::f").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    let without_crate = match path.find("::") {
        Some(idx) => &path[idx + 2..],
        None => path,
    };
    without_crate.replace("::", "__")
}

/// Expands to the name of the enclosing test function, suitable as a
/// snapshot directory component.
#[macro_export]
macro_rules! test_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::location::test_name_from_fn_path(type_name_of(f))
    }};
}

/// Expands to the [`SnapshotLocation`] of the enclosing test function.
///
/// The source file path comes from `file!()` and is therefore relative
/// to the directory `cargo test` runs from.
///
/// [`SnapshotLocation`]: crate::SnapshotLocation
#[macro_export]
macro_rules! snapshot_location {
    () => {
        $crate::SnapshotLocation::new(file!(), $crate::test_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_strips_crate_and_closure_frames() {
        assert_eq!(
            test_name_from_fn_path("my_crate::suite::case_one::f"),
            "suite__case_one"
        );
        assert_eq!(
            test_name_from_fn_path("my_crate::case_two::{{closure}}::f"),
            "case_two"
        );
        assert_eq!(test_name_from_fn_path("bare::f"), "bare");
    }

    #[test]
    fn test_name_macro_names_the_enclosing_function() {
        assert_eq!(
            test_name!(),
            "location__tests__test_name_macro_names_the_enclosing_function"
        );
    }

    #[test]
    fn snapshot_path_is_scoped_to_the_test() {
        let location = SnapshotLocation::new("tests/suite.rs", "case_one");
        assert_eq!(
            location.snapshot_path("input", ".txt"),
            Path::new("tests/__snapshots__/case_one/input.txt")
        );
    }

    #[test]
    fn snapshot_path_handles_bare_source_files() {
        let location = SnapshotLocation::new("suite.rs", "case_one");
        assert_eq!(
            location.snapshot_path("output", ".json"),
            Path::new("./__snapshots__/case_one/output.json")
        );
    }
}
