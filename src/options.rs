//! Per-call configuration for fixture loading and snapshot matching.
//!
//! Options are plain structs with documented defaults. They are built
//! fresh for every call, configured through chainable `with_*` methods,
//! and consumed by the call that receives them.

use std::io::{self, Read};

use crate::compare;
use crate::matcher::Comparison;
use crate::serialize;

/// Produces fixture data when no snapshot file exists yet.
///
/// A generator is invoked at most once. Its stream is drained to
/// completion before the load call returns; the bytes are persisted and
/// handed back to the caller in one pass.
pub type Generator = Box<dyn FnOnce() -> io::Result<Box<dyn Read>>>;

/// Decides equality of the expected and actual streams.
///
/// A comparator owns reading both streams and may materialize them
/// fully in memory. Read failures are reported through the returned
/// [`Comparison`], never by panicking or aborting.
pub type Comparator = Box<dyn Fn(&mut dyn Read, &mut dyn Read) -> Comparison>;

/// Transforms a stream before comparison.
///
/// Applied identically, and exactly once, to the expected and actual
/// sides. A normalizer must not assume which side it was handed.
pub type Normalizer = Box<dyn Fn(Box<dyn Read>) -> Box<dyn Read>>;

/// Options for [`load_fixture`](crate::load_fixture).
pub struct LoadOptions {
    /// Name of the snapshot to load, without extension.
    /// Defaults to `"input"`.
    pub snapshot_name: String,
    /// File extension, including the leading dot. Defaults to `".txt"`.
    pub file_extension: String,
    /// Called when the snapshot file does not exist. The resulting
    /// stream provides the input data for the current run and is
    /// persisted for future runs. Useful when the input is volatile or
    /// expensive to produce. Defaults to `None`, which makes a missing
    /// snapshot fatal.
    pub generator: Option<Generator>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            snapshot_name: "input".to_string(),
            file_extension: ".txt".to_string(),
            generator: None,
        }
    }
}

impl LoadOptions {
    /// Override the snapshot name. Useful when a test keeps several
    /// input snapshots. Does not change the file extension.
    pub fn with_name(mut self, name: &str) -> Self {
        self.snapshot_name = name.to_string();
        self
    }

    /// Override the file extension. Useful when snapshots are read by
    /// external tools that key on the extension.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.file_extension = extension.to_string();
        self
    }

    /// Override both the snapshot name and the file extension from a
    /// single filename.
    pub fn with_filename(mut self, filename: &str) -> Self {
        let (name, extension) = split_filename(filename);
        self.snapshot_name = name;
        self.file_extension = extension;
        self
    }

    /// Provide a generator for the case where no snapshot file exists.
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: FnOnce() -> io::Result<Box<dyn Read>> + 'static,
    {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Generator that hands over an existing stream.
    pub fn with_reader(self, reader: impl Read + 'static) -> Self {
        self.with_generator(move || Ok(Box::new(reader) as Box<dyn Read>))
    }

    /// Generator that serializes `value` as JSON. Switches the file
    /// extension to `".json"`.
    pub fn with_json<T>(self, value: T) -> Self
    where
        T: serde::Serialize + 'static,
    {
        self.with_extension(".json").with_generator(move || {
            serialize::as_json(&value).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        })
    }
}

/// Options for [`match_snapshot`](crate::match_snapshot).
pub struct MatchOptions {
    /// Name of the snapshot, without extension. Defaults to `"output"`.
    pub snapshot_name: String,
    /// File extension, including the leading dot. Defaults to `".txt"`.
    pub file_extension: String,
    /// Comparator deciding equality of the two streams. Defaults to
    /// [`compare::text`].
    pub comparator: Comparator,
    /// Normalizer applied to both streams before comparison. Defaults
    /// to [`compare::identity`].
    pub normalizer: Normalizer,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            snapshot_name: "output".to_string(),
            file_extension: ".txt".to_string(),
            comparator: Box::new(compare::text),
            normalizer: Box::new(compare::identity),
        }
    }
}

impl MatchOptions {
    /// Override the snapshot name. Useful when a test keeps several
    /// output snapshots. Does not change the file extension.
    pub fn with_name(mut self, name: &str) -> Self {
        self.snapshot_name = name.to_string();
        self
    }

    /// Override the file extension. Useful when snapshots are read by
    /// external tools that key on the extension.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.file_extension = extension.to_string();
        self
    }

    /// Override both the snapshot name and the file extension from a
    /// single filename.
    pub fn with_filename(mut self, filename: &str) -> Self {
        let (name, extension) = split_filename(filename);
        self.snapshot_name = name;
        self.file_extension = extension;
        self
    }

    /// Replace the default comparator.
    pub fn with_comparator<C>(mut self, comparator: C) -> Self
    where
        C: Fn(&mut dyn Read, &mut dyn Read) -> Comparison + 'static,
    {
        self.comparator = Box::new(comparator);
        self
    }

    /// Apply `normalizer` to the expected and actual streams before
    /// they reach the comparator, e.g. to sort unstable orderings.
    pub fn with_normalizer<N>(mut self, normalizer: N) -> Self
    where
        N: Fn(Box<dyn Read>) -> Box<dyn Read> + 'static,
    {
        self.normalizer = Box::new(normalizer);
        self
    }
}

/// Split `"report.json"` into `("report", ".json")`.
///
/// Only the final dot counts; a filename without one yields an empty
/// extension.
fn split_filename(filename: &str) -> (String, String) {
    match filename.rfind('.') {
        Some(idx) => (filename[..idx].to_string(), filename[idx..].to_string()),
        None => (filename.to_string(), String::new()),
    }
}
