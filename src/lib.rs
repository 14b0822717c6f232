//! Snapshot fixture loading and golden-output matching for tests.
//!
//! This crate persists and re-loads golden input/output data for
//! automated tests: input fixtures are created once and replayed from
//! disk on later runs, and output snapshots are recorded the first time
//! they are seen and compared against fresh output from then on. The
//! presence or absence of the on-disk file alone drives behavior;
//! deleting a snapshot file is how an operator forces re-creation.
//!
//! ## Modules
//!
//! - [`location`] - snapshot identity and on-disk placement
//! - [`options`] - per-call configuration for loading and matching
//! - [`loader`] - input fixture loading
//! - [`matcher`] - output snapshot matching
//! - [`compare`] - built-in comparators and normalizers
//! - [`serialize`] - canonical JSON rendering of values
//! - [`errors`] - error types for snapshot resolution
//!
//! ## Example
//!
//! ```no_run
//! use std::io::{Cursor, Read};
//! use snapshot_fixtures::{load_fixture, match_snapshot, LoadOptions, MatchOptions};
//!
//! # fn demo() -> snapshot_fixtures::SnapshotResult<()> {
//! let location = snapshot_fixtures::snapshot_location!();
//!
//! // Created on the first run, replayed from disk afterwards.
//! let mut input = load_fixture(
//!     &location,
//!     LoadOptions::default().with_reader(Cursor::new("hello")),
//! )?;
//! let mut text = String::new();
//! input.read_to_string(&mut text).unwrap();
//!
//! // Recorded on the first run, compared against afterwards.
//! let outcome = match_snapshot(
//!     &location,
//!     Cursor::new(text.to_uppercase()),
//!     MatchOptions::default(),
//! )?;
//! assert!(outcome.passed(), "{}", outcome.diagnostic());
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod errors;
pub mod loader;
pub mod location;
pub mod matcher;
pub mod options;
pub mod serialize;

// Re-exports for convenient access to core types
pub use errors::{SnapshotError, SnapshotResult};
pub use loader::load_fixture;
pub use location::SnapshotLocation;
pub use matcher::{match_snapshot, Comparison};
pub use options::{Comparator, Generator, LoadOptions, MatchOptions, Normalizer};
pub use serialize::{as_json, as_json_with};
