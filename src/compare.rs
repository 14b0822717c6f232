//! Built-in comparators and normalizers.
//!
//! A comparator decides whether the expected and actual streams are
//! equal and explains a mismatch; a normalizer rewrites one stream
//! before comparison. The two compose independently: any comparator
//! accepts already-normalized input without knowing which normalizer
//! ran.

use std::fmt::Write as _;
use std::io::{self, Cursor, Read};

use difference::{Changeset, Difference};

use crate::matcher::Comparison;

/// Default comparator: exact text equality.
///
/// Reads both streams fully as UTF-8 text. On mismatch the diagnostic
/// quotes both values so whitespace and control characters stay
/// visible.
pub fn text(expected: &mut dyn Read, actual: &mut dyn Read) -> Comparison {
    let expected = match read_to_string(expected) {
        Ok(text) => text,
        Err(e) => return Comparison::Mismatch(format!("failed to read expected data: {}", e)),
    };
    let actual = match read_to_string(actual) {
        Ok(text) => text,
        Err(e) => return Comparison::Mismatch(format!("failed to read actual data: {}", e)),
    };
    if expected == actual {
        Comparison::Match
    } else {
        Comparison::Mismatch(format!("expected {:?}, got {:?}", expected, actual))
    }
}

/// Line-oriented diff comparator for large or multi-line content.
///
/// Same pass/fail contract as [`text`]; the diagnostic lists every line
/// with `-` marking lines only present in the expected data and `+`
/// marking lines only present in the actual data.
pub fn line_diff(expected: &mut dyn Read, actual: &mut dyn Read) -> Comparison {
    let expected = match read_to_string(expected) {
        Ok(text) => text,
        Err(e) => return Comparison::Mismatch(format!("failed to read expected data: {}", e)),
    };
    let actual = match read_to_string(actual) {
        Ok(text) => text,
        Err(e) => return Comparison::Mismatch(format!("failed to read actual data: {}", e)),
    };
    if expected == actual {
        return Comparison::Match;
    }

    let changeset = Changeset::new(&expected, &actual, "\n");
    let mut diff = String::new();
    for change in &changeset.diffs {
        let (prefix, chunk) = match change {
            Difference::Same(chunk) => (' ', chunk),
            Difference::Rem(chunk) => ('-', chunk),
            Difference::Add(chunk) => ('+', chunk),
        };
        for line in chunk.split('\n') {
            writeln!(diff, "{} {}", prefix, line).unwrap();
        }
    }
    Comparison::Mismatch(diff)
}

/// Default normalizer: passes the stream through untouched.
pub fn identity(reader: Box<dyn Read>) -> Box<dyn Read> {
    reader
}

/// Order-insensitive normalizer: sorts the stream's lines.
///
/// Useful when the data's ordering is unstable between runs (hash
/// iteration, concurrent producers) but its contents are not. A read or
/// decode failure is deferred into the returned stream so the
/// comparator reports it against the correct side.
pub fn sorted_lines(reader: Box<dyn Read>) -> Box<dyn Read> {
    let mut reader = reader;
    let text = match read_to_string(reader.as_mut()) {
        Ok(text) => text,
        Err(e) => return Box::new(FailingReader(Some(e))),
    };
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_unstable();
    Box::new(Cursor::new(lines.join("\n").into_bytes()))
}

/// Stream that yields a deferred error on first read.
struct FailingReader(Option<io::Error>);

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        match self.0.take() {
            Some(e) => Err(e),
            None => Ok(0),
        }
    }
}

fn read_to_string(reader: &mut dyn Read) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
