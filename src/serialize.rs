//! Canonical JSON rendering of values for snapshot content.
//!
//! Values are rendered as pretty-printed JSON with two-space
//! indentation and a trailing newline, so repeated runs over unchanged
//! data produce byte-identical snapshots that diff cleanly.

use std::io::{Cursor, Read};

use serde::Serialize;

use crate::errors::{SnapshotError, SnapshotResult};

/// Serialize `value` as canonical JSON and return it as a stream.
pub fn as_json<T: Serialize>(value: &T) -> SnapshotResult<Box<dyn Read>> {
    let mut bytes =
        serde_json::to_vec_pretty(value).map_err(|e| SnapshotError::Serialize { source: e })?;
    bytes.push(b'\n');
    Ok(Box::new(Cursor::new(bytes)))
}

/// Invoke `producer` once and serialize its return value as JSON.
///
/// Pairs with [`LoadOptions::with_generator`](crate::LoadOptions::with_generator)
/// when the value is expensive to compute or fetched from an external
/// source, so production only happens when a snapshot must actually be
/// (re)created.
pub fn as_json_with<T, F>(producer: F) -> SnapshotResult<Box<dyn Read>>
where
    T: Serialize,
    F: FnOnce() -> T,
{
    as_json(&producer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Record {
        name: &'static str,
        count: u32,
    }

    fn read_all(mut reader: Box<dyn Read>) -> String {
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn renders_indented_json_with_trailing_newline() {
        let reader = as_json(&Record {
            name: "hello",
            count: 2,
        })
        .unwrap();
        assert_eq!(read_all(reader), "{\n  \"name\": \"hello\",\n  \"count\": 2\n}\n");
    }

    #[test]
    fn renders_nested_structures_deterministically() {
        let records = vec![
            Record {
                name: "first",
                count: 1,
            },
            Record {
                name: "second",
                count: 2,
            },
        ];
        insta::assert_snapshot!(read_all(as_json(&records).unwrap()), @r###"
        [
          {
            "name": "first",
            "count": 1
          },
          {
            "name": "second",
            "count": 2
          }
        ]
        "###);
    }

    #[test]
    fn producer_output_serializes_like_the_value() {
        let direct = read_all(
            as_json(&Record {
                name: "hello",
                count: 2,
            })
            .unwrap(),
        );
        let produced = read_all(
            as_json_with(|| Record {
                name: "hello",
                count: 2,
            })
            .unwrap(),
        );
        assert_eq!(direct, produced);
    }

    #[test]
    fn unsupported_shapes_surface_as_errors() {
        let mut bad_keys: BTreeMap<Vec<u8>, u32> = BTreeMap::new();
        bad_keys.insert(vec![1, 2], 3);
        let err = as_json(&bad_keys).err().unwrap();
        assert!(matches!(err, SnapshotError::Serialize { .. }));
    }
}
