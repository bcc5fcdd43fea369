//! Reading and parsing documents before they reach the engine.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{SdkError, SdkResult};

const UTF8_BOM: char = '\u{feff}';

/// Parse `text` as JSON. `name` identifies the source in errors.
///
/// A leading byte-order mark is ignored.
pub fn parse_json(name: &str, text: &str) -> SdkResult<Value> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    serde_json::from_str(text).map_err(|source| SdkError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Read and parse the JSON document at `path`.
pub fn load_json(path: &Path) -> SdkResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded JSON document");
    parse_json(&path.display().to_string(), &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_valid_text() {
        let value = parse_json("inline", r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_json("broken.json", "{\"a\": ").unwrap_err();
        match err {
            SdkError::Parse { name, .. } => assert_eq!(name, "broken.json"),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let value = parse_json("bom", "\u{feff}{\"k\": 1}").unwrap();
        assert_eq!(value, json!({"k": 1}));
    }

    #[test]
    fn key_order_is_preserved() {
        let value = parse_json("ordered", r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SdkError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{"hello": "world"}"#).unwrap();
        assert_eq!(load_json(&path).unwrap(), json!({"hello": "world"}));
    }
}
