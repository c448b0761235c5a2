// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ManifestError;
use crate::observability::messages::manifest::{ManifestLoadFailed, ManifestLoaded};
use crate::observability::messages::StructuredLog;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Load the font manifest from a JSON file.
///
/// Reads the full file contents asynchronously, then parses them as JSON.
/// The parsed value is handed to the computation unit verbatim; its schema is
/// owned by the unit, so no validation happens here beyond what the
/// filesystem and the JSON parser enforce.
///
/// # Arguments
/// * `path` - Path to the manifest file
///
/// # Returns
/// The parsed JSON value, or:
/// * `ManifestError::FileRead` when the file is missing, unreadable, or the
///   read fails
/// * `ManifestError::Parse` when the contents are not valid JSON
///
/// Both failures are fatal at this layer; there is no retry or fallback.
pub async fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Value, ManifestError> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(source) => {
            ManifestLoadFailed {
                path,
                error: &source,
            }
            .log();
            return Err(ManifestError::file_read(path, source));
        }
    };

    let manifest: Value = match serde_json::from_str(&content) {
        Ok(manifest) => manifest,
        Err(source) => {
            ManifestLoadFailed {
                path,
                error: &source,
            }
            .log();
            return Err(ManifestError::parse(path, source));
        }
    };

    ManifestLoaded {
        path,
        bytes: content.len(),
    }
    .log();

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_valid_manifest() {
        let file = manifest_file(r#"{"fonts": []}"#);

        let manifest = load_manifest(file.path()).await.unwrap();
        assert_eq!(manifest, json!({"fonts": []}));
    }

    #[tokio::test]
    async fn manifest_value_is_arbitrary_json() {
        // The schema belongs to the unit; the loader accepts any valid JSON.
        let file = manifest_file(r#"[1, "two", {"three": 3}]"#);

        let manifest = load_manifest(file.path()).await.unwrap();
        assert_eq!(manifest, json!([1, "two", {"three": 3}]));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let result = load_manifest("dist/definitely-not-here.json").await;

        match result.unwrap_err() {
            ManifestError::FileRead { path, .. } => {
                assert_eq!(path, Path::new("dist/definitely-not-here.json"));
            }
            other => panic!("Expected FileRead error, got: {}", other),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let file = manifest_file("{not valid json");

        let result = load_manifest(file.path()).await;

        match result.unwrap_err() {
            ManifestError::Parse { path, .. } => {
                assert_eq!(path, file.path());
            }
            other => panic!("Expected Parse error, got: {}", other),
        }
    }
}
