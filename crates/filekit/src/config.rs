//! Loading style files from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{FileError, Result};

/// Parses a YAML (`.yaml`, `.yml`) or JSON (`.json`) file into `T`.
///
/// Any other extension is read as YAML, which also accepts JSON documents.
pub fn load_style<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config_error = |message: String| FileError::Config {
        path: path.to_path_buf(),
        message,
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text).map_err(|err| config_error(err.to_string())),
        _ => serde_yaml::from_str(&text).map_err(|err| config_error(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filekit_render::{Align, BlockStyleOverride, TableStyleOverride};
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("block.yml");
        fs::write(&path, "align: center\npadv: 2\n").unwrap();

        let custom: BlockStyleOverride = load_style(&path).unwrap();
        assert_eq!(custom.align, Some(Align::Center));
        assert_eq!(custom.padv, Some(2));
    }

    #[test]
    fn test_load_json_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.json");
        fs::write(&path, r#"{"rowlabel": false, "cols": {"0": {"width": 8}}}"#).unwrap();

        let custom: TableStyleOverride = load_style(&path).unwrap();
        assert_eq!(custom.rowlabel, Some(false));
        assert_eq!(custom.cols.len(), 1);
    }

    #[test]
    fn test_bad_document_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();

        let err = load_style::<BlockStyleOverride>(&path).unwrap_err();
        assert!(matches!(err, FileError::Config { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
