//! File classification by mimetype.
//!
//! Mimetypes come from the file extension. Files with an unknown extension
//! are sniffed: valid UTF-8 without NUL bytes counts as plain text.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Mimetype for content that is neither known nor text.
pub const OCTET_STREAM: &str = "application/octet-stream";

static MIMETYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("text", "text/plain"),
        ("txt", "text/plain"),
        ("log", "text/plain"),
        ("md", "text/markdown"),
        ("csv", "text/csv"),
        ("xml", "text/xml"),
        ("html", "text/html"),
        ("htm", "text/html"),
        ("js", "application/javascript"),
        ("json", "application/json"),
        ("yaml", "application/yaml"),
        ("yml", "application/yaml"),
        ("jpeg", "image/jpeg"),
        ("jpg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
    ])
});

/// How a file is handled once opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileClass {
    /// Line-oriented text; supports logging and rendering.
    Ascii,
    /// Recognised as an image but handled as raw bytes.
    Image,
    Binary,
}

impl FileClass {
    /// Maps a mimetype onto a class.
    ///
    /// ```rust
    /// use filekit::FileClass;
    ///
    /// assert_eq!(FileClass::from_mimetype("text/csv"), FileClass::Ascii);
    /// assert_eq!(FileClass::from_mimetype("image/png"), FileClass::Image);
    /// assert_eq!(FileClass::from_mimetype("application/zip"), FileClass::Binary);
    /// ```
    pub fn from_mimetype(mimetype: &str) -> Self {
        let (group, subtype) = mimetype.split_once('/').unwrap_or((mimetype, ""));
        match (group, subtype) {
            ("text", _) => FileClass::Ascii,
            ("application", "json" | "xml" | "javascript" | "yaml") => FileClass::Ascii,
            ("image", _) => FileClass::Image,
            _ => FileClass::Binary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileClass::Ascii => "ascii",
            FileClass::Image => "image",
            FileClass::Binary => "binary",
        }
    }
}

impl fmt::Display for FileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" | "text" => Ok(FileClass::Ascii),
            "image" => Ok(FileClass::Image),
            "binary" => Ok(FileClass::Binary),
            other => Err(format!("unknown file class '{}', expected ascii|image|binary", other)),
        }
    }
}

/// Looks up the mimetype for `path` by extension.
pub fn mimetype_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    MIMETYPES.get(extension.as_str()).copied()
}

/// Guesses a mimetype from file content.
pub fn sniff(content: &[u8]) -> &'static str {
    match std::str::from_utf8(content) {
        Ok(text) if !text.contains('\0') => "text/plain",
        _ => OCTET_STREAM,
    }
}
