//! Error types for file handling.

use std::io;
use std::path::PathBuf;

use filekit_render::RenderError;

/// Errors raised by the file layer.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The path was empty.
    #[error("Parameter path '{}' is invalid or empty", .0.display())]
    InvalidPath(PathBuf),

    /// The path exists but is not a regular file.
    #[error("Path type {kind} is invalid for {}", .path.display())]
    PathType { path: PathBuf, kind: &'static str },

    /// A missing parent directory could not be created.
    #[error("Could not create directory {}", .dirname.display())]
    PathCreate {
        dirname: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parent directory is read-only.
    #[error("Path {} is not writable", .0.display())]
    NotWritable(PathBuf),

    #[error("Path {} not found", .0.display())]
    NotFound(PathBuf),

    /// The target exists and replacing was not allowed.
    #[error("The file {} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// No file type was given and detection was turned off.
    #[error("Could not detect type for {}", .0.display())]
    UnknownType(PathBuf),

    #[error("Could not create new file at {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error moving file from {} to {}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error copying file from {} to {}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error deleting file {}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path component was set to an unusable value.
    #[error("Property {name} value must be of type {expected}")]
    PropertyValue {
        name: &'static str,
        expected: &'static str,
    },

    /// A style file could not be parsed.
    #[error("Invalid style file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl FileError {
    pub(crate) fn property(name: &'static str, expected: &'static str) -> Self {
        Self::PropertyValue { name, expected }
    }
}

/// Result alias for the file layer.
pub type Result<T> = std::result::Result<T, FileError>;
