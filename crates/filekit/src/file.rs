//! Generic file wrapper.

use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FileError, Result};
use crate::handler;

/// A file on disk, addressed by path.
///
/// Content is read and written on demand; no handle is held open between
/// calls. A file marked as temporary is deleted when the wrapper is dropped.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    temp: bool,
}

impl File {
    pub(crate) fn new(path: PathBuf, temp: bool) -> Self {
        File { path, temp }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the file; empty for a bare file name.
    pub fn dirname(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// File name including the extension.
    pub fn basename(&self) -> &str {
        self.path.file_name().and_then(OsStr::to_str).unwrap_or("")
    }

    /// File name without the extension.
    pub fn filename(&self) -> &str {
        self.path.file_stem().and_then(OsStr::to_str).unwrap_or("")
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(OsStr::to_str)
    }

    pub fn is_temp(&self) -> bool {
        self.temp
    }

    /// Deletes the file from disk once this wrapper is dropped.
    pub fn mark_temp(&mut self) {
        self.temp = true;
    }

    /// Size in bytes.
    pub fn size(&self) -> Result<u64> {
        fs::metadata(&self.path)
            .map(|meta| meta.len())
            .map_err(|source| self.read_error(source))
    }

    /// Replaces the file content.
    pub fn put(&self, content: impl AsRef<[u8]>) -> Result<()> {
        fs::write(&self.path, content).map_err(|source| self.write_error(source))
    }

    /// Appends to the file content.
    pub fn append(&self, content: impl AsRef<[u8]>) -> Result<()> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(content.as_ref()))
            .map_err(|source| self.write_error(source))
    }

    /// Reads the whole file.
    pub fn content(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|source| self.read_error(source))
    }

    /// Moves the file to `to`, replacing an existing file only when `replace`.
    pub fn rename(&mut self, to: impl AsRef<Path>, replace: bool) -> Result<()> {
        let to = to.as_ref().to_path_buf();
        handler::move_path(&self.path, &to, replace)?;
        self.path = to;
        Ok(())
    }

    /// Moves the file into another existing directory.
    pub fn set_dirname(&mut self, dirname: impl AsRef<Path>) -> Result<()> {
        let dirname = dirname.as_ref();
        if !dirname.is_dir() {
            return Err(FileError::property("dirname", "string and a valid local path"));
        }
        let to = dirname.join(self.basename());
        self.rename(to, false)
    }

    /// Renames the file within its directory.
    pub fn set_basename(&mut self, basename: &str) -> Result<()> {
        let candidate = Path::new(basename);
        if candidate.file_name() != Some(OsStr::new(basename)) {
            return Err(FileError::property("basename", "string without path separators"));
        }
        if let Some(extension) = candidate.extension().and_then(OsStr::to_str) {
            validate_extension("basename", extension)?;
        }
        let to = self.dirname().join(basename);
        self.rename(to, false)
    }

    /// Changes the name while keeping the extension.
    pub fn set_filename(&mut self, filename: &str) -> Result<()> {
        if filename.is_empty() || filename.contains(std::path::is_separator) {
            return Err(FileError::property("filename", "string"));
        }
        let basename = match self.extension() {
            Some(extension) => format!("{}.{}", filename, extension),
            None => filename.to_string(),
        };
        let to = self.dirname().join(basename);
        self.rename(to, false)
    }

    /// Changes the extension; an empty extension removes it.
    pub fn set_extension(&mut self, extension: &str) -> Result<()> {
        validate_extension("extension", extension)?;
        let to = self.path.with_extension(extension);
        self.rename(to, false)
    }

    fn read_error(&self, source: std::io::Error) -> FileError {
        FileError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> FileError {
        FileError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

fn validate_extension(name: &'static str, extension: &str) -> Result<()> {
    if extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(FileError::property(name, "string containing only alphanumeric characters"))
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl Drop for File {
    fn drop(&mut self) {
        if !self.temp || !self.path.exists() {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "temporary file removed"),
            Err(err) => warn!(path = %self.path.display(), error = %err, "could not remove temporary file"),
        }
    }
}
