//! Filesystem facade: create, open, move, copy, delete, and inspect files.
//!
//! Every function that returns a file wraps it in a [`FileHandle`] whose
//! variant is chosen by [`FileClass`]. Text files come back as
//! [`AsciiFile`], everything else as a plain [`File`].
//!
//! ```rust,no_run
//! use filekit::handler::{self, FileOptions};
//!
//! let handle = handler::create_or_open("logs/app.log", "", &FileOptions::default())?;
//! if let Some(log) = handle.as_ascii() {
//!     log.log("service started", true)?;
//! }
//! # Ok::<(), filekit::FileError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::ascii::AsciiFile;
use crate::class::{mimetype_for, sniff, FileClass};
use crate::error::{FileError, Result};
use crate::file::File;

/// Options shared by the create and open operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOptions {
    /// Replace an existing file on create, rename, or copy.
    pub replace: bool,
    /// Create missing parent directories.
    pub create_dirs: bool,
    /// Pick the file class from the path and content.
    pub detect: bool,
    /// Explicit file class; wins over detection.
    pub file_type: Option<FileClass>,
    /// Delete the file when the returned handle is dropped.
    pub temp: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        FileOptions {
            replace: false,
            create_dirs: true,
            detect: true,
            file_type: None,
            temp: false,
        }
    }
}

impl FileOptions {
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn detect(mut self, detect: bool) -> Self {
        self.detect = detect;
        self
    }

    pub fn file_type(mut self, class: FileClass) -> Self {
        self.file_type = Some(class);
        self
    }

    pub fn temp(mut self, temp: bool) -> Self {
        self.temp = temp;
        self
    }
}

/// An opened file of a particular class.
#[derive(Debug)]
pub enum FileHandle {
    Ascii(AsciiFile),
    /// Images and unknown binaries.
    Binary(File),
}

impl FileHandle {
    fn wrap(path: PathBuf, class: FileClass, temp: bool) -> Self {
        let file = File::new(path, temp);
        match class {
            FileClass::Ascii => FileHandle::Ascii(AsciiFile::from(file)),
            FileClass::Image | FileClass::Binary => FileHandle::Binary(file),
        }
    }

    /// The underlying generic file.
    pub fn file(&self) -> &File {
        match self {
            FileHandle::Ascii(ascii) => ascii,
            FileHandle::Binary(file) => file,
        }
    }

    pub fn file_mut(&mut self) -> &mut File {
        match self {
            FileHandle::Ascii(ascii) => ascii,
            FileHandle::Binary(file) => file,
        }
    }

    pub fn as_ascii(&self) -> Option<&AsciiFile> {
        match self {
            FileHandle::Ascii(ascii) => Some(ascii),
            FileHandle::Binary(_) => None,
        }
    }

    pub fn into_ascii(self) -> Option<AsciiFile> {
        match self {
            FileHandle::Ascii(ascii) => Some(ascii),
            FileHandle::Binary(_) => None,
        }
    }

    pub fn path(&self) -> &Path {
        self.file().path()
    }
}

/// Details about a file on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub dirname: PathBuf,
    pub basename: String,
    pub filename: String,
    pub extension: Option<String>,
    /// Size in bytes.
    pub size: u64,
    pub mimetype: String,
    pub class: FileClass,
}

fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(FileError::InvalidPath(path.to_path_buf()));
    }
    Ok(())
}

/// Returns whether anything exists at `path`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Fails with [`FileError::NotFound`] unless `path` exists.
pub fn require(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    check_path(path)?;
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

fn detect_class(path: &Path, content: &[u8], options: &FileOptions) -> Result<FileClass> {
    if let Some(class) = options.file_type {
        return Ok(class);
    }
    if !options.detect {
        return Err(FileError::UnknownType(path.to_path_buf()));
    }
    let mimetype = mimetype_for(path).unwrap_or_else(|| sniff(content));
    Ok(FileClass::from_mimetype(mimetype))
}

/// Creates a file with `content`.
///
/// Fails if the file exists and `options.replace` is off, or if the parent
/// directory is missing and `options.create_dirs` is off.
pub fn create(
    path: impl AsRef<Path>,
    content: impl AsRef<[u8]>,
    options: &FileOptions,
) -> Result<FileHandle> {
    let path = path.as_ref();
    let content = content.as_ref();
    check_path(path)?;

    if path.exists() && !options.replace {
        return Err(FileError::AlreadyExists(path.to_path_buf()));
    }

    let dirname = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dirname.is_dir() {
        if !options.create_dirs {
            return Err(FileError::NotFound(dirname.to_path_buf()));
        }
        fs::create_dir_all(dirname).map_err(|source| FileError::PathCreate {
            dirname: dirname.to_path_buf(),
            source,
        })?;
        debug!(dirname = %dirname.display(), "created parent directories");
    }

    let writable = fs::metadata(dirname)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false);
    if !writable {
        return Err(FileError::NotWritable(dirname.to_path_buf()));
    }

    let class = detect_class(path, content, options)?;
    fs::write(path, content).map_err(|source| FileError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), %class, "file created");

    Ok(FileHandle::wrap(path.to_path_buf(), class, options.temp))
}

/// Opens an existing file.
pub fn open(path: impl AsRef<Path>, options: &FileOptions) -> Result<FileHandle> {
    let path = path.as_ref();
    let class = match options.file_type {
        Some(class) => {
            require(path)?;
            class
        }
        None => info(path)?.class,
    };
    debug!(path = %path.display(), %class, "file opened");
    Ok(FileHandle::wrap(path.to_path_buf(), class, options.temp))
}

/// Opens `path` if it exists, otherwise creates it with `content`.
pub fn create_or_open(
    path: impl AsRef<Path>,
    content: impl AsRef<[u8]>,
    options: &FileOptions,
) -> Result<FileHandle> {
    let path = path.as_ref();
    if exists(path) {
        open(path, options)
    } else {
        create(path, content, options)
    }
}

/// Ensures `to` is free, removing it when `replace` is set.
fn clear_target(to: &Path, replace: bool) -> Result<()> {
    if !to.exists() {
        return Ok(());
    }
    if !replace {
        return Err(FileError::AlreadyExists(to.to_path_buf()));
    }
    fs::remove_file(to).map_err(|source| FileError::Delete {
        path: to.to_path_buf(),
        source,
    })
}

pub(crate) fn move_path(from: &Path, to: &Path, replace: bool) -> Result<()> {
    require(from)?;
    check_path(to)?;
    clear_target(to, replace)?;
    fs::rename(from, to).map_err(|source| FileError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    info!(from = %from.display(), to = %to.display(), "file moved");
    Ok(())
}

/// Moves a file and opens it at its new location.
pub fn rename(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<FileHandle> {
    let to = to.as_ref();
    move_path(from.as_ref(), to, options.replace)?;
    open(to, options)
}

/// Copies a file and opens the copy.
pub fn copy(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<FileHandle> {
    let (from, to) = (from.as_ref(), to.as_ref());
    require(from)?;
    check_path(to)?;
    clear_target(to, options.replace)?;
    fs::copy(from, to).map_err(|source| FileError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    info!(from = %from.display(), to = %to.display(), "file copied");
    open(to, options)
}

/// Deletes a file. Returns `false` when there was nothing to delete.
pub fn delete(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    check_path(path)?;
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|source| FileError::Delete {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "file deleted");
    Ok(true)
}

/// Collects path, size, and type information for a regular file.
pub fn info(path: impl AsRef<Path>) -> Result<FileInfo> {
    let path = path.as_ref();
    require(path)?;

    let meta = fs::metadata(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        let kind = if meta.is_dir() { "dir" } else { "unknown" };
        return Err(FileError::PathType {
            path: path.to_path_buf(),
            kind,
        });
    }

    let mimetype = match mimetype_for(path) {
        Some(mimetype) => mimetype,
        None => {
            let content = fs::read(path).map_err(|source| FileError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            sniff(&content)
        }
    };

    let file = File::new(path.to_path_buf(), false);
    Ok(FileInfo {
        path: path.to_path_buf(),
        dirname: file.dirname().to_path_buf(),
        basename: file.basename().to_string(),
        filename: file.filename().to_string(),
        extension: file.extension().map(String::from),
        size: meta.len(),
        mimetype: mimetype.to_string(),
        class: FileClass::from_mimetype(mimetype),
    })
}
