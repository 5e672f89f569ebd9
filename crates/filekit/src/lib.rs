//! # Filekit - Text and Binary File Toolkit
//!
//! `filekit` wraps files on disk in small typed handles and connects text
//! files to the [`filekit_render`] block and table renderers.
//!
//! - [`handler`]: create, open, move, copy, delete, and inspect files
//! - [`File`]: path accessors, reads and writes, temporary files
//! - [`AsciiFile`]: timestamped logging and rendered output for text files
//! - [`FileClass`]: extension and content based classification
//!
//! ```rust,no_run
//! use filekit::handler::{self, FileOptions};
//! use filekit::FileClass;
//!
//! let options = FileOptions::default().file_type(FileClass::Ascii);
//! if let Some(log) = handler::create_or_open("var/app.log", "", &options)?.into_ascii() {
//!     log.log("worker ready", true)?;
//!     log.append_block("shutdown", "modern", None)?;
//! }
//! # Ok::<(), filekit::FileError>(())
//! ```

pub mod ascii;
pub mod class;
pub mod config;
mod error;
pub mod file;
pub mod handler;

pub use ascii::AsciiFile;
pub use class::{mimetype_for, FileClass};
pub use config::load_style;
pub use error::{FileError, Result};
pub use file::File;
pub use handler::{FileHandle, FileInfo, FileOptions};

pub use filekit_render;
