//! Text files: logging and rendered blocks and tables.

use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Local};
use filekit_render::{
    render_block, render_table, BlockContent, BlockStyle, BlockStyleOverride, Row, StyleRef,
    TableStyle, TableStyleOverride, EOL,
};
use tracing::trace;

use crate::error::{FileError, Result};
use crate::file::File;

/// Timestamp prefix written by [`AsciiFile::log`].
const LOG_DATE_FORMAT: &str = "[%Y-%m-%d %H:%M:%S] ";

/// A text file.
///
/// Dereferences to [`File`] for path handling and raw reads and writes.
#[derive(Debug)]
pub struct AsciiFile {
    file: File,
}

impl From<File> for AsciiFile {
    fn from(file: File) -> Self {
        AsciiFile { file }
    }
}

impl Deref for AsciiFile {
    type Target = File;

    fn deref(&self) -> &File {
        &self.file
    }
}

impl DerefMut for AsciiFile {
    fn deref_mut(&mut self) -> &mut File {
        &mut self.file
    }
}

/// Formats one log line; the message is trimmed and terminated with [`EOL`].
fn log_line(message: &str, date: Option<DateTime<Local>>) -> String {
    let prefix = date
        .map(|date| date.format(LOG_DATE_FORMAT).to_string())
        .unwrap_or_default();
    format!("{}{}{}", prefix, message.trim(), EOL)
}

impl AsciiFile {
    /// Reads the file as UTF-8 text.
    pub fn content(&self) -> Result<String> {
        let bytes = self.file.content()?;
        String::from_utf8(bytes).map_err(|err| FileError::Read {
            path: self.path().to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        })
    }

    /// Appends `message` as one line, prefixed with the local time when
    /// `with_date` is set.
    ///
    /// ```rust,no_run
    /// # fn demo(file: &filekit::AsciiFile) -> filekit::Result<()> {
    /// file.log("  backup finished \n", true)?;
    /// // appends "[2024-05-01 12:00:00] backup finished\n"
    /// # Ok(())
    /// # }
    /// ```
    pub fn log(&self, message: &str, with_date: bool) -> Result<()> {
        let line = log_line(message, with_date.then(Local::now));
        trace!(path = %self.path().display(), "log line appended");
        self.append(line)
    }

    /// Replaces the file content with a rendered block.
    pub fn put_block(
        &self,
        content: impl Into<BlockContent>,
        style: impl Into<StyleRef<BlockStyle>>,
        custom: Option<&BlockStyleOverride>,
    ) -> Result<()> {
        let block = render_block(content, style, custom, true)?;
        self.put(block)
    }

    /// Appends a rendered block.
    pub fn append_block(
        &self,
        content: impl Into<BlockContent>,
        style: impl Into<StyleRef<BlockStyle>>,
        custom: Option<&BlockStyleOverride>,
    ) -> Result<()> {
        let block = render_block(content, style, custom, true)?;
        self.append(block)
    }

    /// Replaces the file content with a rendered table.
    pub fn put_table(
        &self,
        data: &[Row],
        style: impl Into<StyleRef<TableStyle>>,
        custom: Option<&TableStyleOverride>,
    ) -> Result<()> {
        let table = render_table(data, style, custom)?;
        self.put(table)
    }

    /// Appends a rendered table.
    pub fn append_table(
        &self,
        data: &[Row],
        style: impl Into<StyleRef<TableStyle>>,
        custom: Option<&TableStyleOverride>,
    ) -> Result<()> {
        let table = render_table(data, style, custom)?;
        self.append(table)
    }
}
