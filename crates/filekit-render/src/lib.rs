//! # Filekit Render - ASCII Blocks and Tables
//!
//! `filekit-render` draws framed text blocks and bordered tables as plain
//! strings, ready to be printed, logged, or written to a file.
//!
//! This crate is the rendering core of the `filekit` toolkit, but has no I/O of
//! its own and can be used independently.
//!
//! ## Core Concepts
//!
//! - [`render_block`] / [`Block`]: wrap lines of text in a border
//! - [`render_table`] / [`Table`]: lay out rows of typed cells in a grid
//! - [`StyleRef`]: a built-in preset name or an explicit style
//! - [`BlockStyleOverride`] / [`TableStyleOverride`]: partial styles merged onto
//!   the base style for one call
//! - [`CellValue`]: string, integer, float, boolean, or nested table
//!
//! ## Quick Start
//!
//! ```rust
//! use filekit_render::{render_block, render_table, row, CellValue};
//!
//! let block = render_block("Report", "modern", None, true).unwrap();
//! assert_eq!(block, "┌────────┐\n│ Report │\n└────────┘\n");
//!
//! let data = vec![
//!     row([("item", CellValue::from("apples")), ("qty", 3.into())]),
//!     row([("item", CellValue::from("pears")), ("qty", 12.into())]),
//! ];
//! let table = render_table(&data, "modern", None).unwrap();
//! assert!(table.starts_with("┌───┬────────┬─────┐\n"));
//! ```
//!
//! ## Presets
//!
//! | Renderer | Presets |
//! |----------|---------|
//! | block | `default`, `doc`, `modern` |
//! | table | `default`, `modern`, `lines` |
//!
//! Every call resolves its style afresh, so renders are independent of each
//! other and safe to run from several threads at once.
//!
//! ## Errors
//!
//! Invalid input fails before any output is produced with
//! [`RenderError::InvalidArgument`], whose message names the parameter and the
//! accepted type:
//!
//! ```rust
//! use filekit_render::render_block;
//!
//! let err = render_block("", "default", None, true).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Parameter content must be of type non-empty string or array of strings"
//! );
//! ```

mod block;
mod error;
mod measure;
pub mod style;
pub mod table;

pub use block::{render_block, render_block_lines, Block, BlockContent};
pub use error::{RenderError, Result};
pub use measure::{display_width, measure, split_padding, split_vertical, Dimensions, EOL};
pub use style::{
    Align, BlockStyle, BlockStyleOverride, BlockTemplate, BlockTemplateOverride, CellConfig,
    ColumnConfig, FloatWidths, HBias, NamedStyle, RowConfig, StyleRef, TableStyle,
    TableStyleOverride, TableTemplate, TableTemplateOverride, VAlign, VBias,
};
pub use table::{
    cell_to_string, render_table, render_table_lines, row, rows_from_json, CellKind, CellValue,
    ColumnKey, Row, Table,
};
