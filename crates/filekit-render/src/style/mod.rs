//! Style configuration for blocks and tables.
//!
//! A style controls glyphs, padding, and alignment. Styles are resolved fresh
//! for every render call: a [`StyleRef`] names a built-in preset or carries an
//! explicit style, and an optional override is merged onto a copy of it. The
//! preset tables themselves are never mutated.
//!
//! ```rust
//! use filekit_render::{BlockStyle, BlockStyleOverride, StyleRef};
//!
//! let mut style = StyleRef::<BlockStyle>::from("modern").resolve().unwrap();
//! style.apply(&BlockStyleOverride::new().padv(1));
//! assert_eq!(style.padv, 1);
//! assert_eq!(style.template.top_left, "┌");
//! ```
//!
//! Overrides can also be loaded from YAML or JSON documents:
//!
//! ```rust
//! use filekit_render::TableStyleOverride;
//!
//! let custom = TableStyleOverride::from_yaml("padh: 2\nrowlabel: false\n").unwrap();
//! assert_eq!(custom.padh, Some(2));
//! assert_eq!(custom.rowlabel, Some(false));
//! ```

/// Generates `from_yaml` / `from_json` constructors for a deserializable type.
macro_rules! impl_loaders {
    ($ty:ty) => {
        impl $ty {
            /// Parses a YAML document.
            pub fn from_yaml(yaml: &str) -> $crate::error::Result<Self> {
                Ok(serde_yaml::from_str(yaml)?)
            }

            /// Parses a JSON document.
            pub fn from_json(json: &str) -> $crate::error::Result<Self> {
                Ok(serde_json::from_str(json)?)
            }
        }
    };
}

mod block_style;
mod table_style;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

pub use block_style::{BlockStyle, BlockStyleOverride, BlockTemplate, BlockTemplateOverride};
pub use table_style::{
    CellConfig, ColumnConfig, FloatWidths, RowConfig, TableStyle, TableStyleOverride,
    TableTemplate, TableTemplateOverride,
};

/// Horizontal alignment of content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Split padding on both sides, following the horizontal bias.
    Center,
    /// Tables pick the alignment from the cell type; blocks center.
    Auto,
}

/// Vertical alignment of table cell content inside a taller row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    /// First line at the top of the row.
    #[default]
    Top,
    /// Last line at the bottom of the row.
    Bottom,
    /// Centered, following the vertical bias.
    Center,
    /// Picked from the cell type.
    Auto,
}

/// Side that receives the larger half of an odd horizontal padding budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HBias {
    Left,
    #[default]
    Right,
}

/// Side that receives the larger half of an odd vertical gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VBias {
    Top,
    #[default]
    Bottom,
}

macro_rules! keyword_enum {
    ($ty:ident, $param:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the lowercase keyword for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = RenderError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(RenderError::invalid_argument(
                        $param,
                        [$($name),+].join("|"),
                    )),
                }
            }
        }
    };
}

keyword_enum!(Align, "align", { Left => "left", Right => "right", Center => "center", Auto => "auto" });
keyword_enum!(VAlign, "valign", { Top => "top", Bottom => "bottom", Center => "center", Auto => "auto" });
keyword_enum!(HBias, "padhbias", { Left => "left", Right => "right" });
keyword_enum!(VBias, "padvbias", { Top => "top", Bottom => "bottom" });

/// A style type with a table of built-in named presets.
pub trait NamedStyle: Clone + Sized + 'static {
    /// Looks up a preset by name.
    fn preset(name: &str) -> Option<&'static Self>;

    /// Names of all presets, sorted.
    fn preset_names() -> Vec<&'static str>;
}

/// Reference to a style: a preset name or an explicit style value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleRef<S> {
    /// A built-in preset, looked up at render time.
    Preset(String),
    /// A fully specified style.
    Explicit(S),
}

impl<S: NamedStyle> StyleRef<S> {
    /// Resolves the reference into an owned style.
    ///
    /// Fails with [`RenderError::InvalidArgument`] when the preset is unknown.
    pub fn resolve(self) -> Result<S> {
        match self {
            StyleRef::Preset(name) => S::preset(&name).cloned().ok_or_else(|| {
                RenderError::invalid_argument(
                    "style",
                    format!(
                        "{}|explicit style (unknown preset '{}')",
                        S::preset_names().join("|"),
                        name
                    ),
                )
            }),
            StyleRef::Explicit(style) => Ok(style),
        }
    }
}

impl<S> Default for StyleRef<S> {
    fn default() -> Self {
        StyleRef::Preset("default".to_string())
    }
}

impl<S> From<&str> for StyleRef<S> {
    fn from(name: &str) -> Self {
        StyleRef::Preset(name.to_string())
    }
}

impl<S> From<String> for StyleRef<S> {
    fn from(name: String) -> Self {
        StyleRef::Preset(name)
    }
}

impl From<BlockStyle> for StyleRef<BlockStyle> {
    fn from(style: BlockStyle) -> Self {
        StyleRef::Explicit(style)
    }
}

impl From<TableStyle> for StyleRef<TableStyle> {
    fn from(style: TableStyle) -> Self {
        StyleRef::Explicit(style)
    }
}

/// Overwrites `target` with `value` when the override sets it.
pub(crate) fn merge_leaf<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Overwrites an optional `target` with `value` when the override sets it.
pub(crate) fn merge_option<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        *target = value.clone();
    }
}
