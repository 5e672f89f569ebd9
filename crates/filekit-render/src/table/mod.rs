//! Grid rendering of row-oriented data.
//!
//! A table is a slice of [`Row`]s, each an ordered map from [`ColumnKey`] to
//! [`CellValue`]. Rendering adds a label row built from the column keys and a
//! label column numbering the rendered rows, both of which the style can turn
//! off. With the label row present it is row `0` and data starts at `1`, the
//! same numbering used by [`TableStyle::rows`] and [`TableStyle::config`].
//! Column widths and row heights grow to fit their content.
//!
//! ## Alignment
//!
//! With `align: auto` each cell is placed according to its type:
//!
//! | Type | Horizontal | Vertical |
//! |------|------------|----------|
//! | string | left | top |
//! | integer | right | center |
//! | float | decimal point | center |
//! | boolean | center | center |
//! | nested table | left | top |
//!
//! Integers and floats keep their type alignment even when the table sets a
//! fixed `align`; a per-cell [`CellConfig`](crate::CellConfig) overrides it.
//!
//! ## Example
//!
//! ```rust
//! use filekit_render::{render_table, row};
//!
//! let data = vec![row([("name", "a")]), row([("name", "bcd")])];
//! let out = render_table(&data, "default", None).unwrap();
//! assert_eq!(
//!     out,
//!     "*---*------*\n\
//!      |   | name |\n\
//!      *---*------*\n\
//!      | 1 | a    |\n\
//!      *---*------*\n\
//!      | 2 | bcd  |\n\
//!      *---*------*\n"
//! );
//! ```

mod border;
mod layout;
mod value;

use tracing::debug;

pub use value::{cell_to_string, row, rows_from_json, CellKind, CellValue, ColumnKey, Row};

use crate::error::Result;
use crate::measure::join_lines;
use crate::style::{StyleRef, TableStyle, TableStyleOverride};
use layout::Layout;

/// Builder for a single table render.
///
/// ```rust
/// use filekit_render::{row, Table, TableStyleOverride};
///
/// let data = vec![row([("n", 1)])];
/// let lines = Table::new(&data)
///     .style("modern")
///     .custom(TableStyleOverride::new().rowlabel(false).collabel(false))
///     .lines()
///     .unwrap();
/// assert_eq!(lines, vec!["┌───┐", "│ 1 │", "└───┘"]);
/// ```
#[derive(Clone, Debug)]
pub struct Table<'a> {
    data: &'a [Row],
    style: StyleRef<TableStyle>,
    custom: Option<TableStyleOverride>,
}

impl<'a> Table<'a> {
    pub fn new(data: &'a [Row]) -> Self {
        Table {
            data,
            style: StyleRef::default(),
            custom: None,
        }
    }

    /// Set the base style, either a preset name or a [`TableStyle`].
    pub fn style(mut self, style: impl Into<StyleRef<TableStyle>>) -> Self {
        self.style = style.into();
        self
    }

    /// Set an override merged onto the base style.
    pub fn custom(mut self, custom: TableStyleOverride) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Renders the table as separate lines.
    pub fn lines(self) -> Result<Vec<String>> {
        let mut style = self.style.resolve()?;
        if let Some(custom) = &self.custom {
            style.apply(custom);
        }

        let layout = Layout::analyze(self.data, &style)?;
        let lines = layout.render(&style);
        debug!(lines = lines.len(), "table rendered");
        Ok(lines)
    }

    /// Renders the table as one string, each line terminated by [`crate::EOL`].
    pub fn render(self) -> Result<String> {
        self.lines().map(|lines| join_lines(&lines))
    }
}

/// Renders `data` as a table.
///
/// `style` is a preset name (`default`, `modern`, `lines`) or an explicit
/// [`TableStyle`]; `custom` is merged onto it for this call only.
pub fn render_table(
    data: &[Row],
    style: impl Into<StyleRef<TableStyle>>,
    custom: Option<&TableStyleOverride>,
) -> Result<String> {
    render_table_lines(data, style, custom).map(|lines| join_lines(&lines))
}

/// Like [`render_table`], returning the lines without separators.
pub fn render_table_lines(
    data: &[Row],
    style: impl Into<StyleRef<TableStyle>>,
    custom: Option<&TableStyleOverride>,
) -> Result<Vec<String>> {
    let mut table = Table::new(data).style(style);
    if let Some(custom) = custom {
        table = table.custom(custom.clone());
    }
    table.lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::style::{Align, CellConfig, ColumnConfig, RowConfig, VAlign};

    fn bare() -> TableStyleOverride {
        TableStyleOverride::new().collabel(false).rowlabel(false)
    }

    #[test]
    fn test_default_table_with_labels() {
        let data = vec![row([("name", CellValue::from("a")), ("n", 1.into())])];
        let lines = render_table_lines(&data, "default", None).unwrap();
        assert_eq!(
            lines,
            vec![
                "*---*------*---*",
                "|   | name | n |",
                "*---*------*---*",
                "| 1 | a    | 1 |",
                "*---*------*---*",
            ]
        );
    }

    #[test]
    fn test_render_joins_with_trailing_newline() {
        let data = vec![row([("x", 1)])];
        let out = render_table(&data, "default", Some(&bare())).unwrap();
        assert_eq!(out, "*---*\n| 1 |\n*---*\n");
    }

    #[test]
    fn test_modern_preset() {
        let data = vec![row([("a", 1), ("b", 22)]), row([("a", 333), ("b", 4)])];
        let lines = render_table_lines(&data, "modern", Some(&bare())).unwrap();
        assert_eq!(
            lines,
            vec![
                "┌─────┬────┐",
                "│   1 │ 22 │",
                "├─────┼────┤",
                "│ 333 │  4 │",
                "└─────┴────┘",
            ]
        );
    }

    #[test]
    fn test_lines_preset_skips_empty_outer_borders() {
        let data = vec![row([("a", "x"), ("b", "y")]), row([("a", "z"), ("b", "w")])];
        let lines = render_table_lines(&data, "lines", Some(&bare())).unwrap();
        assert_eq!(lines, vec![" x | y ", "---------", " z | w "]);
    }

    #[test]
    fn test_missing_cells_render_blank() {
        let data = vec![row([("a", "x")]), row([("b", "y")])];
        let lines = render_table_lines(&data, "default", Some(&bare())).unwrap();
        assert_eq!(lines[1], "| x |   |");
        assert_eq!(lines[3], "|   | y |");
    }

    #[test]
    fn test_float_column_aligns_decimal_points() {
        let data = vec![row([("v", 1.5)]), row([("v", 23.25)]), row([("v", 4.0)])];
        let lines = render_table_lines(&data, "default", Some(&bare())).unwrap();
        assert_eq!(
            lines,
            vec![
                "*-------*",
                "|  1.5  |",
                "*-------*",
                "| 23.25 |",
                "*-------*",
                "|  4.0  |",
                "*-------*",
            ]
        );
    }

    #[test]
    fn test_boolean_centered_with_right_bias() {
        let data = vec![
            row([("flag", CellValue::from(true))]),
            row([("flag", CellValue::from("xxxxxxx"))]),
        ];
        let lines = render_table_lines(&data, "default", Some(&bare())).unwrap();
        assert_eq!(lines[1], "|  true   |");
    }

    #[test]
    fn test_multiline_cells_valign() {
        let data = vec![row([
            ("a", CellValue::from("1\n2\n3")),
            ("b", "s".into()),
            ("c", 7.into()),
        ])];
        let lines = render_table_lines(&data, "default", Some(&bare())).unwrap();
        assert_eq!(
            lines,
            vec![
                "*---*---*---*",
                "| 1 | s |   |",
                "| 2 |   | 7 |",
                "| 3 |   |   |",
                "*---*---*---*",
            ]
        );
    }

    #[test]
    fn test_padv_per_row() {
        let data = vec![row([("a", "x")]), row([("a", "y")])];
        let custom = bare().padv(1);
        let lines = render_table_lines(&data, "default", Some(&custom)).unwrap();
        assert_eq!(
            lines,
            vec![
                "*---*", "|   |", "| x |", "|   |", "*---*", "|   |", "| y |", "|   |", "*---*",
            ]
        );
    }

    #[test]
    fn test_column_and_row_configs() {
        let data = vec![row([("a", "x")])];
        let custom = bare()
            .column(ColumnKey::from("a"), ColumnConfig::with_width(4))
            .row(0, RowConfig::with_height(2));
        let lines = render_table_lines(&data, "default", Some(&custom)).unwrap();
        assert_eq!(lines, vec!["*------*", "| x    |", "|      |", "*------*"]);
    }

    #[test]
    fn test_cell_config_overrides_type_alignment() {
        let data = vec![
            row([("a", CellValue::from(1)), ("b", "long".into())]),
            row([("a", CellValue::from(22)), ("b", "z".into())]),
        ];
        let custom = bare()
            .cell(0, ColumnKey::from("a"), CellConfig::new().align(Align::Left))
            .cell(1, ColumnKey::from("b"), CellConfig::new().align(Align::Right));
        let lines = render_table_lines(&data, "default", Some(&custom)).unwrap();
        assert_eq!(lines[1], "| 1  | long |");
        assert_eq!(lines[3], "| 22 |    z |");
    }

    #[test]
    fn test_table_align_does_not_override_numbers() {
        let data = vec![
            row([("a", CellValue::from(5)), ("b", "x".into())]),
            row([("a", CellValue::from(100)), ("b", "yyy".into())]),
        ];
        let custom = bare().align(Align::Center).valign(VAlign::Top);
        let lines = render_table_lines(&data, "default", Some(&custom)).unwrap();
        assert_eq!(lines[1], "|   5 |  x  |");
    }

    #[test]
    fn test_nested_table_cell() {
        let inner = vec![row([("k", "v")])];
        let data = vec![row([("t", CellValue::from(inner))])];
        let lines = render_table_lines(&data, "default", Some(&bare())).unwrap();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("| *---*---* |"));
    }

    #[test]
    fn test_empty_data_is_invalid_argument() {
        let err = render_table(&[], "default", None).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument { ref param, .. } if param == "data"));
    }

    #[test]
    fn test_unknown_preset() {
        let data = vec![row([("a", 1)])];
        assert!(render_table(&data, "fancy", None).is_err());
    }

    #[test]
    fn test_custom_override_does_not_leak_into_preset() {
        let data = vec![row([("a", 1)])];
        render_table(&data, "default", Some(&bare().padh(3))).unwrap();
        let lines = render_table_lines(&data, "default", Some(&bare())).unwrap();
        assert_eq!(lines[1], "| 1 |");
    }
}
