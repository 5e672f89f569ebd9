//! Table analysis and line rendering.
//!
//! Rendering a table takes two passes. [`Layout::analyze`] stringifies every
//! cell, resolves its alignment, and negotiates column widths, decimal-point
//! widths, and row heights. [`Layout::render`] then draws the grid using those
//! measurements.

use std::borrow::Cow;

use indexmap::IndexSet;
use tracing::{debug, trace};

use super::border::{framed_row, horizontal_line, LineType};
use super::value::{cell_to_string, CellKind, CellValue, ColumnKey, Row};
use crate::error::{RenderError, Result};
use crate::measure::{display_width, fill, measure, split_padding, split_vertical, EOL};
use crate::style::{Align, FloatWidths, TableStyle, VAlign};

/// Horizontal placement after `auto` has been resolved against the cell type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellAlign {
    Left,
    Right,
    /// Split by the horizontal bias.
    Center,
    /// Line decimal points up across the column.
    Decimal,
}

/// Vertical placement after `auto` has been resolved against the cell type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellVAlign {
    Top,
    Bottom,
    Center,
}

/// Integers and floats align by type unless the cell has its own alignment.
fn resolve_align(explicit: Option<Align>, default: Align, kind: CellKind) -> CellAlign {
    let align = match explicit {
        Some(align) => align,
        None if kind.is_numeric() => Align::Auto,
        None => default,
    };
    match align {
        Align::Left => CellAlign::Left,
        Align::Right => CellAlign::Right,
        Align::Center => CellAlign::Center,
        Align::Auto => match kind {
            CellKind::String | CellKind::Array => CellAlign::Left,
            CellKind::Integer => CellAlign::Right,
            CellKind::Float => CellAlign::Decimal,
            CellKind::Boolean => CellAlign::Center,
        },
    }
}

fn resolve_valign(valign: VAlign, kind: CellKind) -> CellVAlign {
    match valign {
        VAlign::Top => CellVAlign::Top,
        VAlign::Bottom => CellVAlign::Bottom,
        VAlign::Center => CellVAlign::Center,
        VAlign::Auto => match kind {
            CellKind::String | CellKind::Array => CellVAlign::Top,
            CellKind::Integer | CellKind::Float | CellKind::Boolean => CellVAlign::Center,
        },
    }
}

/// Widths of the integer and fractional parts of a decimal string.
fn decimal_parts(text: &str) -> (usize, usize) {
    match text.split_once('.') {
        Some((int, frac)) => (display_width(int), display_width(frac)),
        None => (display_width(text), 0),
    }
}

#[derive(Debug)]
struct PreparedCell {
    lines: Vec<String>,
    align: CellAlign,
    valign: CellVAlign,
    padh: usize,
}

impl PreparedCell {
    /// Picks the line shown on sub-line `sub` of a row `height` lines tall.
    fn line_at(&self, height: usize, sub: usize, style: &TableStyle) -> Option<&str> {
        let gap = height.saturating_sub(self.lines.len());
        let offset = match self.valign {
            CellVAlign::Top => 0,
            CellVAlign::Bottom => gap,
            CellVAlign::Center => split_vertical(gap, style.padvbias).0,
        };
        sub.checked_sub(offset)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }
}

#[derive(Debug)]
struct ColumnLayout {
    key: ColumnKey,
    /// Content width.
    width: usize,
    /// Largest horizontal padding used by any cell in the column.
    padh: usize,
    float: Option<FloatWidths>,
}

impl ColumnLayout {
    fn outer_width(&self) -> usize {
        self.width + 2 * self.padh
    }
}

#[derive(Debug)]
struct RowLayout {
    height: usize,
    cells: Vec<PreparedCell>,
}

/// Measured table, ready to draw.
#[derive(Debug)]
pub(crate) struct Layout {
    columns: Vec<ColumnLayout>,
    rows: Vec<RowLayout>,
}

impl Layout {
    /// Builds the label-augmented grid and measures it.
    pub(crate) fn analyze(data: &[Row], style: &TableStyle) -> Result<Layout> {
        if data.is_empty() {
            return Err(RenderError::invalid_argument(
                "data",
                "array containing arrays with field values",
            ));
        }

        let mut keys: IndexSet<ColumnKey> = data.iter().flat_map(|row| row.keys().cloned()).collect();
        if style.rowlabel {
            keys.shift_remove(&ColumnKey::RowLabel);
        }
        if keys.is_empty() {
            return Err(RenderError::invalid_argument(
                "data",
                "array containing arrays with at least one field value",
            ));
        }

        let empty = CellValue::Str(String::new());
        let mut grid: Vec<Vec<Cow<'_, CellValue>>> = Vec::with_capacity(data.len() + 1);
        if style.collabel {
            grid.push(keys.iter().map(|key| Cow::Owned(key.label())).collect());
        }
        for row in data {
            grid.push(
                keys.iter()
                    .map(|key| row.get(key).map_or(Cow::Borrowed(&empty), Cow::Borrowed))
                    .collect(),
            );
        }

        if style.rowlabel {
            keys = std::iter::once(ColumnKey::RowLabel).chain(keys).collect();
            for (index, cells) in grid.iter_mut().enumerate() {
                let label = if index == 0 && style.collabel {
                    CellValue::Str(String::new())
                } else {
                    CellValue::Int(index as i64)
                };
                cells.insert(0, Cow::Owned(label));
            }
        }

        let mut columns: Vec<ColumnLayout> = keys
            .into_iter()
            .map(|key| {
                let config = style.column(&key);
                ColumnLayout {
                    width: config.and_then(|c| c.width).unwrap_or(style.width),
                    float: config.and_then(|c| c.float),
                    padh: 0,
                    key,
                }
            })
            .collect();

        let mut rows = Vec::with_capacity(grid.len());
        for (index, values) in grid.iter().enumerate() {
            let mut height = style
                .row(index)
                .and_then(|c| c.height)
                .unwrap_or(style.height);
            let mut cells = Vec::with_capacity(values.len());

            for (column, value) in columns.iter_mut().zip(values) {
                let kind = value.kind();
                let text = cell_to_string(value)?;
                let text = text.trim();
                let dims = measure(text);
                let config = style.cell(index, &column.key);

                let align = resolve_align(config.and_then(|c| c.align), style.align, kind);
                let valign = resolve_valign(config.and_then(|c| c.valign).unwrap_or(style.valign), kind);
                let padh = config.and_then(|c| c.padh).unwrap_or(style.padh);

                column.width = column.width.max(dims.width);
                column.padh = column.padh.max(padh);
                if align == CellAlign::Decimal {
                    let (int, frac) = decimal_parts(text);
                    let float = column.float.get_or_insert_with(FloatWidths::default);
                    float.left = float.left.max(int);
                    float.right = float.right.max(frac);
                    column.width = column.width.max(float.left + float.right + 1);
                }
                height = height.max(dims.height);

                cells.push(PreparedCell {
                    lines: text.split(EOL).map(String::from).collect(),
                    align,
                    valign,
                    padh,
                });
            }

            rows.push(RowLayout { height, cells });
        }

        for column in &columns {
            trace!(key = %column.key, width = column.width, padh = column.padh, "column measured");
        }
        debug!(rows = rows.len(), columns = columns.len(), "table analyzed");

        Ok(Layout { columns, rows })
    }

    /// Draws the table line by line.
    pub(crate) fn render(&self, style: &TableStyle) -> Vec<String> {
        let template = &style.template;
        let widths: Vec<usize> = self.columns.iter().map(ColumnLayout::outer_width).collect();
        let blank = framed_row(template, widths.iter().map(|&w| fill(&template.space, w)));

        let mut output = Vec::new();
        push_border(&mut output, horizontal_line(template, LineType::Top, &widths));

        for (index, row) in self.rows.iter().enumerate() {
            output.extend((0..style.padv).map(|_| blank.clone()));

            for sub in 0..row.height {
                let segments = row
                    .cells
                    .iter()
                    .zip(&self.columns)
                    .map(|(cell, column)| render_cell(cell, column, row.height, sub, style))
                    .collect::<Vec<_>>();
                output.push(framed_row(template, segments));
            }

            output.extend((0..style.padv).map(|_| blank.clone()));

            let line_type = if index + 1 < self.rows.len() {
                LineType::Middle
            } else {
                LineType::Bottom
            };
            push_border(&mut output, horizontal_line(template, line_type, &widths));
        }

        output
    }
}

/// Borders whose glyphs are all empty are left out rather than drawn as blank lines.
fn push_border(output: &mut Vec<String>, line: String) {
    if !line.is_empty() {
        output.push(line);
    }
}

/// Pads one cell's sub-line to the column's outer width.
fn render_cell(
    cell: &PreparedCell,
    column: &ColumnLayout,
    height: usize,
    sub: usize,
    style: &TableStyle,
) -> String {
    let space = &style.template.space;
    let outer = column.outer_width();
    let Some(line) = cell.line_at(height, sub, style) else {
        return fill(space, outer);
    };

    let total = outer.saturating_sub(display_width(line));
    let pad = cell.padh.min(total);
    let (left, right) = match cell.align {
        CellAlign::Left => (pad, total - pad),
        CellAlign::Right => (total - pad, pad),
        CellAlign::Center => split_padding(total, style.padhbias),
        CellAlign::Decimal => {
            let float = column.float.unwrap_or_default();
            let (_, frac) = decimal_parts(line);
            let right = (pad + float.right.saturating_sub(frac)).min(total);
            (total - right, right)
        }
    };

    format!("{}{}{}", fill(space, left), line, fill(space, right))
}
