//! Border lines and framed rows.
//!
//! Every border-drawing site (top, separators, bottom, content rows) picks the
//! glyph after a column the same way: the last column gets the closing glyph,
//! every other column gets a junction.

use crate::measure::fill;
use crate::style::TableTemplate;

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineType {
    Top,
    Middle,
    Bottom,
}

impl LineType {
    /// Returns `(start, fill, junction, end)` glyphs for this line.
    fn glyphs(self, template: &TableTemplate) -> (&str, &str, &str, &str) {
        match self {
            LineType::Top => (
                template.top_left.as_str(),
                template.outer_top.as_str(),
                template.top_junction.as_str(),
                template.top_right.as_str(),
            ),
            LineType::Middle => (
                template.left_junction.as_str(),
                template.inner_horizontal.as_str(),
                template.cross.as_str(),
                template.right_junction.as_str(),
            ),
            LineType::Bottom => (
                template.bottom_left.as_str(),
                template.outer_bottom.as_str(),
                template.bottom_junction.as_str(),
                template.bottom_right.as_str(),
            ),
        }
    }
}

/// Draws a horizontal line across columns of the given outer widths.
pub(crate) fn horizontal_line(template: &TableTemplate, line_type: LineType, widths: &[usize]) -> String {
    let (start, edge, junction, end) = line_type.glyphs(template);
    let last = widths.len().saturating_sub(1);

    let mut line = String::from(start);
    for (i, &width) in widths.iter().enumerate() {
        line.push_str(&fill(edge, width));
        line.push_str(if i == last { end } else { junction });
    }
    line
}

/// Joins already padded cell segments with the outer and inner vertical borders.
pub(crate) fn framed_row<I>(template: &TableTemplate, segments: I) -> String
where
    I: IntoIterator<Item = String>,
    I::IntoIter: ExactSizeIterator,
{
    let segments = segments.into_iter();
    let last = segments.len().saturating_sub(1);

    let mut line = template.outer_left.clone();
    for (i, segment) in segments.enumerate() {
        line.push_str(&segment);
        line.push_str(if i == last {
            &template.outer_right
        } else {
            &template.inner_vertical
        });
    }
    line
}
