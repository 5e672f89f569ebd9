//! Width measurement and padding distribution.
//!
//! Both renderers measure text in characters rather than bytes, so
//! multi-byte glyphs such as box-drawing characters count as one column.
//! Content width and border width use the same unit, which keeps every
//! rendered line exactly as long as the borders around it.
//! Padding budgets are split between two sides with [`split_padding`] and
//! [`split_vertical`], which always hand out the full budget.

use crate::style::{HBias, VBias};

/// Line separator used to split input and join output.
pub const EOL: &str = "\n";

/// Measured size of a possibly multi-line string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Display width of the widest line.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

/// Returns the width of a single line, counted in characters.
///
/// # Example
///
/// ```rust
/// use filekit_render::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("┌─┐"), 3);
/// assert_eq!(display_width("日本"), 2);
/// ```
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Measures the widest line and the line count of `s`.
///
/// An empty string is one line of width zero.
pub fn measure(s: &str) -> Dimensions {
    s.split(EOL).fold(Dimensions::default(), |acc, line| Dimensions {
        width: acc.width.max(display_width(line)),
        height: acc.height + 1,
    })
}

/// Splits a horizontal padding budget into `(left, right)`.
///
/// The side named by `bias` receives the larger half of an odd budget.
pub fn split_padding(total: usize, bias: HBias) -> (usize, usize) {
    let small = total / 2;
    let large = total - small;
    match bias {
        HBias::Right => (small, large),
        HBias::Left => (large, small),
    }
}

/// Splits a vertical gap into `(top, bottom)`.
///
/// With [`VBias::Bottom`] the top gap is floored and the bottom gap gets the
/// remainder; [`VBias::Top`] does the opposite.
pub fn split_vertical(gap: usize, bias: VBias) -> (usize, usize) {
    let small = gap / 2;
    let large = gap - small;
    match bias {
        VBias::Bottom => (small, large),
        VBias::Top => (large, small),
    }
}

/// Repeats `glyph` `count` times.
pub(crate) fn fill(glyph: &str, count: usize) -> String {
    glyph.repeat(count)
}

/// Joins rendered lines with [`EOL`], terminating the last line as well.
pub(crate) fn join_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + EOL.len()).sum());
    for line in lines {
        out.push_str(line);
        out.push_str(EOL);
    }
    out
}
