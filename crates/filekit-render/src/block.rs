//! Framed text blocks.
//!
//! A block draws a border around one or more lines of text. The block is as
//! wide as its widest line plus padding and borders, unless the style asks for
//! a fixed width.

use tracing::debug;

use crate::error::{RenderError, Result};
use crate::measure::{display_width, fill, join_lines, split_padding, EOL};
use crate::style::{Align, BlockStyle, BlockStyleOverride, StyleRef};

/// Text to put inside a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockContent {
    /// A single string, split on [`EOL`].
    Text(String),
    /// Lines given one by one.
    Lines(Vec<String>),
}

impl BlockContent {
    fn into_lines(self) -> Result<Vec<String>> {
        let lines = match self {
            BlockContent::Text(text) if !text.is_empty() => {
                text.split(EOL).map(String::from).collect()
            }
            BlockContent::Lines(lines) if !lines.is_empty() => lines
                .iter()
                .flat_map(|line| line.split(EOL))
                .map(String::from)
                .collect(),
            _ => {
                return Err(RenderError::invalid_argument(
                    "content",
                    "non-empty string or array of strings",
                ))
            }
        };
        Ok(lines)
    }
}

impl From<&str> for BlockContent {
    fn from(text: &str) -> Self {
        BlockContent::Text(text.to_string())
    }
}

impl From<String> for BlockContent {
    fn from(text: String) -> Self {
        BlockContent::Text(text)
    }
}

impl From<Vec<String>> for BlockContent {
    fn from(lines: Vec<String>) -> Self {
        BlockContent::Lines(lines)
    }
}

impl From<Vec<&str>> for BlockContent {
    fn from(lines: Vec<&str>) -> Self {
        BlockContent::Lines(lines.into_iter().map(String::from).collect())
    }
}

/// Builder for a single block render.
///
/// ```rust
/// use filekit_render::{Block, BlockStyleOverride};
///
/// let lines = Block::new(vec!["one", "three"])
///     .style("modern")
///     .custom(BlockStyleOverride::new().padh(0))
///     .lines()
///     .unwrap();
/// assert_eq!(lines, vec!["┌─────┐", "│one  │", "│three│", "└─────┘"]);
/// ```
#[derive(Clone, Debug)]
pub struct Block {
    content: BlockContent,
    style: StyleRef<BlockStyle>,
    custom: Option<BlockStyleOverride>,
    auto_fix_width: bool,
}

impl Block {
    pub fn new(content: impl Into<BlockContent>) -> Self {
        Block {
            content: content.into(),
            style: StyleRef::default(),
            custom: None,
            auto_fix_width: true,
        }
    }

    /// Set the base style, either a preset name or a [`BlockStyle`].
    pub fn style(mut self, style: impl Into<StyleRef<BlockStyle>>) -> Self {
        self.style = style.into();
        self
    }

    /// Set an override merged onto the base style.
    pub fn custom(mut self, custom: BlockStyleOverride) -> Self {
        self.custom = Some(custom);
        self
    }

    /// When set (the default), a fixed width too small for the content falls
    /// back to sizing the block to its content instead of failing.
    pub fn auto_fix_width(mut self, enable: bool) -> Self {
        self.auto_fix_width = enable;
        self
    }

    /// Renders the block as separate lines.
    pub fn lines(self) -> Result<Vec<String>> {
        let content = self.content.into_lines()?;
        let mut style = self.style.resolve()?;
        if let Some(custom) = &self.custom {
            style.apply(custom);
        }
        let tmpl = &style.template;

        let left_width = display_width(&tmpl.left);
        let right_width = display_width(&tmpl.right);
        let max_width = content.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let min_width = max_width + 2 * style.padh + left_width + right_width;

        let mut width = style.width;
        if width != 0 && min_width > width {
            if !self.auto_fix_width {
                return Err(RenderError::invalid_argument(
                    "style.width",
                    format!("integer and larger or equal to {}", min_width),
                ));
            }
            debug!(requested = width, required = min_width, "block width too small, sizing to content");
            width = 0;
        }
        if width == 0 {
            width = min_width;
        }

        let inner = width - left_width - right_width;
        let frame = |body: String| format!("{}{}{}", tmpl.left, body, tmpl.right);
        let blank = frame(fill(&tmpl.space, inner));

        let mut lines = Vec::with_capacity(content.len() + 2 * style.padv + 2);
        lines.push(format!(
            "{}{}{}",
            tmpl.top_left,
            fill(
                &tmpl.top,
                width.saturating_sub(display_width(&tmpl.top_left) + display_width(&tmpl.top_right))
            ),
            tmpl.top_right
        ));
        lines.extend((0..style.padv).map(|_| blank.clone()));

        for line in &content {
            let total = inner - display_width(line);
            let (lpad, rpad) = match style.align {
                Align::Left => (style.padh, total - style.padh),
                Align::Right => (total - style.padh, style.padh),
                Align::Center | Align::Auto => split_padding(total, style.padhbias),
            };
            lines.push(frame(format!(
                "{}{}{}",
                fill(&tmpl.space, lpad),
                line,
                fill(&tmpl.space, rpad)
            )));
        }

        lines.extend((0..style.padv).map(|_| blank.clone()));
        lines.push(format!(
            "{}{}{}",
            tmpl.bottom_left,
            fill(
                &tmpl.bottom,
                width.saturating_sub(
                    display_width(&tmpl.bottom_left) + display_width(&tmpl.bottom_right)
                )
            ),
            tmpl.bottom_right
        ));

        debug!(width, lines = lines.len(), "block rendered");
        Ok(lines)
    }

    /// Renders the block as one string, each line terminated by [`EOL`].
    pub fn render(self) -> Result<String> {
        self.lines().map(|lines| join_lines(&lines))
    }
}

/// Renders `content` inside a framed block.
///
/// `style` is a preset name (`default`, `doc`, `modern`) or an explicit
/// [`BlockStyle`]; `custom` is merged onto it for this call only.
///
/// ```rust
/// use filekit_render::render_block;
///
/// let out = render_block("hello", "default", None, true).unwrap();
/// assert_eq!(out, "*-------*\n| hello |\n*-------*\n");
/// ```
pub fn render_block(
    content: impl Into<BlockContent>,
    style: impl Into<StyleRef<BlockStyle>>,
    custom: Option<&BlockStyleOverride>,
    auto_fix_width: bool,
) -> Result<String> {
    render_block_lines(content, style, custom, auto_fix_width).map(|lines| join_lines(&lines))
}

/// Like [`render_block`], returning the lines without separators.
pub fn render_block_lines(
    content: impl Into<BlockContent>,
    style: impl Into<StyleRef<BlockStyle>>,
    custom: Option<&BlockStyleOverride>,
    auto_fix_width: bool,
) -> Result<Vec<String>> {
    let mut block = Block::new(content)
        .style(style)
        .auto_fix_width(auto_fix_width);
    if let Some(custom) = custom {
        block = block.custom(custom.clone());
    }
    block.lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BlockTemplateOverride, HBias};

    #[test]
    fn test_default_block() {
        let lines = render_block_lines("hello", "default", None, true).unwrap();
        assert_eq!(lines, vec!["*-------*", "| hello |", "*-------*"]);
    }

    #[test]
    fn test_multi_line_text_left_aligned() {
        let lines = render_block_lines("a\nbcd", "default", None, true).unwrap();
        assert_eq!(lines, vec!["*-----*", "| a   |", "| bcd |", "*-----*"]);
    }

    #[test]
    fn test_doc_preset() {
        let lines = render_block_lines("hello", "doc", None, true).unwrap();
        assert_eq!(lines, vec!["/**", " * hello ", " */"]);
    }

    #[test]
    fn test_modern_preset_padv() {
        let custom = BlockStyleOverride::new().padv(1);
        let lines = render_block_lines("hi", "modern", Some(&custom), true).unwrap();
        assert_eq!(lines, vec!["┌────┐", "│    │", "│ hi │", "│    │", "└────┘"]);
    }

    #[test]
    fn test_fixed_width_right_align() {
        let custom = BlockStyleOverride::new().width(10).align(Align::Right);
        let lines = render_block_lines("abc", "default", Some(&custom), false).unwrap();
        assert_eq!(lines, vec!["*--------*", "|    abc |", "*--------*"]);
    }

    #[test]
    fn test_center_split_follows_bias() {
        let custom = BlockStyleOverride::new().width(10).align(Align::Center);
        let lines = render_block_lines("abc", "default", Some(&custom), false).unwrap();
        assert_eq!(lines[1], "|  abc   |");

        let custom = custom.padhbias(HBias::Left);
        let lines = render_block_lines("abc", "default", Some(&custom), false).unwrap();
        assert_eq!(lines[1], "|   abc  |");
    }

    #[test]
    fn test_width_too_small_fails_without_auto_fix() {
        let custom = BlockStyleOverride::new().width(5);
        let err = render_block("hello", "default", Some(&custom), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter style.width must be of type integer and larger or equal to 9"
        );
    }

    #[test]
    fn test_width_too_small_auto_fixes() {
        let custom = BlockStyleOverride::new().width(5);
        let lines = render_block_lines("hello", "default", Some(&custom), true).unwrap();
        assert_eq!(lines[0], "*-------*");
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(render_block("", "default", None, true).is_err());
        assert!(render_block(Vec::<String>::new(), "default", None, true).is_err());
    }

    #[test]
    fn test_custom_glyphs() {
        let custom = BlockStyleOverride::new().template(BlockTemplateOverride {
            left: Some("[[".into()),
            right: Some("]]".into()),
            ..Default::default()
        });
        let lines = render_block_lines("x", "default", Some(&custom), true).unwrap();
        assert_eq!(lines, vec!["*-----*", "[[ x ]]", "*-----*"]);
    }

    #[test]
    fn test_lines_containing_separators_are_split() {
        let lines = render_block_lines(vec!["a\nb", "c"], "default", None, true).unwrap();
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_wide_and_combining_characters_fill_the_frame() {
        let lines = render_block_lines("日本", "default", None, true).unwrap();
        assert_eq!(lines, vec!["*----*", "| 日本 |", "*----*"]);

        let lines = render_block_lines(vec!["e\u{301}x", "abc"], "default", None, true).unwrap();
        for line in &lines {
            assert_eq!(line.chars().count(), 7);
        }
    }

    #[test]
    fn test_explicit_style() {
        let style = BlockStyle {
            padh: 0,
            ..BlockStyle::default()
        };
        let lines = render_block_lines("x", style, None, true).unwrap();
        assert_eq!(lines, vec!["*-*", "|x|", "*-*"]);
    }
}
