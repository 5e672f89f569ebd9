//! Block style, glyph template, partial override, and the block presets.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{merge_leaf, Align, HBias, NamedStyle};

/// Glyphs used to draw a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTemplate {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    /// Repeated along the top border.
    pub top: String,
    /// Repeated along the bottom border.
    pub bottom: String,
    pub left: String,
    pub right: String,
    /// Fill glyph for padding.
    pub space: String,
}

impl BlockTemplate {
    fn from_glyphs(glyphs: [&str; 9]) -> Self {
        let [top_left, top_right, bottom_left, bottom_right, top, bottom, left, right, space] =
            glyphs.map(String::from);
        BlockTemplate {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            top,
            bottom,
            left,
            right,
            space,
        }
    }

    /// Plain ASCII corners and edges.
    pub fn ascii() -> Self {
        Self::from_glyphs(["*", "*", "*", "*", "-", "-", "|", "|", " "])
    }

    /// A `/** ... */` documentation comment.
    pub fn doc() -> Self {
        Self::from_glyphs(["/**", "", " */", "", "", "", " *", "", " "])
    }

    /// Light box-drawing characters.
    pub fn modern() -> Self {
        Self::from_glyphs(["┌", "┐", "└", "┘", "─", "─", "│", "│", " "])
    }

    /// Applies the glyphs set in `custom`.
    pub fn apply(&mut self, custom: &BlockTemplateOverride) {
        merge_leaf(&mut self.top_left, &custom.top_left);
        merge_leaf(&mut self.top_right, &custom.top_right);
        merge_leaf(&mut self.bottom_left, &custom.bottom_left);
        merge_leaf(&mut self.bottom_right, &custom.bottom_right);
        merge_leaf(&mut self.top, &custom.top);
        merge_leaf(&mut self.bottom, &custom.bottom);
        merge_leaf(&mut self.left, &custom.left);
        merge_leaf(&mut self.right, &custom.right);
        merge_leaf(&mut self.space, &custom.space);
    }
}

impl Default for BlockTemplate {
    fn default() -> Self {
        Self::ascii()
    }
}

/// Glyph overrides for a [`BlockTemplate`]. Unset glyphs are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlockTemplateOverride {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub space: Option<String>,
}

/// Style for [`crate::render_block`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    /// Total width including borders; `0` sizes the block to its content.
    pub width: usize,
    /// Minimum spaces between each border and the content.
    pub padh: usize,
    pub padhbias: HBias,
    /// Blank lines above and below the content.
    pub padv: usize,
    pub align: Align,
    #[serde(alias = "tmpl")]
    pub template: BlockTemplate,
}

impl Default for BlockStyle {
    fn default() -> Self {
        BlockStyle {
            width: 0,
            padh: 1,
            padhbias: HBias::Right,
            padv: 0,
            align: Align::Left,
            template: BlockTemplate::ascii(),
        }
    }
}

impl BlockStyle {
    /// Merges `custom` onto this style; every value set in `custom` wins.
    pub fn apply(&mut self, custom: &BlockStyleOverride) {
        merge_leaf(&mut self.width, &custom.width);
        merge_leaf(&mut self.padh, &custom.padh);
        merge_leaf(&mut self.padhbias, &custom.padhbias);
        merge_leaf(&mut self.padv, &custom.padv);
        merge_leaf(&mut self.align, &custom.align);
        self.template.apply(&custom.template);
    }
}

impl_loaders!(BlockStyle);

static BLOCK_PRESETS: Lazy<BTreeMap<&'static str, BlockStyle>> = Lazy::new(|| {
    let mut presets = BTreeMap::new();
    presets.insert("default", BlockStyle::default());
    presets.insert(
        "doc",
        BlockStyle {
            template: BlockTemplate::doc(),
            ..BlockStyle::default()
        },
    );
    presets.insert(
        "modern",
        BlockStyle {
            template: BlockTemplate::modern(),
            ..BlockStyle::default()
        },
    );
    presets
});

impl NamedStyle for BlockStyle {
    fn preset(name: &str) -> Option<&'static Self> {
        BLOCK_PRESETS.get(name)
    }

    fn preset_names() -> Vec<&'static str> {
        BLOCK_PRESETS.keys().copied().collect()
    }
}

/// Partial [`BlockStyle`] merged onto a resolved style before rendering.
///
/// ```rust
/// use filekit_render::{Align, BlockStyleOverride};
///
/// let custom = BlockStyleOverride::new().width(40).align(Align::Center);
/// assert_eq!(custom.width, Some(40));
/// assert_eq!(custom.padh, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlockStyleOverride {
    pub width: Option<usize>,
    pub padh: Option<usize>,
    pub padhbias: Option<HBias>,
    pub padv: Option<usize>,
    pub align: Option<Align>,
    #[serde(alias = "tmpl")]
    pub template: BlockTemplateOverride,
}

impl BlockStyleOverride {
    /// Create an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn padh(mut self, padh: usize) -> Self {
        self.padh = Some(padh);
        self
    }

    pub fn padhbias(mut self, bias: HBias) -> Self {
        self.padhbias = Some(bias);
        self
    }

    pub fn padv(mut self, padv: usize) -> Self {
        self.padv = Some(padv);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set the glyph overrides.
    pub fn template(mut self, template: BlockTemplateOverride) -> Self {
        self.template = template;
        self
    }
}

impl_loaders!(BlockStyleOverride);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_present() {
        assert_eq!(BlockStyle::preset_names(), vec!["default", "doc", "modern"]);
    }

    #[test]
    fn test_doc_preset_glyphs() {
        let doc = BlockStyle::preset("doc").unwrap();
        assert_eq!(doc.template.top_left, "/**");
        assert_eq!(doc.template.bottom_left, " */");
        assert_eq!(doc.template.left, " *");
        assert_eq!(doc.template.right, "");
        assert_eq!(doc.padh, 1);
    }

    #[test]
    fn test_apply_overrides_only_set_fields() {
        let mut style = BlockStyle::preset("modern").unwrap().clone();
        let custom = BlockStyleOverride::new()
            .padv(2)
            .template(BlockTemplateOverride {
                space: Some(".".into()),
                ..Default::default()
            });
        style.apply(&custom);

        assert_eq!(style.padv, 2);
        assert_eq!(style.padh, 1);
        assert_eq!(style.template.space, ".");
        assert_eq!(style.template.left, "│");
    }

    #[test]
    fn test_apply_does_not_touch_preset() {
        let mut style = BlockStyle::preset("default").unwrap().clone();
        style.apply(&BlockStyleOverride::new().width(99));
        assert_eq!(BlockStyle::preset("default").unwrap().width, 0);
    }

    #[test]
    fn test_override_from_yaml_with_tmpl_alias() {
        let custom = BlockStyleOverride::from_yaml(
            r#"
padh: 3
align: right
tmpl:
  left: "["
  right: "]"
"#,
        )
        .unwrap();
        assert_eq!(custom.padh, Some(3));
        assert_eq!(custom.align, Some(Align::Right));
        assert_eq!(custom.template.left.as_deref(), Some("["));
        assert_eq!(custom.template.top, None);
    }

    #[test]
    fn test_override_rejects_unknown_field() {
        assert!(BlockStyleOverride::from_json(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn test_style_from_json_fills_defaults() {
        let style = BlockStyle::from_json(r#"{"padv": 1}"#).unwrap();
        assert_eq!(style.padv, 1);
        assert_eq!(style.padh, 1);
        assert_eq!(style.template, BlockTemplate::ascii());
    }
}
