//! Table style, glyph template, nested per-column/row/cell overrides, and the
//! table presets.
//!
//! Row indices in [`TableStyle::rows`] and [`TableStyle::config`] address
//! rendered rows: when column labels are on, the label row is row `0` and the
//! first data row is row `1`.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{merge_leaf, merge_option, Align, HBias, NamedStyle, VAlign, VBias};
use crate::table::ColumnKey;

/// Glyphs used to draw a table.
///
/// Corner and junction names describe where the glyph sits in the grid:
/// `top_junction` joins the top border with an inner vertical line,
/// `left_junction` joins the left border with an inner separator, and so on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTemplate {
    pub top_left: String,
    pub top_right: String,
    pub top_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub cross: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub bottom_junction: String,
    /// Fill of separators between rows.
    pub inner_horizontal: String,
    /// Line between columns.
    pub inner_vertical: String,
    pub outer_top: String,
    pub outer_bottom: String,
    pub outer_left: String,
    pub outer_right: String,
    pub space: String,
}

impl TableTemplate {
    /// Plain ASCII: `*` at every junction.
    pub fn ascii() -> Self {
        TableTemplate {
            top_left: "*".into(),
            top_right: "*".into(),
            top_junction: "*".into(),
            left_junction: "*".into(),
            right_junction: "*".into(),
            cross: "*".into(),
            bottom_left: "*".into(),
            bottom_right: "*".into(),
            bottom_junction: "*".into(),
            inner_horizontal: "-".into(),
            inner_vertical: "|".into(),
            outer_top: "-".into(),
            outer_bottom: "-".into(),
            outer_left: "|".into(),
            outer_right: "|".into(),
            space: " ".into(),
        }
    }

    /// Light box-drawing characters.
    pub fn modern() -> Self {
        TableTemplate {
            top_left: "┌".into(),
            top_right: "┐".into(),
            top_junction: "┬".into(),
            left_junction: "├".into(),
            right_junction: "┤".into(),
            cross: "┼".into(),
            bottom_left: "└".into(),
            bottom_right: "┘".into(),
            bottom_junction: "┴".into(),
            inner_horizontal: "─".into(),
            inner_vertical: "│".into(),
            outer_top: "─".into(),
            outer_bottom: "─".into(),
            outer_left: "│".into(),
            outer_right: "│".into(),
            space: " ".into(),
        }
    }

    /// No outer frame; rows separated by dashed lines, columns by `|`.
    pub fn lines() -> Self {
        TableTemplate {
            top_left: String::new(),
            top_right: String::new(),
            top_junction: String::new(),
            left_junction: "-".into(),
            right_junction: "-".into(),
            cross: "-".into(),
            bottom_left: String::new(),
            bottom_right: String::new(),
            bottom_junction: String::new(),
            inner_horizontal: "-".into(),
            inner_vertical: "|".into(),
            outer_top: String::new(),
            outer_bottom: String::new(),
            outer_left: String::new(),
            outer_right: String::new(),
            space: " ".into(),
        }
    }

    /// Applies the glyphs set in `custom`.
    pub fn apply(&mut self, custom: &TableTemplateOverride) {
        merge_leaf(&mut self.top_left, &custom.top_left);
        merge_leaf(&mut self.top_right, &custom.top_right);
        merge_leaf(&mut self.top_junction, &custom.top_junction);
        merge_leaf(&mut self.left_junction, &custom.left_junction);
        merge_leaf(&mut self.right_junction, &custom.right_junction);
        merge_leaf(&mut self.cross, &custom.cross);
        merge_leaf(&mut self.bottom_left, &custom.bottom_left);
        merge_leaf(&mut self.bottom_right, &custom.bottom_right);
        merge_leaf(&mut self.bottom_junction, &custom.bottom_junction);
        merge_leaf(&mut self.inner_horizontal, &custom.inner_horizontal);
        merge_leaf(&mut self.inner_vertical, &custom.inner_vertical);
        merge_leaf(&mut self.outer_top, &custom.outer_top);
        merge_leaf(&mut self.outer_bottom, &custom.outer_bottom);
        merge_leaf(&mut self.outer_left, &custom.outer_left);
        merge_leaf(&mut self.outer_right, &custom.outer_right);
        merge_leaf(&mut self.space, &custom.space);
    }
}

impl Default for TableTemplate {
    fn default() -> Self {
        Self::ascii()
    }
}

/// Glyph overrides for a [`TableTemplate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableTemplateOverride {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub top_junction: Option<String>,
    pub left_junction: Option<String>,
    pub right_junction: Option<String>,
    pub cross: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    pub bottom_junction: Option<String>,
    pub inner_horizontal: Option<String>,
    pub inner_vertical: Option<String>,
    pub outer_top: Option<String>,
    pub outer_bottom: Option<String>,
    pub outer_left: Option<String>,
    pub outer_right: Option<String>,
    pub space: Option<String>,
}

/// Seed widths for decimal-point alignment: digits left and right of the point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatWidths {
    pub left: usize,
    pub right: usize,
}

/// Per-column settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    /// Minimum content width of the column.
    pub width: Option<usize>,
    /// Minimum decimal-point layout for float cells.
    pub float: Option<FloatWidths>,
}

impl ColumnConfig {
    /// A column with a minimum content width.
    pub fn with_width(width: usize) -> Self {
        ColumnConfig {
            width: Some(width),
            float: None,
        }
    }

    fn merge(&mut self, other: &ColumnConfig) {
        merge_option(&mut self.width, &other.width);
        merge_option(&mut self.float, &other.float);
    }
}

/// Per-row settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowConfig {
    /// Minimum height of the row in lines.
    pub height: Option<usize>,
}

impl RowConfig {
    /// A row with a minimum height.
    pub fn with_height(height: usize) -> Self {
        RowConfig {
            height: Some(height),
        }
    }

    fn merge(&mut self, other: &RowConfig) {
        merge_option(&mut self.height, &other.height);
    }
}

/// Per-cell settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CellConfig {
    /// Alignment for this cell. Takes precedence over type-driven alignment.
    pub align: Option<Align>,
    pub valign: Option<VAlign>,
    pub padh: Option<usize>,
}

impl CellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    pub fn padh(mut self, padh: usize) -> Self {
        self.padh = Some(padh);
        self
    }

    fn merge(&mut self, other: &CellConfig) {
        merge_option(&mut self.align, &other.align);
        merge_option(&mut self.valign, &other.valign);
        merge_option(&mut self.padh, &other.padh);
    }
}

/// Style for [`crate::render_table`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Prepend a row holding the column keys.
    pub collabel: bool,
    /// Prepend a column holding row indices.
    pub rowlabel: bool,
    /// Minimum content width of every column.
    pub width: usize,
    /// Minimum height of every row.
    pub height: usize,
    pub padh: usize,
    pub padhbias: HBias,
    /// Blank lines above and below every row.
    pub padv: usize,
    pub padvbias: VBias,
    pub align: Align,
    pub valign: VAlign,
    pub cols: BTreeMap<ColumnKey, ColumnConfig>,
    pub rows: BTreeMap<usize, RowConfig>,
    pub config: BTreeMap<usize, BTreeMap<ColumnKey, CellConfig>>,
    #[serde(alias = "tmpl")]
    pub template: TableTemplate,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            collabel: true,
            rowlabel: true,
            width: 0,
            height: 0,
            padh: 1,
            padhbias: HBias::Right,
            padv: 0,
            padvbias: VBias::Bottom,
            align: Align::Auto,
            valign: VAlign::Auto,
            cols: BTreeMap::new(),
            rows: BTreeMap::new(),
            config: BTreeMap::new(),
            template: TableTemplate::ascii(),
        }
    }
}

impl TableStyle {
    /// Merges `custom` onto this style.
    ///
    /// Scalars set in `custom` replace the current value. The `cols`, `rows`
    /// and `config` maps merge entry by entry, so an override touching one
    /// column keeps the settings of the others.
    pub fn apply(&mut self, custom: &TableStyleOverride) {
        merge_leaf(&mut self.collabel, &custom.collabel);
        merge_leaf(&mut self.rowlabel, &custom.rowlabel);
        merge_leaf(&mut self.width, &custom.width);
        merge_leaf(&mut self.height, &custom.height);
        merge_leaf(&mut self.padh, &custom.padh);
        merge_leaf(&mut self.padhbias, &custom.padhbias);
        merge_leaf(&mut self.padv, &custom.padv);
        merge_leaf(&mut self.padvbias, &custom.padvbias);
        merge_leaf(&mut self.align, &custom.align);
        merge_leaf(&mut self.valign, &custom.valign);

        for (key, column) in &custom.cols {
            self.cols.entry(key.clone()).or_default().merge(column);
        }
        for (index, row) in &custom.rows {
            self.rows.entry(*index).or_default().merge(row);
        }
        for (index, cells) in &custom.config {
            let target = self.config.entry(*index).or_default();
            for (key, cell) in cells {
                target.entry(key.clone()).or_default().merge(cell);
            }
        }

        self.template.apply(&custom.template);
    }

    pub(crate) fn column(&self, key: &ColumnKey) -> Option<&ColumnConfig> {
        self.cols.get(key)
    }

    pub(crate) fn row(&self, index: usize) -> Option<&RowConfig> {
        self.rows.get(&index)
    }

    pub(crate) fn cell(&self, index: usize, key: &ColumnKey) -> Option<&CellConfig> {
        self.config.get(&index).and_then(|cells| cells.get(key))
    }
}

impl_loaders!(TableStyle);

static TABLE_PRESETS: Lazy<BTreeMap<&'static str, TableStyle>> = Lazy::new(|| {
    let mut presets = BTreeMap::new();
    presets.insert("default", TableStyle::default());
    presets.insert(
        "modern",
        TableStyle {
            template: TableTemplate::modern(),
            ..TableStyle::default()
        },
    );
    presets.insert(
        "lines",
        TableStyle {
            template: TableTemplate::lines(),
            ..TableStyle::default()
        },
    );
    presets
});

impl NamedStyle for TableStyle {
    fn preset(name: &str) -> Option<&'static Self> {
        TABLE_PRESETS.get(name)
    }

    fn preset_names() -> Vec<&'static str> {
        TABLE_PRESETS.keys().copied().collect()
    }
}

/// Partial [`TableStyle`] merged onto a resolved style before rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyleOverride {
    pub collabel: Option<bool>,
    pub rowlabel: Option<bool>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub padh: Option<usize>,
    pub padhbias: Option<HBias>,
    pub padv: Option<usize>,
    pub padvbias: Option<VBias>,
    pub align: Option<Align>,
    pub valign: Option<VAlign>,
    pub cols: BTreeMap<ColumnKey, ColumnConfig>,
    pub rows: BTreeMap<usize, RowConfig>,
    pub config: BTreeMap<usize, BTreeMap<ColumnKey, CellConfig>>,
    #[serde(alias = "tmpl")]
    pub template: TableTemplateOverride,
}

impl TableStyleOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collabel(mut self, enable: bool) -> Self {
        self.collabel = Some(enable);
        self
    }

    pub fn rowlabel(mut self, enable: bool) -> Self {
        self.rowlabel = Some(enable);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
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

    pub fn padvbias(mut self, bias: VBias) -> Self {
        self.padvbias = Some(bias);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    /// Set the configuration of one column.
    pub fn column(mut self, key: impl Into<ColumnKey>, config: ColumnConfig) -> Self {
        self.cols.insert(key.into(), config);
        self
    }

    /// Set the configuration of one rendered row.
    pub fn row(mut self, index: usize, config: RowConfig) -> Self {
        self.rows.insert(index, config);
        self
    }

    /// Set the configuration of one cell.
    pub fn cell(mut self, row: usize, key: impl Into<ColumnKey>, config: CellConfig) -> Self {
        self.config
            .entry(row)
            .or_default()
            .insert(key.into(), config);
        self
    }

    pub fn template(mut self, template: TableTemplateOverride) -> Self {
        self.template = template;
        self
    }
}

impl_loaders!(TableStyleOverride);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_present() {
        assert_eq!(
            TableStyle::preset_names(),
            vec!["default", "lines", "modern"]
        );
    }

    #[test]
    fn test_preset_defaults() {
        let style = TableStyle::preset("modern").unwrap();
        assert!(style.collabel);
        assert!(style.rowlabel);
        assert_eq!(style.align, Align::Auto);
        assert_eq!(style.valign, VAlign::Auto);
        assert_eq!(style.padvbias, VBias::Bottom);
        assert_eq!(style.template.cross, "┼");
    }

    #[test]
    fn test_lines_preset_has_no_frame() {
        let style = TableStyle::preset("lines").unwrap();
        assert_eq!(style.template.outer_left, "");
        assert_eq!(style.template.outer_top, "");
        assert_eq!(style.template.inner_vertical, "|");
        assert_eq!(style.template.left_junction, "-");
    }

    #[test]
    fn test_apply_merges_nested_maps() {
        let mut style = TableStyle::default();
        style.apply(
            &TableStyleOverride::new()
                .column("name", ColumnConfig::with_width(10))
                .cell(1, "id", CellConfig::new().align(Align::Left)),
        );
        style.apply(
            &TableStyleOverride::new()
                .column("id", ColumnConfig::with_width(4))
                .cell(1, "id", CellConfig::new().padh(2)),
        );

        assert_eq!(style.cols.len(), 2);
        assert_eq!(style.column(&"name".into()).unwrap().width, Some(10));

        let cell = style.cell(1, &"id".into()).unwrap();
        assert_eq!(cell.align, Some(Align::Left));
        assert_eq!(cell.padh, Some(2));
    }

    #[test]
    fn test_apply_column_leaf_wins() {
        let mut style = TableStyle::default();
        style.apply(&TableStyleOverride::new().column(
            "price",
            ColumnConfig {
                width: Some(8),
                float: Some(FloatWidths { left: 3, right: 2 }),
            },
        ));
        style.apply(&TableStyleOverride::new().column("price", ColumnConfig::with_width(12)));

        let column = style.column(&"price".into()).unwrap();
        assert_eq!(column.width, Some(12));
        assert_eq!(column.float, Some(FloatWidths { left: 3, right: 2 }));
    }

    #[test]
    fn test_override_from_yaml() {
        let custom = TableStyleOverride::from_yaml(
            r##"
collabel: false
padv: 1
cols:
  name:
    width: 12
  0:
    width: 3
rows:
  2:
    height: 4
config:
  1:
    name:
      align: right
tmpl:
  cross: "#"
"##,
        )
        .unwrap();

        assert_eq!(custom.collabel, Some(false));
        assert_eq!(custom.padv, Some(1));
        assert_eq!(
            custom.cols.get(&ColumnKey::from("name")),
            Some(&ColumnConfig::with_width(12))
        );
        assert_eq!(
            custom.cols.get(&ColumnKey::Index(0)),
            Some(&ColumnConfig::with_width(3))
        );
        assert_eq!(custom.rows.get(&2), Some(&RowConfig::with_height(4)));
        assert_eq!(
            custom.config[&1][&ColumnKey::from("name")].align,
            Some(Align::Right)
        );
        assert_eq!(custom.template.cross.as_deref(), Some("#"));
    }

    #[test]
    fn test_override_from_json_numeric_keys() {
        let custom =
            TableStyleOverride::from_json(r#"{"rows": {"0": {"height": 2}}, "cols": {"1": {"width": 5}}}"#)
                .unwrap();
        assert_eq!(custom.rows.get(&0), Some(&RowConfig::with_height(2)));
        assert_eq!(
            custom.cols.get(&ColumnKey::Index(1)),
            Some(&ColumnConfig::with_width(5))
        );
    }
}
