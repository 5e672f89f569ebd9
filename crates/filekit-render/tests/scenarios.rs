use filekit_render::{
    render_block, render_table, render_table_lines, rows_from_json, BlockStyle,
    BlockStyleOverride, RenderError, StyleRef, TableStyle, TableStyleOverride,
};
use serde_json::json;

#[test]
fn json_records_render_with_labels() {
    let data = rows_from_json(&json!([
        {"name": "siux", "age": 7, "score": 9.5, "active": true},
        {"name": "bo", "age": 12, "score": 10.25, "active": false},
    ]))
    .unwrap();

    let out = render_table(&data, "default", None).unwrap();
    assert_eq!(
        out,
        "\
*---*------*-----*-------*--------*
|   | name | age | score | active |
*---*------*-----*-------*--------*
| 1 | siux |   7 |  9.5  |  true  |
*---*------*-----*-------*--------*
| 2 | bo   |  12 | 10.25 | false  |
*---*------*-----*-------*--------*
"
    );
}

#[test]
fn single_record_is_numbered_after_label_row() {
    let data = rows_from_json(&json!([{"id": 1, "name": "siux"}])).unwrap();
    let lines = render_table_lines(&data, "default", None).unwrap();
    assert_eq!(
        lines,
        vec![
            "*---*----*------*",
            "|   | id | name |",
            "*---*----*------*",
            "| 1 |  1 | siux |",
            "*---*----*------*",
        ]
    );

    let custom = TableStyleOverride::new().collabel(false);
    let lines = render_table_lines(&data, "default", Some(&custom)).unwrap();
    assert_eq!(lines[1], "| 0 | 1 | siux |");
}

#[test]
fn json_arrays_use_index_labels() {
    let data = rows_from_json(&json!([["a", "b"], ["c", "d"]])).unwrap();
    let out = render_table(&data, "modern", None).unwrap();
    assert_eq!(
        out,
        "\
┌───┬───┬───┐
│   │ 0 │ 1 │
├───┼───┼───┤
│ 1 │ a │ b │
├───┼───┼───┤
│ 2 │ c │ d │
└───┴───┴───┘
"
    );
}

#[test]
fn yaml_override_configures_columns_and_cells() {
    let custom = TableStyleOverride::from_yaml(
        r#"
rowlabel: false
collabel: false
cols:
  name:
    width: 6
config:
  1:
    name:
      align: right
"#,
    )
    .unwrap();
    let data = rows_from_json(&json!([{"name": "ab"}, {"name": "cd"}])).unwrap();

    let out = render_table(&data, "default", Some(&custom)).unwrap();
    assert_eq!(
        out,
        "\
*--------*
| ab     |
*--------*
|     cd |
*--------*
"
    );
}

#[test]
fn explicit_table_style_from_json() {
    let style = TableStyle::from_json(r#"{"collabel": false, "rowlabel": false, "padh": 2}"#).unwrap();
    let data = rows_from_json(&json!([[1]])).unwrap();
    let out = render_table(&data, StyleRef::from(style), None).unwrap();
    assert_eq!(out, "*-----*\n|  1  |\n*-----*\n");
}

#[test]
fn doc_block_with_yaml_override() {
    let custom = BlockStyleOverride::from_yaml("padv: 1\n").unwrap();
    let out = render_block("fn main()", "doc", Some(&custom), true).unwrap();
    assert_eq!(out, "/**\n *           \n * fn main() \n *           \n */\n");
}

#[test]
fn explicit_block_style_from_yaml() {
    let style = BlockStyle::from_yaml("padh: 0\nalign: right\nwidth: 6\n").unwrap();
    let out = render_block(vec!["a", "bb"], style, None, false).unwrap();
    assert_eq!(out, "*----*\n|   a|\n|  bb|\n*----*\n");
}

#[test]
fn errors_carry_parameter_and_type() {
    let err = rows_from_json(&json!({"not": "rows"})).unwrap_err();
    assert!(matches!(err, RenderError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "Parameter data must be of type array containing arrays with field values"
    );

    let err = render_block("x", "nope", None, true).unwrap_err();
    assert!(err.to_string().starts_with("Parameter style must be of type default|doc|modern"));
}
