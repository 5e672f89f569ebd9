//! Table data: column keys, typed cell values, and rows.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{RenderError, Result};

/// Identifies a column.
///
/// In style documents a key made only of digits is read as an index and the
/// empty key `""` addresses the row-label column.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    /// Positional column of a list-shaped row.
    Index(usize),
    /// Named column of a map-shaped row.
    Name(String),
    /// The synthetic row-label column.
    RowLabel,
}

impl ColumnKey {
    /// Parses a key as written in a style document.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            ColumnKey::RowLabel
        } else if s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse().map(ColumnKey::Index).unwrap_or_else(|_| ColumnKey::Name(s.into()))
        } else {
            ColumnKey::Name(s.into())
        }
    }

    /// The value shown for this key in the column-label row.
    pub(crate) fn label(&self) -> CellValue {
        match self {
            ColumnKey::Index(index) => CellValue::Int(*index as i64),
            ColumnKey::Name(name) => CellValue::Str(name.clone()),
            ColumnKey::RowLabel => CellValue::Str(String::new()),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Index(index) => write!(f, "{}", index),
            ColumnKey::Name(name) => f.write_str(name),
            ColumnKey::RowLabel => Ok(()),
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        ColumnKey::Name(name.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(name: String) -> Self {
        ColumnKey::Name(name)
    }
}

impl From<usize> for ColumnKey {
    fn from(index: usize) -> Self {
        ColumnKey::Index(index)
    }
}

impl Serialize for ColumnKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ColumnKey::Index(index) => serializer.serialize_u64(*index as u64),
            ColumnKey::Name(name) => serializer.serialize_str(name),
            ColumnKey::RowLabel => serializer.serialize_str(""),
        }
    }
}

struct ColumnKeyVisitor;

impl<'de> Visitor<'de> for ColumnKeyVisitor {
    type Value = ColumnKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a column name or a non-negative column index")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ColumnKey, E> {
        usize::try_from(v)
            .map(ColumnKey::Index)
            .map_err(|_| E::custom(format!("column index {} out of range", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ColumnKey, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("column index {} is negative", v)))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ColumnKey, E> {
        Ok(ColumnKey::parse(v))
    }
}

impl<'de> Deserialize<'de> for ColumnKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ColumnKeyVisitor)
    }
}

/// One table row: cells keyed by column, in insertion order.
pub type Row = IndexMap<ColumnKey, CellValue>;

/// Builds a [`Row`] from key/value pairs.
///
/// ```rust
/// use filekit_render::{row, CellValue};
///
/// let r = row([("id", CellValue::from(1)), ("name", "siux".into())]);
/// assert_eq!(r.len(), 2);
/// ```
pub fn row<K, V, I>(cells: I) -> Row
where
    K: Into<ColumnKey>,
    V: Into<CellValue>,
    I: IntoIterator<Item = (K, V)>,
{
    cells
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// A table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A nested table, rendered with the `default` table preset.
    Table(Vec<Row>),
}

/// The runtime type of a cell, which drives `auto` alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    String,
    Integer,
    Float,
    Boolean,
    Array,
}

impl CellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::String => "string",
            CellKind::Integer => "integer",
            CellKind::Float => "float",
            CellKind::Boolean => "boolean",
            CellKind::Array => "array",
        }
    }

    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, CellKind::Integer | CellKind::Float)
    }
}

impl CellValue {
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Str(_) => CellKind::String,
            CellValue::Int(_) => CellKind::Integer,
            CellValue::Float(_) => CellKind::Float,
            CellValue::Bool(_) => CellKind::Boolean,
            CellValue::Table(_) => CellKind::Array,
        }
    }
}

/// Converts a cell to the text that gets measured and drawn.
///
/// Floats without a fractional part gain `.0`, booleans become `true` /
/// `false`, and nested tables are rendered with the `default` preset.
pub fn cell_to_string(value: &CellValue) -> Result<String> {
    Ok(match value {
        CellValue::Str(s) => s.clone(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => float_to_string(*f),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Table(rows) => super::render_table(rows, "default", None)?,
    })
}

/// Significant digits kept when formatting a float cell.
const FLOAT_PRECISION: usize = 14;

/// Formats a float with [`FLOAT_PRECISION`] significant digits.
///
/// Magnitudes below `1e-4` or from `1e14` up use exponent form (`1.0E+20`).
/// Whole values gain `.0`; non-finite values become `NAN`, `INF`, `-INF`.
fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let text = significant(value, FLOAT_PRECISION);
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn significant(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let point = if mantissa.contains('.') { "" } else { ".0" };
        return format!("{}{}{}E{}{}", sign, mantissa, point, exp_sign, exponent.abs());
    }

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let (int, frac) = if exponent >= 0 {
        let split = exponent as usize + 1;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        ("0".to_string(), format!("{}{}", zeros, digits))
    };
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", sign, int)
    } else {
        format!("{}{}.{}", sign, int, frac)
    }
}

macro_rules! cell_from {
    ($($ty:ty => $variant:ident via $conv:expr),+ $(,)?) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    CellValue::$variant($conv(value))
                }
            }
        )+
    };
}

cell_from! {
    &str => Str via String::from,
    String => Str via std::convert::identity,
    i64 => Int via std::convert::identity,
    i32 => Int via i64::from,
    u32 => Int via i64::from,
    f64 => Float via std::convert::identity,
    f32 => Float via f64::from,
    bool => Bool via std::convert::identity,
    Vec<Row> => Table via std::convert::identity,
}

/// Converts a JSON array of rows into table data.
///
/// Each row may be an object (named columns) or an array (indexed columns).
/// Nested arrays or objects inside a row become nested tables; `null` is
/// rejected.
///
/// ```rust
/// use filekit_render::rows_from_json;
/// use serde_json::json;
///
/// let rows = rows_from_json(&json!([{"id": 1, "name": "siux"}])).unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
pub fn rows_from_json(value: &Value) -> Result<Vec<Row>> {
    let invalid = || RenderError::invalid_argument("data", "array containing arrays with field values");
    let rows = value.as_array().ok_or_else(invalid)?;
    rows.iter()
        .enumerate()
        .map(|(index, row)| -> Result<Row> {
            match row {
                Value::Object(fields) => fields
                    .iter()
                    .map(|(key, cell)| {
                        let key = ColumnKey::Name(key.clone());
                        let value = cell_from_json(cell, index, &key)?;
                        Ok::<_, RenderError>((key, value))
                    })
                    .collect(),
                Value::Array(cells) => cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| {
                        let key = ColumnKey::Index(column);
                        let value = cell_from_json(cell, index, &key)?;
                        Ok::<_, RenderError>((key, value))
                    })
                    .collect(),
                _ => Err(invalid()),
            }
        })
        .collect()
}

fn cell_from_json(value: &Value, row: usize, column: &ColumnKey) -> Result<CellValue> {
    match value {
        Value::String(s) => Ok(CellValue::Str(s.clone())),
        Value::Bool(b) => Ok(CellValue::Bool(*b)),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => CellValue::Int(i),
            None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::Array(_) | Value::Object(_) => Ok(CellValue::Table(rows_from_json(
            &normalize_nested(value),
        )?)),
        Value::Null => Err(RenderError::invalid_argument(
            format!("value for row {} col {}", row, column),
            "string|integer|float|boolean|array not null",
        )),
    }
}

/// A nested object is a single row; a nested array is a list of rows.
fn normalize_nested(value: &Value) -> Value {
    match value {
        Value::Object(_) => Value::Array(vec![value.clone()]),
        other => other.clone(),
    }
}
