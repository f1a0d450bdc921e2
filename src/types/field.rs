//! Form field set and numeric coercion

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::{PredictError, Result};

/// Largest integer a JSON consumer can hold without losing precision (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A coerced field value: either the raw text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Number),
    Text(String),
}

impl FieldValue {
    /// Get the numeric value, if the field was coerced to a number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            FieldValue::Number(n) => Some(n),
            FieldValue::Text(_) => None,
        }
    }

    /// Get the text, if the field stayed a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Number(n) => Value::Number(n),
            FieldValue::Text(s) => Value::String(s),
        }
    }
}

/// Coerce one raw form value into a string or a number.
///
/// Policy:
/// - surrounding whitespace is ignored for the numeric test
/// - empty and whitespace-only values are not numeric and stay strings
/// - only finite decimal literals count (`42`, `-3.5`, `.5`, `+7`, `1e3`);
///   `NaN`, `inf`, hex and digit separators stay strings
/// - integral values within ±2^53 become JSON integers, so `"42"` and
///   `"42.0"` both serialize as `42`
///
/// A value that stays a string is returned untouched, whitespace included.
///
/// ```rust
/// # use predictform::{coerce_field_value, FieldValue};
/// assert_eq!(coerce_field_value("42"), FieldValue::Number(serde_json::Number::from(42)));
/// assert_eq!(coerce_field_value("abc"), FieldValue::Text("abc".into()));
/// assert_eq!(coerce_field_value(""), FieldValue::Text(String::new()));
/// ```
pub fn coerce_field_value(raw: &str) -> FieldValue {
    parse_numeric(raw.trim())
        .map(FieldValue::Number)
        .unwrap_or_else(|| FieldValue::Text(raw.to_string()))
}

fn parse_numeric(s: &str) -> Option<Number> {
    // `f64::from_str` also accepts "inf", "infinity" and "nan"; require a digit
    // and only the characters of a decimal literal.
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }

    let value: f64 = s.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// The flattened name -> raw value view of a form at submission time.
///
/// Insertion order is preserved. Inserting a name that already exists keeps
/// its original position and replaces the value, so a form yields one value
/// per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing the value of an existing name in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Raw value for a field name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a `NAME=VALUE` pair. The value may be empty or contain `=`.
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (name, value) = pair.split_once('=')?;
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.to_string()))
    }

    /// Build a field set from a JSON object.
    ///
    /// Form inputs only hold text: `null` becomes `""`, strings are taken as
    /// is, and other values become their compact JSON text. Anything other
    /// than a JSON object is an error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(json)?;
        Ok(object
            .into_iter()
            .map(|(name, value)| {
                let raw = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (name, raw)
            })
            .collect())
    }

    /// Insert `NAME=VALUE` pairs in order, later pairs overriding earlier values.
    pub fn apply_pairs<S: AsRef<str>>(&mut self, pairs: &[S]) -> Result<()> {
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) = Self::parse_pair(pair).ok_or_else(|| {
                PredictError::InvalidInput(format!("expected NAME=VALUE, got {pair:?}"))
            })?;
            self.insert(name, value);
        }
        Ok(())
    }

    /// Collect fields from an optional JSON file, then `NAME=VALUE` pairs.
    pub fn from_sources<S: AsRef<str>>(fields_file: Option<&Path>, pairs: &[S]) -> Result<Self> {
        let mut fields = match fields_file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    PredictError::InvalidInput(format!("failed to read fields file {path:?}: {e}"))
                })?;
                Self::from_json_str(&content)?
            }
            None => Self::new(),
        };
        fields.apply_pairs(pairs)?;
        Ok(fields)
    }
}

impl<N, V> FromIterator<(N, V)> for FormFields
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(raw: &str) -> Option<String> {
        coerce_field_value(raw).as_number().map(|n| n.to_string())
    }

    #[test]
    fn integers_stay_integers() {
        assert_eq!(number("42"), Some("42".to_string()));
        assert_eq!(number("-7"), Some("-7".to_string()));
        assert_eq!(number("+7"), Some("7".to_string()));
        assert_eq!(number("42.0"), Some("42".to_string()));
        assert_eq!(number("1e3"), Some("1000".to_string()));
    }

    #[test]
    fn fractions_become_floats() {
        assert_eq!(number("3.5"), Some("3.5".to_string()));
        assert_eq!(number(".5"), Some("0.5".to_string()));
        assert_eq!(number("-74.006"), Some("-74.006".to_string()));
    }

    #[test]
    fn empty_string_stays_string() {
        assert_eq!(coerce_field_value(""), FieldValue::Text(String::new()));
    }

    #[test]
    fn whitespace_only_stays_string_untouched() {
        assert_eq!(coerce_field_value("   "), FieldValue::Text("   ".to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_numbers() {
        assert_eq!(number("  12  "), Some("12".to_string()));
        assert_eq!(number("\t3.25\n"), Some("3.25".to_string()));
    }

    #[test]
    fn non_numeric_text_stays_string() {
        for raw in ["abc", "12abc", "1 2", "Clear", "Day", "0x1A", "1_000", "--1"] {
            assert_eq!(
                coerce_field_value(raw),
                FieldValue::Text(raw.to_string()),
                "{raw:?} should stay text"
            );
        }
    }

    #[test]
    fn non_finite_literals_stay_strings() {
        for raw in ["NaN", "nan", "inf", "Infinity", "-infinity", "1e400"] {
            assert!(coerce_field_value(raw).as_text().is_some(), "{raw:?}");
        }
    }

    #[test]
    fn huge_integral_values_become_floats() {
        let value = coerce_field_value("1e20");
        let n = value.as_number().unwrap();
        assert!(n.is_f64());
        assert_eq!(n.as_f64(), Some(1e20));
    }

    #[test]
    fn coercion_is_deterministic() {
        for raw in ["42", "abc", "", "  12  ", "3.5"] {
            assert_eq!(coerce_field_value(raw), coerce_field_value(raw));
        }
    }

    #[test]
    fn duplicate_name_keeps_position_takes_last_value() {
        let fields = FormFields::new()
            .with("a", "1")
            .with("b", "2")
            .with("a", "3");
        let pairs: Vec<_> = fields.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn json_object_values_become_text() {
        let fields = FormFields::from_json_str(
            r#"{"City": "Dallas", "Hour": 17, "Lat": 32.5, "Signal": true, "Notes": null}"#,
        )
        .unwrap();
        let pairs: Vec<_> = fields.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("City", "Dallas"),
                ("Hour", "17"),
                ("Lat", "32.5"),
                ("Signal", "true"),
                ("Notes", ""),
            ]
        );
    }

    #[test]
    fn json_non_object_is_json_error() {
        for json in [r#"["City", "Dallas"]"#, "42", "not json"] {
            let err = FormFields::from_json_str(json).unwrap_err();
            assert!(matches!(err, PredictError::Json(_)), "{json:?}");
        }
    }

    #[test]
    fn apply_pairs_rejects_malformed_pair() {
        let mut fields = FormFields::new();
        let err = fields.apply_pairs(&["City=Dallas", "Hour"]).unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
        assert!(err.to_string().contains("\"Hour\""));
    }

    #[test]
    fn file_fields_come_first_and_pairs_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        std::fs::write(&path, r#"{"City": "Austin", "Hour": "8", "Year": 2023}"#).unwrap();

        let fields =
            FormFields::from_sources(Some(path.as_path()), &["Hour=17", "Month=6"]).unwrap();
        let pairs: Vec<_> = fields.iter().collect();
        assert_eq!(
            pairs,
            vec![("City", "Austin"), ("Hour", "17"), ("Year", "2023"), ("Month", "6")]
        );
    }

    #[test]
    fn missing_fields_file_is_invalid_input() {
        let path = Path::new("/nonexistent/form.json");
        let err = FormFields::from_sources(Some(path), &[] as &[&str]).unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
    }

    #[test]
    fn fields_file_that_is_not_an_object_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FormFields::from_sources(Some(path.as_path()), &[] as &[&str]).unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn parse_pair_variants() {
        assert_eq!(
            FormFields::parse_pair("City=Dallas"),
            Some(("City".to_string(), "Dallas".to_string()))
        );
        assert_eq!(
            FormFields::parse_pair("Note="),
            Some(("Note".to_string(), String::new()))
        );
        assert_eq!(
            FormFields::parse_pair("q=a=b"),
            Some(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(FormFields::parse_pair("=x"), None);
        assert_eq!(FormFields::parse_pair("novalue"), None);
    }
}
