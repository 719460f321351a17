use std::fmt;

use serde::{Deserialize, Serialize};

/// One cell of a report row, as the registry returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktregisterValue {
    pub value: String,
}

impl KontaktregisterValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A labeled report row: identifier tokens in the leading positions (one for
/// D5-family rows, three for D7-family rows), then one numeric string per
/// reporting hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktregisterField {
    pub values: Vec<KontaktregisterValue>,
}

impl KontaktregisterField {
    pub fn new(values: Vec<KontaktregisterValue>) -> Self {
        Self { values }
    }

    /// Build a field from bare string cells.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(KontaktregisterValue::new).collect(),
        }
    }

    pub fn last_value(&self) -> Option<&str> {
        self.values.last().map(|v| v.value.as_str())
    }

    /// Copy of this field keeping only the first `len` values.
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            values: self.values[..len].to_vec(),
        }
    }
}

/// The two periodic reports the registry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    D5,
    D7,
}

impl ReportType {
    /// Report identifier expected by the fetch collaborator.
    pub fn id(&self) -> &'static str {
        match self {
            ReportType::D5 => "D5",
            ReportType::D7 => "D7",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_registry_shape() {
        let json = r#"{"values":[{"value":"D5.1"},{"value":"42"},{"value":"0"}]}"#;
        let field: KontaktregisterField = serde_json::from_str(json).unwrap();

        assert_eq!(field.values.len(), 3);
        assert_eq!(field.values[0].value, "D5.1");
        assert_eq!(field.last_value(), Some("0"));
    }

    #[test]
    fn test_truncated_returns_fresh_field() {
        let field = KontaktregisterField::from_values(["D5.1", "5", "3", "0"]);
        let shorter = field.truncated(3);

        assert_eq!(shorter.last_value(), Some("3"));
        // the original is untouched
        assert_eq!(field.values.len(), 4);
    }

    #[test]
    fn test_report_ids() {
        assert_eq!(ReportType::D5.id(), "D5");
        assert_eq!(ReportType::D7.id(), "D7");
        assert_eq!(ReportType::D7.to_string(), "D7");
    }
}
