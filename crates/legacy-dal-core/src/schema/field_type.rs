use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::TableName;

/// Semantic field type of the DAL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Double,
    Date,
    Time,
    Datetime,
    Blob,
    Text,
    /// Foreign key to the `id` of another table.
    Reference(TableName),
}

impl FieldType {
    /// DAL spelling of the type, as it appears inside `Field(...)`.
    pub fn as_dal(&self) -> String {
        match self {
            FieldType::Reference(table) => format!("reference {}", table),
            other => other.simple_name().to_string(),
        }
    }

    fn simple_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Double => "double",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Datetime => "datetime",
            FieldType::Blob => "blob",
            FieldType::Text => "text",
            FieldType::Reference(_) => "reference",
        }
    }

    /// Returns true for `string` fields, the only type that carries a length.
    pub fn is_string(&self) -> bool {
        matches!(self, FieldType::String)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_dal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldType::String, "string")]
    #[case(FieldType::Integer, "integer")]
    #[case(FieldType::Double, "double")]
    #[case(FieldType::Date, "date")]
    #[case(FieldType::Time, "time")]
    #[case(FieldType::Datetime, "datetime")]
    #[case(FieldType::Blob, "blob")]
    #[case(FieldType::Text, "text")]
    #[case(FieldType::Reference("customer".into()), "reference customer")]
    fn dal_spelling(#[case] ty: FieldType, #[case] expected: &str) {
        assert_eq!(ty.to_string(), expected);
    }

    #[test]
    fn deserializes_from_snake_case() {
        let ty: FieldType = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(ty, FieldType::Datetime);

        let ty: FieldType = serde_json::from_str(r#"{"reference": "users"}"#).unwrap();
        assert_eq!(ty, FieldType::Reference("users".into()));
    }

    #[test]
    fn only_string_is_string() {
        assert!(FieldType::String.is_string());
        assert!(!FieldType::Text.is_string());
        assert!(!FieldType::Reference("t".into()).is_string());
    }
}
