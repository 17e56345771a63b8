//! Mapping from MySQL column type keywords to DAL field types.

use std::collections::BTreeMap;

use crate::schema::FieldType;

/// Built-in keyword table. `year` is intentionally absent; add it through
/// configuration if a schema needs it.
pub const BUILTIN_TYPES: &[(&str, FieldType)] = &[
    ("enum", FieldType::String),
    ("varchar", FieldType::String),
    ("char", FieldType::String),
    ("int", FieldType::Integer),
    ("integer", FieldType::Integer),
    ("tinyint", FieldType::Integer),
    ("smallint", FieldType::Integer),
    ("mediumint", FieldType::Integer),
    ("bigint", FieldType::Integer),
    ("decimal", FieldType::Integer),
    ("float", FieldType::Double),
    ("double", FieldType::Double),
    ("date", FieldType::Date),
    ("time", FieldType::Time),
    ("timestamp", FieldType::Datetime),
    ("datetime", FieldType::Datetime),
    ("binary", FieldType::Blob),
    ("blob", FieldType::Blob),
    ("tinyblob", FieldType::Blob),
    ("mediumblob", FieldType::Blob),
    ("longblob", FieldType::Blob),
    ("text", FieldType::Text),
    ("tinytext", FieldType::Text),
    ("mediumtext", FieldType::Text),
    ("longtext", FieldType::Text),
];

/// Built-in keyword table plus user supplied overrides.
///
/// Keywords are compared case-insensitively. Overrides win over built-ins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTypeMap {
    overrides: BTreeMap<String, FieldType>,
}

impl DataTypeMap {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldType)>,
        K: AsRef<str>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v))
                .collect(),
        }
    }

    pub fn lookup(&self, keyword: &str) -> Option<FieldType> {
        let keyword = keyword.to_ascii_lowercase();
        if let Some(ty) = self.overrides.get(&keyword) {
            return Some(ty.clone());
        }
        BUILTIN_TYPES
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, ty)| ty.clone())
    }
}
