use crate::schema::names::{FieldName, TableName};

/// Single-column reference taken from a `FOREIGN KEY (...) REFERENCES ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub column: FieldName,
    /// Set when the referenced table is schema-qualified.
    pub schema: Option<String>,
    pub ref_table: TableName,
    pub ref_column: FieldName,
}
