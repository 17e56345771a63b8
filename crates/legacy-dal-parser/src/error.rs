use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "no DAL field type for MySQL type '{keyword}' (column {table}.{column}); map it under \"extraTypes\" in the configuration"
    )]
    UnmappedType {
        table: String,
        column: String,
        keyword: String,
    },
}
