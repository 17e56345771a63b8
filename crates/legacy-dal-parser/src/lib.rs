pub mod create_table;
pub mod error;
pub mod line;
pub mod tables;

pub use create_table::{parse_create_statement, parse_table_name};
pub use error::ParseError;
pub use line::{ColumnLine, DdlLine, classify_line};
pub use tables::parse_table_names;
