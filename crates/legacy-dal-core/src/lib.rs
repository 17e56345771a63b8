pub mod connection;
pub mod error;
pub mod schema;
pub mod type_map;

pub use connection::{ConnectionDefaults, ConnectionDescriptor, DEFAULT_HOST, DEFAULT_PORT};
pub use error::CoreError;
pub use schema::{FieldDef, FieldName, FieldType, ForeignKeyRef, Requires, TableDef, TableName};
pub use type_map::DataTypeMap;
