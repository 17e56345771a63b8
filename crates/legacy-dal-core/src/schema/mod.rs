pub mod field;
pub mod field_type;
pub mod foreign_key;
pub mod names;
pub mod table;

pub use field::{FieldDef, Requires};
pub use field_type::FieldType;
pub use foreign_key::ForeignKeyRef;
pub use names::{FieldName, TableName};
pub use table::TableDef;
