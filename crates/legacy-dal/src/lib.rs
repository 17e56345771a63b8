//! Generate web2py DAL model definitions for an existing MySQL database.
//!
//! The pipeline lists the tables of a database, dumps each `CREATE TABLE`
//! statement, parses it, and renders the result as `define_table` calls:
//!
//! ```no_run
//! use legacy_dal::{ConnectionDescriptor, ExtractOptions, MysqlCli, extract_models};
//!
//! let connection: ConnectionDescriptor = "root:secret@localhost:3306/shop".parse()?;
//! let code = extract_models(&MysqlCli::default(), &connection, &ExtractOptions::default())?;
//! println!("{code}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod extract;

pub use error::Error;
pub use extract::{ExtractOptions, extract_models, parse_tables};

pub use legacy_dal_config::LegacyDalConfig;
pub use legacy_dal_core::{
    ConnectionDefaults, ConnectionDescriptor, DataTypeMap, FieldDef, FieldType, Requires,
    TableDef,
};
pub use legacy_dal_exporter::{ModelExporter, Web2pyExporter};
pub use legacy_dal_loader::{MysqlCli, SchemaSource};
