use legacy_dal_core::ConnectionDescriptor;

use crate::error::LoaderError;

/// Where table listings and `CREATE TABLE` dumps come from.
///
/// Implementations return whatever the backend produced. Empty or garbled
/// output is not an error; the parser skips what it cannot read.
pub trait SchemaSource {
    fn list_tables(&self, connection: &ConnectionDescriptor) -> Result<Vec<String>, LoaderError>;

    /// Raw `CREATE TABLE` text for one table, without data.
    fn dump_table_schema(
        &self,
        connection: &ConnectionDescriptor,
        table: &str,
    ) -> Result<String, LoaderError>;
}
