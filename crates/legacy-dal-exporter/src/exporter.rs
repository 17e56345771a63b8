use legacy_dal_core::{ConnectionDescriptor, TableDef};

use crate::TABLE_SEPARATOR;

/// Interface for model code generators.
pub trait ModelExporter {
    /// Statement opening the database connection.
    fn render_connection(&self, connection: &ConnectionDescriptor) -> String;

    /// Definition of a single table.
    fn render_table(&self, table: &TableDef) -> String;

    /// Connection statement followed by every table definition.
    fn render_document(&self, connection: &ConnectionDescriptor, tables: &[TableDef]) -> String {
        let body = tables
            .iter()
            .map(|t| self.render_table(t))
            .collect::<Vec<_>>()
            .join(TABLE_SEPARATOR);
        format!("{}\n\n{}", self.render_connection(connection), body)
    }
}
