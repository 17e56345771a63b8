use legacy_dal_config::LegacyDalConfig;
use legacy_dal_core::{ConnectionDescriptor, DataTypeMap, TableDef};
use legacy_dal_exporter::{ModelExporter, Web2pyExporter};
use legacy_dal_loader::SchemaSource;
use legacy_dal_parser::parse_create_statement;
use tracing::{debug, info};

use crate::error::Error;

/// Type map and exporter used for one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub types: DataTypeMap,
    pub exporter: Web2pyExporter,
}

impl ExtractOptions {
    pub fn from_config(config: &LegacyDalConfig) -> Self {
        Self {
            types: DataTypeMap::with_overrides(config.extra_types().clone()),
            exporter: Web2pyExporter::from_config(config),
        }
    }
}

/// Dump and parse every table of the database, one after another.
///
/// Tables whose dump cannot be parsed are left out. An unmapped column type
/// or a client that cannot be started aborts the whole run.
pub fn parse_tables(
    source: &dyn SchemaSource,
    connection: &ConnectionDescriptor,
    types: &DataTypeMap,
) -> Result<Vec<TableDef>, Error> {
    let listed = source.list_tables(connection)?;
    info!(count = listed.len(), database = %connection.database, "listed tables");

    let mut tables = Vec::with_capacity(listed.len());
    for name in &listed {
        let raw = source.dump_table_schema(connection, name)?;
        match parse_create_statement(&raw, types)? {
            Some(table) => {
                if table.name != *name {
                    debug!(listed = %name, dumped = %table.name, "using table name from dump");
                }
                info!(table = %table.name, fields = table.fields.len(), "parsed table");
                tables.push(table);
            }
            None => info!(table = %name, "no CREATE TABLE statement, table skipped"),
        }
    }
    Ok(tables)
}

/// Generate the model source for every table the source reports.
pub fn extract_models(
    source: &dyn SchemaSource,
    connection: &ConnectionDescriptor,
    options: &ExtractOptions,
) -> Result<String, Error> {
    let tables = parse_tables(source, connection, &options.types)?;
    Ok(options.exporter.render_document(connection, &tables))
}
