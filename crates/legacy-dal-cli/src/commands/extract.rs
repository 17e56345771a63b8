use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use legacy_dal::{
    ConnectionDefaults, ConnectionDescriptor, ExtractOptions, MysqlCli, extract_models,
};
use legacy_dal_loader::load_config_or_default;
use tracing::debug;

pub const USAGE: &str =
    "USAGE:\n\n    legacy-dal username:password@[host][:port]/data_basename\n\n";

/// Print the generated models for `connection` to stdout.
///
/// A missing or malformed connection string prints [`USAGE`] and succeeds.
/// The string is checked before any config file is read.
pub fn cmd_extract(connection: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let Some(connection) = connection else {
        print!("{}", USAGE);
        return Ok(());
    };

    // Defaults only fill empty host and port parts.
    if let Err(err) = ConnectionDescriptor::parse(connection, &ConnectionDefaults::default()) {
        debug!(%err, "rejected connection string");
        print!("{}", USAGE);
        return Ok(());
    }

    let cwd = env::current_dir().context("resolve working directory")?;
    let config = load_config_or_default(config_path, &cwd)?;
    let descriptor = ConnectionDescriptor::parse(connection, &config.connection_defaults())
        .context("parse connection string")?;
    debug!(connection = ?descriptor, "connecting");

    let code = extract_models(
        &MysqlCli::from_config(&config),
        &descriptor,
        &ExtractOptions::from_config(&config),
    )
    .with_context(|| format!("extract models from database {}", descriptor.database))?;
    println!("{}", code);
    Ok(())
}
