use anyhow::{Context, Result};
use legacy_dal_config::LegacyDalConfig;
use schemars::schema_for;

/// Print the JSON Schema of the config file to stdout.
pub fn cmd_schema() -> Result<()> {
    println!("{}", render_schema()?);
    Ok(())
}

fn render_schema() -> Result<String> {
    let schema = schema_for!(LegacyDalConfig);
    serde_json::to_string_pretty(&schema).context("serialize config schema")
}
