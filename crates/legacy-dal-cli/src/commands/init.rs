use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use legacy_dal_config::{CONFIG_FILE_STEM, FileFormat, LegacyDalConfig};

pub fn cmd_init(format: FileFormat) -> Result<()> {
    let path = PathBuf::from(format!("{}.{}", CONFIG_FILE_STEM, format.extension()));
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let config = LegacyDalConfig::default();
    let content = match format {
        FileFormat::Json => {
            serde_json::to_string_pretty(&config).context("serialize default config")?
        }
        FileFormat::Yaml | FileFormat::Yml => {
            serde_yaml::to_string(&config).context("serialize default config")?
        }
    };
    fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    println!("{} {}", "Created".bright_green().bold(), path.display());
    Ok(())
}
