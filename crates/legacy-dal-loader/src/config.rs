use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use legacy_dal_config::{CONFIG_FILE_STEM, FileFormat, LegacyDalConfig};

/// First `legacy-dal.{json,yaml,yml}` found in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    [FileFormat::Json, FileFormat::Yaml, FileFormat::Yml]
        .into_iter()
        .map(|format| dir.join(format!("{}.{}", CONFIG_FILE_STEM, format.extension())))
        .find(|path| path.is_file())
}

/// Load config from a specific path. The format follows the extension.
pub fn load_config_from_path(path: &Path) -> Result<LegacyDalConfig> {
    if !path.exists() {
        anyhow::bail!("config file not found at: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(FileFormat::from_extension)
        .unwrap_or_default();

    let config: LegacyDalConfig = match format {
        FileFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("parse JSON config {}", path.display()))?,
        FileFormat::Yaml | FileFormat::Yml => serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML config {}", path.display()))?,
    };
    Ok(config)
}

/// Load the explicit config file if given, otherwise look for one in
/// `search_dir`, falling back to defaults.
pub fn load_config_or_default(
    explicit: Option<&Path>,
    search_dir: &Path,
) -> Result<LegacyDalConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match find_config(search_dir) {
        Some(path) => load_config_from_path(&path),
        None => Ok(LegacyDalConfig::default()),
    }
}
