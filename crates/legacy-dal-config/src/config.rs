use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use legacy_dal_core::{ConnectionDefaults, DEFAULT_HOST, DEFAULT_PORT, FieldType};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base name of the configuration file (`legacy-dal.json`, `legacy-dal.yaml`, ...).
pub const CONFIG_FILE_STEM: &str = "legacy-dal";

fn default_mysql_bin() -> PathBuf {
    PathBuf::from("mysql")
}

fn default_mysqldump_bin() -> PathBuf {
    PathBuf::from("mysqldump")
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_variable() -> String {
    "legacy_db".to_string()
}

/// Top-level legacy-dal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LegacyDalConfig {
    /// Client used for `SHOW TABLES`. Looked up on `PATH` unless absolute.
    #[serde(default = "default_mysql_bin")]
    pub mysql_bin: PathBuf,
    /// Dump utility used to fetch `CREATE TABLE` statements.
    #[serde(default = "default_mysqldump_bin")]
    pub mysqldump_bin: PathBuf,
    /// Host used when the connection string omits it.
    #[serde(default = "default_host")]
    pub default_host: String,
    /// Port used when the connection string omits it.
    #[serde(default = "default_port")]
    pub default_port: u16,
    /// Python variable the generated DAL connection is bound to.
    #[serde(default = "default_db_variable")]
    pub db_variable: String,
    /// Extra MySQL type keywords, or replacements for built-in ones.
    /// Example: `{ "year": "date" }`
    #[serde(default)]
    pub extra_types: BTreeMap<String, FieldType>,
}

impl Default for LegacyDalConfig {
    fn default() -> Self {
        Self {
            mysql_bin: default_mysql_bin(),
            mysqldump_bin: default_mysqldump_bin(),
            default_host: default_host(),
            default_port: default_port(),
            db_variable: default_db_variable(),
            extra_types: BTreeMap::new(),
        }
    }
}

impl LegacyDalConfig {
    pub fn mysql_bin(&self) -> &Path {
        &self.mysql_bin
    }

    pub fn mysqldump_bin(&self) -> &Path {
        &self.mysqldump_bin
    }

    pub fn db_variable(&self) -> &str {
        &self.db_variable
    }

    pub fn extra_types(&self) -> &BTreeMap<String, FieldType> {
        &self.extra_types
    }

    /// Host and port fallbacks for connection string parsing.
    pub fn connection_defaults(&self) -> ConnectionDefaults {
        ConnectionDefaults {
            host: self.default_host.clone(),
            port: self.default_port,
        }
    }
}
