pub mod config;
pub mod error;
pub mod mysql;
pub mod source;

pub use config::{find_config, load_config_from_path, load_config_or_default};
pub use error::LoaderError;
pub use mysql::MysqlCli;
pub use source::SchemaSource;
