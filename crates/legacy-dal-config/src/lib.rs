pub mod config;
pub mod file_format;

pub use config::{CONFIG_FILE_STEM, LegacyDalConfig};
pub use file_format::FileFormat;
