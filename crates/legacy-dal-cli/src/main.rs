use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use legacy_dal_config::FileFormat;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{cmd_extract, cmd_init, cmd_schema};

/// Generate web2py DAL models from a legacy MySQL database.
#[derive(Parser, Debug)]
#[command(
    name = "legacy-dal",
    author,
    version,
    about,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Connection string: username:password@[host][:port]/data_basename.
    /// Anything after it is ignored.
    #[arg(value_name = "CONNECTION")]
    connection: Vec<String>,

    /// Config file. Defaults to legacy-dal.{json,yaml,yml} in the working directory.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long = "log-level", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a legacy-dal config file with defaults.
    Init {
        #[arg(short = 'f', long = "format", value_enum, default_value_t = FileFormat::Json)]
        format: FileFormat,
    },
    /// Print the JSON Schema of the config file.
    Schema,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Some(Commands::Init { format }) => cmd_init(format),
        Some(Commands::Schema) => cmd_schema(),
        None => cmd_extract(
            cli.connection.first().map(String::as_str),
            cli.config.as_deref(),
        ),
    }
}
