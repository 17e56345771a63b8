use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use legacy_dal_config::LegacyDalConfig;
use legacy_dal_core::ConnectionDescriptor;
use legacy_dal_parser::parse_table_names;
use tracing::debug;

use crate::error::LoaderError;
use crate::source::SchemaSource;

/// Schema source backed by the `mysql` and `mysqldump` binaries.
///
/// Each call runs one process and waits for it. Exit status and stderr are
/// only logged; the captured stdout is returned as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MysqlCli {
    mysql_bin: PathBuf,
    mysqldump_bin: PathBuf,
}

impl Default for MysqlCli {
    fn default() -> Self {
        Self::from_config(&LegacyDalConfig::default())
    }
}

impl MysqlCli {
    pub fn new(mysql_bin: impl Into<PathBuf>, mysqldump_bin: impl Into<PathBuf>) -> Self {
        Self {
            mysql_bin: mysql_bin.into(),
            mysqldump_bin: mysqldump_bin.into(),
        }
    }

    pub fn from_config(config: &LegacyDalConfig) -> Self {
        Self::new(config.mysql_bin(), config.mysqldump_bin())
    }

    /// Arguments for `mysql ... -e 'show tables;'`.
    pub fn show_tables_args(connection: &ConnectionDescriptor) -> Vec<String> {
        let mut args = credential_args(connection);
        args.push(connection.database.clone());
        args.push("-eshow tables;".to_string());
        args
    }

    /// Arguments for a schema-only dump of `table`.
    pub fn dump_args(connection: &ConnectionDescriptor, table: &str) -> Vec<String> {
        let mut args = credential_args(connection);
        args.extend(
            ["--skip-triggers", "--skip-add-drop-table", "--no-data"].map(String::from),
        );
        args.push(connection.database.clone());
        args.push(table.to_string());
        args
    }
}

fn credential_args(connection: &ConnectionDescriptor) -> Vec<String> {
    let mut args = vec![format!("-u{}", connection.username)];
    // A bare `-p` would make the client prompt for a password.
    if !connection.password.is_empty() {
        args.push(format!("-p{}", connection.password));
    }
    args.push(format!("-h{}", connection.host));
    args.push(format!("-P{}", connection.port));
    args
}

fn run(program: &Path, args: &[String]) -> Result<String, LoaderError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| LoaderError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    if !output.status.success() || !output.stderr.is_empty() {
        debug!(
            program = %program.display(),
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "client reported problems"
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl SchemaSource for MysqlCli {
    fn list_tables(&self, connection: &ConnectionDescriptor) -> Result<Vec<String>, LoaderError> {
        let stdout = run(&self.mysql_bin, &Self::show_tables_args(connection))?;
        Ok(parse_table_names(&stdout))
    }

    fn dump_table_schema(
        &self,
        connection: &ConnectionDescriptor,
        table: &str,
    ) -> Result<String, LoaderError> {
        debug!(table, "dumping table schema");
        run(&self.mysqldump_bin, &Self::dump_args(connection, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> ConnectionDescriptor {
        "root:secret@db:3306/shop".parse().unwrap()
    }

    #[test]
    fn show_tables_args_match_client_syntax() {
        assert_eq!(
            MysqlCli::show_tables_args(&connection()),
            vec!["-uroot", "-psecret", "-hdb", "-P3306", "shop", "-eshow tables;"]
        );
    }

    #[test]
    fn dump_args_skip_data_triggers_and_drops() {
        assert_eq!(
            MysqlCli::dump_args(&connection(), "customer"),
            vec![
                "-uroot",
                "-psecret",
                "-hdb",
                "-P3306",
                "--skip-triggers",
                "--skip-add-drop-table",
                "--no-data",
                "shop",
                "customer",
            ]
        );
    }

    #[test]
    fn empty_password_is_not_passed() {
        let conn: ConnectionDescriptor = "guest:@/shop".parse().unwrap();
        let args = MysqlCli::show_tables_args(&conn);
        assert!(!args.iter().any(|a| a.starts_with("-p")));
    }

    #[test]
    fn default_uses_path_binaries() {
        assert_eq!(MysqlCli::default(), MysqlCli::new("mysql", "mysqldump"));
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let cli = MysqlCli::new("/nonexistent/mysql", "/nonexistent/mysqldump");
        let err = cli.list_tables(&connection()).unwrap_err();
        assert!(matches!(err, LoaderError::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/mysql"));
    }

    #[cfg(unix)]
    mod with_fake_client {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        use tempfile::TempDir;

        use super::*;

        fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
            let path = dir.path().join(name);
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        #[serial_test::serial]
        fn lists_tables_from_stdout() {
            let dir = TempDir::new().unwrap();
            let mysql = script(&dir, "mysql", "printf 'Tables_in_shop\\ncustomer\\norders\\n'");
            let cli = MysqlCli::new(mysql, "unused");

            assert_eq!(cli.list_tables(&connection()).unwrap(), vec!["customer", "orders"]);
        }

        #[test]
        #[serial_test::serial]
        fn dump_passes_table_as_last_argument() {
            let dir = TempDir::new().unwrap();
            let dump = script(
                &dir,
                "mysqldump",
                "for last; do :; done\nprintf 'CREATE TABLE `%s` (\\n)\\n' \"$last\"",
            );
            let cli = MysqlCli::new("unused", dump);

            let out = cli.dump_table_schema(&connection(), "customer").unwrap();
            assert_eq!(out, "CREATE TABLE `customer` (\n)\n");
        }

        #[test]
        #[serial_test::serial]
        fn failing_client_yields_its_stdout() {
            let dir = TempDir::new().unwrap();
            let mysql = script(&dir, "mysql", "echo 'Access denied' >&2\nexit 1");
            let cli = MysqlCli::new(mysql, "unused");

            assert!(cli.list_tables(&connection()).unwrap().is_empty());
        }
    }
}
