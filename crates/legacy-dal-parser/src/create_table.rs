use legacy_dal_core::{DataTypeMap, FieldDef, Requires, TableDef};
use tracing::debug;

use crate::error::ParseError;
use crate::line::{ColumnLine, DdlLine, classify_line};

/// Parse the output of `mysqldump --no-data` for one table.
///
/// Returns `Ok(None)` when the dump has no usable `CREATE TABLE` statement;
/// the caller skips that table. Individual lines that cannot be understood
/// are skipped as well. The only hard error is a column type missing from
/// `types`.
pub fn parse_create_statement(
    raw: &str,
    types: &DataTypeMap,
) -> Result<Option<TableDef>, ParseError> {
    if !raw.contains("CREATE") {
        debug!("dump has no CREATE statement, skipping");
        return Ok(None);
    }

    let lines: Vec<&str> = raw.split('\n').filter(|l| !is_noise(l)).collect();
    let Some((first, rest)) = lines.split_first() else {
        return Ok(None);
    };
    let Some(name) = parse_table_name(first) else {
        debug!(line = %first.trim(), "no table name on CREATE line, skipping");
        return Ok(None);
    };

    // The last line closes the statement.
    let body = rest.split_last().map_or(&[][..], |(_, body)| body);

    let mut table = TableDef::new(name);
    for line in body {
        match classify_line(line) {
            DdlLine::Column(column) if column.name.eq_ignore_ascii_case(IMPLICIT_ID) => {
                debug!(table = %table.name, "skipping implicit id column");
            }
            DdlLine::Column(column) => {
                let field = build_field(&table.name, column, types)?;
                table.upsert_field(field);
            }
            DdlLine::ForeignKey(Some(fk)) => {
                if !table.apply_foreign_key(&fk) {
                    debug!(
                        table = %table.name,
                        column = %fk.column,
                        "foreign key on a column that was not parsed, skipping"
                    );
                }
            }
            other => {
                debug!(table = %table.name, kind = other.kind(), line = %line.trim(), "skipping line");
            }
        }
    }

    Ok(Some(table))
}

/// The DAL adds this field to every table on its own.
const IMPLICIT_ID: &str = "id";

fn is_noise(line: &str) -> bool {
    line.is_empty() || line == "\r" || line.starts_with("--") || line.starts_with("/*")
}

/// Table name from a ``CREATE TABLE `name` (`` line.
///
/// The name must be wrapped in the same quote character (`` ` ``, `"` or
/// `'`) on each side and may not contain whitespace.
pub fn parse_table_name(line: &str) -> Option<String> {
    let (_, rest) = line.split_once("CREATE TABLE ")?;
    let rest = rest.strip_prefix("IF NOT EXISTS ").unwrap_or(rest);
    let (quoted, _) = rest.split_once(" (")?;
    if quoted.chars().any(char::is_whitespace) {
        return None;
    }

    let quote = quoted.chars().next().filter(|c| TABLE_NAME_QUOTES.contains(c))?;
    let name = quoted.strip_prefix(quote)?.strip_suffix(quote)?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

const TABLE_NAME_QUOTES: [char; 3] = ['`', '"', '\''];

fn build_field(
    table: &str,
    column: ColumnLine,
    types: &DataTypeMap,
) -> Result<FieldDef, ParseError> {
    let field_type =
        types
            .lookup(&column.type_keyword)
            .ok_or_else(|| ParseError::UnmappedType {
                table: table.to_string(),
                column: column.name.clone(),
                keyword: column.type_keyword.clone(),
            })?;
    let is_enum = column.type_keyword.eq_ignore_ascii_case("enum");

    let mut field = FieldDef::new(column.name, field_type);
    if is_enum {
        field.requires = Some(Requires::InSet(column.options.clone().unwrap_or_default()));
    } else if column.not_null {
        field.requires = Some(Requires::NotEmpty);
    }

    if field.field_type.is_string() && !is_enum {
        field.length = column.options.as_deref().and_then(|o| o.trim().parse().ok());
    }

    Ok(field)
}
