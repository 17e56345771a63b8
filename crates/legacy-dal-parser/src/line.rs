//! Classification of the lines inside a `CREATE TABLE (...)` body.

use legacy_dal_core::ForeignKeyRef;

/// One line of a `CREATE TABLE` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlLine {
    /// Column definition.
    Column(ColumnLine),
    /// `PRIMARY KEY (...)`, or any line mentioning `PRIMARY`.
    PrimaryKey,
    /// `UNIQUE KEY ...`, or any line mentioning `UNIQUE`.
    Unique,
    /// `FOREIGN KEY (...) REFERENCES ...`. `None` when the reference is not a
    /// single backticked column.
    ForeignKey(Option<ForeignKeyRef>),
    /// `KEY`, `FULLTEXT KEY` or `SPATIAL KEY` index.
    KeyIndex,
    /// Line containing ` ID`.
    IdMarker,
    /// Closing `) ENGINE=...` line.
    Terminator,
    Unrecognized,
}

impl DdlLine {
    pub fn kind(&self) -> &'static str {
        match self {
            DdlLine::Column(_) => "column",
            DdlLine::PrimaryKey => "primary key",
            DdlLine::Unique => "unique",
            DdlLine::ForeignKey(_) => "foreign key",
            DdlLine::KeyIndex => "index",
            DdlLine::IdMarker => "id marker",
            DdlLine::Terminator => "terminator",
            DdlLine::Unrecognized => "unrecognized",
        }
    }
}

/// Column line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLine {
    /// Column name with backticks removed.
    pub name: String,
    /// MySQL type keyword as written, e.g. `varchar`.
    pub type_keyword: String,
    /// Text between the parentheses following the keyword, verbatim.
    pub options: Option<String>,
    pub not_null: bool,
}

/// Classify a single line. Checks are case-sensitive and run in a fixed
/// order, so a column whose comment mentions `PRIMARY` is still skipped.
pub fn classify_line(line: &str) -> DdlLine {
    let line = line.trim();

    if line.starts_with(')') {
        DdlLine::Terminator
    } else if line.contains(" ID") {
        DdlLine::IdMarker
    } else if line.contains("PRIMARY") {
        DdlLine::PrimaryKey
    } else if line.contains("UNIQUE") {
        DdlLine::Unique
    } else if line.contains("FOREIGN KEY") {
        DdlLine::ForeignKey(parse_foreign_key(line))
    } else if line.starts_with("KEY")
        || line.starts_with("FULLTEXT KEY")
        || line.starts_with("SPATIAL KEY")
    {
        DdlLine::KeyIndex
    } else {
        parse_column(line).map_or(DdlLine::Unrecognized, DdlLine::Column)
    }
}

fn parse_column(line: &str) -> Option<ColumnLine> {
    let (raw_name, rest) = line.split_once(char::is_whitespace)?;
    let name = raw_name.replace('`', "");
    if name.is_empty() {
        return None;
    }

    let rest = rest.trim_start();
    let keyword_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if keyword_len == 0 {
        return None;
    }
    let (type_keyword, mut tail) = rest.split_at(keyword_len);

    let mut options = None;
    if tail.starts_with('(') {
        let close = group_end(tail)?;
        let inner = &tail[1..close];
        if !inner.is_empty() {
            options = Some(inner.to_string());
        }
        tail = &tail[close + 1..];
    }

    match tail.chars().next() {
        None | Some(',') => {}
        Some(c) if c.is_whitespace() => {}
        Some(_) => return None,
    }

    Some(ColumnLine {
        name,
        type_keyword: type_keyword.to_string(),
        options,
        not_null: line.contains("NOT NULL"),
    })
}

/// Byte index of the `)` closing the group that `s` opens. Parentheses
/// inside single-quoted strings are ignored.
fn group_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut escaped = false;

    for (idx, c) in s.char_indices() {
        if in_quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '\'' {
                in_quote = false;
            }
            continue;
        }
        match c {
            '\'' => in_quote = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse ``FOREIGN KEY (`col`) REFERENCES [`schema`.]`table` (`ref`)``.
fn parse_foreign_key(line: &str) -> Option<ForeignKeyRef> {
    let (_, after) = line.split_once("FOREIGN KEY (")?;
    let (column, after) = take_backticked(after)?;
    let after = after.strip_prefix(") REFERENCES ")?;

    let (first, after) = take_backticked(after)?;
    let (schema, ref_table, after) = match after.strip_prefix('.') {
        Some(rest) => {
            let (table, rest) = take_backticked(rest)?;
            (Some(first), table, rest)
        }
        None => (None, first, after),
    };

    let after = after.strip_prefix(" (")?;
    let (ref_column, after) = take_backticked(after)?;
    if !after.starts_with(')') {
        return None;
    }

    Some(ForeignKeyRef {
        column,
        schema,
        ref_table,
        ref_column,
    })
}

fn take_backticked(s: &str) -> Option<(String, &str)> {
    let s = s.strip_prefix('`')?;
    let end = s.find('`')?;
    if end == 0 {
        return None;
    }
    Some((s[..end].to_string(), &s[end + 1..]))
}
