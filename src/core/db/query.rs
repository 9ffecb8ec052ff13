/// Query Execution Module
///
/// This module executes example SQL against an open handle and classifies
/// failures into the walkthrough's error taxonomy. Each call is independent
/// and stateless aside from the handle's open/closed flag; there are no
/// retries, and a failure surfaces immediately to the caller.

use crate::core::db::connection::DatabaseHandle;
use crate::core::{Result, SqlWalkError};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::types::ValueRef;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;
use tracing::debug;

/// Matches the identifier in engine messages like "no such table: accounts".
static UNKNOWN_IDENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"no such (?:table|column|function|index|collation sequence): ([\w.]+)")
        .expect("identifier pattern is valid")
});

/// Tabular output of one query execution: an ordered sequence of rows, each
/// cell nullable. The column set exactly matches the query's projection list.
///
/// Row order is only meaningful when the query text carries an explicit
/// ORDER BY; otherwise it is engine-dependent and must not be relied upon.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Column names in projection order
    pub columns: Vec<String>,
    /// Row data; `None` cells are SQL NULLs
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    /// Number of rows in the result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Executes a SQL query against the handle and collects the full result.
///
/// # Errors
///
/// - `SqlWalkError::ConnectionClosed` if the handle has been closed
/// - `SqlWalkError::Syntax` for malformed query text
/// - `SqlWalkError::Reference` for unknown table or column names
/// - `SqlWalkError::Database` for other engine failures
pub fn execute(handle: &DatabaseHandle, sql: &str) -> Result<ResultSet> {
    let conn = handle.connection()?;

    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| classify_prepare_error(sql, e))?;

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = stmt.column_count();

    let rows = stmt
        .query_map([], |row| {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(format_value(row.get_ref(i)?));
            }
            Ok(values)
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "executed query");
    Ok(ResultSet { columns, rows })
}

/// Maps a prepare failure onto the walkthrough taxonomy.
///
/// The engine message decides between unknown-identifier and syntax failures.
/// For syntax failures the text is re-run through sqlparser, which usually
/// points closer to the offending token than the engine does.
fn classify_prepare_error(sql: &str, e: rusqlite::Error) -> SqlWalkError {
    let msg = e.to_string();

    if let Some(captures) = UNKNOWN_IDENT_RE.captures(&msg) {
        return SqlWalkError::Reference(captures[1].to_string());
    }

    if msg.contains("syntax error") {
        if let Err(parse_err) = Parser::parse_sql(&SQLiteDialect {}, sql) {
            return SqlWalkError::Syntax(parse_err.to_string());
        }
        return SqlWalkError::Syntax(msg);
    }

    SqlWalkError::Database(e)
}

/// Formats a SQLite value for display. NULL stays `None` so rendering and
/// export can distinguish it from the literal string "NULL".
fn format_value(value: ValueRef) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).to_string()),
        ValueRef::Blob(b) => Some(format!("<BLOB: {} bytes>", b.len())),
    }
}
