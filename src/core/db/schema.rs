/// Schema Introspection Module
///
/// Read-only metadata about a sample database: which tables it contains and
/// what their columns look like. Backs `list_tables` and the REPL's `:tables`
/// command.

use crate::core::db::connection::DatabaseHandle;
use crate::core::Result;
use rusqlite::Row;

/// Represents a column with the metadata PRAGMA table_info reports
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Declared type name (e.g., "INTEGER", "TEXT", "REAL")
    pub type_name: String,
    /// Whether the column is declared NOT NULL
    pub notnull: bool,
    /// Whether this column is part of the primary key
    pub pk: bool,
}

impl Column {
    /// Creates a Column from a PRAGMA table_info result row
    fn from_pragma_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Column {
            name: row.get(1)?,
            type_name: row.get(2)?,
            notnull: row.get(3)?,
            pk: row.get(5)?,
        })
    }
}

/// A table together with its column metadata
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Columns in declaration order
    pub columns: Vec<Column>,
}

/// Returns the user-defined table names in the database, alphabetically
/// ordered. Read-only and side-effect free.
///
/// # Errors
///
/// Fails with `SqlWalkError::ConnectionClosed` if the handle is closed.
pub fn list_tables(handle: &DatabaseHandle) -> Result<Vec<String>> {
    let conn = handle.connection()?;

    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type='table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;
    let table_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut tables = Vec::new();
    for table_result in table_iter {
        tables.push(table_result?);
    }
    Ok(tables)
}

/// Introspects one table's columns via PRAGMA table_info.
pub fn describe_table(handle: &DatabaseHandle, table_name: &str) -> Result<Table> {
    let conn = handle.connection()?;

    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table_name))?;
    let column_iter = stmt.query_map([], |row| Column::from_pragma_row(row))?;

    let mut columns = Vec::new();
    for column_result in column_iter {
        columns.push(column_result?);
    }

    Ok(Table {
        name: table_name.to_string(),
        columns,
    })
}

/// Introspects every user-defined table, in `list_tables` order.
pub fn describe_all(handle: &DatabaseHandle) -> Result<Vec<Table>> {
    let mut tables = Vec::new();
    for name in list_tables(handle)? {
        tables.push(describe_table(handle, &name)?);
    }
    Ok(tables)
}
