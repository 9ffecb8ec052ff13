/// Error Module
///
/// This module defines the error taxonomy for sqlwalk. Every failure mode a
/// walkthrough can hit maps onto one variant here, and all of them propagate
/// immediately to the caller: there are no retries and no partial-result
/// recovery anywhere in the tool.
use thiserror::Error;

/// Comprehensive error type for sqlwalk.
///
/// The first six variants form the walkthrough's own taxonomy:
/// - `NotFound` / `Access`: opening a sample database file
/// - `ConnectionClosed` / `InvalidState`: handle lifecycle misuse
/// - `Syntax` / `Reference`: malformed query text and unknown identifiers
///
/// The remaining variants cover ambient concerns (engine errors that do not
/// classify further, I/O, export serialization, configuration).
#[derive(Error, Debug)]
pub enum SqlWalkError {
    /// The named database file does not exist
    #[error("database file not found: {0}")]
    NotFound(String),

    /// The database file exists but cannot be read (permissions)
    #[error("database file is not readable: {0}")]
    Access(String),

    /// An operation was issued against a closed handle
    #[error("connection is closed: {0}")]
    ConnectionClosed(String),

    /// The query text failed to parse
    #[error("syntax error in query: {0}")]
    Syntax(String),

    /// The query names a table or column the database does not have
    #[error("unknown identifier: {0}")]
    Reference(String),

    /// Handle lifecycle violation, e.g. closing an already-closed handle
    #[error("invalid handle state: {0}")]
    InvalidState(String),

    /// Engine errors that are not syntax or reference failures
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON export serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading and validation errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Result rendering and export errors
    #[error("render error: {0}")]
    Render(String),

    /// Catalog lookup errors (unknown example name)
    #[error("catalog error: {0}")]
    Catalog(String),
}

/// Type alias for Result to use SqlWalkError as the error type.
pub type Result<T> = std::result::Result<T, SqlWalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let not_found = SqlWalkError::NotFound("animals.sqlite".to_string());
        assert!(not_found.to_string().contains("not found"));
        assert!(not_found.to_string().contains("animals.sqlite"));

        let closed = SqlWalkError::ConnectionClosed("sales.sqlite".to_string());
        assert!(closed.to_string().contains("closed"));

        let syntax = SqlWalkError::Syntax("unexpected token".to_string());
        assert!(syntax.to_string().contains("syntax error"));

        let reference = SqlWalkError::Reference("no_such_table".to_string());
        assert!(reference.to_string().contains("unknown identifier"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SqlWalkError = io_err.into();
        match err {
            SqlWalkError::Io(_) => {}
            _ => panic!("Expected Io error"),
        }

        let json_err: std::result::Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{ invalid json }");
        let err: SqlWalkError = json_err.unwrap_err().into();
        match err {
            SqlWalkError::Json(_) => {}
            _ => panic!("Expected Json error"),
        }

        let db_err: SqlWalkError = rusqlite::Error::ExecuteReturnedResults.into();
        match db_err {
            SqlWalkError::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }
}
