/// Handle Lifecycle Module
///
/// This module manages open handles to the sample database files. Handles are
/// opened read-only: the walkthrough never mutates the sample data. A handle
/// must be closed exactly once after last use; closing twice is an error, and
/// any query issued against a closed handle fails rather than returning stale
/// data.
///
/// For the common open/run/close sequence, prefer [`with_database`], which
/// guarantees the handle is released on every exit path, including a query
/// failure partway through a walkthrough section.

use crate::core::{Result, SqlWalkError};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An open, read-only handle to one local database file.
#[derive(Debug)]
pub struct DatabaseHandle {
    /// Active connection (None once the handle has been closed)
    conn: Option<Connection>,
    /// Path to the database file this handle was opened on
    path: PathBuf,
}

impl DatabaseHandle {
    /// Opens a read-only handle to the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SqlWalkError::NotFound` if the file does not exist,
    /// `SqlWalkError::Access` if it exists but is unreadable, and
    /// `SqlWalkError::Database` for engine-level open failures.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SqlWalkError::NotFound(path.display().to_string()));
        }
        // Probe readability before handing the path to the engine, so that
        // permission problems surface as Access rather than a generic
        // engine error.
        if let Err(e) = std::fs::File::open(path) {
            return match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    Err(SqlWalkError::Access(path.display().to_string()))
                }
                _ => Err(SqlWalkError::Io(e)),
            };
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("opened database {}", path.display());

        Ok(DatabaseHandle {
            conn: Some(conn),
            path: path.to_path_buf(),
        })
    }

    /// Returns the path this handle was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true while the handle has not been closed.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Borrows the underlying connection, failing if the handle is closed.
    pub(crate) fn connection(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| SqlWalkError::ConnectionClosed(self.path.display().to_string()))
    }

    /// Closes the handle and releases the engine resource.
    ///
    /// Not idempotent: closing an already-closed handle fails with
    /// `SqlWalkError::InvalidState`. If `close` is never called, the
    /// connection is still released when the handle is dropped.
    pub fn close(&mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => {
                if let Err((_conn, e)) = conn.close() {
                    // The connection came back on failure, but a read-only
                    // handle has nothing left to flush. Let it drop.
                    return Err(SqlWalkError::Database(e));
                }
                debug!("closed database {}", self.path.display());
                Ok(())
            }
            None => Err(SqlWalkError::InvalidState(format!(
                "handle for {} is already closed",
                self.path.display()
            ))),
        }
    }
}

/// Opens a database, runs `f` against the handle, and closes it on every
/// exit path. A failure inside `f` takes precedence over a close failure.
pub fn with_database<P, T, F>(path: P, f: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&DatabaseHandle) -> Result<T>,
{
    let mut handle = DatabaseHandle::open(path)?;
    let outcome = f(&handle);
    let closed = handle.close();
    let value = outcome?;
    closed?;
    Ok(value)
}
