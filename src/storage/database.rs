use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::StorageError;

/// Sqlite connection wrapper. Owns the schema for both the document
/// store and the identity table used by the session bootstrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a file-backed database, or an in-memory one when `path` is
    /// absent (degraded mode, nothing survives the process).
    pub fn open(path: Option<&str>) -> Result<Self, StorageError> {
        let conn = match path {
            Some(path) => {
                if let Some(parent) = Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Connection::open(path)?
            }
            None => Connection::open_in_memory()?,
        };
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::open(None)
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS documents (
                path TEXT NOT NULL,
                id   TEXT NOT NULL,
                body TEXT NOT NULL,
                PRIMARY KEY (path, id)
            );
            CREATE TABLE IF NOT EXISTS identities (
                kind       TEXT PRIMARY KEY,
                user_id    TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );",
        )?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
