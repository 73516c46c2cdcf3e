//! The SQLite file behind the finder's storage area.
//!
//! A [`Database`] is the persistent home of the `queryHistory` record. It is
//! always migrated before use, so `storage_local` exists for every caller.

use rusqlite::Connection;
use std::path::Path;
use tracing::warn;

use super::migrations;

/// Owns the SQLite connection backing the persistent storage area.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the history database at `path`, creating missing
    /// parent directories, and brings its schema up to date.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the file cannot be opened or migrated.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(dir = %parent.display(), error = %e, "cannot create data directory");
                }
            }
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Opens a throwaway in-memory database with the same schema, for tests
    /// and one-shot runs that should leave no history behind.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    fn run_migrations(&self) -> Result<(), rusqlite::Error> {
        migrations::run_all(&self.conn)
    }

    /// Raw connection, for migrations and schema checks.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
