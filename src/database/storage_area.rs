//! Named-record storage areas.
//!
//! A storage area maps a record name (e.g. `queryHistory`) to a whole JSON
//! document. Writers always replace the full document; there are no partial
//! updates. [`Database`] provides the persistent area, [`MemoryStorage`] a
//! process-local one.

use std::collections::HashMap;
use std::sync::Mutex;

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::connection::Database;
use crate::types::errors::StorageError;

/// Read/replace access to named JSON records.
pub trait StorageArea {
    /// Returns the raw stored document, or `None` if the record was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the stored document for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl StorageArea for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        debug!(key, "storage get");
        self.connection()
            .query_row(
                "SELECT value FROM storage_local WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!(key, bytes = value.len(), "storage set");
        let now = chrono::Utc::now().timestamp();
        self.connection()
            .execute(
                "INSERT INTO storage_local (key, value, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

/// In-memory storage area. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
