//! History Manager for Wayback Finder.
//!
//! Implements `HistoryManagerTrait`: a bounded, newest-first log of past
//! queries persisted as one JSON document in a [`StorageArea`]. Every
//! mutation loads the whole log, changes it, and writes the whole log back.
//!
//! Reads favour availability: [`HistoryManagerTrait::load`] never fails and
//! degrades to an empty log. Writes surface storage failures so a lost
//! record is never silent.

use chrono::{DateTime, Local, SubsecRound, Utc};
use tracing::{debug, info, warn};

use crate::database::StorageArea;
use crate::types::errors::HistoryError;
use crate::types::history::{
    HistoryEntry, HistoryLog, NewHistoryEntry, HISTORY_STORAGE_KEY, MAX_HISTORY_ENTRIES,
};

/// Trait defining query history operations.
pub trait HistoryManagerTrait {
    fn load(&self) -> HistoryLog;
    fn try_load(&self) -> Result<HistoryLog, HistoryError>;
    fn append(&mut self, entry: NewHistoryEntry) -> Result<HistoryLog, HistoryError>;
    fn clear(&mut self) -> Result<(), HistoryError>;
    fn entry(&self, index: usize) -> Option<HistoryEntry>;
}

/// History manager backed by a borrowed storage area.
///
/// Assumes a single writer: the load-modify-persist cycle in `append` is not
/// atomic against a second concurrent caller.
pub struct HistoryManager<'a> {
    storage: &'a dyn StorageArea,
}

impl<'a> HistoryManager<'a> {
    /// Creates a new `HistoryManager` over the provided storage area.
    pub fn new(storage: &'a dyn StorageArea) -> Self {
        Self { storage }
    }

    /// Current time truncated to the millisecond precision entries are stored with.
    fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    /// Reads the raw record. `Ok(None)` means nothing has been persisted yet.
    fn read_raw(&self) -> Result<Option<String>, HistoryError> {
        Ok(self.storage.get(HISTORY_STORAGE_KEY)?)
    }

    fn parse(raw: &str) -> Result<HistoryLog, HistoryError> {
        serde_json::from_str(raw).map_err(|e| HistoryError::MalformedPersistedState(e.to_string()))
    }

    fn persist(&self, log: &HistoryLog) -> Result<(), HistoryError> {
        let json = serde_json::to_string(log)
            .map_err(|e| HistoryError::StorageUnavailable(format!("serialize: {}", e)))?;
        self.storage.set(HISTORY_STORAGE_KEY, &json)?;
        Ok(())
    }
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Returns the persisted log, or an empty log on any read or shape error.
    fn load(&self) -> HistoryLog {
        match self.try_load() {
            Ok(log) => log,
            Err(e) => {
                warn!(error = %e, "history unreadable, showing empty log");
                Vec::new()
            }
        }
    }

    /// Strict read: distinguishes a missing record (empty log) from failures.
    fn try_load(&self) -> Result<HistoryLog, HistoryError> {
        match self.read_raw()? {
            Some(raw) => Self::parse(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Prepends a timestamped entry, keeps the newest `MAX_HISTORY_ENTRIES`,
    /// persists, and returns the updated log.
    ///
    /// A malformed stored value is replaced. If storage cannot be read or
    /// written, nothing is persisted and `StorageUnavailable` is returned.
    fn append(&mut self, entry: NewHistoryEntry) -> Result<HistoryLog, HistoryError> {
        let mut log = match self.read_raw()? {
            Some(raw) => Self::parse(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "overwriting malformed history");
                Vec::new()
            }),
            None => Vec::new(),
        };

        log.insert(
            0,
            HistoryEntry {
                url: entry.url,
                query_type: entry.query_type,
                query_url: entry.query_url,
                timestamp: Self::now(),
            },
        );
        log.truncate(MAX_HISTORY_ENTRIES);

        self.persist(&log)?;
        debug!(len = log.len(), "history appended");
        Ok(log)
    }

    /// Replaces the persisted log with an empty one.
    fn clear(&mut self) -> Result<(), HistoryError> {
        self.persist(&Vec::new())?;
        info!("history cleared");
        Ok(())
    }

    /// Snapshot of the entry at `index` (0 = newest).
    fn entry(&self, index: usize) -> Option<HistoryEntry> {
        self.load().into_iter().nth(index)
    }
}

/// Renders how long ago `entry` was recorded, relative to `now`.
///
/// Thresholds are strict: exactly 60 seconds is `"1m ago"`, not `"just now"`.
/// Entries a week or older show their local calendar date.
pub fn format_relative_age(entry: &HistoryEntry, now: DateTime<Utc>) -> String {
    let seconds = (now - entry.timestamp).num_milliseconds().div_euclid(1000);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else if seconds < 604_800 {
        format!("{}d ago", seconds / 86_400)
    } else {
        entry
            .timestamp
            .with_timezone(&Local)
            .format("%-m/%-d/%Y")
            .to_string()
    }
}
