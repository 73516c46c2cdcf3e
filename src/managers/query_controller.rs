//! Query Controller for Wayback Finder.
//!
//! Glue between a front end and the core: turns a query type plus user input
//! into a lookup URL, opens it, and records it in history.

use std::time::Duration;

use tracing::{info, warn};

use crate::database::StorageArea;
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::platform::TabOpener;
use crate::services::query_templates::QueryTemplateRegistry;
use crate::types::errors::QueryError;
use crate::types::history::{HistoryEntry, NewHistoryEntry};
use crate::types::query::{QueryOutcome, QueryType};
use crate::types::settings::LaunchSettings;

pub struct QueryController<'a> {
    history: HistoryManager<'a>,
    registry: &'a QueryTemplateRegistry,
    opener: &'a dyn TabOpener,
    launch: &'a LaunchSettings,
}

impl<'a> QueryController<'a> {
    pub fn new(
        storage: &'a dyn StorageArea,
        registry: &'a QueryTemplateRegistry,
        opener: &'a dyn TabOpener,
        launch: &'a LaunchSettings,
    ) -> Self {
        Self {
            history: HistoryManager::new(storage),
            registry,
            opener,
            launch,
        }
    }

    /// Builds, opens, and records one query.
    ///
    /// Input errors and open failures abort before anything is recorded.
    /// Once the tab is open a history failure is reported in the outcome
    /// rather than as an error, since the query itself succeeded.
    pub async fn execute(&mut self, query_type: QueryType, input: &str) -> Result<QueryOutcome, QueryError> {
        let query = self.registry.build_query(query_type, input)?;

        if self.launch.open_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.launch.open_delay_ms)).await;
        }

        self.opener
            .open(&query.url, self.launch.open_in_foreground)
            .map_err(|e| QueryError::OpenFailed(e.to_string()))?;
        info!(query_type = query_type.id(), host = %query.hostname, "query opened");

        let recorded = self.history.append(NewHistoryEntry::new(
            &query.hostname,
            &query.label,
            &query.url,
        ));

        let (history_len, history_error) = match recorded {
            Ok(log) => (Some(log.len()), None),
            Err(e) => {
                warn!(error = %e, "query opened but not recorded");
                (None, Some(e.to_string()))
            }
        };

        Ok(QueryOutcome {
            query,
            history_len,
            history_error,
        })
    }

    /// Opens the query URL of history entry `index` in the foreground.
    /// Reopening does not add a new history entry.
    pub fn reopen(&self, index: usize) -> Result<HistoryEntry, QueryError> {
        let entry = self
            .history
            .entry(index)
            .ok_or(QueryError::HistoryEntryNotFound(index))?;
        self.opener
            .open(&entry.query_url, true)
            .map_err(|e| QueryError::OpenFailed(e.to_string()))?;
        Ok(entry)
    }

    pub fn history(&self) -> &HistoryManager<'a> {
        &self.history
    }
}
