//! Unit tests for the QueryController: build → open → record.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use wayback_finder::database::{Database, MemoryStorage, StorageArea};
use wayback_finder::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use wayback_finder::managers::query_controller::QueryController;
use wayback_finder::platform::TabOpener;
use wayback_finder::services::query_templates::QueryTemplateRegistry;
use wayback_finder::types::errors::{OpenerError, QueryError, StorageError};
use wayback_finder::types::query::QueryType;
use wayback_finder::types::settings::LaunchSettings;

/// Opener that remembers what it was asked to open.
#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<(String, bool)>>,
}

impl RecordingOpener {
    fn opened(&self) -> Vec<(String, bool)> {
        self.opened.lock().unwrap().clone()
    }
}

impl TabOpener for RecordingOpener {
    fn open(&self, url: &str, foreground: bool) -> Result<(), OpenerError> {
        self.opened.lock().unwrap().push((url.to_string(), foreground));
        Ok(())
    }
}

struct BrokenOpener;

impl TabOpener for BrokenOpener {
    fn open(&self, _url: &str, _foreground: bool) -> Result<(), OpenerError> {
        Err(OpenerError::LaunchFailed("no browser".to_string()))
    }
}

/// Reads succeed (empty), writes fail.
struct UnwritableStorage;

impl StorageArea for UnwritableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

fn instant_launch() -> LaunchSettings {
    LaunchSettings {
        open_in_foreground: false,
        open_delay_ms: 0,
    }
}

#[tokio::test]
async fn test_execute_opens_in_background_and_records() {
    let db = Database::open_in_memory().unwrap();
    let registry = QueryTemplateRegistry::default();
    let opener = RecordingOpener::default();
    let launch = instant_launch();
    let mut controller = QueryController::new(&db, &registry, &opener, &launch);

    let outcome = controller
        .execute(QueryType::Domain, "https://example.com/login")
        .await
        .unwrap();

    let expected_url =
        "https://web.archive.org/cdx/search/cdx?url=example.com/*&collapse=urlkey&output=text&fl=original";
    assert_eq!(outcome.query.url, expected_url);
    assert_eq!(outcome.history_len, Some(1));
    assert!(outcome.history_error.is_none());
    assert_eq!(opener.opened(), vec![(expected_url.to_string(), false)]);

    let log = HistoryManager::new(&db).load();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].url, "example.com");
    assert_eq!(log[0].query_type, "Main Domain");
    assert_eq!(log[0].query_url, expected_url);
}

#[tokio::test]
async fn test_execute_honours_foreground_setting() {
    let storage = MemoryStorage::new();
    let registry = QueryTemplateRegistry::default();
    let opener = RecordingOpener::default();
    let launch = LaunchSettings {
        open_in_foreground: true,
        open_delay_ms: 0,
    };
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);

    controller.execute(QueryType::CrtSh, "example.com").await.unwrap();
    assert!(opener.opened()[0].1);
}

#[tokio::test]
async fn test_execute_waits_for_open_delay() {
    let storage = MemoryStorage::new();
    let registry = QueryTemplateRegistry::default();
    let opener = RecordingOpener::default();
    let launch = LaunchSettings {
        open_in_foreground: false,
        open_delay_ms: 30,
    };
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);

    let started = Instant::now();
    controller.execute(QueryType::Wildcard, "example.com").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn test_invalid_input_opens_and_records_nothing() {
    let storage = MemoryStorage::new();
    let registry = QueryTemplateRegistry::default();
    let opener = RecordingOpener::default();
    let launch = instant_launch();
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);

    assert_eq!(
        controller.execute(QueryType::Domain, "   ").await,
        Err(QueryError::EmptyInput)
    );
    assert!(matches!(
        controller.execute(QueryType::Domain, "exa mple.com").await,
        Err(QueryError::InvalidUrl(_))
    ));
    assert!(opener.opened().is_empty());
    assert!(controller.history().load().is_empty());
}

#[tokio::test]
async fn test_open_failure_records_nothing() {
    let storage = MemoryStorage::new();
    let registry = QueryTemplateRegistry::default();
    let opener = BrokenOpener;
    let launch = instant_launch();
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);

    let result = controller.execute(QueryType::VirusTotal, "example.com").await;
    assert!(matches!(result, Err(QueryError::OpenFailed(_))));
    assert!(controller.history().load().is_empty());
}

#[tokio::test]
async fn test_history_write_failure_is_reported_not_fatal() {
    let storage = UnwritableStorage;
    let registry = QueryTemplateRegistry::default();
    let opener = RecordingOpener::default();
    let launch = instant_launch();
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);

    let outcome = controller
        .execute(QueryType::AlienVault, "example.com")
        .await
        .unwrap();
    assert_eq!(opener.opened().len(), 1);
    assert_eq!(outcome.history_len, None);
    assert!(outcome
        .history_error
        .unwrap()
        .contains("quota exceeded"));
}

#[tokio::test]
async fn test_reopen_opens_entry_in_foreground_without_recording() {
    let storage = MemoryStorage::new();
    let registry = QueryTemplateRegistry::default();
    let opener = RecordingOpener::default();
    let launch = instant_launch();
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);

    controller.execute(QueryType::Domain, "one.example").await.unwrap();
    controller.execute(QueryType::Domain, "two.example").await.unwrap();

    let entry = controller.reopen(1).unwrap();
    assert_eq!(entry.url, "one.example");
    assert_eq!(opener.opened().last().unwrap(), &(entry.query_url.clone(), true));
    assert_eq!(controller.history().load().len(), 2);

    assert_eq!(controller.reopen(5), Err(QueryError::HistoryEntryNotFound(5)));
}

/// A launcher that lingers (xdg-open without a desktop session waits for the
/// browser) must not hold up other work on the runtime.
#[cfg(target_os = "linux")]
#[tokio::test(flavor = "current_thread")]
async fn test_system_opener_does_not_stall_runtime() {
    use std::os::unix::fs::PermissionsExt;
    use wayback_finder::platform::SystemOpener;

    let bin = tempfile::TempDir::new().unwrap();
    let fake = bin.path().join("xdg-open");
    std::fs::write(&fake, "#!/bin/sh\nsleep 3\n").unwrap();
    std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();
    let path = std::env::var("PATH").unwrap_or_default();
    std::env::set_var("PATH", format!("{}:{}", bin.path().display(), path));

    let started = Instant::now();
    let timer = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        started.elapsed()
    });

    let storage = MemoryStorage::new();
    let registry = QueryTemplateRegistry::default();
    let opener = SystemOpener;
    let launch = instant_launch();
    let mut controller = QueryController::new(&storage, &registry, &opener, &launch);
    let outcome = controller.execute(QueryType::Domain, "example.com").await;
    let execute_took = started.elapsed();
    let timer_fired_after = timer.await.unwrap();

    std::env::set_var("PATH", path);

    assert!(outcome.is_ok());
    assert_eq!(controller.history().load().len(), 1);
    assert!(execute_took < Duration::from_secs(1), "execute took {:?}", execute_took);
    assert!(
        timer_fired_after < Duration::from_secs(1),
        "timer fired after {:?}",
        timer_fired_after
    );
}
