use wayback_finder::types::errors::*;

// === StorageError / HistoryError ===

#[test]
fn storage_error_display() {
    assert_eq!(
        StorageError::Unavailable("locked".to_string()).to_string(),
        "Storage unavailable: locked"
    );
}

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::StorageUnavailable("disk full".to_string()).to_string(),
        "History storage unavailable: disk full"
    );
    assert_eq!(
        HistoryError::MalformedPersistedState("expected a sequence".to_string()).to_string(),
        "Malformed persisted history: expected a sequence"
    );
}

#[test]
fn storage_error_converts_to_storage_unavailable() {
    let err: HistoryError = StorageError::Unavailable("gone".to_string()).into();
    assert_eq!(err, HistoryError::StorageUnavailable("gone".to_string()));
}

// === QueryError ===

#[test]
fn query_error_display_variants() {
    assert_eq!(QueryError::EmptyInput.to_string(), "Please enter a URL");
    assert_eq!(
        QueryError::InvalidUrl("a b".to_string()).to_string(),
        "Invalid URL format: a b"
    );
    assert_eq!(
        QueryError::UnknownQueryType("shodan".to_string()).to_string(),
        "Unknown query type: shodan"
    );
    assert_eq!(
        QueryError::OpenFailed("no browser".to_string()).to_string(),
        "Failed to open tab: no browser"
    );
    assert_eq!(
        QueryError::HistoryEntryNotFound(7).to_string(),
        "History entry not found: 7"
    );
}

// === OpenerError / SettingsError ===

#[test]
fn opener_error_display_variants() {
    assert_eq!(
        OpenerError::LaunchFailed("xdg-open: not found".to_string()).to_string(),
        "Browser launch failed: xdg-open: not found"
    );
    assert_eq!(
        OpenerError::UnsupportedPlatform.to_string(),
        "No browser opener available on this platform"
    );
}

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("file not found".to_string()).to_string(),
        "Settings I/O error: file not found"
    );
    assert_eq!(
        SettingsError::SerializationError("malformed json".to_string()).to_string(),
        "Settings serialization error: malformed json"
    );
    assert_eq!(
        SettingsError::InvalidKey("unknown.key".to_string()).to_string(),
        "Invalid settings key: unknown.key"
    );
    assert_eq!(
        SettingsError::InvalidValue("negative number".to_string()).to_string(),
        "Invalid settings value: negative number"
    );
}

#[test]
fn all_errors_implement_std_error() {
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(StorageError::Unavailable("msg".to_string())),
        Box::new(HistoryError::StorageUnavailable("msg".to_string())),
        Box::new(QueryError::EmptyInput),
        Box::new(OpenerError::UnsupportedPlatform),
        Box::new(SettingsError::IoError("msg".to_string())),
    ];

    for err in &errors {
        assert!(!err.to_string().is_empty());
        assert!(err.source().is_none());
    }
}
