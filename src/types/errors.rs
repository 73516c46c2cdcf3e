use std::fmt;

// === StorageError ===

/// Errors raised by a storage area when a named record cannot be read or written.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The underlying persistence layer could not be reached.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === HistoryError ===

/// Errors related to the query history store.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// The persisted history could not be read or written.
    StorageUnavailable(String),
    /// The persisted value does not have the shape of a history log.
    MalformedPersistedState(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::StorageUnavailable(msg) => {
                write!(f, "History storage unavailable: {}", msg)
            }
            HistoryError::MalformedPersistedState(msg) => {
                write!(f, "Malformed persisted history: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<StorageError> for HistoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(msg) => HistoryError::StorageUnavailable(msg),
        }
    }
}

// === QueryError ===

/// Errors related to building and launching OSINT queries.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The user supplied no target.
    EmptyInput,
    /// The target could not be parsed as a URL with a host.
    InvalidUrl(String),
    /// No query template is registered under the given identifier.
    UnknownQueryType(String),
    /// The built URL could not be opened.
    OpenFailed(String),
    /// No history entry exists at the given index.
    HistoryEntryNotFound(usize),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::EmptyInput => write!(f, "Please enter a URL"),
            QueryError::InvalidUrl(input) => write!(f, "Invalid URL format: {}", input),
            QueryError::UnknownQueryType(id) => write!(f, "Unknown query type: {}", id),
            QueryError::OpenFailed(msg) => write!(f, "Failed to open tab: {}", msg),
            QueryError::HistoryEntryNotFound(index) => {
                write!(f, "History entry not found: {}", index)
            }
        }
    }
}

impl std::error::Error for QueryError {}

// === OpenerError ===

/// Errors related to launching URLs in the desktop browser.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenerError {
    /// The platform opener could not be started or exited unsuccessfully.
    LaunchFailed(String),
    /// There is no known opener on this platform.
    UnsupportedPlatform,
}

impl fmt::Display for OpenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenerError::LaunchFailed(msg) => write!(f, "Browser launch failed: {}", msg),
            OpenerError::UnsupportedPlatform => {
                write!(f, "No browser opener available on this platform")
            }
        }
    }
}

impl std::error::Error for OpenerError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
