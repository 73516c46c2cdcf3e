use serde::{Deserialize, Serialize};

/// Top-level finder settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FinderSettings {
    #[serde(default)]
    pub launch: LaunchSettings,
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How built queries are opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchSettings {
    /// Bring the opened tab to the front instead of opening it in the background.
    ///
    /// Only macOS honors `false` (via `open -g`). xdg-open on Linux and the
    /// Windows URL handler leave focus to the browser, which usually raises it.
    pub open_in_foreground: bool,
    /// Pause between building a query and opening it.
    pub open_delay_ms: u64,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            open_in_foreground: false,
            open_delay_ms: 500,
        }
    }
}

/// Tunables for the external data sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSettings {
    /// Common Crawl index collection, e.g. `CC-MAIN-2024-51`.
    pub common_crawl_index: String,
    /// Start of the temporal analysis window (`YYYYMMDD`).
    pub temporal_from: String,
    /// End of the temporal analysis window (`YYYYMMDD`).
    pub temporal_to: String,
    pub urlscan_page_size: u32,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            common_crawl_index: "CC-MAIN-2024-51".to_string(),
            temporal_from: "20200101".to_string(),
            temporal_to: "20220101".to_string(),
            urlscan_page_size: 100,
        }
    }
}

/// Log output settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
