// Wayback Finder Settings Engine
// Keeps `settings.json` in the platform config dir in sync with the in-memory
// FinderSettings. Every change is checked against the rules the query sources
// impose before it is kept or written.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::{FinderSettings, SourceSettings};

/// Largest page urlscan.io serves for a search.
pub const MAX_URLSCAN_PAGE_SIZE: u32 = 10_000;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<FinderSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &FinderSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine persisting [`FinderSettings`] as pretty JSON.
pub struct SettingsEngine {
    config_path: String,
    settings: FinderSettings,
}

impl SettingsEngine {
    /// Uses `path_override` as the config file, or `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            config_path,
            settings: FinderSettings::default(),
        }
    }
}

fn invalid(msg: String) -> SettingsError {
    SettingsError::InvalidValue(msg)
}

fn parse_day(field: &str, value: &str) -> Result<NaiveDate, SettingsError> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("{} must be YYYYMMDD, got '{}'", field, value)));
    }
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|_| invalid(format!("{} is not a calendar date: '{}'", field, value)))
}

/// Accepts `CC-MAIN-YYYY-WW` with an ISO week between 01 and 53.
fn check_crawl_index(value: &str) -> Result<(), SettingsError> {
    let bad = || invalid(format!("common_crawl_index must look like CC-MAIN-YYYY-WW, got '{}'", value));
    let rest = value.strip_prefix("CC-MAIN-").ok_or_else(bad)?;
    let (year, week) = rest.split_once('-').ok_or_else(bad)?;
    let digits = |s: &str, n: usize| s.len() == n && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(year, 4) || !digits(week, 2) {
        return Err(bad());
    }
    match week.parse::<u8>() {
        Ok(1..=53) => Ok(()),
        _ => Err(bad()),
    }
}

fn check_sources(sources: &SourceSettings) -> Result<(), SettingsError> {
    check_crawl_index(&sources.common_crawl_index)?;

    let from = parse_day("temporal_from", &sources.temporal_from)?;
    let to = parse_day("temporal_to", &sources.temporal_to)?;
    if from > to {
        return Err(invalid(format!(
            "temporal window is reversed: {} is after {}",
            sources.temporal_from, sources.temporal_to
        )));
    }

    if sources.urlscan_page_size == 0 || sources.urlscan_page_size > MAX_URLSCAN_PAGE_SIZE {
        return Err(invalid(format!(
            "urlscan_page_size must be 1..={}, got {}",
            MAX_URLSCAN_PAGE_SIZE, sources.urlscan_page_size
        )));
    }
    Ok(())
}

/// Checks everything serde cannot: template inputs and the log filter.
pub fn validate(settings: &FinderSettings) -> Result<(), SettingsError> {
    check_sources(&settings.sources)?;
    EnvFilter::try_new(&settings.logging.level).map_err(|e| {
        invalid(format!("logging.level '{}' is not a filter: {}", settings.logging.level, e))
    })?;
    Ok(())
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads and validates the config file. A missing file means defaults.
    fn load(&mut self) -> Result<FinderSettings, SettingsError> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path, "no config file, using defaults");
                self.settings = FinderSettings::default();
                return Ok(self.settings.clone());
            }
            Err(e) => return Err(SettingsError::IoError(format!("read {}: {}", self.config_path, e))),
        };

        let settings: FinderSettings = serde_json::from_str(&content)
            .map_err(|e| SettingsError::SerializationError(format!("parse {}: {}", self.config_path, e)))?;
        validate(&settings)?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::IoError(format!("create {}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, json).map_err(|e| SettingsError::IoError(format!("write {}: {}", self.config_path, e)))
    }

    fn get_settings(&self) -> &FinderSettings {
        &self.settings
    }

    /// Sets one `section.field` value, e.g. `sources.temporal_to`.
    ///
    /// The updated settings must deserialize and pass [`validate`]; otherwise
    /// nothing changes in memory or on disk.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let (section, field) = key
            .split_once('.')
            .filter(|(s, f)| !s.is_empty() && !f.is_empty() && !f.contains('.'))
            .ok_or_else(|| SettingsError::InvalidKey(format!("expected section.field, got '{}'", key)))?;

        let mut tree = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        let slot = tree
            .get_mut(section)
            .and_then(|s| s.as_object_mut())
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| SettingsError::InvalidKey(format!("unknown setting '{}'", key)))?;
        *slot = value;

        let updated: FinderSettings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        validate(&updated)?;

        self.settings = updated;
        self.save()?;
        info!(key, "setting changed");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = FinderSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
