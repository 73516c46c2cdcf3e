//! App Core for Wayback Finder.
//!
//! Owns the database, settings, template registry and browser opener, and
//! hands out the short-lived managers that borrow them.

use tracing::warn;

use crate::database::connection::Database;
use crate::managers::history_manager::HistoryManager;
use crate::managers::query_controller::QueryController;
use crate::platform::{SystemOpener, TabOpener};
use crate::services::query_templates::QueryTemplateRegistry;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Central application struct.
///
/// HistoryManager and QueryController are created on demand because they
/// borrow the database with a lifetime parameter.
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
    pub registry: QueryTemplateRegistry,
    opener: Box<dyn TabOpener + Send + Sync>,
}

impl App {
    /// Opens the database at `db_path`, loads settings (platform config path
    /// unless `config_path` is given) and uses the system browser opener.
    pub fn new(db_path: &str, config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::open(db_path)?;
        let settings_engine = SettingsEngine::new(config_path);
        Ok(Self::with_parts(db, settings_engine, Box::new(SystemOpener)))
    }

    /// Assembles an App from already-built parts and loads settings.
    pub fn with_parts(
        db: Database,
        settings_engine: SettingsEngine,
        opener: Box<dyn TabOpener + Send + Sync>,
    ) -> Self {
        let mut app = Self {
            db,
            settings_engine,
            registry: QueryTemplateRegistry::default(),
            opener,
        };
        app.reload_settings();
        app
    }

    /// Re-reads the config file and rebuilds everything derived from it.
    /// A broken config file falls back to defaults.
    pub fn reload_settings(&mut self) {
        if let Err(e) = self.settings_engine.load() {
            warn!(error = %e, path = self.settings_engine.get_config_path(), "using default settings");
        }
        self.apply_settings();
    }

    /// Rebuilds the registry from the in-memory settings.
    pub fn apply_settings(&mut self) {
        self.registry = QueryTemplateRegistry::new(&self.settings_engine.get_settings().sources);
    }

    pub fn history(&self) -> HistoryManager<'_> {
        HistoryManager::new(&self.db)
    }

    pub fn controller(&self) -> QueryController<'_> {
        QueryController::new(
            &self.db,
            &self.registry,
            self.opener.as_ref(),
            &self.settings_engine.get_settings().launch,
        )
    }
}
