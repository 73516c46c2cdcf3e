//! Property-based tests for settings persistence and validation.
//!
//! For arbitrary valid launch and source values, setting them through the
//! engine and loading from disk with a fresh engine gives the same settings.
//! A reversed temporal window is always refused and leaves the file alone.

use proptest::prelude::*;
use tempfile::TempDir;

use wayback_finder::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use wayback_finder::types::errors::SettingsError;

fn arb_yyyymmdd() -> impl Strategy<Value = String> {
    (1996u32..=2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{:04}{:02}{:02}", y, m, d))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn set_values_survive_reload(
        foreground in proptest::bool::ANY,
        delay in 0u64..5_000,
        (year, week) in (2008u32..=2030, 1u32..=53),
        (a, b) in (arb_yyyymmdd(), arb_yyyymmdd()),
        page_size in 1u32..=10_000,
    ) {
        let index = format!("CC-MAIN-{}-{:02}", year, week);
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().unwrap();
        engine.set_value("launch.open_in_foreground", serde_json::json!(foreground)).unwrap();
        engine.set_value("launch.open_delay_ms", serde_json::json!(delay)).unwrap();
        engine.set_value("sources.common_crawl_index", serde_json::json!(index)).unwrap();
        // Order the two writes so the window is never reversed in between.
        if from <= engine.get_settings().sources.temporal_to {
            engine.set_value("sources.temporal_from", serde_json::json!(from)).unwrap();
            engine.set_value("sources.temporal_to", serde_json::json!(to)).unwrap();
        } else {
            engine.set_value("sources.temporal_to", serde_json::json!(to)).unwrap();
            engine.set_value("sources.temporal_from", serde_json::json!(from)).unwrap();
        }
        engine.set_value("sources.urlscan_page_size", serde_json::json!(page_size)).unwrap();

        let mut fresh = SettingsEngine::new(Some(path));
        let loaded = fresh.load().unwrap();

        prop_assert_eq!(&loaded, engine.get_settings());
        prop_assert_eq!(loaded.launch.open_delay_ms, delay);
        prop_assert_eq!(loaded.sources.urlscan_page_size, page_size);
    }

    #[test]
    fn reversed_window_is_refused(
        (a, b) in (arb_yyyymmdd(), arb_yyyymmdd()),
    ) {
        prop_assume!(a != b);
        let (early, late) = if a < b { (a, b) } else { (b, a) };

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();
        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().unwrap();
        engine.set_value("sources.temporal_from", serde_json::json!("19960101")).unwrap();
        engine.set_value("sources.temporal_to", serde_json::json!(early)).unwrap();
        let before = engine.get_settings().clone();

        let result = engine.set_value("sources.temporal_from", serde_json::json!(late));
        prop_assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
        prop_assert_eq!(engine.get_settings(), &before);

        let mut fresh = SettingsEngine::new(Some(path));
        prop_assert_eq!(fresh.load().unwrap(), before);
    }
}
