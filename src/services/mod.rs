// Wayback Finder services
// Services provide stateless building blocks: domain extraction, URL templates, settings.

pub mod domain_extractor;
pub mod query_templates;
pub mod settings_engine;
