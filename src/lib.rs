//! Wayback Finder: OSINT lookup URL builder with a bounded query history.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod logger;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
