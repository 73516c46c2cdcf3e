//! Wayback Finder database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! named-record storage areas the history store persists into.
//!
//! # Usage
//!
//! ```no_run
//! use wayback_finder::database::{Database, StorageArea};
//!
//! // Open a persistent database
//! let db = Database::open("wayback-finder.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Read a named record
//! let raw = db.get("queryHistory").expect("storage unavailable");
//! ```

pub mod connection;
pub mod migrations;
pub mod storage_area;

pub use connection::Database;
pub use storage_area::{MemoryStorage, StorageArea};
