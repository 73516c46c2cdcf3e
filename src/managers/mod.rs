// Wayback Finder state managers
// Managers handle stateful operations: the query history and the query flow that records into it.

pub mod history_manager;
pub mod query_controller;
