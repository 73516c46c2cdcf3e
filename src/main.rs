//! Wayback Finder: build and open OSINT lookup URLs for a domain.
//!
//! Usage:
//!   wayback-finder <type> <url>     build, open and record a query
//!   wayback-finder types            list query types
//!   wayback-finder history          list recorded queries, newest first
//!   wayback-finder reopen <index>   open a recorded query again
//!   wayback-finder clear            clear the query history

use std::process::ExitCode;

use chrono::Utc;

use wayback_finder::app::App;
use wayback_finder::logger;
use wayback_finder::managers::history_manager::{format_relative_age, HistoryManagerTrait};
use wayback_finder::platform;
use wayback_finder::services::settings_engine::SettingsEngineTrait;
use wayback_finder::types::query::QueryType;

const USAGE: &str = "usage: wayback-finder <type> <url> | types | history | reopen <index> | clear";

fn print_types() {
    let mut category = None;
    for t in QueryType::ALL {
        if category != Some(t.category()) {
            category = Some(t.category());
            println!("{}:", t.category().label());
        }
        println!("  {:<14} {}", t.id(), t.label());
    }
}

fn print_history(app: &App) {
    let entries = app.history().load();
    if entries.is_empty() {
        println!("No queries yet. Start exploring!");
        return;
    }
    let now = Utc::now();
    println!("{} queries", entries.len());
    for (i, e) in entries.iter().enumerate() {
        println!(
            "{:>3}  {}  {} • {}",
            i,
            e.url,
            e.query_type,
            format_relative_age(e, now)
        );
    }
}

async fn run(app: &App, args: &[String]) -> Result<(), String> {
    match args {
        [cmd] if cmd == "types" => {
            print_types();
            Ok(())
        }
        [cmd] if cmd == "history" => {
            print_history(app);
            Ok(())
        }
        [cmd] if cmd == "clear" => {
            app.history().clear().map_err(|e| e.to_string())?;
            println!("History cleared");
            Ok(())
        }
        [cmd, index] if cmd == "reopen" => {
            let index: usize = index
                .parse()
                .map_err(|_| format!("invalid index: {}", index))?;
            let entry = app.controller().reopen(index).map_err(|e| e.to_string())?;
            println!("Reopening query... {}", entry.query_url);
            Ok(())
        }
        [type_id, input] => {
            let query_type = QueryType::from_id(type_id)
                .ok_or_else(|| format!("unknown query type: {} (see `wayback-finder types`)", type_id))?;
            let outcome = app
                .controller()
                .execute(query_type, input)
                .await
                .map_err(|e| e.to_string())?;
            println!("Opening {}...", outcome.query.label);
            println!("{}", outcome.query.url);
            if let Some(err) = outcome.history_error {
                eprintln!("warning: query not saved to history: {}", err);
            }
            Ok(())
        }
        _ => Err(USAGE.to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let db_path = platform::database_path();
    let app = match App::new(&db_path.to_string_lossy(), None) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: failed to open {}: {}", db_path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    logger::init_logging(&app.settings_engine.get_settings().logging.level);

    match run(&app, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
