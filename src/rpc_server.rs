//! Wayback Finder RPC Server: JSON-RPC over stdin/stdout for browser-extension front ends.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"query.execute", "params":{"type":"domain","input":"example.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Requests are handled one at a time. Logs go to stderr.

use std::process::ExitCode;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{error, info};

use wayback_finder::app::App;
use wayback_finder::logger;
use wayback_finder::platform;
use wayback_finder::rpc_handler::handle_method;
use wayback_finder::services::settings_engine::SettingsEngineTrait;

async fn send(stdout: &mut io::Stdout, value: &Value) -> std::io::Result<()> {
    let mut line = value.to_string();
    line.push('\n');
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await
}

#[tokio::main]
async fn main() -> ExitCode {
    let db_path = platform::database_path();
    let app = match App::new(&db_path.to_string_lossy(), None) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to initialize wayback-finder: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logger::init_logging(&app.settings_engine.get_settings().logging.level);
    info!(db = %db_path.display(), "rpc host starting");
    let app = Mutex::new(app);

    let mut stdout = io::stdout();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if send(&mut stdout, &ready).await.is_err() {
        return ExitCode::FAILURE;
    }

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                match handle_method(&app, method, &params).await {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if let Err(e) = send(&mut stdout, &response).await {
            error!(error = %e, "stdout write failed");
            break;
        }
    }

    info!("rpc host stopping");
    ExitCode::SUCCESS
}
