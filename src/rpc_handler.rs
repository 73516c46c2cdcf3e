//! RPC method handler for the Wayback Finder JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method name and its params to the history
//! store, the template registry, the query controller or the settings engine.

use chrono::Utc;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::app::App;
use crate::managers::history_manager::{format_relative_age, HistoryManagerTrait};
use crate::services::domain_extractor;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::history::{HistoryEntry, NewHistoryEntry};
use crate::types::query::{BuiltQuery, QueryType};

fn str_param<'p>(params: &'p Value, name: &str) -> Result<&'p str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn query_type_param(params: &Value) -> Result<QueryType, String> {
    let id = str_param(params, "type")?;
    QueryType::from_id(id).ok_or_else(|| format!("unknown query type: {}", id))
}

fn query_json(q: &BuiltQuery) -> Value {
    json!({
        "type": q.query_type.id(),
        "hostname": q.hostname,
        "label": q.label,
        "url": q.url,
    })
}

fn entry_json(index: usize, entry: &HistoryEntry, now: chrono::DateTime<Utc>) -> Value {
    let mut value = serde_json::to_value(entry).unwrap_or_else(|_| json!({}));
    if let Value::Object(map) = &mut value {
        map.insert("index".to_string(), json!(index));
        map.insert("age".to_string(), json!(format_relative_age(entry, now)));
    }
    value
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Queries ───
        "domain.extract" => {
            let input = str_param(params, "input")?;
            Ok(json!({"hostname": domain_extractor::extract_domain(input)}))
        }
        "query.types" => {
            let arr: Vec<Value> = QueryType::ALL
                .iter()
                .map(|t| json!({"id": t.id(), "label": t.label(), "category": t.category().label()}))
                .collect();
            Ok(json!(arr))
        }
        "query.build" => {
            let query_type = query_type_param(params)?;
            let input = str_param(params, "input")?;
            let a = app.lock().await;
            let query = a
                .registry
                .build_query(query_type, input)
                .map_err(|e| e.to_string())?;
            Ok(query_json(&query))
        }
        "query.execute" => {
            let query_type = query_type_param(params)?;
            let input = str_param(params, "input")?;
            let a = app.lock().await;
            let mut controller = a.controller();
            let outcome = controller
                .execute(query_type, input)
                .await
                .map_err(|e| e.to_string())?;
            let mut result = query_json(&outcome.query);
            result["history_len"] = json!(outcome.history_len);
            result["history_error"] = json!(outcome.history_error);
            Ok(result)
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().await;
            let entries = a.history().load();
            let now = Utc::now();
            let items: Vec<Value> = entries
                .iter()
                .enumerate()
                .map(|(i, e)| entry_json(i, e, now))
                .collect();
            Ok(json!({"count": items.len(), "items": items}))
        }
        "history.append" => {
            let entry = NewHistoryEntry::new(
                str_param(params, "url")?,
                str_param(params, "type")?,
                str_param(params, "queryUrl")?,
            );
            let a = app.lock().await;
            let log = a.history().append(entry).map_err(|e| e.to_string())?;
            Ok(json!({"count": log.len()}))
        }
        "history.reopen" => {
            let index = params
                .get("index")
                .and_then(|v| v.as_u64())
                .ok_or("missing index")? as usize;
            let a = app.lock().await;
            let entry = a.controller().reopen(index).map_err(|e| e.to_string())?;
            Ok(entry_json(index, &entry, Utc::now()))
        }
        "history.clear" => {
            let a = app.lock().await;
            a.history().clear().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().await;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().await;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().await;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
