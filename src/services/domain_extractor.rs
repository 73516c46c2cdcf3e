// Wayback Finder Domain Extractor
// Turns free-text user input ("example.com", "https://Sub.Example.com/a?b") into
// the hostname and path URL that query templates are built from.

use url::Url;

use crate::types::errors::QueryError;
use crate::types::query::QueryTarget;

/// Returns true if `input` already starts with `http://` or `https://` (any case).
pub fn has_http_scheme(input: &str) -> bool {
    let lower = input.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Trims `input` and prefixes `https://` when it carries no HTTP scheme.
pub fn normalize_input(input: &str) -> String {
    let trimmed = input.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Parses user input into a query target.
///
/// # Errors
/// - `QueryError::EmptyInput` if the input is empty after trimming.
/// - `QueryError::InvalidUrl` if it does not parse as a URL with a host.
pub fn parse_target(input: &str) -> Result<QueryTarget, QueryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyInput);
    }

    let parsed = Url::parse(&normalize_input(trimmed))
        .map_err(|e| QueryError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    let hostname = match parsed.host_str() {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => return Err(QueryError::InvalidUrl(trimmed.to_string())),
    };

    let path_url = format!("{}{}", parsed.origin().ascii_serialization(), parsed.path());

    Ok(QueryTarget { hostname, path_url })
}

/// Best-effort hostname extraction.
///
/// Falls back to returning the input unchanged when it cannot be parsed.
pub fn extract_domain(input: &str) -> String {
    match parse_target(input) {
        Ok(target) => target.hostname,
        Err(_) => input.to_string(),
    }
}
