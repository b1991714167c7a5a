//! Safe decoding of raw backend response bodies.
//!
//! Backends disagree on whether a body is one JSON document or a stream of
//! newline-delimited objects, and malformed bodies are routine. Every
//! reader here degrades to an empty or absent result instead of erroring.

use serde_json::{Map, Value, json};
use tracing::trace;

/// Parse a raw string into a JSON mapping.
///
/// Whitespace-only input, invalid JSON, and valid non-object values all
/// yield an empty mapping. Callers that need array-capable parsing use
/// [`parse_json_or_jsonl`] instead.
pub fn read_json_object(raw: &str) -> Map<String, Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Map::new();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Parse a response body as one JSON document, or as newline-delimited
/// JSON objects when whole-body parsing fails.
///
/// Recovered JSONL objects are wrapped as `{"chunks": [...]}` so downstream
/// extractors see a single mapping. Lines that do not decode to an object
/// are skipped. Returns `None` when neither strategy yields anything.
pub fn parse_json_or_jsonl(body: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return Some(value);
    }

    let chunks: Vec<Value> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .filter(Value::is_object)
        .collect();

    if chunks.is_empty() {
        return None;
    }

    trace!(
        chunks = chunks.len(),
        "recovered newline-delimited response body"
    );
    Some(json!({ "chunks": chunks }))
}

/// Resolve a dot-separated path through nested mappings and sequences.
///
/// Tokens are trimmed; an empty token aborts the walk. A sequence cursor
/// requires an in-bounds decimal index, a mapping cursor an existing key,
/// and any scalar cursor returns `None`. This is exact-match navigation,
/// not a search: it never guesses or back-tracks.
pub fn extract_by_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cursor = data;

    for token in path.split('.') {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        cursor = match cursor {
            Value::Array(items) => items.get(token.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(token)?,
            _ => return None,
        };
    }

    Some(cursor)
}
