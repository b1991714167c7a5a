//! Bounded recursive searches over untyped payload trees.
//!
//! Both searches share one shape: pattern-match on the JSON union, try the
//! most specific signal first, and fan out over values in iteration order
//! when nothing specific matches. Depth ceilings guarantee termination and
//! keep worst-case cost proportional to payload size even on pathological
//! nesting.

use serde_json::Value;

/// Depth ceiling for the text search.
pub const TEXT_DEPTH_LIMIT: usize = 8;

/// Depth ceiling for the page-count search.
pub const PAGE_DEPTH_LIMIT: usize = 6;

/// Field names that reliably carry extracted text, most specific first.
const TEXT_PRIORITY_KEYS: [&str; 9] = [
    "text",
    "ocr_text",
    "extracted_text",
    "result_text",
    "content",
    "result",
    "output",
    "answer",
    "response",
];

/// Field names that reliably carry a page count.
const PAGE_KEYS: [&str; 4] = ["pages", "page_count", "num_pages", "total_pages"];

/// Locate the most plausible text payload in an arbitrary decoded value.
///
/// Mappings are searched in tiers of decreasing confidence: the fixed
/// priority keys, a `choices` sequence, any key containing `text` or
/// `content`, and finally every value in iteration order. The first
/// non-empty result wins. Returns an empty string when nothing plausible is
/// found; never errors.
pub fn extract_text(value: &Value) -> String {
    text_search(value, 0)
}

fn text_search(value: &Value, depth: usize) -> String {
    if depth > TEXT_DEPTH_LIMIT {
        return String::new();
    }

    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Object(map) => {
            for key in TEXT_PRIORITY_KEYS {
                if let Some(inner) = map.get(key) {
                    let found = text_search(inner, depth + 1);
                    if !found.is_empty() {
                        return found;
                    }
                }
            }

            if let Some(Value::Array(choices)) = map.get("choices") {
                for choice in choices {
                    let found = text_search(choice, depth + 1);
                    if !found.is_empty() {
                        return found;
                    }
                }
            }

            for (key, inner) in map {
                let lowered = key.to_lowercase();
                if lowered.contains("text") || lowered.contains("content") {
                    let found = text_search(inner, depth + 1);
                    if !found.is_empty() {
                        return found;
                    }
                }
            }

            for inner in map.values() {
                let found = text_search(inner, depth + 1);
                if !found.is_empty() {
                    return found;
                }
            }

            String::new()
        }
        Value::Array(items) => {
            for item in items {
                let found = text_search(item, depth + 1);
                if !found.is_empty() {
                    return found;
                }
            }
            String::new()
        }
        _ => String::new(),
    }
}

/// Locate a positive page count in an arbitrary decoded value.
///
/// Only the fixed page keys and a generic value scan are tried; there is no
/// substring tier, since page counts are rarer and more reliably labeled.
/// Zero and negative numbers mean "not found". Returns 0 when no positive
/// count exists anywhere in bounds.
pub fn extract_pages(value: &Value) -> u32 {
    page_search(value, 0)
}

fn page_search(value: &Value, depth: usize) -> u32 {
    if depth > PAGE_DEPTH_LIMIT {
        return 0;
    }

    match value {
        Value::Number(number) => match number.as_f64() {
            Some(count) if count > 0.0 => count as u32,
            _ => 0,
        },
        Value::Object(map) => {
            for key in PAGE_KEYS {
                if let Some(inner) = map.get(key) {
                    let found = page_search(inner, depth + 1);
                    if found > 0 {
                        return found;
                    }
                }
            }

            for inner in map.values() {
                let found = page_search(inner, depth + 1);
                if found > 0 {
                    return found;
                }
            }

            0
        }
        Value::Array(items) => {
            for item in items {
                let found = page_search(item, depth + 1);
                if found > 0 {
                    return found;
                }
            }
            0
        }
        _ => 0,
    }
}
