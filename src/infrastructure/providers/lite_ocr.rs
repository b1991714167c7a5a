//! Row-based OCR responses.
//!
//! Two shapes are recognized: a sequence of `[geometry, [text, confidence]]`
//! rows, and an object carrying a `rec_texts` collection.

use serde_json::Value;

use crate::infrastructure::search::extract_text;

/// Extract text from a row-based OCR payload.
///
/// Qualifying rows are collected in order and newline-joined; whitespace-only
/// cells are dropped. An unrecognized shape falls back to the generic
/// bounded search.
pub fn extract_lite_ocr_text(value: &Value) -> String {
    if let Value::Array(rows) = value {
        let lines: Vec<String> = rows.iter().filter_map(row_text).collect();
        if !lines.is_empty() {
            return lines.join("\n");
        }
    }

    if let Some(rec_texts) = value.get("rec_texts")
        && let Some(text) = rec_texts_text(rec_texts)
    {
        return text;
    }

    extract_text(value)
}

/// Apply the `rec_texts` rule to a node: a sequence has its scalar entries
/// stringified, trimmed, empties dropped and newline-joined; a single
/// non-blank string passes through.
pub(super) fn rec_texts_text(rec_texts: &Value) -> Option<String> {
    match rec_texts {
        Value::Array(entries) => {
            let lines: Vec<String> = entries.iter().filter_map(scalar_text).collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

/// Read the text cell out of one `[geometry, [text, confidence, ...]]` row.
fn row_text(row: &Value) -> Option<String> {
    let Value::Array(cells) = row else {
        return None;
    };
    if cells.len() != 2 {
        return None;
    }

    let Value::Array(recognition) = cells.get(1)? else {
        return None;
    };
    let Value::String(text) = recognition.first()? else {
        return None;
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Render a scalar entry as trimmed text; containers yield nothing.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };

    if text.is_empty() { None } else { Some(text) }
}
