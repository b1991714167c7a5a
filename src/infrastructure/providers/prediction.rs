//! Prediction-item responses.
//!
//! Covers document predictions exposing `markdown`, `parsing_res_list`, or
//! `spotting_res`/`ocr_res` structure, possibly behind an opaque record
//! accessor. Unlike the other families this extractor collects every known
//! candidate and keeps the longest, because providers routinely populate
//! several overlapping fields with partial renditions of the same document.

use serde_json::Value;

use super::lite_ocr::rec_texts_text;
use crate::domain::PredictionItem;
use crate::infrastructure::search::extract_text;

/// String fields read directly off the item (or its `res` mapping).
const DIRECT_TEXT_FIELDS: [&str; 6] = [
    "markdown",
    "overall_markdown",
    "overall_text",
    "text",
    "content",
    "result_text",
];

/// Fields that may carry recognition nodes.
const RECOGNITION_FIELDS: [&str; 2] = ["spotting_res", "ocr_res"];

/// Fixed keys a per-item page count may sit under.
const ITEM_PAGE_KEYS: [&str; 4] = ["page_count", "pages", "num_pages", "total_pages"];

/// File extensions that mark a candidate as a path, not extracted text.
const PATH_EXTENSIONS: [&str; 7] = [".pdf", ".png", ".jpg", ".jpeg", ".bmp", ".tiff", ".webp"];

/// Extract the most plausible text from one prediction item.
///
/// The item is first normalized into a plain JSON value, then every known
/// candidate field is collected, path-like strings are filtered out, and
/// the longest survivor (by character count) is returned. Length is the
/// only ranking signal, so a verbose unrelated field can outweigh a short
/// correct answer; the trade-off is accepted for recall across providers.
pub fn extract_prediction_text(item: impl Into<PredictionItem>) -> String {
    let payload = item.into().into_value();
    let mut candidates: Vec<String> = Vec::new();

    for field in DIRECT_TEXT_FIELDS {
        if let Some(Value::String(text)) = lookup(&payload, field) {
            candidates.push(text.clone());
        }
    }

    if let Some(Value::Array(blocks)) = lookup(&payload, "parsing_res_list") {
        let joined = blocks
            .iter()
            .filter_map(|block| block.get("content"))
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        candidates.push(joined);
    }

    for field in RECOGNITION_FIELDS {
        if let Some(node) = lookup(&payload, field) {
            candidates.extend(recognition_text(node));
        }
    }

    candidates.push(extract_text(&payload));

    let mut best = "";
    let mut best_len = 0;
    for candidate in &candidates {
        let trimmed = candidate.trim();
        if trimmed.is_empty() || is_path_like(trimmed) {
            continue;
        }
        let len = trimmed.chars().count();
        if len > best_len {
            best = trimmed;
            best_len = len;
        }
    }

    best.to_string()
}

/// Read a page count directly off one prediction item.
///
/// Non-recursive: per-item page counts are expected at the top level only,
/// so nothing below it is searched. Returns 0 when no key holds a positive
/// number.
pub fn extract_prediction_pages(item: impl Into<PredictionItem>) -> u32 {
    let payload = item.into().into_value();

    for key in ITEM_PAGE_KEYS {
        if let Some(count) = payload.get(key).and_then(Value::as_f64)
            && count > 0.0
        {
            return count as u32;
        }
    }

    0
}

/// Look a field up on the item, preferring a nested `res` mapping when one
/// is present and carries the field.
fn lookup<'a>(payload: &'a Value, field: &str) -> Option<&'a Value> {
    if let Some(res) = payload.get("res")
        && res.is_object()
        && let Some(value) = res.get(field)
    {
        return Some(value);
    }

    payload.get(field)
}

/// Candidates from a `spotting_res`/`ocr_res` node: either an object with a
/// `rec_texts` collection, or a sequence of objects each exposing
/// `rec_text`.
fn recognition_text(node: &Value) -> Vec<String> {
    if let Some(rec_texts) = node.get("rec_texts")
        && let Some(text) = rec_texts_text(rec_texts)
    {
        return vec![text];
    }

    if let Value::Array(entries) = node {
        let joined = entries
            .iter()
            .filter_map(|entry| entry.get("rec_text"))
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if !joined.is_empty() {
            return vec![joined];
        }
    }

    Vec::new()
}

/// Reject candidates that look like file paths or URLs rather than text.
fn is_path_like(candidate: &str) -> bool {
    let lowered = candidate.trim().to_lowercase();

    if lowered.starts_with("http://")
        || lowered.starts_with("https://")
        || lowered.starts_with("file://")
    {
        return true;
    }

    (lowered.contains('/') || lowered.contains('\\'))
        && PATH_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_longest_candidate_wins() {
        let payload = json!({
            "markdown": "Hi",
            "parsing_res_list": [
                {"content": "Hello world,"},
                {"content": "full text here."},
            ]
        });
        assert_eq!(
            extract_prediction_text(payload),
            "Hello world,\nfull text here."
        );
    }

    #[test]
    fn test_res_mapping_is_preferred() {
        let payload = json!({
            "markdown": "outer",
            "res": {"markdown": "inner rendition wins"},
        });
        assert_eq!(extract_prediction_text(payload), "inner rendition wins");
    }

    #[test]
    fn test_path_like_candidates_are_rejected() {
        let payload = json!({"markdown": "/data/out/report_p1.pdf"});
        assert_eq!(extract_prediction_text(payload), "");

        let payload = json!({"text": "https://example.com/doc"});
        assert_eq!(extract_prediction_text(payload), "");
    }

    #[test]
    fn test_plain_sentence_with_slash_is_kept() {
        let payload = json!({"text": "either/or, both readings are fine"});
        assert_eq!(
            extract_prediction_text(payload),
            "either/or, both readings are fine"
        );
    }

    #[test]
    fn test_recognition_node_shapes() {
        let payload = json!({"ocr_res": {"rec_texts": ["alpha", "beta"]}});
        assert_eq!(extract_prediction_text(payload), "alpha\nbeta");

        let payload = json!({
            "spotting_res": [
                {"rec_text": "one"},
                {"rec_text": "two"},
                {"other": true},
            ]
        });
        assert_eq!(extract_prediction_text(payload), "one\ntwo");
    }

    #[test]
    fn test_page_lookup_is_top_level_only() {
        assert_eq!(extract_prediction_pages(json!({"page_count": 3})), 3);
        assert_eq!(
            extract_prediction_pages(json!({"pages": -1, "num_pages": 9})),
            9
        );
        assert_eq!(extract_prediction_pages(json!({"meta": {"pages": 5}})), 0);
    }

    #[test]
    fn test_is_path_like_boundaries() {
        assert!(is_path_like("C:\\scans\\page.PNG"));
        assert!(is_path_like("  file://tmp/x  "));
        assert!(!is_path_like("report_p1.pdf"));
        assert!(!is_path_like("see https in the middle http"));
    }
}
