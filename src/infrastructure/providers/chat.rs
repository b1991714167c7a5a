//! Chat-completion shaped responses.
//!
//! Covers single documents carrying `message.content` or `response`, and
//! the synthetic `{"chunks": [...]}` mapping produced for newline-delimited
//! bodies.

use serde_json::Value;

use crate::infrastructure::response_parser::extract_by_path;
use crate::infrastructure::search::extract_text;

/// Extract text from a chat-style payload.
///
/// Checks `message.content`, then a top-level `response` string, then a
/// `chunks` sequence whose elements are each run through this same
/// extractor and newline-joined. Anything else falls back to the generic
/// bounded search over the whole payload.
pub fn extract_chat_text(value: &Value) -> String {
    if let Some(Value::String(content)) = extract_by_path(value, "message.content")
        && !content.trim().is_empty()
    {
        return content.trim().to_string();
    }

    if let Some(Value::String(response)) = value.get("response")
        && !response.trim().is_empty()
    {
        return response.trim().to_string();
    }

    if let Some(Value::Array(chunks)) = value.get("chunks") {
        let joined = chunks
            .iter()
            .map(extract_chat_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        let joined = joined.trim();
        if !joined.is_empty() {
            return joined.to_string();
        }
    }

    extract_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_content_wins() {
        let payload = json!({
            "message": {"content": "from message"},
            "response": "from response",
        });
        assert_eq!(extract_chat_text(&payload), "from message");
    }

    #[test]
    fn test_blank_message_content_falls_through() {
        let payload = json!({
            "message": {"content": "   "},
            "response": "from response",
        });
        assert_eq!(extract_chat_text(&payload), "from response");
    }

    #[test]
    fn test_chunks_are_joined_in_order() {
        let payload = json!({
            "chunks": [
                {"message": {"content": "first"}},
                {"unrelated": true},
                {"response": "second"},
            ]
        });
        assert_eq!(extract_chat_text(&payload), "first\nsecond");
    }

    #[test]
    fn test_unrecognized_shape_uses_generic_search() {
        let payload = json!({"nested": {"ocr_text": "generic"}});
        assert_eq!(extract_chat_text(&payload), "generic");
    }
}
