//! Normalize one raw backend response body into text and a page count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::PredictionItem;
use crate::infrastructure::providers::{
    extract_chat_text, extract_lite_ocr_text, extract_prediction_pages, extract_prediction_text,
};
use crate::infrastructure::response_parser::parse_json_or_jsonl;
use crate::infrastructure::search::extract_pages;

/// Backend family that produced a response.
///
/// Chosen by the caller based on which backend it talked to; the engine
/// never auto-detects across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Chat-completion payloads (`message.content`, `response`, `chunks`)
    Chat,
    /// Row-based OCR payloads (`[geometry, [text, confidence]]`, `rec_texts`)
    LiteOcr,
    /// Prediction-item payloads (`markdown`, `parsing_res_list`, `ocr_res`)
    Prediction,
}

/// Best-effort extraction result for one response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    /// Extracted text; empty when nothing plausible was found
    pub text: String,
    /// Page count; zero means "not found"
    pub pages: u32,
}

/// Normalize a raw response body from the given backend family.
///
/// The body is decoded as JSON or JSONL, the family's shape extractor runs
/// over the payload, and a page count is searched alongside. Undecodable
/// bodies produce the empty response; this never errors.
pub fn normalize_response(kind: BackendKind, body: &str) -> NormalizedResponse {
    let Some(payload) = parse_json_or_jsonl(body) else {
        debug!(?kind, "response body did not decode as JSON or JSONL");
        return NormalizedResponse::default();
    };

    let text = match kind {
        BackendKind::Chat => extract_chat_text(&payload),
        BackendKind::LiteOcr => extract_lite_ocr_text(&payload),
        BackendKind::Prediction => extract_prediction_text(PredictionItem::from(&payload)),
    };

    let pages = match kind {
        BackendKind::Prediction => {
            let direct = extract_prediction_pages(PredictionItem::from(&payload));
            if direct > 0 {
                direct
            } else {
                extract_pages(&payload)
            }
        }
        // Row-based OCR bodies are geometry arrays; a generic numeric scan
        // over them would surface a coordinate as the page count.
        BackendKind::LiteOcr if payload.is_array() => 0,
        BackendKind::Chat | BackendKind::LiteOcr => extract_pages(&payload),
    };

    debug!(?kind, text_len = text.len(), pages, "normalized backend response");

    NormalizedResponse { text, pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecodable_body_yields_default() {
        let normalized = normalize_response(BackendKind::Chat, "not json at all");
        assert_eq!(normalized, NormalizedResponse::default());
    }

    #[test]
    fn test_backend_kind_serializes_snake_case() {
        let kind = serde_json::to_string(&BackendKind::LiteOcr).unwrap();
        assert_eq!(kind, "\"lite_ocr\"");
    }
}
