//! Shape-specific readers for the recognized backend response families.
//!
//! The caller picks the extractor matching the backend that produced the
//! payload; nothing here auto-detects across families, and nothing here
//! errors.

mod chat;
mod lite_ocr;
mod prediction;

pub use chat::extract_chat_text;
pub use lite_ocr::extract_lite_ocr_text;
pub use prediction::{extract_prediction_pages, extract_prediction_text};
