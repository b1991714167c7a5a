//! Response normalization for document-pipeline OCR and LLM backends.
//!
//! Backends return arbitrarily shaped, untyped JSON: there is no fixed
//! schema and no guaranteed field names. This crate deterministically
//! locates the most plausible extracted text and a page count in whatever
//! shows up, degrading to empty/zero sentinels on malformed or
//! unrecognized input instead of erroring.
//!
//! Every operation is a pure, synchronous function of its input; the I/O
//! layer that fetches backend responses lives elsewhere in the pipeline.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::{BackendKind, NormalizedResponse, normalize_response};
pub use domain::{AccessError, DictAccess, PredictionItem, ResultAccess};
pub use infrastructure::providers::{
    extract_chat_text, extract_lite_ocr_text, extract_prediction_pages, extract_prediction_text,
};
pub use infrastructure::response_parser::{extract_by_path, parse_json_or_jsonl, read_json_object};
pub use infrastructure::search::{PAGE_DEPTH_LIMIT, TEXT_DEPTH_LIMIT, extract_pages, extract_text};
