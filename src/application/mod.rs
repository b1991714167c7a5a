//! Use cases composing the extraction pipeline for callers.

pub mod use_cases;
