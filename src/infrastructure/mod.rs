//! Parsing and search algorithms over untyped backend payloads.

pub mod providers;
pub mod response_parser;
pub mod search;
