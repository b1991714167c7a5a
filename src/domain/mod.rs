//! Value-level types shared by the extraction pipeline.

mod error;
mod item;

pub use error::AccessError;
pub use item::{DictAccess, PredictionItem, ResultAccess};
