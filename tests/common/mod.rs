//! Common test utilities and mock backend records

#![allow(dead_code)]

use std::fmt;

use serde_json::Value;

use docpipe_extract::{AccessError, DictAccess, ResultAccess};

/// Opaque record whose result accessor yields a fixed payload.
pub struct FixedResult(pub Value);

impl fmt::Display for FixedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedResult({})", self.0)
    }
}

impl ResultAccess for FixedResult {
    fn result(&self) -> Result<Value, AccessError> {
        Ok(self.0.clone())
    }
}

/// Opaque record whose dictionary conversion yields a fixed payload.
pub struct FixedDict(pub Value);

impl fmt::Display for FixedDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDict({})", self.0)
    }
}

impl DictAccess for FixedDict {
    fn to_dict(&self) -> Result<Value, AccessError> {
        Ok(self.0.clone())
    }
}

/// Opaque record whose every accessor fails.
pub struct BrokenRecord;

impl fmt::Display for BrokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "raw backend output: page 1 of 2")
    }
}

impl ResultAccess for BrokenRecord {
    fn result(&self) -> Result<Value, AccessError> {
        Err(AccessError::result("backend handle dropped"))
    }
}

impl DictAccess for BrokenRecord {
    fn to_dict(&self) -> Result<Value, AccessError> {
        Err(AccessError::dict("backend handle dropped"))
    }
}
