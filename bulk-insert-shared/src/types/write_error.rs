//! Normalized write error record.

use serde::{Deserialize, Serialize};

/// A single document that failed to insert.
///
/// `index` is always the document's position in the caller's original
/// request, regardless of how the request was split for transmission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteErrorRecord {
    /// Position of the failed document in the original request.
    pub index: usize,
    /// Server error code.
    pub code: i64,
    /// Server error message.
    #[serde(rename = "errmsg")]
    pub message: String,
}

impl WriteErrorRecord {
    pub fn new(index: usize, code: i64, message: impl Into<String>) -> Self {
        Self {
            index,
            code,
            message: message.into(),
        }
    }
}
