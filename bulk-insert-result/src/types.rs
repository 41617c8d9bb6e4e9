//! Summary types for bulk insert results.

use bulk_insert_shared::WriteErrorRecord;
use serde::{Deserialize, Serialize};

/// Protocol-independent outcome of one logical bulk insert.
///
/// Combines the inserted document count with the normalized write errors so
/// callers can report partial failures without knowing which protocol the
/// server spoke.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkInsertSummary {
    /// Whether the caller requested confirmation of the write.
    pub acknowledged: bool,
    /// Number of documents the server confirmed as inserted.
    pub inserted_count: u64,
    /// Documents that failed, by original request position.
    pub write_errors: Vec<WriteErrorRecord>,
}

impl BulkInsertSummary {
    /// Number of documents reported as failed.
    pub fn failed(&self) -> usize {
        self.write_errors.len()
    }

    /// Whether no document was reported as failed.
    pub fn is_success(&self) -> bool {
        self.write_errors.is_empty()
    }
}
