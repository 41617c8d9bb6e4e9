//! Insert result trait definition.

use bulk_insert_shared::{Reply, WriteErrorRecord};

use crate::errors::InsertResultError;
use crate::types::BulkInsertSummary;

/// Interprets the replies of one logical bulk insert.
///
/// Implementations borrow the base result and index map of a single
/// operation. Every method is a pure read over replies that have already been
/// received; calling any of them repeatedly yields the same answer.
///
/// Server-side write errors are reported as data through
/// `aggregate_write_errors`. `Err` is reserved for replies or index maps that
/// cannot be interpreted.
pub trait InsertResult: Send + Sync {
    /// Whether the caller requested confirmation of the write.
    fn acknowledged(&self) -> bool;

    /// Number of documents the server confirmed as inserted.
    ///
    /// Always 0 for an unacknowledged operation.
    fn inserted_count(&self) -> u64;

    /// Whether a reply's primary document carries both an error message and an
    /// error code.
    fn has_write_errors(&self, reply: &Reply) -> bool;

    /// Collect the write errors of every reply, indexed by original request
    /// position.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - If no reply reported a write error
    /// * `Ok(Some(errors))` - One record per reported failure, never empty
    /// * `Err(InsertResultError)` - If a reply or the index map cannot be interpreted
    fn aggregate_write_errors(&self) -> Result<Option<Vec<WriteErrorRecord>>, InsertResultError>;

    /// Build a protocol-independent summary of the operation.
    fn summary(&self) -> Result<BulkInsertSummary, InsertResultError> {
        Ok(BulkInsertSummary {
            acknowledged: self.acknowledged(),
            inserted_count: self.inserted_count(),
            write_errors: self.aggregate_write_errors()?.unwrap_or_default(),
        })
    }

    /// Fail if any document was rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(inserted_count)` - If no write errors were reported
    /// * `Err(InsertResultError::BulkWriteFailure)` - Carrying every normalized write error
    fn validate(&self) -> Result<u64, InsertResultError> {
        match self.aggregate_write_errors()? {
            Some(errors) => Err(InsertResultError::bulk_write_failure(errors)),
            None => Ok(self.inserted_count()),
        }
    }
}
