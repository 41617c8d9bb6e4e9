//! Insert result error types.

use bulk_insert_shared::WriteErrorRecord;
use thiserror::Error;

/// Errors from interpreting the replies of a bulk insert.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InsertResultError {
    /// A transmitted position has no entry in the index map.
    #[error("Transmitted position {position} is outside the index map (length {len})")]
    IndexOutOfRange { position: usize, len: usize },

    /// A write error index lies outside the sub-batch that reported it.
    #[error("Write error index {index} is outside sub-batch {batch} (length {batch_len})")]
    BatchIndexOutOfRange {
        batch: usize,
        index: usize,
        batch_len: usize,
    },

    /// A write-command reply has no matching sub-batch in the index map.
    #[error("Reply {reply} has no sub-batch in the index map ({batch_count} sub-batches)")]
    MissingBatch { reply: usize, batch_count: usize },

    /// A reply could not be interpreted.
    #[error("Malformed reply {reply}: {reason}")]
    MalformedReply { reply: usize, reason: String },

    /// The server rejected one or more documents.
    #[error("Bulk write failed for {} document(s)", errors.len())]
    BulkWriteFailure { errors: Vec<WriteErrorRecord> },
}

impl InsertResultError {
    /// Create an index out of range error.
    pub fn index_out_of_range(position: usize, len: usize) -> Self {
        Self::IndexOutOfRange { position, len }
    }

    /// Create a batch index out of range error.
    pub fn batch_index_out_of_range(batch: usize, index: usize, batch_len: usize) -> Self {
        Self::BatchIndexOutOfRange {
            batch,
            index,
            batch_len,
        }
    }

    /// Create a missing batch error.
    pub fn missing_batch(reply: usize, batch_count: usize) -> Self {
        Self::MissingBatch { reply, batch_count }
    }

    /// Create a malformed reply error.
    pub fn malformed_reply(reply: usize, reason: impl Into<String>) -> Self {
        Self::MalformedReply {
            reply,
            reason: reason.into(),
        }
    }

    /// Create a bulk write failure carrying the normalized write errors.
    pub fn bulk_write_failure(errors: Vec<WriteErrorRecord>) -> Self {
        Self::BulkWriteFailure { errors }
    }

    /// The write errors carried by a bulk write failure, if this is one.
    pub fn write_errors(&self) -> Option<&[WriteErrorRecord]> {
        match self {
            Self::BulkWriteFailure { errors } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InsertResultError::index_out_of_range(5, 3).to_string(),
            "Transmitted position 5 is outside the index map (length 3)"
        );
        assert_eq!(
            InsertResultError::malformed_reply(2, "writeErrors is not an array").to_string(),
            "Malformed reply 2: writeErrors is not an array"
        );
        assert_eq!(
            InsertResultError::bulk_write_failure(vec![
                WriteErrorRecord::new(0, 11000, "dup"),
                WriteErrorRecord::new(4, 11000, "dup"),
            ])
            .to_string(),
            "Bulk write failed for 2 document(s)"
        );
    }

    #[test]
    fn test_write_errors_accessor() {
        let records = vec![WriteErrorRecord::new(3, 11000, "dup")];
        let error = InsertResultError::bulk_write_failure(records.clone());
        assert_eq!(error.write_errors(), Some(records.as_slice()));
        assert!(InsertResultError::missing_batch(1, 1).write_errors().is_none());
    }
}
