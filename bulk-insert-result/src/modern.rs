//! Insert results for servers that speak the write-command protocol.
//!
//! Each reply answers one transmitted sub-batch and reports its failures in a
//! `writeErrors` array whose indexes are relative to that sub-batch.

use bulk_insert_shared::fields;
use bulk_insert_shared::{BaseResult, IndexMap, Reply, WriteErrorRecord};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{InsertResultConfig, WriteErrorPolicy};
use crate::errors::InsertResultError;
use crate::interfaces::InsertResult;
use crate::normalize;

/// Insert result built from write-command replies, one per sub-batch.
///
/// Reply `b` is matched with sub-batch `b` of the index map, so a write error
/// at index `k` of that reply refers to transmitted position
/// `index_map.batch_offset(b) + k`.
///
/// # Example
///
/// ```
/// use bulk_insert_result::{InsertResult, ModernInsertResult};
/// use bulk_insert_shared::{BaseResult, IndexMap, Reply};
/// use serde_json::json;
///
/// let base = BaseResult::new(vec![Reply::from_value(json!({
///     "ok": 1,
///     "n": 2,
///     "writeErrors": [{ "index": 1, "code": 11000, "errmsg": "dup" }],
/// }))]);
/// let index_map = IndexMap::new(vec![10, 11, 12]);
///
/// let result = ModernInsertResult::new(&base, &index_map);
/// let errors = result.aggregate_write_errors().unwrap().unwrap();
/// assert_eq!(errors[0].index, 11);
/// assert_eq!(result.inserted_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ModernInsertResult<'a> {
    base: &'a BaseResult,
    index_map: &'a IndexMap,
    config: InsertResultConfig,
}

impl<'a> ModernInsertResult<'a> {
    /// Create a result with the default configuration.
    pub fn new(base: &'a BaseResult, index_map: &'a IndexMap) -> Self {
        Self::with_config(base, index_map, InsertResultConfig::default())
    }

    /// Create a result with a custom configuration.
    pub fn with_config(
        base: &'a BaseResult,
        index_map: &'a IndexMap,
        config: InsertResultConfig,
    ) -> Self {
        Self {
            base,
            index_map,
            config,
        }
    }

    /// Replace the index map, returning the result for chaining.
    pub fn with_index_map(mut self, index_map: &'a IndexMap) -> Self {
        self.index_map = index_map;
        self
    }

    pub fn index_map(&self) -> &IndexMap {
        self.index_map
    }

    /// Write errors reported by the reply for sub-batch `batch`.
    fn batch_write_errors(
        &self,
        batch: usize,
        reply: &Reply,
    ) -> Result<Vec<WriteErrorRecord>, InsertResultError> {
        let entries = match reply.field(fields::WRITE_ERRORS) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(InsertResultError::malformed_reply(
                    batch,
                    "writeErrors is not an array",
                ));
            }
        };
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let offset = self
            .index_map
            .batch_offset(batch)
            .ok_or_else(|| InsertResultError::missing_batch(batch, self.index_map.batch_count()))?;
        let batch_len = self.index_map.batch_len(batch).unwrap_or_default();

        let reported = match self.config.write_error_policy {
            WriteErrorPolicy::All => entries.len(),
            WriteErrorPolicy::FirstPerBatch => 1,
        };
        if reported < entries.len() {
            warn!(
                batch = batch,
                reported = reported,
                dropped = entries.len() - reported,
                "Dropping write errors beyond the first of the sub-batch"
            );
        }

        entries
            .iter()
            .take(reported)
            .map(|entry| self.remap(batch, offset, batch_len, entry))
            .collect()
    }

    /// Resolve one `writeErrors` entry to the caller's original position.
    fn remap(
        &self,
        batch: usize,
        offset: usize,
        batch_len: usize,
        entry: &Value,
    ) -> Result<WriteErrorRecord, InsertResultError> {
        let index = entry
            .get(fields::INDEX)
            .and_then(Value::as_u64)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or_else(|| {
                InsertResultError::malformed_reply(
                    batch,
                    "write error has no non-negative integer index",
                )
            })?;
        if index >= batch_len {
            return Err(InsertResultError::batch_index_out_of_range(
                batch, index, batch_len,
            ));
        }

        let position = normalize::original_position(self.index_map, offset + index)?;
        let code = normalize::error_code(entry.get(fields::ERROR_CODE), batch)?;
        Ok(WriteErrorRecord::new(
            position,
            code,
            normalize::message(entry.get(fields::ERROR_MSG)),
        ))
    }
}

impl InsertResult for ModernInsertResult<'_> {
    fn acknowledged(&self) -> bool {
        self.base.acknowledged()
    }

    /// The server-reported written count, as tracked by the base result.
    fn inserted_count(&self) -> u64 {
        self.base.written_count()
    }

    fn has_write_errors(&self, reply: &Reply) -> bool {
        normalize::reply_has_write_errors(reply)
    }

    fn aggregate_write_errors(&self) -> Result<Option<Vec<WriteErrorRecord>>, InsertResultError> {
        let mut errors = Vec::new();
        for (batch, reply) in self.base.replies().iter().enumerate() {
            errors.extend(self.batch_write_errors(batch, reply)?);
        }

        debug!(
            replies = self.base.replies().len(),
            write_errors = errors.len(),
            "Aggregated write-command insert errors"
        );
        Ok(normalize::into_optional(errors))
    }
}
