//! Insert results for servers without write commands.
//!
//! The legacy protocol sends every document as its own insert followed by a
//! status check, so there is one reply per transmitted document and no
//! aggregate written count.

use bulk_insert_shared::fields;
use bulk_insert_shared::{BaseResult, IndexMap, Reply, WriteErrorRecord};
use tracing::debug;

use crate::errors::InsertResultError;
use crate::interfaces::InsertResult;
use crate::normalize;

/// Insert result built from legacy replies, one per transmitted document.
///
/// Reply `i` answers the document at transmitted position `i`, whose original
/// position is `index_map[i]`.
#[derive(Debug, Clone)]
pub struct LegacyInsertResult<'a> {
    base: &'a BaseResult,
    index_map: &'a IndexMap,
}

impl<'a> LegacyInsertResult<'a> {
    /// Create a result over the replies of one logical insert.
    ///
    /// There is no write error policy to configure: a legacy reply never
    /// describes more than one document.
    pub fn new(base: &'a BaseResult, index_map: &'a IndexMap) -> Self {
        Self { base, index_map }
    }

    /// Replace the index map, returning the result for chaining.
    pub fn with_index_map(mut self, index_map: &'a IndexMap) -> Self {
        self.index_map = index_map;
        self
    }

    pub fn index_map(&self) -> &IndexMap {
        self.index_map
    }

    /// Normalize the error carried by the reply at transmitted position `position`.
    fn write_error(
        &self,
        position: usize,
        reply: &Reply,
    ) -> Result<WriteErrorRecord, InsertResultError> {
        let index = normalize::original_position(self.index_map, position)?;
        let code = normalize::error_code(reply.field(fields::ERROR_CODE), position)?;
        Ok(WriteErrorRecord::new(
            index,
            code,
            normalize::message(reply.field(fields::ERROR)),
        ))
    }
}

impl InsertResult for LegacyInsertResult<'_> {
    fn acknowledged(&self) -> bool {
        self.base.acknowledged()
    }

    /// Count the replies whose status equals the success sentinel and that
    /// carry no write error.
    ///
    /// A status check reports `ok: 1` whenever it ran, including for a
    /// rejected document, so the error fields decide. An unacknowledged insert
    /// gets no trustworthy status back, so its count is always 0.
    fn inserted_count(&self) -> u64 {
        if !self.base.acknowledged() {
            return 0;
        }
        self.base
            .replies()
            .iter()
            .filter(|reply| {
                fields::is_ok_sentinel(reply.field(fields::OK))
                    && !normalize::reply_has_write_errors(reply)
            })
            .count() as u64
    }

    fn has_write_errors(&self, reply: &Reply) -> bool {
        normalize::reply_has_write_errors(reply)
    }

    fn aggregate_write_errors(&self) -> Result<Option<Vec<WriteErrorRecord>>, InsertResultError> {
        let errors = self
            .base
            .replies()
            .iter()
            .enumerate()
            .filter(|(_, reply)| self.has_write_errors(reply))
            .map(|(position, reply)| self.write_error(position, reply))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            replies = self.base.replies().len(),
            write_errors = errors.len(),
            "Aggregated legacy insert errors"
        );
        Ok(normalize::into_optional(errors))
    }
}
