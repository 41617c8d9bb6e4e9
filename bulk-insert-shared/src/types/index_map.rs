//! Index map produced by batch splitting.
//!
//! When a large insert is split into sub-batches, or sent one document at a
//! time, the server only knows a document's position in what it received.
//! The index map records where each transmitted document came from in the
//! caller's original request.

use serde::{Deserialize, Serialize};

/// Maps transmitted positions back to positions in the caller's request.
///
/// `positions[i]` is the original request position of the document sent at
/// transmitted position `i`. The transmitted stream is divided into
/// contiguous sub-batches; sub-batch `b` covers positions
/// `batch_offset(b)..batch_offset(b) + batch_len(b)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexMap {
    positions: Vec<usize>,
    batch_offsets: Vec<usize>,
}

impl IndexMap {
    /// Create a map whose positions form a single sub-batch.
    pub fn new(positions: Vec<usize>) -> Self {
        Self {
            positions,
            batch_offsets: vec![0],
        }
    }

    /// Create a single-batch map where every document kept its position.
    pub fn identity(len: usize) -> Self {
        Self::new((0..len).collect())
    }

    /// Create a map from the original positions of each sub-batch, in
    /// transmission order.
    ///
    /// # Example
    ///
    /// ```
    /// use bulk_insert_shared::IndexMap;
    ///
    /// let map = IndexMap::from_batches(vec![vec![0, 1, 2], vec![3, 4, 5]]);
    /// assert_eq!(map.batch_offset(1), Some(3));
    /// assert_eq!(map.original_position(4), Some(4));
    /// ```
    pub fn from_batches(batches: Vec<Vec<usize>>) -> Self {
        let mut positions = Vec::with_capacity(batches.iter().map(Vec::len).sum());
        let mut batch_offsets = Vec::with_capacity(batches.len());
        for batch in batches {
            batch_offsets.push(positions.len());
            positions.extend(batch);
        }
        Self {
            positions,
            batch_offsets,
        }
    }

    /// Original request position of the document at transmitted position `transmitted`.
    pub fn original_position(&self, transmitted: usize) -> Option<usize> {
        self.positions.get(transmitted).copied()
    }

    /// Transmitted position at which sub-batch `batch` starts.
    pub fn batch_offset(&self, batch: usize) -> Option<usize> {
        self.batch_offsets.get(batch).copied()
    }

    /// Number of documents in sub-batch `batch`.
    pub fn batch_len(&self, batch: usize) -> Option<usize> {
        let start = self.batch_offset(batch)?;
        let end = self
            .batch_offset(batch + 1)
            .unwrap_or(self.positions.len());
        Some(end - start)
    }

    /// Number of sub-batches.
    pub fn batch_count(&self) -> usize {
        self.batch_offsets.len()
    }

    /// Number of transmitted positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All original positions in transmission order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

impl From<Vec<usize>> for IndexMap {
    fn from(positions: Vec<usize>) -> Self {
        Self::new(positions)
    }
}
