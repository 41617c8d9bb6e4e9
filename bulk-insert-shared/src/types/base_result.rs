//! The base result of a logical write operation.

use serde::{Deserialize, Serialize};

use crate::fields;
use crate::types::Reply;

/// Raw outcome of one logical write operation.
///
/// Holds every reply received for the operation, in the order the requests
/// were transmitted, together with whether the caller asked the server to
/// acknowledge the write. Insert result interpreters borrow this rather than
/// owning it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BaseResult {
    replies: Vec<Reply>,
    acknowledged: bool,
}

impl BaseResult {
    /// Create the result of an acknowledged operation.
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            acknowledged: true,
        }
    }

    /// Create the result of an operation sent without acknowledgment.
    pub fn unacknowledged(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            acknowledged: false,
        }
    }

    /// The replies, in transmission order.
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Whether the caller requested confirmation of the write.
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Number of documents the server reports as written.
    ///
    /// Sums the `n` field of every reply's primary document. Replies without a
    /// numeric `n` contribute nothing. The total saturates at `u64::MAX`.
    /// Always 0 for an unacknowledged operation.
    pub fn written_count(&self) -> u64 {
        if !self.acknowledged {
            return 0;
        }
        self.replies
            .iter()
            .filter_map(|reply| reply.field(fields::WRITTEN))
            .filter_map(|n| n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)))
            .fold(0u64, u64::saturating_add)
    }
}
