//! Configuration types for insert result interpretation.

use serde::{Deserialize, Serialize};

/// How many entries of a sub-batch's `writeErrors` array are surfaced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WriteErrorPolicy {
    /// Report every failing document, each remapped to its original position.
    #[default]
    All,
    /// Report only the first failing document of each sub-batch.
    ///
    /// Older drivers surfaced a single representative error per sub-batch.
    /// Use this when callers depend on that shape.
    FirstPerBatch,
}

/// Configuration for `ModernInsertResult` and `LegacyInsertResult`.
///
/// Only the write-command protocol is affected by the write error policy: a
/// legacy reply never describes more than one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsertResultConfig {
    /// Which write errors of a failing sub-batch are reported.
    #[serde(default)]
    pub write_error_policy: WriteErrorPolicy,
}

impl InsertResultConfig {
    /// Create a config that reports only the first error of each sub-batch.
    ///
    /// # Returns
    ///
    /// An `InsertResultConfig` with `write_error_policy` set to `FirstPerBatch`.
    pub fn first_error_per_batch() -> Self {
        Self::with_policy(WriteErrorPolicy::FirstPerBatch)
    }

    /// Create a config with a specific write error policy.
    pub fn with_policy(write_error_policy: WriteErrorPolicy) -> Self {
        Self { write_error_policy }
    }
}
