//! # Bulk Insert Result
//!
//! This crate turns the replies of a batched insert into one outcome: how many
//! documents were inserted and which documents failed, by their position in
//! the caller's original request. It supports both the write-command protocol
//! (one reply per sub-batch) and the legacy protocol (one reply per document)
//! behind the `InsertResult` trait.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod legacy;
pub mod modern;
mod normalize;
pub mod protocol;
pub mod types;

pub use config::{InsertResultConfig, WriteErrorPolicy};
pub use errors::InsertResultError;
pub use interfaces::InsertResult;
pub use legacy::LegacyInsertResult;
pub use modern::ModernInsertResult;
pub use protocol::{ProtocolEra, WRITE_COMMAND_WIRE_VERSION, insert_result_for};
pub use types::BulkInsertSummary;
