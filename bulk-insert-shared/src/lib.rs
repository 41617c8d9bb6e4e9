//! # Bulk Insert Shared
//!
//! This crate defines the data structures shared between the code that sends
//! batched inserts to the server and the code that interprets the replies.
//! It includes server replies, the base result carrying them, the index map
//! produced by batch splitting, and the normalized write error record.

pub mod fields;
pub mod types;

pub use types::{BaseResult, Document, IndexMap, Reply, WriteErrorRecord};
