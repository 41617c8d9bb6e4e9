//! This module defines the core data structures shared across bulk insert handling.
//! It re-exports `Reply`, `BaseResult`, `IndexMap` and `WriteErrorRecord`.

pub mod base_result;
pub mod index_map;
pub mod reply;
pub mod write_error;

pub use base_result::BaseResult;
pub use index_map::IndexMap;
pub use reply::{Document, Reply};
pub use write_error::WriteErrorRecord;
