//! Error types for bulk insert result handling.
//!
//! Write errors reported by the server are data, not failures of this crate;
//! the error type here covers replies and index maps that cannot be
//! interpreted.

mod insert_result_error;

pub use insert_result_error::InsertResultError;
