//! Interface definitions for insert result interpretation.
//!
//! This module defines the `InsertResult` trait implemented once per server
//! protocol era, so callers can work with either behind one interface.

mod insert_result;

pub use insert_result::InsertResult;
