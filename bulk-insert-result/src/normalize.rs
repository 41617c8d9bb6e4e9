//! Shared write error normalization.
//!
//! Both protocol eras detect failures the same way and must resolve every
//! reported position through the index map before it reaches a caller.

use bulk_insert_shared::fields;
use bulk_insert_shared::{IndexMap, Reply, WriteErrorRecord};
use serde_json::Value;

use crate::errors::InsertResultError;

/// Whether the primary document carries both an error message and an error code.
pub(crate) fn reply_has_write_errors(reply: &Reply) -> bool {
    fields::is_truthy(reply.field(fields::ERROR))
        && fields::is_truthy(reply.field(fields::ERROR_CODE))
}

/// Resolve a transmitted position to the caller's original request position.
pub(crate) fn original_position(
    index_map: &IndexMap,
    transmitted: usize,
) -> Result<usize, InsertResultError> {
    index_map
        .original_position(transmitted)
        .ok_or_else(|| InsertResultError::index_out_of_range(transmitted, index_map.len()))
}

/// An empty error list means no errors.
pub(crate) fn into_optional(errors: Vec<WriteErrorRecord>) -> Option<Vec<WriteErrorRecord>> {
    (!errors.is_empty()).then_some(errors)
}

/// Read an integer field, accepting whole doubles.
pub(crate) fn integer(value: Option<&Value>) -> Option<i64> {
    let Some(Value::Number(number)) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

/// Render an error message field as text.
pub(crate) fn message(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Read the error code of a failing reply or write error entry.
pub(crate) fn error_code(value: Option<&Value>, reply: usize) -> Result<i64, InsertResultError> {
    integer(value)
        .ok_or_else(|| InsertResultError::malformed_reply(reply, "error code is not an integer"))
}
