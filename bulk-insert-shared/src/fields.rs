//! Field names used in server reply documents, and helpers for reading them.

use serde_json::Value;

/// Acknowledgment/status field of a reply document.
pub const OK: &str = "ok";

/// Per-document error message reported by the legacy protocol.
pub const ERROR: &str = "err";

/// Error message of a single write error entry.
pub const ERROR_MSG: &str = "errmsg";

/// Numeric error code.
pub const ERROR_CODE: &str = "code";

/// Number of documents written, as reported by the server.
pub const WRITTEN: &str = "n";

/// Position of a failing document within its sub-batch.
pub const INDEX: &str = "index";

/// Array of per-document errors carried by a write-command reply.
pub const WRITE_ERRORS: &str = "writeErrors";

/// The value the server places in the `ok` field when a request succeeded.
pub const OK_SENTINEL: i64 = 1;

/// Whether a field value counts as set.
///
/// Servers send explicit `null` or `false` for cleared fields, so presence
/// alone is not enough.
pub fn is_truthy(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null) | Some(Value::Bool(false)))
}

/// Whether a status value equals [`OK_SENTINEL`].
///
/// The sentinel arrives as either an integer or a double depending on the
/// server version.
pub fn is_ok_sentinel(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i == OK_SENTINEL,
            None => n.as_f64() == Some(OK_SENTINEL as f64),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(Some(&json!("E11000 duplicate key"))));
        assert!(is_truthy(Some(&json!(0))));
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
    }

    #[test]
    fn test_is_ok_sentinel_accepts_integer_and_double() {
        assert!(is_ok_sentinel(Some(&json!(1))));
        assert!(is_ok_sentinel(Some(&json!(1.0))));
        assert!(!is_ok_sentinel(Some(&json!(0))));
        assert!(!is_ok_sentinel(Some(&json!(0.0))));
        assert!(!is_ok_sentinel(Some(&json!("1"))));
        assert!(!is_ok_sentinel(None));
    }
}
