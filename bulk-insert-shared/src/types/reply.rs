//! Server reply types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A response document as returned by the server.
pub type Document = Map<String, Value>;

/// One server response unit.
///
/// A write-command reply answers one transmitted sub-batch; a legacy reply
/// answers one transmitted document. Either way the interesting fields live in
/// the first document, the *primary* document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    pub documents: Vec<Document>,
}

impl Reply {
    /// Create a reply from its response documents.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Create a reply carrying a single primary document.
    ///
    /// # Example
    ///
    /// ```
    /// use bulk_insert_shared::Reply;
    /// use serde_json::json;
    ///
    /// let reply = Reply::from_value(json!({ "ok": 1, "n": 3 }));
    /// assert_eq!(reply.field("n"), Some(&json!(3)));
    /// ```
    ///
    /// Values other than JSON objects produce a reply with no documents.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(document) => Self::new(vec![document]),
            _ => Self::default(),
        }
    }

    /// The first document of the reply, if any.
    pub fn primary(&self) -> Option<&Document> {
        self.documents.first()
    }

    /// Look up a field of the primary document.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.primary().and_then(|document| document.get(name))
    }
}

impl From<Document> for Reply {
    fn from(document: Document) -> Self {
        Self::new(vec![document])
    }
}
