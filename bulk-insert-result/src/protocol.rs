//! Selection of the insert result interpreter for a server.

use bulk_insert_shared::{BaseResult, IndexMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InsertResultConfig;
use crate::interfaces::InsertResult;
use crate::legacy::LegacyInsertResult;
use crate::modern::ModernInsertResult;

/// First wire version whose servers accept write commands.
pub const WRITE_COMMAND_WIRE_VERSION: i32 = 2;

/// The insert protocol a server speaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolEra {
    /// One write-command reply per sub-batch, with a `writeErrors` array.
    WriteCommand,
    /// One reply per document, with `err` and `code` fields.
    Legacy,
}

impl ProtocolEra {
    /// Pick the protocol from the server's advertised maximum wire version.
    pub fn from_max_wire_version(max_wire_version: i32) -> Self {
        if max_wire_version >= WRITE_COMMAND_WIRE_VERSION {
            Self::WriteCommand
        } else {
            Self::Legacy
        }
    }
}

/// Build the insert result interpreter for a protocol era.
///
/// # Example
///
/// ```
/// use bulk_insert_result::{insert_result_for, InsertResult, InsertResultConfig, ProtocolEra};
/// use bulk_insert_shared::{BaseResult, IndexMap, Reply};
/// use serde_json::json;
///
/// let base = BaseResult::new(vec![
///     Reply::from_value(json!({ "ok": 1 })),
///     Reply::from_value(json!({ "ok": 1 })),
/// ]);
/// let index_map = IndexMap::identity(2);
///
/// let era = ProtocolEra::from_max_wire_version(0);
/// let result = insert_result_for(era, &base, &index_map, InsertResultConfig::default());
/// assert_eq!(result.inserted_count(), 2);
/// ```
pub fn insert_result_for<'a>(
    era: ProtocolEra,
    base: &'a BaseResult,
    index_map: &'a IndexMap,
    config: InsertResultConfig,
) -> Box<dyn InsertResult + 'a> {
    debug!(era = ?era, replies = base.replies().len(), "Selecting insert result interpreter");
    match era {
        ProtocolEra::WriteCommand => {
            Box::new(ModernInsertResult::with_config(base, index_map, config))
        }
        ProtocolEra::Legacy => Box::new(LegacyInsertResult::new(base, index_map)),
    }
}
