//! Persistence abstractions used at the export boundary.
//!
//! Storing a compiled script is the caller's concern; this module only
//! fixes the record shape and ships an in-memory implementation so tests
//! and offline flows need no database.

use thiserror::Error;

use mount_collect::{MountType, MountingRequirements};

use crate::GeometryScript;

/// One stored compile result.
#[derive(Debug, Clone, PartialEq)]
pub struct MountRecord {
    /// Product name the script was generated for.
    pub product_name: String,
    /// Mounting style chosen for this compile.
    pub mount_type: MountType,
    /// The full requirements record, kept for re-compiles.
    pub requirements: MountingRequirements,
    /// The rendered script.
    pub script: GeometryScript,
}

/// Minimal sink trait accepting compiled scripts.
///
/// # Examples
/// ```
/// use mount_compile::sink::{InMemoryScriptStore, ScriptSink};
/// let store = InMemoryScriptStore::default();
/// assert!(store.get(0).is_err());
/// ```
pub trait ScriptSink {
    /// Stores a record, returning its identifier.
    fn store(&mut self, record: MountRecord) -> u32;

    /// Retrieves a previously stored record.
    fn get(&self, id: u32) -> Result<&MountRecord, SinkError>;
}

/// Error raised when sink operations fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkError {
    /// No record exists under the identifier.
    #[error("no stored script with id {id}")]
    NotFound {
        /// The missing identifier.
        id: u32,
    },
}

/// In-memory sink intended for tests and offline use.
///
/// Identifiers are assigned sequentially from zero.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScriptStore {
    records: Vec<MountRecord>,
}

impl ScriptSink for InMemoryScriptStore {
    fn store(&mut self, record: MountRecord) -> u32 {
        self.records.push(record);
        (self.records.len() - 1) as u32
    }

    fn get(&self, id: u32) -> Result<&MountRecord, SinkError> {
        self.records
            .get(id as usize)
            .ok_or(SinkError::NotFound { id })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mount_collect::Orientation;

    fn record(name: &str) -> MountRecord {
        MountRecord {
            product_name: name.into(),
            mount_type: MountType::Desktop,
            requirements: MountingRequirements {
                mount_type: MountType::Desktop,
                cooling: None,
                orientation: Orientation::Horizontal,
                clearance_mm: 0.0,
                accessories: None,
            },
            script: GeometryScript("$fn = 50;\n".into()),
        }
    }

    #[test]
    fn test_store_assigns_sequential_ids() {
        let mut store = InMemoryScriptStore::default();
        assert_eq!(store.store(record("a")), 0);
        assert_eq!(store.store(record("b")), 1);
        assert_eq!(store.get(1).unwrap().product_name, "b");
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let store = InMemoryScriptStore::default();
        assert_eq!(store.get(7).unwrap_err(), SinkError::NotFound { id: 7 });
    }
}
