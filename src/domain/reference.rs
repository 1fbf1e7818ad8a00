// src/domain/reference.rs
//
// Typed id <-> label reference data. Loaded from lookup tables and
// treated as read-only by the core; a UI can render entries directly
// and hand back the selected id.

use serde::{Deserialize, Serialize};

/// One entry of a reference set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: i64,
    pub label: String,
}

/// An ordered, read-only id -> label reference set
/// (partner types, product types, material types).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    pub fn new(entries: Vec<LookupEntry>) -> Self {
        Self { entries }
    }

    /// Entries in their load order
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    /// Label for an id, if the id belongs to the set
    pub fn label_of(&self, id: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.as_str())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
