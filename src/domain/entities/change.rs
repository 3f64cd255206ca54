use std::collections::BTreeMap;

use crate::domain::entities::grid::{CellId, Grid};

/// Cell -> accent-folded value before stripping.
pub type ChangeRecord = BTreeMap<CellId, String>;

/// Cell -> raw value as loaded.
pub type OriginalRecord = BTreeMap<CellId, String>;

/// Result of one normalization pass. Built once, never merged with a
/// previous pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub grid: Grid,
    pub changed: ChangeRecord,
    pub original: OriginalRecord,
}

impl Normalized {
    #[allow(dead_code)]
    pub fn is_modified(&self, id: CellId) -> bool {
        self.changed.contains_key(&id)
    }

    #[allow(dead_code)]
    pub fn original_of(&self, id: CellId) -> Option<&str> {
        self.original.get(&id).map(String::as_str)
    }

    pub fn modified_count(&self) -> usize {
        self.changed.len()
    }
}
