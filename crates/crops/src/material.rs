use serde::{Deserialize, Serialize};

use farmhand_core::{MaterialId, ValueObject};

/// Inventory material attached to a crop (seed lot, growing medium, ...).
///
/// Opaque to the crop aggregate: stored as-is, never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryMaterial {
    uid: MaterialId,
    name: String,
}

impl InventoryMaterial {
    pub fn new(uid: MaterialId, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
        }
    }

    pub fn uid(&self) -> MaterialId {
        self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for InventoryMaterial {}
