use serde::{Deserialize, Serialize};

use farmhand_core::{AreaId, ValueObject};

/// Growing area a crop batch occupies.
///
/// Areas are owned by a separate part of the system; the crop aggregate only
/// needs a reference that exposes an identifier it can check against the nil
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    uid: AreaId,
    name: String,
}

impl Area {
    pub fn new(uid: AreaId, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
        }
    }

    pub fn uid(&self) -> AreaId {
        self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for Area {}
