use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmhand_core::{AggregateRoot, CropId, Entity, IdGenerator, NoteId};

use crate::area::Area;
use crate::error::CropError;
use crate::material::InventoryMaterial;

/// Growth stage of a crop batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Seeding,
    Growing,
}

impl CropType {
    pub fn code(&self) -> &'static str {
        match self {
            CropType::Seeding => "seeding",
            CropType::Growing => "growing",
        }
    }
}

/// Kind of container a crop batch is planted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropContainerType {
    /// A tray subdivided into `cells` planting cells.
    Tray { cells: i32 },
    /// A single undivided pot.
    Pot,
}

impl CropContainerType {
    pub fn code(&self) -> &'static str {
        match self {
            CropContainerType::Tray { .. } => "tray",
            CropContainerType::Pot => "pot",
        }
    }
}

/// Container descriptor: how many containers, and of which kind.
///
/// `quantity` is accepted as-is; the observed behavior places no bound on it
/// (zero and negatives included), so none is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropContainer {
    pub quantity: i32,
    pub kind: CropContainerType,
}

impl farmhand_core::ValueObject for CropContainer {}

/// Free-form note attached to a crop.
///
/// Built only through [`Crop::add_new_note`], which is where the non-empty
/// content rule and the "map key equals the note's own uid" invariant are
/// established.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropNote {
    uid: NoteId,
    content: String,
    created_date: DateTime<Utc>,
}

impl CropNote {
    pub fn uid(&self) -> NoteId {
        self.uid
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

impl Entity for CropNote {
    type Id = NoteId;

    fn id(&self) -> &Self::Id {
        &self.uid
    }
}

/// Aggregate root: a batch of plants seeded into an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    uid: CropId,
    batch_id: String,
    initial_area: Area,
    current_areas: Vec<Area>,
    crop_type: Option<CropType>,
    inventory: Option<InventoryMaterial>,
    container: Option<CropContainer>,
    notes: HashMap<NoteId, CropNote>,
    created_date: DateTime<Utc>,
}

impl Crop {
    /// Create a new crop batch seeded into `area`.
    ///
    /// The caller supplies the wall-clock time and the identifier source; the
    /// aggregate never reads ambient clock or randomness itself. Fails with
    /// [`CropError::InvalidArea`] when the area carries the nil identifier,
    /// and propagates identifier-generation failures untouched.
    pub fn create_batch(
        area: Area,
        ids: &dyn IdGenerator,
        seeded_at: DateTime<Utc>,
    ) -> Result<Self, CropError> {
        if area.uid().is_nil() {
            return Err(CropError::InvalidArea);
        }

        let uid = CropId::from_uuid(ids.next_id()?);

        Ok(Self {
            uid,
            batch_id: String::new(),
            initial_area: area.clone(),
            current_areas: vec![area],
            crop_type: None,
            inventory: None,
            container: None,
            notes: HashMap::new(),
            created_date: seeded_at,
        })
    }

    /// Replace the growth stage. Total replacement, no normalization.
    pub fn change_crop_type(&mut self, crop_type: CropType) -> Result<(), CropError> {
        validate_crop_type(crop_type)?;
        self.crop_type = Some(crop_type);
        Ok(())
    }

    /// Replace the container descriptor wholesale.
    ///
    /// The quantity is not validated; only the container kind is gated.
    pub fn change_container(&mut self, container: CropContainer) -> Result<(), CropError> {
        validate_container(&container)?;
        self.container = Some(container);
        Ok(())
    }

    /// Replace the external batch reference. Opaque to this aggregate; no
    /// uniqueness is enforced here.
    pub fn change_batch_id(&mut self, batch_id: impl Into<String>) {
        self.batch_id = batch_id.into();
    }

    /// Attach an inventory material, stored as-is.
    pub fn change_inventory(&mut self, material: InventoryMaterial) {
        self.inventory = Some(material);
    }

    /// Record a move into another area. The area history is append-only; the
    /// initial area stays fixed.
    pub fn move_to_area(&mut self, area: Area) -> Result<(), CropError> {
        if area.uid().is_nil() {
            return Err(CropError::InvalidArea);
        }
        self.current_areas.push(area);
        Ok(())
    }

    /// Attach a note with the given content, timestamped `at`.
    ///
    /// Returns the identifier of the new note so callers can remove it later.
    /// Duplicate content is allowed; empty content is not.
    pub fn add_new_note(
        &mut self,
        content: impl Into<String>,
        ids: &dyn IdGenerator,
        at: DateTime<Utc>,
    ) -> Result<NoteId, CropError> {
        let content = content.into();
        if content.is_empty() {
            return Err(CropError::InvalidNoteContent);
        }

        let uid = NoteId::from_uuid(ids.next_id()?);
        let note = CropNote {
            uid,
            content,
            created_date: at,
        };
        self.notes.insert(uid, note);

        Ok(uid)
    }

    /// Remove the note whose identifier matches the string-encoded `uid`.
    ///
    /// An empty, malformed, or unknown identifier all surface as
    /// [`CropError::NoteNotFound`]; the collection is only touched on a
    /// confirmed match. Keys are unique, so a keyed removal matches at most
    /// one entry.
    pub fn remove_note(&mut self, uid: &str) -> Result<(), CropError> {
        if uid.is_empty() {
            return Err(CropError::NoteNotFound);
        }

        let uid: NoteId = uid.parse().map_err(|_| CropError::NoteNotFound)?;

        if self.notes.remove(&uid).is_none() {
            return Err(CropError::NoteNotFound);
        }

        Ok(())
    }

    /// Whole 24-hour periods elapsed between seeding and `now`, truncating.
    pub fn days_since_seeding(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_date).num_hours() / 24
    }

    pub fn uid(&self) -> CropId {
        self.uid
    }

    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    pub fn initial_area(&self) -> &Area {
        &self.initial_area
    }

    pub fn current_areas(&self) -> &[Area] {
        &self.current_areas
    }

    pub fn crop_type(&self) -> Option<CropType> {
        self.crop_type
    }

    pub fn inventory(&self) -> Option<&InventoryMaterial> {
        self.inventory.as_ref()
    }

    pub fn container(&self) -> Option<CropContainer> {
        self.container
    }

    /// Shared view of the note collection. Mutation goes through
    /// [`Crop::add_new_note`] and [`Crop::remove_note`] only.
    pub fn notes(&self) -> &HashMap<NoteId, CropNote> {
        &self.notes
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

impl AggregateRoot for Crop {
    type Id = CropId;

    fn id(&self) -> &Self::Id {
        &self.uid
    }
}

/// Sole gatekeeper for the crop-type variant set.
///
/// Exhaustive on purpose: adding a variant forces a review of this match, and
/// anything outside the set answers [`CropError::InvalidCropType`].
fn validate_crop_type(crop_type: CropType) -> Result<(), CropError> {
    match crop_type {
        CropType::Seeding | CropType::Growing => Ok(()),
    }
}

/// Sole gatekeeper for the container-type variant set.
fn validate_container(container: &CropContainer) -> Result<(), CropError> {
    match container.kind {
        CropContainerType::Tray { .. } | CropContainerType::Pot => Ok(()),
    }
}
