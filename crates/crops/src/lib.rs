//! `farmhand-crops` — the Crop aggregate.
//!
//! A crop is a batch of plants seeded into a growing area and tracked through
//! its lifecycle: growth stage, container, attached inventory material, and
//! free-form notes. All mutation goes through the aggregate's own operations,
//! which enforce the invariants; collaborators (areas, inventory) are consumed
//! as values and never validated beyond what the crop itself needs.

pub mod area;
pub mod crop;
pub mod error;
pub mod material;

pub use area::Area;
pub use crop::{Crop, CropContainer, CropContainerType, CropNote, CropType};
pub use error::CropError;
pub use material::InventoryMaterial;
