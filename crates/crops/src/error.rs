//! Crop failure taxonomy.

use thiserror::Error;

use farmhand_core::DomainError;

/// Failures surfaced by crop operations.
///
/// Every error is terminal for the attempted operation; operations fail
/// before touching state, so a caller holding an `Err` still holds the
/// unmodified aggregate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CropError {
    /// The supplied area reference carries the nil identifier.
    #[error("invalid area: identifier must not be nil")]
    InvalidArea,

    /// The crop type is outside the closed variant set.
    #[error("invalid crop type")]
    InvalidCropType,

    /// The container type is outside the closed variant set.
    #[error("invalid container type")]
    InvalidContainerType,

    /// Note content must be non-empty.
    #[error("invalid note content: must not be empty")]
    InvalidNoteContent,

    /// No note with the given identifier exists on this crop.
    #[error("note not found")]
    NoteNotFound,

    /// Pass-through failure from the unique-identifier source.
    #[error(transparent)]
    Id(#[from] DomainError),
}
