//! Error types for the rules engine.

use ntp_core::{CoreError, ItemId};

use crate::dice::ParseError;

/// Errors that can occur during rules operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// Dice notation could not be parsed. No roll was made.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A weapon ID was not found on the record.
    #[error("weapon {0} not found")]
    WeaponNotFound(ItemId),

    /// The record rejected an edit.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for rules operations.
pub type MechResult<T> = Result<T, MechError>;
