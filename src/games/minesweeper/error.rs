//! Error types for game creation and turns.

use super::types::MAX_DIMENSION;
use derive_more::{Display, Error};

/// Everything that can go wrong while creating a game or making a turn.
///
/// All variants are recoverable by the caller and carry the exact message
/// surfaced to the client. Validation happens before any state is touched,
/// so a returned error never leaves a game half-mutated.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A field dimension was zero.
    #[display("field dimensions must be at least 1×1")]
    EmptyField,
    /// A field dimension exceeded the supported maximum.
    #[display("field dimensions must not exceed {}×{}", MAX_DIMENSION, MAX_DIMENSION)]
    FieldTooLarge,
    /// More mines were requested than the field can hold while keeping one
    /// safe cell.
    #[display("mine count must not exceed {max}")]
    TooManyMines {
        /// Largest allowed mine count for the requested dimensions.
        #[error(not(source))]
        max: u32,
    },
    /// Turn coordinates outside the field.
    #[display("cell coordinates out of bounds")]
    OutOfBounds,
    /// No game exists under the given identifier.
    #[display("game not found")]
    NotFound,
    /// The game already ended in a win or a loss.
    #[display("game already completed")]
    AlreadyCompleted,
    /// The target cell was already opened by an earlier turn.
    #[display("cell already opened")]
    AlreadyOpened,
}
