//! World construction errors.
//!
//! Errors raised while turning a room layout into the sparse tile grid.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors that occur while building the world grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Two rooms were placed on the same position.
    #[error("Position {position} already holds a room")]
    DuplicateTile {
        /// The position that was assigned twice.
        position: Position,
    },

    /// The layout contains no starting room.
    #[error("Layout has no starting room")]
    MissingStart,

    /// The layout contains more than one starting room.
    #[error("Layout has more than one starting room: {first} and {second}")]
    MultipleStarts {
        /// Starting room found first.
        first: Position,
        /// Additional starting room.
        second: Position,
    },
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateTile { .. } => "WORLD_DUPLICATE_TILE",
            Self::MissingStart => "WORLD_MISSING_START",
            Self::MultipleStarts { .. } => "WORLD_MULTIPLE_STARTS",
        }
    }
}
