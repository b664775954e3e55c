use crate::action::{ActionContext, ActionTransition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no room {direction} of {origin}")]
    NoRoom {
        direction: CardinalDirection,
        origin: Position,
    },

    #[error("player ended up outside the world at {position}")]
    PlayerOutsideWorld { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoRoom { .. } => ErrorSeverity::Recoverable,
            Self::PlayerOutsideWorld { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRoom { .. } => "MOVE_NO_ROOM",
            Self::PlayerOutsideWorld { .. } => "MOVE_OUTSIDE_WORLD",
        }
    }
}

/// Relocates the player to the neighbouring room in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Order in which neighbours are probed when building the move menu.
    pub const ADJACENCY_ORDER: [CardinalDirection; 4] = [
        CardinalDirection::East,
        CardinalDirection::West,
        CardinalDirection::North,
        CardinalDirection::South,
    ];

    /// Grid offset; rows grow southwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    pub const fn step(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }

    pub const fn hotkey(self) -> char {
        match self {
            CardinalDirection::North => 'w',
            CardinalDirection::South => 's',
            CardinalDirection::East => 'd',
            CardinalDirection::West => 'a',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CardinalDirection::North => "Move north",
            CardinalDirection::South => "Move south",
            CardinalDirection::East => "Move east",
            CardinalDirection::West => "Move west",
        }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, state: &GameState, _ctx: &ActionContext<'_>) -> Result<(), Self::Error> {
        let origin = state.player.position;
        if state.world.tile_exists(self.direction.step(origin)) {
            Ok(())
        } else {
            Err(MoveError::NoRoom {
                direction: self.direction,
                origin,
            })
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        _ctx: &mut ActionContext<'_>,
    ) -> Result<(), Self::Error> {
        let destination = self.direction.step(state.player.position);
        tracing::debug!(direction = %self.direction, %destination, "player moves");
        state.player.position = destination;
        Ok(())
    }

    fn post_validate(
        &self,
        state: &GameState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), Self::Error> {
        let position = state.player.position;
        if state.world.tile_exists(position) {
            Ok(())
        } else {
            Err(MoveError::PlayerOutsideWorld { position })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn steps_are_unit_offsets_with_y_growing_south() {
        let origin = Position::new(3, 3);
        assert_eq!(CardinalDirection::North.step(origin), Position::new(3, 2));
        assert_eq!(CardinalDirection::South.step(origin), Position::new(3, 4));
        assert_eq!(CardinalDirection::East.step(origin), Position::new(4, 3));
        assert_eq!(CardinalDirection::West.step(origin), Position::new(2, 3));
    }

    #[test]
    fn hotkeys_are_distinct() {
        let mut keys: Vec<char> = CardinalDirection::iter()
            .map(CardinalDirection::hotkey)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);
        assert_eq!(CardinalDirection::West.to_string(), "west");
    }
}
