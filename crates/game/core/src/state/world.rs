//! Sparse grid of rooms.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rand::Rng;

use super::{Position, WorldError};
use crate::tile::{RoomKind, Tile, TileKind};

/// Sparse mapping from position to room, populated once at startup.
///
/// The grid's shape never changes after construction. Rooms themselves keep
/// mutable flags (loot obtained, trap triggered, enemy hp), which is why
/// [`World::tile_at_mut`] exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    tiles: HashMap<Position, Tile>,
    start: Position,
}

impl World {
    /// Builds the grid from a room layout, drawing every trap kind from `rng`.
    pub fn from_rooms<I, R>(rooms: I, rng: &mut R) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = (Position, RoomKind)>,
        R: Rng + ?Sized,
    {
        Self::from_tiles(
            rooms
                .into_iter()
                .map(|(position, room)| Tile::from_room(position, room, &mut *rng))
                .collect::<Vec<_>>(),
        )
    }

    /// Builds the grid from already constructed tiles.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut grid = HashMap::new();
        let mut start: Option<Position> = None;

        for tile in tiles {
            let position = tile.position();
            if matches!(tile.kind(), TileKind::StartingRoom) {
                if let Some(first) = start {
                    return Err(WorldError::MultipleStarts {
                        first,
                        second: position,
                    });
                }
                start = Some(position);
            }

            match grid.entry(position) {
                Entry::Occupied(_) => return Err(WorldError::DuplicateTile { position }),
                Entry::Vacant(slot) => {
                    slot.insert(tile);
                }
            }
        }

        let start = start.ok_or(WorldError::MissingStart)?;
        tracing::debug!(rooms = grid.len(), %start, "world grid built");

        Ok(Self { tiles: grid, start })
    }

    pub fn tile_exists(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    pub fn tile_at_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(&position)
    }

    pub fn starting_position(&self) -> Position {
        self.start
    }

    pub fn room_count(&self) -> usize {
        self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn builds_sparse_grid_and_finds_start() {
        let world = World::from_rooms(
            [
                (Position::new(1, 1), RoomKind::StartingRoom),
                (Position::new(1, 0), RoomKind::LeaveCave),
                (Position::new(2, 1), RoomKind::Trap),
            ],
            &mut rng(),
        )
        .expect("valid layout");

        assert_eq!(world.room_count(), 3);
        assert_eq!(world.starting_position(), Position::new(1, 1));
        assert!(world.tile_exists(Position::new(1, 0)));
        assert!(!world.tile_exists(Position::new(0, 0)));
        assert!(world.tile_at(Position::new(5, 5)).is_none());
    }

    #[test]
    fn rejects_layout_without_start() {
        let result = World::from_rooms([(Position::ORIGIN, RoomKind::EmptyCavePath)], &mut rng());
        assert_eq!(result, Err(WorldError::MissingStart));
    }

    #[test]
    fn rejects_second_start() {
        let result = World::from_rooms(
            [
                (Position::new(0, 0), RoomKind::StartingRoom),
                (Position::new(1, 0), RoomKind::StartingRoom),
            ],
            &mut rng(),
        );
        assert_eq!(
            result,
            Err(WorldError::MultipleStarts {
                first: Position::new(0, 0),
                second: Position::new(1, 0),
            })
        );
    }

    #[test]
    fn rejects_duplicate_positions() {
        let result = World::from_rooms(
            [
                (Position::new(0, 0), RoomKind::StartingRoom),
                (Position::new(0, 1), RoomKind::Ogre),
                (Position::new(0, 1), RoomKind::WildDog),
            ],
            &mut rng(),
        );
        assert_eq!(
            result,
            Err(WorldError::DuplicateTile {
                position: Position::new(0, 1)
            })
        );
    }
}
