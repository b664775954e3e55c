//! Cave layout loader.
//!
//! A layout file lists the cave row by row, top to bottom. The row index is
//! `y` and the column index is `x`, so north is the previous row. `None`
//! marks solid rock:
//!
//! ```ron
//! #![enable(implicit_some)]
//! (
//!     rows: [
//!         [None,         LeaveCave, None],
//!         [StartingRoom, WildDog,   Trap],
//!     ],
//! )
//! ```

use std::path::Path;

use cave_core::{Position, RoomKind};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_CAVE: &str = include_str!("../../data/maps/cave.ron");

/// Layout structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct MapDataRon {
    rows: Vec<Vec<Option<RoomKind>>>,
}

/// Loader for cave layouts from RON files.
///
/// The loader only decodes placement. Grid rules (one start, no duplicates)
/// are enforced by `World::from_rooms`.
pub struct MapLoader;

impl MapLoader {
    /// Load a layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(Position, RoomKind)>> {
        let content = read_file(path)?;
        let rooms = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), rooms = rooms.len(), "loaded cave layout");
        Ok(rooms)
    }

    /// The cave compiled into the crate.
    pub fn default_cave() -> LoadResult<Vec<(Position, RoomKind)>> {
        Self::parse(DEFAULT_CAVE)
    }

    /// Decode a RON layout into `(position, room)` pairs in row-major order.
    pub fn parse(content: &str) -> LoadResult<Vec<(Position, RoomKind)>> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let mut rooms = Vec::new();
        for (y, row) in data.rows.iter().enumerate() {
            for (x, room) in row.iter().enumerate() {
                if let Some(room) = room {
                    rooms.push((Position::new(to_coord(x)?, to_coord(y)?), *room));
                }
            }
        }

        Ok(rooms)
    }
}

fn to_coord(index: usize) -> LoadResult<i32> {
    i32::try_from(index).map_err(|_| anyhow::anyhow!("map index {} out of range", index))
}
