//! Authoritative game state representation.
//!
//! This module owns the player record and the world grid. Frontends query
//! this state but mutate it exclusively through the engine.
mod error;
pub mod types;
mod world;

pub use error::WorldError;
pub use types::{Enemy, EnemyKind, Item, Player, Position, WeaponKind};
pub use world::World;

use crate::config::GameConfig;
use crate::engine::GameStatus;

/// Everything that changes while a game is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub world: World,
    pub player: Player,
}

impl GameState {
    /// Places a fresh player on the world's starting room.
    pub fn new(world: World, config: &GameConfig) -> Self {
        let player = Player::new(world.starting_position(), config);
        Self { world, player }
    }

    /// Terminal states are plain flags on the player.
    pub fn status(&self) -> GameStatus {
        if !self.player.is_alive() {
            GameStatus::Defeated
        } else if self.player.victory {
            GameStatus::Victory
        } else {
            GameStatus::InProgress
        }
    }

    /// Room the player is standing in.
    pub fn current_tile(&self) -> Option<&crate::tile::Tile> {
        self.world.tile_at(self.player.position)
    }
}
