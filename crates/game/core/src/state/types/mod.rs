//! Plain data records held by the game state.

mod common;
mod enemy;
mod item;
mod player;

pub use common::Position;
pub use enemy::{Enemy, EnemyKind};
pub use item::{Item, WeaponKind};
pub use player::Player;
