//! Deterministic cave-crawl rules shared by every frontend.
//!
//! `cave-core` defines the canonical rules (rooms, actions, entry effects and
//! the turn dispatcher) and exposes pure APIs that never touch the terminal.
//! All state mutation flows through [`engine::GameEngine`], and every piece of
//! text a frontend shows is produced as a [`GameMessage`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod message;
pub mod state;
pub mod tile;

pub use action::{
    Action, ActionContext, ActionKind, ActionTransition, AttackAction, AttackError,
    CardinalDirection, DisplayInventoryAction, FleeAction, FleeError, MoveAction, MoveError,
    UsePotionAction,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, GameStatus, TransitionPhase, TransitionPhaseError, TurnReport,
};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use message::GameMessage;
pub use state::{
    Enemy, EnemyKind, GameState, Item, Player, Position, WeaponKind, World, WorldError,
};
pub use tile::{EnemyRoom, LootRoom, RoomKind, Tile, TileKind, TrapKind, TrapRoom};
