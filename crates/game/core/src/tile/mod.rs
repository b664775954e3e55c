//! Rooms and their behavior.
//!
//! A [`Tile`] is one room of the cave. Every room kind is a case of the closed
//! [`TileKind`] enum, and the three room operations (narration, entry effect
//! and action menu) dispatch over it:
//!
//! - [`Tile::intro_text`] is pure and may change once a room's flag flips
//!   (loot obtained, trap triggered, enemy killed).
//! - [`Tile::modify_player`] is the entry effect. The engine re-applies it every
//!   time the room becomes, or stays, the player's current tile.
//! - [`Tile::available_actions`] builds the per-turn menu from the room and the
//!   world grid.
mod enemy;
mod loot;
mod narration;
mod trap;

use std::borrow::Cow;

use rand::Rng;

pub use enemy::EnemyRoom;
pub use loot::LootRoom;
pub use trap::{TrapKind, TrapRoom};

use crate::action::{Action, CardinalDirection};
use crate::message::GameMessage;
use crate::state::{Enemy, EnemyKind, Item, Player, Position, WeaponKind, World};

/// Placeable room kinds as they appear in map layouts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum RoomKind {
    StartingRoom,
    EmptyCavePath,
    FindDagger,
    Find5Gold,
    FindPotion,
    WildDog,
    GiantLizard,
    Ogre,
    LeaveCave,
    DeathTrap,
    Trap,
}

/// Variant-specific room state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileKind {
    StartingRoom,
    EmptyCavePath,
    Loot(LootRoom),
    Enemy(EnemyRoom),
    LeaveCave,
    DeathTrap,
    Trap(TrapRoom),
}

/// One room of the cave at a fixed position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    kind: TileKind,
}

impl Tile {
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self { position, kind }
    }

    /// Builds the room for a layout entry. Trap rooms draw their kind from `rng` here.
    pub fn from_room<R: Rng + ?Sized>(position: Position, room: RoomKind, rng: &mut R) -> Self {
        let kind = match room {
            RoomKind::StartingRoom => TileKind::StartingRoom,
            RoomKind::EmptyCavePath => TileKind::EmptyCavePath,
            RoomKind::FindDagger => TileKind::Loot(LootRoom::new(Item::Weapon(WeaponKind::Dagger))),
            RoomKind::Find5Gold => TileKind::Loot(LootRoom::new(Item::gold(5))),
            RoomKind::FindPotion => TileKind::Loot(LootRoom::new(Item::Potion)),
            RoomKind::WildDog => TileKind::Enemy(EnemyRoom::new(EnemyKind::WildDog)),
            RoomKind::GiantLizard => TileKind::Enemy(EnemyRoom::new(EnemyKind::GiantLizard)),
            RoomKind::Ogre => TileKind::Enemy(EnemyRoom::new(EnemyKind::Ogre)),
            RoomKind::LeaveCave => TileKind::LeaveCave,
            RoomKind::DeathTrap => TileKind::DeathTrap,
            RoomKind::Trap => TileKind::Trap(TrapRoom::new(rng)),
        };
        Self::new(position, kind)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// The room's enemy, dead or alive.
    pub fn enemy(&self) -> Option<&Enemy> {
        match &self.kind {
            TileKind::Enemy(room) => Some(room.enemy()),
            _ => None,
        }
    }

    pub(crate) fn enemy_mut(&mut self) -> Option<&mut Enemy> {
        match &mut self.kind {
            TileKind::Enemy(room) => Some(room.enemy_mut()),
            _ => None,
        }
    }

    pub fn intro_text(&self) -> Cow<'static, str> {
        match &self.kind {
            TileKind::StartingRoom => Cow::Borrowed(narration::STARTING_ROOM),
            TileKind::EmptyCavePath => Cow::Borrowed(narration::EMPTY_CAVE_PATH),
            TileKind::Loot(room) => room.intro_text(),
            TileKind::Enemy(room) => Cow::Borrowed(room.intro_text()),
            TileKind::LeaveCave => Cow::Borrowed(narration::LEAVE_CAVE),
            TileKind::DeathTrap => Cow::Borrowed(narration::DEATH_TRAP),
            TileKind::Trap(room) => Cow::Borrowed(room.intro_text()),
        }
    }

    /// Applies this room's entry effect to the player.
    pub fn modify_player(&mut self, player: &mut Player, messages: &mut Vec<GameMessage>) {
        match &mut self.kind {
            TileKind::StartingRoom | TileKind::EmptyCavePath => {}
            TileKind::Loot(room) => room.modify_player(player, messages),
            TileKind::Enemy(room) => room.modify_player(player, messages),
            TileKind::LeaveCave => player.victory = true,
            TileKind::DeathTrap => {
                player.hp = 0;
                messages.push(GameMessage::PlayerDied);
            }
            TileKind::Trap(room) => room.modify_player(player, messages),
        }
    }

    /// Directions with a neighbouring room, probed in east, west, north, south order.
    pub fn open_directions(&self, world: &World) -> Vec<CardinalDirection> {
        CardinalDirection::ADJACENCY_ORDER
            .into_iter()
            .filter(|direction| world.tile_exists(direction.step(self.position)))
            .collect()
    }

    /// One move per neighbouring room.
    pub fn adjacent_moves(&self, world: &World) -> Vec<Action> {
        self.open_directions(world)
            .into_iter()
            .map(Action::movement)
            .collect()
    }

    /// The menu offered while the player stands in this room.
    ///
    /// A living enemy restricts the menu to fleeing or attacking. Once it dies
    /// the room offers only moves; inventory and potions are not re-offered.
    pub fn available_actions(&self, world: &World) -> Vec<Action> {
        if let TileKind::Enemy(room) = &self.kind {
            return if room.enemy().is_alive() {
                vec![Action::flee(self.position), Action::attack(self.position)]
            } else {
                self.adjacent_moves(world)
            };
        }

        let mut actions = self.adjacent_moves(world);
        actions.push(Action::display_inventory());
        actions.push(Action::use_potion());
        actions
    }
}
