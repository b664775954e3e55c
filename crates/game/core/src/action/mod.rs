//! Player actions offered on the per-turn menu.
//!
//! An [`Action`] is a value object rebuilt from the current room every turn:
//! a hotkey, a display name and an [`ActionKind`] carrying the typed payload
//! (which direction, which room's enemy). Each payload type implements
//! [`ActionTransition`], and the engine dispatches over the kind.
pub mod combat;
pub mod inventory;
pub mod movement;
pub mod transition;

use std::fmt;

pub use combat::{AttackAction, AttackError, FleeAction, FleeError};
pub use inventory::{DisplayInventoryAction, UsePotionAction};
pub use movement::{CardinalDirection, MoveAction, MoveError};
pub use transition::{ActionContext, ActionTransition};

use crate::state::Position;

/// Hotkeys for the actions that are not movement.
pub mod hotkeys {
    pub const DISPLAY_INVENTORY: char = 'i';
    pub const USE_POTION: char = 'q';
    pub const ATTACK: char = 'x';
    pub const FLEE: char = 'f';
}

/// A selectable, described operation available on the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub hotkey: char,
    pub name: &'static str,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            hotkey: kind.hotkey(),
            name: kind.name(),
            kind,
        }
    }

    pub fn movement(direction: CardinalDirection) -> Self {
        Self::new(ActionKind::Move(MoveAction::new(direction)))
    }

    pub fn display_inventory() -> Self {
        Self::new(ActionKind::DisplayInventory(DisplayInventoryAction))
    }

    pub fn use_potion() -> Self {
        Self::new(ActionKind::UsePotion(UsePotionAction))
    }

    /// Attack the enemy living in the room at `room`.
    pub fn attack(room: Position) -> Self {
        Self::new(ActionKind::Attack(AttackAction::new(room)))
    }

    /// Flee the combat room at `room`.
    pub fn flee(room: Position) -> Self {
        Self::new(ActionKind::Flee(FleeAction::new(room)))
    }

    /// Menu line, e.g. `"x: Attack"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hotkey, self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Move(MoveAction),
    DisplayInventory(DisplayInventoryAction),
    UsePotion(UsePotionAction),
    Attack(AttackAction),
    Flee(FleeAction),
}

impl ActionKind {
    pub fn hotkey(&self) -> char {
        match self {
            Self::Move(action) => action.direction.hotkey(),
            Self::DisplayInventory(_) => hotkeys::DISPLAY_INVENTORY,
            Self::UsePotion(_) => hotkeys::USE_POTION,
            Self::Attack(_) => hotkeys::ATTACK,
            Self::Flee(_) => hotkeys::FLEE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Move(action) => action.direction.label(),
            Self::DisplayInventory(_) => "Display inventory",
            Self::UsePotion(_) => "Use potion",
            Self::Attack(_) => "Attack",
            Self::Flee(_) => "Flee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_renders_hotkey_and_name() {
        assert_eq!(Action::movement(CardinalDirection::North).describe(), "w: Move north");
        assert_eq!(Action::attack(Position::ORIGIN).describe(), "x: Attack");
        assert_eq!(Action::flee(Position::ORIGIN).describe(), "f: Flee");
        assert_eq!(Action::display_inventory().describe(), "i: Display inventory");
        assert_eq!(Action::use_potion().describe(), "q: Use potion");
    }

    #[test]
    fn hotkey_and_name_follow_the_kind() {
        let action = Action::new(ActionKind::Attack(AttackAction::new(Position::new(2, 3))));
        assert_eq!(action.hotkey, hotkeys::ATTACK);
        assert_eq!(action.name, "Attack");
    }
}
