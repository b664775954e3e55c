//! Typed turn messages handed to the frontend.
//!
//! The core never prints. Every line of text the player sees is one of
//! these values, rendered through its `Display` impl.

use std::borrow::Cow;
use std::fmt;

use crate::action::CardinalDirection;
use crate::state::Item;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameMessage {
    /// Room narration, emitted when a room becomes the current tile by movement.
    Intro(Cow<'static, str>),
    EnemyStrikes {
        enemy: &'static str,
        damage: i32,
    },
    PlayerDied,
    HpRemaining {
        hp: i32,
    },
    ItemFound(Item),
    Inventory(Vec<Item>),
    PotionUsed {
        restored: i32,
        hp: i32,
    },
    NoPotion,
    PlayerAttacks {
        weapon: &'static str,
        enemy: &'static str,
    },
    EnemyKilled {
        enemy: &'static str,
    },
    EnemyHp {
        enemy: &'static str,
        hp: i32,
    },
    Fled {
        direction: CardinalDirection,
    },
}

impl GameMessage {
    /// Messages that describe harm to the player; frontends may highlight them.
    pub fn is_harmful(&self) -> bool {
        matches!(self, Self::EnemyStrikes { .. } | Self::PlayerDied)
    }
}

impl fmt::Display for GameMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro(text) => f.write_str(text),
            Self::EnemyStrikes { enemy, damage } => {
                write!(f, "The {enemy} does {damage} damage.")
            }
            Self::PlayerDied => f.write_str("You have died."),
            Self::HpRemaining { hp } => write!(f, "You have {hp} HP remaining."),
            Self::ItemFound(item) => write!(f, "{} added to your inventory.", item.name()),
            Self::Inventory(items) if items.is_empty() => f.write_str("Your inventory is empty."),
            Self::Inventory(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::PotionUsed { restored, hp } => write!(
                f,
                "You drink the potion and recover {restored} HP. You now have {hp} HP."
            ),
            Self::NoPotion => f.write_str("You don't have any potions."),
            Self::PlayerAttacks { weapon, enemy } => {
                write!(f, "You use {weapon} against the {enemy}!")
            }
            Self::EnemyKilled { enemy } => write!(f, "You killed the {enemy}!"),
            Self::EnemyHp { enemy, hp } => write!(f, "The {enemy}'s HP is {hp}."),
            Self::Fled { direction } => write!(f, "You flee {direction}!"),
        }
    }
}
