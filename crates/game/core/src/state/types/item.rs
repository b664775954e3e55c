//! Item value objects carried in the player's inventory.

use std::fmt;

/// Weapons the player can wield. The strongest one carried is used in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponKind {
    Rock,
    Dagger,
}

impl WeaponKind {
    pub const fn damage(self) -> i32 {
        match self {
            Self::Rock => 5,
            Self::Dagger => 10,
        }
    }

    pub const fn value(self) -> u32 {
        match self {
            Self::Rock => 0,
            Self::Dagger => 10,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Rock => "A fist-sized rock, suitable for bludgeoning.",
            Self::Dagger => "A small dagger with some rust. Somewhat more dangerous than a rock.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    Weapon(WeaponKind),
    Gold { amount: u32 },
    Potion,
}

impl Item {
    pub const fn gold(amount: u32) -> Self {
        Self::Gold { amount }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Weapon(kind) => (*kind).into(),
            Self::Gold { .. } => "Gold",
            Self::Potion => "Potion",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Weapon(kind) => kind.description().to_owned(),
            Self::Gold { amount } => format!("A round coin with {amount} stamped on the front."),
            Self::Potion => "A red potion that restores health.".to_owned(),
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            Self::Weapon(kind) => kind.value(),
            Self::Gold { amount } => *amount,
            Self::Potion => 5,
        }
    }

    pub fn weapon(&self) -> Option<WeaponKind> {
        match self {
            Self::Weapon(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n=====\n{}\nValue: {}",
            self.name(),
            self.description(),
            self.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_describes_its_amount() {
        let gold = Item::gold(5);
        assert_eq!(gold.value(), 5);
        assert!(gold.to_string().contains("A round coin with 5 stamped on the front."));
    }

    #[test]
    fn dagger_outclasses_rock() {
        assert!(WeaponKind::Dagger.damage() > WeaponKind::Rock.damage());
        assert_eq!(Item::Weapon(WeaponKind::Dagger).weapon(), Some(WeaponKind::Dagger));
        assert_eq!(Item::Potion.weapon(), None);
    }
}
