//! The player's hit points, inventory and location.

use super::{Item, Position, WeaponKind};
use crate::config::GameConfig;

/// Mutable player record owned by the game state for the whole session.
///
/// `hp` may go negative internally; [`Player::is_alive`] is the only
/// liveness check and uses the literal `hp > 0` comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub hp: i32,
    pub max_hp: i32,
    pub inventory: Vec<Item>,
    pub position: Position,
    pub victory: bool,
}

impl Player {
    /// Creates a player at `position` with the starting kit (gold and a rock).
    pub fn new(position: Position, config: &GameConfig) -> Self {
        Self {
            hp: config.starting_hp,
            max_hp: config.max_hp,
            inventory: vec![
                Item::gold(GameConfig::STARTING_GOLD),
                Item::Weapon(WeaponKind::Rock),
            ],
            position,
            victory: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn has_item(&self, item: &Item) -> bool {
        self.inventory.contains(item)
    }

    /// Removes the first matching item. Returns false if none was carried.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.inventory.iter().position(|carried| carried == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Consumes one potion if the player carries any.
    pub fn take_potion(&mut self) -> bool {
        self.remove_item(&Item::Potion)
    }

    /// Restores up to `amount` hit points without exceeding `max_hp`.
    ///
    /// Returns the number of hit points actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = self.hp.saturating_add(amount).min(self.max_hp).max(self.hp);
        let restored = healed - self.hp;
        self.hp = healed;
        restored
    }

    /// Strongest weapon carried, if any.
    pub fn best_weapon(&self) -> Option<WeaponKind> {
        self.inventory
            .iter()
            .filter_map(Item::weapon)
            .max_by_key(|weapon| weapon.damage())
    }

    /// Name and damage of whatever the player fights with.
    pub fn attack_profile(&self, config: &GameConfig) -> (&'static str, i32) {
        match self.best_weapon() {
            Some(weapon) => (weapon.into(), weapon.damage()),
            None => ("your fists", config.unarmed_damage),
        }
    }

    pub fn gold(&self) -> u32 {
        self.inventory
            .iter()
            .map(|item| match item {
                Item::Gold { amount } => *amount,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Position::ORIGIN, &GameConfig::default())
    }

    #[test]
    fn starts_with_gold_and_rock() {
        let player = player();
        assert_eq!(player.hp, GameConfig::DEFAULT_STARTING_HP);
        assert_eq!(player.gold(), 15);
        assert_eq!(player.best_weapon(), Some(WeaponKind::Rock));
        assert!(!player.victory);
    }

    #[test]
    fn best_weapon_prefers_highest_damage() {
        let mut player = player();
        player.add_item(Item::Weapon(WeaponKind::Dagger));
        assert_eq!(player.best_weapon(), Some(WeaponKind::Dagger));
        assert_eq!(player.attack_profile(&GameConfig::default()), ("Dagger", 10));
    }

    #[test]
    fn unarmed_player_uses_configured_damage() {
        let mut player = player();
        player.inventory.clear();
        let config = GameConfig {
            unarmed_damage: 3,
            ..GameConfig::default()
        };
        assert_eq!(player.attack_profile(&config), ("your fists", 3));
    }

    #[test]
    fn heal_caps_at_max_hp() {
        let mut player = player();
        player.hp = 90;
        assert_eq!(player.heal(25), 10);
        assert_eq!(player.hp, 100);
        assert_eq!(player.heal(25), 0);
    }

    #[test]
    fn huge_heal_saturates_at_max_hp() {
        let mut player = player();
        player.hp = 40;
        assert_eq!(player.heal(i32::MAX), 60);
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn take_potion_consumes_exactly_one() {
        let mut player = player();
        assert!(!player.take_potion());
        player.add_item(Item::Potion);
        player.add_item(Item::Potion);
        assert!(player.take_potion());
        assert!(player.has_item(&Item::Potion));
        assert!(player.take_potion());
        assert!(!player.has_item(&Item::Potion));
    }

    #[test]
    fn liveness_uses_strict_comparison() {
        let mut player = player();
        player.hp = 0;
        assert!(!player.is_alive());
        player.hp = -4;
        assert!(!player.is_alive());
        player.hp = 1;
        assert!(player.is_alive());
    }
}
