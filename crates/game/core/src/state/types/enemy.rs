//! Enemy combat stats.

/// Catalog of monsters that can guard a room.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyKind {
    #[strum(serialize = "Wild Dog")]
    WildDog,
    #[strum(serialize = "Giant Lizard")]
    GiantLizard,
    Ogre,
}

impl EnemyKind {
    /// Hit points a freshly spawned enemy of this kind starts with.
    pub const fn base_hp(self) -> i32 {
        match self {
            Self::WildDog => 10,
            Self::GiantLizard => 20,
            Self::Ogre => 30,
        }
    }

    /// Damage dealt to the player per turn spent in the same room.
    pub const fn damage(self) -> i32 {
        match self {
            Self::WildDog => 2,
            Self::GiantLizard => 7,
            Self::Ogre => 15,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Static combat stat holder owned by exactly one enemy room.
///
/// Enemies are never removed: a dead enemy stays in its room so the
/// narration can describe the corpse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    kind: EnemyKind,
    hp: i32,
    damage: i32,
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            kind,
            hp: kind.base_hp(),
            damage: kind.damage(),
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Raw hit points. May be negative after an overkill blow.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Hit points clamped at zero for display.
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Only the attack action calls this; the amount comes from the attacker.
    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_monster_stats() {
        let dog = Enemy::new(EnemyKind::WildDog);
        assert_eq!((dog.name(), dog.hp(), dog.damage()), ("Wild Dog", 10, 2));

        let lizard = Enemy::new(EnemyKind::GiantLizard);
        assert_eq!((lizard.hp(), lizard.damage()), (20, 7));

        let ogre = Enemy::new(EnemyKind::Ogre);
        assert_eq!((ogre.hp(), ogre.damage()), (30, 15));
        assert_eq!(EnemyKind::Ogre.to_string(), "Ogre");
    }

    #[test]
    fn enemy_at_exactly_zero_hp_is_dead() {
        let mut dog = Enemy::new(EnemyKind::WildDog);
        dog.take_damage(9);
        assert!(dog.is_alive());
        dog.take_damage(1);
        assert_eq!(dog.hp(), 0);
        assert!(!dog.is_alive());
    }

    #[test]
    fn overkill_clamps_only_for_display() {
        let mut dog = Enemy::new(EnemyKind::WildDog);
        dog.take_damage(15);
        assert_eq!(dog.hp(), -5);
        assert_eq!(dog.display_hp(), 0);
        assert!(!dog.is_alive());
    }

    #[test]
    fn huge_blow_does_not_wrap_around() {
        let mut dog = Enemy::new(EnemyKind::WildDog);
        dog.take_damage(15);
        dog.take_damage(i32::MAX);
        assert_eq!(dog.hp(), i32::MIN);
        assert!(!dog.is_alive());
    }
}
