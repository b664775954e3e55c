/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Hit points the player starts the game with.
    pub starting_hp: i32,
    /// Upper bound for healing. Damage is never clamped against it.
    pub max_hp: i32,
    /// Hit points restored by drinking one potion.
    pub potion_heal: i32,
    /// Damage dealt when the player carries no weapon.
    pub unarmed_damage: i32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HP: i32 = 100;
    pub const DEFAULT_MAX_HP: i32 = 100;
    pub const DEFAULT_POTION_HEAL: i32 = 25;
    pub const DEFAULT_UNARMED_DAMAGE: i32 = 1;

    /// Gold carried at the start of a game.
    pub const STARTING_GOLD: u32 = 15;

    pub fn new() -> Self {
        Self {
            starting_hp: Self::DEFAULT_STARTING_HP,
            max_hp: Self::DEFAULT_MAX_HP,
            potion_heal: Self::DEFAULT_POTION_HEAL,
            unarmed_damage: Self::DEFAULT_UNARMED_DAMAGE,
        }
    }

    pub fn with_starting_hp(mut self, starting_hp: i32) -> Self {
        self.starting_hp = starting_hp;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
