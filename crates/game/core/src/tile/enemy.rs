use super::narration;
use crate::message::GameMessage;
use crate::state::{Enemy, EnemyKind, Player};

/// Room guarded by one enemy, which stays in place once killed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyRoom {
    enemy: Enemy,
}

impl EnemyRoom {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            enemy: Enemy::new(kind),
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub(crate) fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }

    pub(crate) fn intro_text(&self) -> &'static str {
        match (self.enemy.kind(), self.enemy.is_alive()) {
            (EnemyKind::WildDog, true) => narration::WILD_DOG_ALIVE,
            (EnemyKind::WildDog, false) => narration::WILD_DOG_DEAD,
            (EnemyKind::GiantLizard, true) => narration::GIANT_LIZARD_ALIVE,
            (EnemyKind::GiantLizard, false) => narration::GIANT_LIZARD_DEAD,
            (EnemyKind::Ogre, true) => narration::OGRE_ALIVE,
            (EnemyKind::Ogre, false) => narration::OGRE_DEAD,
        }
    }

    /// A living enemy strikes every time this room becomes the current tile.
    pub(crate) fn modify_player(&self, player: &mut Player, messages: &mut Vec<GameMessage>) {
        if self.enemy.is_alive() {
            player.hp = player.hp.saturating_sub(self.enemy.damage());
            tracing::debug!(
                enemy = self.enemy.name(),
                damage = self.enemy.damage(),
                hp = player.hp,
                "enemy strikes player"
            );
            messages.push(GameMessage::EnemyStrikes {
                enemy: self.enemy.name(),
                damage: self.enemy.damage(),
            });
        }
        if !player.is_alive() {
            messages.push(GameMessage::PlayerDied);
        }
    }
}
