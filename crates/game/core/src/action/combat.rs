use rand::seq::SliceRandom;

use crate::action::{ActionContext, ActionTransition, MoveAction, MoveError};
use crate::error::{ErrorSeverity, GameError};
use crate::message::GameMessage;
use crate::state::{GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("player at {position} is not in the combat room {room}")]
    NotInRoom { room: Position, position: Position },

    #[error("no room at {room}")]
    MissingRoom { room: Position },

    #[error("room {room} holds no enemy")]
    NoEnemy { room: Position },

    #[error("the {enemy} is already dead")]
    EnemyAlreadyDead { enemy: &'static str },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInRoom { .. } | Self::NoEnemy { .. } | Self::EnemyAlreadyDead { .. } => {
                ErrorSeverity::Validation
            }
            Self::MissingRoom { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInRoom { .. } => "ATTACK_NOT_IN_ROOM",
            Self::MissingRoom { .. } => "ATTACK_MISSING_ROOM",
            Self::NoEnemy { .. } => "ATTACK_NO_ENEMY",
            Self::EnemyAlreadyDead { .. } => "ATTACK_ENEMY_DEAD",
        }
    }
}

/// Strikes the enemy of the room at `room` with the player's best weapon.
///
/// The enemy's counter-attack is not part of this action: it is the room's
/// entry effect, which the engine re-applies after every action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub room: Position,
}

impl AttackAction {
    pub fn new(room: Position) -> Self {
        Self { room }
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;

    fn pre_validate(&self, state: &GameState, _ctx: &ActionContext<'_>) -> Result<(), Self::Error> {
        let position = state.player.position;
        if position != self.room {
            return Err(AttackError::NotInRoom {
                room: self.room,
                position,
            });
        }

        let enemy = state
            .world
            .tile_at(self.room)
            .ok_or(AttackError::MissingRoom { room: self.room })?
            .enemy()
            .ok_or(AttackError::NoEnemy { room: self.room })?;

        if enemy.is_alive() {
            Ok(())
        } else {
            Err(AttackError::EnemyAlreadyDead {
                enemy: enemy.name(),
            })
        }
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let (weapon, damage) = state.player.attack_profile(ctx.config());
        let enemy = state
            .world
            .tile_at_mut(self.room)
            .ok_or(AttackError::MissingRoom { room: self.room })?
            .enemy_mut()
            .ok_or(AttackError::NoEnemy { room: self.room })?;

        enemy.take_damage(damage);
        tracing::debug!(
            weapon,
            damage,
            enemy = enemy.name(),
            enemy_hp = enemy.hp(),
            "player attacks"
        );

        ctx.emit(GameMessage::PlayerAttacks {
            weapon,
            enemy: enemy.name(),
        });
        if enemy.is_alive() {
            ctx.emit(GameMessage::EnemyHp {
                enemy: enemy.name(),
                hp: enemy.display_hp(),
            });
        } else {
            ctx.emit(GameMessage::EnemyKilled {
                enemy: enemy.name(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FleeError {
    #[error("player at {position} is not in the room {room} being fled")]
    NotInRoom { room: Position, position: Position },

    #[error("no room at {room}")]
    MissingRoom { room: Position },

    #[error("no way out of {room}")]
    NoEscape { room: Position },

    #[error(transparent)]
    Move(#[from] MoveError),
}

impl GameError for FleeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInRoom { .. } => ErrorSeverity::Validation,
            Self::NoEscape { .. } => ErrorSeverity::Recoverable,
            Self::MissingRoom { .. } => ErrorSeverity::Internal,
            Self::Move(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInRoom { .. } => "FLEE_NOT_IN_ROOM",
            Self::MissingRoom { .. } => "FLEE_MISSING_ROOM",
            Self::NoEscape { .. } => "FLEE_NO_ESCAPE",
            Self::Move(error) => error.error_code(),
        }
    }
}

/// Leaves a combat room through a randomly chosen neighbouring room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleeAction {
    pub room: Position,
}

impl FleeAction {
    pub fn new(room: Position) -> Self {
        Self { room }
    }
}

impl ActionTransition for FleeAction {
    type Error = FleeError;

    fn pre_validate(&self, state: &GameState, _ctx: &ActionContext<'_>) -> Result<(), Self::Error> {
        let position = state.player.position;
        if position != self.room {
            return Err(FleeError::NotInRoom {
                room: self.room,
                position,
            });
        }

        let tile = state
            .world
            .tile_at(self.room)
            .ok_or(FleeError::MissingRoom { room: self.room })?;
        if tile.open_directions(&state.world).is_empty() {
            return Err(FleeError::NoEscape { room: self.room });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let directions = state
            .world
            .tile_at(self.room)
            .ok_or(FleeError::MissingRoom { room: self.room })?
            .open_directions(&state.world);
        let direction = *directions
            .choose(ctx.rng())
            .ok_or(FleeError::NoEscape { room: self.room })?;

        tracing::debug!(%direction, room = %self.room, "player flees");
        ctx.emit(GameMessage::Fled { direction });

        let step = MoveAction::new(direction);
        step.pre_validate(state, ctx)?;
        step.apply(state, ctx)?;
        step.post_validate(state, ctx)?;
        Ok(())
    }
}
