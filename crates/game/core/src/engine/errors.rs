//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, AttackAction, DisplayInventoryAction, FleeAction, MoveAction,
    UsePotionAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("display inventory action failed: {0}")]
    DisplayInventory(TransitionPhaseError<<DisplayInventoryAction as ActionTransition>::Error>),

    #[error("use potion action failed: {0}")]
    UsePotion(TransitionPhaseError<<UsePotionAction as ActionTransition>::Error>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<<AttackAction as ActionTransition>::Error>),

    #[error("flee action failed: {0}")]
    Flee(TransitionPhaseError<<FleeAction as ActionTransition>::Error>),

    #[error("action '{hotkey}' is not available in this room")]
    ActionUnavailable { hotkey: char },

    #[error("the game is over")]
    GameOver,

    #[error("no room at the player's position {position}")]
    MissingTile { position: Position },
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Move(e) => e.error.severity(),
            Self::DisplayInventory(e) => e.error.severity(),
            Self::UsePotion(e) => e.error.severity(),
            Self::Attack(e) => e.error.severity(),
            Self::Flee(e) => e.error.severity(),
            Self::ActionUnavailable { .. } | Self::GameOver => ErrorSeverity::Validation,
            Self::MissingTile { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Move(e) => e.error.error_code(),
            Self::DisplayInventory(e) => e.error.error_code(),
            Self::UsePotion(e) => e.error.error_code(),
            Self::Attack(e) => e.error.error_code(),
            Self::Flee(e) => e.error.error_code(),
            Self::ActionUnavailable { .. } => "ACTION_UNAVAILABLE",
            Self::GameOver => "GAME_OVER",
            Self::MissingTile { .. } => "MISSING_TILE",
        }
    }
}
