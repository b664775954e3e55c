use rand::RngCore;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::message::GameMessage;
use crate::state::GameState;

/// Per-invocation context: tunables, the session RNG and the message sink.
pub struct ActionContext<'a> {
    config: &'a GameConfig,
    rng: &'a mut dyn RngCore,
    messages: Vec<GameMessage>,
}

impl<'a> ActionContext<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a mut dyn RngCore) -> Self {
        Self {
            config,
            rng,
            messages: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        self.config
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    pub fn emit(&mut self, message: GameMessage) {
        self.messages.push(message);
    }

    pub fn into_messages(self) -> Vec<GameMessage> {
        self.messages
    }
}

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. Validation hooks
/// get read-only access and must stay side-effect free.
pub trait ActionTransition {
    type Error: GameError;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &GameState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations should
    /// assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &GameState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
