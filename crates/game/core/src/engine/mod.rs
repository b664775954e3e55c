//! Turn dispatcher.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One turn
//! is a single synchronous call chain: the frontend asks for the menu, picks an
//! action, and [`GameEngine::execute`] invokes it and re-applies the entry
//! effect of whatever room the player is standing in afterwards.

mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use rand::RngCore;

use crate::action::{Action, ActionContext, ActionKind, ActionTransition};
use crate::config::GameConfig;
use crate::message::GameMessage;
use crate::state::{GameState, Position};

/// Whether the session continues. Terminal states are data, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum GameStatus {
    InProgress,
    Victory,
    Defeated,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Ordered messages of one turn and the status it left the game in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub messages: Vec<GameMessage>,
    pub status: GameStatus,
    /// Set when the action moved the player to another room.
    pub moved_to: Option<Position>,
}

type TransitionResult<E> = Result<(), TransitionPhaseError<E>>;

macro_rules! dispatch_transition {
    ($kind:expr, $state:expr, $ctx:expr, { $($variant:ident),+ $(,)? }) => {{
        match $kind {
            $(
                ActionKind::$variant(transition) => {
                    drive_transition(transition, $state, $ctx).map_err(ExecuteError::$variant)
                }
            )+
        }
    }};
}

/// Game engine that owns no data: it borrows the state, the tunables and the
/// session RNG for the lifetime of a game.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
    rng: &'a mut dyn RngCore,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig, rng: &'a mut dyn RngCore) -> Self {
        Self { state, config, rng }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Narrates the starting room and applies its entry effect.
    pub fn start(&mut self) -> Result<TurnReport, ExecuteError> {
        let position = self.state.player.position;
        let intro = self
            .state
            .current_tile()
            .ok_or(ExecuteError::MissingTile { position })?
            .intro_text();

        let mut messages = vec![GameMessage::Intro(intro)];
        self.apply_entry_effect(&mut messages)?;
        tracing::info!(%position, status = %self.status(), "game started");

        Ok(TurnReport {
            messages,
            status: self.status(),
            moved_to: None,
        })
    }

    /// The menu for the current turn. Empty once the game is over.
    pub fn available_actions(&self) -> Result<Vec<Action>, ExecuteError> {
        if self.status().is_over() {
            return Ok(Vec::new());
        }
        let position = self.state.player.position;
        let tile = self
            .state
            .current_tile()
            .ok_or(ExecuteError::MissingTile { position })?;
        Ok(tile.available_actions(&self.state.world))
    }

    /// Resolves a hotkey against the current menu. `None` means "ask again".
    pub fn action_for_hotkey(&self, hotkey: char) -> Option<Action> {
        self.available_actions()
            .ok()?
            .into_iter()
            .find(|action| action.hotkey == hotkey)
    }

    /// Invokes an action offered on the current menu, then re-applies the
    /// entry effect of the room the player ends up in.
    pub fn execute(&mut self, action: &Action) -> Result<TurnReport, ExecuteError> {
        if self.status().is_over() {
            return Err(ExecuteError::GameOver);
        }
        if !self.available_actions()?.contains(action) {
            tracing::warn!(hotkey = %action.hotkey, "action not on the current menu");
            return Err(ExecuteError::ActionUnavailable {
                hotkey: action.hotkey,
            });
        }

        let origin = self.state.player.position;
        tracing::debug!(action = %action, %origin, "executing action");

        let mut ctx = ActionContext::new(self.config, &mut *self.rng);
        dispatch_transition!(&action.kind, self.state, &mut ctx, {
            Move,
            DisplayInventory,
            UsePotion,
            Attack,
            Flee,
        })?;
        let mut messages = ctx.into_messages();

        let destination = self.state.player.position;
        let moved_to = (destination != origin).then_some(destination);
        if moved_to.is_some() {
            let intro = self
                .state
                .current_tile()
                .ok_or(ExecuteError::MissingTile {
                    position: destination,
                })?
                .intro_text();
            messages.push(GameMessage::Intro(intro));
        }

        self.apply_entry_effect(&mut messages)?;

        let status = self.status();
        if status.is_over() {
            tracing::info!(%status, hp = self.state.player.hp, "game over");
        }
        Ok(TurnReport {
            messages,
            status,
            moved_to,
        })
    }

    fn apply_entry_effect(&mut self, messages: &mut Vec<GameMessage>) -> Result<(), ExecuteError> {
        let GameState { world, player } = &mut *self.state;
        let position = player.position;
        world
            .tile_at_mut(position)
            .ok_or(ExecuteError::MissingTile { position })?
            .modify_player(player, messages);
        Ok(())
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    ctx: &mut ActionContext<'_>,
) -> TransitionResult<T::Error>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}
