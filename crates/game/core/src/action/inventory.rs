use crate::action::{ActionContext, ActionTransition};
use crate::error::NeverError;
use crate::message::GameMessage;
use crate::state::GameState;

/// Lists the inventory. Changes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayInventoryAction;

impl ActionTransition for DisplayInventoryAction {
    type Error = NeverError;

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        ctx.emit(GameMessage::Inventory(state.player.inventory.clone()));
        Ok(())
    }
}

/// Drinks one potion, healing up to the configured amount.
///
/// Without a potion this only reports that none is carried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsePotionAction;

impl ActionTransition for UsePotionAction {
    type Error = NeverError;

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        if !state.player.take_potion() {
            ctx.emit(GameMessage::NoPotion);
            return Ok(());
        }

        let restored = state.player.heal(ctx.config().potion_heal);
        tracing::debug!(restored, hp = state.player.hp, "potion used");
        ctx.emit(GameMessage::PotionUsed {
            restored,
            hp: state.player.hp,
        });
        Ok(())
    }
}
