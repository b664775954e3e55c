use std::borrow::Cow;

use super::narration;
use crate::message::GameMessage;
use crate::state::{Item, Player, WeaponKind};

/// Room holding a single item that is handed over on first entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LootRoom {
    item: Item,
    obtained: bool,
}

impl LootRoom {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            obtained: false,
        }
    }

    pub fn item(&self) -> Item {
        self.item
    }

    pub fn obtained(&self) -> bool {
        self.obtained
    }

    pub(crate) fn intro_text(&self) -> Cow<'static, str> {
        if self.obtained {
            return Cow::Borrowed(narration::EMPTY_CAVE_PATH);
        }
        match self.item {
            Item::Weapon(WeaponKind::Dagger) => Cow::Borrowed(narration::FIND_DAGGER),
            Item::Potion => Cow::Borrowed(narration::FIND_POTION),
            Item::Gold { amount } => Cow::Owned(format!(
                "You come across a {amount} gold piece on the floor and pick it up."
            )),
            Item::Weapon(weapon) => Cow::Owned(format!(
                "There is a {} lying on the floor. You pick it up.",
                weapon.to_string().to_lowercase()
            )),
        }
    }

    /// Grants the item at most once.
    pub(crate) fn modify_player(&mut self, player: &mut Player, messages: &mut Vec<GameMessage>) {
        if self.obtained {
            return;
        }
        player.add_item(self.item);
        self.obtained = true;
        tracing::debug!(item = self.item.name(), "loot obtained");
        messages.push(GameMessage::ItemFound(self.item));
    }
}
