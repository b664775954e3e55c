use rand::Rng;

use super::narration;
use crate::message::GameMessage;
use crate::state::Player;

/// Damage profile of a trap room, fixed when the room is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TrapKind {
    /// Instant death.
    SpikedPit,
    TripWire,
    FlameJet,
    SnakePit,
}

impl TrapKind {
    /// Ordered by the index drawn at construction time.
    pub const ALL: [TrapKind; 4] = [
        TrapKind::SpikedPit,
        TrapKind::TripWire,
        TrapKind::FlameJet,
        TrapKind::SnakePit,
    ];

    /// Draws one of the four kinds uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Hit points removed when sprung. `None` means the trap kills outright.
    pub const fn damage(self) -> Option<i32> {
        match self {
            Self::SpikedPit => None,
            Self::TripWire => Some(5),
            Self::FlameJet => Some(10),
            Self::SnakePit => Some(15),
        }
    }

    fn narration(self) -> &'static str {
        match self {
            Self::SpikedPit => narration::TRAP_SPIKED_PIT,
            Self::TripWire => narration::TRAP_TRIP_WIRE,
            Self::FlameJet => narration::TRAP_FLAME_JET,
            Self::SnakePit => narration::TRAP_SNAKE_PIT,
        }
    }
}

/// Room with a hidden trap that fires once, on first entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrapRoom {
    kind: TrapKind,
    triggered: bool,
}

impl TrapRoom {
    /// Draws the trap kind now; it never changes afterwards.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_kind(TrapKind::random(rng))
    }

    pub fn with_kind(kind: TrapKind) -> Self {
        Self {
            kind,
            triggered: false,
        }
    }

    pub fn kind(&self) -> TrapKind {
        self.kind
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    pub(crate) fn intro_text(&self) -> &'static str {
        if self.triggered {
            narration::EMPTY_CAVE_PATH
        } else {
            self.kind.narration()
        }
    }

    pub(crate) fn modify_player(&mut self, player: &mut Player, messages: &mut Vec<GameMessage>) {
        if self.triggered {
            return;
        }

        match self.kind.damage() {
            Some(damage) => player.hp = player.hp.saturating_sub(damage),
            None => player.hp = 0,
        }
        self.triggered = true;
        tracing::debug!(kind = %self.kind, hp = player.hp, "trap sprung");

        if player.is_alive() {
            messages.push(GameMessage::HpRemaining { hp: player.hp });
        } else {
            messages.push(GameMessage::PlayerDied);
        }
    }
}
