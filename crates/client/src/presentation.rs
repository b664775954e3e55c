//! Terminal styling for game text.

use cave_core::{GameMessage, GameStatus};
use crossterm::style::{Attribute, Color, Stylize, style};

/// How a line should stand out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Plain,
    Danger,
    Reward,
    Notice,
    Heading,
}

impl Tone {
    pub fn of(message: &GameMessage) -> Self {
        match message {
            message if message.is_harmful() => Tone::Danger,
            GameMessage::HpRemaining { .. } => Tone::Danger,
            GameMessage::ItemFound(_) | GameMessage::PotionUsed { .. } => Tone::Reward,
            GameMessage::EnemyKilled { .. } => Tone::Reward,
            GameMessage::Fled { .. } | GameMessage::NoPotion => Tone::Notice,
            _ => Tone::Plain,
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Tone::Plain | Tone::Heading => None,
            Tone::Danger => Some(Color::Red),
            Tone::Reward => Some(Color::Green),
            Tone::Notice => Some(Color::Yellow),
        }
    }
}

/// Renders text with or without ANSI styling.
#[derive(Clone, Copy, Debug)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_owned();
        }
        match (tone, tone.color()) {
            (Tone::Heading, _) => style(text).attribute(Attribute::Bold).to_string(),
            (_, Some(color)) => style(text).with(color).to_string(),
            (_, None) => text.to_owned(),
        }
    }

    pub fn message(&self, message: &GameMessage) -> String {
        self.paint(&message.to_string(), Tone::of(message))
    }

    /// Closing line printed once the game has ended.
    pub fn farewell(&self, status: GameStatus, gold: u32) -> Option<String> {
        let (text, tone) = match status {
            GameStatus::InProgress => return None,
            GameStatus::Victory => (
                format!("Victory! You leave the cave with {gold} gold."),
                Tone::Reward,
            ),
            GameStatus::Defeated => ("Game over.".to_owned(), Tone::Danger),
        };
        Some(self.paint(&text, tone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styler_leaves_text_untouched() {
        let styler = Styler::new(false);
        assert_eq!(styler.message(&GameMessage::PlayerDied), "You have died.");
        assert_eq!(styler.paint("Choose an action:", Tone::Heading), "Choose an action:");
    }

    #[test]
    fn colored_styler_emits_escape_codes() {
        let styler = Styler::new(true);
        let painted = styler.message(&GameMessage::PlayerDied);
        assert!(painted.contains("You have died."));
        assert!(painted.contains('\u{1b}'));
        assert_eq!(styler.paint("plain", Tone::Plain), "plain");
    }

    #[test]
    fn tones_follow_message_meaning() {
        assert_eq!(Tone::of(&GameMessage::PlayerDied), Tone::Danger);
        assert_eq!(Tone::of(&GameMessage::HpRemaining { hp: 3 }), Tone::Danger);
        assert_eq!(Tone::of(&GameMessage::EnemyKilled { enemy: "Ogre" }), Tone::Reward);
        assert_eq!(Tone::of(&GameMessage::NoPotion), Tone::Notice);
        assert_eq!(Tone::of(&GameMessage::Inventory(Vec::new())), Tone::Plain);
    }

    #[test]
    fn farewell_only_after_the_game_ends() {
        let styler = Styler::new(false);
        assert_eq!(styler.farewell(GameStatus::InProgress, 15), None);
        assert_eq!(styler.farewell(GameStatus::Defeated, 15).as_deref(), Some("Game over."));
        assert_eq!(
            styler.farewell(GameStatus::Victory, 20).as_deref(),
            Some("Victory! You leave the cave with 20 gold.")
        );
    }
}
