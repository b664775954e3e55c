//! The read-hotkey/print loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use cave_core::{Action, GameEngine, GameError, GameStatus, TurnReport};

use crate::presentation::{Styler, Tone};

/// How a session ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionOutcome {
    Victory,
    Defeated,
    /// Input ran out before the game ended.
    InputClosed,
}

/// Text frontend over any line-oriented input and output.
pub struct CliApp<R, W> {
    input: R,
    output: W,
    styler: Styler,
}

impl<R, W> CliApp<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            styler: Styler::new(color),
        }
    }

    /// Plays one game to its end or until input is exhausted.
    pub fn run(&mut self, engine: &mut GameEngine<'_>) -> Result<SessionOutcome> {
        let report = engine.start().context("failed to enter the starting room")?;
        self.print_report(&report)?;
        let mut status = report.status;

        while !status.is_over() {
            let actions = engine.available_actions().context("failed to build the menu")?;
            self.print_menu(&actions)?;

            let Some(line) = self.read_line()? else {
                tracing::info!("input closed before the game ended");
                return Ok(SessionOutcome::InputClosed);
            };
            let Some(hotkey) = first_hotkey(&line) else {
                continue;
            };
            let Some(action) = engine.action_for_hotkey(hotkey) else {
                tracing::debug!(%hotkey, "hotkey not on the menu");
                continue;
            };

            match engine.execute(&action) {
                Ok(report) => {
                    self.print_report(&report)?;
                    status = report.status;
                }
                Err(error) if error.severity().is_recoverable() => {
                    tracing::warn!(code = error.error_code(), %error, "action rejected");
                    let line = self.styler.paint(&error.to_string(), Tone::Notice);
                    writeln!(self.output, "{line}")?;
                }
                Err(error) => {
                    tracing::error!(code = error.error_code(), %error, "turn failed");
                    return Err(error).context("turn failed");
                }
            }
        }

        let gold = engine.state().player.gold();
        if let Some(farewell) = self.styler.farewell(status, gold) {
            writeln!(self.output, "\n{farewell}")?;
        }
        self.output.flush()?;

        Ok(match status {
            GameStatus::Victory => SessionOutcome::Victory,
            _ => SessionOutcome::Defeated,
        })
    }

    fn print_report(&mut self, report: &TurnReport) -> Result<()> {
        for message in &report.messages {
            writeln!(self.output, "{}", self.styler.message(message))?;
        }
        Ok(())
    }

    fn print_menu(&mut self, actions: &[Action]) -> Result<()> {
        let heading = self.styler.paint("Choose an action:", Tone::Heading);
        writeln!(self.output, "\n{heading}")?;
        for action in actions {
            writeln!(self.output, "{action}")?;
        }
        write!(self.output, "Action: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}

/// First non-whitespace character of a line, lowercased.
fn first_hotkey(line: &str) -> Option<char> {
    line.trim_start()
        .chars()
        .next()
        .map(|hotkey| hotkey.to_ascii_lowercase())
}
