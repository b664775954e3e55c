//! Text frontend for the cave game.
//!
//! The binary is the composition root: it reads [`CliConfig`] from the
//! environment, installs file logging, builds a [`Session`] from cave content
//! and hands a [`cave_core::GameEngine`] to the [`CliApp`] loop.

pub mod app;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod session;

pub use app::{CliApp, SessionOutcome};
pub use config::CliConfig;
pub use session::Session;
