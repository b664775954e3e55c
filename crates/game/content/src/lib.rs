//! Data-driven cave content.
//!
//! This crate houses the static game data and the loaders that turn it into
//! core types:
//! - Cave layouts (RON, one row of rooms per line)
//! - Game configuration (TOML)
//!
//! The default cave is embedded in the binary, so a game can start without any
//! data directory.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapLoader};
