//! Session bootstrap: content loading, world construction and RNG seeding.

use anyhow::{Context, Result};
use cave_content::{ConfigLoader, MapLoader};
use cave_core::{GameConfig, GameEngine, GameState, Position, RoomKind, World};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::CliConfig;

/// Everything a game needs, owned in one place so the engine can borrow it.
pub struct Session {
    pub state: GameState,
    pub config: GameConfig,
    pub seed: u64,
    rng: StdRng,
}

impl Session {
    /// Loads the layout and tunables named by `cli`, falling back to the
    /// embedded cave and default tunables.
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let rooms = match &cli.map_path {
            Some(path) => MapLoader::load(path)
                .with_context(|| format!("failed to load cave layout {}", path.display()))?,
            None => MapLoader::default_cave().context("embedded cave layout is invalid")?,
        };
        let config = match &cli.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("failed to load game config {}", path.display()))?,
            None => GameConfig::default(),
        };
        let seed = cli.seed.unwrap_or_else(rand::random);

        Self::new(rooms, config, seed)
    }

    /// Builds the world from `rooms`, drawing trap kinds from the seeded RNG.
    pub fn new(rooms: Vec<(Position, RoomKind)>, config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let world = World::from_rooms(rooms, &mut rng).context("invalid cave layout")?;
        let state = GameState::new(world, &config);

        tracing::info!(
            seed,
            rooms = state.world.room_count(),
            start = %state.world.starting_position(),
            "session ready"
        );

        Ok(Self {
            state,
            config,
            seed,
            rng,
        })
    }

    pub fn engine(&mut self) -> GameEngine<'_> {
        GameEngine::new(&mut self.state, &self.config, &mut self.rng)
    }
}
