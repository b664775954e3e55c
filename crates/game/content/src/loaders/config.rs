//! Game configuration loader.

use std::path::Path;

use anyhow::ensure;
use cave_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing keys fall back to the compiled-in defaults, so a file may override
/// a single value.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    /// Parse and sanity-check a TOML document.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        ensure!(config.starting_hp > 0, "starting_hp must be positive");
        ensure!(
            config.max_hp >= config.starting_hp,
            "max_hp ({}) is below starting_hp ({})",
            config.max_hp,
            config.starting_hp
        );
        ensure!(config.potion_heal >= 0, "potion_heal must not be negative");
        ensure!(config.unarmed_damage >= 0, "unarmed_damage must not be negative");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_single_keys() {
        let config = ConfigLoader::parse("potion_heal = 40\n").unwrap();
        assert_eq!(config.potion_heal, 40);
        assert_eq!(config.starting_hp, GameConfig::DEFAULT_STARTING_HP);
    }

    #[test]
    fn starting_hp_above_max_is_rejected() {
        let error = ConfigLoader::parse("starting_hp = 120\nmax_hp = 100\n").unwrap_err();
        assert!(error.to_string().contains("below starting_hp"));
    }

    #[test]
    fn oversized_potion_heal_is_accepted() {
        let config = ConfigLoader::parse("potion_heal = 2147483647\n").unwrap();
        assert_eq!(config.potion_heal, i32::MAX);
    }

    #[test]
    fn unknown_value_types_fail_to_parse() {
        assert!(ConfigLoader::parse("starting_hp = \"lots\"\n").is_err());
    }
}
