//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one `cave` session.
///
/// Everything is optional. An empty environment plays the embedded cave with
/// default tunables and a random seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed for the session RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// RON layout to play instead of the embedded cave.
    pub map_path: Option<PathBuf>,
    /// TOML file with game tunables.
    pub config_path: Option<PathBuf>,
    /// Log sub-directory name. Defaults to a timestamp.
    pub session_id: Option<String>,
    /// Root directory for session logs.
    pub log_dir: Option<PathBuf>,
    /// Styled terminal output.
    pub color: bool,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CAVE_SEED` - RNG seed (u64)
    /// - `CAVE_MAP` - path to a RON cave layout
    /// - `CAVE_CONFIG` - path to a TOML game config
    /// - `CAVE_SESSION_ID` - log sub-directory name
    /// - `CAVE_LOG_DIR` - log root directory
    /// - `CAVE_COLOR` - styled output (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            seed: read_env(&lookup, "CAVE_SEED"),
            map_path: read_env(&lookup, "CAVE_MAP"),
            config_path: read_env(&lookup, "CAVE_CONFIG"),
            session_id: read_env(&lookup, "CAVE_SESSION_ID"),
            log_dir: read_env(&lookup, "CAVE_LOG_DIR"),
            color: read_env_bool(&lookup, "CAVE_COLOR").unwrap_or(true),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            map_path: None,
            config_path: None,
            session_id: None,
            log_dir: None,
            color: true,
        }
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

fn read_env_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key)?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(from_pairs(&[]), CliConfig::default());
        assert!(CliConfig::default().color);
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("CAVE_SEED", "42"),
            ("CAVE_MAP", "maps/tiny.ron"),
            ("CAVE_CONFIG", "config.toml"),
            ("CAVE_SESSION_ID", "run-1"),
            ("CAVE_LOG_DIR", "/tmp/cave"),
            ("CAVE_COLOR", "off"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.map_path, Some(PathBuf::from("maps/tiny.ron")));
        assert_eq!(config.config_path, Some(PathBuf::from("config.toml")));
        assert_eq!(config.session_id.as_deref(), Some("run-1"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/cave")));
        assert!(!config.color);
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = from_pairs(&[
            ("CAVE_SEED", "lots"),
            ("CAVE_COLOR", "maybe"),
            ("CAVE_SESSION_ID", "  "),
        ]);
        assert_eq!(config.seed, None);
        assert!(config.color);
        assert_eq!(config.session_id, None);
    }
}
