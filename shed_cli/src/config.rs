//! Command-line configuration management.
//!
//! Consolidates environment variable reads, the optional JSON config file, and
//! command-line overrides into one validated [`GameConfig`].

use shed::GameConfig;
use std::path::{Path, PathBuf};

/// Environment variable holding comma-separated player names.
pub const PLAYERS_VAR: &str = "SHED_PLAYERS";

/// Environment variable holding the shuffle seed.
pub const SEED_VAR: &str = "SHED_SEED";

/// Values given on the command line. They win over everything else.
#[derive(Debug, Default)]
pub struct Overrides {
    pub players: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Couldn't read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the game configuration.
///
/// Precedence, lowest first: environment, config file, command line.
pub fn load(overrides: Overrides) -> Result<GameConfig, ConfigError> {
    let mut config = from_lookup(|key| std::env::var(key).ok())?;
    if let Some(path) = &overrides.config_path {
        config = merge(config, read_config_file(path)?);
    }
    let cli = GameConfig::new(overrides.players.unwrap_or_default(), overrides.seed);
    Ok(merge(config, cli))
}

/// Builds a config from environment-style lookups.
pub fn from_lookup<F>(lookup: F) -> Result<GameConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let player_names = lookup(PLAYERS_VAR)
        .map(|v| split_names(&v))
        .unwrap_or_default();
    let seed = lookup(SEED_VAR)
        .map(|v| {
            v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: SEED_VAR.to_string(),
                reason: format!("{v:?} isn't an unsigned integer"),
            })
        })
        .transpose()?;
    Ok(GameConfig::new(player_names, seed))
}

pub fn read_config_file(path: &Path) -> Result<GameConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(GameConfig::from_json(&json)?)
}

/// Fields set in `over` replace those in `base`.
pub fn merge(base: GameConfig, over: GameConfig) -> GameConfig {
    GameConfig {
        player_names: if over.player_names.is_empty() {
            base.player_names
        } else {
            over.player_names
        },
        seed: over.seed.or(base.seed),
    }
}

/// Splits a comma-separated list of names, dropping blanks.
pub fn split_names(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("nancy, mae,,ann "), vec!["nancy", "mae", "ann"]);
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn test_from_lookup() {
        let config = from_lookup(lookup(&[(PLAYERS_VAR, "nancy,mae"), (SEED_VAR, " 12 ")])).unwrap();
        assert_eq!(config, GameConfig::new(vec!["nancy".into(), "mae".into()], Some(12)));

        let empty = from_lookup(lookup(&[])).unwrap();
        assert_eq!(empty, GameConfig::default());
    }

    #[test]
    fn test_from_lookup_bad_seed() {
        let err = from_lookup(lookup(&[(SEED_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == SEED_VAR));
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_merge_prefers_set_fields() {
        let base = GameConfig::new(vec!["a".into(), "b".into()], Some(1));
        let over = GameConfig::new(Vec::new(), Some(2));
        assert_eq!(
            merge(base.clone(), over),
            GameConfig::new(vec!["a".into(), "b".into()], Some(2))
        );

        let over = GameConfig::new(vec!["c".into(), "d".into()], None);
        assert_eq!(
            merge(base, over),
            GameConfig::new(vec!["c".into(), "d".into()], Some(1))
        );
    }

    #[test]
    fn test_read_missing_config_file() {
        let err = read_config_file(Path::new("/nonexistent/shed.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_read_config_file() {
        let path = std::env::temp_dir().join(format!("shed_cli_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"player_names": ["nancy", "mae"], "seed": 3}"#).unwrap();
        let config = read_config_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.player_names.len(), 2);
    }
}
