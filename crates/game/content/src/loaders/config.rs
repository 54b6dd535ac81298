//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.max_energy_per_turn == 0 {
            anyhow::bail!("max_energy_per_turn must be positive");
        }
        Ok(config)
    }

    /// The embedded default configuration.
    pub fn builtin() -> LoadResult<GameConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Team;
    use std::io::Write;

    #[test]
    fn builtin_config_matches_defaults() {
        let config = ConfigLoader::builtin().expect("embedded config parses");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "max_energy_per_turn = 9\nstarting_team = \"Black\"").expect("write");

        let config = ConfigLoader::load(file.path()).expect("config loads");
        assert_eq!(config.max_energy_per_turn, 9);
        assert_eq!(config.starting_team, Team::Black);
        assert_eq!(config.board_width, GameConfig::DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn zero_energy_is_rejected() {
        assert!(ConfigLoader::parse("max_energy_per_turn = 0").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
