//! Content factory for loading everything from one data directory.

use std::path::PathBuf;

use game_core::GameConfig;

use crate::catalog::ArchetypeCatalog;
use crate::loaders::{ArchetypeLoader, ConfigLoader, LoadResult, ProfileLoader, ScenarioLoader};
use crate::profile::AgentProfile;
use crate::scenario::Scenario;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── archetypes.ron      (optional)
/// ├── profiles/
/// │   ├── aggressive.ron
/// │   └── cautious.ron
/// └── scenarios/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Built-in archetypes plus `archetypes.ron` when present.
    pub fn load_catalog(&self) -> LoadResult<ArchetypeCatalog> {
        let path = self.data_dir.join("archetypes.ron");
        if path.exists() {
            ArchetypeLoader::load_into_builtin(&path)
        } else {
            Ok(ArchetypeCatalog::builtin())
        }
    }

    /// Load `profiles/<name>.ron`.
    pub fn load_profile(&self, name: &str) -> LoadResult<AgentProfile> {
        let path = self.data_dir.join("profiles").join(format!("{}.ron", name));
        ProfileLoader::load(&path)
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }
}
