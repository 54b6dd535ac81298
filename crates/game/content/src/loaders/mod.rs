//! Content loaders for reading game data from files.
//!
//! RON carries archetypes, profiles and scenarios; TOML carries the game
//! configuration. Built-in copies of the default data are embedded so the
//! binary runs without a data directory.

pub mod archetypes;
pub mod config;
pub mod factory;
pub mod profile;
pub mod scenario;

pub use archetypes::ArchetypeLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use profile::ProfileLoader;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
