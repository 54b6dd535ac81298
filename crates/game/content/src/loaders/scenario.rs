//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenario layouts from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        if scenario.width == 0 || scenario.height == 0 {
            anyhow::bail!(
                "scenario board must be non-empty (got {}x{})",
                scenario.width,
                scenario.height
            );
        }
        Ok(scenario)
    }

    /// The embedded default skirmish: two half-armies on an 8x8 board.
    pub fn builtin() -> LoadResult<Scenario> {
        Self::parse(include_str!("../../data/scenarios/skirmish.ron"))
    }
}
