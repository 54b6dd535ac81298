//! Agent profile loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::profile::AgentProfile;

/// Loader for agent profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    pub fn load(path: &Path) -> LoadResult<AgentProfile> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a profile; omitted fields keep their defaults.
    pub fn parse(content: &str) -> LoadResult<AgentProfile> {
        let profile: AgentProfile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile RON: {}", e))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Embedded profiles by name: `aggressive` or `cautious`.
    pub fn builtin(name: &str) -> LoadResult<AgentProfile> {
        let content = match name {
            "aggressive" => include_str!("../../data/profiles/aggressive.ron"),
            "cautious" => include_str!("../../data/profiles/cautious.ron"),
            other => anyhow::bail!("unknown built-in profile `{}`", other),
        };
        Self::parse(content)
    }
}
