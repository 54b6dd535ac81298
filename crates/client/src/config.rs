//! Client configuration read from the process environment.

use std::env;
use std::path::PathBuf;

/// Headless skirmish settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Data directory; built-in content is used when unset.
    pub data_dir: Option<PathBuf>,
    pub scenario: String,
    pub white_profile: String,
    pub black_profile: String,
    /// Seeds both agents' noise so a run can be replayed.
    pub seed: Option<u64>,
    pub max_turns: u32,
    /// Overrides both profiles' per-action delay, in seconds.
    pub action_delay: Option<f32>,
    pub log_dir: Option<PathBuf>,
    /// Emit signal-logger events as JSON lines.
    pub log_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            scenario: "skirmish".to_string(),
            white_profile: "cautious".to_string(),
            black_profile: "aggressive".to_string(),
            seed: None,
            max_turns: 200,
            action_delay: None,
            log_dir: None,
            log_json: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content directory (default: built-in content)
    /// - `SKIRMISH_SCENARIO` - Scenario name (default: skirmish)
    /// - `SKIRMISH_WHITE_PROFILE` / `SKIRMISH_BLACK_PROFILE` - Profile names
    ///   (default: cautious / aggressive)
    /// - `SKIRMISH_SEED` - Noise seed (default: random)
    /// - `SKIRMISH_MAX_TURNS` - Turn limit (default: 200)
    /// - `SKIRMISH_ACTION_DELAY` - Per-action delay override in seconds
    /// - `SKIRMISH_LOG_DIR` - Also write logs to `<dir>/skirmish.log`
    /// - `SKIRMISH_LOG_JSON` - Log events as JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SKIRMISH_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(name) = read_env::<String>("SKIRMISH_SCENARIO") {
            config.scenario = name;
        }
        if let Some(name) = read_env::<String>("SKIRMISH_WHITE_PROFILE") {
            config.white_profile = name;
        }
        if let Some(name) = read_env::<String>("SKIRMISH_BLACK_PROFILE") {
            config.black_profile = name;
        }
        config.seed = read_env::<u64>("SKIRMISH_SEED");
        if let Some(turns) = read_env::<u32>("SKIRMISH_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }
        config.action_delay = read_env::<f32>("SKIRMISH_ACTION_DELAY").map(|d| d.max(0.0));
        config.log_dir = read_env::<PathBuf>("SKIRMISH_LOG_DIR");
        if let Some(json) = read_env_bool("SKIRMISH_LOG_JSON") {
            config.log_json = json;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
