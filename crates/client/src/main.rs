//! Headless agent-versus-agent skirmish.
//!
//! Loads a scenario and two profiles, then lets the agents play until one
//! side is wiped out, the turn limit is reached, or Ctrl-C is pressed.

mod config;
mod logging;
mod render;
mod signals;

use anyhow::{Context, Result};
use game_content::{
    AgentProfile, ArchetypeCatalog, ConfigLoader, ContentFactory, ProfileLoader, Scenario,
    ScenarioLoader,
};
use game_core::{GameConfig, Team};
use runtime::{AgentController, EventBus, Skirmish};

use crate::config::ClientConfig;
use crate::render::{LogRenderer, render_board};

struct Content {
    config: GameConfig,
    catalog: ArchetypeCatalog,
    scenario: Scenario,
    white: AgentProfile,
    black: AgentProfile,
}

fn load_content(client: &ClientConfig) -> Result<Content> {
    let content = match &client.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            Content {
                config: factory.load_config()?,
                catalog: factory.load_catalog()?,
                scenario: factory.load_scenario(&client.scenario)?,
                white: factory.load_profile(&client.white_profile)?,
                black: factory.load_profile(&client.black_profile)?,
            }
        }
        None => Content {
            config: ConfigLoader::builtin()?,
            catalog: ArchetypeCatalog::builtin(),
            scenario: ScenarioLoader::builtin()?,
            white: ProfileLoader::builtin(&client.white_profile)?,
            black: ProfileLoader::builtin(&client.black_profile)?,
        },
    };
    Ok(content)
}

fn agent(
    mut profile: AgentProfile,
    team: Team,
    client: &ClientConfig,
    bus: &EventBus,
) -> AgentController {
    // A profile file may name either team; the seat decides.
    profile.team = team;
    if let Some(delay) = client.action_delay {
        profile.action_delay_secs = delay;
    }
    let controller =
        AgentController::new(profile, bus.clone()).with_renderer(Box::new(LogRenderer));
    match client.seed {
        Some(seed) => controller.with_seed(seed.wrapping_add(team as u64)),
        None => controller,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let client = ClientConfig::from_env();
    let _guard = logging::setup_logging(client.log_dir.as_deref())?;

    let content = load_content(&client)?;
    let board = content
        .scenario
        .instantiate(&content.catalog)
        .context("failed to build scenario board")?;
    println!("{}", render_board(&board));

    let bus = EventBus::new();
    let logger = signals::spawn_signal_logger(&bus, client.log_json);

    let white = agent(content.white, Team::White, &client, &bus);
    let black = agent(content.black, Team::Black, &client, &bus);
    let mut skirmish = Skirmish::new(board, &content.config, bus)
        .with_controller(Box::new(white))
        .with_controller(Box::new(black))
        .with_max_turns(client.max_turns);

    let outcome = tokio::select! {
        result = skirmish.run() => Some(result?),
        _ = tokio::signal::ctrl_c() => None,
    };

    println!("{}", render_board(skirmish.board()));
    match outcome {
        Some(result) => match result.winner {
            Some(team) => println!("{team} wins after {} turns", result.turns_played),
            None => println!("no winner after {} turns", result.turns_played),
        },
        None => println!("interrupted on turn {}", skirmish.turns().turn()),
    }

    // Dropping the last bus handle closes the topics and lets the logger drain.
    drop(skirmish);
    if let Err(error) = logger.await {
        tracing::warn!(%error, "signal logger stopped abnormally");
    }
    Ok(())
}
