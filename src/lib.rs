pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod services;
pub mod swiss;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::config::settings::AppConfig;
use crate::services::TournamentService;
use crate::swiss::PlayerId;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn open_service(database: Option<&str>) -> Result<TournamentService> {
    let mut config = AppConfig::new();
    if let Some(path) = database {
        config.store = config.store.with_database_path(path);
    }

    let service = TournamentService::open(&config.store)
        .with_context(|| format!("Failed to open tournament store at {}", config.store.database_path))?;
    service.initialize(false).context("Failed to create tournament schema")?;
    Ok(service)
}

pub fn handle_init(service: &TournamentService, reset: bool) -> Result<()> {
    service.initialize(reset).context("Failed to initialize tournament store")?;
    info!("Tournament store initialized (reset: {})", reset);
    println!("Tournament store ready.");
    Ok(())
}

pub fn handle_register(service: &TournamentService, name: &str) -> Result<()> {
    let player = service.register_player(name).context("Failed to register player")?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(service: &TournamentService, winner: PlayerId, loser: PlayerId) -> Result<()> {
    let record = service
        .report_match(winner, loser)
        .context("Failed to report match")?;
    println!("Recorded match {}: {} beat {}", record.id, record.winner, record.loser);
    Ok(())
}

pub fn handle_standings(service: &TournamentService, json: bool) -> Result<()> {
    let standings = service.standings().context("Failed to compute standings")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        println!("{}", output::render_standings(&standings));
    }
    Ok(())
}

pub fn handle_pairings(service: &TournamentService, json: bool) -> Result<()> {
    let pairings = service.swiss_pairings().context("Failed to generate pairings")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
    } else {
        println!("{}", output::render_pairings(&pairings));
    }
    Ok(())
}

pub fn handle_count(service: &TournamentService) -> Result<()> {
    println!("{}", service.count_players().context("Failed to count players")?);
    Ok(())
}

pub fn handle_clear_matches(service: &TournamentService) -> Result<()> {
    service.clear_matches().context("Failed to clear matches")?;
    println!("All matches removed.");
    Ok(())
}

pub fn handle_clear_players(service: &TournamentService) -> Result<()> {
    service.clear_players().context("Failed to clear players")?;
    println!("All players removed.");
    Ok(())
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
