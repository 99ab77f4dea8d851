use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::{
    handle_clear_matches, handle_clear_players, handle_completions, handle_count, handle_init,
    handle_pairings, handle_register, handle_report, handle_standings, interpret, open_service,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        handle_completions(*shell);
        return Ok(());
    }

    let service = open_service(cli.database.as_deref())?;

    match &cli.command {
        Command::Init { reset } => handle_init(&service, *reset),
        Command::Register { name } => handle_register(&service, name),
        Command::Report { winner, loser } => handle_report(&service, *winner, *loser),
        Command::Standings { json } => handle_standings(&service, *json),
        Command::Pairings { json } => handle_pairings(&service, *json),
        Command::Count => handle_count(&service),
        Command::ClearMatches => handle_clear_matches(&service),
        Command::ClearPlayers => handle_clear_players(&service),
        Command::Completions { .. } => Ok(()),
    }
}
