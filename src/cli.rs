use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament tracker")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the players and matches tables
    Init {
        /// Drop existing tables and all their data first
        #[arg(long)]
        reset: bool,
    },
    /// Register a new player
    Register {
        /// Full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i64,
        /// Id of the player who lost
        loser: i64,
    },
    /// Show players ranked by wins
    Standings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show next-round pairings
    Pairings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the number of registered players
    Count,
    /// Remove all match records
    ClearMatches,
    /// Remove all players and their matches
    ClearPlayers,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_report_with_global_database() {
        let cli = Cli::try_parse_from(["swiss-tournament", "report", "3", "7", "--database", "league.db"]).unwrap();

        assert_eq!(cli.command, Command::Report { winner: 3, loser: 7 });
        assert_eq!(cli.database.as_deref(), Some("league.db"));
    }

    #[test]
    fn test_parses_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["swiss-tournament", "clear-matches"]).unwrap();

        assert_eq!(cli.command, Command::ClearMatches);
        assert_eq!(cli.database, None);
    }

    #[test]
    fn test_pairings_json_flag() {
        let cli = Cli::try_parse_from(["swiss-tournament", "pairings", "--json"]).unwrap();

        assert_eq!(cli.command, Command::Pairings { json: true });
    }
}
