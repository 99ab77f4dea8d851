use log::{debug, info};
use rusqlite::Transaction;

use crate::config::StoreSettings;
use crate::database::{self, matches, players, setup, DbPool, Match, Player};
use crate::errors::{ConstraintViolation, Result};
use crate::swiss::{self, Entrant, MatchResult, Pairing, PlayerId, StandingEntry};

/// The tournament's public operations. Every call is one unit of work: a
/// pooled connection is checked out, a transaction is opened and committed,
/// and both are released on every exit path. A transaction dropped on an
/// error path rolls back.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(settings: &StoreSettings) -> Result<Self> {
        let pool = database::create_pool(settings)?;
        Ok(Self::new(pool))
    }

    /// Makes sure both tables exist; with `reset` they are dropped first.
    pub fn initialize(&self, reset: bool) -> Result<()> {
        self.with_transaction(|tx| {
            if reset {
                setup::reset_database(tx)?;
            } else {
                setup::create_schema(tx)?;
            }
            Ok(())
        })
    }

    pub fn clear_matches(&self) -> Result<()> {
        let removed = self.with_transaction(|tx| Ok(matches::delete_all(tx)?))?;
        info!("Cleared {} match records", removed);
        Ok(())
    }

    pub fn clear_players(&self) -> Result<()> {
        let removed = self.with_transaction(|tx| Ok(players::delete_all(tx)?))?;
        info!("Cleared {} players and their matches", removed);
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize> {
        self.with_transaction(|tx| Ok(players::count(tx)?))
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let player = self.with_transaction(|tx| Ok(players::insert_player(tx, name)?))?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Records that `winner` beat `loser`. Both must be registered and distinct.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let record = self.with_transaction(|tx| {
            validate_match(tx, winner, loser)?;
            Ok(matches::insert_match(tx, winner, loser)?)
        })?;

        info!("Recorded match {}: {} beat {}", record.id, winner, loser);
        Ok(record)
    }

    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        let standings = self.with_transaction(load_standings)?;
        debug!("Computed standings for {} players", standings.len());
        Ok(standings)
    }

    /// Pairs rank-adjacent players for the next round.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.standings()?;
        let pairings = swiss::pair_adjacent(&standings)?;
        debug!("Generated {} pairings", pairings.len());
        Ok(pairings)
    }

    fn with_transaction<T>(&self, work: impl FnOnce(&Transaction) -> Result<T>) -> Result<T> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let value = work(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

fn validate_match(tx: &Transaction, winner: PlayerId, loser: PlayerId) -> Result<()> {
    if winner == loser {
        return Err(ConstraintViolation::SelfMatch(winner).into());
    }

    for id in [winner, loser] {
        if players::find_by_id(tx, id)?.is_none() {
            return Err(ConstraintViolation::UnknownPlayer(id).into());
        }
    }

    Ok(())
}

fn load_standings(tx: &Transaction) -> Result<Vec<StandingEntry>> {
    let entrants: Vec<Entrant> = players::list_all(tx)?.iter().map(Entrant::from).collect();
    let results: Vec<MatchResult> = matches::list_all(tx)?.iter().map(MatchResult::from).collect();

    Ok(swiss::calculate_standings(&entrants, &results))
}
