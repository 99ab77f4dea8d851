use std::cmp::Reverse;
use std::collections::HashMap;

use super::types::{Entrant, MatchResult, PlayerId, StandingEntry};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u32,
    matches_played: u32,
}

/// Builds the ranked standings table: one entry per entrant, most wins first,
/// ties ordered by ascending player id.
pub fn calculate_standings(entrants: &[Entrant], results: &[MatchResult]) -> Vec<StandingEntry> {
    let tallies = tally_results(results);
    let mut standings: Vec<StandingEntry> = entrants
        .iter()
        .map(|entrant| build_entry(entrant, tallies.get(&entrant.id).copied().unwrap_or_default()))
        .collect();

    rank(&mut standings);
    standings
}

fn tally_results(results: &[MatchResult]) -> HashMap<PlayerId, Tally> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();

    for result in results {
        let winner = tallies.entry(result.winner_id).or_default();
        winner.wins += 1;
        winner.matches_played += 1;

        tallies.entry(result.loser_id).or_default().matches_played += 1;
    }

    tallies
}

fn build_entry(entrant: &Entrant, tally: Tally) -> StandingEntry {
    StandingEntry {
        player_id: entrant.id,
        name: entrant.name.clone(),
        wins: tally.wins,
        matches_played: tally.matches_played,
    }
}

fn rank(standings: &mut [StandingEntry]) {
    standings.sort_by_key(|entry| (Reverse(entry.wins), entry.player_id));
}
