use crate::errors::{Result, TournamentError};

use super::types::{Pairing, StandingEntry};

const MIN_PLAYERS: usize = 2;

/// Pairs rank 2k with rank 2k+1 over the given standings.
///
/// Fails with `InsufficientPlayers` below two entries and with
/// `OddPlayerCount` when one player would be left without an opponent.
pub fn pair_adjacent(standings: &[StandingEntry]) -> Result<Vec<Pairing>> {
    check_pairable(standings.len())?;

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_entries(&pair[0], &pair[1]))
        .collect())
}

fn check_pairable(count: usize) -> Result<()> {
    if count < MIN_PLAYERS {
        return Err(TournamentError::InsufficientPlayers { count });
    }
    if count % 2 != 0 {
        return Err(TournamentError::OddPlayerCount { count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings(n: i64) -> Vec<StandingEntry> {
        (1..=n)
            .map(|id| StandingEntry {
                player_id: id,
                name: format!("player {id}"),
                wins: 0,
                matches_played: 0,
            })
            .collect()
    }

    #[test]
    fn test_pairs_adjacent_ranks_in_order() {
        let pairings = pair_adjacent(&standings(4)).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].player_one_id, pairings[0].player_two_id), (1, 2));
        assert_eq!((pairings[1].player_one_id, pairings[1].player_two_id), (3, 4));
        assert_eq!(pairings[1].player_two_name, "player 4");
    }

    #[test]
    fn test_every_player_appears_exactly_once() {
        for n in (2..=16).step_by(2) {
            let table = standings(n);
            let pairings = pair_adjacent(&table).unwrap();

            assert_eq!(pairings.len(), (n / 2) as usize);
            for entry in &table {
                let appearances = pairings.iter().filter(|p| p.contains(entry.player_id)).count();
                assert_eq!(appearances, 1, "player {} in {n}-player field", entry.player_id);
            }
        }
    }

    #[test]
    fn test_fewer_than_two_players_is_insufficient() {
        assert!(matches!(
            pair_adjacent(&[]),
            Err(TournamentError::InsufficientPlayers { count: 0 })
        ));
        assert!(matches!(
            pair_adjacent(&standings(1)),
            Err(TournamentError::InsufficientPlayers { count: 1 })
        ));
    }

    #[test]
    fn test_odd_player_count_is_reported() {
        assert!(matches!(
            pair_adjacent(&standings(3)),
            Err(TournamentError::OddPlayerCount { count: 3 })
        ));
        assert!(matches!(
            pair_adjacent(&standings(7)),
            Err(TournamentError::OddPlayerCount { count: 7 })
        ));
    }
}
