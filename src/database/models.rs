use crate::swiss::{Entrant, MatchResult, PlayerId};

pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl From<&Player> for Entrant {
    fn from(player: &Player) -> Self {
        Entrant {
            id: player.id,
            name: player.name.clone(),
        }
    }
}

impl From<&Match> for MatchResult {
    fn from(record: &Match) -> Self {
        MatchResult {
            winner_id: record.winner,
            loser_id: record.loser,
        }
    }
}
