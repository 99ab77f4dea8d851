use serde::Serialize;

pub type PlayerId = i64;

/// A registered player as seen by the standings calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrant {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

/// One row of the standings table. `wins` never exceeds `matches_played`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

/// Two rank-adjacent players drawn against each other for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub player_one_id: PlayerId,
    pub player_one_name: String,
    pub player_two_id: PlayerId,
    pub player_two_name: String,
}

impl Pairing {
    pub fn from_entries(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            player_one_id: first.player_id,
            player_one_name: first.name.clone(),
            player_two_id: second.player_id,
            player_two_name: second.name.clone(),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.player_one_id == player_id || self.player_two_id == player_id
    }
}
