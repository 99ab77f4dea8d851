pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::pair_adjacent;
pub use standings::calculate_standings;
pub use types::{Entrant, MatchResult, Pairing, PlayerId, StandingEntry};
