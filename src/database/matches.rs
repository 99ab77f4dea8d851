use rusqlite::{params, Connection};

use super::models::Match;
use crate::swiss::PlayerId;

pub fn insert_match(conn: &Connection, winner: PlayerId, loser: PlayerId) -> rusqlite::Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING match_id, winner, loser";

    conn.query_row(sql, params![winner, loser], parse_match_row)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
    })
}

pub fn list_all(conn: &Connection) -> rusqlite::Result<Vec<Match>> {
    let sql = "SELECT match_id, winner, loser FROM matches ORDER BY match_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM matches", [])
}
