use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;
use crate::swiss::PlayerId;

pub fn insert_player(conn: &Connection, name: &str) -> rusqlite::Result<Player> {
    let sql = "INSERT INTO players (player_name) VALUES (?1) RETURNING player_id, player_name";

    conn.query_row(sql, params![name], parse_player_row)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> rusqlite::Result<Option<Player>> {
    let sql = "SELECT player_id, player_name FROM players WHERE player_id = ?1";

    conn.query_row(sql, params![id], parse_player_row).optional()
}

pub fn list_all(conn: &Connection) -> rusqlite::Result<Vec<Player>> {
    let sql = "SELECT player_id, player_name FROM players ORDER BY player_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> rusqlite::Result<usize> {
    let sql = "SELECT COUNT(player_id) FROM players";
    let count: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Removes every player. Their matches go with them via `ON DELETE CASCADE`.
pub fn delete_all(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM players", [])
}
