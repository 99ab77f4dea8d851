use log::debug;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players";

/// Creates any missing tables. Existing data is kept.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    execute_script(conn, SCHEMA_SQL)?;
    log::info!("Database schema ready");
    Ok(())
}

/// Drops both tables and recreates them empty.
pub fn reset_database(conn: &Connection) -> rusqlite::Result<()> {
    execute_script(conn, DROP_SQL)?;
    execute_script(conn, SCHEMA_SQL)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

fn execute_script(conn: &Connection, script: &str) -> rusqlite::Result<()> {
    let statements = split_sql_statements(script);

    for (idx, statement) in statements.iter().enumerate() {
        debug!("Executing schema statement {}", idx + 1);
        execute_sql(conn, statement)?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> rusqlite::Result<()> {
    conn.execute(sql, []).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }

    #[test]
    fn test_split_skips_blank_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x INTEGER);\n\n; CREATE TABLE b (y INTEGER);  ");

        assert_eq!(statements, vec!["CREATE TABLE a (x INTEGER)", "CREATE TABLE b (y INTEGER)"]);
    }

    #[test]
    fn test_create_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        create_schema(&conn).unwrap();
        conn.execute("INSERT INTO players (player_name) VALUES ('Ada')", []).unwrap();
        create_schema(&conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
        assert_eq!(table_names(&conn), vec!["matches", "players"]);
    }

    #[test]
    fn test_reset_database_empties_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute("INSERT INTO players (player_name) VALUES ('Ada')", []).unwrap();

        reset_database(&conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_schema_rejects_self_match() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute("INSERT INTO players (player_name) VALUES ('Ada')", []).unwrap();

        let result = conn.execute("INSERT INTO matches (winner, loser) VALUES (1, 1)", []);

        assert!(result.is_err());
    }
}
