use log::debug;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::StoreSettings;
use crate::errors::{Result, TournamentError};

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Opens the store. Fails with `Connectivity` when no connection can be
/// established within the configured timeout.
pub fn create_pool(settings: &StoreSettings) -> Result<DbPool> {
    validate(settings)?;
    let manager = build_manager(settings);
    build_pool(manager, settings)
}

fn validate(settings: &StoreSettings) -> Result<()> {
    if settings.pool_size == 0 {
        return Err(TournamentError::Config("pool size must be at least 1".to_string()));
    }
    Ok(())
}

fn build_manager(settings: &StoreSettings) -> SqliteConnectionManager {
    let busy_timeout = settings.busy_timeout;
    let manager = if settings.is_in_memory() {
        SqliteConnectionManager::memory()
    } else {
        SqliteConnectionManager::file(&settings.database_path)
    };

    manager.with_init(move |conn| configure_connection(conn, busy_timeout))
}

fn configure_connection(conn: &mut Connection, busy_timeout: std::time::Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

fn build_pool(manager: SqliteConnectionManager, settings: &StoreSettings) -> Result<DbPool> {
    let mut builder = r2d2::Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(settings.connection_timeout);

    // A recycled memory connection would come back as an empty database.
    if settings.is_in_memory() {
        builder = builder.idle_timeout(None).max_lifetime(None);
    }

    let pool = builder.build(manager)?;

    debug!("Opened store at {}", settings.database_path);
    Ok(pool)
}

/// Checks out a connection; it returns to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    Ok(pool.get()?)
}
