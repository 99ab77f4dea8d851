use std::time::Duration;

pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";
pub const IN_MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub database_path: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
    pub busy_timeout: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(2_000),
        }
    }
}

impl StoreSettings {
    /// Defaults, with the database path taken from `DATABASE_PATH` when set.
    pub fn from_env() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        Self {
            database_path,
            ..Self::default()
        }
    }

    /// A private in-memory database. The pool is pinned to a single
    /// connection since every SQLite memory connection is its own database.
    pub fn in_memory() -> Self {
        Self {
            database_path: IN_MEMORY_PATH.to_string(),
            pool_size: 1,
            ..Self::default()
        }
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY_PATH
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            store: StoreSettings::from_env(),
        }
    }
}
