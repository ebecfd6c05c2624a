use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Every connection enforces the declared foreign keys.
fn with_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::Error> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    // Drop query parameters such as ?mode=rwc
    let path = path.split('?').next().unwrap_or(path);

    if path == ":memory:" {
        return create_memory_pool();
    }

    let manager = with_foreign_keys(SqliteConnectionManager::file(Path::new(path)));

    Pool::builder().max_size(max_size.max(1)).build(manager)
}

/// A single-connection pool, so every checkout sees the same in-memory database.
pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager = with_foreign_keys(SqliteConnectionManager::memory());
    Pool::builder().max_size(1).build(manager)
}
