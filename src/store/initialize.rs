use crate::errors::AppResult;
use crate::store::migrate::run_pending_migrations;
use rusqlite::Connection;

/// Initialize the store.
/// Delegates all schema creation to the migration engine.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
