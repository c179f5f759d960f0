//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct StorePool {
    pub conn: Connection,
}

impl StorePool {
    /// Open the store and make sure its schema exists. Every command goes
    /// through here, so a missing or fresh store never blocks an operation.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        crate::store::migrate::run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
