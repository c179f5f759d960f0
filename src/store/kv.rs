//! The durable key-value boundary: string keys to string values, one row per
//! key. Each record sequence lives whole under its key as one JSON array, so
//! every mutation rewrites the full value (no deltas).

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value])?;
    Ok(())
}
