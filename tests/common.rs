#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plg() -> Command {
    cargo_bin_cmd!("pontolog")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pontolog.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Open a store directly via the library API (creates the schema).
pub fn open_store(path: &str) -> rusqlite::Connection {
    let conn = rusqlite::Connection::open(path).expect("open store");
    pontolog::store::migrate::run_pending_migrations(&conn).expect("init store");
    conn
}

/// Build a punch record with fixed fields for library-level tests.
pub fn punch_record(
    id: i64,
    date: &str,
    time: &str,
    kind: pontolog::models::punch_type::PunchType,
) -> pontolog::models::punch::PunchRecord {
    pontolog::models::punch::PunchRecord {
        id,
        date: date.to_string(),
        time: time.to_string(),
        weekday: "Sexta-feira".to_string(),
        kind,
        location: None,
        comment: None,
    }
}
