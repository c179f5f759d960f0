use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::initialize::init_store;
use crate::store::log;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite store (prod or test mode)
///  - all pending store migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let store_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing pontolog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Store       : {}", &store_path);

    let conn = Connection::open(&store_path)?;
    init_store(&conn)?;

    println!("✅ Store initialized at {}", &store_path);

    // Internal log (non-blocking)
    if let Err(e) = log::plog(
        &conn,
        "init",
        "store",
        &format!("Store initialized at {}", &store_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 pontolog initialization completed!");
    Ok(())
}
