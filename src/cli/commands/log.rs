use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::pool::StorePool;

/// Print the internal diagnostics log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = StorePool::new(&cfg.database)?;

        let mut stmt = pool
            .conn
            .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        for row in rows {
            let (id, date, operation, target, message) = row?;
            println!("{:>5}  {}  {:<10} {:<10} {}", id, date, operation, target, message);
        }
    }

    Ok(())
}
