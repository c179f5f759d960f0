use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::ui::messages::{info, success};

/// Edit a punch record in place by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        comment,
    } = cmd
    {
        let pool = StorePool::new(&cfg.database)?;

        let found = EditLogic::apply(&pool, *id, date.clone(), time.clone(), comment.clone())?;

        // Unknown id is a quiet no-op, not an error: the visible list and
        // the store are assumed already consistent.
        if found {
            success(format!("Record #{} updated.", id));
        } else {
            info(format!("No record with id {}.", id));
        }
    }

    Ok(())
}
