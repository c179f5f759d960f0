use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::absence::AbsenceLogic;
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::ui::messages::{info, success};

/// Record an absence justification.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Absence {
        comment,
        file,
        date,
    } = cmd
    {
        let pool = StorePool::new(&cfg.database)?;

        let record = AbsenceLogic::apply(&pool, comment.clone(), file.clone(), date.clone())?;

        success(format!(
            "Recorded absence #{} on {}",
            record.id, record.date
        ));
        match &record.file_name {
            Some(name) => info(format!("Attached file: {}", name)),
            None => info("No file attached"),
        }
    }

    Ok(())
}
