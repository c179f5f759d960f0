use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Delete record #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = StorePool::new(&cfg.database)?;

        // Unknown id is a no-op by design.
        if DeleteLogic::apply(&pool, *id)? {
            success(format!("Record #{} has been deleted.", id));
        } else {
            info(format!("No record with id {}.", id));
        }
    }

    Ok(())
}
