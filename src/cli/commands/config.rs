use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("serialize config: {}", e)))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            // A store that was never initialized is not an error condition.
            if !Config::config_file().exists() {
                warning("No config file yet. Run 'pontolog init' to create one.");
                return Ok(());
            }

            let missing = Config::missing_fields()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing config field: {}", field));
                }
            }
        }
    }

    Ok(())
}
