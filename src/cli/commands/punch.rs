use crate::cli::parser::Commands;
use crate::clock::locate;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::{AppError, AppResult};
use crate::models::punch_type::PunchType;
use crate::store::pool::StorePool;
use crate::ui::messages::{info, success};

/// Record a punch. The type defaults to the sequencer's suggestion.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        kind,
        comment,
        location,
        date,
        time,
    } = cmd
    {
        //
        // 1. Parse punch type (optional; None = follow the cycle)
        //
        let kind_parsed = match kind {
            Some(s) => Some(
                PunchType::pt_from_str(s).ok_or_else(|| {
                    AppError::InvalidPunchType(format!(
                        "'{}'. Use entrada, intervalo, volta-intervalo or saida",
                        s
                    ))
                })?,
            ),
            None => None,
        };

        //
        // 2. Open store
        //
        let pool = StorePool::new(&cfg.database)?;

        //
        // 3. Pick the location source for this creation flow
        //
        let locator = locate::provider_for(location.as_ref(), cfg.default_location.as_ref());

        //
        // 4. Execute logic
        //
        let (record, next) = PunchLogic::apply(
            &pool,
            kind_parsed,
            comment.clone(),
            date.clone(),
            time.clone(),
            locator.as_ref(),
        )?;

        success(format!(
            "Recorded {} #{} — {} {} ({})",
            record.kind.label(),
            record.id,
            record.date,
            record.time,
            record.weekday
        ));
        if let Some(loc) = &record.location {
            info(format!("Location: {}", loc));
        }
        info(format!("Next suggested punch: {}", next.label()));
    }

    Ok(())
}
