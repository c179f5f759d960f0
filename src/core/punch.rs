use crate::clock::locate::LocationProvider;
use crate::clock::{ClockFacts, weekday_name};
use crate::errors::{AppError, AppResult};
use crate::models::creation_id;
use crate::models::punch::PunchRecord;
use crate::models::punch_type::PunchType;
use crate::store::log::plog;
use crate::store::pool::StorePool;
use crate::store::register::{PUNCHES_KEY, Register};
use crate::ui::messages::warning;
use crate::utils::date::{format_time, parse_br_date, parse_time};

/// High-level business logic for the `punch` command: one creation flow from
/// clock facts to the persisted record and the advanced sequencer.
pub struct PunchLogic;

impl PunchLogic {
    pub fn apply(
        pool: &StorePool,
        kind: Option<PunchType>,
        comment: Option<String>,
        date_override: Option<String>,
        time_override: Option<String>,
        locator: &dyn LocationProvider,
    ) -> AppResult<(PunchRecord, PunchType)> {
        let mut register = Register::<PunchRecord>::open(&pool.conn, PUNCHES_KEY)?;
        let mut sequencer = crate::core::sequencer::Sequencer::open(&pool.conn)?;

        // Explicit type wins; otherwise follow the cycle.
        let kind = kind.unwrap_or_else(|| sequencer.suggest_next());

        let mut facts = ClockFacts::now();

        // Manual backfill: validate overrides, keep the weekday derived.
        if let Some(d) = date_override {
            let parsed = parse_br_date(&d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            facts.date = d;
            facts.weekday = weekday_name(parsed).to_string();
        }
        if let Some(t) = time_override {
            let parsed = parse_time(&t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
            facts.time = format_time(parsed);
        }

        // Location is always optional: a failed fix is logged, never fatal.
        let location = match locator.current_location() {
            Ok(fix) => fix,
            Err(reason) => {
                warning(format!("Could not acquire location: {}", reason));
                plog(&pool.conn, "location", PUNCHES_KEY, &reason)?;
                None
            }
        };

        let record = PunchRecord::new(creation_id(), &facts, kind, location, comment);
        let stored = register.append(record)?;

        sequencer.record(kind)?;

        plog(
            &pool.conn,
            "punch",
            PUNCHES_KEY,
            &format!(
                "Recorded {} #{} on {} {}",
                kind.label(),
                stored.id,
                stored.date,
                stored.time
            ),
        )?;

        Ok((stored, sequencer.suggest_next()))
    }
}
