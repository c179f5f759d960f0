use crate::clock::ClockFacts;
use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceRecord;
use crate::models::creation_id;
use crate::store::log::plog;
use crate::store::pool::StorePool;
use crate::store::register::{ABSENCES_KEY, Register};
use crate::utils::date::parse_br_date;

/// High-level business logic for the `absence` command.
pub struct AbsenceLogic;

impl AbsenceLogic {
    pub fn apply(
        pool: &StorePool,
        comment: String,
        file_name: Option<String>,
        date_override: Option<String>,
    ) -> AppResult<AbsenceRecord> {
        let mut register = Register::<AbsenceRecord>::open(&pool.conn, ABSENCES_KEY)?;

        let date = match date_override {
            Some(d) => {
                parse_br_date(&d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                d
            }
            None => ClockFacts::now().date,
        };

        // Only the file *name* is kept; "no file" stays None, never "".
        let file_name = file_name.filter(|n| !n.is_empty());

        let record = AbsenceRecord::new(creation_id(), date, comment, file_name);
        let stored = register.append(record)?;

        plog(
            &pool.conn,
            "absence",
            ABSENCES_KEY,
            &format!("Recorded absence #{} on {}", stored.id, stored.date),
        )?;

        Ok(stored)
    }
}
