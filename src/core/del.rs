use crate::errors::AppResult;
use crate::models::absence::AbsenceRecord;
use crate::models::punch::PunchRecord;
use crate::store::log::plog;
use crate::store::pool::StorePool;
use crate::store::register::{ABSENCES_KEY, PUNCHES_KEY, Register};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove `id` from whichever sequence holds it. The sequences are
    /// independent, so both are checked. Returns whether anything was
    /// removed; an unknown id is a no-op.
    pub fn apply(pool: &StorePool, id: i64) -> AppResult<bool> {
        let mut removed = false;

        let mut punches = Register::<PunchRecord>::open(&pool.conn, PUNCHES_KEY)?;
        if punches.contains(id) {
            punches.remove_by_id(id)?;
            plog(
                &pool.conn,
                "del",
                PUNCHES_KEY,
                &format!("Deleted record #{}", id),
            )?;
            removed = true;
        }

        let mut absences = Register::<AbsenceRecord>::open(&pool.conn, ABSENCES_KEY)?;
        if absences.contains(id) {
            absences.remove_by_id(id)?;
            plog(
                &pool.conn,
                "del",
                ABSENCES_KEY,
                &format!("Deleted record #{}", id),
            )?;
            removed = true;
        }

        Ok(removed)
    }
}
