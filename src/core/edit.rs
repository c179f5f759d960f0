use crate::clock::weekday_name;
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchRecord;
use crate::store::log::plog;
use crate::store::pool::StorePool;
use crate::store::register::{PUNCHES_KEY, Register};
use crate::utils::date::{format_time, parse_br_date, parse_time};

/// In-place edit of a punch record: date, time and comment may change, the
/// record keeps its id and position in the sequence.
pub struct EditLogic;

impl EditLogic {
    /// Returns whether a record with `id` was found. An unknown id leaves
    /// the sequence untouched and is not an error.
    pub fn apply(
        pool: &StorePool,
        id: i64,
        new_date: Option<String>,
        new_time: Option<String>,
        new_comment: Option<String>,
    ) -> AppResult<bool> {
        // Validate up front so a bad format never half-applies.
        let new_date = match new_date {
            Some(d) => {
                let parsed = parse_br_date(&d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                Some((d, weekday_name(parsed).to_string()))
            }
            None => None,
        };
        let new_time = match new_time {
            Some(t) => {
                let parsed = parse_time(&t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
                Some(format_time(parsed))
            }
            None => None,
        };

        let mut register = Register::<PunchRecord>::open(&pool.conn, PUNCHES_KEY)?;

        let found = register.update_by_id(id, |rec| {
            if let Some((date, weekday)) = new_date {
                rec.date = date;
                rec.weekday = weekday;
            }
            if let Some(time) = new_time {
                rec.time = time;
            }
            if let Some(comment) = new_comment {
                rec.comment = if comment.is_empty() {
                    None
                } else {
                    Some(comment)
                };
            }
        })?;

        if found {
            plog(
                &pool.conn,
                "edit",
                PUNCHES_KEY,
                &format!("Edited record #{}", id),
            )?;
        }

        Ok(found)
    }
}
