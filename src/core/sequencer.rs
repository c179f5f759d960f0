//! Punch-type sequencer: a fixed cycle over the four punch kinds, driven by
//! the persisted last-punch-type scalar. The sequencer only *suggests* the
//! next kind; the user may record any kind out of order.

use crate::errors::AppResult;
use crate::models::punch_type::PunchType;
use crate::store::kv;
use crate::store::register::LAST_PUNCH_TYPE_KEY;
use rusqlite::Connection;

pub struct Sequencer<'c> {
    conn: &'c Connection,
    last: Option<PunchType>,
}

impl<'c> Sequencer<'c> {
    /// Read the persisted last punch type. An unknown stored value degrades
    /// to "no history" rather than failing.
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        let last = kv::get(conn, LAST_PUNCH_TYPE_KEY)?
            .as_deref()
            .and_then(PunchType::from_store_str);

        Ok(Self { conn, last })
    }

    pub fn last(&self) -> Option<PunchType> {
        self.last
    }

    /// The suggested type for the next punch. First-ever use suggests
    /// `Entrada`; otherwise the successor of the last recorded type.
    pub fn suggest_next(&self) -> PunchType {
        suggest_after(self.last)
    }

    /// Persist `kind` as the last recorded type after a punch is stored.
    pub fn record(&mut self, kind: PunchType) -> AppResult<()> {
        kv::set(self.conn, LAST_PUNCH_TYPE_KEY, kind.to_store_str())?;
        self.last = Some(kind);
        Ok(())
    }
}

/// Pure successor lookup, wrapping from `Saída` back to `Entrada`.
pub fn suggest_after(last: Option<PunchType>) -> PunchType {
    match last {
        Some(kind) => kind.successor(),
        None => PunchType::Entrada,
    }
}
