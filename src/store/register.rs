//! The record store proper: one ordered sequence of records per logical key,
//! persisted as a single JSON array, with an in-memory mirror kept
//! write-through consistent with the durable value.

use crate::errors::AppResult;
use crate::models::Record;
use crate::store::{kv, log};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the punch-record sequence.
pub const PUNCHES_KEY: &str = "punches";
/// Storage key for the absence-record sequence.
pub const ABSENCES_KEY: &str = "absences";
/// Storage key for the last-punch-type scalar.
pub const LAST_PUNCH_TYPE_KEY: &str = "last_punch_type";

pub struct Register<'c, T> {
    conn: &'c Connection,
    key: &'static str,
    records: Vec<T>,
}

impl<'c, T> Register<'c, T>
where
    T: Record + Serialize + DeserializeOwned + Clone,
{
    /// Load the sequence stored under `key`. A missing or unreadable value
    /// degrades to an empty sequence: old data must never prevent the user
    /// from creating new records. Corruption leaves a diagnostics row.
    pub fn open(conn: &'c Connection, key: &'static str) -> AppResult<Self> {
        let records = match kv::get(conn, key)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(seq) => seq,
                Err(e) => {
                    log::plog(
                        conn,
                        "recover",
                        key,
                        &format!("Unreadable record sequence, starting empty: {}", e),
                    )?;
                    Vec::new()
                }
            },
        };

        Ok(Self { conn, key, records })
    }

    /// The in-memory mirror, in creation order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.find_index(id).is_some()
    }

    /// Append at the end and write the whole sequence back. The mirror is
    /// updated before returning. An id already present in the sequence is
    /// bumped upward until unique so no record is silently overwritten.
    /// Returns the record as stored (with its final id).
    pub fn append(&mut self, mut record: T) -> AppResult<T> {
        while self.contains(record.id()) {
            record.set_id(record.id() + 1);
        }

        let stored = record.clone();
        self.records.push(record);
        self.persist()?;

        Ok(stored)
    }

    /// Remove the record with the given id, if any, and write back.
    /// Removing an unknown id is a no-op. Returns the resulting sequence.
    pub fn remove_by_id(&mut self, id: i64) -> AppResult<&[T]> {
        if let Some(idx) = self.find_index(id) {
            self.records.remove(idx);
            self.persist()?;
        }
        Ok(&self.records)
    }

    /// Mutate the record with the given id in place (same index) and write
    /// back. Returns whether a match was found; when not found the stored
    /// value is untouched.
    pub fn update_by_id<F>(&mut self, id: i64, mutate: F) -> AppResult<bool>
    where
        F: FnOnce(&mut T),
    {
        match self.find_index(id) {
            Some(idx) => {
                mutate(&mut self.records[idx]);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn find_index(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn persist(&self) -> AppResult<()> {
        let encoded = serde_json::to_string(&self.records)?;
        kv::set(self.conn, self.key, &encoded)
    }
}
