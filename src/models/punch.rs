use super::Record;
use super::coordinates::Coordinates;
use super::punch_type::PunchType;
use crate::clock::ClockFacts;
use serde::{Deserialize, Serialize};

/// One clock event. Field names mirror the stored JSON shape:
/// `type`, `week` and `comentario` keep sequences written by earlier
/// versions readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRecord {
    pub id: i64,
    pub date: String, // dd/mm/yyyy
    pub time: String, // HH:MM:SS
    #[serde(rename = "week")]
    pub weekday: String,
    #[serde(rename = "type")]
    pub kind: PunchType,
    pub location: Option<Coordinates>,
    #[serde(rename = "comentario")]
    pub comment: Option<String>,
}

impl PunchRecord {
    pub fn new(
        id: i64,
        facts: &ClockFacts,
        kind: PunchType,
        location: Option<Coordinates>,
        comment: Option<String>,
    ) -> Self {
        Self {
            id,
            date: facts.date.clone(),
            time: facts.time.clone(),
            weekday: facts.weekday.clone(),
            kind,
            location,
            comment,
        }
    }
}

impl Record for PunchRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn date(&self) -> &str {
        &self.date
    }
}
