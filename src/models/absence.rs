use super::Record;
use serde::{Deserialize, Serialize};

/// One absence justification. Only the *name* of an attached file is kept as
/// a label; an absent attachment is `None` (JSON `null`), never an empty
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceRecord {
    pub id: i64,
    pub date: String, // dd/mm/yyyy
    pub comment: String,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

impl AbsenceRecord {
    pub fn new(id: i64, date: String, comment: String, file_name: Option<String>) -> Self {
        Self {
            id,
            date,
            comment,
            file_name,
        }
    }
}

impl Record for AbsenceRecord {
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
