pub mod absence;
pub mod coordinates;
pub mod punch;
pub mod punch_type;

use chrono::Utc;

/// Shared capability of punch and absence records: a unique creation id and a
/// `dd/mm/yyyy` date. The registers and the filter engine are generic over it.
pub trait Record {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn date(&self) -> &str;
}

/// New record ids derive from the creation timestamp in milliseconds.
/// Uniqueness within a sequence is enforced on append, not here.
pub fn creation_id() -> i64 {
    Utc::now().timestamp_millis()
}
