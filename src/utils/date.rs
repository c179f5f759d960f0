//! Date/time helpers for the dd/mm/yyyy and HH:MM:SS storage formats.

use chrono::{NaiveDate, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a stored dd/mm/yyyy date. Day comes before month.
pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

pub fn format_br_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}
