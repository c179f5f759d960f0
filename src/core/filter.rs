//! Filter engine: select the subsequence of records falling in a time
//! window. Stable, order-preserving, no deduplication.

use crate::models::Record;
use crate::utils::date::parse_br_date;
use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPeriod {
    Week,
    Month,
    Year,
    All,
}

impl FilterPeriod {
    /// Parse the period selector. Unrecognized input behaves as `All`.
    pub fn from_selector(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "week" => FilterPeriod::Week,
            "month" => FilterPeriod::Month,
            "year" => FilterPeriod::Year,
            _ => FilterPeriod::All,
        }
    }
}

/// Keep the records whose date falls within `period`, measured against the
/// injected `today`. Calendar-date comparison only, time of day ignored.
pub fn filter_records<T>(records: &[T], period: FilterPeriod, today: NaiveDate) -> Vec<T>
where
    T: Record + Clone,
{
    records
        .iter()
        .filter(|r| matches_period(r.date(), period, today))
        .cloned()
        .collect()
}

fn matches_period(date_str: &str, period: FilterPeriod, today: NaiveDate) -> bool {
    if period == FilterPeriod::All {
        return true;
    }

    // Unparseable dates only survive the unfiltered view.
    let Some(date) = parse_br_date(date_str) else {
        return false;
    };

    match period {
        FilterPeriod::Week => {
            // The 7 calendar days ending today, inclusive.
            let start = today - Days::new(6);
            date >= start && date <= today
        }
        FilterPeriod::Month => date.month() == today.month() && date.year() == today.year(),
        FilterPeriod::Year => date.year() == today.year(),
        FilterPeriod::All => true,
    }
}
