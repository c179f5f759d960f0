use chrono::NaiveDate;
use pontolog::core::filter::{FilterPeriod, filter_records};
use pontolog::models::punch_type::PunchType;

mod common;
use common::punch_record;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn month_filter_distinguishes_month_boundary() {
    // Last day of the previous month vs first day of the current month.
    let records = vec![
        punch_record(1, "29/02/2024", "08:00:00", PunchType::Entrada),
        punch_record(2, "01/03/2024", "08:00:00", PunchType::Entrada),
    ];

    let out = filter_records(&records, FilterPeriod::Month, day(2024, 3, 15));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 2);
}

#[test]
fn week_filter_keeps_the_seven_days_ending_today() {
    let today = day(2024, 3, 1);
    let records = vec![
        punch_record(1, "23/02/2024", "08:00:00", PunchType::Entrada), // 8 days ago
        punch_record(2, "24/02/2024", "08:00:00", PunchType::Entrada), // window start
        punch_record(3, "01/03/2024", "08:00:00", PunchType::Entrada), // today
        punch_record(4, "02/03/2024", "08:00:00", PunchType::Entrada), // tomorrow
    ];

    let out = filter_records(&records, FilterPeriod::Week, today);
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn week_filter_parses_day_before_month() {
    // 03/04 is the 3rd of April, not the 4th of March.
    let today = day(2024, 4, 4);
    let records = vec![punch_record(1, "03/04/2024", "08:00:00", PunchType::Entrada)];

    let out = filter_records(&records, FilterPeriod::Week, today);
    assert_eq!(out.len(), 1);
}

#[test]
fn year_filter_keeps_current_year_only() {
    let records = vec![
        punch_record(1, "31/12/2023", "23:59:59", PunchType::Saida),
        punch_record(2, "01/01/2024", "08:00:00", PunchType::Entrada),
        punch_record(3, "15/06/2024", "08:00:00", PunchType::Entrada),
    ];

    let out = filter_records(&records, FilterPeriod::Year, day(2024, 6, 20));
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn all_keeps_everything_in_order_including_unparseable_dates() {
    let records = vec![
        punch_record(3, "15/06/2024", "08:00:00", PunchType::Entrada),
        punch_record(1, "not-a-date", "08:00:00", PunchType::Entrada),
        punch_record(2, "01/01/2020", "08:00:00", PunchType::Entrada),
    ];

    let out = filter_records(&records, FilterPeriod::All, day(2024, 6, 20));
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    // Stable: input order preserved, nothing dropped.
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn unparseable_dates_are_excluded_from_dated_windows() {
    let records = vec![punch_record(1, "not-a-date", "08:00:00", PunchType::Entrada)];

    assert!(filter_records(&records, FilterPeriod::Week, day(2024, 6, 20)).is_empty());
    assert!(filter_records(&records, FilterPeriod::Year, day(2024, 6, 20)).is_empty());
}

#[test]
fn unrecognized_selector_behaves_as_all() {
    assert_eq!(FilterPeriod::from_selector("week"), FilterPeriod::Week);
    assert_eq!(FilterPeriod::from_selector("MONTH"), FilterPeriod::Month);
    assert_eq!(FilterPeriod::from_selector("year"), FilterPeriod::Year);
    assert_eq!(FilterPeriod::from_selector("all"), FilterPeriod::All);
    assert_eq!(FilterPeriod::from_selector("fortnight"), FilterPeriod::All);
}
