//! Clock facts: current date, time and weekday as the formatted strings the
//! records store (`dd/mm/yyyy`, `HH:MM:SS`, pt-BR weekday name).

pub mod locate;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Fixed weekday table, Sunday-indexed.
const WEEKDAYS: [&str; 7] = [
    "Domingo",
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
];

#[derive(Debug, Clone)]
pub struct ClockFacts {
    pub date: String,
    pub time: String,
    pub weekday: String,
}

impl ClockFacts {
    /// Facts for the current instant, from the local system clock.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            date: dt.format("%d/%m/%Y").to_string(),
            time: dt.format("%H:%M:%S").to_string(),
            weekday: weekday_name(dt.date()).to_string(),
        }
    }
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}
