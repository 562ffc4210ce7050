//! Fixtures shared by the integration tests.
//!
//! The scenarios all start from an *open* calendar (no weekends, no holidays,
//! no extra working days, 480 minutes a day) and then switch on the pieces
//! under test.

#![allow(dead_code)]

use wc_time::{Date, WorkingCalendar};

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Weekend days used throughout: Saturday and Sunday, given as ISO numbers.
pub const WEEKENDS: [i32; 2] = [6, 7];

/// Holidays inside the 2018-03-01 .. 2018-03-12 window (Thursday, Friday).
pub fn march_holidays() -> Vec<Date> {
    vec![date(2018, 3, 8), date(2018, 3, 9)]
}

/// Extra working days inside the same window (Thursday, Saturday).
pub fn march_working_days() -> Vec<Date> {
    vec![date(2018, 3, 8), date(2018, 3, 10)]
}

/// Holidays in February of a common (2018) and a leap (2020) year.
pub fn february_holidays() -> Vec<Date> {
    vec![date(2018, 2, 23), date(2020, 2, 23)]
}

/// Extra working days in February 2018 and 2020.
pub fn february_working_days() -> Vec<Date> {
    vec![
        date(2018, 2, 23),
        date(2020, 2, 23),
        date(2018, 2, 3),
        date(2020, 2, 1),
    ]
}

/// A calendar where every day is a working day of 480 minutes.
pub fn open_calendar() -> WorkingCalendar {
    let mut cal = WorkingCalendar::new();
    cal.clear_weekends();
    cal
}

/// The progression every scenario walks through.
#[derive(Debug, Clone, Copy)]
pub enum Setup {
    Open,
    Weekends,
    Holidays,
    WeekendsAndHolidays,
    WeekendsHolidaysAndWorkingDays,
}

impl Setup {
    pub const ALL: [Setup; 5] = [
        Setup::Open,
        Setup::Weekends,
        Setup::Holidays,
        Setup::WeekendsAndHolidays,
        Setup::WeekendsHolidaysAndWorkingDays,
    ];

    /// Build the calendar for this step with the given holidays and extra
    /// working days and `minutes` of ordinary working time.
    pub fn calendar(self, holidays: &[Date], working_days: &[Date], minutes: i64) -> WorkingCalendar {
        let mut cal = open_calendar();
        cal.update_working_time_minutes(minutes).unwrap();
        let (weekends, with_holidays, with_working_days) = match self {
            Setup::Open => (false, false, false),
            Setup::Weekends => (true, false, false),
            Setup::Holidays => (false, true, false),
            Setup::WeekendsAndHolidays => (true, true, false),
            Setup::WeekendsHolidaysAndWorkingDays => (true, true, true),
        };
        if weekends {
            cal.extend_weekends(WEEKENDS).unwrap();
        }
        if with_holidays {
            cal.extend_holidays(holidays).unwrap();
        }
        if with_working_days {
            cal.extend_working_days(working_days).unwrap();
        }
        cal
    }
}
