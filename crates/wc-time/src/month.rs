//! `Month` — month-of-year enum and the month-length table.

use wc_core::errors::Result;
use wc_core::{ensure, Year};

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

/// Day count of each month in a common year; February is resolved separately.
const MAX_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if no month has that number.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// Whether `year` is a leap year in the Gregorian calendar.
    pub fn is_leap(year: Year) -> bool {
        is_leap_year(year)
    }

    /// Number of days in this month.
    ///
    /// February has no fixed length, so it needs `year`; asking for
    /// February without one fails with `InvalidArgument`.  Every other month
    /// ignores `year`.
    pub fn max_days(&self, year: Option<Year>) -> Result<u8> {
        if *self == Month::February {
            ensure!(
                year.is_some(),
                InvalidArgument,
                "a year is required for the length of February"
            );
        }
        Ok(match year {
            Some(y) => days_in_month(y, *self),
            None => MAX_DAYS[*self as usize - 1],
        })
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u32 {
    fn from(m: Month) -> u32 {
        m as u32
    }
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: Year, month: Month) -> u8 {
    match month {
        Month::February if is_leap_year(year) => 29,
        _ => MAX_DAYS[month as usize - 1],
    }
}
