//! `Date` type and date normalization.
//!
//! A [`Date`] is a day in the proleptic Gregorian calendar between
//! 0001-01-01 and 9999-12-31.  Besides the calendar fields every date has an
//! **ordinal**: the number of days since the epoch, where ordinal 1 is
//! 0001-01-01.  This is the same count as
//! [`chrono::Datelike::num_days_from_ce`], so ordinals can be exchanged with
//! other tools using that convention.
//!
//! Public calendar operations accept anything implementing [`ToDate`] and
//! normalize it once on entry.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use wc_core::errors::{Error, Result};
use wc_core::{ensure, Year};

use crate::weekday::Weekday;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Ordinal of the first supported date, 0001-01-01.
    pub const MIN_ORDINAL: i32 = 1;

    /// Ordinal of the last supported date, 9999-12-31.
    pub const MAX_ORDINAL: i32 = 3_652_059;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12) and day-of-month.
    pub fn from_ymd(year: Year, month: u32, day: u32) -> Result<Self> {
        ensure!(
            (1..=9999).contains(&year),
            InvalidDate,
            "year {year} out of range [1, 9999]"
        );
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::InvalidDate(format!("{year}-{month:02}-{day:02} does not exist")))
    }

    /// Create a date from its ordinal (1 = 0001-01-01).
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        ensure!(
            (Self::MIN_ORDINAL as i64..=Self::MAX_ORDINAL as i64).contains(&ordinal),
            InvalidDate,
            "ordinal {ordinal} out of range [{}, {}]",
            Self::MIN_ORDINAL,
            Self::MAX_ORDINAL
        );
        NaiveDate::from_num_days_from_ce_opt(ordinal as i32)
            .map(Date)
            .ok_or_else(|| Error::InvalidDate(format!("ordinal {ordinal} has no date")))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the ordinal (days since the epoch, 0001-01-01 = 1).
    pub fn ordinal(&self) -> i32 {
        self.0.num_days_from_ce()
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Return the ISO weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// Borrow the underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// The following calendar day.
    ///
    /// Fails with `InvalidDate` past 9999-12-31.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Move by `n` calendar days (negative moves backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        Self::from_ordinal(self.ordinal() as i64 + n).map_err(|_| {
            Error::InvalidDate(format!("{self} moved by {n} days leaves the supported range"))
        })
    }

    /// Number of calendar days from `self` to `other` (positive if `other`
    /// is later).
    pub fn days_until(self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Every date from `self` through `end`, both inclusive.
    ///
    /// Empty when `end` is before `self`.
    pub fn iter_through(self, end: Date) -> impl Iterator<Item = Date> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= end.0)
            .map(Date)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> NaiveDate {
        d.0
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        Date::from_ymd(d.year(), d.month(), d.day())
    }
}

// ── Normalization ─────────────────────────────────────────────────────────────

/// Anything accepted where a date is expected.
///
/// Implemented for [`Date`], [`chrono::NaiveDate`], [`chrono::NaiveDateTime`]
/// (only the date part is kept) and the integer types, which are read as
/// ordinals (see [`Date::from_ordinal`]).
pub trait ToDate {
    /// Normalize into a [`Date`], or fail with [`Error::InvalidDate`].
    fn to_date(self) -> Result<Date>;
}

impl ToDate for Date {
    fn to_date(self) -> Result<Date> {
        Ok(self)
    }
}

impl ToDate for &Date {
    fn to_date(self) -> Result<Date> {
        Ok(*self)
    }
}

impl ToDate for NaiveDate {
    fn to_date(self) -> Result<Date> {
        Date::try_from(self)
    }
}

impl ToDate for &NaiveDate {
    fn to_date(self) -> Result<Date> {
        Date::try_from(*self)
    }
}

impl ToDate for NaiveDateTime {
    fn to_date(self) -> Result<Date> {
        Date::try_from(self.date())
    }
}

impl ToDate for i64 {
    fn to_date(self) -> Result<Date> {
        Date::from_ordinal(self)
    }
}

impl ToDate for i32 {
    fn to_date(self) -> Result<Date> {
        Date::from_ordinal(self.into())
    }
}

impl ToDate for u32 {
    fn to_date(self) -> Result<Date> {
        Date::from_ordinal(self.into())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1, 1, 1).ordinal(), 1);
        assert_eq!(date(9999, 12, 31).ordinal(), Date::MAX_ORDINAL);
        // 2018-03-01 has ordinal 736754 under the 0001-01-01 = 1 convention.
        assert_eq!(date(2018, 3, 1).ordinal(), 736_754);
    }

    #[test]
    fn test_ordinal_roundtrip() {
        for (y, m, d) in [(1, 1, 1), (1900, 2, 28), (2000, 2, 29), (2020, 12, 31)] {
            let dt = date(y, m, d);
            assert_eq!(Date::from_ordinal(dt.ordinal() as i64).unwrap(), dt);
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(Date::from_ordinal(0), Err(Error::InvalidDate(_))));
        assert!(matches!(
            Date::from_ordinal(Date::MAX_ORDINAL as i64 + 1),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(Date::from_ymd(2018, 2, 29), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(0, 1, 1), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(2018, 13, 1), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2018, 3, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2018, 3, 3).weekday(), Weekday::Saturday);
        assert_eq!(date(2018, 3, 4).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2020, 2, 28);
        assert_eq!(d.succ().unwrap(), date(2020, 2, 29));
        assert_eq!(d.add_days(2).unwrap(), date(2020, 3, 1));
        assert_eq!(d.add_days(-59).unwrap(), date(2019, 12, 31));
        assert_eq!(d.days_until(date(2020, 3, 1)), 2);
        assert!(matches!(date(9999, 12, 31).succ(), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_iter_through() {
        let start = date(2018, 3, 1);
        let days: Vec<Date> = start.iter_through(date(2018, 3, 12)).collect();
        assert_eq!(days.len(), 12);
        assert_eq!(days[11], date(2018, 3, 12));
        assert_eq!(start.iter_through(start).count(), 1);
        assert_eq!(start.iter_through(date(2018, 2, 28)).count(), 0);
    }

    #[test]
    fn test_normalization() {
        let naive = NaiveDate::from_ymd_opt(2018, 3, 1).unwrap();
        let dt = naive.and_hms_opt(17, 30, 0).unwrap();
        assert_eq!(naive.to_date().unwrap(), date(2018, 3, 1));
        assert_eq!(dt.to_date().unwrap(), date(2018, 3, 1));
        assert_eq!(736_754i64.to_date().unwrap(), date(2018, 3, 1));
        assert_eq!(736_754u32.to_date().unwrap(), date(2018, 3, 1));
        assert!(matches!((-5i32).to_date(), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2018, 3, 1).to_string(), "2018-03-01");
        assert_eq!(format!("{:?}", date(7, 1, 9)), "Date(0007-01-09)");
    }
}
