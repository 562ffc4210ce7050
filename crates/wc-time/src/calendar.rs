//! `Calendar` trait: working-day classification, range aggregation and
//! stepping.
//!
//! An implementor only answers two questions about a single, already
//! normalized [`Date`]: is it a working day, and how many minutes does it
//! contribute when it is.  Everything else (counting and summing over ranges,
//! months and years, finding the next working day, skipping working days) is
//! provided here on top of those two answers.

use tracing::trace;
use wc_core::errors::{Error, Result};
use wc_core::{ensure, Hours, Minutes, TotalMinutes, Year};

use crate::date::{Date, ToDate};
use crate::month::Month;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Working minutes credited to `date`, assuming it is a working day.
    fn working_minutes(&self, date: Date) -> Minutes;

    /// Normalize `date` and classify it.
    fn is_working(&self, date: impl ToDate) -> Result<bool>
    where
        Self: Sized,
    {
        Ok(self.is_business_day(date.to_date()?))
    }

    // ── Range aggregation ─────────────────────────────────────────────────────

    /// Count working days in `[start, end]`, both ends inclusive.
    ///
    /// Fails with [`Error::RangeOrder`] when `start` is after `end`.
    fn count_working_days_between(&self, start: impl ToDate, end: impl ToDate) -> Result<u32>
    where
        Self: Sized,
    {
        let (start, end) = ordered_range(start, end)?;
        let count = start
            .iter_through(end)
            .filter(|d| self.is_business_day(*d))
            .count() as u32;
        trace!(%start, %end, count, "counted working days");
        Ok(count)
    }

    /// Count working days in the given month.
    fn count_working_days_in_month(&self, year: Year, month: u32) -> Result<u32>
    where
        Self: Sized,
    {
        let (first, last) = month_bounds(year, month)?;
        self.count_working_days_between(first, last)
    }

    /// Count working days in the given year.
    fn count_working_days_in_year(&self, year: Year) -> Result<u32>
    where
        Self: Sized,
    {
        let (first, last) = year_bounds(year)?;
        self.count_working_days_between(first, last)
    }

    /// Sum working minutes over `[start, end]`, both ends inclusive.
    ///
    /// Each working day contributes [`Calendar::working_minutes`]; other
    /// days contribute nothing.
    fn sum_working_minutes_between(
        &self,
        start: impl ToDate,
        end: impl ToDate,
    ) -> Result<TotalMinutes>
    where
        Self: Sized,
    {
        let (start, end) = ordered_range(start, end)?;
        let total: TotalMinutes = start
            .iter_through(end)
            .filter(|d| self.is_business_day(*d))
            .map(|d| TotalMinutes::from(self.working_minutes(d)))
            .sum();
        trace!(%start, %end, total, "summed working minutes");
        Ok(total)
    }

    /// Sum working minutes in the given month.
    fn sum_working_minutes_in_month(&self, year: Year, month: u32) -> Result<TotalMinutes>
    where
        Self: Sized,
    {
        let (first, last) = month_bounds(year, month)?;
        self.sum_working_minutes_between(first, last)
    }

    /// Sum working minutes in the given year.
    fn sum_working_minutes_in_year(&self, year: Year) -> Result<TotalMinutes>
    where
        Self: Sized,
    {
        let (first, last) = year_bounds(year)?;
        self.sum_working_minutes_between(first, last)
    }

    /// [`Calendar::sum_working_minutes_between`] in hours.
    fn sum_working_hours_between(&self, start: impl ToDate, end: impl ToDate) -> Result<Hours>
    where
        Self: Sized,
    {
        Ok(to_hours(self.sum_working_minutes_between(start, end)?))
    }

    /// [`Calendar::sum_working_minutes_in_month`] in hours.
    fn sum_working_hours_in_month(&self, year: Year, month: u32) -> Result<Hours>
    where
        Self: Sized,
    {
        Ok(to_hours(self.sum_working_minutes_in_month(year, month)?))
    }

    /// [`Calendar::sum_working_minutes_in_year`] in hours.
    fn sum_working_hours_in_year(&self, year: Year) -> Result<Hours>
    where
        Self: Sized,
    {
        Ok(to_hours(self.sum_working_minutes_in_year(year)?))
    }

    // ── Stepping ──────────────────────────────────────────────────────────────

    /// The first working day strictly after `date`.
    ///
    /// `date` itself is never returned, even when it is a working day.
    fn next_working_day(&self, date: impl ToDate) -> Result<Date>
    where
        Self: Sized,
    {
        let mut date = date.to_date()?.succ()?;
        while !self.is_business_day(date) {
            date = date.succ()?;
        }
        Ok(date)
    }

    /// Walk forward from `date` until `n` working days have been passed.
    ///
    /// Every working day met on the way, `date` included, uses up one of the
    /// `n`; the result is the day right after the last one used, which need
    /// not be a working day itself.  `n` must be positive.
    fn skip_working_days(&self, date: impl ToDate, n: i64) -> Result<Date>
    where
        Self: Sized,
    {
        let mut date = date.to_date()?;
        ensure!(
            n > 0,
            InvalidArgument,
            "number of working days to skip must be positive, got {n}"
        );
        let mut remaining = n;
        while remaining > 0 {
            if self.is_business_day(date) {
                remaining -= 1;
            }
            date = date.succ()?;
        }
        Ok(date)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Normalize both ends of a range and check their order.
fn ordered_range(start: impl ToDate, end: impl ToDate) -> Result<(Date, Date)> {
    let start = start.to_date()?;
    let end = end.to_date()?;
    if start > end {
        return Err(Error::RangeOrder {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((start, end))
}

/// First and last day of `month` in `year`.
///
/// An unknown month number fails with `InvalidArgument`.
pub fn month_bounds(year: Year, month: u32) -> Result<(Date, Date)> {
    let m = Month::from_number(month).ok_or_else(|| {
        Error::InvalidArgument(format!("month {month} out of range [1, 12]"))
    })?;
    let last = m.max_days(Some(year))?;
    Ok((
        Date::from_ymd(year, month, 1)?,
        Date::from_ymd(year, month, last.into())?,
    ))
}

/// First and last day of `year`.
pub fn year_bounds(year: Year) -> Result<(Date, Date)> {
    let (first, _) = month_bounds(year, Month::January.number())?;
    let (_, last) = month_bounds(year, Month::December.number())?;
    Ok((first, last))
}

fn to_hours(minutes: TotalMinutes) -> Hours {
    minutes as Hours / 60.0
}
