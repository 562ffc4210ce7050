//! Working calendar — weekends, holidays, extra working days and per-day
//! working time, all configured at run time.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;
use wc_core::errors::Result;
use wc_core::{ensure, Minutes};

use crate::calendar::Calendar;
use crate::date::{Date, ToDate};
use crate::weekday::{ToWeekday, Weekday};

/// Working time of an ordinary working day unless configured otherwise.
pub const DEFAULT_WORKING_TIME_MINUTES: Minutes = 8 * 60;

/// Upper bound for the ordinary working time: a whole day.
pub const MAX_WORKING_TIME_MINUTES: Minutes = 24 * 60;

/// A calendar whose non-working days are configured at run time.
///
/// A date is a working day when, checked in this order:
/// 1. it was added as an extra working day → working;
/// 2. it was added as a holiday → not working;
/// 3. its weekday is a weekend → not working;
/// 4. otherwise → working.
///
/// Working days contribute [`WorkingCalendar::working_time_minutes`] minutes to
/// the totals, unless the date carries its own override (a *not standard
/// working day*).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingCalendar {
    working_days: HashSet<Date>,
    holidays: HashSet<Date>,
    weekends: BTreeSet<Weekday>,
    not_standard_working_days: HashMap<Date, Minutes>,
    working_time_minutes: Minutes,
}

impl WorkingCalendar {
    /// Saturday and Sunday weekends, 480 working minutes, nothing else.
    pub fn new() -> Self {
        Self {
            working_days: HashSet::new(),
            holidays: HashSet::new(),
            weekends: BTreeSet::from([Weekday::Saturday, Weekday::Sunday]),
            not_standard_working_days: HashMap::new(),
            working_time_minutes: DEFAULT_WORKING_TIME_MINUTES,
        }
    }

    /// Start configuring a calendar.
    pub fn builder() -> WorkingCalendarBuilder {
        WorkingCalendarBuilder::new()
    }

    // ── Holidays ──────────────────────────────────────────────────────────────

    /// Add a holiday.  Adding an existing holiday is a no-op.
    pub fn add_holiday(&mut self, date: impl ToDate) -> Result<()> {
        let date = date.to_date()?;
        debug!(%date, "add holiday");
        self.holidays.insert(date);
        Ok(())
    }

    /// Add every date of `dates` as a holiday.
    ///
    /// Nothing is added if any of them is not a valid date.
    pub fn extend_holidays<I>(&mut self, dates: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToDate,
    {
        let dates = collect_dates(dates)?;
        debug!(count = dates.len(), "extend holidays");
        self.holidays.extend(dates);
        Ok(())
    }

    /// Remove a holiday.  Removing a date that is not a holiday is a no-op.
    pub fn remove_holiday(&mut self, date: impl ToDate) -> Result<()> {
        let date = date.to_date()?;
        debug!(%date, "remove holiday");
        self.holidays.remove(&date);
        Ok(())
    }

    /// Remove every holiday.
    pub fn clear_holidays(&mut self) {
        debug!("clear holidays");
        self.holidays.clear();
    }

    /// The configured holidays.
    pub fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }

    // ── Extra working days ────────────────────────────────────────────────────

    /// Add an extra working day, which is worked even on a holiday or weekend.
    pub fn add_working_day(&mut self, date: impl ToDate) -> Result<()> {
        let date = date.to_date()?;
        debug!(%date, "add working day");
        self.working_days.insert(date);
        Ok(())
    }

    /// Add every date of `dates` as an extra working day.
    ///
    /// Nothing is added if any of them is not a valid date.
    pub fn extend_working_days<I>(&mut self, dates: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToDate,
    {
        let dates = collect_dates(dates)?;
        debug!(count = dates.len(), "extend working days");
        self.working_days.extend(dates);
        Ok(())
    }

    /// Remove an extra working day (no-op if absent).
    pub fn remove_working_day(&mut self, date: impl ToDate) -> Result<()> {
        let date = date.to_date()?;
        debug!(%date, "remove working day");
        self.working_days.remove(&date);
        Ok(())
    }

    /// Remove every extra working day.
    pub fn clear_working_days(&mut self) {
        debug!("clear working days");
        self.working_days.clear();
    }

    /// The configured extra working days.
    pub fn working_days(&self) -> &HashSet<Date> {
        &self.working_days
    }

    // ── Weekends ──────────────────────────────────────────────────────────────

    /// Make `weekend` a non-working day of the week.
    pub fn add_weekend(&mut self, weekend: impl ToWeekday) -> Result<()> {
        let weekend = weekend.to_weekday()?;
        debug!(%weekend, "add weekend");
        self.weekends.insert(weekend);
        Ok(())
    }

    /// Add every day of `weekends` to the weekend.
    ///
    /// Nothing is added if any of them is not a valid weekday.
    pub fn extend_weekends<I>(&mut self, weekends: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToWeekday,
    {
        let weekends = collect_weekdays(weekends)?;
        debug!(?weekends, "extend weekends");
        self.weekends.extend(weekends);
        Ok(())
    }

    /// Make `weekend` an ordinary day of the week again (no-op if absent).
    pub fn remove_weekend(&mut self, weekend: impl ToWeekday) -> Result<()> {
        let weekend = weekend.to_weekday()?;
        debug!(%weekend, "remove weekend");
        self.weekends.remove(&weekend);
        Ok(())
    }

    /// Make every day of the week an ordinary day.
    pub fn clear_weekends(&mut self) {
        debug!("clear weekends");
        self.weekends.clear();
    }

    /// The configured weekend days, Monday first.
    pub fn weekends(&self) -> &BTreeSet<Weekday> {
        &self.weekends
    }

    // ── Working time ──────────────────────────────────────────────────────────

    /// Set the working time of `date` to `minutes`, which must be positive.
    ///
    /// Unlike the ordinary working time there is no upper bound.  On error the
    /// existing overrides are left untouched.
    pub fn update_not_standard_working_day(
        &mut self,
        date: impl ToDate,
        minutes: i64,
    ) -> Result<()> {
        let date = date.to_date()?;
        ensure!(
            minutes > 0 && minutes <= Minutes::MAX as i64,
            InvalidArgument,
            "working time of a day must be a positive number of minutes, got {minutes}"
        );
        debug!(%date, minutes, "update not standard working day");
        self.not_standard_working_days
            .insert(date, minutes as Minutes);
        Ok(())
    }

    /// Drop the working-time override of `date` (no-op if absent).
    pub fn remove_not_standard_working_day(&mut self, date: impl ToDate) -> Result<()> {
        let date = date.to_date()?;
        debug!(%date, "remove not standard working day");
        self.not_standard_working_days.remove(&date);
        Ok(())
    }

    /// Drop every working-time override.
    pub fn clear_not_standard_working_days(&mut self) {
        debug!("clear not standard working days");
        self.not_standard_working_days.clear();
    }

    /// The per-date working-time overrides.
    pub fn not_standard_working_days(&self) -> &HashMap<Date, Minutes> {
        &self.not_standard_working_days
    }

    /// Set the working time of an ordinary working day.
    ///
    /// `minutes` must lie in `[1, 1440]`; otherwise the current value is kept
    /// and `InvalidArgument` is returned.
    pub fn update_working_time_minutes(&mut self, minutes: i64) -> Result<()> {
        self.working_time_minutes = checked_working_time(minutes)?;
        debug!(minutes, "update working time minutes");
        Ok(())
    }

    /// Working time of an ordinary working day.
    pub fn working_time_minutes(&self) -> Minutes {
        self.working_time_minutes
    }

    // ── Predicates ────────────────────────────────────────────────────────────

    /// Whether `date` was added as an extra working day.
    pub fn is_extra_working_day(&self, date: impl ToDate) -> Result<bool> {
        Ok(self.working_days.contains(&date.to_date()?))
    }

    /// Whether `date` was added as a holiday.
    pub fn is_holiday(&self, date: impl ToDate) -> Result<bool> {
        Ok(self.holidays.contains(&date.to_date()?))
    }

    /// Whether `date` has its own working time.
    pub fn is_not_standard_working_day(&self, date: impl ToDate) -> Result<bool> {
        Ok(self
            .not_standard_working_days
            .contains_key(&date.to_date()?))
    }

    /// Whether `date` falls on a weekend day of the week.
    pub fn is_weekend(&self, date: impl ToDate) -> Result<bool> {
        Ok(self.weekends.contains(&date.to_date()?.weekday()))
    }
}

impl Default for WorkingCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for WorkingCalendar {
    fn is_business_day(&self, date: Date) -> bool {
        if self.working_days.contains(&date) {
            return true;
        }
        if self.holidays.contains(&date) {
            return false;
        }
        !self.weekends.contains(&date.weekday())
    }

    fn working_minutes(&self, date: Date) -> Minutes {
        self.not_standard_working_days
            .get(&date)
            .copied()
            .unwrap_or(self.working_time_minutes)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`WorkingCalendar`].
///
/// Starts from the defaults of [`WorkingCalendar::new`]; every input is
/// validated by [`WorkingCalendarBuilder::build`].
#[derive(Debug, Clone)]
pub struct WorkingCalendarBuilder {
    weekends: Vec<Result<Weekday>>,
    holidays: Vec<Result<Date>>,
    working_days: Vec<Result<Date>>,
    working_time_minutes: i64,
}

impl WorkingCalendarBuilder {
    /// Begin building a calendar.
    pub fn new() -> Self {
        Self {
            weekends: vec![Ok(Weekday::Saturday), Ok(Weekday::Sunday)],
            holidays: Vec::new(),
            working_days: Vec::new(),
            working_time_minutes: DEFAULT_WORKING_TIME_MINUTES.into(),
        }
    }

    /// Replace the weekend days (an empty iterator means no weekends).
    pub fn with_weekends<I>(mut self, weekends: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToWeekday,
    {
        self.weekends = weekends.into_iter().map(ToWeekday::to_weekday).collect();
        self
    }

    /// Add holidays.
    pub fn with_holidays<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToDate,
    {
        self.holidays
            .extend(dates.into_iter().map(ToDate::to_date));
        self
    }

    /// Add extra working days.
    pub fn with_working_days<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToDate,
    {
        self.working_days
            .extend(dates.into_iter().map(ToDate::to_date));
        self
    }

    /// Set the working time of an ordinary working day, in minutes.
    pub fn with_working_time_minutes(mut self, minutes: i64) -> Self {
        self.working_time_minutes = minutes;
        self
    }

    /// Validate the configuration and build the calendar.
    pub fn build(self) -> Result<WorkingCalendar> {
        let working_time_minutes = checked_working_time(self.working_time_minutes)?;
        let weekends = self.weekends.into_iter().collect::<Result<BTreeSet<_>>>()?;
        let holidays = self.holidays.into_iter().collect::<Result<HashSet<_>>>()?;
        let working_days = self
            .working_days
            .into_iter()
            .collect::<Result<HashSet<_>>>()?;
        debug!(
            ?weekends,
            holidays = holidays.len(),
            working_days = working_days.len(),
            working_time_minutes,
            "built working calendar"
        );
        Ok(WorkingCalendar {
            working_days,
            holidays,
            weekends,
            not_standard_working_days: HashMap::new(),
            working_time_minutes,
        })
    }
}

impl Default for WorkingCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn checked_working_time(minutes: i64) -> Result<Minutes> {
    ensure!(
        (1..=MAX_WORKING_TIME_MINUTES as i64).contains(&minutes),
        InvalidArgument,
        "working time must be in [1, {MAX_WORKING_TIME_MINUTES}] minutes, got {minutes}"
    );
    Ok(minutes as Minutes)
}

fn collect_dates<I>(dates: I) -> Result<Vec<Date>>
where
    I: IntoIterator,
    I::Item: ToDate,
{
    dates.into_iter().map(ToDate::to_date).collect()
}

fn collect_weekdays<I>(weekends: I) -> Result<Vec<Weekday>>
where
    I: IntoIterator,
    I::Item: ToWeekday,
{
    weekends.into_iter().map(ToWeekday::to_weekday).collect()
}
