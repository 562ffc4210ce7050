//! # wc-time
//!
//! Date, weekday and month types, the [`Calendar`] trait, and the
//! run-time configured [`WorkingCalendar`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait: classification, range aggregation and stepping.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type and date normalization.
pub mod date;

/// `Month` — month of the year and month lengths.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{month_bounds, year_bounds, Calendar};
pub use calendars::{
    WorkingCalendar, WorkingCalendarBuilder, DEFAULT_WORKING_TIME_MINUTES,
    MAX_WORKING_TIME_MINUTES,
};
pub use date::{Date, ToDate};
pub use month::{days_in_month, is_leap_year, Month};
pub use weekday::{ToWeekday, Weekday};
