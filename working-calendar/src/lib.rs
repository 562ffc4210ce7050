//! # working-calendar
//!
//! A working-day calendar: weekends, holidays, extra working days and
//! per-day working time, with day counts, minute and hour totals over date
//! ranges, months and years, and forward stepping over working days.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use working_calendar::time::{Calendar, Date, WorkingCalendar};
//!
//! # fn main() -> working_calendar::core::Result<()> {
//! // Saturday and Sunday weekends, 8-hour days.
//! let mut cal = WorkingCalendar::new();
//! cal.add_holiday(Date::from_ymd(2018, 3, 8)?)?;
//!
//! let start = Date::from_ymd(2018, 3, 1)?;
//! let end = Date::from_ymd(2018, 3, 12)?;
//! assert_eq!(cal.count_working_days_between(start, end)?, 7);
//! assert_eq!(cal.sum_working_hours_between(start, end)?, 56.0);
//!
//! // Wednesday 7th -> Friday 9th, skipping the holiday.
//! let wednesday = Date::from_ymd(2018, 3, 7)?;
//! assert_eq!(cal.next_working_day(wednesday)?, Date::from_ymd(2018, 3, 9)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and primitive aliases.
pub use wc_core as core;

/// Dates, weekdays, months and calendars.
pub use wc_time as time;

pub use wc_core::{Error, Result};
pub use wc_time::{Calendar, Date, Month, Weekday, WorkingCalendar, WorkingCalendarBuilder};
