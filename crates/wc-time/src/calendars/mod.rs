//! Concrete calendar implementations.

/// Run-time configured working calendar.
pub mod working_calendar;

pub use working_calendar::{
    WorkingCalendar, WorkingCalendarBuilder, DEFAULT_WORKING_TIME_MINUTES,
    MAX_WORKING_TIME_MINUTES,
};
