//! `Weekday` — day-of-week enum with ISO numbering.

use wc_core::errors::{Error, Result};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7) following ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

// ── Normalization ─────────────────────────────────────────────────────────────

/// Anything accepted where a day of the week is expected.
///
/// Implemented for [`Weekday`], [`chrono::Weekday`] and the integer types,
/// where an integer must be an ISO ordinal in `1..=7`.
pub trait ToWeekday {
    /// Normalize into a [`Weekday`], or fail with [`Error::InvalidWeekday`].
    fn to_weekday(self) -> Result<Weekday>;
}

impl ToWeekday for Weekday {
    fn to_weekday(self) -> Result<Weekday> {
        Ok(self)
    }
}

impl ToWeekday for &Weekday {
    fn to_weekday(self) -> Result<Weekday> {
        Ok(*self)
    }
}

impl ToWeekday for chrono::Weekday {
    fn to_weekday(self) -> Result<Weekday> {
        Ok(self.into())
    }
}

macro_rules! impl_to_weekday_for_int {
    ($($t:ty),*) => {$(
        impl ToWeekday for $t {
            fn to_weekday(self) -> Result<Weekday> {
                u8::try_from(self)
                    .ok()
                    .and_then(Weekday::from_ordinal)
                    .ok_or_else(|| {
                        Error::InvalidWeekday(format!("{self} is not an ISO weekday in [1, 7]"))
                    })
            }
        }
    )*};
}

impl_to_weekday_for_int!(u8, u32, i32, i64);
