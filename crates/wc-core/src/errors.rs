//! Error types for working-calendar.
//!
//! Every fallible operation in the workspace reports one of four kinds of
//! failure, collected in a single `thiserror`-derived enum.  The `ensure!` and
//! `fail!` macros defined here build an error of a named kind from a format
//! string.

use thiserror::Error;

/// The top-level error type used throughout working-calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The argument is not a recognizable date (or date arithmetic left the
    /// supported range).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The argument is not a recognizable day of the week.
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),

    /// A numeric argument is out of its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The start of a range lies after its end.
    #[error("start date {start} is after end date {end}")]
    RangeOrder {
        /// Start of the rejected range.
        start: String,
        /// End of the rejected range.
        end: String,
    },
}

/// Shorthand `Result` type used throughout working-calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with an error of the given kind unless `$cond` holds.
///
/// # Example
/// ```
/// use wc_core::{ensure, errors::Error};
/// fn positive(x: i64) -> wc_core::errors::Result<i64> {
///     ensure!(x > 0, InvalidArgument, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return an error of the given kind immediately.
///
/// # Example
/// ```
/// use wc_core::{fail, errors::Error};
/// fn always_err() -> wc_core::errors::Result<()> {
///     fail!(InvalidWeekday, "no such day");
/// }
/// assert_eq!(always_err(), Err(Error::InvalidWeekday("no such day".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
