//! # wc-core
//!
//! Core error definitions and primitive type aliases shared by the
//! working-calendar crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Working time of a single day, in whole minutes.
pub type Minutes = u32;

/// Working time summed over many days, in whole minutes.
pub type TotalMinutes = u64;

/// Working time expressed in (fractional) hours.
pub type Hours = f64;

/// Calendar year in the proleptic Gregorian calendar.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
