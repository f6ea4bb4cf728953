//! Day count conventions.
//!
//! Day count conventions turn the distance between two dates into a
//! fraction of a year, which is the exponent used when discounting.
//!
//! Only [`Act365Fixed`] is provided: actual calendar days over a fixed
//! 365-day year.
//!
//! # Usage
//!
//! ```rust
//! use ytmkit_core::daycounts::{Act365Fixed, DayCount};
//! use ytmkit_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 1, 1).unwrap();
//!
//! assert_eq!(Act365Fixed.day_count(start, end), 366);
//! assert!(Act365Fixed.year_fraction(start, end) > 1.0);
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative when `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
