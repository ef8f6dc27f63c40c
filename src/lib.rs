// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! # Chrono-naive: naive date and time arithmetic
//!
//! This crate is the calendar core of a date and time library: the proleptic Gregorian
//! calendar, time of day, combined date and time, signed durations and ISO 8601 week dates.
//! All types are *naive*, they carry no time zone or UTC offset.
//!
//! Every value is a small immutable `Copy` type. Dates are packed into a single `i32`,
//! times into a single `u32` of seconds since midnight, and durations into a single `i64`
//! of seconds. There is no sub-second precision and no leap second support.
//!
//! ## Overview
//!
//! ### Dates
//!
//! [`NaiveDate`] covers years 0 through 262142 inclusive. Dates can be built from a
//! calendar date, an ordinal date or an ISO 8601 week date:
//!
//! ```
//! use chrono_naive::{Datelike, NaiveDate, Weekday};
//!
//! let d = NaiveDate::from_ymd_opt(2014, 7, 8).unwrap();
//! assert_eq!(d, NaiveDate::from_yo_opt(2014, 189).unwrap());
//! assert_eq!(d, NaiveDate::from_isoywd_opt(2014, 28, Weekday::Tue).unwrap());
//! assert_eq!(d.weekday(), Weekday::Tue);
//!
//! // February 29 only exists in leap years.
//! assert!(NaiveDate::from_ymd_opt(2012, 2, 29).is_some());
//! assert!(NaiveDate::from_ymd_opt(2014, 2, 29).is_none());
//! ```
//!
//! ### Date and time
//!
//! [`NaiveDateTime`] combines a date with a [`NaiveTime`]. Arithmetic with a [`TimeDelta`]
//! carries whole days from the time into the date:
//!
//! ```
//! use chrono_naive::{NaiveDate, TimeDelta};
//!
//! let dt = NaiveDate::from_ymd_opt(2014, 5, 6).unwrap().and_hms_opt(7, 8, 9).unwrap();
//! let later = dt.checked_add_signed(TimeDelta::seconds(86_399)).unwrap();
//! assert_eq!(later.to_string(), "2014-05-07 07:08:08");
//! assert_eq!(later.timestamp(), 1_399_446_488);
//! ```
//!
//! ### Checked and unchecked constructors
//!
//! Fallible operations come in pairs: a `*_opt` or `checked_*` variant returning an
//! [`Option`], and a shorter variant that panics on invalid input. Use the panicking ones
//! only for values that are known to be valid.
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for the error types.
//! - `serde`: serialization support, including the [`naive::serde::ts_seconds`] adapters.
//! - `rkyv`: zero-copy archiving of the packed representations.
//! - `arbitrary`: `Arbitrary` implementations for fuzzing.
//! - `logging`: internal diagnostics through the [`log`](https://docs.rs/log) facade.

#![deny(missing_docs)]
#![warn(unreachable_pub)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod logging;

mod div;

mod error;
pub use error::{Error, ErrorKind};

pub mod time_delta;
#[doc(no_inline)]
pub use time_delta::{OutOfRangeError, TimeDelta};

/// Alias of [`TimeDelta`].
pub type Duration = TimeDelta;

pub mod naive;
#[doc(no_inline)]
pub use naive::{Days, IsoWeek, NaiveDate, NaiveDateTime, NaiveTime, NaiveWeek};

mod month;
pub use month::{Month, Months, ParseMonthError};

mod traits;
pub use traits::{Datelike, Timelike};

mod weekday;
pub use weekday::{ParseWeekdayError, Weekday};

mod macros;

#[cfg(test)]
mod utils;

/// Workaround because `?` is not (yet) available in const context.
#[macro_export]
#[doc(hidden)]
macro_rules! try_opt {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}

/// Workaround because `.expect()` is not (yet) available in const context.
#[macro_export]
#[doc(hidden)]
macro_rules! expect {
    ($e:expr, $m:literal) => {
        match $e {
            Some(v) => v,
            None => panic!($m),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Datelike, NaiveDate};

    // The "Doomsday" rule: these dates share a weekday with the last day of February.
    #[test]
    fn test_readme_doomsday() {
        for y in (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).step_by(7) {
            let d4 = NaiveDate::from_ymd(y, 4, 4);
            let d6 = NaiveDate::from_ymd(y, 6, 6);
            let d8 = NaiveDate::from_ymd(y, 8, 8);
            let d10 = NaiveDate::from_ymd(y, 10, 10);
            let d12 = NaiveDate::from_ymd(y, 12, 12);

            // nine to five, seven-eleven
            let d59 = NaiveDate::from_ymd(y, 5, 9);
            let d95 = NaiveDate::from_ymd(y, 9, 5);
            let d711 = NaiveDate::from_ymd(y, 7, 11);
            let d117 = NaiveDate::from_ymd(y, 11, 7);

            // "March 0"
            let d30 = NaiveDate::from_ymd(y, 3, 1).pred();

            let weekday = d30.weekday();
            let other_dates = [d4, d6, d8, d10, d12, d59, d95, d711, d117];
            assert!(other_dates.iter().all(|d| d.weekday() == weekday));
        }
    }
}
