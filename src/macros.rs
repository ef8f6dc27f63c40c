// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Macros for building dates and times from literals in const context.

/// Create a [`NaiveDate`](crate::naive::NaiveDate) with a statically known value.
///
/// Supported formats are 'year-month-day' and 'year-ordinal'.
///
/// The input is checked at compile time.
///
/// Note: rustfmt wants to add spaces around `-` in this macro.
/// For nice formatting use `#[rustfmt::skip::macros(date)]`, or use as `date! {2023-09-08}`
///
/// # Examples
/// ```
/// use chrono_naive::date;
///
/// assert_eq!(date!(2023-09-08), date!(2023-251));
/// ```
#[macro_export]
macro_rules! date {
    ($y:literal-$m:literal-$d:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DATE: $crate::NaiveDate = match $crate::NaiveDate::from_ymd_opt($y, $m, $d) {
                Some(d) => d,
                None => panic!("invalid calendar date"),
            };
            DATE
        }
    }};
    ($y:literal-$o:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DATE: $crate::NaiveDate = match $crate::NaiveDate::from_yo_opt($y, $o) {
                Some(d) => d,
                None => panic!("invalid ordinal date"),
            };
            DATE
        }
    }};
}

/// Create a [`NaiveTime`](crate::naive::NaiveTime) with a statically known value.
///
/// Supported formats are 'hour:minute' and 'hour:minute:second'.
///
/// The input is checked at compile time.
///
/// # Examples
/// ```
/// use chrono_naive::time;
/// # use chrono_naive::Timelike;
///
/// assert_eq!(time!(7:03), time!(7:03:00));
/// assert_eq!(time!(23:59:59).num_seconds_from_midnight(), 86_399);
/// ```
#[macro_export]
macro_rules! time {
    ($h:literal:$m:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const TIME: $crate::NaiveTime = match $crate::NaiveTime::from_hms_opt($h, $m, 0) {
                Some(t) => t,
                None => panic!("invalid time"),
            };
            TIME
        }
    }};
    ($h:literal:$m:literal:$s:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const TIME: $crate::NaiveTime = match $crate::NaiveTime::from_hms_opt($h, $m, $s) {
                Some(t) => t,
                None => panic!("invalid time"),
            };
            TIME
        }
    }};
}

/// Create a [`NaiveDateTime`](crate::naive::NaiveDateTime) with a statically known value.
///
/// The input is checked at compile time.
///
/// # Examples
/// ```
/// use chrono_naive::datetime;
///
/// let dt = datetime!(2023-09-08 7:03:25);
/// assert_eq!(dt.to_string(), "2023-09-08 07:03:25");
/// ```
#[macro_export]
macro_rules! datetime {
    ($y:literal-$m:literal-$d:literal $h:literal:$mi:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DT: $crate::NaiveDateTime = $crate::NaiveDateTime::new(
                $crate::date!($y - $m - $d),
                $crate::time!($h:$mi),
            );
            DT
        }
    }};
    ($y:literal-$m:literal-$d:literal $h:literal:$mi:literal:$s:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DT: $crate::NaiveDateTime = $crate::NaiveDateTime::new(
                $crate::date!($y - $m - $d),
                $crate::time!($h:$mi:$s),
            );
            DT
        }
    }};
}
