// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! ISO 8601 time without timezone.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::div::div_mod_floor_64;
use crate::expect;
use crate::{Error, ErrorKind, TimeDelta, Timelike};

#[cfg(feature = "arbitrary")]
mod arbitrary;


/// The number of seconds in a day.
const SECS_PER_DAY: u32 = 86_400;

/// ISO 8601 time without timezone, with whole-second resolution.
///
/// The time is stored as the number of seconds since midnight, so it ranges from `00:00:00`
/// to `23:59:59`. There is no fractional second and no leap second: every day in this crate
/// is exactly 86,400 seconds long.
///
/// Arithmetic on a bare `NaiveTime` wraps around midnight. Use
/// [`overflowing_add_signed`](#method.overflowing_add_signed) to learn how many whole days were
/// carried out of the addition, or [`NaiveDateTime`](crate::NaiveDateTime) to let the date absorb
/// them.
///
/// # Example
///
/// ```
/// use chrono_naive::{NaiveTime, Timelike};
///
/// let t = NaiveTime::from_hms_opt(23, 56, 4).unwrap();
/// assert_eq!((t.hour(), t.minute(), t.second()), (23, 56, 4));
/// assert_eq!(t.num_seconds_from_midnight(), 86_164);
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Default)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct NaiveTime {
    secs: u32,
}

impl NaiveTime {
    /// Makes a new `NaiveTime` from hour, minute and second.
    ///
    /// # Panics
    ///
    /// Panics on invalid hour, minute and/or second.
    #[inline]
    #[must_use]
    pub const fn from_hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
        expect!(NaiveTime::from_hms_opt(hour, min, sec), "invalid time")
    }

    /// Makes a new `NaiveTime` from hour, minute and second.
    ///
    /// # Errors
    ///
    /// Returns `None` on invalid hour, minute and/or second.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::NaiveTime;
    ///
    /// let from_hms_opt = NaiveTime::from_hms_opt;
    ///
    /// assert!(from_hms_opt(0, 0, 0).is_some());
    /// assert!(from_hms_opt(23, 59, 59).is_some());
    /// assert!(from_hms_opt(24, 0, 0).is_none());
    /// assert!(from_hms_opt(23, 60, 0).is_none());
    /// assert!(from_hms_opt(23, 59, 60).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_hms_opt(hour: u32, min: u32, sec: u32) -> Option<NaiveTime> {
        if hour >= 24 || min >= 60 || sec >= 60 {
            return None;
        }
        Some(NaiveTime { secs: hour * 3600 + min * 60 + sec })
    }

    /// Makes a new `NaiveTime` from hour, minute and second, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] of kind [`ErrorKind::InvalidTime`] on invalid hour, minute and/or
    /// second.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{ErrorKind, NaiveTime};
    ///
    /// assert!(NaiveTime::try_from_hms(12, 0, 0).is_ok());
    /// assert_eq!(NaiveTime::try_from_hms(12, 0, 60).unwrap_err().kind(), ErrorKind::InvalidTime);
    /// ```
    pub const fn try_from_hms(hour: u32, min: u32, sec: u32) -> Result<NaiveTime, Error> {
        match NaiveTime::from_hms_opt(hour, min, sec) {
            Some(time) => Ok(time),
            None => Err(Error::new(ErrorKind::InvalidTime)),
        }
    }

    /// Makes a new `NaiveTime` from the number of seconds since midnight.
    ///
    /// # Panics
    ///
    /// Panics if `secs` is 86,400 or more.
    #[inline]
    #[must_use]
    pub const fn from_num_seconds_from_midnight(secs: u32) -> NaiveTime {
        expect!(NaiveTime::from_num_seconds_from_midnight_opt(secs), "invalid time")
    }

    /// Makes a new `NaiveTime` from the number of seconds since midnight.
    ///
    /// # Errors
    ///
    /// Returns `None` if `secs` is 86,400 or more.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::NaiveTime;
    ///
    /// let from_nsecs_opt = NaiveTime::from_num_seconds_from_midnight_opt;
    ///
    /// assert_eq!(from_nsecs_opt(0), NaiveTime::from_hms_opt(0, 0, 0));
    /// assert_eq!(from_nsecs_opt(86399), NaiveTime::from_hms_opt(23, 59, 59));
    /// assert_eq!(from_nsecs_opt(86400), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_num_seconds_from_midnight_opt(secs: u32) -> Option<NaiveTime> {
        if secs >= SECS_PER_DAY {
            return None;
        }
        Some(NaiveTime { secs })
    }

    /// Adds given `TimeDelta` to the current time, and also returns the number of *seconds*
    /// in the integral number of days ignored from the addition.
    ///
    /// The returned seconds are always a multiple of 86,400 and carry the sign of the overflow:
    /// positive when the addition wrapped past midnight into a later day, negative when it
    /// wrapped into an earlier one.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, TimeDelta};
    ///
    /// let from_hms = NaiveTime::from_hms;
    ///
    /// assert_eq!(
    ///     from_hms(3, 4, 5).overflowing_add_signed(TimeDelta::hours(11)),
    ///     (from_hms(14, 4, 5), 0)
    /// );
    /// assert_eq!(
    ///     from_hms(3, 4, 5).overflowing_add_signed(TimeDelta::hours(23)),
    ///     (from_hms(2, 4, 5), 86_400)
    /// );
    /// assert_eq!(
    ///     from_hms(3, 4, 5).overflowing_add_signed(TimeDelta::hours(-7)),
    ///     (from_hms(20, 4, 5), -86_400)
    /// );
    /// ```
    #[must_use]
    pub const fn overflowing_add_signed(&self, rhs: TimeDelta) -> (NaiveTime, i64) {
        // `rhs` is bounded by `i64::MAX / 1000`, so this cannot overflow.
        let secs = self.secs as i64 + rhs.num_seconds();
        let (days, secs) = div_mod_floor_64(secs, SECS_PER_DAY as i64);
        debug_assert!(secs >= 0 && secs < SECS_PER_DAY as i64);
        (NaiveTime { secs: secs as u32 }, days * SECS_PER_DAY as i64)
    }

    /// Subtracts given `TimeDelta` from the current time, and also returns the number of
    /// *seconds* in the integral number of days ignored from the subtraction.
    /// (We cannot return `TimeDelta` because it is subject to overflow or underflow.)
    ///
    /// The returned seconds are the amount to *subtract* from the date: positive when the
    /// subtraction wrapped back past midnight into an earlier day.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, TimeDelta};
    ///
    /// let from_hms = NaiveTime::from_hms;
    ///
    /// assert_eq!(
    ///     from_hms(3, 4, 5).overflowing_sub_signed(TimeDelta::hours(2)),
    ///     (from_hms(1, 4, 5), 0)
    /// );
    /// assert_eq!(
    ///     from_hms(3, 4, 5).overflowing_sub_signed(TimeDelta::hours(17)),
    ///     (from_hms(10, 4, 5), 86_400)
    /// );
    /// assert_eq!(
    ///     from_hms(3, 4, 5).overflowing_sub_signed(TimeDelta::hours(-22)),
    ///     (from_hms(1, 4, 5), -86_400)
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub const fn overflowing_sub_signed(&self, rhs: TimeDelta) -> (NaiveTime, i64) {
        let secs = self.secs as i64 - rhs.num_seconds();
        let (days, secs) = div_mod_floor_64(secs, SECS_PER_DAY as i64);
        (NaiveTime { secs: secs as u32 }, -days * SECS_PER_DAY as i64)
    }

    /// Subtracts another `NaiveTime` from the current time.
    /// Returns a `TimeDelta` within +/- 1 day.
    /// This does not overflow or underflow at all.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, TimeDelta};
    ///
    /// let from_hms = NaiveTime::from_hms;
    /// let since = NaiveTime::signed_duration_since;
    ///
    /// assert_eq!(since(from_hms(3, 5, 7), from_hms(3, 5, 7)), TimeDelta::zero());
    /// assert_eq!(since(from_hms(3, 5, 7), from_hms(3, 5, 0)), TimeDelta::seconds(7));
    /// assert_eq!(since(from_hms(3, 5, 7), from_hms(3, 0, 7)), TimeDelta::seconds(5 * 60));
    /// assert_eq!(since(from_hms(3, 5, 7), from_hms(0, 5, 7)), TimeDelta::seconds(3 * 3600));
    /// assert_eq!(since(from_hms(3, 5, 7), from_hms(4, 5, 7)), TimeDelta::seconds(-3600));
    /// assert_eq!(since(from_hms(3, 5, 7), from_hms(2, 4, 6)), TimeDelta::seconds(3600 + 60 + 1));
    /// ```
    #[must_use]
    pub const fn signed_duration_since(self, rhs: NaiveTime) -> TimeDelta {
        let secs = self.secs as i64 - rhs.secs as i64;
        expect!(TimeDelta::try_seconds(secs), "always in range")
    }

    /// Returns a triple of the hour, minute and second numbers.
    pub(crate) const fn hms(&self) -> (u32, u32, u32) {
        let sec = self.secs % 60;
        let mins = self.secs / 60;
        let min = mins % 60;
        let hour = mins / 60;
        (hour, min, sec)
    }

    /// The number of whole days in an overflow amount returned from
    /// [`overflowing_add_signed`](#method.overflowing_add_signed).
    pub(crate) const fn carry_to_days(carry: i64) -> Option<TimeDelta> {
        debug_assert!(carry % SECS_PER_DAY as i64 == 0);
        TimeDelta::try_days(carry / SECS_PER_DAY as i64)
    }

    /// Returns the number of seconds since midnight.
    // This duplicates `Timelike::num_seconds_from_midnight()`, because trait methods can't be
    // const yet.
    #[inline]
    pub(crate) const fn num_seconds_from_midnight(&self) -> u32 {
        self.secs
    }

    /// Midnight, `00:00:00`. This is also the `Default` value.
    pub const MIN: Self = Self { secs: 0 };
    /// The last second of the day, `23:59:59`.
    pub const MAX: Self = Self { secs: SECS_PER_DAY - 1 };
}

impl Timelike for NaiveTime {
    /// Returns the hour number from 0 to 23.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, Timelike};
    ///
    /// assert_eq!(NaiveTime::from_hms_opt(0, 0, 0).unwrap().hour(), 0);
    /// assert_eq!(NaiveTime::from_hms_opt(23, 56, 4).unwrap().hour(), 23);
    /// ```
    #[inline]
    fn hour(&self) -> u32 {
        self.hms().0
    }

    /// Returns the minute number from 0 to 59.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, Timelike};
    ///
    /// assert_eq!(NaiveTime::from_hms_opt(0, 0, 0).unwrap().minute(), 0);
    /// assert_eq!(NaiveTime::from_hms_opt(23, 56, 4).unwrap().minute(), 56);
    /// ```
    #[inline]
    fn minute(&self) -> u32 {
        self.hms().1
    }

    /// Returns the second number from 0 to 59.
    #[inline]
    fn second(&self) -> u32 {
        self.hms().2
    }

    /// Makes a new `NaiveTime` with the hour number changed.
    ///
    /// # Errors
    ///
    /// Returns `None` if the value for `hour` is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, Timelike};
    ///
    /// let dt = NaiveTime::from_hms_opt(23, 56, 4).unwrap();
    /// assert_eq!(dt.with_hour(7), Some(NaiveTime::from_hms_opt(7, 56, 4).unwrap()));
    /// assert_eq!(dt.with_hour(24), None);
    /// ```
    #[inline]
    fn with_hour(&self, hour: u32) -> Option<NaiveTime> {
        if hour >= 24 {
            return None;
        }
        let secs = hour * 3600 + self.secs % 3600;
        Some(NaiveTime { secs })
    }

    /// Makes a new `NaiveTime` with the minute number changed.
    ///
    /// # Errors
    ///
    /// Returns `None` if the value for `minute` is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, Timelike};
    ///
    /// let dt = NaiveTime::from_hms_opt(23, 56, 4).unwrap();
    /// assert_eq!(dt.with_minute(45), Some(NaiveTime::from_hms_opt(23, 45, 4).unwrap()));
    /// assert_eq!(dt.with_minute(60), None);
    /// ```
    #[inline]
    fn with_minute(&self, min: u32) -> Option<NaiveTime> {
        if min >= 60 {
            return None;
        }
        let secs = self.secs / 3600 * 3600 + min * 60 + self.secs % 60;
        Some(NaiveTime { secs })
    }

    /// Makes a new `NaiveTime` with the second number changed.
    ///
    /// # Errors
    ///
    /// Returns `None` if the value for `second` is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, Timelike};
    ///
    /// let dt = NaiveTime::from_hms_opt(23, 56, 4).unwrap();
    /// assert_eq!(dt.with_second(17), Some(NaiveTime::from_hms_opt(23, 56, 17).unwrap()));
    /// assert_eq!(dt.with_second(60), None);
    /// ```
    #[inline]
    fn with_second(&self, sec: u32) -> Option<NaiveTime> {
        if sec >= 60 {
            return None;
        }
        let secs = self.secs / 60 * 60 + sec;
        Some(NaiveTime { secs })
    }

    /// Returns the number of seconds past the last midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_naive::{NaiveTime, Timelike};
    ///
    /// assert_eq!(NaiveTime::from_hms_opt(1, 2, 3).unwrap().num_seconds_from_midnight(), 3723);
    /// assert_eq!(NaiveTime::from_hms_opt(23, 56, 4).unwrap().num_seconds_from_midnight(), 86164);
    /// ```
    #[inline]
    fn num_seconds_from_midnight(&self) -> u32 {
        self.secs // do not repeat the calculation!
    }
}

/// Add `TimeDelta` to `NaiveTime`.
///
/// This wraps around and never overflows or underflows.
/// In particular the addition ignores integral number of days.
///
/// # Example
///
/// ```
/// use chrono_naive::{NaiveTime, TimeDelta};
///
/// let from_hms = NaiveTime::from_hms;
///
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::zero(), from_hms(3, 5, 7));
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::seconds(1), from_hms(3, 5, 8));
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::seconds(-1), from_hms(3, 5, 6));
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::seconds(60 + 4), from_hms(3, 6, 11));
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::seconds(7 * 60 * 60 - 6 * 60), from_hms(9, 59, 7));
/// ```
///
/// The addition wraps around.
///
/// ```
/// # use chrono_naive::{NaiveTime, TimeDelta};
/// # let from_hms = NaiveTime::from_hms;
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::seconds(22 * 60 * 60), from_hms(1, 5, 7));
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::seconds(-8 * 60 * 60), from_hms(19, 5, 7));
/// assert_eq!(from_hms(3, 5, 7) + TimeDelta::days(800), from_hms(3, 5, 7));
/// ```
impl Add<TimeDelta> for NaiveTime {
    type Output = NaiveTime;

    #[inline]
    fn add(self, rhs: TimeDelta) -> NaiveTime {
        self.overflowing_add_signed(rhs).0
    }
}

/// Add-assign `TimeDelta` to `NaiveTime`.
///
/// This wraps around and never overflows or underflows.
/// In particular the addition ignores integral number of days.
impl AddAssign<TimeDelta> for NaiveTime {
    #[inline]
    fn add_assign(&mut self, rhs: TimeDelta) {
        *self = self.add(rhs);
    }
}

/// Subtract `TimeDelta` from `NaiveTime`.
///
/// This wraps around and never overflows or underflows.
/// In particular the subtraction ignores integral number of days.
/// This is the same as addition with a negated `TimeDelta`.
///
/// # Example
///
/// ```
/// use chrono_naive::{NaiveTime, TimeDelta};
///
/// let from_hms = NaiveTime::from_hms;
///
/// assert_eq!(from_hms(3, 5, 7) - TimeDelta::zero(), from_hms(3, 5, 7));
/// assert_eq!(from_hms(3, 5, 7) - TimeDelta::seconds(1), from_hms(3, 5, 6));
/// assert_eq!(from_hms(3, 5, 7) - TimeDelta::seconds(60 + 5), from_hms(3, 4, 2));
/// assert_eq!(from_hms(3, 5, 7) - TimeDelta::seconds(2 * 60 * 60 + 6 * 60), from_hms(0, 59, 7));
/// ```
///
/// The subtraction wraps around.
///
/// ```
/// # use chrono_naive::{NaiveTime, TimeDelta};
/// # let from_hms = NaiveTime::from_hms;
/// assert_eq!(from_hms(3, 5, 7) - TimeDelta::seconds(8 * 60 * 60), from_hms(19, 5, 7));
/// assert_eq!(from_hms(3, 5, 7) - TimeDelta::days(800), from_hms(3, 5, 7));
/// ```
impl Sub<TimeDelta> for NaiveTime {
    type Output = NaiveTime;

    #[inline]
    fn sub(self, rhs: TimeDelta) -> NaiveTime {
        self.overflowing_sub_signed(rhs).0
    }
}

/// Subtract-assign `TimeDelta` from `NaiveTime`.
///
/// This wraps around and never overflows or underflows.
/// In particular the subtraction ignores integral number of days.
impl SubAssign<TimeDelta> for NaiveTime {
    #[inline]
    fn sub_assign(&mut self, rhs: TimeDelta) {
        *self = self.sub(rhs);
    }
}

/// Subtracts another `NaiveTime` from the current time.
/// Returns a `TimeDelta` within +/- 1 day.
/// This does not overflow or underflow at all.
///
/// The implementation is a wrapper around
/// [`NaiveTime::signed_duration_since`](#method.signed_duration_since).
///
/// # Example
///
/// ```
/// use chrono_naive::{NaiveTime, TimeDelta};
///
/// let from_hms = NaiveTime::from_hms;
///
/// assert_eq!(from_hms(3, 5, 7) - from_hms(3, 5, 7), TimeDelta::zero());
/// assert_eq!(from_hms(3, 5, 7) - from_hms(3, 5, 6), TimeDelta::seconds(1));
/// assert_eq!(from_hms(3, 5, 7) - from_hms(4, 5, 7), TimeDelta::seconds(-3600));
/// ```
impl Sub<NaiveTime> for NaiveTime {
    type Output = TimeDelta;

    #[inline]
    fn sub(self, rhs: NaiveTime) -> TimeDelta {
        self.signed_duration_since(rhs)
    }
}

/// The `Debug` output of the naive time `t` is `HH:MM:SS`, with every field zero-padded to two
/// digits.
///
/// # Example
///
/// ```
/// use chrono_naive::NaiveTime;
///
/// assert_eq!(format!("{:?}", NaiveTime::from_hms_opt(23, 56, 4).unwrap()), "23:56:04");
/// assert_eq!(format!("{:?}", NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "00:00:00");
/// ```
impl fmt::Debug for NaiveTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (hour, min, sec) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", hour, min, sec)
    }
}

/// The `Display` output of the naive time `t` is the same as its `Debug` output.
///
/// # Example
///
/// ```
/// use chrono_naive::NaiveTime;
///
/// assert_eq!(format!("{}", NaiveTime::from_hms_opt(23, 56, 4).unwrap()), "23:56:04");
/// assert_eq!(NaiveTime::from_hms_opt(7, 8, 9).unwrap().to_string(), "07:08:09");
/// ```
impl fmt::Display for NaiveTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
