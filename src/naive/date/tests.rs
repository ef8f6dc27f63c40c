use super::{Days, Months, NaiveDate, MAX_YEAR, MIN_YEAR};
use crate::naive::internals::YearFlags;
use crate::utils::{assert_debug_eq, assert_display_eq};
use crate::{Datelike, ErrorKind, TimeDelta, Weekday};

// as it is hard to verify year flags in `NaiveDate::MIN` and `NaiveDate::MAX`,
// we use a separate run-time test.
#[test]
fn test_date_bounds() {
    let calculated_min = NaiveDate::from_ymd(MIN_YEAR, 1, 1);
    let calculated_max = NaiveDate::from_ymd(MAX_YEAR, 12, 31);
    assert!(
        NaiveDate::MIN == calculated_min,
        "`NaiveDate::MIN` should have year flag {:?}",
        calculated_min.year_flags()
    );
    assert!(
        NaiveDate::MAX == calculated_max,
        "`NaiveDate::MAX` should have year flag {:?} and ordinal {}",
        calculated_max.year_flags(),
        calculated_max.ordinal()
    );

    // let's also check that the entire range do not exceed 2^44 seconds
    // (sometimes used for bounding `TimeDelta` against overflow)
    let maxsecs = NaiveDate::MAX.signed_duration_since(NaiveDate::MIN).num_seconds();
    let maxsecs = maxsecs + 86401; // also take care of DateTime
    assert!(
        maxsecs < (1 << MAX_BITS),
        "The entire `NaiveDate` range somehow exceeds 2^{} seconds",
        MAX_BITS
    );
}

// Days from January 1, 0000 to December 31, `MAX_YEAR`.
const MAX_DAYS_FROM_YEAR_0: i32 =
    MAX_YEAR * 365 + MAX_YEAR / 4 - MAX_YEAR / 100 + MAX_YEAR / 400 + 365;

const MAX_BITS: usize = 44;

#[test]
fn test_max_days_from_year_0() {
    assert_eq!(MAX_DAYS_FROM_YEAR_0, 95_745_764);
    assert_eq!(
        NaiveDate::MAX.signed_duration_since(NaiveDate::MIN),
        TimeDelta::days(MAX_DAYS_FROM_YEAR_0 as i64)
    );
}

#[test]
fn test_date_from_ymd() {
    let ymd_opt = NaiveDate::from_ymd_opt;

    assert!(ymd_opt(2012, 0, 1).is_none());
    assert!(ymd_opt(2012, 1, 1).is_some());
    assert!(ymd_opt(2012, 2, 29).is_some());
    assert!(ymd_opt(2014, 2, 29).is_none());
    assert!(ymd_opt(2014, 3, 0).is_none());
    assert!(ymd_opt(2014, 3, 1).is_some());
    assert!(ymd_opt(2014, 3, 31).is_some());
    assert!(ymd_opt(2014, 3, 32).is_none());
    assert!(ymd_opt(2014, 12, 31).is_some());
    assert!(ymd_opt(2014, 13, 1).is_none());

    assert!(ymd_opt(1900, 2, 29).is_none());
    assert!(ymd_opt(2000, 2, 29).is_some());
    assert!(ymd_opt(0, 2, 29).is_some());
    assert!(ymd_opt(-1, 12, 31).is_none());
    assert!(ymd_opt(MAX_YEAR + 1, 1, 1).is_none());
    assert!(ymd_opt(i32::MAX, 1, 1).is_none());
    assert!(ymd_opt(i32::MIN, 1, 1).is_none());
}

#[test]
#[should_panic(expected = "invalid or out-of-range date")]
fn test_date_from_ymd_panics() {
    let _ = NaiveDate::from_ymd(2023, 2, 29);
}

#[test]
fn test_date_try_from_ymd() {
    assert_eq!(NaiveDate::try_from_ymd(2014, 7, 8), Ok(NaiveDate::from_ymd(2014, 7, 8)));
    assert_eq!(NaiveDate::try_from_ymd(2014, 2, 29).unwrap_err().kind(), ErrorKind::InvalidDate);
    assert_eq!(NaiveDate::try_from_ymd(2014, 13, 1).unwrap_err().kind(), ErrorKind::InvalidDate);
    assert_eq!(NaiveDate::try_from_ymd(-1, 1, 1).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(
        NaiveDate::try_from_ymd(MAX_YEAR + 1, 2, 30).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
    assert_display_eq(NaiveDate::try_from_ymd(2014, 4, 31).unwrap_err(), "invalid date");
}

#[test]
fn test_date_from_yo() {
    let yo_opt = NaiveDate::from_yo_opt;
    let ymd = NaiveDate::from_ymd;

    assert_eq!(yo_opt(2012, 0), None);
    assert_eq!(yo_opt(2012, 1), Some(ymd(2012, 1, 1)));
    assert_eq!(yo_opt(2012, 2), Some(ymd(2012, 1, 2)));
    assert_eq!(yo_opt(2012, 32), Some(ymd(2012, 2, 1)));
    assert_eq!(yo_opt(2012, 60), Some(ymd(2012, 2, 29)));
    assert_eq!(yo_opt(2012, 61), Some(ymd(2012, 3, 1)));
    assert_eq!(yo_opt(2012, 100), Some(ymd(2012, 4, 9)));
    assert_eq!(yo_opt(2012, 200), Some(ymd(2012, 7, 18)));
    assert_eq!(yo_opt(2012, 300), Some(ymd(2012, 10, 26)));
    assert_eq!(yo_opt(2012, 366), Some(ymd(2012, 12, 31)));
    assert_eq!(yo_opt(2012, 367), None);
    assert_eq!(yo_opt(2012, 1 << 28 | 60), None);

    assert_eq!(yo_opt(2014, 0), None);
    assert_eq!(yo_opt(2014, 1), Some(ymd(2014, 1, 1)));
    assert_eq!(yo_opt(2014, 2), Some(ymd(2014, 1, 2)));
    assert_eq!(yo_opt(2014, 32), Some(ymd(2014, 2, 1)));
    assert_eq!(yo_opt(2014, 59), Some(ymd(2014, 2, 28)));
    assert_eq!(yo_opt(2014, 60), Some(ymd(2014, 3, 1)));
    assert_eq!(yo_opt(2014, 100), Some(ymd(2014, 4, 10)));
    assert_eq!(yo_opt(2014, 200), Some(ymd(2014, 7, 19)));
    assert_eq!(yo_opt(2014, 300), Some(ymd(2014, 10, 27)));
    assert_eq!(yo_opt(2014, 365), Some(ymd(2014, 12, 31)));
    assert_eq!(yo_opt(2014, 366), None);
}

#[test]
fn test_date_from_isoywd() {
    let isoywd_opt = NaiveDate::from_isoywd_opt;
    let ymd = NaiveDate::from_ymd;

    assert_eq!(isoywd_opt(2004, 0, Weekday::Sun), None);
    assert_eq!(isoywd_opt(2004, 1, Weekday::Mon), Some(ymd(2003, 12, 29)));
    assert_eq!(isoywd_opt(2004, 1, Weekday::Sun), Some(ymd(2004, 1, 4)));
    assert_eq!(isoywd_opt(2004, 2, Weekday::Mon), Some(ymd(2004, 1, 5)));
    assert_eq!(isoywd_opt(2004, 2, Weekday::Sun), Some(ymd(2004, 1, 11)));
    assert_eq!(isoywd_opt(2004, 52, Weekday::Mon), Some(ymd(2004, 12, 20)));
    assert_eq!(isoywd_opt(2004, 52, Weekday::Sun), Some(ymd(2004, 12, 26)));
    assert_eq!(isoywd_opt(2004, 53, Weekday::Mon), Some(ymd(2004, 12, 27)));
    assert_eq!(isoywd_opt(2004, 53, Weekday::Sun), Some(ymd(2005, 1, 2)));
    assert_eq!(isoywd_opt(2004, 54, Weekday::Mon), None);

    assert_eq!(isoywd_opt(2011, 0, Weekday::Sun), None);
    assert_eq!(isoywd_opt(2011, 1, Weekday::Mon), Some(ymd(2011, 1, 3)));
    assert_eq!(isoywd_opt(2011, 1, Weekday::Sun), Some(ymd(2011, 1, 9)));
    assert_eq!(isoywd_opt(2011, 2, Weekday::Mon), Some(ymd(2011, 1, 10)));
    assert_eq!(isoywd_opt(2011, 2, Weekday::Sun), Some(ymd(2011, 1, 16)));

    assert_eq!(isoywd_opt(2018, 51, Weekday::Mon), Some(ymd(2018, 12, 17)));
    assert_eq!(isoywd_opt(2018, 51, Weekday::Sun), Some(ymd(2018, 12, 23)));
    assert_eq!(isoywd_opt(2018, 52, Weekday::Mon), Some(ymd(2018, 12, 24)));
    assert_eq!(isoywd_opt(2018, 52, Weekday::Sun), Some(ymd(2018, 12, 30)));
    assert_eq!(isoywd_opt(2018, 53, Weekday::Mon), None);
}

#[test]
fn test_date_from_isoywd_out_of_range() {
    // January 1 and 2 of year 0 belong to the last ISO week of year -1
    let first = NaiveDate::MIN.iso_week();
    assert_eq!((first.year(), first.week()), (-1, 52));
    assert_eq!(NaiveDate::from_isoywd_opt(-1, 52, Weekday::Sat), Some(NaiveDate::MIN));
    assert_eq!(NaiveDate::from_isoywd_opt(-1, 52, Weekday::Fri), None);
    assert_eq!(
        NaiveDate::from_isoywd_opt(0, 1, Weekday::Mon),
        Some(NaiveDate::from_ymd(0, 1, 3))
    );

    // December 31, 262142 is a Monday in the first ISO week of 262143
    let last = NaiveDate::MAX.iso_week();
    let weekday = NaiveDate::MAX.weekday();
    assert_eq!((last.year(), last.week(), weekday), (MAX_YEAR + 1, 1, Weekday::Mon));
    assert_eq!(
        NaiveDate::from_isoywd_opt(last.year(), last.week(), weekday),
        Some(NaiveDate::MAX)
    );
    assert_eq!(NaiveDate::from_isoywd_opt(last.year(), last.week(), weekday.succ()), None);
    assert_eq!(NaiveDate::from_isoywd_opt(i32::MAX, 1, Weekday::Mon), None);
    assert_eq!(NaiveDate::from_isoywd_opt(i32::MIN, 1, Weekday::Mon), None);
}

#[test]
fn test_date_from_isoywd_and_iso_week() {
    for year in 2000..2401 {
        for week in 1..=53 {
            for &weekday in [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ]
            .iter()
            {
                let d = NaiveDate::from_isoywd_opt(year, week, weekday);
                if let Some(d) = d {
                    assert_eq!(d.weekday(), weekday);
                    let w = d.iso_week();
                    assert_eq!(w.year(), year);
                    assert_eq!(w.week(), week);
                }
            }
        }
    }

    for year in 2000..2401 {
        for month in 1..=12 {
            for day in 1..32 {
                let d = NaiveDate::from_ymd_opt(year, month, day);
                if let Some(d) = d {
                    let w = d.iso_week();
                    let d_ = NaiveDate::from_isoywd(w.year(), w.week(), d.weekday());
                    assert_eq!(d, d_);
                }
            }
        }
    }
}

#[test]
fn test_date_from_num_days_from_ce() {
    let from_ndays_from_ce = NaiveDate::from_num_days_from_ce_opt;
    assert_eq!(from_ndays_from_ce(1), Some(NaiveDate::from_ymd(1, 1, 1)));
    assert_eq!(from_ndays_from_ce(2), Some(NaiveDate::from_ymd(1, 1, 2)));
    assert_eq!(from_ndays_from_ce(31), Some(NaiveDate::from_ymd(1, 1, 31)));
    assert_eq!(from_ndays_from_ce(32), Some(NaiveDate::from_ymd(1, 2, 1)));
    assert_eq!(from_ndays_from_ce(59), Some(NaiveDate::from_ymd(1, 2, 28)));
    assert_eq!(from_ndays_from_ce(60), Some(NaiveDate::from_ymd(1, 3, 1)));
    assert_eq!(from_ndays_from_ce(365), Some(NaiveDate::from_ymd(1, 12, 31)));
    assert_eq!(from_ndays_from_ce(365 + 1), Some(NaiveDate::from_ymd(2, 1, 1)));
    assert_eq!(from_ndays_from_ce(365 * 2 + 1), Some(NaiveDate::from_ymd(3, 1, 1)));
    assert_eq!(from_ndays_from_ce(365 * 3 + 1), Some(NaiveDate::from_ymd(4, 1, 1)));
    assert_eq!(from_ndays_from_ce(365 * 4 + 2), Some(NaiveDate::from_ymd(5, 1, 1)));
    assert_eq!(from_ndays_from_ce(146097 + 1), Some(NaiveDate::from_ymd(401, 1, 1)));
    assert_eq!(from_ndays_from_ce(146097 * 5 + 1), Some(NaiveDate::from_ymd(2001, 1, 1)));
    assert_eq!(from_ndays_from_ce(719163), Some(NaiveDate::from_ymd(1970, 1, 1)));
    assert_eq!(from_ndays_from_ce(0), Some(NaiveDate::from_ymd(0, 12, 31))); // 1 BCE
    assert_eq!(from_ndays_from_ce(-365), Some(NaiveDate::from_ymd(0, 1, 1)));
    assert_eq!(from_ndays_from_ce(-366), None);
    assert_eq!(from_ndays_from_ce(i32::MIN), None);
    assert_eq!(from_ndays_from_ce(i32::MAX), None);

    for days in (-365..1_000_000).step_by(97) {
        assert_eq!(from_ndays_from_ce(days).map(|d| d.num_days_from_ce()), Some(days));
    }

    assert_eq!(from_ndays_from_ce(NaiveDate::MIN.num_days_from_ce()), Some(NaiveDate::MIN));
    assert_eq!(from_ndays_from_ce(NaiveDate::MIN.num_days_from_ce() - 1), None);
    assert_eq!(from_ndays_from_ce(NaiveDate::MAX.num_days_from_ce()), Some(NaiveDate::MAX));
    assert_eq!(from_ndays_from_ce(NaiveDate::MAX.num_days_from_ce() + 1), None);
}

#[test]
fn test_date_from_weekday_of_month_opt() {
    let ymwd = NaiveDate::from_weekday_of_month_opt;
    assert_eq!(ymwd(2018, 8, Weekday::Tue, 0), None);
    assert_eq!(ymwd(2018, 8, Weekday::Wed, 1), Some(NaiveDate::from_ymd(2018, 8, 1)));
    assert_eq!(ymwd(2018, 8, Weekday::Thu, 1), Some(NaiveDate::from_ymd(2018, 8, 2)));
    assert_eq!(ymwd(2018, 8, Weekday::Sun, 1), Some(NaiveDate::from_ymd(2018, 8, 5)));
    assert_eq!(ymwd(2018, 8, Weekday::Mon, 1), Some(NaiveDate::from_ymd(2018, 8, 6)));
    assert_eq!(ymwd(2018, 8, Weekday::Tue, 1), Some(NaiveDate::from_ymd(2018, 8, 7)));
    assert_eq!(ymwd(2018, 8, Weekday::Wed, 2), Some(NaiveDate::from_ymd(2018, 8, 8)));
    assert_eq!(ymwd(2018, 8, Weekday::Sun, 2), Some(NaiveDate::from_ymd(2018, 8, 12)));
    assert_eq!(ymwd(2018, 8, Weekday::Thu, 3), Some(NaiveDate::from_ymd(2018, 8, 16)));
    assert_eq!(ymwd(2018, 8, Weekday::Thu, 4), Some(NaiveDate::from_ymd(2018, 8, 23)));
    assert_eq!(ymwd(2018, 8, Weekday::Thu, 5), Some(NaiveDate::from_ymd(2018, 8, 30)));
    assert_eq!(ymwd(2018, 8, Weekday::Fri, 5), Some(NaiveDate::from_ymd(2018, 8, 31)));
    assert_eq!(ymwd(2018, 8, Weekday::Sat, 5), None);
    assert_eq!(ymwd(2018, 13, Weekday::Sat, 1), None);
}

#[test]
fn test_date_fields() {
    fn check(year: i32, month: u32, day: u32, ordinal: u32) {
        let d1 = NaiveDate::from_ymd(year, month, day);
        assert_eq!(d1.year(), year);
        assert_eq!(d1.month(), month);
        assert_eq!(d1.day(), day);
        assert_eq!(d1.ordinal(), ordinal);

        let d2 = NaiveDate::from_yo(year, ordinal);
        assert_eq!(d2.year(), year);
        assert_eq!(d2.month(), month);
        assert_eq!(d2.day(), day);
        assert_eq!(d2.ordinal(), ordinal);

        assert_eq!(d1, d2);
    }

    check(2012, 1, 1, 1);
    check(2012, 1, 2, 2);
    check(2012, 2, 1, 32);
    check(2012, 2, 29, 60);
    check(2012, 3, 1, 61);
    check(2012, 4, 9, 100);
    check(2012, 7, 18, 200);
    check(2012, 10, 26, 300);
    check(2012, 12, 31, 366);

    check(2014, 1, 1, 1);
    check(2014, 1, 2, 2);
    check(2014, 2, 1, 32);
    check(2014, 2, 28, 59);
    check(2014, 3, 1, 60);
    check(2014, 4, 10, 100);
    check(2014, 7, 19, 200);
    check(2014, 10, 27, 300);
    check(2014, 12, 31, 365);
}

#[test]
fn test_date_zero_based_fields() {
    let d = NaiveDate::from_ymd(2016, 3, 1);
    assert_eq!(d.month0(), 2);
    assert_eq!(d.day0(), 0);
    assert_eq!(d.ordinal0(), 60);
    assert_eq!(d.with_month0(0), Some(NaiveDate::from_ymd(2016, 1, 1)));
    assert_eq!(d.with_month0(12), None);
    assert_eq!(d.with_month0(u32::MAX), None);
    assert_eq!(d.with_day0(30), Some(NaiveDate::from_ymd(2016, 3, 31)));
    assert_eq!(d.with_day0(u32::MAX), None);
    assert_eq!(d.with_ordinal0(365), Some(NaiveDate::from_ymd(2016, 12, 31)));
    assert_eq!(d.with_ordinal0(366), None);
    assert_eq!(d.with_ordinal0(u32::MAX), None);
}

#[test]
fn test_date_weekday() {
    assert_eq!(NaiveDate::from_ymd(1582, 10, 15).weekday(), Weekday::Fri);
    // May 20, 1875 = ISO 8601 reference date
    assert_eq!(NaiveDate::from_ymd(1875, 5, 20).weekday(), Weekday::Thu);
    assert_eq!(NaiveDate::from_ymd(2000, 1, 1).weekday(), Weekday::Sat);
    assert_eq!(NaiveDate::from_ymd(1970, 1, 1).weekday(), Weekday::Thu);
    assert_eq!(NaiveDate::from_ymd(0, 1, 1).weekday(), Weekday::Sat);
}

#[test]
fn test_date_weekday_is_consistent_with_succ() {
    let mut d = NaiveDate::from_ymd(1999, 12, 1);
    let mut weekday = d.weekday();
    for _ in 0..1000 {
        d = d.succ();
        weekday = weekday.succ();
        assert_eq!(d.weekday(), weekday);
    }
}

#[test]
fn test_date_with_fields() {
    let d = NaiveDate::from_ymd(2000, 2, 29);
    assert_eq!(d.with_year(-400), None);
    assert_eq!(d.with_year(0), Some(NaiveDate::from_ymd(0, 2, 29)));
    assert_eq!(d.with_year(100), None);
    assert_eq!(d.with_year(1600), Some(NaiveDate::from_ymd(1600, 2, 29)));
    assert_eq!(d.with_year(1900), None);
    assert_eq!(d.with_year(2000), Some(NaiveDate::from_ymd(2000, 2, 29)));
    assert_eq!(d.with_year(2001), None);
    assert_eq!(d.with_year(2004), Some(NaiveDate::from_ymd(2004, 2, 29)));
    assert_eq!(d.with_year(i32::MAX), None);

    let d = NaiveDate::from_ymd(2000, 4, 30);
    assert_eq!(d.with_month(0), None);
    assert_eq!(d.with_month(1), Some(NaiveDate::from_ymd(2000, 1, 30)));
    assert_eq!(d.with_month(2), None);
    assert_eq!(d.with_month(3), Some(NaiveDate::from_ymd(2000, 3, 30)));
    assert_eq!(d.with_month(4), Some(NaiveDate::from_ymd(2000, 4, 30)));
    assert_eq!(d.with_month(12), Some(NaiveDate::from_ymd(2000, 12, 30)));
    assert_eq!(d.with_month(13), None);
    assert_eq!(d.with_month(u32::MAX), None);

    let d = NaiveDate::from_ymd(2000, 2, 8);
    assert_eq!(d.with_day(0), None);
    assert_eq!(d.with_day(1), Some(NaiveDate::from_ymd(2000, 2, 1)));
    assert_eq!(d.with_day(29), Some(NaiveDate::from_ymd(2000, 2, 29)));
    assert_eq!(d.with_day(30), None);
    assert_eq!(d.with_day(u32::MAX), None);

    let d = NaiveDate::from_ymd(2000, 5, 5);
    assert_eq!(d.with_ordinal(0), None);
    assert_eq!(d.with_ordinal(1), Some(NaiveDate::from_ymd(2000, 1, 1)));
    assert_eq!(d.with_ordinal(60), Some(NaiveDate::from_ymd(2000, 2, 29)));
    assert_eq!(d.with_ordinal(61), Some(NaiveDate::from_ymd(2000, 3, 1)));
    assert_eq!(d.with_ordinal(366), Some(NaiveDate::from_ymd(2000, 12, 31)));
    assert_eq!(d.with_ordinal(367), None);
    assert_eq!(d.with_ordinal(1 << 28 | 60), None);
    assert_eq!(d.with_ordinal(u32::MAX), None);
}

#[test]
fn test_date_with_year_keeps_year_flags_consistent() {
    let d = NaiveDate::from_ymd(2023, 3, 1);
    let moved = d.with_year(2024).unwrap();
    assert_eq!(moved.year_flags().0, YearFlags::from_year(2024).0);
    assert_eq!(moved.weekday(), Weekday::Fri);
    assert_eq!(moved.ordinal(), 61);
}

#[test]
fn test_date_num_days_from_ce() {
    assert_eq!(NaiveDate::from_ymd(1, 1, 1).num_days_from_ce(), 1);

    for year in 1..10001 {
        assert_eq!(
            NaiveDate::from_ymd(year, 1, 1).num_days_from_ce(),
            NaiveDate::from_ymd(year - 1, 12, 31).num_days_from_ce() + 1
        );
    }
}

#[test]
fn test_date_succ() {
    let ymd = NaiveDate::from_ymd;
    assert_eq!(ymd(2014, 5, 6).succ_opt(), Some(ymd(2014, 5, 7)));
    assert_eq!(ymd(2014, 5, 31).succ_opt(), Some(ymd(2014, 6, 1)));
    assert_eq!(ymd(2014, 12, 31).succ_opt(), Some(ymd(2015, 1, 1)));
    assert_eq!(ymd(2016, 2, 28).succ_opt(), Some(ymd(2016, 2, 29)));
    assert_eq!(ymd(2016, 12, 30).succ_opt(), Some(ymd(2016, 12, 31)));
    assert_eq!(ymd(2015, 12, 31).succ_opt(), Some(ymd(2016, 1, 1)));
    assert_eq!(ymd(NaiveDate::MAX.year(), 12, 31).succ_opt(), None);
}

#[test]
fn test_date_pred() {
    let ymd = NaiveDate::from_ymd;
    assert_eq!(ymd(2016, 3, 1).pred_opt(), Some(ymd(2016, 2, 29)));
    assert_eq!(ymd(2015, 1, 1).pred_opt(), Some(ymd(2014, 12, 31)));
    assert_eq!(ymd(2014, 6, 1).pred_opt(), Some(ymd(2014, 5, 31)));
    assert_eq!(ymd(2014, 5, 7).pred_opt(), Some(ymd(2014, 5, 6)));
    assert_eq!(ymd(2017, 1, 1).pred_opt(), Some(ymd(2016, 12, 31)));
    assert_eq!(ymd(NaiveDate::MIN.year(), 1, 1).pred_opt(), None);
}

#[test]
#[should_panic(expected = "out of bound")]
fn test_date_succ_panics_at_max() {
    let _ = NaiveDate::MAX.succ();
}

#[test]
fn test_date_add() {
    fn check((y1, m1, d1): (i32, u32, u32), rhs: TimeDelta, ymd: Option<(i32, u32, u32)>) {
        let lhs = NaiveDate::from_ymd(y1, m1, d1);
        let sum = ymd.map(|(y, m, d)| NaiveDate::from_ymd(y, m, d));
        assert_eq!(lhs.checked_add_signed(rhs), sum);
        assert_eq!(lhs.checked_sub_signed(-rhs), sum);
    }

    check((2014, 1, 1), TimeDelta::zero(), Some((2014, 1, 1)));
    check((2014, 1, 1), TimeDelta::seconds(86399), Some((2014, 1, 1)));
    // always round towards zero
    check((2014, 1, 1), TimeDelta::seconds(-86399), Some((2014, 1, 1)));
    check((2014, 1, 1), TimeDelta::days(1), Some((2014, 1, 2)));
    check((2014, 1, 1), TimeDelta::days(-1), Some((2013, 12, 31)));
    check((2014, 1, 1), TimeDelta::days(364), Some((2014, 12, 31)));
    check((2014, 1, 1), TimeDelta::days(365 * 4 + 1), Some((2018, 1, 1)));
    check((2014, 1, 1), TimeDelta::days(365 * 400 + 97), Some((2414, 1, 1)));

    check((7, 1, 1), TimeDelta::days(-(365 * 7 + 2)), Some((0, 1, 1)));

    // overflow check
    check((0, 1, 1), TimeDelta::days(MAX_DAYS_FROM_YEAR_0 as i64), Some((MAX_YEAR, 12, 31)));
    check((0, 1, 1), TimeDelta::days(MAX_DAYS_FROM_YEAR_0 as i64 + 1), None);
    check((0, 1, 1), TimeDelta::MAX, None);
    check((0, 1, 1), TimeDelta::days(-1), None);
    check((MAX_YEAR, 12, 31), TimeDelta::days(-(MAX_DAYS_FROM_YEAR_0 as i64)), Some((0, 1, 1)));
    check((0, 1, 1), TimeDelta::MIN, None);
}

#[test]
fn test_date_add_days() {
    let ymd = NaiveDate::from_ymd;
    assert_eq!(ymd(2014, 1, 1).add_days(0), Some(ymd(2014, 1, 1)));
    assert_eq!(ymd(2014, 1, 1).add_days(364), Some(ymd(2014, 12, 31)));
    assert_eq!(ymd(2014, 1, 1).add_days(365), Some(ymd(2015, 1, 1)));
    assert_eq!(ymd(2014, 1, 1).add_days(-1), Some(ymd(2013, 12, 31)));
    assert_eq!(ymd(2016, 12, 31).add_days(-366), Some(ymd(2015, 12, 31)));
    assert_eq!(NaiveDate::MIN.add_days(-1), None);
    assert_eq!(NaiveDate::MAX.add_days(1), None);
    assert_eq!(NaiveDate::MIN.add_days(MAX_DAYS_FROM_YEAR_0), Some(NaiveDate::MAX));
    assert_eq!(NaiveDate::MAX.add_days(-MAX_DAYS_FROM_YEAR_0), Some(NaiveDate::MIN));
    assert_eq!(ymd(2014, 1, 1).add_days(i32::MAX), None);
    assert_eq!(ymd(2014, 1, 1).add_days(i32::MIN), None);
}

#[test]
fn test_date_sub() {
    fn check((y1, m1, d1): (i32, u32, u32), (y2, m2, d2): (i32, u32, u32), diff: TimeDelta) {
        let lhs = NaiveDate::from_ymd(y1, m1, d1);
        let rhs = NaiveDate::from_ymd(y2, m2, d2);
        assert_eq!(lhs.signed_duration_since(rhs), diff);
        assert_eq!(rhs.signed_duration_since(lhs), -diff);
        assert_eq!(lhs - rhs, diff);
    }

    check((2014, 1, 1), (2014, 1, 1), TimeDelta::zero());
    check((2014, 1, 2), (2014, 1, 1), TimeDelta::days(1));
    check((2014, 12, 31), (2014, 1, 1), TimeDelta::days(364));
    check((2015, 1, 3), (2014, 1, 1), TimeDelta::days(365 + 2));
    check((2018, 1, 1), (2014, 1, 1), TimeDelta::days(365 * 4 + 1));
    check((2414, 1, 1), (2014, 1, 1), TimeDelta::days(365 * 400 + 97));

    check((MAX_YEAR, 12, 31), (0, 1, 1), TimeDelta::days(MAX_DAYS_FROM_YEAR_0 as i64));
}

#[test]
fn test_date_add_sub_days() {
    let ymd = NaiveDate::from_ymd;
    assert_eq!(ymd(2022, 2, 20).checked_add_days(Days::new(9)), Some(ymd(2022, 3, 1)));
    assert_eq!(ymd(2022, 3, 1).checked_sub_days(Days::new(9)), Some(ymd(2022, 2, 20)));
    assert_eq!(ymd(2022, 2, 20).checked_add_days(Days::new(0)), Some(ymd(2022, 2, 20)));
    assert_eq!(ymd(2022, 2, 20).checked_add_days(Days::new(i32::MAX as u64 + 1)), None);
    assert_eq!(ymd(2022, 2, 20).checked_sub_days(Days::new(u64::MAX)), None);
    assert_eq!(ymd(2022, 2, 20) + Days::new(9), ymd(2022, 3, 1));
    assert_eq!(ymd(2022, 3, 1) - Days::new(9), ymd(2022, 2, 20));
}

#[test]
fn test_date_add_sub_months() {
    let ymd = NaiveDate::from_ymd;

    assert_eq!(ymd(2022, 10, 29).checked_add_months(Months::new(16)), Some(ymd(2024, 2, 29)));
    assert_eq!(ymd(2022, 10, 31).checked_add_months(Months::new(4)), Some(ymd(2023, 2, 28)));
    assert_eq!(ymd(2020, 3, 31).checked_sub_months(Months::new(1)), Some(ymd(2020, 2, 29)));
    assert_eq!(ymd(2021, 3, 31).checked_sub_months(Months::new(1)), Some(ymd(2021, 2, 28)));
    assert_eq!(ymd(2021, 5, 31).checked_add_months(Months::new(1)), Some(ymd(2021, 6, 30)));
    assert_eq!(ymd(2021, 1, 15).checked_sub_months(Months::new(13)), Some(ymd(2019, 12, 15)));
    assert_eq!(ymd(2021, 1, 15).checked_add_months(Months::new(0)), Some(ymd(2021, 1, 15)));

    // edges of the representable range
    assert_eq!(ymd(0, 12, 15).checked_sub_months(Months::new(11)), Some(ymd(0, 1, 15)));
    assert_eq!(ymd(0, 12, 15).checked_sub_months(Months::new(12)), None);
    assert_eq!(
        ymd(MAX_YEAR, 1, 31).checked_add_months(Months::new(11)),
        Some(ymd(MAX_YEAR, 12, 31))
    );
    assert_eq!(ymd(MAX_YEAR, 1, 31).checked_add_months(Months::new(12)), None);
    assert_eq!(ymd(2021, 1, 15).checked_add_months(Months::new(u32::MAX)), None);
    assert_eq!(ymd(2021, 1, 15).checked_sub_months(Months::new(i32::MAX as u32 + 1)), None);

    assert_eq!(ymd(2014, 1, 31) + Months::new(1), ymd(2014, 2, 28));
    assert_eq!(ymd(2014, 3, 31) - Months::new(1), ymd(2014, 2, 28));
}

#[test]
#[should_panic(expected = "`NaiveDate + Months` out of range")]
fn test_date_add_months_panics() {
    let _ = NaiveDate::MAX + Months::new(1);
}

#[test]
fn test_date_addassignment() {
    let ymd = NaiveDate::from_ymd;
    let mut date = ymd(2016, 10, 1);
    date += TimeDelta::days(10);
    assert_eq!(date, ymd(2016, 10, 11));
    date += TimeDelta::days(30);
    assert_eq!(date, ymd(2016, 11, 10));
}

#[test]
fn test_date_subassignment() {
    let ymd = NaiveDate::from_ymd;
    let mut date = ymd(2016, 10, 11);
    date -= TimeDelta::days(10);
    assert_eq!(date, ymd(2016, 10, 1));
    date -= TimeDelta::days(2);
    assert_eq!(date, ymd(2016, 9, 29));
}

#[test]
fn test_date_years_since() {
    let base = NaiveDate::from_ymd(2000, 2, 29);
    assert_eq!(NaiveDate::from_ymd(2001, 2, 28).years_since(base), Some(0));
    assert_eq!(NaiveDate::from_ymd(2001, 3, 1).years_since(base), Some(1));
    assert_eq!(NaiveDate::from_ymd(2004, 2, 29).years_since(base), Some(4));
    assert_eq!(base.years_since(base), Some(0));
    assert_eq!(NaiveDate::from_ymd(2000, 2, 28).years_since(base), None);
    assert_eq!(NaiveDate::MAX.years_since(NaiveDate::MIN), Some(MAX_YEAR as u32));
}

#[test]
fn test_date_leap_year() {
    for year in 0..=MAX_YEAR {
        let date = NaiveDate::from_ymd(year, 1, 1);
        let is_leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(date.leap_year(), is_leap);
        assert_eq!(date.leap_year(), date.with_ordinal(366).is_some());
    }
}

#[test]
fn test_day_iterator_limit() {
    assert_eq!(NaiveDate::from_ymd(MAX_YEAR, 12, 29).iter_days().take(4).count(), 2);
    assert_eq!(NaiveDate::from_ymd(MIN_YEAR, 1, 3).iter_days().rev().take(4).count(), 2);
}

#[test]
fn test_week_iterator_limit() {
    assert_eq!(NaiveDate::from_ymd(MAX_YEAR, 12, 12).iter_weeks().take(4).count(), 2);
    assert_eq!(NaiveDate::from_ymd(MIN_YEAR, 1, 15).iter_weeks().rev().take(4).count(), 2);
}

#[test]
fn test_iterator_size_hint() {
    let iter = NaiveDate::from_ymd(MAX_YEAR, 12, 29).iter_days();
    assert_eq!(iter.len(), 2);
    let iter = NaiveDate::from_ymd(MAX_YEAR, 12, 10).iter_weeks();
    assert_eq!(iter.len(), 3);
}

#[test]
fn test_date_fmt() {
    assert_debug_eq(NaiveDate::from_ymd(2012, 3, 4), "2012-03-04");
    assert_debug_eq(NaiveDate::from_ymd(0, 3, 4), "0000-03-04");
    assert_debug_eq(NaiveDate::from_ymd(307, 3, 4), "0307-03-04");
    assert_debug_eq(NaiveDate::from_ymd(12345, 3, 4), "+12345-03-04");

    assert_display_eq(NaiveDate::from_ymd(2012, 3, 4), "2012-03-04");
    assert_display_eq(NaiveDate::from_ymd(0, 3, 4), "0000-03-04");
    assert_display_eq(NaiveDate::from_ymd(307, 3, 4), "0307-03-04");
    assert_display_eq(NaiveDate::from_ymd(12345, 3, 4), "+12345-03-04");
    assert_display_eq(NaiveDate::MAX, "+262142-12-31");

    // the format specifier should have no effect on `NaiveDate`
    assert_eq!(format!("{:+30?}", NaiveDate::from_ymd(1234, 5, 6)), "1234-05-06");
    assert_eq!(format!("{:30?}", NaiveDate::from_ymd(12345, 6, 7)), "+12345-06-07");
}

#[test]
fn test_date_default() {
    assert_eq!(NaiveDate::default(), NaiveDate::UNIX_EPOCH);
    assert_eq!(NaiveDate::UNIX_EPOCH.num_days_from_ce(), super::UNIX_EPOCH_DAY);
}

#[test]
fn test_date_ordering() {
    let ymd = NaiveDate::from_ymd;
    assert!(ymd(2014, 1, 1) < ymd(2014, 1, 2));
    assert!(ymd(2014, 1, 31) < ymd(2014, 2, 1));
    assert!(ymd(2014, 12, 31) < ymd(2015, 1, 1));
    assert!(ymd(2015, 12, 31) < ymd(2016, 1, 1));
    assert!(NaiveDate::MIN < NaiveDate::MAX);
}

#[test]
fn test_date_to_mdf_to_date() {
    for year in 0..=400 {
        for ordinal in 1..=366 {
            if let Some(date) = NaiveDate::from_yo_opt(year, ordinal) {
                assert_eq!(date, NaiveDate::from_ymd(year, date.month(), date.day()));
            }
        }
    }
}
