use super::NaiveDateTime;
use crate::naive::{Days, NaiveDate, NaiveTime};
use crate::utils::{assert_debug_eq, assert_display_eq};
use crate::{Datelike, Months, TimeDelta, Timelike, Weekday};

fn ymdhms(y: i32, m: u32, d: u32, h: u32, n: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, n, s).unwrap()
}

#[test]
fn test_datetime_new() {
    let date = NaiveDate::from_ymd(2014, 7, 8);
    let time = NaiveTime::from_hms(9, 10, 11);
    let dt = NaiveDateTime::new(date, time);
    assert_eq!(dt.date(), date);
    assert_eq!(dt.time(), time);
    assert_eq!(dt, date.and_time(time));
    assert_eq!(dt, NaiveDate::from_yo(2014, 189).and_hms(9, 10, 11));
}

#[test]
fn test_datetime_from_timestamp() {
    let from_timestamp = NaiveDateTime::from_timestamp_opt;
    assert_eq!(from_timestamp(-1), Some(ymdhms(1969, 12, 31, 23, 59, 59)));
    assert_eq!(from_timestamp(0), Some(ymdhms(1970, 1, 1, 0, 0, 0)));
    assert_eq!(from_timestamp(1), Some(ymdhms(1970, 1, 1, 0, 0, 1)));
    assert_eq!(from_timestamp(1_000_000_000), Some(ymdhms(2001, 9, 9, 1, 46, 40)));
    assert_eq!(from_timestamp(0x7fffffff), Some(ymdhms(2038, 1, 19, 3, 14, 7)));
    assert_eq!(from_timestamp(-1_000_000_000), Some(ymdhms(1938, 4, 24, 22, 13, 20)));
    assert_eq!(from_timestamp(-62_167_219_200), Some(NaiveDateTime::MIN));
    assert_eq!(from_timestamp(-62_167_219_201), None);
    assert_eq!(from_timestamp(8_210_266_876_799), Some(NaiveDateTime::MAX));
    assert_eq!(from_timestamp(8_210_266_876_800), None);
    assert_eq!(from_timestamp(i64::MIN), None);
    assert_eq!(from_timestamp(i64::MAX), None);
}

#[test]
#[should_panic(expected = "invalid or out-of-range datetime")]
fn test_datetime_from_timestamp_panics() {
    let _ = NaiveDateTime::from_timestamp(i64::MAX);
}

#[test]
fn test_datetime_timestamp() {
    assert_eq!(ymdhms(1969, 12, 31, 23, 59, 59).timestamp(), -1);
    assert_eq!(ymdhms(1970, 1, 1, 0, 0, 0).timestamp(), 0);
    assert_eq!(ymdhms(1970, 1, 1, 0, 0, 1).timestamp(), 1);
    assert_eq!(ymdhms(1969, 7, 20, 20, 17, 40).timestamp(), -14_182_940);
    assert_eq!(ymdhms(2014, 5, 6, 7, 8, 9).timestamp(), 1_399_360_089);
    assert_eq!(NaiveDateTime::MIN.timestamp(), -62_167_219_200);
    assert_eq!(NaiveDateTime::MAX.timestamp(), 8_210_266_876_799);
    assert_eq!(NaiveDateTime::UNIX_EPOCH.timestamp(), 0);
}

#[test]
fn test_datetime_timestamp_round_trip() {
    let dt = NaiveDateTime::from_timestamp(1_500_000_000);
    assert_display_eq(dt, "2017-07-14 02:40:00");
    assert_eq!(dt.timestamp(), 1_500_000_000);

    for secs in (-62_167_219_200i64..8_210_266_876_799).step_by(1_234_567_891) {
        let dt = NaiveDateTime::from_timestamp(secs);
        assert_eq!(dt.timestamp(), secs);
    }
}

#[test]
fn test_datetime_add() {
    fn check(
        (y, m, d, h, n, s): (i32, u32, u32, u32, u32, u32),
        rhs: TimeDelta,
        result: Option<(i32, u32, u32, u32, u32, u32)>,
    ) {
        let lhs = ymdhms(y, m, d, h, n, s);
        let sum = result.map(|(y, m, d, h, n, s)| ymdhms(y, m, d, h, n, s));
        assert_eq!(lhs.checked_add_signed(rhs), sum);
        assert_eq!(lhs.checked_sub_signed(-rhs), sum);
    }

    check((2014, 5, 6, 7, 8, 9), TimeDelta::seconds(3600 + 60 + 1), Some((2014, 5, 6, 8, 9, 10)));
    check((2014, 5, 6, 7, 8, 9), TimeDelta::seconds(-(3600 + 60 + 1)), Some((2014, 5, 6, 6, 7, 8)));
    check((2014, 5, 6, 7, 8, 9), TimeDelta::seconds(86399), Some((2014, 5, 7, 7, 8, 8)));
    check((2014, 5, 6, 7, 8, 9), TimeDelta::seconds(86_400 * 10), Some((2014, 5, 16, 7, 8, 9)));
    check((2014, 5, 6, 7, 8, 9), TimeDelta::seconds(-86_400 * 10), Some((2014, 4, 26, 7, 8, 9)));

    // overflow check
    let max_days_from_year_0 = NaiveDate::MAX.signed_duration_since(NaiveDate::from_ymd(0, 1, 1));
    check((0, 1, 1, 0, 0, 0), max_days_from_year_0, Some((NaiveDate::MAX.year(), 12, 31, 0, 0, 0)));
    check(
        (0, 1, 1, 0, 0, 0),
        max_days_from_year_0 + TimeDelta::seconds(86399),
        Some((NaiveDate::MAX.year(), 12, 31, 23, 59, 59)),
    );
    check((0, 1, 1, 0, 0, 0), max_days_from_year_0 + TimeDelta::seconds(86_400), None);
    check((0, 1, 1, 0, 0, 0), TimeDelta::MAX, None);
    check((0, 1, 1, 0, 0, 0), TimeDelta::seconds(-1), None);
    check((0, 1, 1, 0, 0, 0), TimeDelta::MIN, None);

    let max_days_from_min = NaiveDate::MAX.signed_duration_since(NaiveDate::MIN);
    check(
        (NaiveDate::MAX.year(), 12, 31, 23, 59, 59),
        -max_days_from_min,
        Some((0, 1, 1, 23, 59, 59)),
    );
    check((NaiveDate::MAX.year(), 12, 31, 23, 59, 59), TimeDelta::seconds(1), None);
}

#[test]
fn test_datetime_add_carries_into_date() {
    let dt = ymdhms(2014, 5, 6, 7, 8, 9);
    let later = dt + TimeDelta::seconds(86_399);
    assert_eq!(later, ymdhms(2014, 5, 7, 7, 8, 8));
    assert_eq!(later.timestamp(), 1_399_446_488);

    // a year end and a leap day
    assert_eq!(
        ymdhms(2015, 12, 31, 23, 59, 59) + TimeDelta::seconds(1),
        ymdhms(2016, 1, 1, 0, 0, 0)
    );
    assert_eq!(ymdhms(2016, 2, 28, 12, 0, 0) + TimeDelta::hours(24), ymdhms(2016, 2, 29, 12, 0, 0));
    assert_eq!(
        ymdhms(2016, 3, 1, 0, 0, 0) - TimeDelta::seconds(1),
        ymdhms(2016, 2, 29, 23, 59, 59)
    );
}

#[test]
fn test_datetime_sub() {
    let since = NaiveDateTime::signed_duration_since;
    assert_eq!(since(ymdhms(2014, 5, 6, 7, 8, 9), ymdhms(2014, 5, 6, 7, 8, 9)), TimeDelta::zero());
    assert_eq!(
        since(ymdhms(2014, 5, 6, 7, 8, 10), ymdhms(2014, 5, 6, 7, 8, 9)),
        TimeDelta::seconds(1)
    );
    assert_eq!(
        since(ymdhms(2014, 5, 6, 7, 8, 9), ymdhms(2014, 5, 6, 7, 8, 10)),
        TimeDelta::seconds(-1)
    );
    assert_eq!(
        since(ymdhms(2014, 5, 7, 7, 8, 9), ymdhms(2014, 5, 6, 7, 8, 10)),
        TimeDelta::seconds(86399)
    );
    assert_eq!(
        since(ymdhms(2001, 9, 9, 1, 46, 39), ymdhms(1970, 1, 1, 0, 0, 0)),
        TimeDelta::seconds(999_999_999)
    );
    assert_eq!(
        NaiveDateTime::MAX - NaiveDateTime::MIN,
        TimeDelta::seconds(8_210_266_876_799 + 62_167_219_200)
    );
    assert_eq!(
        NaiveDateTime::MIN - NaiveDateTime::MAX,
        -TimeDelta::seconds(8_210_266_876_799 + 62_167_219_200)
    );
}

#[test]
fn test_datetime_addassignment() {
    let mut date = ymdhms(2016, 10, 1, 10, 10, 10);
    date += TimeDelta::minutes(10_000_000);
    assert_eq!(date, ymdhms(2035, 10, 6, 20, 50, 10));
    date += TimeDelta::days(10);
    assert_eq!(date, ymdhms(2035, 10, 16, 20, 50, 10));
}

#[test]
fn test_datetime_subassignment() {
    let mut date = ymdhms(2016, 10, 1, 10, 10, 10);
    date -= TimeDelta::minutes(10_000_000);
    assert_eq!(date, ymdhms(1997, 9, 26, 23, 30, 10));
    date -= TimeDelta::days(10);
    assert_eq!(date, ymdhms(1997, 9, 16, 23, 30, 10));
}

#[test]
#[should_panic(expected = "`NaiveDateTime + TimeDelta` overflowed")]
fn test_datetime_add_panics() {
    let _ = NaiveDateTime::MAX + TimeDelta::seconds(1);
}

#[test]
fn test_datetime_add_sub_months() {
    let dt = ymdhms(2014, 1, 31, 12, 0, 0);
    assert_eq!(dt + Months::new(1), ymdhms(2014, 2, 28, 12, 0, 0));
    assert_eq!(dt - Months::new(2), ymdhms(2013, 11, 30, 12, 0, 0));
    assert_eq!(dt.checked_add_months(Months::new(0)), Some(dt));
    assert_eq!(dt.checked_add_months(Months::new(u32::MAX)), None);
    assert_eq!(dt.checked_sub_months(Months::new(2014 * 12 + 1)), None);
    assert_eq!(NaiveDateTime::MAX.checked_add_months(Months::new(1)), None);
    assert_eq!(NaiveDateTime::MIN.checked_sub_months(Months::new(1)), None);
}

#[test]
fn test_datetime_add_sub_days() {
    let dt = ymdhms(2022, 12, 31, 6, 30, 0);
    assert_eq!(dt + Days::new(1), ymdhms(2023, 1, 1, 6, 30, 0));
    assert_eq!(dt - Days::new(365), ymdhms(2021, 12, 31, 6, 30, 0));
    assert_eq!(dt.checked_add_days(Days::new(0)), Some(dt));
    assert_eq!(NaiveDateTime::MAX.checked_add_days(Days::new(1)), None);
    assert_eq!(NaiveDateTime::MIN.checked_sub_days(Days::new(1)), None);
    assert_eq!(dt.checked_add_days(Days::new(u64::MAX)), None);
}

#[test]
fn test_datetime_datelike() {
    let dt = ymdhms(2015, 9, 25, 12, 34, 56);
    assert_eq!(dt.year(), 2015);
    assert_eq!(dt.month(), 9);
    assert_eq!(dt.month0(), 8);
    assert_eq!(dt.day(), 25);
    assert_eq!(dt.day0(), 24);
    assert_eq!(dt.ordinal(), 268);
    assert_eq!(dt.ordinal0(), 267);
    assert_eq!(dt.weekday(), Weekday::Fri);
    assert_eq!(dt.iso_week(), dt.date().iso_week());
    assert_eq!(dt.num_days_from_ce(), dt.date().num_days_from_ce());

    assert_eq!(dt.with_year(2016), Some(ymdhms(2016, 9, 25, 12, 34, 56)));
    assert_eq!(dt.with_year(-1), None);
    assert_eq!(dt.with_month(2), Some(ymdhms(2015, 2, 25, 12, 34, 56)));
    assert_eq!(dt.with_month(13), None);
    assert_eq!(dt.with_month0(0), Some(ymdhms(2015, 1, 25, 12, 34, 56)));
    assert_eq!(dt.with_day(30), Some(ymdhms(2015, 9, 30, 12, 34, 56)));
    assert_eq!(dt.with_day(31), None);
    assert_eq!(dt.with_day0(0), Some(ymdhms(2015, 9, 1, 12, 34, 56)));
    assert_eq!(dt.with_ordinal(60), Some(ymdhms(2015, 3, 1, 12, 34, 56)));
    assert_eq!(dt.with_ordinal(366), None);
    assert_eq!(dt.with_ordinal0(0), Some(ymdhms(2015, 1, 1, 12, 34, 56)));
}

#[test]
fn test_datetime_timelike() {
    let dt = ymdhms(2015, 9, 8, 12, 34, 56);
    assert_eq!(dt.hour(), 12);
    assert_eq!(dt.minute(), 34);
    assert_eq!(dt.second(), 56);
    assert_eq!(dt.hour12(), (true, 12));
    assert_eq!(dt.num_seconds_from_midnight(), 45_296);

    assert_eq!(dt.with_hour(7), Some(ymdhms(2015, 9, 8, 7, 34, 56)));
    assert_eq!(dt.with_hour(24), None);
    assert_eq!(dt.with_minute(0), Some(ymdhms(2015, 9, 8, 12, 0, 56)));
    assert_eq!(dt.with_minute(60), None);
    assert_eq!(dt.with_second(59), Some(ymdhms(2015, 9, 8, 12, 34, 59)));
    assert_eq!(dt.with_second(60), None);
}

#[test]
fn test_datetime_ordering() {
    assert!(ymdhms(2014, 5, 6, 7, 8, 9) < ymdhms(2014, 5, 6, 7, 8, 10));
    assert!(ymdhms(2014, 5, 6, 23, 59, 59) < ymdhms(2014, 5, 7, 0, 0, 0));
    assert!(ymdhms(2013, 12, 31, 23, 59, 59) < ymdhms(2014, 1, 1, 0, 0, 0));
    assert!(NaiveDateTime::MIN < NaiveDateTime::UNIX_EPOCH);
    assert!(NaiveDateTime::UNIX_EPOCH < NaiveDateTime::MAX);
}

#[test]
fn test_datetime_from_date() {
    let date = NaiveDate::from_ymd(2016, 5, 28);
    assert_eq!(NaiveDateTime::from(date), date.and_hms(0, 0, 0));
    assert_eq!(NaiveDateTime::from(date).time(), NaiveTime::MIN);
}

#[test]
fn test_datetime_fmt() {
    assert_display_eq(ymdhms(2016, 11, 15, 7, 39, 24), "2016-11-15 07:39:24");
    assert_debug_eq(ymdhms(2016, 11, 15, 7, 39, 24), "2016-11-15T07:39:24");
    assert_display_eq(NaiveDateTime::MIN, "0000-01-01 00:00:00");
    assert_debug_eq(NaiveDateTime::MAX, "+262142-12-31T23:59:59");
    assert_display_eq(NaiveDateTime::UNIX_EPOCH, "1970-01-01 00:00:00");
}

#[test]
fn test_datetime_default() {
    assert_eq!(NaiveDateTime::default(), NaiveDateTime::UNIX_EPOCH);
    assert_eq!(NaiveDateTime::default(), ymdhms(1970, 1, 1, 0, 0, 0));
}
