//! Working-minute and working-hour totals of `WorkingCalendar`.

mod common;

use approx::assert_relative_eq;
use common::*;
use wc_time::Calendar;

const DEFAULT_MINUTES: i64 = 480;
const SHORT_MINUTES: i64 = 100;

#[test]
fn sum_working_minutes_between() {
    let start = date(2018, 3, 1);
    let end = date(2018, 3, 12);
    let days = [12, 8, 10, 6, 8];

    for minutes in [DEFAULT_MINUTES, SHORT_MINUTES] {
        for (setup, n) in Setup::ALL.into_iter().zip(days) {
            let cal = setup.calendar(&march_holidays(), &march_working_days(), minutes);
            assert_eq!(
                cal.sum_working_minutes_between(start, end),
                Ok(n * minutes as u64),
                "{setup:?} at {minutes} minutes"
            );
        }
    }
}

#[test]
fn sum_working_minutes_in_year() {
    let days_2018 = [365, 261, 364, 260, 262];
    let days_2020 = [366, 262, 365, 262, 264];

    for minutes in [DEFAULT_MINUTES, SHORT_MINUTES] {
        for (i, setup) in Setup::ALL.into_iter().enumerate() {
            let cal = setup.calendar(&february_holidays(), &february_working_days(), minutes);
            let m = minutes as u64;
            assert_eq!(cal.sum_working_minutes_in_year(2018), Ok(days_2018[i] * m), "{setup:?}");
            assert_eq!(cal.sum_working_minutes_in_year(2020), Ok(days_2020[i] * m), "{setup:?}");
        }
    }
}

#[test]
fn sum_working_minutes_in_month() {
    let days_2018 = [28, 20, 27, 19, 21];
    let days_2020 = [29, 20, 28, 20, 22];

    for minutes in [DEFAULT_MINUTES, SHORT_MINUTES] {
        for (i, setup) in Setup::ALL.into_iter().enumerate() {
            let cal = setup.calendar(&february_holidays(), &february_working_days(), minutes);
            let m = minutes as u64;
            assert_eq!(cal.sum_working_minutes_in_month(2018, 2), Ok(days_2018[i] * m), "{setup:?}");
            assert_eq!(cal.sum_working_minutes_in_month(2020, 2), Ok(days_2020[i] * m), "{setup:?}");
        }
    }
}

#[test]
fn sum_working_hours_between() {
    let start = date(2018, 3, 1);
    let end = date(2018, 3, 12);
    let days = [12.0, 8.0, 10.0, 6.0, 8.0];

    for minutes in [DEFAULT_MINUTES, SHORT_MINUTES] {
        for (setup, n) in Setup::ALL.into_iter().zip(days) {
            let cal = setup.calendar(&march_holidays(), &march_working_days(), minutes);
            assert_relative_eq!(
                cal.sum_working_hours_between(start, end).unwrap(),
                n * minutes as f64 / 60.0
            );
        }
    }
}

#[test]
fn sum_working_hours_in_year() {
    let days_2018 = [365.0, 261.0, 364.0, 260.0, 262.0];
    let days_2020 = [366.0, 262.0, 365.0, 262.0, 264.0];

    for minutes in [DEFAULT_MINUTES, SHORT_MINUTES] {
        for (i, setup) in Setup::ALL.into_iter().enumerate() {
            let cal = setup.calendar(&february_holidays(), &february_working_days(), minutes);
            let m = minutes as f64;
            assert_relative_eq!(cal.sum_working_hours_in_year(2018).unwrap(), days_2018[i] * m / 60.0);
            assert_relative_eq!(cal.sum_working_hours_in_year(2020).unwrap(), days_2020[i] * m / 60.0);
        }
    }
}

#[test]
fn sum_working_hours_in_month() {
    let days_2018 = [28.0, 20.0, 27.0, 19.0, 21.0];
    let days_2020 = [29.0, 20.0, 28.0, 20.0, 22.0];

    for minutes in [DEFAULT_MINUTES, SHORT_MINUTES] {
        for (i, setup) in Setup::ALL.into_iter().enumerate() {
            let cal = setup.calendar(&february_holidays(), &february_working_days(), minutes);
            let m = minutes as f64;
            assert_relative_eq!(cal.sum_working_hours_in_month(2018, 2).unwrap(), days_2018[i] * m / 60.0);
            assert_relative_eq!(cal.sum_working_hours_in_month(2020, 2).unwrap(), days_2020[i] * m / 60.0);
        }
    }
}

#[test]
fn overrides_replace_default_on_working_days_only() {
    let mut cal = Setup::Weekends.calendar(&[], &[], DEFAULT_MINUTES);
    let thursday = date(2018, 3, 1);
    let saturday = date(2018, 3, 3);
    cal.update_not_standard_working_day(thursday, 300).unwrap();
    // A weekend day with an override still contributes nothing.
    cal.update_not_standard_working_day(saturday, 600).unwrap();

    // 8 working days, one of them shortened to 300 minutes.
    let range = (date(2018, 3, 1), date(2018, 3, 12));
    assert_eq!(cal.sum_working_minutes_between(range.0, range.1), Ok(7 * 480 + 300));

    // Changing the default leaves the override alone.
    cal.update_working_time_minutes(SHORT_MINUTES).unwrap();
    assert_eq!(cal.sum_working_minutes_between(range.0, range.1), Ok(7 * 100 + 300));

    // Making Saturday an extra working day brings in its override.
    cal.add_working_day(saturday).unwrap();
    assert_eq!(cal.sum_working_minutes_between(range.0, range.1), Ok(7 * 100 + 300 + 600));
}

#[test]
fn overrides_have_no_upper_bound() {
    let mut cal = open_calendar();
    let d = date(2018, 3, 1);
    cal.update_not_standard_working_day(d, 2 * 1440).unwrap();
    assert_eq!(cal.sum_working_minutes_between(d, d), Ok(2880));
    assert_relative_eq!(cal.sum_working_hours_between(d, d).unwrap(), 48.0);
}

#[test]
fn hours_are_not_rounded() {
    let cal = Setup::WeekendsAndHolidays.calendar(&february_holidays(), &[], SHORT_MINUTES);
    // 260 days of 100 minutes.
    assert_eq!(cal.sum_working_hours_in_year(2018), Ok(26_000.0 / 60.0));
}
