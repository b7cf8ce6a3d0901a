//! Integration tests for `Date`, the Julian adapter and Easter computus.

use proptest::prelude::*;

use hol_time::date::{days_in_month, is_leap_year};
use hol_time::julian::{gregorian_offset, gregorian_to_julian, julian_to_gregorian};
use hol_time::{easter, Date, EasterMethod, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Gregorian ────────────────────────────────────────────────────────────────

#[test]
fn consecutive_dates() {
    // Walk 1890..2110 day by day and check that the fields advance
    // consistently with the serial number.
    let start = date(1890, 1, 1);
    let end = date(2110, 12, 31);
    let mut prev = start;
    let mut d = start + 1;
    while d <= end {
        assert_eq!(d.serial(), prev.serial() + 1);
        assert_eq!(d.weekday(), prev.weekday().succ(), "weekday at {d}");
        let (py, pm, pd) = prev.ymd();
        let (y, m, dd) = d.ymd();
        if pd < days_in_month(py, pm) {
            assert_eq!((y, m, dd), (py, pm, pd + 1));
        } else if pm < 12 {
            assert_eq!((y, m, dd), (py, pm + 1, 1));
        } else {
            assert_eq!((y, m, dd), (py + 1, 1, 1));
        }
        prev = d;
        d += 1;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2023));
}

#[test]
fn invalid_dates_rejected() {
    assert!(Date::from_ymd(2023, 2, 29).is_err());
    assert!(Date::from_ymd(2023, 13, 1).is_err());
    assert!(Date::from_ymd(2023, 4, 31).is_err());
    assert!(Date::from_ymd(10_000, 1, 1).is_err());
}

#[test]
fn nth_weekday_in_month() {
    // Second Monday of October 2023.
    assert_eq!(
        Date::nth_weekday(2, Weekday::Monday, 2023, 10).unwrap(),
        date(2023, 10, 9)
    );
    // Last Monday of May 2023.
    assert_eq!(
        Date::last_weekday(Weekday::Monday, 2023, 5).unwrap(),
        date(2023, 5, 29)
    );
}

// ─── Julian / Easter ──────────────────────────────────────────────────────────

#[test]
fn julian_christmas() {
    for year in 1901..=2099 {
        let d = julian_to_gregorian(year, 12, 25).unwrap();
        assert_eq!(d, date(year as u16 + 1, 1, 7), "Julian Christmas {year}");
    }
}

#[test]
fn easter_is_sunday_in_spring() {
    for year in 1900..=2100u16 {
        for method in [EasterMethod::Western, EasterMethod::Orthodox] {
            let e = easter(year, method).unwrap();
            assert_eq!(e.weekday(), Weekday::Sunday, "{method:?} {year}");
            assert!(e >= date(year, 3, 22) && e <= date(year, 5, 8), "{method:?} {year}: {e}");
        }
    }
}

#[test]
fn orthodox_never_before_western() {
    for year in 1900..=2100u16 {
        let w = easter(year, EasterMethod::Western).unwrap();
        let o = easter(year, EasterMethod::Orthodox).unwrap();
        assert!(o >= w, "{year}: orthodox {o} before western {w}");
    }
}

#[test]
fn known_easters() {
    let known = [
        (2019, (4, 21), (4, 28)),
        (2020, (4, 12), (4, 19)),
        (2021, (4, 4), (5, 2)),
        (2022, (4, 17), (4, 24)),
        (2023, (4, 9), (4, 16)),
        (2024, (3, 31), (5, 5)),
        (2025, (4, 20), (4, 20)),
    ];
    for (year, (wm, wd), (om, od)) in known {
        assert_eq!(easter(year, EasterMethod::Western).unwrap(), date(year, wm, wd));
        assert_eq!(easter(year, EasterMethod::Orthodox).unwrap(), date(year, om, od));
    }
}

proptest! {
    #[test]
    fn iso_string_roundtrip(serial in -693_594i32..=2_958_464) {
        let d = Date::from_serial(serial).unwrap();
        let parsed: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }

    #[test]
    fn julian_roundtrip(serial in 1i32..80_000) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, dd) = gregorian_to_julian(d);
        prop_assert_eq!(julian_to_gregorian(y, m, dd).unwrap(), d);
        prop_assert!((12..=14).contains(&gregorian_offset(d)));
    }
}
