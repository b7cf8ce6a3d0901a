//! Julian calendar adapter.
//!
//! Conversions go through the Julian Day Number, so the Julian → Gregorian
//! difference follows the leap-year divergence of the two calendars (10 days
//! in 1582, 13 days from 1900-03-14 to 2100-03-14) instead of a fixed
//! offset.

use hol_core::errors::{Error, Result};

use crate::date::Date;
use crate::easter::EasterMethod;
use crate::month::Month;

/// Julian Day Number of serial 0 (1899-12-31).
const JDN_OF_SERIAL_ZERO: i64 = 2_415_020;

/// Which calendar a church uses for its fixed feasts and its computus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChurchCalendar {
    /// Western churches: fixed feasts on Gregorian dates.
    #[default]
    Gregorian,
    /// Orthodox churches: fixed feasts on Julian dates.
    Julian,
}

impl ChurchCalendar {
    /// The Easter computus this church follows.
    pub fn easter_method(&self) -> EasterMethod {
        match self {
            ChurchCalendar::Gregorian => EasterMethod::Western,
            ChurchCalendar::Julian => EasterMethod::Orthodox,
        }
    }

    /// The Gregorian date, inside `year`, of the fixed feast that falls on
    /// `month`/`day` of this church's calendar.
    pub fn fixed_date(&self, year: u16, month: Month, day: u8) -> Option<Date> {
        match self {
            ChurchCalendar::Gregorian => Date::from_month_day(year, month, day).ok(),
            ChurchCalendar::Julian => julian_date_in_gregorian_year(year, month, day),
        }
    }
}

/// `true` if `year` is a leap year in the Julian calendar.
pub fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

fn julian_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_julian_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Convert a Julian calendar date to the proleptic Gregorian [`Date`].
pub fn julian_to_gregorian(year: i32, month: u8, day: u8) -> Result<Date> {
    if !(1..=12).contains(&month) || day == 0 || day > julian_days_in_month(year, month) {
        return Err(Error::InvalidDate(format!(
            "invalid Julian date {year}-{month:02}-{day:02}"
        )));
    }
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let jdn = day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - 32_083;
    let serial = i32::try_from(jdn - JDN_OF_SERIAL_ZERO)
        .map_err(|_| Error::InvalidDate(format!("Julian year {year} out of range")))?;
    Date::from_serial(serial)
}

/// Express a Gregorian [`Date`] as a Julian `(year, month, day)`.
pub fn gregorian_to_julian(date: Date) -> (i32, u8, u8) {
    let jdn = date.serial() as i64 + JDN_OF_SERIAL_ZERO;
    let c = jdn + 32_082;
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = d - 4800 + m / 10;
    (year as i32, month as u8, day as u8)
}

/// Number of days the Julian calendar lags the Gregorian one on `date`.
///
/// The lag grows by one day on every Julian February 29 of a year that is
/// not a Gregorian leap year.
pub fn gregorian_offset(date: Date) -> i32 {
    let (jy, jm, _) = gregorian_to_julian(date);
    let y = if jm <= 2 { jy - 1 } else { jy };
    y.div_euclid(100) - y.div_euclid(400) - 2
}

/// The Gregorian date inside `year` on which the Julian feast `month`/`day`
/// falls, or `None` if it does not fall inside that year.
///
/// A Julian date near the turn of the year may belong to the previous Julian
/// year (Julian December 25 is a January date from 1901 to 2100).
pub fn julian_date_in_gregorian_year(year: u16, month: Month, day: u8) -> Option<Date> {
    let y = year as i32;
    [y - 1, y, y + 1].into_iter().find_map(|jy| {
        julian_to_gregorian(jy, month.number(), day)
            .ok()
            .filter(|d| d.year() == year)
    })
}
