//! Easter Sunday by the Western and Orthodox computus.

use hol_core::errors::Result;

use crate::date::Date;
use crate::julian::julian_to_gregorian;

/// Which computus to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasterMethod {
    /// Gregorian computus (Catholic and Protestant churches).
    #[default]
    Western,
    /// Julian computus, expressed as a proleptic Gregorian date.
    Orthodox,
}

/// Easter Sunday of `year`.
pub fn easter(year: u16, method: EasterMethod) -> Result<Date> {
    match method {
        EasterMethod::Western => {
            let (m, d) = western_month_day(year as i32);
            Date::from_ymd(year, m, d)
        }
        EasterMethod::Orthodox => {
            let (m, d) = julian_month_day(year as i32);
            julian_to_gregorian(year as i32, m, d)
        }
    }
}

// Oudin's algorithm.
fn western_month_day(y: i32) -> (u8, u8) {
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    (month as u8, day as u8)
}

// Meeus' Julian algorithm; the result is a Julian calendar date.
fn julian_month_day(y: i32) -> (u8, u8) {
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    (month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn western() {
        assert_eq!(easter(2023, EasterMethod::Western).unwrap(), date(2023, 4, 9));
        assert_eq!(easter(2024, EasterMethod::Western).unwrap(), date(2024, 3, 31));
        assert_eq!(easter(2000, EasterMethod::Western).unwrap(), date(2000, 4, 23));
        assert_eq!(easter(2038, EasterMethod::Western).unwrap(), date(2038, 4, 25));
    }

    #[test]
    fn orthodox() {
        assert_eq!(easter(2023, EasterMethod::Orthodox).unwrap(), date(2023, 4, 16));
        assert_eq!(easter(2024, EasterMethod::Orthodox).unwrap(), date(2024, 5, 5));
        assert_eq!(easter(2025, EasterMethod::Orthodox).unwrap(), date(2025, 4, 20));
        assert_eq!(easter(1991, EasterMethod::Orthodox).unwrap(), date(1991, 4, 7));
    }
}
