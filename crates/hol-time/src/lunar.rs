//! Chinese lunisolar calendar adapter.
//!
//! Lunar dates are resolved by table lookup (see `lunar_data`); there is no
//! astronomical computation.  The table covers lunar years 1900–2100, and any
//! request outside that range fails with [`Error::LunarOutOfRange`].

use hol_core::errors::{Error, Result};

use crate::date::Date;
use crate::lunar_data::{FIRST_NEW_YEAR_SERIAL, FIRST_YEAR, LAST_YEAR, YEAR_INFO};

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Lunar year, numbered like the Gregorian year in which it starts.
    pub year: i32,
    /// Month number, 1–12.
    pub month: u8,
    /// `true` for the intercalary month that follows `month`.
    pub leap: bool,
    /// Day of the month, 1–30.
    pub day: u8,
}

impl LunarDate {
    /// A regular (non-leap) lunar date.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            leap: false,
            day,
        }
    }

    /// A date in the leap month following `month`.
    pub const fn leap(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            leap: true,
            day,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.leap { "L" } else { "" };
        write!(f, "{}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}

const fn info_year_days(info: u32) -> i32 {
    let mut days = 0;
    let mut m = 1;
    while m <= 12 {
        days += if info & (0x10000 >> m) != 0 { 30 } else { 29 };
        m += 1;
    }
    if info & 0xf != 0 {
        days += if info & 0x10000 != 0 { 30 } else { 29 };
    }
    days
}

const fn new_year_serials() -> [i32; 202] {
    let mut out = [0i32; 202];
    out[0] = FIRST_NEW_YEAR_SERIAL;
    let mut i = 0;
    while i < YEAR_INFO.len() {
        out[i + 1] = out[i] + info_year_days(YEAR_INFO[i]);
        i += 1;
    }
    out
}

/// Serial of lunar New Year for every year in the table, plus the day after
/// the last lunar year ends.
static NEW_YEAR_SERIALS: [i32; 202] = new_year_serials();

/// The Chinese lunisolar calendar backed by the static year table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChineseLunisolar;

impl ChineseLunisolar {
    /// First lunar year covered by the table.
    pub const MIN_YEAR: i32 = FIRST_YEAR;

    /// Last lunar year covered by the table.
    pub const MAX_YEAR: i32 = LAST_YEAR;

    /// Create the adapter.
    pub const fn new() -> Self {
        ChineseLunisolar
    }

    fn info(&self, year: i32) -> Result<u32> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::LunarOutOfRange {
                year,
                min: FIRST_YEAR,
                max: LAST_YEAR,
            });
        }
        Ok(YEAR_INFO[(year - FIRST_YEAR) as usize])
    }

    /// The leap month of `year`, if it has one.
    pub fn leap_month(&self, year: i32) -> Result<Option<u8>> {
        let leap = (self.info(year)? & 0xf) as u8;
        Ok((leap != 0).then_some(leap))
    }

    /// Length (29 or 30) of `month` in `year`; `leap` selects the
    /// intercalary month.
    pub fn month_days(&self, year: i32, month: u8, leap: bool) -> Result<u8> {
        let info = self.info(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidLunarDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        if leap {
            if self.leap_month(year)? != Some(month) {
                return Err(Error::InvalidLunarDate(format!(
                    "lunar year {year} has no leap month {month}"
                )));
            }
            return Ok(if info & 0x10000 != 0 { 30 } else { 29 });
        }
        Ok(if info & (0x10000 >> month) != 0 { 30 } else { 29 })
    }

    /// Number of days in lunar `year`.
    pub fn year_days(&self, year: i32) -> Result<i32> {
        Ok(info_year_days(self.info(year)?))
    }

    /// The Gregorian date of lunar New Year (month 1, day 1) of `year`.
    pub fn new_year(&self, year: u16) -> Result<Date> {
        self.lunar_to_gregorian(LunarDate::new(year as i32, 1, 1))
    }

    /// The Dragon Boat Festival (5th day of the 5th month) of `year`.
    pub fn dragon_boat(&self, year: u16) -> Result<Date> {
        self.lunar_to_gregorian(LunarDate::new(year as i32, 5, 5))
    }

    /// The Mid-Autumn Festival (15th day of the 8th month) of `year`.
    pub fn mid_autumn(&self, year: u16) -> Result<Date> {
        self.lunar_to_gregorian(LunarDate::new(year as i32, 8, 15))
    }

    /// Convert a lunar date to the Gregorian calendar.
    pub fn lunar_to_gregorian(&self, lunar: LunarDate) -> Result<Date> {
        let LunarDate {
            year,
            month,
            leap,
            day,
        } = lunar;
        let length = self.month_days(year, month, leap)?;
        if day == 0 || day > length {
            return Err(Error::InvalidLunarDate(format!(
                "{lunar}: day {day} out of range [1, {length}]"
            )));
        }
        let leap_month = self.leap_month(year)?;
        let mut offset = 0i32;
        for m in 1..month {
            offset += self.month_days(year, m, false)? as i32;
            if leap_month == Some(m) {
                offset += self.month_days(year, m, true)? as i32;
            }
        }
        if leap {
            offset += self.month_days(year, month, false)? as i32;
        }
        let start = NEW_YEAR_SERIALS[(year - FIRST_YEAR) as usize];
        Date::from_serial(start + offset + day as i32 - 1)
    }

    /// Convert a Gregorian date to the lunar calendar.
    pub fn gregorian_to_lunar(&self, date: Date) -> Result<LunarDate> {
        let serial = date.serial();
        let first = NEW_YEAR_SERIALS[0];
        let last = NEW_YEAR_SERIALS[NEW_YEAR_SERIALS.len() - 1];
        if serial < first || serial >= last {
            let year = date.year() as i32;
            return Err(Error::LunarOutOfRange {
                year: if serial < first { year - 1 } else { year },
                min: FIRST_YEAR,
                max: LAST_YEAR,
            });
        }
        // Index of the last new year on or before `serial`.
        let idx = NEW_YEAR_SERIALS.partition_point(|&s| s <= serial) - 1;
        let year = FIRST_YEAR + idx as i32;
        let leap_month = self.leap_month(year)?;
        let mut remaining = serial - NEW_YEAR_SERIALS[idx];
        for month in 1..=12u8 {
            let len = self.month_days(year, month, false)? as i32;
            if remaining < len {
                return Ok(LunarDate::new(year, month, remaining as u8 + 1));
            }
            remaining -= len;
            if leap_month == Some(month) {
                let len = self.month_days(year, month, true)? as i32;
                if remaining < len {
                    return Ok(LunarDate::leap(year, month, remaining as u8 + 1));
                }
                remaining -= len;
            }
        }
        Err(Error::InvalidLunarDate(format!(
            "{date} beyond the end of lunar year {year}"
        )))
    }

    /// The Gregorian date inside `year` of lunar `month`/`day`, whichever
    /// lunar year it belongs to.
    ///
    /// Lunar year `year` is tried first, then `year - 1` (late lunar months
    /// fall in January and February of the next Gregorian year).  Returns
    /// `Ok(None)` when neither occurrence lands inside `year`, or when the
    /// requested leap month or 30th day does not exist in either lunar year.
    pub fn lunar_date_in_year(
        &self,
        year: u16,
        month: u8,
        day: u8,
        leap: bool,
    ) -> Result<Option<Date>> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(Error::InvalidLunarDate(format!(
                "month {month} day {day} out of range"
            )));
        }
        let y = year as i32;
        // The current lunar year must be in the table; the previous one is
        // only needed for months that wrap into January.
        self.info(y)?;
        for lunar_year in [y, y - 1] {
            if lunar_year < FIRST_YEAR {
                continue;
            }
            let lunar = LunarDate {
                year: lunar_year,
                month,
                leap,
                day,
            };
            match self.lunar_to_gregorian(lunar) {
                Ok(d) if d.year() == year => return Ok(Some(d)),
                Ok(_) | Err(Error::InvalidLunarDate(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }
}

/// Holidays of the Chinese calendar that can be named symbolically and
/// resolved per Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarHoliday {
    /// The day before lunar New Year.
    NewYearsEve,
    /// Lunar New Year (1st day of the 1st month).
    NewYear,
    /// Lantern Festival (15th day of the 1st month).
    Lantern,
    /// Dragon Boat Festival (5th day of the 5th month).
    DragonBoat,
    /// Qixi (7th day of the 7th month).
    Qixi,
    /// Mid-Autumn Festival (15th day of the 8th month).
    MidAutumn,
    /// Double Ninth Festival (9th day of the 9th month).
    DoubleNinth,
}

impl LunarHoliday {
    /// The Gregorian date of this holiday in `year`.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        let cal = ChineseLunisolar;
        let (month, day) = match self {
            LunarHoliday::NewYearsEve => return cal.new_year(year)?.add_days(-1),
            LunarHoliday::NewYear => (1, 1),
            LunarHoliday::Lantern => (1, 15),
            LunarHoliday::DragonBoat => (5, 5),
            LunarHoliday::Qixi => (7, 7),
            LunarHoliday::MidAutumn => (8, 15),
            LunarHoliday::DoubleNinth => (9, 9),
        };
        cal.lunar_to_gregorian(LunarDate::new(year as i32, month, day))
    }
}

/// The Qingming solar term (Tomb Sweeping Day): April 4 or 5.
///
/// The day shifts earlier by one step of the four-year leap cycle in 2009,
/// 2041 and 2073.
pub fn qingming(year: u16) -> Result<Date> {
    let r = year % 4;
    let early = r < 1
        || (r < 2 && year >= 2009)
        || (r < 3 && year >= 2041)
        || year >= 2073;
    Date::from_ymd(year, 4, if early { 4 } else { 5 })
}
