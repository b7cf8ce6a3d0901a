use hol_core::errors::Result;
use hol_time::{qingming, ChineseLunisolar, Date};

use crate::builder::YearBuilder;

/// Holidays of the Chinese lunisolar calendar.
///
/// Every method fails with `LunarOutOfRange` for years the lunar table does
/// not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChineseCalendarHolidays {
    calendar: ChineseLunisolar,
}

impl ChineseCalendarHolidays {
    /// Capability backed by the built-in lunar table.
    pub const fn new() -> Self {
        Self {
            calendar: ChineseLunisolar::new(),
        }
    }

    fn add_new_year_offset(&self, b: &mut YearBuilder<'_>, name: &str, days: i32) -> Result<Option<Date>> {
        let date = self.calendar.new_year(b.year())?.add_days(days)?;
        Ok(b.add(name, date))
    }

    fn add_lunar(&self, b: &mut YearBuilder<'_>, name: &str, month: u8, day: u8) -> Result<Option<Date>> {
        Ok(self
            .calendar
            .lunar_date_in_year(b.year(), month, day, false)?
            .and_then(|date| b.add(name, date)))
    }

    /// Chinese New Year's Eve.
    pub fn add_chinese_new_years_eve(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_new_year_offset(b, name, -1)
    }

    /// Chinese New Year (1st day of the 1st month).
    pub fn add_chinese_new_years_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_new_year_offset(b, name, 0)
    }

    /// Second day of Chinese New Year.
    pub fn add_chinese_new_years_day_two(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_new_year_offset(b, name, 1)
    }

    /// Third day of Chinese New Year.
    pub fn add_chinese_new_years_day_three(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_new_year_offset(b, name, 2)
    }

    /// Dragon Boat Festival (5th day of the 5th month).
    pub fn add_dragon_boat_festival(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_lunar(b, name, 5, 5)
    }

    /// Mid-Autumn Festival (15th day of the 8th month).
    pub fn add_mid_autumn_festival(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_lunar(b, name, 8, 15)
    }

    /// Qingming Festival (Tomb Sweeping Day).
    pub fn add_qingming_festival(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        Ok(b.add(name, qingming(b.year())?))
    }
}
