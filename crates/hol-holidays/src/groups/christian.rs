use hol_core::errors::Result;
use hol_time::gregorian::{AUG, DEC, JAN};
use hol_time::{easter, ChurchCalendar, Date, Month};

use crate::builder::YearBuilder;

/// Easter-relative feasts and fixed church feasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChristianHolidays {
    calendar: ChurchCalendar,
}

impl ChristianHolidays {
    /// Capability following `calendar` for both the computus and the fixed
    /// feasts.
    pub const fn new(calendar: ChurchCalendar) -> Self {
        Self { calendar }
    }

    /// The church calendar in use.
    pub fn calendar(&self) -> ChurchCalendar {
        self.calendar
    }

    /// Easter Sunday of `year`.
    pub fn easter_sunday(&self, year: u16) -> Result<Date> {
        easter(year, self.calendar.easter_method())
    }

    /// Add `name` `days` days from Easter Sunday.
    pub fn add_easter_offset(&self, b: &mut YearBuilder<'_>, name: &str, days: i32) -> Result<Option<Date>> {
        let date = self.easter_sunday(b.year())?.add_days(days)?;
        Ok(b.add(name, date))
    }

    /// Good Friday (Easter − 2).
    pub fn add_good_friday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, -2)
    }

    /// Holy Saturday (Easter − 1).
    pub fn add_holy_saturday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, -1)
    }

    /// Easter Sunday.
    pub fn add_easter_sunday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, 0)
    }

    /// Easter Monday (Easter + 1).
    pub fn add_easter_monday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, 1)
    }

    /// Ascension Thursday (Easter + 39).
    pub fn add_ascension_thursday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, 39)
    }

    /// Whit Sunday (Easter + 49).
    pub fn add_whit_sunday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, 49)
    }

    /// Whit Monday (Easter + 50).
    pub fn add_whit_monday(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Option<Date>> {
        self.add_easter_offset(b, name, 50)
    }

    fn add_fixed(&self, b: &mut YearBuilder<'_>, name: &str, month: Month, day: u8) -> Option<Date> {
        let date = self.calendar.fixed_date(b.year(), month, day)?;
        b.add(name, date)
    }

    /// Christmas Day (December 25 of the church calendar).
    pub fn add_christmas_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Option<Date> {
        self.add_fixed(b, name, DEC, 25)
    }

    /// Epiphany (January 6 of the church calendar).
    pub fn add_epiphany_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Option<Date> {
        self.add_fixed(b, name, JAN, 6)
    }

    /// Assumption of Mary (August 15 of the church calendar).
    pub fn add_assumption_of_mary_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Option<Date> {
        self.add_fixed(b, name, AUG, 15)
    }
}
