use hol_core::errors::Result;
use hol_time::gregorian::{JAN, MAR, MAY};
use hol_time::Date;

use crate::builder::YearBuilder;

/// Fixed-date holidays observed in many countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InternationalHolidays;

impl InternationalHolidays {
    /// New Year's Day (January 1).
    pub fn add_new_years_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Date> {
        b.add_holiday(name, JAN, 1)
    }

    /// Second day of the new year (January 2).
    pub fn add_new_years_day_two(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Date> {
        b.add_holiday(name, JAN, 2)
    }

    /// International Women's Day (March 8).
    pub fn add_womens_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Date> {
        b.add_holiday(name, MAR, 8)
    }

    /// Labor Day (May 1).
    pub fn add_labor_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Date> {
        b.add_holiday(name, MAY, 1)
    }

    /// Victory Day of the Second World War (May 9).
    pub fn add_world_war_two_victory_day(&self, b: &mut YearBuilder<'_>, name: &str) -> Result<Date> {
        b.add_holiday(name, MAY, 9)
    }
}
