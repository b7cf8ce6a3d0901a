//! Day swaps: a bridge day off paid back by working a weekend day.

use hol_core::errors::{Error, Result};
use hol_time::Date;

/// One government-mandated swap.
///
/// Both dates are stored as `(year, month, day)` so that swap tables can be
/// declared as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySwap {
    day_off: (u16, u8, u8),
    workday: (u16, u8, u8),
}

impl DaySwap {
    /// `day_off` becomes a holiday; `workday`, a weekend date, becomes a
    /// mandatory working day.
    pub const fn new(day_off: (u16, u8, u8), workday: (u16, u8, u8)) -> Self {
        Self { day_off, workday }
    }

    /// The day off.
    pub fn day_off(&self) -> Result<Date> {
        let (y, m, d) = self.day_off;
        Date::from_ymd(y, m, d).map_err(|e| Error::InvalidDaySwap(format!("day off: {e}")))
    }

    /// The compensating working day.
    pub fn workday(&self) -> Result<Date> {
        let (y, m, d) = self.workday;
        Date::from_ymd(y, m, d).map_err(|e| Error::InvalidDaySwap(format!("workday: {e}")))
    }

    /// Year of the day off.
    pub const fn day_off_year(&self) -> u16 {
        self.day_off.0
    }

    /// Year of the working day.
    pub const fn workday_year(&self) -> u16 {
        self.workday.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_resolve() {
        let swap = DaySwap::new((2015, 1, 2), (2014, 12, 27));
        assert_eq!(swap.day_off().unwrap(), Date::from_ymd(2015, 1, 2).unwrap());
        assert_eq!(swap.workday().unwrap(), Date::from_ymd(2014, 12, 27).unwrap());
        assert_eq!(swap.day_off_year(), 2015);
        assert_eq!(swap.workday_year(), 2014);
    }

    #[test]
    fn bad_date_is_swap_error() {
        let swap = DaySwap::new((2023, 2, 30), (2023, 2, 4));
        assert!(matches!(swap.day_off(), Err(Error::InvalidDaySwap(_))));
    }
}
