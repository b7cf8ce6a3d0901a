//! `WorkingDayCalendar` — working-day arithmetic on top of a holiday set.
//!
//! Every method may have to populate new years, so all of them return
//! `Result`.

use hol_core::ensure;
use hol_core::errors::Result;
use hol_time::Date;

use crate::holiday_set::HolidaySet;

/// Something that can tell working days apart.
pub trait WorkingDayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day.
    fn is_working_day(&self, date: Date) -> Result<bool>;

    /// Return `true` if `date` is not a working day.
    fn is_day_off(&self, date: Date) -> Result<bool> {
        Ok(!self.is_working_day(date)?)
    }

    /// The first working day strictly after `date`.
    fn next_working_day(&self, date: Date) -> Result<Date> {
        self.advance_working_days(date, 1)
    }

    /// The last working day strictly before `date`.
    fn previous_working_day(&self, date: Date) -> Result<Date> {
        self.advance_working_days(date, -1)
    }

    /// Move `n` working days away from `date`; `n == 0` returns `date`.
    fn advance_working_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_working_day(date)? {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the working days between `start` (exclusive) and `end`
    /// (inclusive).  Negative if `end < start`.
    fn working_days_between(&self, start: Date, end: Date) -> Result<i32> {
        if start == end {
            return Ok(0);
        }
        let sign = if end > start { 1 } else { -1 };
        let (lo, hi) = if end > start { (start, end) } else { (end, start) };
        ensure!(
            hi.days_between(lo).abs() <= 366 * 400,
            "working_days_between: range {lo}..{hi} too long"
        );
        let mut count = 0;
        let mut d = lo.add_days(1)?;
        while d <= hi {
            if self.is_working_day(d)? {
                count += 1;
            }
            d = d.add_days(1)?;
        }
        Ok(sign * count)
    }
}

impl WorkingDayCalendar for HolidaySet {
    fn name(&self) -> &str {
        self.country().name()
    }

    fn is_working_day(&self, date: Date) -> Result<bool> {
        HolidaySet::is_working_day(self, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn next_working_day_skips_block() {
        let tw = HolidaySet::new("TW").unwrap();
        // Chinese New Year 2023 runs Fri 01-20 to Fri 01-27.
        assert_eq!(tw.next_working_day(date(2023, 1, 19)).unwrap(), date(2023, 1, 30));
        assert_eq!(tw.previous_working_day(date(2023, 1, 30)).unwrap(), date(2023, 1, 19));
    }

    #[test]
    fn swapped_saturday_counts() {
        let tw = HolidaySet::new("TW").unwrap();
        // Sat 2023-01-07 is a working day; Mon 01-02 is observed New Year.
        assert_eq!(tw.working_days_between(date(2023, 1, 1), date(2023, 1, 8)).unwrap(), 5);
        assert_eq!(tw.working_days_between(date(2023, 1, 8), date(2023, 1, 1)).unwrap(), -5);
        assert_eq!(tw.advance_working_days(date(2023, 1, 6), 1).unwrap(), date(2023, 1, 7));
        assert_eq!(tw.advance_working_days(date(2023, 1, 6), 0).unwrap(), date(2023, 1, 6));
    }

    #[test]
    fn name_is_country_name() {
        let ge = HolidaySet::new("GE").unwrap();
        assert_eq!(WorkingDayCalendar::name(&ge), "Georgia");
        assert!(ge.is_day_off(date(2023, 1, 7)).unwrap());
    }
}
