//! Short month and weekday names used by rule tables, plus helpers that
//! locate a date relative to another one.

use hol_core::errors::Result;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// January.
pub const JAN: Month = Month::January;
/// February.
pub const FEB: Month = Month::February;
/// March.
pub const MAR: Month = Month::March;
/// April.
pub const APR: Month = Month::April;
/// May.
pub const MAY: Month = Month::May;
/// June.
pub const JUN: Month = Month::June;
/// July.
pub const JUL: Month = Month::July;
/// August.
pub const AUG: Month = Month::August;
/// September.
pub const SEP: Month = Month::September;
/// October.
pub const OCT: Month = Month::October;
/// November.
pub const NOV: Month = Month::November;
/// December.
pub const DEC: Month = Month::December;

/// Monday.
pub const MON: Weekday = Weekday::Monday;
/// Tuesday.
pub const TUE: Weekday = Weekday::Tuesday;
/// Wednesday.
pub const WED: Weekday = Weekday::Wednesday;
/// Thursday.
pub const THU: Weekday = Weekday::Thursday;
/// Friday.
pub const FRI: Weekday = Weekday::Friday;
/// Saturday.
pub const SAT: Weekday = Weekday::Saturday;
/// Sunday.
pub const SUN: Weekday = Weekday::Sunday;

/// The date `days` calendar days before `date`.
pub fn days_before(date: Date, days: i32) -> Result<Date> {
    date.add_days(-days)
}

/// The date `days` calendar days after `date`.
pub fn days_after(date: Date, days: i32) -> Result<Date> {
    date.add_days(days)
}

/// The first `weekday` on or after `date`.
pub fn weekday_on_or_after(date: Date, weekday: Weekday) -> Result<Date> {
    if date.weekday() == weekday {
        Ok(date)
    } else {
        date.nth_weekday_from(1, weekday)
    }
}

/// The last `weekday` on or before `date`.
pub fn weekday_on_or_before(date: Date, weekday: Weekday) -> Result<Date> {
    if date.weekday() == weekday {
        Ok(date)
    } else {
        date.nth_weekday_from(-1, weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_weekdays() {
        // 2024-04-04 is a Thursday.
        let d = Date::from_month_day(2024, APR, 4).unwrap();
        assert_eq!(weekday_on_or_after(d, THU).unwrap(), d);
        assert_eq!(
            weekday_on_or_after(d, MON).unwrap(),
            Date::from_month_day(2024, APR, 8).unwrap()
        );
        assert_eq!(
            weekday_on_or_before(d, MON).unwrap(),
            Date::from_month_day(2024, APR, 1).unwrap()
        );
        assert_eq!(
            days_before(d, 4).unwrap(),
            Date::from_month_day(2024, MAR, 31).unwrap()
        );
        assert_eq!(days_after(d, -4).unwrap(), days_before(d, 4).unwrap());
    }
}
