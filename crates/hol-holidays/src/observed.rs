//! Observed-holiday rules.
//!
//! An [`ObservedRule`] says, per weekday, whether a holiday on that weekday
//! is moved and where the search for a substitute starts.  A second table
//! applies when the holiday shares its date with another holiday.  The scan
//! itself ([`find_slot`]) steps one day at a time away from the nominal date
//! and stops at the first date the caller reports as free.

use hol_core::errors::Result;
use hol_time::{Date, Weekday};

/// Direction of the substitute scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards earlier dates.
    Backward,
    /// Towards later dates.
    Forward,
}

/// Where the substitute scan starts and which way it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    /// Scan direction.
    pub direction: Direction,
    /// Days between the nominal date and the first candidate.
    pub start: u8,
}

impl Shift {
    /// The closest free day before the holiday.
    pub const PREV_WORKDAY: Shift = Shift::backward(1);

    /// The closest free day after the holiday.
    pub const NEXT_WORKDAY: Shift = Shift::forward(1);

    /// Scan backward starting `start` days before the holiday.
    pub const fn backward(start: u8) -> Self {
        Self {
            direction: Direction::Backward,
            start,
        }
    }

    /// Scan forward starting `start` days after the holiday.
    pub const fn forward(start: u8) -> Self {
        Self {
            direction: Direction::Forward,
            start,
        }
    }

    fn step(&self) -> i32 {
        match self.direction {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Per-weekday shifting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservedRule {
    weekend: [Option<Shift>; 7],
    shared_date: [Option<Shift>; 7],
}

impl ObservedRule {
    /// A rule that never shifts.
    pub const NONE: ObservedRule = ObservedRule::new();

    /// Saturday to the previous free day, Sunday to the next one.
    pub const SAT_TO_PREV_SUN_TO_NEXT: ObservedRule = ObservedRule::new()
        .on(Weekday::Saturday, Shift::PREV_WORKDAY)
        .on(Weekday::Sunday, Shift::NEXT_WORKDAY);

    /// Saturday and Sunday to the next free day.
    pub const SAT_SUN_TO_NEXT: ObservedRule = ObservedRule::new()
        .on(Weekday::Saturday, Shift::NEXT_WORKDAY)
        .on(Weekday::Sunday, Shift::NEXT_WORKDAY);

    /// An empty rule.
    pub const fn new() -> Self {
        Self {
            weekend: [None; 7],
            shared_date: [None; 7],
        }
    }

    /// Shift holidays falling on `weekday`.
    pub const fn on(mut self, weekday: Weekday, shift: Shift) -> Self {
        self.weekend[weekday.index()] = Some(shift);
        self
    }

    /// Shift holidays falling on `weekday` when another holiday is on the
    /// same date.
    pub const fn on_shared(mut self, weekday: Weekday, shift: Shift) -> Self {
        self.shared_date[weekday.index()] = Some(shift);
        self
    }

    /// The shift that applies on `weekday`, if any.  The shared-date table
    /// wins when `shared` is set and it has an entry for that day.
    pub fn shift_for(&self, weekday: Weekday, shared: bool) -> Option<Shift> {
        let i = weekday.index();
        if shared {
            if let Some(shift) = self.shared_date[i] {
                return Some(shift);
            }
        }
        self.weekend[i]
    }
}

impl Default for ObservedRule {
    fn default() -> Self {
        Self::NONE
    }
}

/// A country's default observance settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservedPolicy {
    /// Rule applied by [`YearBuilder::observe`](crate::YearBuilder::observe).
    pub rule: ObservedRule,
    /// First year the default rule applies.
    pub since: u16,
    /// Most candidate dates the scan may inspect.
    pub max_scan_days: u8,
    /// Message id of the observed label; `%s` is the holiday name.
    pub label: &'static str,
}

impl ObservedPolicy {
    /// Label used when a country does not set one.
    pub const DEFAULT_LABEL: &'static str = "%s (observed)";

    /// A policy applying `rule` from `since` on.
    pub const fn new(rule: ObservedRule, since: u16) -> Self {
        Self {
            rule,
            since,
            max_scan_days: 7,
            label: Self::DEFAULT_LABEL,
        }
    }

    /// Set the observed label message id.
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Set the scan cap.
    pub const fn with_max_scan_days(mut self, days: u8) -> Self {
        self.max_scan_days = days;
        self
    }
}

/// Scan from `date` according to `shift` for the first date `occupied`
/// reports as free.  Returns `Ok(None)` when `max_days` candidates were all
/// occupied.
pub fn find_slot<F>(date: Date, shift: Shift, max_days: u8, mut occupied: F) -> Result<Option<Date>>
where
    F: FnMut(Date) -> Result<bool>,
{
    let step = shift.step();
    let mut candidate = date.add_days(step * shift.start as i32)?;
    for _ in 0..max_days {
        if !occupied(candidate)? {
            return Ok(Some(candidate));
        }
        candidate = candidate.add_days(step)?;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_time::WeekendSet;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn shared_table_takes_precedence() {
        let rule = ObservedRule::SAT_TO_PREV_SUN_TO_NEXT.on_shared(Weekday::Sunday, Shift::PREV_WORKDAY);
        assert_eq!(rule.shift_for(Weekday::Sunday, false), Some(Shift::NEXT_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Sunday, true), Some(Shift::PREV_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Saturday, true), Some(Shift::PREV_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Monday, true), None);
        assert_eq!(ObservedRule::NONE.shift_for(Weekday::Sunday, false), None);
    }

    #[test]
    fn scan_skips_weekends() {
        let weekend = WeekendSet::SAT_SUN;
        // 2022-01-01 is a Saturday.
        let slot = find_slot(date(2022, 1, 1), Shift::PREV_WORKDAY, 7, |d| {
            Ok(weekend.contains(d.weekday()))
        })
        .unwrap();
        assert_eq!(slot, Some(date(2021, 12, 31)));

        let slot = find_slot(date(2023, 1, 22), Shift::NEXT_WORKDAY, 7, |d| {
            Ok(d <= date(2023, 1, 25))
        })
        .unwrap();
        assert_eq!(slot, Some(date(2023, 1, 26)));
    }

    #[test]
    fn scan_exhaustion() {
        let slot = find_slot(date(2023, 1, 1), Shift::forward(2), 3, |_| Ok(true)).unwrap();
        assert_eq!(slot, None);
    }
}
