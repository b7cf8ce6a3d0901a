//! Joint holiday sets — combine two or more countries.

use hol_core::ensure;
use hol_core::errors::Result;
use hol_time::Date;

use crate::calendar::WorkingDayCalendar;
use crate::entry::HolidayDay;
use crate::holiday_set::HolidaySet;

/// Rule for combining holiday sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JointRule {
    /// A day is off if it is off in **any** set (union of holidays).
    #[default]
    JoinHolidays,
    /// A day is a working day if it is one in **any** set (intersection of
    /// holidays).
    JoinWorkingDays,
}

/// Several holiday sets viewed as one.
pub struct JointHolidays {
    sets: Vec<HolidaySet>,
    rule: JointRule,
    name: String,
}

impl std::fmt::Debug for JointHolidays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointHolidays")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish()
    }
}

impl JointHolidays {
    /// Combine `sets` under `rule`.  At least one set is required.
    pub fn new(sets: Vec<HolidaySet>, rule: JointRule) -> Result<Self> {
        ensure!(!sets.is_empty(), "JointHolidays requires at least one holiday set");
        let codes: Vec<&str> = sets.iter().map(|s| s.country().code()).collect();
        let joiner = match rule {
            JointRule::JoinHolidays => ", ",
            JointRule::JoinWorkingDays => " | ",
        };
        let name = codes.join(joiner);
        Ok(Self { sets, rule, name })
    }

    /// The combined sets.
    pub fn sets(&self) -> &[HolidaySet] {
        &self.sets
    }

    /// The combination rule.
    pub fn rule(&self) -> JointRule {
        self.rule
    }

    /// `true` if `date` is a holiday under the combination rule.
    pub fn is_holiday(&self, date: Date) -> Result<bool> {
        let mut any = false;
        let mut all = true;
        for set in &self.sets {
            let h = set.is_holiday(date)?;
            any |= h;
            all &= h;
        }
        Ok(match self.rule {
            JointRule::JoinHolidays => any,
            JointRule::JoinWorkingDays => all,
        })
    }

    /// Names on `date` from every set, in set order, without duplicates.
    pub fn name_on(&self, date: Date) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for set in &self.sets {
            for name in set.name_on(date)? {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }

    /// Holidays of `year` under the combination rule, ordered by date.
    pub fn holidays_for_year(&self, year: u16) -> Result<Vec<HolidayDay>> {
        let mut dates = std::collections::BTreeSet::new();
        for set in &self.sets {
            dates.extend(set.holidays_for_year(year)?.into_iter().map(|d| d.date));
        }
        let mut out = Vec::new();
        for date in dates {
            if self.is_holiday(date)? {
                out.push(HolidayDay {
                    date,
                    names: self.name_on(date)?,
                });
            }
        }
        Ok(out)
    }
}

impl WorkingDayCalendar for JointHolidays {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_day(&self, date: Date) -> Result<bool> {
        let mut any = false;
        let mut all = true;
        for set in &self.sets {
            let w = set.is_working_day(date)?;
            any |= w;
            all &= w;
        }
        Ok(match self.rule {
            JointRule::JoinHolidays => all,
            JointRule::JoinWorkingDays => any,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn joint(rule: JointRule) -> JointHolidays {
        JointHolidays::new(
            vec![HolidaySet::new("GE").unwrap(), HolidaySet::new("TW").unwrap()],
            rule,
        )
        .unwrap()
    }

    #[test]
    fn union_of_holidays() {
        let j = joint(JointRule::JoinHolidays);
        assert_eq!(WorkingDayCalendar::name(&j), "GE, TW");
        // Georgian Mother's Day and Taiwanese Peace Memorial Day.
        assert!(j.is_holiday(date(2023, 3, 3)).unwrap());
        assert!(j.is_holiday(date(2023, 2, 28)).unwrap());
        assert_eq!(
            j.name_on(date(2023, 1, 1)).unwrap(),
            vec!["ახალი წელი".to_string(), "中華民國開國紀念日".to_string()]
        );
        // Taiwan's swapped Saturday is still a weekend day in Georgia.
        assert!(!j.is_working_day(date(2023, 1, 7)).unwrap());
    }

    #[test]
    fn intersection_of_holidays() {
        let j = joint(JointRule::JoinWorkingDays);
        assert_eq!(WorkingDayCalendar::name(&j), "GE | TW");
        assert!(j.is_holiday(date(2023, 1, 1)).unwrap());
        assert!(!j.is_holiday(date(2023, 3, 3)).unwrap());
        // New Year's Day and its second day (observed in Taiwan).
        let days = j.holidays_for_year(2023).unwrap();
        let dates: Vec<Date> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2023, 1, 1), date(2023, 1, 2)]);
        assert!(j.is_working_day(date(2023, 3, 3)).unwrap());
        assert!(!j.is_working_day(date(2023, 1, 2)).unwrap());
    }

    #[test]
    fn empty_rejected() {
        assert!(JointHolidays::new(Vec::new(), JointRule::JoinHolidays).is_err());
    }
}
