//! Taiwan holidays.

use hol_core::errors::Result;
use hol_time::gregorian::{APR, FEB, OCT};
use hol_time::Weekday;

use crate::builder::YearBuilder;
use crate::countries::Country;
use crate::entry::Category;
use crate::groups::{ChineseCalendarHolidays, InternationalHolidays};
use crate::l10n::Catalog;
use crate::observed::{ObservedPolicy, ObservedRule, Shift};
use crate::swap::DaySwap;

const CHINESE: ChineseCalendarHolidays = ChineseCalendarHolidays::new();
const INTERNATIONAL: InternationalHolidays = InternationalHolidays;

static OBSERVED: ObservedPolicy =
    ObservedPolicy::new(ObservedRule::SAT_TO_PREV_SUN_TO_NEXT, 2015).with_label("%s（慶祝）");

/// Children's Day when it falls on Tomb Sweeping Day.
const CHILDRENS_DAY_SHARED: ObservedRule = ObservedRule::SAT_TO_PREV_SUN_TO_NEXT
    .on_shared(Weekday::Monday, Shift::NEXT_WORKDAY)
    .on_shared(Weekday::Tuesday, Shift::PREV_WORKDAY)
    .on_shared(Weekday::Wednesday, Shift::PREV_WORKDAY)
    .on_shared(Weekday::Thursday, Shift::NEXT_WORKDAY)
    .on_shared(Weekday::Friday, Shift::PREV_WORKDAY)
    .on_shared(Weekday::Saturday, Shift::PREV_WORKDAY)
    .on_shared(Weekday::Sunday, Shift::PREV_WORKDAY);

/// Bridge days off and the Saturdays worked to pay them back.
const DAY_SWAPS: &[DaySwap] = &[
    DaySwap::new((2010, 2, 19), (2010, 2, 6)),
    DaySwap::new((2012, 1, 27), (2012, 2, 4)),
    DaySwap::new((2012, 2, 27), (2012, 3, 3)),
    DaySwap::new((2012, 12, 31), (2012, 12, 22)),
    DaySwap::new((2013, 2, 15), (2013, 2, 23)),
    DaySwap::new((2013, 9, 20), (2013, 9, 14)),
    DaySwap::new((2015, 1, 2), (2014, 12, 27)),
    DaySwap::new((2016, 2, 12), (2016, 1, 30)),
    DaySwap::new((2016, 6, 10), (2016, 6, 4)),
    DaySwap::new((2016, 9, 16), (2016, 9, 10)),
    DaySwap::new((2017, 2, 27), (2017, 2, 18)),
    DaySwap::new((2017, 5, 29), (2017, 6, 3)),
    DaySwap::new((2017, 10, 9), (2017, 9, 30)),
    DaySwap::new((2018, 4, 6), (2018, 3, 31)),
    DaySwap::new((2018, 12, 31), (2018, 12, 22)),
    DaySwap::new((2019, 2, 8), (2019, 1, 19)),
    DaySwap::new((2019, 3, 1), (2019, 2, 23)),
    DaySwap::new((2019, 10, 11), (2019, 10, 5)),
    DaySwap::new((2020, 1, 23), (2020, 2, 15)),
    DaySwap::new((2020, 6, 26), (2020, 6, 20)),
    DaySwap::new((2020, 10, 2), (2020, 9, 26)),
    DaySwap::new((2021, 2, 10), (2021, 2, 20)),
    DaySwap::new((2021, 9, 20), (2021, 9, 11)),
    DaySwap::new((2022, 2, 4), (2022, 1, 22)),
    DaySwap::new((2023, 1, 20), (2023, 1, 7)),
    DaySwap::new((2023, 1, 27), (2023, 2, 4)),
    DaySwap::new((2023, 2, 27), (2023, 2, 18)),
    DaySwap::new((2023, 4, 3), (2023, 3, 25)),
    DaySwap::new((2023, 6, 23), (2023, 6, 17)),
    DaySwap::new((2023, 10, 9), (2023, 9, 23)),
    DaySwap::new((2024, 2, 8), (2024, 2, 17)),
    DaySwap::new((2025, 1, 27), (2025, 2, 8)),
];

static CATALOGS: [Catalog; 3] = [
    Catalog {
        language: "en_US",
        entries: &[
            ("中華民國開國紀念日", "Founding Day of the Republic of China"),
            ("農曆除夕", "Chinese New Year's Eve"),
            ("春節", "Chinese New Year"),
            ("和平紀念日", "Peace Memorial Day"),
            ("兒童節", "Children's Day"),
            ("清明節", "Tomb Sweeping Day"),
            ("端午節", "Dragon Boat Festival"),
            ("中秋節", "Mid-Autumn Festival"),
            ("中華民國國慶日", "National Day"),
            ("勞動節", "Labor Day"),
            ("%s（慶祝）", "%s (observed)"),
            ("休息日（%s日起取代）", "Day off (substituted from %s)"),
            ("%Y-%m-%d", "%m/%d/%Y"),
        ],
    },
    Catalog {
        language: "th",
        entries: &[
            ("中華民國開國紀念日", "วันสถาปนาสาธารณรัฐจีน(ไต้หวัน)"),
            ("農曆除夕", "วันก่อนวันตรุษจีน"),
            ("春節", "วันตรุษจีน"),
            ("和平紀念日", "วันรำลึกสันติภาพ"),
            ("兒童節", "วันเด็กแห่งชาติ"),
            ("清明節", "วันเช็งเม้ง"),
            ("端午節", "วันไหว้บ๊ะจ่าง"),
            ("中秋節", "วันไหว้พระจันทร์"),
            ("中華民國國慶日", "วันชาติสาธารณรัฐจีน(ไต้หวัน)"),
            ("勞動節", "วันแรงงาน"),
            ("%s（慶祝）", "ชดเชย%s"),
            ("休息日（%s日起取代）", "วันหยุด (แทน %s)"),
            ("%Y-%m-%d", "%d/%m/%Y"),
        ],
    },
    Catalog {
        language: "zh_CN",
        entries: &[
            ("中華民國開國紀念日", "中华民国开国纪念日"),
            ("農曆除夕", "农历除夕"),
            ("春節", "春节"),
            ("和平紀念日", "和平纪念日"),
            ("兒童節", "儿童节"),
            ("清明節", "清明节"),
            ("端午節", "端午节"),
            ("中秋節", "中秋节"),
            ("中華民國國慶日", "中华民国国庆日"),
            ("勞動節", "劳动节"),
            ("%s（慶祝）", "%s（庆祝）"),
        ],
    },
];

/// Taiwan (Republic of China).
///
/// Public holidays follow the Regulations on the Implementation of Memorial
/// Days and Holidays.  Labor Day is only a day off for some workers and is
/// kept in [`Category::Optional`].
///
/// Since 2015 a holiday on Saturday is observed the Friday before and one on
/// Sunday the Monday after.  The Chinese New Year days move forward off the
/// weekend from 2010.  When Children's Day coincides with Tomb Sweeping Day
/// (2013 on) it is moved to an adjacent working day chosen by weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Taiwan;

impl Taiwan {
    fn populate_public(&self, b: &mut YearBuilder<'_>) -> Result<()> {
        let year = b.year();

        let name = "中華民國開國紀念日";
        let date = INTERNATIONAL.add_new_years_day(b, name)?;
        b.observe(date, name);

        let lunar_new_year = [
            CHINESE.add_chinese_new_years_eve(b, "農曆除夕")?,
            CHINESE.add_chinese_new_years_day(b, "春節")?,
            CHINESE.add_chinese_new_years_day_two(b, "春節")?,
            CHINESE.add_chinese_new_years_day_three(b, "春節")?,
        ];
        if year >= 2010 {
            let names = ["農曆除夕", "春節", "春節", "春節"];
            for (date, name) in lunar_new_year.into_iter().zip(names) {
                b.observe_with(date, name, ObservedRule::SAT_SUN_TO_NEXT);
            }
        }

        if year >= 1997 {
            let name = "和平紀念日";
            let date = b.add_holiday(name, FEB, 28)?;
            b.observe(date, name);
        }

        // Children's Day is added first so it wins the shared date.
        if (1990..=1999).contains(&year) || year >= 2011 {
            let name = "兒童節";
            let date = b.add_holiday(name, APR, 4)?;
            if year >= 2013 && hol_time::qingming(year)? == date {
                b.observe_with(date, name, CHILDRENS_DAY_SHARED);
            } else {
                b.observe(date, name);
            }
        }

        if year >= 1972 {
            let name = "清明節";
            let date = CHINESE.add_qingming_festival(b, name)?;
            b.observe(date, name);
        }

        let name = "端午節";
        let date = CHINESE.add_dragon_boat_festival(b, name)?;
        b.observe(date, name);

        let name = "中秋節";
        let date = CHINESE.add_mid_autumn_festival(b, name)?;
        b.observe(date, name);

        let name = "中華民國國慶日";
        let date = b.add_holiday(name, OCT, 10)?;
        b.observe(date, name);

        b.add_day_swaps(DAY_SWAPS)
    }

    fn populate_optional(&self, b: &mut YearBuilder<'_>) -> Result<()> {
        if b.year() >= 1989 {
            INTERNATIONAL.add_labor_day(b, "勞動節")?;
        }
        Ok(())
    }
}

impl Country for Taiwan {
    fn code(&self) -> &'static str {
        "TW"
    }

    fn alpha3(&self) -> &'static str {
        "TWN"
    }

    fn name(&self) -> &'static str {
        "Taiwan"
    }

    fn start_year(&self) -> u16 {
        1912
    }

    fn default_language(&self) -> &'static str {
        "zh_TW"
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        &["en_US", "th", "zh_CN", "zh_TW"]
    }

    fn catalogs(&self) -> &'static [Catalog] {
        &CATALOGS
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public, Category::Optional]
    }

    fn observed_policy(&self) -> Option<&'static ObservedPolicy> {
        Some(&OBSERVED)
    }

    fn substituted_label(&self) -> &'static str {
        "休息日（%s日起取代）"
    }

    fn populate(&self, b: &mut YearBuilder<'_>) -> Result<()> {
        match b.category() {
            Category::Public => self.populate_public(b),
            Category::Optional => self.populate_optional(b),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_time::WeekendSet;

    #[test]
    fn swap_table_is_well_formed() {
        for swap in DAY_SWAPS {
            let off = swap.day_off().unwrap();
            let work = swap.workday().unwrap();
            assert!(WeekendSet::SAT_SUN.contains(work.weekday()), "{work} is not a weekend day");
            assert!(!WeekendSet::SAT_SUN.contains(off.weekday()), "{off} is a weekend day");
        }
    }

    #[test]
    fn childrens_day_shared_rule() {
        let rule = CHILDRENS_DAY_SHARED;
        assert_eq!(rule.shift_for(Weekday::Thursday, true), Some(Shift::NEXT_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Friday, true), Some(Shift::PREV_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Sunday, true), Some(Shift::PREV_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Sunday, false), Some(Shift::NEXT_WORKDAY));
        assert_eq!(rule.shift_for(Weekday::Thursday, false), None);
    }

    #[test]
    fn observed_policy() {
        let policy = Taiwan.observed_policy().unwrap();
        assert_eq!(policy.since, 2015);
        assert_eq!(policy.label, "%s（慶祝）");
    }
}
