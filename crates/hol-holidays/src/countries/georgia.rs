//! Georgia holidays.

use hol_core::errors::Result;
use hol_time::gregorian::{APR, MAR, MAY, NOV, OCT};
use hol_time::ChurchCalendar;

use crate::builder::YearBuilder;
use crate::countries::Country;
use crate::groups::{ChristianHolidays, InternationalHolidays};
use crate::l10n::Catalog;

const CHRISTIAN: ChristianHolidays = ChristianHolidays::new(ChurchCalendar::Julian);
const INTERNATIONAL: InternationalHolidays = InternationalHolidays;

static CATALOGS: [Catalog; 2] = [
    Catalog {
        language: "en_US",
        entries: &[
            ("ახალი წელი", "New Year's Day"),
            ("ქრისტეშობა", "Christmas Day"),
            ("ნათლისღება", "Epiphany"),
            ("დედის დღე", "Mother's Day"),
            ("ქალთა საერთაშორისო დღე", "International Women's Day"),
            ("წითელი პარასკევი", "Good Friday"),
            ("დიდი შაბათი", "Holy Saturday"),
            ("აღდგომა", "Easter Sunday"),
            ("შავი ორშაბათი", "Easter Monday"),
            ("ეროვნული ერთიანობის დღე", "National Unity Day"),
            ("ფაშიზმზე გამარჯვების დღე", "Day of Victory over Fascism"),
            ("წმინდა ანდრია პირველწოდებულის დღე", "Saint Andrew's Day"),
            ("დამოუკიდებლობის დღე", "Independence Day"),
            ("მარიამობა", "Assumption of Mary"),
            ("მცხეთობის", "Svetitskhovloba, Robe of Jesus"),
            ("გიორგობა", "Saint George's Day"),
        ],
    },
    Catalog {
        language: "uk",
        entries: &[
            ("ახალი წელი", "Новий рік"),
            ("ქრისტეშობა", "Різдво Христове"),
            ("ნათლისღება", "Водохреще"),
            ("დედის დღე", "День матері"),
            ("ქალთა საერთაშორისო დღე", "Міжнародний жіночий день"),
            ("წითელი პარასკევი", "Страсна пʼятниця"),
            ("დიდი შაბათი", "Велика субота"),
            ("აღდგომა", "Великдень"),
            ("შავი ორშაბათი", "Великодній понеділок"),
            ("ეროვნული ერთიანობის დღე", "День національної єдності"),
            ("ფაშიზმზე გამარჯვების დღე", "День перемоги над фашизмом"),
            ("წმინდა ანდრია პირველწოდებულის დღე", "День святого Андрія Первозваного"),
            ("დამოუკიდებლობის დღე", "День незалежності"),
            ("მარიამობა", "Успіння Пресвятої Богородиці"),
            ("მცხეთობის", "Светицховлоба"),
            ("გიორგობა", "День святого Георгія"),
        ],
    },
];

/// Georgia.
///
/// Orthodox church calendar, no observed holidays.  Holidays start in 1991.
#[derive(Debug, Clone, Copy, Default)]
pub struct Georgia;

impl Country for Georgia {
    fn code(&self) -> &'static str {
        "GE"
    }

    fn alpha3(&self) -> &'static str {
        "GEO"
    }

    fn name(&self) -> &'static str {
        "Georgia"
    }

    fn start_year(&self) -> u16 {
        1991
    }

    fn default_language(&self) -> &'static str {
        "ka"
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        &["en_US", "ka", "uk"]
    }

    fn catalogs(&self) -> &'static [Catalog] {
        &CATALOGS
    }

    fn populate(&self, b: &mut YearBuilder<'_>) -> Result<()> {
        let new_year = "ახალი წელი";
        INTERNATIONAL.add_new_years_day(b, new_year)?;
        INTERNATIONAL.add_new_years_day_two(b, new_year)?;

        CHRISTIAN.add_christmas_day(b, "ქრისტეშობა");
        CHRISTIAN.add_epiphany_day(b, "ნათლისღება");

        b.add_holiday("დედის დღე", MAR, 3)?;
        INTERNATIONAL.add_womens_day(b, "ქალთა საერთაშორისო დღე")?;

        CHRISTIAN.add_good_friday(b, "წითელი პარასკევი")?;
        CHRISTIAN.add_holy_saturday(b, "დიდი შაბათი")?;
        CHRISTIAN.add_easter_sunday(b, "აღდგომა")?;
        CHRISTIAN.add_easter_monday(b, "შავი ორშაბათი")?;

        b.add_holiday("ეროვნული ერთიანობის დღე", APR, 9)?;
        INTERNATIONAL.add_world_war_two_victory_day(b, "ფაშიზმზე გამარჯვების დღე")?;
        b.add_holiday("წმინდა ანდრია პირველწოდებულის დღე", MAY, 12)?;
        b.add_holiday("დამოუკიდებლობის დღე", MAY, 26)?;

        CHRISTIAN.add_assumption_of_mary_day(b, "მარიამობა");

        // Svetitskhovloba.
        b.add_holiday("მცხეთობის", OCT, 14)?;
        b.add_holiday("გიორგობა", NOV, 23)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata() {
        assert_eq!(Georgia.code(), "GE");
        assert_eq!(Georgia.alpha3(), "GEO");
        assert!(Georgia.observed_policy().is_none());
        assert_eq!(Georgia.catalogs().len(), 2);
    }

    #[test]
    fn catalogs_cover_every_holiday() {
        for catalog in Georgia.catalogs() {
            assert_eq!(catalog.entries.len(), 16, "{}", catalog.language);
        }
    }
}
