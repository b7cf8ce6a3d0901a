//! Integration tests for the Georgia holiday set.

use hol_holidays::{HolidayOptions, HolidaySet};
use hol_time::{easter, Date, EasterMethod};

fn date(s: &str) -> Date {
    s.parse().unwrap()
}

fn georgia() -> HolidaySet {
    HolidaySet::new("GE").unwrap()
}

fn names_2023(language: &str) -> Vec<(String, String)> {
    HolidaySet::with_options("GE", HolidayOptions::default().with_language(language))
        .unwrap()
        .holidays_for_year(2023)
        .unwrap()
        .into_iter()
        .map(|d| (d.date.to_string(), d.names.join("; ")))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(d, n)| (d.to_string(), n.to_string()))
        .collect()
}

#[test]
fn no_holidays_before_independence() {
    assert!(georgia().holidays_for_year(1990).unwrap().is_empty());
    assert!(!georgia().holidays_for_year(1991).unwrap().is_empty());
}

#[test]
fn year_2023() {
    let got: Vec<String> = georgia()
        .holidays_for_year(2023)
        .unwrap()
        .iter()
        .map(|d| d.date.to_string())
        .collect();
    assert_eq!(
        got,
        [
            "2023-01-01", "2023-01-02", "2023-01-07", "2023-01-19", "2023-03-03", "2023-03-08",
            "2023-04-09", "2023-04-14", "2023-04-15", "2023-04-16", "2023-04-17", "2023-05-09",
            "2023-05-12", "2023-05-26", "2023-08-28", "2023-10-14", "2023-11-23",
        ]
    );
}

#[test]
fn orthodox_easter() {
    let set = georgia();
    for year in 1991..2050 {
        let sunday = easter(year, EasterMethod::Orthodox).unwrap();
        let on_sunday = set.name_on(sunday).unwrap();
        assert_eq!(on_sunday[0], "აღდგომა", "{year}");
        let on_friday = set.name_on(sunday - 2).unwrap();
        assert_eq!(on_friday[0], "წითელი პარასკევი", "{year}");
    }
    assert_eq!(
        set.name_on(date("2023-04-14")).unwrap(),
        vec!["წითელი პარასკევი".to_string()]
    );
}

#[test]
fn good_friday_on_national_unity_day() {
    // Orthodox Easter 1999 is April 11.
    let set = georgia();
    assert_eq!(
        set.name_on(date("1999-04-09")).unwrap(),
        vec!["წითელი პარასკევი".to_string(), "ეროვნული ერთიანობის დღე".to_string()]
    );
    let days = set.holidays_for_year(1999).unwrap();
    assert_eq!(days.iter().filter(|d| d.date == date("1999-04-09")).count(), 1);
}

#[test]
fn weekend_holidays_are_not_moved() {
    let set = georgia();
    // 2023-01-01 is a Sunday.
    assert!(!set.is_holiday(date("2023-01-03")).unwrap());
    assert!(!set.is_working_day(date("2023-01-01")).unwrap());
    assert!(set.workday_overrides(2023).unwrap().is_empty());
}

#[test]
fn l10n_en_us() {
    assert_eq!(
        names_2023("en_US"),
        pairs(&[
            ("2023-01-01", "New Year's Day"),
            ("2023-01-02", "New Year's Day"),
            ("2023-01-07", "Christmas Day"),
            ("2023-01-19", "Epiphany"),
            ("2023-03-03", "Mother's Day"),
            ("2023-03-08", "International Women's Day"),
            ("2023-04-09", "National Unity Day"),
            ("2023-04-14", "Good Friday"),
            ("2023-04-15", "Holy Saturday"),
            ("2023-04-16", "Easter Sunday"),
            ("2023-04-17", "Easter Monday"),
            ("2023-05-09", "Day of Victory over Fascism"),
            ("2023-05-12", "Saint Andrew's Day"),
            ("2023-05-26", "Independence Day"),
            ("2023-08-28", "Assumption of Mary"),
            ("2023-10-14", "Svetitskhovloba, Robe of Jesus"),
            ("2023-11-23", "Saint George's Day"),
        ])
    );
}

#[test]
fn l10n_uk() {
    assert_eq!(
        names_2023("uk"),
        pairs(&[
            ("2023-01-01", "Новий рік"),
            ("2023-01-02", "Новий рік"),
            ("2023-01-07", "Різдво Христове"),
            ("2023-01-19", "Водохреще"),
            ("2023-03-03", "День матері"),
            ("2023-03-08", "Міжнародний жіночий день"),
            ("2023-04-09", "День національної єдності"),
            ("2023-04-14", "Страсна пʼятниця"),
            ("2023-04-15", "Велика субота"),
            ("2023-04-16", "Великдень"),
            ("2023-04-17", "Великодній понеділок"),
            ("2023-05-09", "День перемоги над фашизмом"),
            ("2023-05-12", "День святого Андрія Первозваного"),
            ("2023-05-26", "День незалежності"),
            ("2023-08-28", "Успіння Пресвятої Богородиці"),
            ("2023-10-14", "Светицховлоба"),
            ("2023-11-23", "День святого Георгія"),
        ])
    );
}

#[test]
fn far_future_years_work() {
    // No lunar rules, so the table limit does not apply.
    let set = georgia();
    let days = set.holidays_for_year(2500).unwrap();
    assert!(days.iter().any(|d| d.date == date("2500-04-09")));
    assert!(days.iter().any(|d| d.date == date("2500-11-23")));
    // Julian Christmas has drifted to January 10.
    assert_eq!(set.name_on(date("2500-01-10")).unwrap(), vec!["ქრისტეშობა".to_string()]);
    assert!(!set.is_holiday(date("2500-01-07")).unwrap());
}
