//! `YearBuilder` — collects one year's base holidays.
//!
//! A country's `populate` receives a builder for the year being
//! materialized.  It records nominal holidays, marks the ones subject to
//! observance and declares day swaps.  Observed dates are not chosen here:
//! the holiday set resolves them once every base holiday of the year is
//! known.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use hol_core::errors::{Error, Result};
use hol_time::{Date, Month};
use tracing::trace;

use crate::countries::Country;
use crate::entry::{Category, HolidayEntry, HolidayKind};
use crate::l10n::{fill, Translate};
use crate::observed::{ObservedPolicy, ObservedRule};
use crate::swap::DaySwap;

/// A holiday waiting for the observed-date scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ObserveRequest {
    pub(crate) date: Date,
    pub(crate) name: String,
    pub(crate) rule: ObservedRule,
    pub(crate) category: Category,
}

/// The base holidays of one year, before observed dates are placed.
#[derive(Debug, Clone, Default)]
pub(crate) struct BaseYear {
    pub(crate) entries: BTreeMap<Date, Vec<HolidayEntry>>,
    pub(crate) requests: Vec<ObserveRequest>,
    pub(crate) workdays: BTreeSet<Date>,
}

impl BaseYear {
    pub(crate) fn has_holiday(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }
}

/// Collects the base holidays of one year for one country.
pub struct YearBuilder<'a> {
    year: u16,
    category: Category,
    observed: bool,
    subdivision: Option<&'a str>,
    country: &'a dyn Country,
    translator: &'a dyn Translate,
    base: BaseYear,
}

impl std::fmt::Debug for YearBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YearBuilder")
            .field("country", &self.country.code())
            .field("year", &self.year)
            .field("category", &self.category)
            .field("observed", &self.observed)
            .finish()
    }
}

impl<'a> YearBuilder<'a> {
    pub(crate) fn new(
        country: &'a dyn Country,
        translator: &'a dyn Translate,
        year: u16,
        observed: bool,
        subdivision: Option<&'a str>,
    ) -> Self {
        Self {
            year,
            category: Category::Public,
            observed,
            subdivision,
            country,
            translator,
            base: BaseYear::default(),
        }
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    // ── Context ───────────────────────────────────────────────────────────────

    /// The year being populated.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The category being populated.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether observed holidays are generated.
    pub fn observed(&self) -> bool {
        self.observed
    }

    /// The selected subdivision, if any.
    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision
    }

    /// Translate a message id into the set's language.
    pub fn tr<'m>(&self, message: &'m str) -> Cow<'m, str> {
        self.translator.tr(message)
    }

    /// `true` if a holiday has already been added on `date`.
    pub fn has_holiday(&self, date: Date) -> bool {
        self.base.has_holiday(date)
    }

    // ── Holidays ──────────────────────────────────────────────────────────────

    /// Add holiday `name` (a message id) on `date`.
    ///
    /// Dates outside the year being populated are ignored and `None` is
    /// returned.
    pub fn add(&mut self, name: &str, date: Date) -> Option<Date> {
        if date.year() != self.year {
            return None;
        }
        let name = self.translator.tr(name).into_owned();
        self.insert(date, name, HolidayKind::Nominal);
        Some(date)
    }

    /// Add holiday `name` on `month`/`day` of the year being populated.
    pub fn add_holiday(&mut self, name: &str, month: Month, day: u8) -> Result<Date> {
        let date = Date::from_month_day(self.year, month, day)?;
        self.add(name, date);
        Ok(date)
    }

    fn insert(&mut self, date: Date, name: String, kind: HolidayKind) {
        let names = self.base.entries.entry(date).or_default();
        if names.iter().all(|e| e.name != name) {
            names.push(HolidayEntry {
                name,
                kind,
                category: self.category,
            });
        }
    }

    // ── Observance ────────────────────────────────────────────────────────────

    /// Mark the holiday `name` on `date` for observance under the country's
    /// default policy.  Does nothing before the policy's first year or when
    /// observed holidays are disabled.
    pub fn observe(&mut self, date: impl Into<Option<Date>>, name: &str) {
        let Some(policy) = self.country.observed_policy() else {
            return;
        };
        if self.year >= policy.since {
            self.observe_with(date, name, policy.rule);
        }
    }

    /// Mark the holiday `name` on `date` for observance under `rule`.
    /// Does nothing when observed holidays are disabled.
    pub fn observe_with(&mut self, date: impl Into<Option<Date>>, name: &str, rule: ObservedRule) {
        let Some(date) = date.into() else {
            return;
        };
        if !self.observed || date.year() != self.year {
            return;
        }
        let name = self.translator.tr(name).into_owned();
        self.base.requests.push(ObserveRequest {
            date,
            name,
            rule,
            category: self.category,
        });
    }

    /// The country's default observed policy.
    pub fn observed_policy(&self) -> Option<&'static ObservedPolicy> {
        self.country.observed_policy()
    }

    // ── Day swaps ─────────────────────────────────────────────────────────────

    /// Apply the swaps of `table` that touch the year being populated: day
    /// offs in this year become holidays, working days in this year become
    /// workday overrides.
    pub fn add_day_swaps(&mut self, table: &[DaySwap]) -> Result<()> {
        let label = self.translator.tr(self.country.substituted_label());
        let format = self.translator.tr(self.country.substituted_date_format());
        for swap in table {
            if swap.day_off_year() == self.year {
                let day_off = swap.day_off()?;
                let workday = swap.workday()?;
                let name = fill(&label, &workday.format(&format));
                trace!(country = self.country.code(), %day_off, %workday, "day swap");
                self.insert(day_off, name, HolidayKind::DayOff);
            }
            if swap.workday_year() == self.year {
                self.base.workdays.insert(swap.workday()?);
            }
        }
        Ok(())
    }

    /// Validate and hand over the collected year.
    pub(crate) fn finish(self) -> Result<BaseYear> {
        let weekend = self.country.weekend();
        for &workday in &self.base.workdays {
            if !weekend.contains(workday.weekday()) {
                return Err(Error::InvalidDaySwap(format!(
                    "{}: workday {workday} is not a weekend day",
                    self.country.code()
                )));
            }
            if self.base.has_holiday(workday) {
                return Err(Error::InvalidDaySwap(format!(
                    "{}: workday {workday} is a holiday",
                    self.country.code()
                )));
            }
        }
        Ok(self.base)
    }
}
