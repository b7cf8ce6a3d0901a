//! `HolidaySet` — the holidays of one country, materialized per year.
//!
//! Years are built on first access and cached in an arena behind a
//! `RwLock`.  A year goes through three stages, each cached separately:
//!
//! 1. **base**: the country's nominal holidays, day offs and workday
//!    overrides for the year;
//! 2. **raw**: the observed dates placed for the base holidays of the year
//!    (some may land in a neighbouring year);
//! 3. **view**: everything that falls inside the year, collected from the
//!    base of the year and the raw stages of the year and its two
//!    neighbours.
//!
//! Once built, a stage is never modified; asking for a new year only adds
//! entries to the arena.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hol_core::errors::{Error, Result};
use hol_time::Date;
use tracing::{debug, trace};

use crate::builder::{BaseYear, ObserveRequest, YearBuilder};
use crate::countries::Country;
use crate::entry::{Category, HolidayDay, HolidayEntry, HolidayKind};
use crate::l10n::{fill, resolve_catalog, Catalog, Translate};
use crate::observed::{find_slot, Direction, ObservedPolicy, Shift};
use crate::options::HolidayOptions;
use crate::registry;

/// Observed dates placed for the base holidays of one year.
#[derive(Debug, Default)]
struct RawYear {
    placed: BTreeMap<Date, Vec<HolidayEntry>>,
}

/// Everything inside one year.
#[derive(Debug, Default)]
struct YearView {
    entries: BTreeMap<Date, Vec<HolidayEntry>>,
    workdays: BTreeSet<Date>,
}

#[derive(Debug, Default)]
struct Arena {
    bases: BTreeMap<u16, Arc<BaseYear>>,
    raws: BTreeMap<u16, Arc<RawYear>>,
    views: BTreeMap<u16, Arc<YearView>>,
}

/// The holidays of one country under one configuration.
pub struct HolidaySet {
    country: &'static dyn Country,
    observed: bool,
    subdivision: Option<String>,
    categories: Vec<Category>,
    catalog: Catalog,
    arena: RwLock<Arena>,
}

impl std::fmt::Debug for HolidaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidaySet")
            .field("country", &self.country.code())
            .field("language", &self.catalog.language)
            .field("observed", &self.observed)
            .field("subdivision", &self.subdivision)
            .field("categories", &self.categories)
            .field("years", &self.populated_years())
            .finish()
    }
}

impl HolidaySet {
    // ── Construction ──────────────────────────────────────────────────────────

    /// Holidays of `country` (code, alpha-3 code or name) with default
    /// options.
    pub fn new(country: &str) -> Result<Self> {
        Self::with_options(country, HolidayOptions::default())
    }

    /// Holidays of `country` with explicit options.
    ///
    /// Fails with [`Error::UnknownCountry`], [`Error::UnknownSubdivision`] or
    /// [`Error::UnsupportedCategory`] for bad identifiers, and with any
    /// population error of the years listed in `options`.
    pub fn with_options(country: &str, options: HolidayOptions) -> Result<Self> {
        Self::for_country(registry::lookup(country)?, options)
    }

    /// Holidays of an already resolved country definition.
    pub fn for_country(country: &'static dyn Country, options: HolidayOptions) -> Result<Self> {
        let HolidayOptions {
            years,
            observed,
            language,
            subdivision,
            categories,
        } = options;

        let subdivision = match subdivision {
            None => None,
            Some(requested) => match country
                .subdivisions()
                .iter()
                .find(|s| s.eq_ignore_ascii_case(requested.trim()))
            {
                Some(code) => Some((*code).to_string()),
                None => {
                    return Err(Error::UnknownSubdivision {
                        country: country.code().to_string(),
                        subdivision: requested,
                    })
                }
            },
        };

        if let Some(bad) = categories
            .iter()
            .find(|c| !country.supported_categories().contains(*c))
        {
            return Err(Error::UnsupportedCategory {
                country: country.code().to_string(),
                category: bad.to_string(),
            });
        }
        // Populate in the country's declaration order.
        let categories: Vec<Category> = country
            .supported_categories()
            .iter()
            .copied()
            .filter(|c| categories.contains(c))
            .collect();

        let set = Self {
            country,
            observed,
            subdivision,
            categories,
            catalog: resolve_catalog(country, language.as_deref()),
            arena: RwLock::new(Arena::default()),
        };
        for year in years {
            set.year_view(year)?;
        }
        Ok(set)
    }

    // ── Inspectors ────────────────────────────────────────────────────────────

    /// The country definition.
    pub fn country(&self) -> &'static dyn Country {
        self.country
    }

    /// The language names are produced in.
    pub fn language(&self) -> &str {
        self.catalog.language
    }

    /// Whether observed holidays are generated.
    pub fn observed(&self) -> bool {
        self.observed
    }

    /// The selected subdivision.
    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }

    /// Enabled categories, in population order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Years materialized so far, ascending.
    pub fn populated_years(&self) -> Vec<u16> {
        self.read_arena().views.keys().copied().collect()
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// `true` if `date` carries at least one holiday.
    pub fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.year_view(date.year())?.entries.contains_key(&date))
    }

    /// `true` if `date` is one of the country's weekly rest days.
    pub fn is_weekend(&self, date: Date) -> bool {
        self.country.weekend().contains(date.weekday())
    }

    /// `true` if `date` is a working day: a swapped workday, or a date that
    /// is neither a weekend day nor a holiday.
    pub fn is_working_day(&self, date: Date) -> Result<bool> {
        let view = self.year_view(date.year())?;
        if view.workdays.contains(&date) {
            return Ok(true);
        }
        Ok(!self.is_weekend(date) && !view.entries.contains_key(&date))
    }

    /// Holiday names on `date`, in insertion order; empty if none.
    pub fn name_on(&self, date: Date) -> Result<Vec<String>> {
        Ok(self
            .entries_on(date)?
            .into_iter()
            .map(|e| e.name)
            .collect())
    }

    /// Holiday entries on `date`, with their kinds and categories.
    pub fn entries_on(&self, date: Date) -> Result<Vec<HolidayEntry>> {
        Ok(self
            .year_view(date.year())?
            .entries
            .get(&date)
            .cloned()
            .unwrap_or_default())
    }

    /// All holidays of `year`, ordered by date.
    pub fn holidays_for_year(&self, year: u16) -> Result<Vec<HolidayDay>> {
        let view = self.year_view(year)?;
        Ok(view.entries.iter().map(|(d, e)| day(*d, e)).collect())
    }

    /// Holidays between `start` and `end`, both included, ordered by date.
    pub fn holidays_between(&self, start: Date, end: Date) -> Result<Vec<HolidayDay>> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let mut out = Vec::new();
        for year in start.year()..=end.year() {
            let view = self.year_view(year)?;
            out.extend(view.entries.range(start..=end).map(|(d, e)| day(*d, e)));
        }
        Ok(out)
    }

    /// Dates of `year` with a holiday whose name contains `name`, ignoring
    /// case.
    pub fn get_named(&self, name: &str, year: u16) -> Result<Vec<Date>> {
        let needle = name.to_lowercase();
        let view = self.year_view(year)?;
        Ok(view
            .entries
            .iter()
            .filter(|(_, entries)| entries.iter().any(|e| e.name.to_lowercase().contains(&needle)))
            .map(|(d, _)| *d)
            .collect())
    }

    /// Weekend dates of `year` turned into working days by day swaps.
    pub fn workday_overrides(&self, year: u16) -> Result<Vec<Date>> {
        Ok(self.year_view(year)?.workdays.iter().copied().collect())
    }

    // ── Arena ─────────────────────────────────────────────────────────────────

    fn read_arena(&self) -> RwLockReadGuard<'_, Arena> {
        self.arena.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_arena(&self) -> RwLockWriteGuard<'_, Arena> {
        self.arena.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn year_view(&self, year: u16) -> Result<Arc<YearView>> {
        if let Some(view) = self.read_arena().views.get(&year) {
            return Ok(Arc::clone(view));
        }
        let mut arena = self.write_arena();
        self.view(&mut arena, year)
    }

    fn view(&self, arena: &mut Arena, year: u16) -> Result<Arc<YearView>> {
        if let Some(view) = arena.views.get(&year) {
            return Ok(Arc::clone(view));
        }
        let mut view = YearView::default();
        if year >= self.country.start_year() {
            let base = self.base(arena, year)?;
            view.entries = base.entries.clone();
            view.workdays = base.workdays.clone();
            if self.observed {
                for y in neighbours(year) {
                    let raw = self.raw(arena, y)?;
                    for (date, entries) in raw.placed.range(year_range(year)) {
                        let names = view.entries.entry(*date).or_default();
                        for entry in entries {
                            if names.iter().all(|e| e.name != entry.name) {
                                names.push(entry.clone());
                            }
                        }
                    }
                }
            }
        }
        debug!(
            country = self.country.code(),
            year,
            holidays = view.entries.len(),
            workdays = view.workdays.len(),
            "materialized holiday year"
        );
        let view = Arc::new(view);
        arena.views.insert(year, Arc::clone(&view));
        Ok(view)
    }

    fn base(&self, arena: &mut Arena, year: u16) -> Result<Arc<BaseYear>> {
        if let Some(base) = arena.bases.get(&year) {
            return Ok(Arc::clone(base));
        }
        let base = if year < self.country.start_year() {
            BaseYear::default()
        } else {
            let mut builder = YearBuilder::new(
                self.country,
                &self.catalog,
                year,
                self.observed,
                self.subdivision.as_deref(),
            );
            for &category in &self.categories {
                builder.set_category(category);
                self.country.populate(&mut builder)?;
            }
            builder.finish()?
        };
        let base = Arc::new(base);
        arena.bases.insert(year, Arc::clone(&base));
        Ok(base)
    }

    fn raw(&self, arena: &mut Arena, year: u16) -> Result<Arc<RawYear>> {
        if let Some(raw) = arena.raws.get(&year) {
            return Ok(Arc::clone(raw));
        }
        let base = self.base(arena, year)?;
        let policy = self.country.observed_policy();
        let max_days = policy.map_or(7, |p| p.max_scan_days);
        let label = self
            .catalog
            .tr(policy.map_or(ObservedPolicy::DEFAULT_LABEL, |p| p.label));

        let mut raw = RawYear::default();
        for request in &base.requests {
            let Some(shift) = shift_for(&base, request) else {
                continue;
            };
            let slot = find_slot(request.date, shift, max_days, |d| {
                self.occupied(arena, &base, year, &raw.placed, max_days, d)
            })?;
            let Some(slot) = slot else {
                return Err(Error::SubstituteScanExhausted {
                    date: request.date.to_string(),
                    name: request.name.clone(),
                    max_days,
                });
            };
            trace!(
                country = self.country.code(),
                holiday = %request.name,
                from = %request.date,
                to = %slot,
                "observed shift"
            );
            raw.placed.entry(slot).or_default().push(HolidayEntry {
                name: fill(&label, &request.name),
                kind: HolidayKind::Observed,
                category: request.category,
            });
        }
        let raw = Arc::new(raw);
        arena.raws.insert(year, Arc::clone(&raw));
        Ok(raw)
    }

    /// A date the observed scan of `year` must skip.
    ///
    /// Slots taken by an earlier year's observed dates are never reused: the
    /// lower year always places first, whatever order years are queried in.
    fn occupied(
        &self,
        arena: &mut Arena,
        base: &BaseYear,
        year: u16,
        placed: &BTreeMap<Date, Vec<HolidayEntry>>,
        max_days: u8,
        date: Date,
    ) -> Result<bool> {
        if self.is_weekend(date) || placed.contains_key(&date) {
            return Ok(true);
        }
        let taken = |b: &BaseYear| b.has_holiday(date) || b.workdays.contains(&date);
        let date_year = date.year();
        if date_year == year {
            if taken(base) {
                return Ok(true);
            }
        } else {
            let other = self.base(arena, date_year)?;
            if taken(other.as_ref()) {
                return Ok(true);
            }
        }

        if date_year < year {
            return Ok(self.raw(arena, date_year)?.placed.contains_key(&date));
        }
        if date_year == year {
            if let Some(prev) = year.checked_sub(1) {
                if prev >= self.country.start_year() && self.reaches(arena, prev, max_days, date)? {
                    return Ok(self.raw(arena, prev)?.placed.contains_key(&date));
                }
            }
        }
        Ok(false)
    }

    /// `true` if a forward scan started in `year` can place a date as late
    /// as `date`.
    fn reaches(&self, arena: &mut Arena, year: u16, max_days: u8, date: Date) -> Result<bool> {
        let base = self.base(arena, year)?;
        Ok(base.requests.iter().any(|request| match shift_for(&base, request) {
            Some(Shift {
                direction: Direction::Forward,
                start,
            }) => date - request.date < i32::from(start) + i32::from(max_days),
            _ => false,
        }))
    }
}

/// The shift `request` needs, if its date conflicts.
fn shift_for(base: &BaseYear, request: &ObserveRequest) -> Option<Shift> {
    let shared = base
        .entries
        .get(&request.date)
        .is_some_and(|es| es.iter().any(|e| e.name != request.name));
    request.rule.shift_for(request.date.weekday(), shared)
}

fn day(date: Date, entries: &[HolidayEntry]) -> HolidayDay {
    HolidayDay {
        date,
        names: entries.iter().map(|e| e.name.clone()).collect(),
    }
}

fn neighbours(year: u16) -> impl Iterator<Item = u16> {
    [year.checked_sub(1), Some(year), year.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(|y| (1..=9999).contains(y))
}

fn year_range(year: u16) -> std::ops::RangeInclusive<Date> {
    // `year` is always a valid Date year here.
    let first = Date::from_ymd(year, 1, 1).unwrap_or(Date::MIN);
    let last = Date::from_ymd(year, 12, 31).unwrap_or(Date::MAX);
    first..=last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn lazily_populated() {
        let set = HolidaySet::new("TW").unwrap();
        assert!(set.populated_years().is_empty());
        assert!(set.is_holiday(date(2023, 1, 1)).unwrap());
        assert_eq!(set.populated_years(), vec![2023]);
        set.holidays_for_year(2021).unwrap();
        assert_eq!(set.populated_years(), vec![2021, 2023]);
    }

    #[test]
    fn observed_crosses_year_boundary() {
        let set = HolidaySet::new("TW").unwrap();
        // 2022-01-01 is a Saturday, observed on Friday 2021-12-31.
        assert_eq!(
            set.name_on(date(2021, 12, 31)).unwrap(),
            vec!["中華民國開國紀念日（慶祝）".to_string()]
        );
        let entries = set.entries_on(date(2021, 12, 31)).unwrap();
        assert_eq!(entries[0].kind, HolidayKind::Observed);
        assert!(!set
            .holidays_for_year(2022)
            .unwrap()
            .iter()
            .any(|d| d.date == date(2021, 12, 31)));
    }

    #[test]
    fn observed_disabled() {
        let set = HolidaySet::with_options("TW", HolidayOptions::default().with_observed(false)).unwrap();
        assert!(!set.is_holiday(date(2023, 1, 2)).unwrap());
        // Day swaps do not depend on observance.
        assert!(set.is_holiday(date(2023, 1, 20)).unwrap());
    }

    #[test]
    fn below_threshold_is_empty() {
        let set = HolidaySet::new("TW").unwrap();
        assert!(set.holidays_for_year(1911).unwrap().is_empty());
        assert!(!set.is_holiday(date(1911, 10, 10)).unwrap());
    }

    #[test]
    fn between_spans_years() {
        let set = HolidaySet::new("TW").unwrap();
        let days = set.holidays_between(date(2021, 12, 25), date(2022, 1, 5)).unwrap();
        let dates: Vec<Date> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2021, 12, 31), date(2022, 1, 1)]);
        let reversed = set.holidays_between(date(2022, 1, 5), date(2021, 12, 25)).unwrap();
        assert_eq!(reversed, days);
    }

    #[test]
    fn named_search_is_case_insensitive() {
        let set = HolidaySet::with_options("TW", HolidayOptions::default().with_language("en_US")).unwrap();
        assert_eq!(
            set.get_named("mid-autumn", 2022).unwrap(),
            vec![date(2022, 9, 9), date(2022, 9, 10)]
        );
        assert!(set.get_named("christmas", 2022).unwrap().is_empty());
    }
}
