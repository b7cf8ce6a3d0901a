//! # hol-holidays
//!
//! Country holiday sets: lazy per-year population, observed-holiday
//! shifting, day swaps, localized names and working-day queries.
//!
//! ```
//! use hol_holidays::HolidaySet;
//! use hol_time::Date;
//!
//! let tw = HolidaySet::new("TW").unwrap();
//! let d = Date::from_ymd(2024, 4, 4).unwrap();
//! assert_eq!(tw.name_on(d).unwrap(), ["兒童節", "清明節"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `YearBuilder` — what countries populate.
pub mod builder;

/// `WorkingDayCalendar` trait.
pub mod calendar;

/// Country definitions.
pub mod countries;

/// Holiday entries, kinds and categories.
pub mod entry;

/// Holiday-group capabilities.
pub mod groups;

/// `HolidaySet` — the lazily populated holiday arena.
pub mod holiday_set;

/// Joint holiday sets.
pub mod joint;

/// Message catalogs.
pub mod l10n;

/// Observed-holiday rules.
pub mod observed;

/// `HolidayOptions`.
pub mod options;

/// Country registry.
pub mod registry;

/// Day swaps.
pub mod swap;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::YearBuilder;
pub use calendar::WorkingDayCalendar;
pub use countries::Country;
pub use entry::{Category, HolidayDay, HolidayEntry, HolidayKind};
pub use groups::{ChineseCalendarHolidays, ChristianHolidays, InternationalHolidays};
pub use holiday_set::HolidaySet;
pub use joint::{JointHolidays, JointRule};
pub use l10n::{Catalog, Translate};
pub use observed::{Direction, ObservedPolicy, ObservedRule, Shift};
pub use options::HolidayOptions;
pub use registry::{localized_countries, lookup, supported_categories, supported_countries};
pub use swap::DaySwap;
