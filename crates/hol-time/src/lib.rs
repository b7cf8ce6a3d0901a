//! # hol-time
//!
//! Calendar arithmetic for holiday rules: the proleptic Gregorian `Date`,
//! the Julian calendar adapter with Easter computus, and the Chinese
//! lunisolar table.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter computus (Western and Orthodox).
pub mod easter;

/// Gregorian month/weekday constants and relative-date helpers.
pub mod gregorian;

/// Julian calendar adapter.
pub mod julian;

/// Chinese lunisolar calendar adapter.
pub mod lunar;

mod lunar_data;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter, EasterMethod};
pub use julian::{julian_date_in_gregorian_year, julian_to_gregorian, ChurchCalendar};
pub use lunar::{qingming, ChineseLunisolar, LunarDate, LunarHoliday};
pub use month::Month;
pub use weekday::{Weekday, WeekendSet};
