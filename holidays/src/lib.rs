//! # holidays
//!
//! Country holiday calendars.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidays = "0.1"
//! ```
//!
//! ```rust
//! use holidays::time::Date;
//! use holidays::{HolidayOptions, HolidaySet};
//!
//! let tw = HolidaySet::with_options("TW", HolidayOptions::default().with_language("en_US"))?;
//! let date = Date::from_ymd(2023, 1, 2)?;
//! assert_eq!(tw.name_on(date)?, ["Founding Day of the Republic of China (observed)"]);
//! assert!(!tw.is_working_day(date)?);
//! # Ok::<(), holidays::core::errors::Error>(())
//! ```
//!
//! Holiday computation logs through [`tracing`](https://docs.rs/tracing):
//! `debug` when a year is materialized, `trace` for every observed shift and
//! day swap, `warn` when a requested language falls back to the default.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use hol_core as core;

/// Dates, weekdays and the Julian, Easter and lunar adapters.
pub use hol_time as time;

/// Holiday sets, country definitions and the observed-holiday engine.
pub use hol_holidays as engine;

pub use hol_holidays::*;
