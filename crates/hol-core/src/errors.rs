//! Error types for holidays-rs.
//!
//! Every fallible operation in the workspace returns this single
//! `thiserror`-derived enum.  The `ensure!` and `fail!` macros mirror the
//! usual precondition / runtime-failure shorthands.

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A country identifier matched neither a code, an alias nor a name.
    #[error("unknown country: {0:?}")]
    UnknownCountry(String),

    /// The country exists but has no such subdivision.
    #[error("unknown subdivision {subdivision:?} for country {country}")]
    UnknownSubdivision {
        /// ISO code of the country.
        country: String,
        /// The subdivision that was requested.
        subdivision: String,
    },

    /// The country does not define the requested holiday category.
    #[error("category {category} is not supported by country {country}")]
    UnsupportedCategory {
        /// ISO code of the country.
        country: String,
        /// The category that was requested.
        category: String,
    },

    /// A lunar date was requested for a year outside the lunar table.
    #[error("lunar year {year} outside supported range [{min}, {max}]")]
    LunarOutOfRange {
        /// The requested lunar year.
        year: i32,
        /// First lunar year covered by the table.
        min: i32,
        /// Last lunar year covered by the table.
        max: i32,
    },

    /// A lunar date that does not exist (bad month/day, or a leap month the
    /// year does not have).
    #[error("invalid lunar date: {0}")]
    InvalidLunarDate(String),

    /// The observed-holiday scan ran past its configured limit without
    /// finding a free date.  This is always a configuration defect.
    #[error("no free substitute date for {name:?} ({date}) within {max_days} days")]
    SubstituteScanExhausted {
        /// The nominal date of the holiday being shifted (ISO format).
        date: String,
        /// The holiday name.
        name: String,
        /// The configured scan limit.
        max_days: u8,
    },

    /// A day-swap declaration is inconsistent (workday not on a weekend,
    /// workday already a holiday, ...).
    #[error("invalid day swap: {0}")]
    InvalidDaySwap(String),

    /// Date construction or arithmetic went out of range.
    #[error("date error: {0}")]
    InvalidDate(String),

    /// A textual value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn month(m: u8) -> hol_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hol_core::{fail, errors::Error};
/// fn always_err() -> hol_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: i32) -> Result<i32> {
        ensure!(x >= 0, "negative: {x}");
        Ok(x)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked(1), Ok(1));
        assert_eq!(
            checked(-2),
            Err(Error::Precondition("negative: -2".into()))
        );
    }

    #[test]
    fn display_messages() {
        let e = Error::LunarOutOfRange {
            year: 2101,
            min: 1900,
            max: 2100,
        };
        assert_eq!(
            e.to_string(),
            "lunar year 2101 outside supported range [1900, 2100]"
        );
        assert_eq!(
            Error::UnknownCountry("XX".into()).to_string(),
            "unknown country: \"XX\""
        );
    }
}
