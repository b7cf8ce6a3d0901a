//! Country lookup by code, alpha-3 code or name.

use std::collections::BTreeMap;

use hol_core::errors::{Error, Result};

use crate::countries::{Country, Georgia, Taiwan};
use crate::entry::Category;

static COUNTRIES: &[&dyn Country] = &[&Georgia, &Taiwan];

/// Every country definition, ordered by code.
pub fn supported_countries() -> &'static [&'static dyn Country] {
    COUNTRIES
}

/// Resolve `id`, ignoring case and surrounding whitespace.
pub fn lookup(id: &str) -> Result<&'static dyn Country> {
    let id = id.trim();
    COUNTRIES
        .iter()
        .copied()
        .find(|c| {
            c.code().eq_ignore_ascii_case(id)
                || c.alpha3().eq_ignore_ascii_case(id)
                || c.name().eq_ignore_ascii_case(id)
        })
        .ok_or_else(|| Error::UnknownCountry(id.to_string()))
}

/// Supported languages per country code.
pub fn localized_countries() -> BTreeMap<&'static str, &'static [&'static str]> {
    COUNTRIES
        .iter()
        .map(|c| (c.code(), c.supported_languages()))
        .collect()
}

/// Categories defined by country `id`.
pub fn supported_categories(id: &str) -> Result<&'static [Category]> {
    Ok(lookup(id)?.supported_categories())
}
