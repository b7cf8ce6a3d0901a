//! `HolidayOptions` — how a [`HolidaySet`](crate::HolidaySet) is configured.

use hol_core::errors::Result;

use crate::entry::Category;
use crate::holiday_set::HolidaySet;

/// Construction options for a holiday set.
///
/// # Example
/// ```
/// use hol_holidays::{Category, HolidayOptions};
///
/// let set = HolidayOptions::default()
///     .with_years(2023..=2024)
///     .with_language("en_US")
///     .with_categories([Category::Public, Category::Optional])
///     .build("TW")
///     .unwrap();
/// assert_eq!(set.populated_years(), vec![2023, 2024]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HolidayOptions {
    /// Years populated at construction.
    pub years: Vec<u16>,
    /// Generate observed holidays.
    pub observed: bool,
    /// Requested language; `None` for the country default.
    pub language: Option<String>,
    /// Subdivision code.
    pub subdivision: Option<String>,
    /// Enabled categories.
    pub categories: Vec<Category>,
}

impl Default for HolidayOptions {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            observed: true,
            language: None,
            subdivision: None,
            categories: vec![Category::Public],
        }
    }
}

impl HolidayOptions {
    /// Populate `years` eagerly.
    pub fn with_years(mut self, years: impl IntoIterator<Item = u16>) -> Self {
        self.years.extend(years);
        self
    }

    /// Populate one year eagerly.
    pub fn with_year(mut self, year: u16) -> Self {
        self.years.push(year);
        self
    }

    /// Turn observed-holiday generation on or off.
    pub fn with_observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Produce names in `language`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restrict to a subdivision.
    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.subdivision = Some(subdivision.into());
        self
    }

    /// Replace the enabled categories.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Build the holiday set for `country`.
    pub fn build(self, country: &str) -> Result<HolidaySet> {
        HolidaySet::with_options(country, self)
    }
}
