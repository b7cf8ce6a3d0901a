//! Country definitions.
//!
//! Each country is a unit struct implementing [`Country`].  Its `populate`
//! composes the holiday-group capabilities it needs and calls them in
//! precedence order.

use hol_core::errors::Result;
use hol_time::WeekendSet;

use crate::builder::YearBuilder;
use crate::entry::Category;
use crate::l10n::Catalog;
use crate::observed::ObservedPolicy;

/// Georgia.
pub mod georgia;

/// Taiwan.
pub mod taiwan;

pub use georgia::Georgia;
pub use taiwan::Taiwan;

/// A country's holiday rules and metadata.
pub trait Country: std::fmt::Debug + Send + Sync {
    /// ISO 3166-1 alpha-2 code.
    fn code(&self) -> &'static str;

    /// ISO 3166-1 alpha-3 code.
    fn alpha3(&self) -> &'static str;

    /// English short name.
    fn name(&self) -> &'static str;

    /// First year that has holidays; earlier years are empty.
    fn start_year(&self) -> u16;

    /// Language of the message ids.
    fn default_language(&self) -> &'static str;

    /// Every language names can be produced in, the default included.
    fn supported_languages(&self) -> &'static [&'static str];

    /// Catalogs for the non-default languages.
    fn catalogs(&self) -> &'static [Catalog];

    /// Categories this country defines.
    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public]
    }

    /// Subdivision codes.
    fn subdivisions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Weekly rest days.
    fn weekend(&self) -> WeekendSet {
        WeekendSet::SAT_SUN
    }

    /// Default observance settings, if the country moves holidays at all.
    fn observed_policy(&self) -> Option<&'static ObservedPolicy> {
        None
    }

    /// Message id for a day off granted by a swap; `%s` is the workday.
    fn substituted_label(&self) -> &'static str {
        "Day off (substituted from %s)"
    }

    /// Message id holding the date format used inside the substituted label.
    fn substituted_date_format(&self) -> &'static str {
        "%Y-%m-%d"
    }

    /// Add the holidays of `builder.category()` for `builder.year()`.
    fn populate(&self, builder: &mut YearBuilder<'_>) -> Result<()>;
}
