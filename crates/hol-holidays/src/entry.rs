//! Holiday entries and the categories they belong to.

use std::str::FromStr;

use hol_core::errors::Error;
use hol_time::Date;

/// A group of holidays a country may define, selected when the set is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Statutory public holidays.
    #[default]
    Public,
    /// Holidays that employers may grant at their discretion.
    Optional,
    /// Bank holidays.
    Bank,
    /// School holidays.
    School,
    /// Government-office holidays.
    Government,
}

impl Category {
    /// Lower-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Optional => "optional",
            Category::Bank => "bank",
            Category::School => "school",
            Category::Government => "government",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Category::Public),
            "optional" => Ok(Category::Optional),
            "bank" => Ok(Category::Bank),
            "school" => Ok(Category::School),
            "government" => Ok(Category::Government),
            _ => Err(Error::Parse(format!("unknown holiday category {s:?}"))),
        }
    }
}

/// How an entry came to be in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayKind {
    /// The holiday on the date its rule gives.
    Nominal,
    /// A substitute for a nominal holiday that fell on a conflicting date.
    Observed,
    /// A bridge day off granted by a day swap.
    DayOff,
}

/// One named holiday on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayEntry {
    /// Localized name.
    pub name: String,
    /// Nominal, observed or day-off.
    pub kind: HolidayKind,
    /// Category the entry was populated under.
    pub category: Category,
}

/// All holiday names on one date, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayDay {
    /// The date.
    pub date: Date,
    /// Names, without duplicates.
    pub names: Vec<String>,
}

impl std::fmt::Display for HolidayDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.names.join("; "))
    }
}
