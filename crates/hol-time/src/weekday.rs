//! `Weekday` — day-of-week enum, and `WeekendSet` — the days a country
//! treats as its weekly rest days.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Zero-based index, Monday = 0.
    pub const fn index(&self) -> usize {
        *self as usize - 1
    }

    /// The following day of the week.
    pub fn succ(&self) -> Self {
        Self::ALL[(self.index() + 1) % 7]
    }

    /// The preceding day of the week.
    pub fn pred(&self) -> Self {
        Self::ALL[(self.index() + 6) % 7]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

/// The set of weekly rest days, stored as a bitmask (bit 0 = Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendSet(u8);

impl WeekendSet {
    /// Saturday and Sunday.
    pub const SAT_SUN: WeekendSet = WeekendSet::from_days(&[Weekday::Saturday, Weekday::Sunday]);

    /// Friday and Saturday.
    pub const FRI_SAT: WeekendSet = WeekendSet::from_days(&[Weekday::Friday, Weekday::Saturday]);

    /// Sunday only.
    pub const SUN: WeekendSet = WeekendSet::from_days(&[Weekday::Sunday]);

    /// Build from a list of rest days.
    pub const fn from_days(days: &[Weekday]) -> Self {
        let mut mask = 0u8;
        let mut i = 0;
        while i < days.len() {
            mask |= 1u8 << days[i].index();
            i += 1;
        }
        WeekendSet(mask)
    }

    /// `true` if `weekday` is a rest day.
    #[inline]
    pub const fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1u8 << weekday.index()) != 0
    }

    /// Rest days in Monday-first order.
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|w| self.contains(*w))
            .collect()
    }
}

impl Default for WeekendSet {
    fn default() -> Self {
        Self::SAT_SUN
    }
}
