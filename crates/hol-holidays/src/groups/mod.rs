//! Holiday-group capabilities shared between countries.
//!
//! A capability resolves the dates of one family of holidays and adds them
//! to a [`YearBuilder`](crate::YearBuilder).  It holds no per-year state,
//! so the dates it produces do not depend on the other capabilities a
//! country combines it with.

/// Chinese calendar holidays.
pub mod chinese;

/// Christian holidays.
pub mod christian;

/// International holidays.
pub mod international;

pub use chinese::ChineseCalendarHolidays;
pub use christian::ChristianHolidays;
pub use international::InternationalHolidays;
