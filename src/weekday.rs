use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven days of the week, Sunday first, each carrying a long and a
/// short display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays, indexed by the congruence result (0 = Sunday).
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Returns the long display name of the weekday
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Returns the short display name of the weekday.
    /// "Tues" and "Thurs" are the bundled strings, kept verbatim.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tues",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thurs",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the day of the week for a proleptic-Gregorian date using the
/// closed-form congruence from
/// <https://cs.uwaterloo.ca/~alopez-o/math-faq/node73.html>:
/// January and February are treated as months 13 and 14 of the previous
/// year, then with century `C` and year-in-century `Y`,
/// `W = day + floor(2.6*m - 0.2) - 2C + Y + Y/4 + C/4`, and `W mod 7`
/// indexes the week with Sunday at 0.
///
/// Expects an already validated (year, month, day) triple.
pub fn day_of_week(year: u32, month: u8, day: u8) -> Weekday {
    let (year, month) = if month < 3 {
        (i64::from(year) - 1, i64::from(month) + 10)
    } else {
        (i64::from(year), i64::from(month) - 2)
    };

    let c = year / 100;
    let y = year % 100;

    // (26m - 2) / 10 == floor(2.6m - 0.2); the term is non-negative for
    // every shifted month, so integer division is exact floor.
    let w = i64::from(day) + (26 * month - 2) / 10 - 2 * c + y + y / 4 + c / 4;

    WEEKDAYS[usize::try_from(w.rem_euclid(7)).unwrap_or_default()]
}
