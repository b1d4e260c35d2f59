use crate::DateError;
use crate::consts::{
    DAYS_BEFORE_MONTH, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_YEAR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, MAX_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve months of the Gregorian calendar, each carrying a long and a
/// short display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

/// All months in calendar order, for numeric lookup.
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Looks up the month for a 1-based month number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the number is 0 or > `MAX_MONTH`.
    pub fn from_number(number: u8) -> Result<Self, DateError> {
        if number == 0 || number > MAX_MONTH {
            return Err(DateError::InvalidMonth(number));
        }
        Ok(MONTHS[(number - 1) as usize])
    }

    /// Lookup for month numbers already known to be in `1..=12`.
    pub(crate) fn from_valid(number: u8) -> Self {
        debug_assert!(number != 0 && number <= MAX_MONTH);
        MONTHS[(number - 1) as usize]
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the long display name of the month
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Returns the short display name of the month.
    /// September is "Sept"; the concrete strings are observable output and
    /// are kept verbatim.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sept",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }

    /// Returns the number of days in the month, leap-adjusted for February.
    pub const fn days(self, leap: bool) -> u8 {
        if matches!(self, Self::February) && leap {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.number() as usize]
        }
    }

    /// Days from January 1 to the first day of this month (0 for January).
    pub const fn days_from_start_of_year(self, leap: bool) -> u16 {
        let days = DAYS_BEFORE_MONTH[self.number() as usize];
        if leap && self.number() > FEBRUARY {
            days + 1
        } else {
            days
        }
    }

    /// Days from the first day of this month to the start of the following
    /// year, this month's own length included (31 for December, a full year
    /// for January).
    pub const fn days_from_end_of_year(self, leap: bool) -> u16 {
        let year_days = if leap { DAYS_IN_LEAP_YEAR } else { DAYS_IN_YEAR };
        year_days - self.days_from_start_of_year(leap)
    }

    /// Days between the first day of month `a` and the first day of month
    /// `b` when `a` does not come after `b` in the calendar year. When `b`
    /// numerically precedes `a` the result wraps through the year end,
    /// counting `days_from_end_of_year(b) + days_from_start_of_year(a)`.
    ///
    /// The single `leap` flag applies to both terms, so the wrapped case is
    /// only meaningful when the two years involved share the same leap-ness.
    /// Spans over two years with different leap-ness must be computed date
    /// by date (see [`days_between`](crate::days_between)) instead of
    /// through this helper.
    pub const fn days_between_starts(a: Self, b: Self, leap: bool) -> u16 {
        if a.number() <= b.number() {
            b.days_from_start_of_year(leap) - a.days_from_start_of_year(leap)
        } else {
            b.days_from_end_of_year(leap) + a.days_from_start_of_year(leap)
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
