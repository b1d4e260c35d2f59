//! Interned proleptic-Gregorian calendar dates.
//!
//! A date is a (year, month, day) triple packed into a single `u32` and
//! canonicalized through a [`DateRegistry`]: asking for the same triple
//! twice yields the same shared instance, reference counted until released.
//! On top of the canonical handles sit calendar arithmetic (leap years,
//! day-of-week, inclusive day spans) and a formatter catalogue with a
//! compiled `$...$` template mini-language.

mod calendar;
mod consts;
mod format;
mod month;
mod prelude;
mod registry;
mod value;
mod weekday;

pub use calendar::{days_between, days_in_month, days_in_year, is_leap_year};
pub use consts::*;
pub use format::{CustomFormat, DateFormat, default_format, ordinal, set_default_format};
pub use month::Month;
pub use registry::{DateRegistry, RegistryError, acquire, dates_stored, release};
pub use value::DateValue;
pub use weekday::{Weekday, day_of_week};

use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Validation and parse errors for date components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 0-{})", "_0", MAX_YEAR)]
    InvalidYear(u32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// A canonical, immutable calendar date.
///
/// Handles are obtained from a [`DateRegistry`] (or the process-wide
/// [`acquire`]); the triple behind a handle was validated at acquisition
/// and can never be invalid afterwards. Two handles for the same triple
/// from the same registry share one canonical instance while any
/// acquisition of it is outstanding ([`Date::same_instance`]).
///
/// Ordering compares the packed values, which is chronological order for
/// all valid dates. Cloning a handle is cheap and does not affect the
/// registry's reference count.
#[derive(Debug, Clone)]
pub struct Date {
    inner: Arc<DateValue>,
}

impl Date {
    /// Wraps a canonical value handed out by a registry.
    pub(crate) fn from_canonical(inner: Arc<DateValue>) -> Self {
        Self { inner }
    }

    /// Returns the packed date value
    #[inline]
    pub fn value(&self) -> DateValue {
        *self.inner
    }

    /// Returns the year component
    pub fn year(&self) -> u32 {
        self.inner.year()
    }

    /// Returns the month number (1-12)
    pub fn month_number(&self) -> u8 {
        self.inner.month()
    }

    /// Returns the month enumeration value
    pub fn month(&self) -> Month {
        Month::from_valid(self.inner.month())
    }

    /// Returns the day of the month
    pub fn day(&self) -> u8 {
        self.inner.day()
    }

    /// Returns the day of the week this date falls on
    pub fn day_of_week(&self) -> Weekday {
        day_of_week(self.year(), self.month_number(), self.day())
    }

    /// Returns true if this date is within a leap year
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Counts the days between this date and another, inclusive of both:
    /// a date to itself is 1, and the count is symmetric.
    pub fn days_between(&self, other: &Self) -> u32 {
        days_between(self.value(), other.value())
    }

    /// Returns true if both handles share one canonical instance. Implies
    /// (and for handles from one registry, is implied by) value equality.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Renders the date with the process-wide default format
    pub fn format(&self) -> String {
        default_format().render(self)
    }

    /// Renders the date with the given format
    pub fn format_with(&self, format: &DateFormat) -> String {
        format.render(self)
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses `year-month-day` or `year/month/day` (year first either way)
    /// and acquires the date from the process-wide registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let separator = if trimmed.contains('-') { '-' } else { '/' };
        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parts[0]
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        acquire(year, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Fixed hyphenated form, independent of the default format
        serializer.serialize_str(&format!(
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month_number(),
            self.day()
        ))
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
