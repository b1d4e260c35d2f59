use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::month::Month;
use crate::value::DateValue;

/// Gregorian leap year rule: divisible by 4 and not by 100, unless also
/// divisible by 400. Years are non-negative so plain remainder is safe.
pub const fn is_leap_year(year: u32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns 366 for leap years, 365 otherwise
pub const fn days_in_year(year: u32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}

/// Returns the number of days in the given month of the given year
pub const fn days_in_month(year: u32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Counts the days between two dates, inclusive of both endpoints:
/// `days_between(d, d)` is 1 and the operation is symmetric.
///
/// Within one year the count is the day difference plus the gap between the
/// month starts; across years it is the tail of the first year, the head of
/// the last year, and the full length of every year strictly between. Each
/// year contributes with its own leap flag, which is what makes spans over
/// mixed leap years safe where [`Month::days_between_starts`] alone is not.
///
/// Expects already validated values, which is every value a
/// [`DateRegistry`](crate::DateRegistry) hands out.
pub fn days_between(a: DateValue, b: DateValue) -> u32 {
    // Always count lower to upper; the magnitude is the same either way.
    let (a, b) = if a > b { (b, a) } else { (a, b) };

    let (y1, m1, d1) = a.unpack();
    let (y2, m2, d2) = b.unpack();

    let days = if y1 == y2 {
        let mut days = i64::from(d2) - i64::from(d1) + 1;
        if m1 != m2 {
            let leap = is_leap_year(y1);
            days += i64::from(Month::days_between_starts(
                Month::from_valid(m1),
                Month::from_valid(m2),
                leap,
            ));
        }
        days
    } else {
        let mut days = i64::from(Month::from_valid(m1).days_from_end_of_year(is_leap_year(y1)))
            - i64::from(d1)
            + 1
            + i64::from(Month::from_valid(m2).days_from_start_of_year(is_leap_year(y2)))
            + i64::from(d2);

        // Every year strictly between the endpoints contributes in full
        for year in (y1 + 1)..y2 {
            days += i64::from(days_in_year(year));
        }
        days
    };

    u32::try_from(days).unwrap_or_default()
}
