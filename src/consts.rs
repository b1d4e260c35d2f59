/// Maximum valid year (inclusive), the largest value the 23-bit year field
/// of a packed date can hold. The minimum year is zero.
pub const MAX_YEAR: u32 = 0x7F_FFFF;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First (and smallest) day of any month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;

/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days before the first of each month in a common year (index 0 unused).
/// For March onward add one in leap years.
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

// Packed layout of a date value, low to high:
// day in bits 0-4, month in bits 5-8, year in bits 9-31.
pub(crate) const DAY_MASK: u32 = 0x1F;
pub(crate) const MONTH_SHIFT: u32 = 5;
pub(crate) const MONTH_MASK: u32 = 0xF;
pub(crate) const YEAR_SHIFT: u32 = 9;
