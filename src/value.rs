use crate::consts::{DAY_MASK, MONTH_MASK, MONTH_SHIFT, YEAR_SHIFT};

/// A calendar date packed into a single `u32`: day in bits 0-4, month in
/// bits 5-8, year in bits 9-31.
///
/// The derived ordering compares the raw `u32`, which is an unsigned
/// comparison. This matters: years past `0x40_0000` set the top bit of the
/// packed value, and a signed comparison would order them before year zero.
/// Unsigned comparison keeps chronological order monotonic across the full
/// year range.
///
/// Packing performs no validation; [`DateRegistry`](crate::DateRegistry)
/// checks ranges before a value ever reaches a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(u32);

impl DateValue {
    /// Packs a (year, month, day) triple into a date value.
    /// Pure bit arithmetic, no range checks.
    #[inline]
    pub const fn pack(year: u32, month: u8, day: u8) -> Self {
        Self((year << YEAR_SHIFT) | ((month as u32) << MONTH_SHIFT) | day as u32)
    }

    /// Unpacks back into the (year, month, day) triple.
    #[inline]
    pub const fn unpack(self) -> (u32, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the day field (bits 0-4)
    #[inline]
    pub const fn day(self) -> u8 {
        (self.0 & DAY_MASK) as u8
    }

    /// Returns the month field (bits 5-8)
    #[inline]
    pub const fn month(self) -> u8 {
        ((self.0 >> MONTH_SHIFT) & MONTH_MASK) as u8
    }

    /// Returns the year field (bits 9-31)
    #[inline]
    pub const fn year(self) -> u32 {
        self.0 >> YEAR_SHIFT
    }

    /// Returns the raw packed integer
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_MONTH, MAX_YEAR};

    #[test]
    fn test_pack_layout() {
        let v = DateValue::pack(2017, 3, 2);
        assert_eq!(v.get(), (2017 << 9) | (3 << 5) | 2);
    }

    #[test]
    fn test_round_trip() {
        let triples = [
            (0, 1, 1),
            (1991, 8, 15),
            (2017, 3, 2),
            (2024, 2, 29),
            (MAX_YEAR, 12, 31),
        ];
        for &(y, m, d) in &triples {
            let v = DateValue::pack(y, m, d);
            assert_eq!(v.unpack(), (y, m, d));
            assert_eq!(v.year(), y);
            assert_eq!(v.month(), m);
            assert_eq!(v.day(), d);
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = DateValue::pack(2024, 2, 28);
        let b = DateValue::pack(2024, 2, 29);
        let c = DateValue::pack(2024, 3, 1);
        let d = DateValue::pack(2025, 1, 1);
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }

    #[test]
    fn test_ordering_with_top_year_bit_set() {
        // Years past 0x40_0000 set bit 31 of the packed value. A signed
        // comparison would order them before year zero.
        let high = DateValue::pack(MAX_YEAR, MAX_MONTH, 31);
        assert!(high.get() > i32::MAX as u32);
        let low = DateValue::pack(0, 1, 1);
        let mid = DateValue::pack(0x40_0000, 1, 1);
        assert!(low < mid);
        assert!(mid < high);
    }

    #[test]
    fn test_no_sign_extension_on_year() {
        let v = DateValue::pack(MAX_YEAR, 1, 1);
        assert_eq!(v.year(), MAX_YEAR);
        assert_eq!(v.month(), 1);
        assert_eq!(v.day(), 1);
    }
}
