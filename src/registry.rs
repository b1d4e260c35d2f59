use crate::calendar::is_leap_year;
use crate::consts::{MAX_YEAR, MIN_DAY};
use crate::month::Month;
use crate::value::DateValue;
use crate::{Date, DateError};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

/// Error type for registry release operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A date was released that the registry is not tracking, either
    /// because it was never acquired here or because it was already
    /// released as many times as it was acquired.
    #[error("unbalanced release of {year}-{month:02}-{day:02}: not tracked by this registry")]
    UnbalancedRelease {
        /// Year of the released date.
        year: u32,
        /// Month of the released date.
        month: u8,
        /// Day of the released date.
        day: u8,
    },
}

/// A tracked canonical date and the number of acquisitions that have not
/// been released yet.
#[derive(Debug)]
struct Entry {
    date: Arc<DateValue>,
    count: u64,
}

/// Canonicalization registry for dates: at most one live canonical
/// [`Date`] exists per distinct (year, month, day) triple, and repeated
/// acquisition is an O(1) average map lookup.
///
/// Acquisitions are reference counted. Pairing every [`acquire`] with a
/// [`release`] lets the registry evict dates that are no longer held;
/// acquiring without ever releasing is equally valid and simply keeps every
/// distinct date live for the registry's lifetime.
///
/// The registry is safe to share across threads. Lookup-or-create and the
/// count update happen under one lock, so two concurrent acquisitions of
/// the same triple can never observe two distinct canonical instances, and
/// the count never drifts under interleaving.
///
/// [`acquire`]: DateRegistry::acquire
/// [`release`]: DateRegistry::release
#[derive(Debug, Default)]
pub struct DateRegistry {
    dates: Mutex<HashMap<u32, Entry>>,
}

impl DateRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical date for the given (year, month, day) triple,
    /// validating the ranges first. On a hit the tracked count is bumped
    /// and the existing instance returned; on a miss the date is created
    /// with a count of one.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay`
    /// when a component is out of range. Nothing is stored on failure.
    pub fn acquire(&self, year: u32, month: u8, day: u8) -> Result<Date, DateError> {
        let value = validate(year, month, day)?;

        let mut dates = self.dates.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = dates
            .entry(value.get())
            .and_modify(|entry| entry.count += 1)
            .or_insert_with(|| Entry {
                date: Arc::new(value),
                count: 1,
            });

        Ok(Date::from_canonical(Arc::clone(&entry.date)))
    }

    /// Releases one acquisition of the given date. When the tracked count
    /// reaches zero the date is evicted and a later acquisition will create
    /// a fresh canonical instance.
    ///
    /// Handle clones do not count: one `release` balances one `acquire`,
    /// regardless of how often the returned handle was cloned.
    ///
    /// # Errors
    /// Returns `RegistryError::UnbalancedRelease` if the date is not
    /// currently tracked.
    pub fn release(&self, date: &Date) -> Result<(), RegistryError> {
        let mut dates = self.dates.lock().unwrap_or_else(PoisonError::into_inner);
        let key = date.value().get();

        let Some(entry) = dates.get_mut(&key) else {
            let (year, month, day) = date.value().unpack();
            return Err(RegistryError::UnbalancedRelease { year, month, day });
        };

        entry.count -= 1;
        if entry.count == 0 {
            dates.remove(&key);
        }
        Ok(())
    }

    /// Returns the number of distinct canonical dates currently live
    pub fn len(&self) -> usize {
        self.dates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no dates are currently tracked
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validates the triple and packs it. The month check is folded into the
/// day check's month resolution, the same way a day can only be judged
/// against a resolved month length.
fn validate(year: u32, month: u8, day: u8) -> Result<DateValue, DateError> {
    if year > MAX_YEAR {
        return Err(DateError::InvalidYear(year));
    }
    let max_day = Month::from_number(month)?.days(is_leap_year(year));
    if !(MIN_DAY..=max_day).contains(&day) {
        return Err(DateError::InvalidDay { year, month, day });
    }
    Ok(DateValue::pack(year, month, day))
}

/// The process-wide registry backing [`acquire`], [`release`],
/// [`dates_stored`] and the string/serde constructors on [`Date`].
static REGISTRY: LazyLock<DateRegistry> = LazyLock::new(DateRegistry::new);

/// Acquires a date from the process-wide registry.
///
/// # Errors
/// Returns `DateError` if a component is out of range.
pub fn acquire(year: u32, month: u8, day: u8) -> Result<Date, DateError> {
    REGISTRY.acquire(year, month, day)
}

/// Releases one acquisition from the process-wide registry.
///
/// # Errors
/// Returns `RegistryError::UnbalancedRelease` if the date is not tracked.
pub fn release(date: &Date) -> Result<(), RegistryError> {
    REGISTRY.release(date)
}

/// Returns the number of distinct dates live in the process-wide registry
pub fn dates_stored() -> usize {
    REGISTRY.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_returns_same_instance() {
        let registry = DateRegistry::new();
        let a = registry.acquire(2017, 3, 2).unwrap();
        let b = registry.acquire(2017, 3, 2).unwrap();
        assert!(a.same_instance(&b));
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_dates_are_distinct_instances() {
        let registry = DateRegistry::new();
        let a = registry.acquire(2017, 3, 2).unwrap();
        let b = registry.acquire(2017, 3, 3).unwrap();
        assert!(!a.same_instance(&b));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_release_keeps_date_until_count_zero() {
        let registry = DateRegistry::new();
        let a = registry.acquire(2017, 3, 2).unwrap();
        let b = registry.acquire(2017, 3, 2).unwrap();

        registry.release(&a).unwrap();
        assert_eq!(registry.len(), 1, "one acquisition still outstanding");

        registry.release(&b).unwrap();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_release_untracked_is_unbalanced() {
        let registry = DateRegistry::new();
        let date = registry.acquire(2017, 3, 2).unwrap();
        registry.release(&date).unwrap();

        let result = registry.release(&date);
        assert_eq!(
            result,
            Err(RegistryError::UnbalancedRelease {
                year: 2017,
                month: 3,
                day: 2
            })
        );
    }

    #[test]
    fn test_release_from_other_registry_is_unbalanced() {
        let registry = DateRegistry::new();
        let other = DateRegistry::new();
        let date = registry.acquire(2017, 3, 2).unwrap();
        assert!(matches!(
            other.release(&date),
            Err(RegistryError::UnbalancedRelease { .. })
        ));
    }

    #[test]
    fn test_eviction_allows_fresh_instance() {
        let registry = DateRegistry::new();
        let old = registry.acquire(2017, 3, 2).unwrap();
        registry.release(&old).unwrap();

        let new = registry.acquire(2017, 3, 2).unwrap();
        assert!(!old.same_instance(&new), "evicted date must be recreated");
        assert_eq!(old, new, "value equality is unaffected by eviction");
    }

    #[test]
    fn test_clones_do_not_affect_count() {
        let registry = DateRegistry::new();
        let date = registry.acquire(2017, 3, 2).unwrap();
        let _clone = date.clone();
        registry.release(&date).unwrap();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_acquire_invalid_year() {
        let registry = DateRegistry::new();
        let result = registry.acquire(MAX_YEAR + 1, 1, 1);
        assert!(matches!(result, Err(DateError::InvalidYear(_))));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_acquire_invalid_month() {
        let registry = DateRegistry::new();
        assert!(matches!(
            registry.acquire(2017, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            registry.acquire(2017, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_acquire_invalid_day() {
        let registry = DateRegistry::new();
        assert!(matches!(
            registry.acquire(2017, 3, 0),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            registry.acquire(2017, 3, 32),
            Err(DateError::InvalidDay { .. })
        ));
        // February length depends on the year
        assert!(registry.acquire(2024, 2, 29).is_ok());
        assert!(matches!(
            registry.acquire(2023, 2, 29),
            Err(DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            registry.acquire(1900, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_acquire_extreme_years() {
        let registry = DateRegistry::new();
        assert!(registry.acquire(0, 1, 1).is_ok());
        assert!(registry.acquire(MAX_YEAR, 12, 31).is_ok());
    }

    #[test]
    fn test_concurrent_acquire_single_instance() {
        let registry = DateRegistry::new();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.acquire(2017, 3, 2).unwrap()))
                .collect();

            let dates: Vec<Date> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            for pair in dates.windows(2) {
                assert!(pair[0].same_instance(&pair[1]));
            }
        });

        assert_eq!(registry.len(), 1);

        // All eight acquisitions are tracked
        let date = registry.acquire(2017, 3, 2).unwrap();
        for _ in 0..9 {
            registry.release(&date).unwrap();
        }
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_unbalanced_release_message() {
        let e = RegistryError::UnbalancedRelease {
            year: 2017,
            month: 3,
            day: 2,
        };
        assert_eq!(
            e.to_string(),
            "unbalanced release of 2017-03-02: not tracked by this registry"
        );
    }

    #[test]
    fn test_process_wide_registry() {
        let a = acquire(1991, 8, 15).unwrap();
        let b = acquire(1991, 8, 15).unwrap();
        assert!(a.same_instance(&b));
        assert!(dates_stored() >= 1);
        release(&a).unwrap();
        release(&b).unwrap();
    }
}
