//! Business-day counting for leave request validation.
//!
//! A leave request covers the business days (Monday through Friday) between
//! its start and end dates inclusive. Weekends never count; public holidays
//! are not modelled.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use cleantrack_engine::calculation::is_business_day;
/// use chrono::NaiveDate;
///
/// // 2026-03-06 is a Friday, 2026-03-07 a Saturday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2026, 3, 6).unwrap()));
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()));
/// ```
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts business days in `[start, end]` inclusive.
///
/// # Arguments
///
/// * `start` - First day of the range
/// * `end` - Last day of the range
///
/// # Returns
///
/// The number of weekdays in the range, or an error if:
/// - `end` is before `start` (`InvalidDateRange`)
/// - the range contains only weekend days (`NoBusinessDays`)
///
/// A count of zero is an error rather than a silent clamp so the request
/// flow fails with a message the requester can act on.
///
/// # Example
///
/// ```
/// use cleantrack_engine::calculation::count_business_days;
/// use chrono::NaiveDate;
///
/// // Monday 2026-03-02 through Friday 2026-03-06
/// let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
/// assert_eq!(count_business_days(start, end).unwrap(), 5);
/// ```
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }

    let mut count = 0;
    let mut day = start;
    while day <= end {
        if is_business_day(day) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    if count == 0 {
        return Err(EngineError::NoBusinessDays);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_weekday_counts_one() {
        // Wednesday
        assert_eq!(count_business_days(date(2026, 3, 4), date(2026, 3, 4)).unwrap(), 1);
    }

    #[test]
    fn test_full_week_counts_five() {
        // Monday through Sunday
        assert_eq!(count_business_days(date(2026, 3, 2), date(2026, 3, 8)).unwrap(), 5);
    }

    #[test]
    fn test_range_spanning_weekend() {
        // Thursday 2026-03-05 through Tuesday 2026-03-10: Thu, Fri, Mon, Tue
        assert_eq!(count_business_days(date(2026, 3, 5), date(2026, 3, 10)).unwrap(), 4);
    }

    #[test]
    fn test_two_full_weeks() {
        // Monday 2026-03-02 through Friday 2026-03-13
        assert_eq!(count_business_days(date(2026, 3, 2), date(2026, 3, 13)).unwrap(), 10);
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let result = count_business_days(date(2026, 3, 10), date(2026, 3, 2));
        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_weekend_only_range_is_invalid() {
        // Saturday and Sunday
        let result = count_business_days(date(2026, 3, 7), date(2026, 3, 8));
        assert!(matches!(result, Err(EngineError::NoBusinessDays)));
    }

    #[test]
    fn test_is_business_day_per_weekday() {
        // 2026-03-02 is a Monday
        for offset in 0..5 {
            assert!(is_business_day(date(2026, 3, 2 + offset)));
        }
        assert!(!is_business_day(date(2026, 3, 7)));
        assert!(!is_business_day(date(2026, 3, 8)));
    }

    proptest! {
        /// For weekday ranges with no weekend in between, the count is the
        /// plain day difference plus one for inclusivity.
        #[test]
        fn prop_consecutive_weekdays_count_day_difference(start_offset in 0i64..5, len in 0i64..5) {
            // Monday 2026-03-02 as the anchor; constrain both ends to the
            // same Mon-Fri block
            let monday = date(2026, 3, 2);
            let start = monday + chrono::Duration::days(start_offset);
            let end_offset = (start_offset + len).min(4);
            let end = monday + chrono::Duration::days(end_offset);

            let expected = (end - start).num_days() + 1;
            prop_assert_eq!(count_business_days(start, end).unwrap() as i64, expected);
        }

        /// Counting never exceeds the calendar length of the range.
        #[test]
        fn prop_count_bounded_by_calendar_days(start_day in 1u32..20, len in 0i64..40) {
            let start = date(2026, 3, start_day);
            let end = start + chrono::Duration::days(len);
            match count_business_days(start, end) {
                Ok(count) => prop_assert!(count as i64 <= len + 1),
                Err(EngineError::NoBusinessDays) => prop_assert!(len < 2),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
