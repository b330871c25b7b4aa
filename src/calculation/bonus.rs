//! Target-hours bonus calculation.
//!
//! Staff earn a per-hour bonus for every hour worked beyond their target
//! for the period. Progress toward the target is reported as a percentage
//! clamped to 100.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Calculates the bonus earned for hours worked against a target.
///
/// Hours at or below the threshold earn nothing; every hour beyond it earns
/// `amount_per_hour`.
///
/// # Example
///
/// ```
/// use cleantrack_engine::calculation::calculate_bonus;
/// use rust_decimal::Decimal;
///
/// let bonus = calculate_bonus(
///     Decimal::from(210),
///     Decimal::from(200),
///     Decimal::from(5),
/// );
/// assert_eq!(bonus, Decimal::from(50));
/// ```
pub fn calculate_bonus(
    hours_worked: Decimal,
    hours_threshold: Decimal,
    amount_per_hour: Decimal,
) -> Decimal {
    if hours_worked <= hours_threshold {
        return Decimal::ZERO;
    }
    (hours_worked - hours_threshold) * amount_per_hour
}

/// Progress toward the target as a whole percentage, clamped to 0..=100.
///
/// Midpoints round up, so 62.5% reports 63, the same figure the dashboard
/// shows. A threshold of zero (or less) reports 0% rather than dividing by
/// zero; the hosted app left that case undefined and this engine pins it
/// down.
///
/// # Example
///
/// ```
/// use cleantrack_engine::calculation::progress_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(progress_percent(Decimal::from(150), Decimal::from(200)), 75);
/// assert_eq!(progress_percent(Decimal::from(250), Decimal::from(200)), 100);
/// assert_eq!(progress_percent(Decimal::from(10), Decimal::ZERO), 0);
/// ```
pub fn progress_percent(hours_worked: Decimal, hours_threshold: Decimal) -> u32 {
    if hours_threshold <= Decimal::ZERO {
        return 0;
    }
    let percent = (hours_worked / hours_threshold * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    percent.to_u32().unwrap_or(0).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bonus_zero_below_threshold() {
        assert_eq!(calculate_bonus(dec("150"), dec("200"), dec("5")), Decimal::ZERO);
    }

    #[test]
    fn test_bonus_zero_at_threshold() {
        assert_eq!(calculate_bonus(dec("200"), dec("200"), dec("5")), Decimal::ZERO);
    }

    #[test]
    fn test_bonus_ten_hours_over_at_five() {
        assert_eq!(calculate_bonus(dec("210"), dec("200"), dec("5")), dec("50"));
    }

    #[test]
    fn test_bonus_fractional_hours() {
        // 2.5 hours over at $4.40
        assert_eq!(calculate_bonus(dec("202.5"), dec("200"), dec("4.40")), dec("11.000"));
    }

    #[test]
    fn test_progress_partial() {
        assert_eq!(progress_percent(dec("60"), dec("200")), 30);
        assert_eq!(progress_percent(dec("150"), dec("200")), 75);
    }

    #[test]
    fn test_progress_rounds_midpoints_up() {
        // 125/200 = 62.5% rounds half-up to 63
        assert_eq!(progress_percent(dec("125"), dec("200")), 63);
        // 127/200 = 63.5% rounds half-up to 64
        assert_eq!(progress_percent(dec("127"), dec("200")), 64);
        // 124/200 = 62% needs no rounding
        assert_eq!(progress_percent(dec("124"), dec("200")), 62);
    }

    #[test]
    fn test_progress_clamped_at_one_hundred() {
        assert_eq!(progress_percent(dec("250"), dec("200")), 100);
        assert_eq!(progress_percent(dec("2000"), dec("200")), 100);
    }

    #[test]
    fn test_progress_zero_threshold_guard() {
        assert_eq!(progress_percent(dec("10"), Decimal::ZERO), 0);
        assert_eq!(progress_percent(dec("10"), dec("-5")), 0);
    }

    #[test]
    fn test_progress_zero_hours() {
        assert_eq!(progress_percent(Decimal::ZERO, dec("200")), 0);
    }

    proptest! {
        /// Hours at or below the threshold never earn a bonus.
        #[test]
        fn prop_no_bonus_at_or_below_threshold(worked in 0u32..500, rate in 0u32..100) {
            let threshold = Decimal::from(worked);
            let bonus = calculate_bonus(Decimal::from(worked), threshold, Decimal::from(rate));
            prop_assert_eq!(bonus, Decimal::ZERO);
        }

        /// Progress never exceeds 100.
        #[test]
        fn prop_progress_clamped(worked in 0u32..10_000, threshold in 0u32..500) {
            let progress = progress_percent(Decimal::from(worked), Decimal::from(threshold));
            prop_assert!(progress <= 100);
        }
    }
}
