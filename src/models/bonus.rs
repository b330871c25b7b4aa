//! Bonus formula and summary models.
//!
//! A manager assigns each staff member a [`BonusFormula`]; the engine derives
//! a [`BonusSummary`] from the formula and the hours actually worked in the
//! period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_bonus, progress_percent};

/// Classification of a staff member's progress toward their target hours.
///
/// Derived purely from the clamped progress percentage; the thresholds are
/// fixed and have no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    /// Progress below 30%.
    Below,
    /// Progress from 30% up to but not including 80%.
    Progressing,
    /// Progress from 80% up to but not including 100%.
    Near,
    /// Target reached or exceeded.
    Achieved,
}

impl TargetStatus {
    /// Classifies a progress percentage into a [`TargetStatus`].
    ///
    /// # Example
    ///
    /// ```
    /// use cleantrack_engine::models::TargetStatus;
    ///
    /// assert_eq!(TargetStatus::from_progress(10), TargetStatus::Below);
    /// assert_eq!(TargetStatus::from_progress(55), TargetStatus::Progressing);
    /// assert_eq!(TargetStatus::from_progress(92), TargetStatus::Near);
    /// assert_eq!(TargetStatus::from_progress(100), TargetStatus::Achieved);
    /// ```
    pub fn from_progress(progress: u32) -> Self {
        match progress {
            0..=29 => TargetStatus::Below,
            30..=79 => TargetStatus::Progressing,
            80..=99 => TargetStatus::Near,
            _ => TargetStatus::Achieved,
        }
    }
}

/// The bonus rule a manager assigns to a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusFormula {
    /// The staff member this formula applies to.
    pub user_id: String,
    /// Bonus paid per hour worked beyond the threshold.
    pub amount_per_hour: Decimal,
    /// Target hours for the period; hours beyond this earn the bonus.
    pub hours_threshold: Decimal,
}

/// A staff member's bonus position for the period, derived from their
/// formula and aggregated hours worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusSummary {
    /// The staff member.
    pub user_id: String,
    /// Aggregated hours worked in the period (external input).
    pub hours_worked: Decimal,
    /// Target hours for the period.
    pub hours_threshold: Decimal,
    /// Bonus paid per hour beyond the threshold.
    pub amount_per_hour: Decimal,
    /// Progress toward the target, clamped to 0..=100.
    pub progress: u32,
    /// Bonus earned so far this period.
    pub current_month_bonus: Decimal,
    /// Classification of the progress percentage.
    pub status: TargetStatus,
}

impl BonusSummary {
    /// Derives the summary for a formula and the hours worked so far.
    pub fn compute(formula: &BonusFormula, hours_worked: Decimal) -> Self {
        let progress = progress_percent(hours_worked, formula.hours_threshold);
        BonusSummary {
            user_id: formula.user_id.clone(),
            hours_worked,
            hours_threshold: formula.hours_threshold,
            amount_per_hour: formula.amount_per_hour,
            progress,
            current_month_bonus: calculate_bonus(
                hours_worked,
                formula.hours_threshold,
                formula.amount_per_hour,
            ),
            status: TargetStatus::from_progress(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_formula() -> BonusFormula {
        BonusFormula {
            user_id: "staff_001".to_string(),
            amount_per_hour: dec("5"),
            hours_threshold: dec("200"),
        }
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(TargetStatus::from_progress(0), TargetStatus::Below);
        assert_eq!(TargetStatus::from_progress(29), TargetStatus::Below);
        assert_eq!(TargetStatus::from_progress(30), TargetStatus::Progressing);
        assert_eq!(TargetStatus::from_progress(79), TargetStatus::Progressing);
        assert_eq!(TargetStatus::from_progress(80), TargetStatus::Near);
        assert_eq!(TargetStatus::from_progress(99), TargetStatus::Near);
        assert_eq!(TargetStatus::from_progress(100), TargetStatus::Achieved);
        assert_eq!(TargetStatus::from_progress(150), TargetStatus::Achieved);
    }

    #[test]
    fn test_summary_under_threshold() {
        let summary = BonusSummary::compute(&create_test_formula(), dec("120"));

        assert_eq!(summary.current_month_bonus, Decimal::ZERO);
        assert_eq!(summary.progress, 60);
        assert_eq!(summary.status, TargetStatus::Progressing);
    }

    #[test]
    fn test_summary_over_threshold() {
        // 250 worked against a 200 target at $5/h: 50 * 5 = 250 bonus
        let summary = BonusSummary::compute(&create_test_formula(), dec("250"));

        assert_eq!(summary.current_month_bonus, dec("250"));
        assert_eq!(summary.progress, 100);
        assert_eq!(summary.status, TargetStatus::Achieved);
    }

    #[test]
    fn test_summary_serializes_status_snake_case() {
        let summary = BonusSummary::compute(&create_test_formula(), dec("250"));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"status\":\"achieved\""));
    }
}
