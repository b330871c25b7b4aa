//! Leave balance model.
//!
//! One balance record exists per user, holding the current day count and the
//! bookkeeping fields the accrual processor needs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's leave balance record.
///
/// Created lazily on first lookup with the initial grant, then incremented
/// by the monthly accrual processor and decremented when annual leave is
/// approved. The `balance` is a decimal day count (half days are common).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The user this balance belongs to. Unique per user.
    pub user_id: String,
    /// Current leave balance in days.
    pub balance: Decimal,
    /// When the balance last received a monthly accrual.
    pub last_accrual_date: DateTime<Utc>,
    /// Days granted per elapsed calendar month.
    pub monthly_accrual_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serialize_round_trip() {
        let balance = LeaveBalance {
            user_id: "user_001".to_string(),
            balance: Decimal::from_str("7.5").unwrap(),
            last_accrual_date: "2026-02-01T09:00:00Z".parse().unwrap(),
            monthly_accrual_rate: Decimal::from_str("2.5").unwrap(),
        };

        let json = serde_json::to_string(&balance).unwrap();
        let deserialized: LeaveBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(balance, deserialized);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "user_id": "user_001",
            "balance": "2.5",
            "last_accrual_date": "2026-02-01T09:00:00Z",
            "monthly_accrual_rate": "2.5"
        }"#;

        let balance: LeaveBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.user_id, "user_001");
        assert_eq!(balance.balance, Decimal::from_str("2.5").unwrap());
    }
}
