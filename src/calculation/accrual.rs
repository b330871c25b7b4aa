//! Monthly accrual arithmetic.
//!
//! A balance accrues its monthly rate once per elapsed calendar month. The
//! comparison against the next accrual date is the sole gate, which is what
//! makes repeated checks within the same month idempotent.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use crate::models::LeaveBalance;

/// Days granted when a balance record is first created for a user.
pub const INITIAL_BALANCE_DAYS: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Default days accrued per elapsed calendar month.
pub const DEFAULT_MONTHLY_ACCRUAL_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// The instant at which the next monthly accrual becomes due.
///
/// One calendar month after the last accrual, so a balance accrued on
/// January 31 is next due February 28 (or 29). Returns `None` only when the
/// date is outside the representable range.
pub fn next_accrual_date(last_accrual_date: DateTime<Utc>) -> Option<DateTime<Utc>> {
    last_accrual_date.checked_add_months(Months::new(1))
}

/// Whether a monthly accrual is due at `now`.
///
/// # Example
///
/// ```
/// use cleantrack_engine::calculation::accrual_due;
/// use chrono::{DateTime, Utc};
///
/// let last: DateTime<Utc> = "2026-01-15T09:00:00Z".parse().unwrap();
/// let before: DateTime<Utc> = "2026-02-14T09:00:00Z".parse().unwrap();
/// let after: DateTime<Utc> = "2026-02-15T09:00:00Z".parse().unwrap();
///
/// assert!(!accrual_due(last, before));
/// assert!(accrual_due(last, after));
/// ```
pub fn accrual_due(last_accrual_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match next_accrual_date(last_accrual_date) {
        Some(next) => now >= next,
        None => false,
    }
}

/// Applies one monthly accrual to a balance record.
///
/// Adds the record's own monthly rate and moves the accrual clock to `now`.
/// Callers are expected to have checked [`accrual_due`] first.
pub fn apply_accrual(balance: &LeaveBalance, now: DateTime<Utc>) -> LeaveBalance {
    LeaveBalance {
        user_id: balance.user_id.clone(),
        balance: balance.balance + balance.monthly_accrual_rate,
        last_accrual_date: now,
        monthly_accrual_rate: balance.monthly_accrual_rate,
    }
}
