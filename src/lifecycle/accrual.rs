//! The monthly accrual workflow.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::calculation::{
    DEFAULT_MONTHLY_ACCRUAL_RATE, INITIAL_BALANCE_DAYS, accrual_due, apply_accrual,
};
use crate::error::EngineResult;
use crate::models::{LeaveBalance, Notification};
use crate::store::{BalancePatch, LeaveStore, StoreError};

/// Looks up a user's leave balance, creating or accruing it as needed.
///
/// Three outcomes, in order:
/// 1. No balance record exists yet: one is created with the initial grant
///    and the accrual clock set to `now`.
/// 2. A calendar month has elapsed since the last accrual: the monthly rate
///    is added, the clock moves to `now`, and a notification is emitted to
///    the user. Notification failures are logged and swallowed.
/// 3. Otherwise the stored record is returned unchanged.
///
/// The due-date comparison is the sole gate, so repeated calls within the
/// same month return the same record without double-accruing. If another
/// process lands the accrual first, the conflicting update is resolved by
/// re-reading the record it wrote.
pub fn check_and_process_accrual(
    store: &dyn LeaveStore,
    user_id: &str,
    now: DateTime<Utc>,
) -> EngineResult<LeaveBalance> {
    let Some(balance) = store.fetch_balance(user_id)? else {
        let initial = LeaveBalance {
            user_id: user_id.to_string(),
            balance: INITIAL_BALANCE_DAYS,
            last_accrual_date: now,
            monthly_accrual_rate: DEFAULT_MONTHLY_ACCRUAL_RATE,
        };
        info!(user_id, balance = %initial.balance, "Created initial leave balance");
        return Ok(store.insert_balance(initial)?);
    };

    if !accrual_due(balance.last_accrual_date, now) {
        debug!(user_id, "No accrual due");
        return Ok(balance);
    }

    let accrued = apply_accrual(&balance, now);
    let updated = match store.update_balance(
        user_id,
        balance.balance,
        BalancePatch {
            balance: accrued.balance,
            last_accrual_date: Some(now),
        },
    ) {
        Ok(updated) => updated,
        // Another caller accrued first; their record is the current one.
        Err(StoreError::Conflict) => {
            return match store.fetch_balance(user_id)? {
                Some(current) => Ok(current),
                None => Err(StoreError::NotFound.into()),
            };
        }
        Err(err) => return Err(err.into()),
    };

    info!(
        user_id,
        accrued = %balance.monthly_accrual_rate,
        balance = %updated.balance,
        "Processed monthly leave accrual"
    );

    let message = format!(
        "Your leave balance has been credited with {} days. New balance: {} days.",
        updated.monthly_accrual_rate, updated.balance
    );
    if let Err(err) = store.insert_notification(Notification::new(user_id, message, now)) {
        warn!(user_id, error = %err, "Failed to insert accrual notification");
    }

    Ok(updated)
}
