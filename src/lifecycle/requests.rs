//! The leave request create/review lifecycle.
//!
//! Requests are created `Pending` with a balance-sufficiency snapshot and
//! reviewed exactly once. Approving annual leave deducts the requested days
//! from the live balance before the request is marked approved; the
//! deduction uses the store's compare-and-swap update so two concurrent
//! approvals cannot both spend the same days.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::count_business_days;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveRequestInput, LeaveType, RequestStatus};
use crate::store::{BalancePatch, LeaveStore, RequestPatch, StoreError};

/// Attempts at the balance deduction before giving up on CAS conflicts.
const MAX_DEDUCT_ATTEMPTS: u32 = 3;

/// The decision a reviewer applies to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Approve the request. Annual leave deducts the balance.
    Approved,
    /// Reject the request. The balance is never touched.
    Rejected,
}

impl From<ReviewDecision> for RequestStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => RequestStatus::Approved,
            ReviewDecision::Rejected => RequestStatus::Rejected,
        }
    }
}

/// Whether a user's current balance covers `days` of the given leave type.
///
/// Only annual leave draws on the balance; every other type is always
/// sufficient. A user with no balance record has zero days available.
pub fn has_sufficient_balance(
    store: &dyn LeaveStore,
    user_id: &str,
    leave_type: LeaveType,
    days: u32,
) -> EngineResult<bool> {
    if !leave_type.draws_balance() {
        return Ok(true);
    }
    let available = store
        .fetch_balance(user_id)?
        .map(|b| b.balance)
        .unwrap_or(Decimal::ZERO);
    Ok(available >= Decimal::from(days))
}

/// Creates a leave request in the `Pending` state.
///
/// Validates the date range and business-day count before any persistence
/// call, snapshots whether the user's balance covers the request, and
/// stores the new record. The snapshot is informational; approval re-checks
/// the live balance.
pub fn create_leave_request(
    store: &dyn LeaveStore,
    user_id: &str,
    input: LeaveRequestInput,
    now: DateTime<Utc>,
) -> EngineResult<LeaveRequest> {
    let days_requested = count_business_days(input.start_date, input.end_date)?;
    let has_balance = has_sufficient_balance(store, user_id, input.leave_type, days_requested)?;

    let request = LeaveRequest {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        start_date: input.start_date,
        end_date: input.end_date,
        days_requested,
        leave_type: input.leave_type,
        reason: input.reason,
        status: RequestStatus::Pending,
        reviewer_id: None,
        review_notes: None,
        has_sufficient_balance: has_balance,
        submitted_at: now,
        reviewed_at: None,
    };

    let created = store.insert_request(request)?;
    info!(
        request_id = %created.id,
        user_id,
        days = created.days_requested,
        sufficient = created.has_sufficient_balance,
        "Created leave request"
    );
    Ok(created)
}

/// Applies a reviewer's decision to a pending request.
///
/// Fails with [`EngineError::RequestNotFound`] for unknown ids and with
/// [`EngineError::AlreadyReviewed`] once a request has left the pending
/// state; approve and reject are terminal.
///
/// Approving annual leave re-reads the live balance (the submission-time
/// snapshot is not trusted) and deducts `days_requested` before the status
/// update. If the balance cannot cover the request the review fails with
/// [`EngineError::InsufficientBalance`], the balance is untouched, and the
/// request stays pending.
pub fn review_leave_request(
    store: &dyn LeaveStore,
    request_id: Uuid,
    reviewer_id: &str,
    decision: ReviewDecision,
    review_notes: Option<String>,
    now: DateTime<Utc>,
) -> EngineResult<LeaveRequest> {
    let request = store
        .fetch_request(request_id)?
        .ok_or(EngineError::RequestNotFound { id: request_id })?;

    if !request.is_pending() {
        return Err(EngineError::AlreadyReviewed {
            id: request_id,
            status: request.status,
        });
    }

    if decision == ReviewDecision::Approved && request.leave_type.draws_balance() {
        deduct_balance(store, &request.user_id, request.days_requested)?;
    }

    let updated = store.update_request(
        request_id,
        RequestPatch {
            status: decision.into(),
            reviewer_id: reviewer_id.to_string(),
            review_notes,
            reviewed_at: now,
        },
    )?;

    info!(
        request_id = %request_id,
        reviewer_id,
        status = %updated.status,
        "Reviewed leave request"
    );
    Ok(updated)
}

/// Deducts `days` from the user's balance with an optimistic-concurrency
/// retry loop. Each attempt re-reads the balance, re-checks sufficiency,
/// and compare-and-swaps; a conflict means another writer landed in between
/// and the check must run again against the fresh value.
fn deduct_balance(store: &dyn LeaveStore, user_id: &str, days: u32) -> EngineResult<()> {
    let requested = Decimal::from(days);

    for _ in 0..MAX_DEDUCT_ATTEMPTS {
        let available = store
            .fetch_balance(user_id)?
            .map(|b| b.balance)
            .unwrap_or(Decimal::ZERO);

        if available < requested {
            return Err(EngineError::InsufficientBalance {
                available,
                requested,
            });
        }

        match store.update_balance(
            user_id,
            available,
            BalancePatch {
                balance: available - requested,
                last_accrual_date: None,
            },
        ) {
            Ok(_) => return Ok(()),
            Err(StoreError::Conflict) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Err(StoreError::Conflict.into())
}
