//! In-memory [`LeaveStore`] implementation.
//!
//! Backs the test suites and the bundled API with plain `Mutex<HashMap>`
//! maps. Compare-and-swap updates are atomic because every operation runs
//! under the map lock.

use std::collections::HashMap;
use std::sync::Mutex;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{LeaveBalance, LeaveRequest, Notification};

use super::{BalancePatch, LeaveStore, RequestPatch, StoreError, StoreResult};

/// An in-memory store keyed the same way the hosted tables are.
#[derive(Default)]
pub struct MemoryStore {
    balances: Mutex<HashMap<String, LeaveBalance>>,
    requests: Mutex<HashMap<Uuid, LeaveRequest>>,
    notifications: Mutex<Vec<Notification>>,
    /// When set, every notification insert fails. Test hook for the
    /// swallowed-failure path of the accrual processor.
    fail_notifications: Mutex<bool>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications inserted so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Returns all stored leave requests.
    pub fn requests(&self) -> Vec<LeaveRequest> {
        self.requests.lock().unwrap().values().cloned().collect()
    }

    /// Makes subsequent notification inserts fail with a backend error.
    pub fn set_fail_notifications(&self, fail: bool) {
        *self.fail_notifications.lock().unwrap() = fail;
    }
}

impl LeaveStore for MemoryStore {
    fn fetch_balance(&self, user_id: &str) -> StoreResult<Option<LeaveBalance>> {
        Ok(self.balances.lock().unwrap().get(user_id).cloned())
    }

    fn insert_balance(&self, balance: LeaveBalance) -> StoreResult<LeaveBalance> {
        let mut balances = self.balances.lock().unwrap();
        if balances.contains_key(&balance.user_id) {
            return Err(StoreError::Conflict);
        }
        balances.insert(balance.user_id.clone(), balance.clone());
        Ok(balance)
    }

    fn update_balance(
        &self,
        user_id: &str,
        expected_balance: Decimal,
        patch: BalancePatch,
    ) -> StoreResult<LeaveBalance> {
        let mut balances = self.balances.lock().unwrap();
        let record = balances.get_mut(user_id).ok_or(StoreError::NotFound)?;
        if record.balance != expected_balance {
            return Err(StoreError::Conflict);
        }
        record.balance = patch.balance;
        if let Some(last_accrual_date) = patch.last_accrual_date {
            record.last_accrual_date = last_accrual_date;
        }
        Ok(record.clone())
    }

    fn fetch_request(&self, id: Uuid) -> StoreResult<Option<LeaveRequest>> {
        Ok(self.requests.lock().unwrap().get(&id).cloned())
    }

    fn insert_request(&self, request: LeaveRequest) -> StoreResult<LeaveRequest> {
        let mut requests = self.requests.lock().unwrap();
        if requests.contains_key(&request.id) {
            return Err(StoreError::Conflict);
        }
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    fn update_request(&self, id: Uuid, patch: RequestPatch) -> StoreResult<LeaveRequest> {
        let mut requests = self.requests.lock().unwrap();
        let record = requests.get_mut(&id).ok_or(StoreError::NotFound)?;
        record.status = patch.status;
        record.reviewer_id = Some(patch.reviewer_id);
        record.review_notes = patch.review_notes;
        record.reviewed_at = Some(patch.reviewed_at);
        Ok(record.clone())
    }

    fn insert_notification(&self, notification: Notification) -> StoreResult<()> {
        if *self.fail_notifications.lock().unwrap() {
            return Err(StoreError::Backend("notification insert failed".to_string()));
        }
        self.notifications.lock().unwrap().push(notification);
        Ok(())
    }
}
