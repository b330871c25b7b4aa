//! Persistence seam for the Leave and Bonus Engine.
//!
//! The hosted application keeps all records in a remote relational store;
//! this crate only defines the interface it consumes. Components receive a
//! [`LeaveStore`] by reference so tests (and the bundled API) can substitute
//! the in-memory [`MemoryStore`].

mod memory;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LeaveBalance, LeaveRequest, Notification, RequestStatus};

pub use memory::MemoryStore;

/// Errors surfaced by a [`LeaveStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A compare-and-swap update found the record changed underneath it.
    #[error("concurrent update conflict")]
    Conflict,

    /// An update targeted a record that does not exist.
    #[error("record not found")]
    NotFound,

    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A type alias for Results that return [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Fields an update may change on a [`LeaveBalance`].
#[derive(Debug, Clone, PartialEq)]
pub struct BalancePatch {
    /// The new balance in days.
    pub balance: Decimal,
    /// The new last-accrual timestamp, if the accrual clock moved.
    pub last_accrual_date: Option<DateTime<Utc>>,
}

/// Fields a reviewer's decision changes on a [`LeaveRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPatch {
    /// The terminal status being applied.
    pub status: RequestStatus,
    /// The reviewer applying it.
    pub reviewer_id: String,
    /// Notes the reviewer left, if any.
    pub review_notes: Option<String>,
    /// When the review happened.
    pub reviewed_at: DateTime<Utc>,
}

/// The persistence collaborator every engine operation is injected with.
///
/// Mirrors the generic fetch/insert/update surface of the hosted store.
/// Fetching a missing record is not an error; it returns `Ok(None)`.
/// `update_balance` is a compare-and-swap: it applies the patch only if the
/// stored balance still equals `expected_balance`, otherwise it fails with
/// [`StoreError::Conflict`]. That guard is what lets the review workflow
/// deduct leave without a read-then-write race between two reviewers.
pub trait LeaveStore: Send + Sync {
    /// Fetches the balance record for a user, if one exists.
    fn fetch_balance(&self, user_id: &str) -> StoreResult<Option<LeaveBalance>>;

    /// Inserts a new balance record.
    fn insert_balance(&self, balance: LeaveBalance) -> StoreResult<LeaveBalance>;

    /// Applies `patch` to the user's balance iff the stored balance still
    /// equals `expected_balance`.
    fn update_balance(
        &self,
        user_id: &str,
        expected_balance: Decimal,
        patch: BalancePatch,
    ) -> StoreResult<LeaveBalance>;

    /// Fetches a leave request by id, if one exists.
    fn fetch_request(&self, id: Uuid) -> StoreResult<Option<LeaveRequest>>;

    /// Inserts a new leave request.
    fn insert_request(&self, request: LeaveRequest) -> StoreResult<LeaveRequest>;

    /// Applies a reviewer's decision to a request.
    fn update_request(&self, id: Uuid, patch: RequestPatch) -> StoreResult<LeaveRequest>;

    /// Inserts a notification record. Best-effort from the engine's side.
    fn insert_notification(&self, notification: Notification) -> StoreResult<()>;
}
