//! Leave request model and related types.
//!
//! This module defines the [`LeaveRequest`] record, its lifecycle status,
//! and the leave-type variants recognised by the engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category of leave being requested.
///
/// Only [`LeaveType::Annual`] draws down the user's leave balance; the other
/// types are tracked but never deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave, deducted from the leave balance on approval.
    Annual,
    /// Sick leave.
    Sick,
    /// Unpaid leave.
    Unpaid,
    /// Any other leave category.
    Other,
}

impl LeaveType {
    /// Returns true if approving this leave type deducts from the balance.
    pub fn draws_balance(&self) -> bool {
        matches!(self, LeaveType::Annual)
    }
}

/// Workflow status of a leave request.
///
/// Requests are created `Pending` and transition exactly once to either
/// `Approved` or `Rejected`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting review.
    Pending,
    /// Approved by a reviewer. Terminal.
    Approved,
    /// Rejected by a reviewer. Terminal.
    Rejected,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A leave request as stored and returned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The user requesting leave.
    pub user_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive). Never before `start_date`.
    pub end_date: NaiveDate,
    /// Business days covered by the range. Always greater than zero.
    pub days_requested: u32,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// Free-text reason supplied by the requester.
    pub reason: String,
    /// Current workflow status.
    pub status: RequestStatus,
    /// The reviewer who approved or rejected the request, once reviewed.
    pub reviewer_id: Option<String>,
    /// Notes left by the reviewer, if any.
    pub review_notes: Option<String>,
    /// Whether the user's balance covered the request at submission time.
    ///
    /// Informational snapshot only; approval re-checks the live balance.
    pub has_sufficient_balance: bool,
    /// When the request was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the request was reviewed, if it has been.
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    /// Returns true if the request is still awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// The fields a requester supplies when creating a leave request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestInput {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// Free-text reason for the request.
    pub reason: String,
}
