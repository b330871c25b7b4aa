//! Request types for the Leave and Bonus Engine API.
//!
//! This module defines the JSON request structures for the leave and bonus
//! endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use crate::lifecycle::ReviewDecision;
use crate::models::{LeaveRequestInput, LeaveType};

/// Request body for `POST /leave/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    /// The user requesting leave.
    pub user_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// Free-text reason for the request.
    #[serde(default)]
    pub reason: String,
}

impl From<CreateLeaveRequest> for LeaveRequestInput {
    fn from(body: CreateLeaveRequest) -> Self {
        LeaveRequestInput {
            start_date: body.start_date,
            end_date: body.end_date,
            leave_type: body.leave_type,
            reason: body.reason,
        }
    }
}

/// Request body for `POST /leave/requests/{id}/review`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLeaveRequest {
    /// The reviewer applying the decision.
    pub reviewer_id: String,
    /// The terminal status to apply.
    pub status: ReviewDecision,
    /// Notes to attach to the decision.
    #[serde(default)]
    pub review_notes: Option<String>,
}

/// Request body for `POST /bonus/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusPreviewRequest {
    /// The staff member the formula applies to.
    pub user_id: String,
    /// Bonus paid per hour worked beyond the threshold.
    pub amount_per_hour: Decimal,
    /// Target hours for the period.
    pub hours_threshold: Decimal,
    /// Aggregated hours worked in the period.
    pub hours_worked: Decimal,
}
