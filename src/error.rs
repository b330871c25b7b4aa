//! Error types for the Leave and Bonus Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all conditions the engine can reject. Errors are returned as values,
//! never panicked across the component boundary, so UI callers can render
//! the message inline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::RequestStatus;
use crate::store::StoreError;

/// The main error type for the Leave and Bonus Engine.
///
/// # Example
///
/// ```
/// use cleantrack_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// };
/// assert!(error.to_string().starts_with("End date must be after start date"));
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested leave range ends before it starts.
    #[error("End date must be after start date ({start} to {end})")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The requested range contains no business days (weekend-only range).
    #[error("You must select at least one business day")]
    NoBusinessDays,

    /// No leave request exists with the given id.
    #[error("Leave request not found: {id}")]
    RequestNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The request has already been reviewed; approve/reject is terminal.
    #[error("Leave request {id} has already been {status}")]
    AlreadyReviewed {
        /// The id of the request.
        id: Uuid,
        /// The status the request already holds.
        status: RequestStatus,
    },

    /// The user's leave balance cannot cover the requested days.
    #[error(
        "User does not have sufficient leave balance (available {available}, requested {requested})"
    )]
    InsufficientBalance {
        /// Days currently available.
        available: Decimal,
        /// Days the request would deduct.
        requested: Decimal,
    },

    /// The persistence collaborator failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// A type alias for Results that return [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
