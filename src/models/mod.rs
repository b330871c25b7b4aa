//! Core data models for the Leave and Bonus Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bonus;
mod leave_balance;
mod leave_request;
mod notification;

pub use bonus::{BonusFormula, BonusSummary, TargetStatus};
pub use leave_balance::LeaveBalance;
pub use leave_request::{LeaveRequest, LeaveRequestInput, LeaveType, RequestStatus};
pub use notification::Notification;
