//! HTTP API module for the Leave and Bonus Engine.
//!
//! This module provides the REST endpoints the CleanTrack UI calls for
//! leave requests, balances, and bonus previews.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BonusPreviewRequest, CreateLeaveRequest, ReviewLeaveRequest};
pub use response::ApiError;
pub use state::AppState;
