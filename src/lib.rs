//! Leave and Bonus Engine for the CleanTrack workforce application.
//!
//! This crate implements the business rules behind staff leave management
//! (monthly accrual, request validation, the approve/reject lifecycle) and
//! target-hours bonus calculation. Persistence is an injected
//! [`store::LeaveStore`] collaborator; an in-memory implementation is
//! provided for tests and for the bundled HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod store;
