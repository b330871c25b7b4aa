//! Store-backed workflows for the Leave and Bonus Engine.
//!
//! These functions orchestrate the pure calculators in
//! [`crate::calculation`] against an injected [`crate::store::LeaveStore`]:
//! the monthly accrual check and the leave request create/review lifecycle.

mod accrual;
mod requests;

pub use accrual::check_and_process_accrual;
pub use requests::{
    ReviewDecision, create_leave_request, has_sufficient_balance, review_leave_request,
};
