//! Calculation logic for the Leave and Bonus Engine.
//!
//! This module contains the pure calculators: business-day counting for
//! leave request validation, the monthly accrual arithmetic, and the
//! target-hours bonus and progress calculations. Nothing here touches the
//! store; the workflows in [`crate::lifecycle`] compose these functions
//! with persistence.

mod accrual;
mod bonus;
mod business_days;

pub use accrual::{
    DEFAULT_MONTHLY_ACCRUAL_RATE, INITIAL_BALANCE_DAYS, accrual_due, apply_accrual,
    next_accrual_date,
};
pub use bonus::{calculate_bonus, progress_percent};
pub use business_days::{count_business_days, is_business_day};
