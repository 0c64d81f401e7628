//! Calculation logic for the salary rate engine.
//!
//! This module contains the calendar arithmetic used to locate accrual windows,
//! the currency rounding rule, and the [`SalaryRateEngine`] that prorates a
//! daily or monthly salary up to a reference date.

mod accrual_window;
mod calendar;
mod rounding;
mod salary_rate;

pub use accrual_window::{
    AccrualWindow, AccrualWindowResult, MISSING_ANCHOR_DAY_MESSAGE, resolve_accrual_window,
    window_start,
};
pub use calendar::{
    anchor_date, calendar_day_difference, days_in_month, days_in_month_of, first_of_month,
    previous_month,
};
pub use rounding::{CURRENCY_SCALE, round_currency};
pub use salary_rate::{DEFAULT_PAYMENT_DATE_INCLUSION, SalaryRateEngine, compute_accrual};
