//! Stateless paystub withholding calculation engine.
//!
//! Given an hourly rate, hours, filing status, state, tax year, and pay
//! frequency, computes per-period and annual gross pay, federal income
//! tax, Social Security, Medicare (with the additional surtax), state
//! income tax, extra deductions, and net pay. All reference data ships
//! as static in-memory tables; there is no I/O anywhere in this crate.

pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{ValidationError, calculate_paystub, validate_paystub_inputs};
pub use models::*;
