//! Withholding calculation stages.
//!
//! The pipeline is plain function composition with no I/O or shared
//! mutable state: resolve the tax year table, compute period gross pay,
//! compute federal/FICA/state withholding against it, and aggregate
//! across the annual cycle carrying YTD gross forward.

pub mod common;
pub mod federal;
pub mod fica;
pub mod gross_pay;
pub mod state;
pub mod totals;
pub mod validate;

pub use federal::compute_federal_tax;
pub use fica::{FicaWithholding, compute_fica};
pub use gross_pay::compute_gross_pay;
pub use state::compute_state_tax;
pub use totals::calculate_paystub;
pub use validate::{ValidationError, validate_paystub_inputs};
