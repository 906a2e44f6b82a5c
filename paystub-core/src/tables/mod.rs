//! Static, versioned withholding reference data.
//!
//! Everything here is read-only after first use; concurrent calculations
//! share these tables without synchronization.

pub mod federal;
pub mod state;

pub use federal::{BASELINE_YEAR, resolve, supported_years};
pub use state::{StateBrackets, StatePolicy, policy_for, supported_states};
