//! # Shade Calculations
//!
//! The single entry point that turns a configuration into a priced,
//! weighed sail:
//!
//! - [`ShadeConfig`] - everything the customer has chosen and measured
//! - [`CalculationResult`] - area, perimeter, costs, price, sizes and weight
//! - [`compute_shade_calculation`] - pure function from one to the other
//!
//! The result is never cached or mutated; callers re-run the calculation on
//! every configuration change and use the latest return value.

pub mod shade;

pub use shade::{compute_shade_calculation, CalculationResult, ShadeConfig};
