//! # sail_core - Shade Sail Measurement and Pricing Engine
//!
//! `sail_core` takes the edge and diagonal measurements of a custom shade
//! sail, checks them for typos and geometric impossibilities, computes the
//! sail's area, and prices it in the customer's currency. All inputs and
//! outputs are JSON-serializable so a UI or order system can drive it
//! directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; recompute on every change
//! - **Millimeters inside**: Imperial is a display concern only
//! - **Validation as values**: Errors and typo suggestions are returned, never thrown
//! - **Tables as data**: Price tables are compiled from `data/price_tables.toml`
//!
//! ## Quick Start
//!
//! ```rust
//! use sail_core::{compute_shade_calculation, CornerCount, ShadeConfig};
//!
//! let mut config = ShadeConfig::new(CornerCount::Three);
//! config.measurements.set_length("AB", 5000.0).unwrap();
//! config.measurements.set_length("BC", 4000.0).unwrap();
//! config.measurements.set_length("CA", 3000.0).unwrap();
//!
//! let result = compute_shade_calculation(&config);
//! assert!((result.area_m2 - 6.0).abs() < 1e-9);
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`measurements`] - Measurement sets, typo detection and field validation
//! - [`geometry`] - Triangle checks and fan-triangulated polygon area
//! - [`materials`] - Fabrics and edge constructions
//! - [`pricing`] - Price tables, currencies and weight estimates
//! - [`calculations`] - The shade calculation entry point
//! - [`quote`] - Configuration/result snapshots for persistence
//! - [`units`] - Type-safe unit wrappers and formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
mod generated;
pub mod geometry;
pub mod materials;
pub mod measurements;
pub mod pricing;
pub mod quote;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_shade_calculation, CalculationResult, ShadeConfig};
pub use errors::{SailError, SailResult};
pub use geometry::{polygon_area, triangle_area, validate_polygon, validate_triangle};
pub use measurements::{
    detect_typo, diagonal_keys_for, edge_keys_for, validate_measurement_field, CornerCount, FieldClass,
    MeasurementSet,
};
pub use quote::{Quote, QuoteMetadata};
pub use units::{format_area, format_length, UnitSystem};
