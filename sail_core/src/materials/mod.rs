//! # Materials
//!
//! Fabrics and edge constructions a sail can be ordered with.
//!
//! - [`fabric`] - the three sail fabrics and their areal weights
//! - [`edge`] - webbing vs cabled edges, reinforcement weights and sizes
//!
//! ## Example
//!
//! ```rust
//! use sail_core::materials::{wire_thickness_mm, EdgeType, Fabric};
//!
//! let fabric = Fabric::from_str_flexible("Monotec 370").unwrap();
//! assert_eq!(fabric.weight_g_per_m2(), 370.0);
//!
//! // Long cabled sails need heavier wire
//! assert_eq!(wire_thickness_mm(EdgeType::Cabled, 36.0), Some(5.0));
//! ```

pub mod edge;
pub mod fabric;

pub use edge::{webbing_width_mm, wire_thickness_mm, EdgeType};
pub use fabric::Fabric;
