//! # Geometry
//!
//! Decides whether a measured sail can physically exist and how much fabric
//! it covers.
//!
//! - [`triangle`] - Heron's area and triangle-inequality checks
//! - [`polygon`] - fan triangulation from corner A, polygon validation and area
//!
//! ## Example
//!
//! ```rust
//! use sail_core::geometry::{polygon_area, validate_polygon};
//! use sail_core::measurements::{CornerCount, MeasurementSet};
//!
//! let set = MeasurementSet::with_lengths(
//!     CornerCount::Three,
//!     &[("AB", 3000.0), ("BC", 4000.0), ("CA", 5000.0)],
//! ).unwrap();
//!
//! assert!(validate_polygon(&set).is_ok());
//! assert_eq!(polygon_area(&set), 6.0);
//! ```

pub mod polygon;
pub mod triangle;

pub use polygon::{polygon_area, polygon_area_mm2, triangulation_wedges, validate_polygon, Wedge};
pub use triangle::{triangle_area, validate_triangle, validate_triangle_sides, TriangleViolation};
