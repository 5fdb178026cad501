//! Polygon validation and area by fan triangulation from corner A.
//!
//! The fan is a fixed table per corner count, not a general triangulator:
//!
//! ```text
//! 3 corners: ABC
//! 4 corners: ABC ACD          (diagonal AC)
//! 5 corners: ABC ACD ADE      (diagonals AC, AD)
//! 6 corners: ABC ACD ADE AEF  (diagonals AC, AD, AE)
//! ```
//!
//! Wedges whose three lengths are not all entered yet are skipped: they
//! raise no error and contribute no area.

use serde::Serialize;

use super::triangle::{triangle_area, validate_triangle_sides};
use crate::errors::SailError;
use crate::measurements::{CornerCount, MeasurementSet};
use crate::units::{SqM, SqMm};

/// One triangle of the fan, named by its corners, with the keys of its sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wedge {
    pub name: &'static str,
    pub sides: [&'static str; 3],
}

const ABC: Wedge = Wedge { name: "ABC", sides: ["AB", "BC", "AC"] };
const ACD: Wedge = Wedge { name: "ACD", sides: ["AC", "CD", "AD"] };
const ADE: Wedge = Wedge { name: "ADE", sides: ["AD", "DE", "AE"] };
const AEF: Wedge = Wedge { name: "AEF", sides: ["AE", "EF", "AF"] };

// The closing side of the last wedge is an edge; keys resolve in either order.
static FAN_3: [Wedge; 1] = [Wedge { name: "ABC", sides: ["AB", "BC", "CA"] }];
static FAN_4: [Wedge; 2] = [ABC, ACD];
static FAN_5: [Wedge; 3] = [ABC, ACD, ADE];
static FAN_6: [Wedge; 4] = [ABC, ACD, ADE, AEF];

/// The N-2 wedges of the fan triangulation for a shape.
pub fn triangulation_wedges(corners: CornerCount) -> &'static [Wedge] {
    match corners {
        CornerCount::Three => &FAN_3,
        CornerCount::Four => &FAN_4,
        CornerCount::Five => &FAN_5,
        CornerCount::Six => &FAN_6,
    }
}

/// Side lengths of a wedge, if all three have been entered.
fn wedge_lengths(set: &MeasurementSet, wedge: &Wedge) -> Option<[f64; 3]> {
    let [s1, s2, s3] = wedge.sides;
    Some([set.length(s1)?, set.length(s2)?, set.length(s3)?])
}

/// Check every fully-measured wedge for the triangle inequality.
///
/// Returns all wedge-level violations, not just the first.
pub fn validate_polygon(set: &MeasurementSet) -> Result<(), Vec<SailError>> {
    let errors: Vec<SailError> = triangulation_wedges(set.corners())
        .iter()
        .filter_map(|wedge| {
            let [a, b, c] = wedge_lengths(set, wedge)?;
            let [s1, s2, s3] = wedge.sides;
            validate_triangle_sides([(s1, a), (s2, b), (s3, c)])
                .err()
                .map(|violation| {
                    SailError::geometry_violation(wedge.name, violation.to_string(), violation.shortfall_mm())
                })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Area of all fully-measured wedges, in mm².
pub fn polygon_area_mm2(set: &MeasurementSet) -> f64 {
    triangulation_wedges(set.corners())
        .iter()
        .filter_map(|wedge| wedge_lengths(set, wedge))
        .map(|[a, b, c]| triangle_area(a, b, c))
        .sum()
}

/// Area of all fully-measured wedges, in m².
///
/// An under-estimate while diagonals are still missing.
pub fn polygon_area(set: &MeasurementSet) -> f64 {
    SqM::from(SqMm(polygon_area_mm2(set))).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_4m() -> MeasurementSet {
        MeasurementSet::with_lengths(
            CornerCount::Four,
            &[
                ("AB", 4000.0),
                ("BC", 4000.0),
                ("CD", 4000.0),
                ("DA", 4000.0),
                ("AC", 5657.0),
                ("BD", 5657.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_wedge_count() {
        for corners in CornerCount::ALL {
            assert_eq!(triangulation_wedges(corners).len(), corners.count() as usize - 2);
        }
    }

    #[test]
    fn test_wedge_sides_are_known_keys() {
        for corners in CornerCount::ALL {
            let set = MeasurementSet::new(corners);
            for wedge in triangulation_wedges(corners) {
                for side in wedge.sides {
                    assert!(set.canonical_key(side).is_ok(), "{} not valid for {}", side, corners);
                }
            }
        }
    }

    #[test]
    fn test_square_area() {
        let area = polygon_area(&square_4m());
        assert!((area - 16.0).abs() < 0.1);
        assert!(validate_polygon(&square_4m()).is_ok());
    }

    #[test]
    fn test_triangle_area_m2() {
        let set = MeasurementSet::with_lengths(
            CornerCount::Three,
            &[("AB", 3000.0), ("BC", 4000.0), ("CA", 5000.0)],
        )
        .unwrap();
        assert_eq!(polygon_area_mm2(&set), 6_000_000.0);
        assert_eq!(polygon_area(&set), 6.0);
    }

    #[test]
    fn test_missing_diagonal_gives_partial_area() {
        let set = MeasurementSet::with_lengths(
            CornerCount::Four,
            &[("AB", 4000.0), ("BC", 4000.0), ("CD", 4000.0), ("DA", 4000.0)],
        )
        .unwrap();
        assert_eq!(polygon_area(&set), 0.0);
        // Wedges without data are not errors
        assert!(validate_polygon(&set).is_ok());
    }

    #[test]
    fn test_hexagon_area() {
        // Regular hexagon, side 3 m: short diagonals 3*sqrt(3), long diagonal 6 m
        let s = 3000.0;
        let short = s * 3.0_f64.sqrt();
        let set = MeasurementSet::with_lengths(
            CornerCount::Six,
            &[
                ("AB", s),
                ("BC", s),
                ("CD", s),
                ("DE", s),
                ("EF", s),
                ("FA", s),
                ("AC", short),
                ("AD", 2.0 * s),
                ("AE", short),
            ],
        )
        .unwrap();
        let expected = 3.0 * 3.0_f64.sqrt() / 2.0 * 9.0;
        assert!((polygon_area(&set) - expected).abs() < 0.01);
    }

    #[test]
    fn test_all_violations_reported() {
        let set = MeasurementSet::with_lengths(
            CornerCount::Five,
            &[
                ("AB", 2000.0),
                ("BC", 2000.0),
                ("AC", 9000.0),
                ("CD", 2000.0),
                ("AD", 3000.0),
                ("DE", 1000.0),
                ("EA", 1000.0),
            ],
        )
        .unwrap();
        let errors = validate_polygon(&set).unwrap_err();
        // ABC fails (2000 + 2000 <= 9000), ACD fails (2000 + 3000 <= 9000), ADE fails (1000 + 1000 <= 3000)
        assert_eq!(errors.len(), 3);
        match &errors[0] {
            SailError::GeometryViolation { wedge, shortfall_mm, .. } => {
                assert_eq!(wedge, "ABC");
                assert_eq!(*shortfall_mm, 5000.0);
            }
            other => panic!("unexpected error {:?}", other),
        }
        // Invalid wedges contribute no area
        assert_eq!(polygon_area(&set), 0.0);
    }
}
