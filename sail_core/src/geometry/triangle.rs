//! Triangle area and constructibility.
//!
//! Both functions treat lengths in mm and never return NaN or a negative
//! area, whatever they are given.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why three lengths cannot close into a triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriangleViolation {
    /// A side is zero, negative or not a number
    NonPositiveSide { side: String, length_mm: f64 },
    /// The two shorter sides do not reach past the longest
    Inequality {
        short_sides: (String, String),
        long_side: String,
        sum_mm: f64,
        long_mm: f64,
    },
}

impl TriangleViolation {
    /// How much longer the short sides would need to be, in mm.
    pub fn shortfall_mm(&self) -> f64 {
        match self {
            TriangleViolation::NonPositiveSide { length_mm, .. } => length_mm.abs(),
            TriangleViolation::Inequality { sum_mm, long_mm, .. } => long_mm - sum_mm,
        }
    }
}

impl fmt::Display for TriangleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangleViolation::NonPositiveSide { side, length_mm } => {
                write!(f, "{} must be longer than zero (got {} mm)", side, length_mm)
            }
            TriangleViolation::Inequality {
                short_sides: (s1, s2),
                long_side,
                sum_mm,
                long_mm,
            } => write!(
                f,
                "{} + {} = {:.0} mm must be longer than {} = {:.0} mm (short by {:.0} mm)",
                s1,
                s2,
                sum_mm,
                long_side,
                long_mm,
                long_mm - sum_mm
            ),
        }
    }
}

/// Area of a triangle from its side lengths (Heron's formula), in mm².
///
/// Returns 0 when any side is non-positive, the triangle inequality fails,
/// or rounding drives the radicand negative.
///
/// ```rust
/// use sail_core::geometry::triangle_area;
///
/// assert_eq!(triangle_area(3000.0, 4000.0, 5000.0), 6_000_000.0);
/// assert_eq!(triangle_area(1000.0, 1000.0, 3000.0), 0.0);
/// ```
pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
    if validate_triangle(a, b, c).is_err() {
        return 0.0;
    }

    // Heron's formula with sides sorted a >= b >= c for numerical stability
    let mut sides = [a, b, c];
    sides.sort_by(|x, y| y.total_cmp(x));
    let [a, b, c] = sides;
    let radicand = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
    if radicand.is_nan() || radicand <= 0.0 {
        return 0.0;
    }
    0.25 * radicand.sqrt()
}

/// Check whether three lengths form a triangle.
pub fn validate_triangle(a: f64, b: f64, c: f64) -> Result<(), TriangleViolation> {
    validate_triangle_sides([("a", a), ("b", b), ("c", c)])
}

/// Check whether three named sides form a triangle.
///
/// The first violated inequality (in side order) is reported.
pub fn validate_triangle_sides(sides: [(&str, f64); 3]) -> Result<(), TriangleViolation> {
    for (name, length) in sides {
        if !(length > 0.0) || !length.is_finite() {
            return Err(TriangleViolation::NonPositiveSide {
                side: name.to_string(),
                length_mm: length,
            });
        }
    }

    let [(na, a), (nb, b), (nc, c)] = sides;
    let checks = [((na, nb), a + b, (nc, c)), ((na, nc), a + c, (nb, b)), ((nb, nc), b + c, (na, a))];
    for ((s1, s2), sum, (long_name, long)) in checks {
        if sum <= long {
            return Err(TriangleViolation::Inequality {
                short_sides: (s1.to_string(), s2.to_string()),
                long_side: long_name.to_string(),
                sum_mm: sum,
                long_mm: long,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_triangle_area() {
        assert_eq!(triangle_area(3000.0, 4000.0, 5000.0), 6_000_000.0);
        // Side order must not matter
        assert_eq!(triangle_area(5000.0, 3000.0, 4000.0), 6_000_000.0);
    }

    #[test]
    fn test_equilateral_area() {
        let area = triangle_area(2000.0, 2000.0, 2000.0);
        let expected = 3.0_f64.sqrt() / 4.0 * 2000.0 * 2000.0;
        assert!((area - expected).abs() < 1e-3);
    }

    #[test]
    fn test_inequality_gives_zero_area() {
        for (a, b, c) in [
            (1000.0, 2000.0, 3000.0),
            (1000.0, 3000.0, 2000.0),
            (3000.0, 1000.0, 2000.0),
            (1000.0, 1000.0, 5000.0),
        ] {
            assert_eq!(triangle_area(a, b, c), 0.0);
            assert!(validate_triangle(a, b, c).is_err());
        }
    }

    #[test]
    fn test_non_positive_sides() {
        assert_eq!(triangle_area(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(triangle_area(-1.0, 1000.0, 1000.0), 0.0);
        assert_eq!(triangle_area(f64::NAN, 1000.0, 1000.0), 0.0);
        assert!(matches!(
            validate_triangle(1000.0, 0.0, 1000.0),
            Err(TriangleViolation::NonPositiveSide { .. })
        ));
    }

    #[test]
    fn test_violation_message_and_margin() {
        let err = validate_triangle_sides([("AB", 2000.0), ("BC", 2500.0), ("AC", 5000.0)]).unwrap_err();
        assert_eq!(err.shortfall_mm(), 500.0);
        let message = err.to_string();
        assert!(message.contains("AB + BC"));
        assert!(message.contains("AC = 5000 mm"));
        assert!(message.contains("short by 500 mm"));
    }

    #[test]
    fn test_degenerate_triangle_is_invalid() {
        let err = validate_triangle(1000.0, 2000.0, 3000.0).unwrap_err();
        assert_eq!(err.shortfall_mm(), 0.0);
    }

    #[test]
    fn test_valid_triangle() {
        assert!(validate_triangle(3000.0, 4000.0, 5000.0).is_ok());
    }
}
