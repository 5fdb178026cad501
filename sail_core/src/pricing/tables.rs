//! Price Table Lookups
//!
//! Base fabric costs are tabulated against perimeter at 0.5 m steps from
//! 9.0 m to 50.0 m, one table per (edge type, fabric). Lookups take the
//! row with the closest perimeter; anything outside the table lands on the
//! nearest end row instead of extrapolating.
//!
//! Corner and hardware costs are flat per corner count (3 to 6).
//!
//! All amounts are in the price-table currency (NZD) before markup.

use crate::errors::{SailError, SailResult};
use crate::generated::price_table_data;
use crate::materials::{EdgeType, Fabric};
use crate::measurements::CornerCount;

/// Row with the perimeter closest to `perimeter_m`; ties go to the shorter row.
pub fn nearest_row(rows: &[(f64, f64)], perimeter_m: f64) -> Option<(f64, f64)> {
    rows.iter()
        .copied()
        .min_by(|(a, _), (b, _)| (a - perimeter_m).abs().total_cmp(&(b - perimeter_m).abs()))
}

/// Rows of the fabric table for an edge/fabric pair.
pub fn fabric_rows(edge: EdgeType, fabric: Fabric) -> SailResult<&'static [(f64, f64)]> {
    price_table_data::fabric_rows(edge.code(), fabric.code())
        .ok_or_else(|| SailError::unknown_option("price table", format!("{}/{}", edge.code(), fabric.code())))
}

/// Base fabric cost for an adjusted perimeter.
pub fn fabric_cost(edge: EdgeType, fabric: Fabric, adjusted_perimeter_m: f64) -> SailResult<f64> {
    let rows = fabric_rows(edge, fabric)?;
    nearest_row(rows, adjusted_perimeter_m)
        .map(|(_, cost)| cost)
        .ok_or_else(|| SailError::unknown_option("price table", format!("{}/{}", edge.code(), fabric.code())))
}

/// Cost of finishing the sail's corners.
pub fn corner_cost(edge: EdgeType, corners: CornerCount) -> SailResult<f64> {
    price_table_data::corner_costs(edge.code())
        .map(|costs| costs[corner_index(corners)])
        .ok_or_else(|| SailError::unknown_option("corner cost table", edge.code()))
}

/// Cost of the tensioning hardware kit.
pub fn hardware_cost(edge: EdgeType, corners: CornerCount) -> SailResult<f64> {
    price_table_data::hardware_costs(edge.code())
        .map(|costs| costs[corner_index(corners)])
        .ok_or_else(|| SailError::unknown_option("hardware cost table", edge.code()))
}

fn corner_index(corners: CornerCount) -> usize {
    corners.count() as usize - 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combination_has_a_table() {
        for edge in EdgeType::ALL {
            for fabric in Fabric::ALL {
                let rows = fabric_rows(edge, fabric).unwrap();
                // 9.0 to 50.0 inclusive at 0.5 m
                assert_eq!(rows.len(), 83);
                assert_eq!(rows[0].0, 9.0);
                assert_eq!(rows[rows.len() - 1].0, 50.0);
            }
            for corners in CornerCount::ALL {
                assert!(corner_cost(edge, corners).unwrap() > 0.0);
                assert!(hardware_cost(edge, corners).unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_tables_increase_with_perimeter() {
        for edge in EdgeType::ALL {
            for fabric in Fabric::ALL {
                let rows = fabric_rows(edge, fabric).unwrap();
                assert!(rows.windows(2).all(|w| w[1].1 > w[0].1));
            }
        }
    }

    #[test]
    fn test_nearest_row() {
        let rows = [(9.0, 100.0), (9.5, 110.0), (10.0, 120.0)];
        assert_eq!(nearest_row(&rows, 9.5), Some((9.5, 110.0)));
        assert_eq!(nearest_row(&rows, 9.6), Some((9.5, 110.0)));
        // Equidistant: the shorter row wins
        assert_eq!(nearest_row(&rows, 9.75), Some((9.5, 110.0)));
        assert_eq!(nearest_row(&[], 9.5), None);
    }

    #[test]
    fn test_out_of_range_clamps_to_boundary() {
        let rows = fabric_rows(EdgeType::Webbing, Fabric::Monotec370).unwrap();
        let first = rows[0].1;
        let last = rows[rows.len() - 1].1;
        assert_eq!(fabric_cost(EdgeType::Webbing, Fabric::Monotec370, 3.0).unwrap(), first);
        assert_eq!(fabric_cost(EdgeType::Webbing, Fabric::Monotec370, 80.0).unwrap(), last);
    }

    #[test]
    fn test_corner_costs_grow_with_corners() {
        let three = corner_cost(EdgeType::Cabled, CornerCount::Three).unwrap();
        let six = corner_cost(EdgeType::Cabled, CornerCount::Six).unwrap();
        assert!(six > three);
    }
}
