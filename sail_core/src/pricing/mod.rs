//! # Pricing Engine
//!
//! Turns a sail's perimeter and construction choices into a customer price
//! and a shipping weight.
//!
//! ## Price Pipeline
//!
//! ```text
//! perimeter (mm, edges only)
//!   -> metres, rounded to nearest 0.5 m       (adjusted perimeter)
//!   -> fabric cost    [edge, fabric]          nearest table row
//!   +  corner cost    [edge, corners]
//!   +  hardware cost  [edge, corners]         adjust option only
//!   x  BASE_MARKUP
//!   x  currency market markup
//!   x  exchange rate (NZD -> currency)
//!   -> ceil to whole currency units
//! ```
//!
//! Rounding up means the merchant never undercharges by a fraction.
//!
//! ## Example
//!
//! ```rust
//! use sail_core::materials::{EdgeType, Fabric};
//! use sail_core::measurements::CornerCount;
//! use sail_core::pricing::{price_sail, Currency, ManufacturingOption, PriceInput};
//!
//! let input = PriceInput {
//!     perimeter_mm: 16_000.0,
//!     fabric: Fabric::Monotec370,
//!     edge: EdgeType::Webbing,
//!     option: ManufacturingOption::Adjust,
//!     corners: CornerCount::Four,
//!     currency: Currency::Nzd,
//! };
//! let price = price_sail(&input).unwrap();
//! assert_eq!(price.adjusted_perimeter_m, 16.0);
//! assert!(price.total_price as f64 >= price.unrounded_price);
//! ```

pub mod currency;
pub mod tables;

pub use currency::Currency;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SailError, SailResult};
use crate::materials::{EdgeType, Fabric};
use crate::measurements::CornerCount;
use crate::units::{Meters, Millimeters};

/// Uniform markup applied to the summed manufacturing cost
pub const BASE_MARKUP: f64 = 1.6;

/// Per-corner shipping allowance for corner plates and rings, grams
pub const CORNER_FITTING_G: f64 = 200.0;

/// Additional per-corner allowance for tensioning hardware, grams
pub const TENSIONING_HARDWARE_G: f64 = 380.0;

/// How the sail is sized during manufacture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManufacturingOption {
    /// Built undersize for on-site tensioning; hardware included
    #[default]
    Adjust,
    /// Built to the stated dimensions; customer supplies hardware
    Exact,
}

impl ManufacturingOption {
    pub const ALL: [ManufacturingOption; 2] = [ManufacturingOption::Adjust, ManufacturingOption::Exact];

    pub fn code(&self) -> &'static str {
        match self {
            ManufacturingOption::Adjust => "adjust",
            ManufacturingOption::Exact => "exact",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> SailResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "adjust" | "adjusted" | "tension" => Ok(ManufacturingOption::Adjust),
            "exact" | "as-measured" => Ok(ManufacturingOption::Exact),
            _ => Err(SailError::unknown_option("manufacturing option", s)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ManufacturingOption::Adjust => "Adjust for tensioning (hardware included)",
            ManufacturingOption::Exact => "Exact size (no hardware)",
        }
    }

    /// Whether the tensioning hardware kit ships with the sail
    pub fn includes_hardware(&self) -> bool {
        matches!(self, ManufacturingOption::Adjust)
    }
}

impl fmt::Display for ManufacturingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Inputs to the price pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    /// Sum of edge lengths in mm (never diagonals)
    pub perimeter_mm: f64,
    pub fabric: Fabric,
    pub edge: EdgeType,
    pub option: ManufacturingOption,
    pub corners: CornerCount,
    pub currency: Currency,
}

/// Priced sail. Component costs are in NZD before markup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Perimeter rounded to the nearest 0.5 m, used as the table key
    pub adjusted_perimeter_m: f64,
    pub fabric_cost: f64,
    /// Edge finishing is folded into the fabric table
    pub edge_cost: f64,
    pub corner_cost: f64,
    /// Zero for the exact option
    pub hardware_cost: f64,
    /// fabric + edge + corner + hardware
    pub base_cost: f64,
    /// Final price before rounding, in `currency`
    pub unrounded_price: f64,
    /// Final price rounded up to a whole unit of `currency`
    pub total_price: u64,
    pub currency: Currency,
}

/// Round a perimeter in mm to the nearest half metre.
pub fn adjusted_perimeter_m(perimeter_mm: f64) -> f64 {
    let metres = Meters::from(Millimeters(perimeter_mm)).0;
    (metres * 2.0).round() / 2.0
}

/// Run the full price pipeline.
pub fn price_sail(input: &PriceInput) -> SailResult<PriceBreakdown> {
    if !input.perimeter_mm.is_finite() || input.perimeter_mm <= 0.0 {
        return Err(SailError::invalid_input(
            "perimeter_mm",
            input.perimeter_mm.to_string(),
            "Perimeter must be positive",
        ));
    }

    let adjusted = adjusted_perimeter_m(input.perimeter_mm);
    let fabric_cost = tables::fabric_cost(input.edge, input.fabric, adjusted)?;
    let corner_cost = tables::corner_cost(input.edge, input.corners)?;
    let hardware_cost = if input.option.includes_hardware() {
        tables::hardware_cost(input.edge, input.corners)?
    } else {
        0.0
    };
    let edge_cost = 0.0;

    let base_cost = fabric_cost + edge_cost + corner_cost + hardware_cost;
    let unrounded_price =
        base_cost * BASE_MARKUP * input.currency.market_markup() * input.currency.exchange_rate();
    let total_price = unrounded_price.ceil() as u64;

    debug!(
        adjusted_perimeter_m = adjusted,
        fabric = input.fabric.code(),
        edge = input.edge.code(),
        base_cost,
        currency = input.currency.code(),
        total_price,
        "priced sail"
    );

    Ok(PriceBreakdown {
        adjusted_perimeter_m: adjusted,
        fabric_cost,
        edge_cost,
        corner_cost,
        hardware_cost,
        base_cost,
        unrounded_price,
        total_price,
        currency: input.currency,
    })
}

/// Estimated shipping weight in whole grams.
///
/// Fabric weight scales with area; each corner carries a fitting allowance
/// plus, for the adjust option, a hardware allowance; the edge reinforcement
/// is charged per whole metre of perimeter.
pub fn estimate_weight_grams(
    area_m2: f64,
    perimeter_mm: f64,
    fabric: Fabric,
    edge: EdgeType,
    option: ManufacturingOption,
    corners: CornerCount,
) -> f64 {
    let corner_count = f64::from(corners.count());
    let fabric_g = fabric.weight_g_per_m2() * area_m2.max(0.0);
    let mut hardware_g = corner_count * CORNER_FITTING_G;
    if option.includes_hardware() {
        hardware_g += corner_count * TENSIONING_HARDWARE_G;
    }
    let perimeter_m = Meters::from(Millimeters(perimeter_mm)).0.round();
    let edge_g = perimeter_m * edge.reinforcement_g_per_m();

    (fabric_g + hardware_g + edge_g).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(perimeter_mm: f64) -> PriceInput {
        PriceInput {
            perimeter_mm,
            fabric: Fabric::Monotec370,
            edge: EdgeType::Webbing,
            option: ManufacturingOption::Adjust,
            corners: CornerCount::Four,
            currency: Currency::Nzd,
        }
    }

    #[test]
    fn test_option_display() {
        assert_eq!(ManufacturingOption::Exact.to_string(), "exact");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(ManufacturingOption::from_str_flexible(" Adjusted ").unwrap(), ManufacturingOption::Adjust);
    }

    #[test]
    fn test_adjusted_perimeter() {
        assert_eq!(adjusted_perimeter_m(16_000.0), 16.0);
        assert_eq!(adjusted_perimeter_m(16_240.0), 16.0);
        assert_eq!(adjusted_perimeter_m(16_260.0), 16.5);
        assert_eq!(adjusted_perimeter_m(16_800.0), 17.0);
    }

    #[test]
    fn test_price_moves_in_steps() {
        let a = price_sail(&input(16_010.0)).unwrap();
        let b = price_sail(&input(16_200.0)).unwrap();
        assert_eq!(a.total_price, b.total_price);
    }

    #[test]
    fn test_nzd_price_matches_tables() {
        let price = price_sail(&input(16_000.0)).unwrap();
        let fabric = tables::fabric_cost(EdgeType::Webbing, Fabric::Monotec370, 16.0).unwrap();
        let corner = tables::corner_cost(EdgeType::Webbing, CornerCount::Four).unwrap();
        let hardware = tables::hardware_cost(EdgeType::Webbing, CornerCount::Four).unwrap();

        assert_eq!(price.fabric_cost, fabric);
        assert_eq!(price.edge_cost, 0.0);
        assert_eq!(price.base_cost, fabric + corner + hardware);
        let expected = (fabric + corner + hardware) * BASE_MARKUP;
        assert!((price.unrounded_price - expected).abs() < 1e-9);
        assert_eq!(price.total_price, expected.ceil() as u64);
    }

    #[test]
    fn test_exact_option_has_no_hardware() {
        let mut exact = input(16_000.0);
        exact.option = ManufacturingOption::Exact;
        let exact_price = price_sail(&exact).unwrap();
        let adjust_price = price_sail(&input(16_000.0)).unwrap();

        assert_eq!(exact_price.hardware_cost, 0.0);
        assert!(adjust_price.hardware_cost > 0.0);
        assert!(adjust_price.total_price > exact_price.total_price);
    }

    #[test]
    fn test_ceiling_rounding_all_currencies() {
        for currency in Currency::ALL {
            let mut priced = input(23_700.0);
            priced.currency = currency;
            let price = price_sail(&priced).unwrap();
            assert!(price.total_price as f64 >= price.unrounded_price);
            assert!(price.total_price as f64 - price.unrounded_price < 1.0);
        }
    }

    #[test]
    fn test_cabled_costs_more_than_webbing() {
        let webbing = price_sail(&input(20_000.0)).unwrap();
        let mut cabled_input = input(20_000.0);
        cabled_input.edge = EdgeType::Cabled;
        let cabled = price_sail(&cabled_input).unwrap();
        assert!(cabled.total_price > webbing.total_price);
    }

    #[test]
    fn test_zero_perimeter_rejected() {
        assert!(price_sail(&input(0.0)).is_err());
        assert!(price_sail(&input(f64::NAN)).is_err());
    }

    #[test]
    fn test_weight_components() {
        // 16 m2 Monotec, 16 m webbing edge, 4 corners, adjust
        let weight = estimate_weight_grams(
            16.0,
            16_000.0,
            Fabric::Monotec370,
            EdgeType::Webbing,
            ManufacturingOption::Adjust,
            CornerCount::Four,
        );
        let expected = 370.0 * 16.0 + 4.0 * (200.0 + 380.0) + 16.0 * 100.0;
        assert_eq!(weight, expected);
    }

    #[test]
    fn test_weight_exact_option_lighter() {
        let weigh = |option| {
            estimate_weight_grams(
                12.0,
                14_300.0,
                Fabric::Z16,
                EdgeType::Cabled,
                option,
                CornerCount::Three,
            )
        };
        assert_eq!(
            weigh(ManufacturingOption::Adjust) - weigh(ManufacturingOption::Exact),
            3.0 * TENSIONING_HARDWARE_G
        );
        // 14.3 m rounds to 14 m of cable pocket
        let expected_exact = 420.0 * 12.0 + 3.0 * 200.0 + 14.0 * 140.0;
        assert_eq!(weigh(ManufacturingOption::Exact), expected_exact);
    }
}
