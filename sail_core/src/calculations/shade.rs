//! # Shade Sail Calculation
//!
//! ## Pipeline
//!
//! ```text
//! ShadeConfig
//!   -> complete for pricing?  no -> CalculationResult::zero
//!   -> perimeter (edges only) and fan-triangulated area
//!   -> price_sail             (pricing pipeline)
//!   -> estimate_weight_grams
//!   -> wire thickness / webbing width by perimeter
//! ```
//!
//! Geometry errors never stop pricing: the price depends on edges alone,
//! while the area falls back to whatever wedges are measurable. Geometry is
//! enforced at order time by [`ShadeConfig::ready_for_order`].
//!
//! ## Example
//!
//! ```rust
//! use sail_core::calculations::{compute_shade_calculation, ShadeConfig};
//! use sail_core::measurements::CornerCount;
//!
//! let mut config = ShadeConfig::new(CornerCount::Four);
//! for key in ["AB", "BC", "CD", "DA"] {
//!     config.measurements.set_length(key, 4000.0).unwrap();
//! }
//! for key in ["AC", "BD"] {
//!     config.measurements.set_length(key, 5657.0).unwrap();
//! }
//!
//! let result = compute_shade_calculation(&config);
//! assert_eq!(result.perimeter_m, 16.0);
//! assert!((result.area_m2 - 16.0).abs() < 0.1);
//! assert!(result.total_price > 0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::SailError;
use crate::geometry::{polygon_area, validate_polygon};
use crate::materials::{webbing_width_mm, wire_thickness_mm, EdgeType, Fabric};
use crate::measurements::{review_measurements, CornerCount, FieldAssessment, MeasurementSet, TypoThresholds};
use crate::pricing::{estimate_weight_grams, price_sail, Currency, ManufacturingOption, PriceInput};
use crate::units::{format_length, Meters, Millimeters, UnitSystem};

/// Full sail configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "measurements": {
///     "corners": 3,
///     "lengths": { "AB": 5000.0, "BC": 4000.0, "CA": 3000.0 }
///   },
///   "fabric": "z16",
///   "edge_type": "cabled",
///   "unit_system": "metric",
///   "manufacturing": "exact",
///   "currency": "AUD"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadeConfig {
    /// Lengths (and optional anchor heights) in mm; also fixes the corner count
    pub measurements: MeasurementSet,

    #[serde(default)]
    pub fabric: Fabric,

    #[serde(default)]
    pub edge_type: EdgeType,

    /// Display only; storage is always mm
    #[serde(default)]
    pub unit_system: UnitSystem,

    #[serde(default)]
    pub manufacturing: ManufacturingOption,

    #[serde(default)]
    pub currency: Currency,
}

impl ShadeConfig {
    /// Default options with an empty measurement set.
    pub fn new(corners: CornerCount) -> Self {
        ShadeConfig {
            measurements: MeasurementSet::new(corners),
            ..ShadeConfig::default()
        }
    }

    pub fn corners(&self) -> CornerCount {
        self.measurements.corners()
    }

    /// Change the corner count. Always discards every entered measurement,
    /// even when the count is unchanged.
    pub fn set_corners(&mut self, corners: CornerCount) {
        debug!(from = self.corners().count(), to = corners.count(), "resetting measurements");
        self.measurements = MeasurementSet::new(corners);
    }

    /// Check whether the configuration can be submitted as an order.
    ///
    /// Requires every edge and diagonal, a constructible polygon, and no
    /// field that blocks progress (range errors or unacknowledged typo
    /// suggestions). `dismissed` maps field keys to the value at which a
    /// suggestion was dismissed. All problems are returned together.
    pub fn ready_for_order(
        &self,
        thresholds: &TypoThresholds,
        dismissed: &BTreeMap<String, f64>,
    ) -> Result<(), Vec<SailError>> {
        let set = &self.measurements;
        let mut errors = Vec::new();

        let corners = self.corners();
        let missing = corners
            .edge_keys()
            .iter()
            .chain(corners.diagonal_keys())
            .filter(|key| set.length(key).is_none());
        for key in missing {
            errors.push(SailError::invalid_input(*key, "", "Measurement required before ordering"));
        }

        for review in review_measurements(set, self.unit_system, thresholds, dismissed) {
            match review.assessment {
                FieldAssessment::Invalid { error } => errors.push(error),
                FieldAssessment::Suggestion { entered_mm, suggested_mm, .. } => {
                    errors.push(SailError::out_of_range(
                        review.key,
                        format_length(entered_mm, self.unit_system, true),
                        format!(
                            "Confirm or dismiss the suggested {}",
                            format_length(suggested_mm, self.unit_system, true)
                        ),
                    ));
                }
                FieldAssessment::Empty | FieldAssessment::Valid => {}
            }
        }

        if let Err(geometry) = validate_polygon(set) {
            errors.extend(geometry);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(problems = errors.len(), "configuration not ready for order");
            Err(errors)
        }
    }
}

/// Derived figures for a configuration.
///
/// Component costs are in NZD before markup; `unrounded_price` and
/// `total_price` are in `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Fan-triangulated area (m²); partial if diagonals are missing
    pub area_m2: f64,

    /// Sum of edges (m)
    pub perimeter_m: f64,

    /// Perimeter rounded to 0.5 m, the price table key
    pub adjusted_perimeter_m: f64,

    pub fabric_cost: f64,
    pub edge_cost: f64,
    pub corner_cost: f64,
    pub hardware_cost: f64,

    pub unrounded_price: f64,

    /// Price rounded up to a whole currency unit
    pub total_price: u64,

    pub currency: Currency,

    /// Webbing edges only
    pub webbing_width_mm: Option<f64>,

    /// Cabled edges only
    pub wire_thickness_mm: Option<f64>,

    pub total_weight_grams: f64,
}

impl CalculationResult {
    /// The "enter all measurements to see a price" result.
    pub fn zero(currency: Currency) -> Self {
        CalculationResult {
            currency,
            ..CalculationResult::default()
        }
    }

    /// Whether a real price was computed.
    pub fn is_priced(&self) -> bool {
        self.total_price > 0
    }
}

/// Compute area, price, sizes and weight for a configuration.
///
/// Pure and deterministic. An incomplete measurement set yields
/// [`CalculationResult::zero`] rather than a misleadingly low price.
pub fn compute_shade_calculation(config: &ShadeConfig) -> CalculationResult {
    let set = &config.measurements;
    let corners = set.corners();

    if !set.is_complete_for_pricing() {
        debug!(corners = corners.count(), "measurements incomplete, returning zero result");
        return CalculationResult::zero(config.currency);
    }

    let perimeter_mm = set.perimeter_mm();
    let perimeter_m = Meters::from(Millimeters(perimeter_mm)).0;
    let area_m2 = polygon_area(set);

    let input = PriceInput {
        perimeter_mm,
        fabric: config.fabric,
        edge: config.edge_type,
        option: config.manufacturing,
        corners,
        currency: config.currency,
    };
    let price = match price_sail(&input) {
        Ok(price) => price,
        Err(e) => {
            // Tables are compiled in and cover every option, so this means corrupt data
            error!(error = %e, "price lookup failed");
            return CalculationResult::zero(config.currency);
        }
    };

    let total_weight_grams = estimate_weight_grams(
        area_m2,
        perimeter_mm,
        config.fabric,
        config.edge_type,
        config.manufacturing,
        corners,
    );

    let result = CalculationResult {
        area_m2,
        perimeter_m,
        adjusted_perimeter_m: price.adjusted_perimeter_m,
        fabric_cost: price.fabric_cost,
        edge_cost: price.edge_cost,
        corner_cost: price.corner_cost,
        hardware_cost: price.hardware_cost,
        unrounded_price: price.unrounded_price,
        total_price: price.total_price,
        currency: price.currency,
        webbing_width_mm: webbing_width_mm(config.edge_type, perimeter_m),
        wire_thickness_mm: wire_thickness_mm(config.edge_type, perimeter_m),
        total_weight_grams,
    };

    debug!(
        corners = corners.count(),
        area_m2,
        perimeter_m,
        total_price = result.total_price,
        currency = result.currency.code(),
        total_weight_grams,
        "computed shade calculation"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Vertex;

    fn square(side: f64, diagonal: Option<f64>) -> ShadeConfig {
        let mut config = ShadeConfig::new(CornerCount::Four);
        for key in ["AB", "BC", "CD", "DA"] {
            config.measurements.set_length(key, side).unwrap();
        }
        if let Some(d) = diagonal {
            config.measurements.set_length("AC", d).unwrap();
            config.measurements.set_length("BD", d).unwrap();
        }
        config
    }

    #[test]
    fn test_square_scenario() {
        let result = compute_shade_calculation(&square(4000.0, Some(5657.0)));
        assert!((result.area_m2 - 16.0).abs() < 0.1);
        assert_eq!(result.perimeter_m, 16.0);
        assert_eq!(result.adjusted_perimeter_m, 16.0);
        assert!(result.is_priced());
        assert_eq!(result.webbing_width_mm, Some(50.0));
        assert_eq!(result.wire_thickness_mm, None);
    }

    #[test]
    fn test_incomplete_is_zero() {
        let mut config = square(4000.0, Some(5657.0));
        config.measurements.clear_length("CD").unwrap();
        let result = compute_shade_calculation(&config);
        assert_eq!(result, CalculationResult::zero(Currency::Nzd));
        assert!(!result.is_priced());
    }

    #[test]
    fn test_zero_result_keeps_currency() {
        let mut config = ShadeConfig::new(CornerCount::Three);
        config.currency = Currency::Usd;
        let result = compute_shade_calculation(&config);
        assert_eq!(result.currency, Currency::Usd);
        assert_eq!(result.total_price, 0);
    }

    #[test]
    fn test_prices_without_diagonals() {
        let with = compute_shade_calculation(&square(4000.0, Some(5657.0)));
        let without = compute_shade_calculation(&square(4000.0, None));
        assert_eq!(with.total_price, without.total_price);
        assert_eq!(without.area_m2, 0.0);
        assert!(without.total_weight_grams < with.total_weight_grams);
    }

    #[test]
    fn test_cabled_reports_wire() {
        let mut config = square(8000.0, None);
        config.edge_type = EdgeType::Cabled;
        let result = compute_shade_calculation(&config);
        assert_eq!(result.perimeter_m, 32.0);
        assert_eq!(result.wire_thickness_mm, Some(5.0));
        assert_eq!(result.webbing_width_mm, None);
    }

    #[test]
    fn test_set_corners_resets() {
        let mut config = square(4000.0, Some(5657.0));
        config.set_corners(CornerCount::Four);
        assert!(config.measurements.entered_lengths().is_empty());

        config.set_corners(CornerCount::Six);
        assert_eq!(config.corners(), CornerCount::Six);
    }

    #[test]
    fn test_ready_for_order() {
        let config = square(4000.0, Some(5657.0));
        assert!(config.ready_for_order(&TypoThresholds::default(), &BTreeMap::new()).is_ok());
    }

    #[test]
    fn test_missing_diagonal_blocks_order() {
        let config = square(4000.0, None);
        let errors = config
            .ready_for_order(&TypoThresholds::default(), &BTreeMap::new())
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_geometry_blocks_order() {
        // AC longer than AB + BC
        let config = square(4000.0, Some(8500.0));
        let errors = config
            .ready_for_order(&TypoThresholds::default(), &BTreeMap::new())
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, SailError::GeometryViolation { .. })));
    }

    #[test]
    fn test_suggestion_blocks_until_dismissed() {
        let mut config = square(4000.0, Some(5657.0));
        config.measurements.set_anchor_height(Vertex::A, 250.0).unwrap();

        let thresholds = TypoThresholds::default();
        let errors = config.ready_for_order(&thresholds, &BTreeMap::new()).unwrap_err();
        assert_eq!(errors.len(), 1);

        // Dismissing the suggestion leaves the hard minimum in force
        let mut dismissed = BTreeMap::new();
        dismissed.insert("A".to_string(), 250.0);
        let errors = config.ready_for_order(&thresholds, &dismissed).unwrap_err();
        assert!(matches!(errors[0], SailError::OutOfRange { .. }));
    }

    #[test]
    fn test_config_json() {
        let json = r#"{
            "measurements": {
                "corners": 3,
                "lengths": { "AB": 5000.0, "BC": 4000.0, "CA": 3000.0 }
            },
            "fabric": "z16",
            "edge_type": "cabled",
            "manufacturing": "exact",
            "currency": "AUD"
        }"#;
        let config: ShadeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.corners(), CornerCount::Three);
        assert_eq!(config.unit_system, UnitSystem::Metric);

        let result = compute_shade_calculation(&config);
        assert!((result.area_m2 - 6.0).abs() < 1e-9);
        assert_eq!(result.hardware_cost, 0.0);
        assert_eq!(result.currency, Currency::Aud);
    }

    #[test]
    fn test_config_json_accepts_any_key_order() {
        let json = r#"{
            "measurements": {
                "corners": 4,
                "lengths": { "ab": 4000, "BC": 4000, "CD": 4000, "AD": 4000, "ca": 5657, "DB": 5657 },
                "anchor_heights": { "a": 2400 }
            }
        }"#;
        let config: ShadeConfig = serde_json::from_str(json).unwrap();
        let expected = square(4000.0, Some(5657.0));
        assert_eq!(config.measurements.entered_lengths(), expected.measurements.entered_lengths());
        assert_eq!(config.measurements.anchor_height(Vertex::A), Some(2400.0));
        assert_eq!(compute_shade_calculation(&config).total_price, compute_shade_calculation(&expected).total_price);
        assert!(config.ready_for_order(&TypoThresholds::default(), &BTreeMap::new()).is_ok());
    }

    #[test]
    fn test_config_json_rejects_bad_measurements() {
        let cases = [
            r#"{"measurements": {"corners": 4, "lengths": {"AB": 4000, "XY": 7}}}"#,
            r#"{"measurements": {"corners": 3, "lengths": {"AB": 5000, "BC": 4000, "CA": -3000}}}"#,
            r#"{"measurements": {"corners": 3, "anchor_heights": {"F": 2400}}}"#,
        ];
        for json in cases {
            assert!(serde_json::from_str::<ShadeConfig>(json).is_err(), "{}", json);
        }
    }
}
