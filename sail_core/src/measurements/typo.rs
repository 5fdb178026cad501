//! # Typo Heuristics
//!
//! Customers regularly type lengths in the wrong magnitude: metres or
//! centimetres into a millimetre field, a dropped or doubled zero, or feet
//! into an inches field. When an entry falls outside the plausible range for
//! its field, a short priority-ordered list of magnitude corrections is
//! tried and the **first** one that lands inside the range is proposed.
//!
//! ## Candidate Corrections
//!
//! | Unit     | Entry below range   | Entry above range |
//! |----------|---------------------|-------------------|
//! | metric   | ×1000, ×100, ×10    | ÷10, ÷100         |
//! | imperial | ×12 (feet), ×10     | ÷10, ÷100         |
//!
//! The ranges were tuned against real orders rather than derived, so they
//! live in [`TypoThresholds`] where a host can override them.
//!
//! ## Example
//!
//! ```rust
//! use sail_core::measurements::{detect_typo, FieldClass};
//! use sail_core::units::UnitSystem;
//!
//! assert_eq!(detect_typo(50.0, UnitSystem::Metric, FieldClass::Edge), Some(5000.0));
//! assert_eq!(detect_typo(5000.0, UnitSystem::Metric, FieldClass::Edge), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{to_canonical_mm, to_display_unit, UnitSystem};

const METRIC_BELOW: [f64; 3] = [1000.0, 100.0, 10.0];
const METRIC_ABOVE: [f64; 2] = [0.1, 0.01];
const IMPERIAL_BELOW: [f64; 2] = [12.0, 10.0];
const IMPERIAL_ABOVE: [f64; 2] = [0.1, 0.01];

/// Which kind of length a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldClass {
    /// Sail edge or diagonal
    Edge,
    /// Height of a corner's fixing point above ground
    AnchorHeight,
}

impl FieldClass {
    /// Absolute (min, max) bounds in mm enforced when no typo applies
    pub fn hard_limits_mm(&self) -> (f64, f64) {
        match self {
            FieldClass::Edge => (1000.0, 99_999.0),
            // Below the edge floor: plausible anchor heights start at 900 mm
            FieldClass::AnchorHeight => (500.0, 99_999.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldClass::Edge => "Edge / diagonal",
            FieldClass::AnchorHeight => "Anchor height",
        }
    }
}

impl fmt::Display for FieldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inclusive range of plausible values, in the unit the customer types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibleRange {
    pub min: f64,
    pub max: f64,
}

impl PlausibleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        PlausibleRange { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Plausible ranges per field class and unit system.
///
/// Metric ranges are in mm, imperial ranges in inches. Both describe the same
/// physical spans (about 1.8 m to 15 m for edges, 0.9 m to 8 m for anchor
/// heights) rounded to numbers people type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypoThresholds {
    pub metric_edge: PlausibleRange,
    pub imperial_edge: PlausibleRange,
    pub metric_anchor_height: PlausibleRange,
    pub imperial_anchor_height: PlausibleRange,
}

impl Default for TypoThresholds {
    fn default() -> Self {
        TypoThresholds {
            metric_edge: PlausibleRange::new(1800.0, 15_000.0),
            imperial_edge: PlausibleRange::new(72.0, 590.0),
            metric_anchor_height: PlausibleRange::new(900.0, 8000.0),
            imperial_anchor_height: PlausibleRange::new(36.0, 315.0),
        }
    }
}

impl TypoThresholds {
    /// Plausible range for a field, in display units.
    pub fn range(&self, unit: UnitSystem, class: FieldClass) -> PlausibleRange {
        match (unit, class) {
            (UnitSystem::Metric, FieldClass::Edge) => self.metric_edge,
            (UnitSystem::Imperial, FieldClass::Edge) => self.imperial_edge,
            (UnitSystem::Metric, FieldClass::AnchorHeight) => self.metric_anchor_height,
            (UnitSystem::Imperial, FieldClass::AnchorHeight) => self.imperial_anchor_height,
        }
    }
}

/// Suggest a corrected length for an implausible entry using default thresholds.
///
/// Returns the suggested length in mm, or `None` when the entry is plausible,
/// empty, or no single magnitude correction explains it.
pub fn detect_typo(value_mm: f64, unit: UnitSystem, class: FieldClass) -> Option<f64> {
    detect_typo_with(value_mm, unit, class, &TypoThresholds::default())
}

/// Suggest a corrected length for an implausible entry.
pub fn detect_typo_with(
    value_mm: f64,
    unit: UnitSystem,
    class: FieldClass,
    thresholds: &TypoThresholds,
) -> Option<f64> {
    if !value_mm.is_finite() || value_mm <= 0.0 {
        return None;
    }

    // Work with the number as typed; round away conversion noise
    let entered = round_entry(to_display_unit(value_mm, unit));
    let range = thresholds.range(unit, class);
    if range.contains(entered) {
        return None;
    }

    let candidates: &[f64] = match (unit, entered < range.min) {
        (UnitSystem::Metric, true) => &METRIC_BELOW,
        (UnitSystem::Metric, false) => &METRIC_ABOVE,
        (UnitSystem::Imperial, true) => &IMPERIAL_BELOW,
        (UnitSystem::Imperial, false) => &IMPERIAL_ABOVE,
    };

    candidates
        .iter()
        .map(|factor| round_entry(entered * factor))
        .find(|corrected| range.contains(*corrected))
        .map(|corrected| to_canonical_mm(corrected, unit))
}

fn round_entry(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
