//! # Unit Types and Conversion
//!
//! Millimeters are the canonical internal unit: every stored length is mm,
//! every stored area mm². The [`UnitSystem`] only affects what the customer
//! types and sees.
//!
//! Lightweight newtype wrappers keep the unit visible at API boundaries while
//! serializing as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use sail_core::units::{format_length, to_canonical_mm, Inches, Millimeters, UnitSystem};
//!
//! let edge: Millimeters = Inches(120.0).into();
//! assert!((edge.0 - 3048.0).abs() < 1e-9);
//!
//! assert_eq!(to_canonical_mm(120.0, UnitSystem::Imperial), 3048.0);
//! assert_eq!(format_length(4000.0, UnitSystem::Metric, false), "4000 mm");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SailError, SailResult};

/// Exact millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Display factor for mm to inches
pub const INCHES_PER_MM: f64 = 0.0393701;

/// Millimeters per foot
pub const MM_PER_FOOT: f64 = 304.8;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system the customer enters and reads values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Millimeters
    #[default]
    Metric,
    /// Inches (displayed as feet and inches)
    Imperial,
}

impl UnitSystem {
    /// All unit systems for UI selection
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Short code used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> SailResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "in" | "inches" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(SailError::unknown_option("unit system", s)),
        }
    }

    /// Abbreviation of the entry unit
    pub fn entry_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "mm",
            UnitSystem::Imperial => "in",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 * INCHES_PER_MM)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqMm> for SqM {
    fn from(area: SqMm) -> Self {
        SqM(area.0 / 1_000_000.0)
    }
}

impl From<SqMm> for SqFt {
    fn from(area: SqMm) -> Self {
        SqFt(area.0 / (MM_PER_FOOT * MM_PER_FOOT))
    }
}

// ============================================================================
// Conversion and Formatting
// ============================================================================

/// Convert a stored mm length into the number shown in the entry field.
///
/// Identity for metric; inches for imperial.
pub fn to_display_unit(mm: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => mm,
        UnitSystem::Imperial => Inches::from(Millimeters(mm)).0,
    }
}

/// Convert a number typed in the customer's unit system into mm.
pub fn to_canonical_mm(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => Millimeters::from(Inches(value)).0,
    }
}

/// Render a length for humans.
///
/// Metric renders whole millimeters (`"4000 mm"`). Imperial renders feet and
/// inches to a tenth (`"5'3.2\""`), or bare inches (`"63.2\""`) when
/// `raw_inches_only` is set. Typo suggestions use the bare form so the
/// customer compares like with like.
pub fn format_length(mm: f64, system: UnitSystem, raw_inches_only: bool) -> String {
    match system {
        UnitSystem::Metric => format!("{} mm", mm.round() as i64),
        UnitSystem::Imperial => {
            let inches = to_display_unit(mm, system);
            if raw_inches_only {
                return format!("{:.1}\"", inches);
            }
            // Round once to tenths so 11.96" carries into the next foot
            let tenths = (inches * 10.0).round() as i64;
            let feet = tenths / 120;
            let rem_inches = (tenths % 120) as f64 / 10.0;
            format!("{}'{:.1}\"", feet, rem_inches)
        }
    }
}

/// Render an area given in mm² as m² or ft².
pub fn format_area(area_mm2: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{:.2} m²", SqM::from(SqMm(area_mm2)).0),
        UnitSystem::Imperial => format!("{:.2} ft²", SqFt::from(SqMm(area_mm2)).0),
    }
}
