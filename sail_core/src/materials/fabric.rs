//! Shade Fabrics
//!
//! The three knitted and coated fabrics sails are made from. Each has its
//! own price table (see `data/price_tables.toml`) and areal weight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SailError, SailResult};

/// Sail fabric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fabric {
    /// Monotec 370 knitted HDPE
    #[default]
    Monotec370,
    /// Extrablock 330 knitted HDPE
    Extrablock330,
    /// Rainbow Z16 coated (waterproof)
    Z16,
}

impl Fabric {
    /// All fabrics for UI selection
    pub const ALL: [Fabric; 3] = [Fabric::Monotec370, Fabric::Extrablock330, Fabric::Z16];

    /// Code used for price table lookup and JSON
    pub fn code(&self) -> &'static str {
        match self {
            Fabric::Monotec370 => "monotec370",
            Fabric::Extrablock330 => "extrablock330",
            Fabric::Z16 => "z16",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> SailResult<Self> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "monotec370" | "monotec" => Ok(Fabric::Monotec370),
            "extrablock330" | "extrablock" => Ok(Fabric::Extrablock330),
            "z16" | "rainbowz16" | "waterproof" => Ok(Fabric::Z16),
            _ => Err(SailError::unknown_option("fabric", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Fabric::Monotec370 => "Monotec 370",
            Fabric::Extrablock330 => "Extrablock 330",
            Fabric::Z16 => "Rainbow Z16",
        }
    }

    /// Fabric weight in grams per square metre
    pub fn weight_g_per_m2(&self) -> f64 {
        match self {
            Fabric::Monotec370 => 370.0,
            Fabric::Extrablock330 => 330.0,
            Fabric::Z16 => 420.0,
        }
    }
}

impl fmt::Display for Fabric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
