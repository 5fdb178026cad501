//! Edge Construction
//!
//! Sail edges are either reinforced with sewn webbing or finished with a
//! stainless cable running through a pocket. The choice selects a price
//! table, a corner-cost row and the reinforcement size.
//!
//! ## Size Steps
//!
//! | Edge     | Perimeter      | Size            |
//! |----------|----------------|-----------------|
//! | cabled   | up to 30 m     | 4 mm wire       |
//! | cabled   | over 30 m      | 5 mm wire       |
//! | webbing  | up to 20 m     | 50 mm webbing   |
//! | webbing  | over 20 m      | 75 mm webbing   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SailError, SailResult};

/// One step of a perimeter-indexed size table.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SizeStep {
    /// Largest perimeter (m) this size covers
    up_to_m: f64,
    size_mm: f64,
}

static WIRE_STEPS: [SizeStep; 2] = [
    SizeStep { up_to_m: 30.0, size_mm: 4.0 },
    SizeStep { up_to_m: f64::INFINITY, size_mm: 5.0 },
];

static WEBBING_STEPS: [SizeStep; 2] = [
    SizeStep { up_to_m: 20.0, size_mm: 50.0 },
    SizeStep { up_to_m: f64::INFINITY, size_mm: 75.0 },
];

fn select_size(steps: &[SizeStep], perimeter_m: f64) -> Option<f64> {
    steps
        .iter()
        .find(|step| perimeter_m <= step.up_to_m)
        .map(|step| step.size_mm)
}

/// Edge construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Sewn webbing reinforcement
    #[default]
    Webbing,
    /// Stainless wire rope in an edge pocket
    Cabled,
}

impl EdgeType {
    /// All edge types for UI selection
    pub const ALL: [EdgeType; 2] = [EdgeType::Webbing, EdgeType::Cabled];

    /// Code used for price table lookup and JSON
    pub fn code(&self) -> &'static str {
        match self {
            EdgeType::Webbing => "webbing",
            EdgeType::Cabled => "cabled",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> SailResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "webbing" | "web" | "sewn" => Ok(EdgeType::Webbing),
            "cabled" | "cable" | "wire" => Ok(EdgeType::Cabled),
            _ => Err(SailError::unknown_option("edge type", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EdgeType::Webbing => "Webbing edge",
            EdgeType::Cabled => "Cabled edge",
        }
    }

    /// Shipping weight of the edge reinforcement, grams per metre of perimeter
    pub fn reinforcement_g_per_m(&self) -> f64 {
        match self {
            EdgeType::Webbing => 100.0,
            EdgeType::Cabled => 140.0,
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wire rope diameter for a cabled sail; `None` for webbing edges.
pub fn wire_thickness_mm(edge: EdgeType, perimeter_m: f64) -> Option<f64> {
    match edge {
        EdgeType::Cabled => select_size(&WIRE_STEPS, perimeter_m),
        EdgeType::Webbing => None,
    }
}

/// Webbing width for a webbing-edged sail; `None` for cabled edges.
pub fn webbing_width_mm(edge: EdgeType, perimeter_m: f64) -> Option<f64> {
    match edge {
        EdgeType::Webbing => select_size(&WEBBING_STEPS, perimeter_m),
        EdgeType::Cabled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_thickness_steps() {
        assert_eq!(wire_thickness_mm(EdgeType::Cabled, 16.0), Some(4.0));
        assert_eq!(wire_thickness_mm(EdgeType::Cabled, 30.0), Some(4.0));
        assert_eq!(wire_thickness_mm(EdgeType::Cabled, 30.5), Some(5.0));
        assert_eq!(wire_thickness_mm(EdgeType::Webbing, 16.0), None);
    }

    #[test]
    fn test_webbing_width_steps() {
        assert_eq!(webbing_width_mm(EdgeType::Webbing, 12.0), Some(50.0));
        assert_eq!(webbing_width_mm(EdgeType::Webbing, 24.0), Some(75.0));
        assert_eq!(webbing_width_mm(EdgeType::Cabled, 12.0), None);
    }

    #[test]
    fn test_edge_parsing() {
        assert_eq!(EdgeType::from_str_flexible("Cable").unwrap(), EdgeType::Cabled);
        assert_eq!(EdgeType::from_str_flexible("webbing").unwrap(), EdgeType::Webbing);
        assert!(EdgeType::from_str_flexible("rope").is_err());
    }

    #[test]
    fn test_reinforcement_weight() {
        assert!(EdgeType::Cabled.reinforcement_g_per_m() > EdgeType::Webbing.reinforcement_g_per_m());
    }
}
