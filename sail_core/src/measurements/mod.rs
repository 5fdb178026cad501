//! # Measurement Sets
//!
//! A shade sail is an N-gon with corners lettered `A`, `B`, `C`... in order.
//! The customer measures every edge and a fixed set of diagonals; each
//! length is stored in millimeters under a two-letter vertex-pair key.
//!
//! ## Keys by Corner Count
//!
//! | Corners | Edges                  | Diagonals                              |
//! |---------|------------------------|----------------------------------------|
//! | 3       | AB BC CA               | (none)                                 |
//! | 4       | AB BC CD DA            | AC BD                                  |
//! | 5       | AB BC CD DE EA         | AC AD CE BD BE                         |
//! | 6       | AB BC CD DE EF FA      | AC AD AE BD BE BF CE CF DF             |
//!
//! Only these four shapes are representable.
//!
//! ## Example
//!
//! ```rust
//! use sail_core::measurements::{CornerCount, MeasurementSet};
//!
//! let mut set = MeasurementSet::new(CornerCount::Four);
//! for key in ["AB", "BC", "CD", "DA"] {
//!     set.set_length(key, 4000.0).unwrap();
//! }
//! assert!(set.is_complete_for_pricing());
//! assert_eq!(set.perimeter_mm(), 16_000.0);
//! ```

pub mod typo;
pub mod validation;

pub use typo::{detect_typo, detect_typo_with, FieldClass, PlausibleRange, TypoThresholds};
pub use validation::{
    assess_field, review_measurements, validate_measurement_field, FieldAssessment, FieldReview,
};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SailError, SailResult};

// ============================================================================
// Vertices and Corner Counts
// ============================================================================

/// A lettered sail corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
    D,
    E,
    F,
}

static VERTICES: [Vertex; 6] = Vertex::ALL;

impl Vertex {
    /// All vertices in perimeter order
    pub const ALL: [Vertex; 6] = [Vertex::A, Vertex::B, Vertex::C, Vertex::D, Vertex::E, Vertex::F];

    /// Corner letter
    pub fn letter(&self) -> char {
        match self {
            Vertex::A => 'A',
            Vertex::B => 'B',
            Vertex::C => 'C',
            Vertex::D => 'D',
            Vertex::E => 'E',
            Vertex::F => 'F',
        }
    }

    /// Parse a corner letter (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        Vertex::ALL
            .iter()
            .copied()
            .find(|v| v.letter() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Number of sail corners. Only 3 to 6 are manufactured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CornerCount {
    Three,
    #[default]
    Four,
    Five,
    Six,
}

const EDGES_3: [&str; 3] = ["AB", "BC", "CA"];
const EDGES_4: [&str; 4] = ["AB", "BC", "CD", "DA"];
const EDGES_5: [&str; 5] = ["AB", "BC", "CD", "DE", "EA"];
const EDGES_6: [&str; 6] = ["AB", "BC", "CD", "DE", "EF", "FA"];

const DIAGONALS_3: [&str; 0] = [];
const DIAGONALS_4: [&str; 2] = ["AC", "BD"];
const DIAGONALS_5: [&str; 5] = ["AC", "AD", "CE", "BD", "BE"];
const DIAGONALS_6: [&str; 9] = ["AC", "AD", "AE", "BD", "BE", "BF", "CE", "CF", "DF"];

impl CornerCount {
    /// All supported corner counts for UI selection
    pub const ALL: [CornerCount; 4] = [
        CornerCount::Three,
        CornerCount::Four,
        CornerCount::Five,
        CornerCount::Six,
    ];

    /// Number of corners as an integer
    pub fn count(&self) -> u8 {
        match self {
            CornerCount::Three => 3,
            CornerCount::Four => 4,
            CornerCount::Five => 5,
            CornerCount::Six => 6,
        }
    }

    /// Corners of this shape in perimeter order
    pub fn vertices(&self) -> &'static [Vertex] {
        &VERTICES[..self.count() as usize]
    }

    /// Edge keys forming the cycle A -> B -> ... -> A
    pub fn edge_keys(&self) -> &'static [&'static str] {
        match self {
            CornerCount::Three => &EDGES_3,
            CornerCount::Four => &EDGES_4,
            CornerCount::Five => &EDGES_5,
            CornerCount::Six => &EDGES_6,
        }
    }

    /// Diagonal keys the customer is asked to measure
    pub fn diagonal_keys(&self) -> &'static [&'static str] {
        match self {
            CornerCount::Three => &DIAGONALS_3,
            CornerCount::Four => &DIAGONALS_4,
            CornerCount::Five => &DIAGONALS_5,
            CornerCount::Six => &DIAGONALS_6,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CornerCount::Three => "Triangle (3 corners)",
            CornerCount::Four => "Quadrilateral (4 corners)",
            CornerCount::Five => "Pentagon (5 corners)",
            CornerCount::Six => "Hexagon (6 corners)",
        }
    }
}

impl TryFrom<u8> for CornerCount {
    type Error = SailError;

    fn try_from(corners: u8) -> SailResult<Self> {
        match corners {
            3 => Ok(CornerCount::Three),
            4 => Ok(CornerCount::Four),
            5 => Ok(CornerCount::Five),
            6 => Ok(CornerCount::Six),
            _ => Err(SailError::UnsupportedCornerCount { corners }),
        }
    }
}

impl From<CornerCount> for u8 {
    fn from(corners: CornerCount) -> Self {
        corners.count()
    }
}

impl fmt::Display for CornerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Edge keys for a raw corner count; empty for unsupported counts.
pub fn edge_keys_for(corners: u8) -> &'static [&'static str] {
    CornerCount::try_from(corners)
        .map(|c| c.edge_keys())
        .unwrap_or(&[])
}

/// Diagonal keys for a raw corner count; empty for unsupported counts.
///
/// ```rust
/// use sail_core::measurements::diagonal_keys_for;
///
/// assert_eq!(diagonal_keys_for(4), ["AC", "BD"]);
/// assert!(diagonal_keys_for(3).is_empty());
/// assert_eq!(diagonal_keys_for(6).len(), 9);
/// ```
pub fn diagonal_keys_for(corners: u8) -> &'static [&'static str] {
    CornerCount::try_from(corners)
        .map(|c| c.diagonal_keys())
        .unwrap_or(&[])
}

// ============================================================================
// Measurement Set
// ============================================================================

/// Customer measurements for one sail, all in millimeters.
///
/// A zero or absent length means "not yet entered". Lengths are looked up
/// in either vertex order, so `"AD"` finds the closing edge `"DA"` of a
/// quadrilateral.
///
/// Changing the corner count means building a new set; see
/// [`crate::calculations::ShadeConfig::set_corners`].
///
/// Deserialized sets go through the same checks as [`MeasurementSet::set_length`]
/// and [`MeasurementSet::set_anchor_height`], so keys from JSON may use either
/// vertex order and any case, while unknown keys and negative lengths are
/// rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurementSet")]
pub struct MeasurementSet {
    corners: CornerCount,

    /// Edge and diagonal lengths keyed by canonical two-letter code
    lengths: BTreeMap<String, f64>,

    /// Optional fixing-point heights keyed by corner letter
    anchor_heights: BTreeMap<String, f64>,
}

/// Wire form of a [`MeasurementSet`] before key and value checks.
#[derive(Deserialize)]
struct RawMeasurementSet {
    corners: CornerCount,

    #[serde(default)]
    lengths: BTreeMap<String, f64>,

    #[serde(default)]
    anchor_heights: BTreeMap<String, f64>,
}

impl TryFrom<RawMeasurementSet> for MeasurementSet {
    type Error = SailError;

    fn try_from(raw: RawMeasurementSet) -> SailResult<Self> {
        let mut set = MeasurementSet::new(raw.corners);
        for (key, mm) in &raw.lengths {
            set.set_length(key, *mm)?;
        }
        for (key, mm) in &raw.anchor_heights {
            let vertex = parse_vertex_key(key)?;
            set.set_anchor_height(vertex, *mm)?;
        }
        Ok(set)
    }
}

fn parse_vertex_key(key: &str) -> SailResult<Vertex> {
    let mut chars = key.trim().chars();
    let vertex = match (chars.next(), chars.next()) {
        (Some(c), None) => Vertex::from_letter(c),
        _ => None,
    };
    vertex.ok_or_else(|| SailError::invalid_input("anchor_heights", key, "Anchor heights are keyed by a corner letter"))
}

impl MeasurementSet {
    /// Create an empty measurement set for a shape.
    pub fn new(corners: CornerCount) -> Self {
        MeasurementSet {
            corners,
            lengths: BTreeMap::new(),
            anchor_heights: BTreeMap::new(),
        }
    }

    /// Build a set from `(key, mm)` pairs.
    pub fn with_lengths(corners: CornerCount, lengths: &[(&str, f64)]) -> SailResult<Self> {
        let mut set = MeasurementSet::new(corners);
        for (key, mm) in lengths {
            set.set_length(key, *mm)?;
        }
        Ok(set)
    }

    pub fn corners(&self) -> CornerCount {
        self.corners
    }

    /// Resolve a key (either vertex order, any case) to its canonical form.
    pub fn canonical_key(&self, key: &str) -> SailResult<&'static str> {
        let upper = key.trim().to_ascii_uppercase();
        let reversed: String = upper.chars().rev().collect();
        self.corners
            .edge_keys()
            .iter()
            .chain(self.corners.diagonal_keys())
            .copied()
            .find(|k| *k == upper || *k == reversed)
            .ok_or_else(|| SailError::UnknownMeasurementKey {
                key: key.to_string(),
                corners: self.corners.count(),
            })
    }

    /// Whether the key names an edge (as opposed to a diagonal).
    pub fn is_edge_key(&self, key: &str) -> bool {
        self.canonical_key(key)
            .map(|k| self.corners.edge_keys().contains(&k))
            .unwrap_or(false)
    }

    /// Record a length in mm. Zero clears the entry.
    pub fn set_length(&mut self, key: &str, mm: f64) -> SailResult<()> {
        let canonical = self.canonical_key(key)?;
        check_length(canonical, mm)?;
        if mm == 0.0 {
            self.lengths.remove(canonical);
        } else {
            self.lengths.insert(canonical.to_string(), mm);
        }
        Ok(())
    }

    /// Remove an entered length.
    pub fn clear_length(&mut self, key: &str) -> SailResult<()> {
        let canonical = self.canonical_key(key)?;
        self.lengths.remove(canonical);
        Ok(())
    }

    /// Entered length for a key, if present and positive.
    pub fn length(&self, key: &str) -> Option<f64> {
        let canonical = self.canonical_key(key).ok()?;
        self.lengths
            .get(canonical)
            .copied()
            .filter(|mm| mm.is_finite() && *mm > 0.0)
    }

    /// Record the height of a corner's fixing point in mm. Zero clears it.
    pub fn set_anchor_height(&mut self, vertex: Vertex, mm: f64) -> SailResult<()> {
        if !self.corners.vertices().contains(&vertex) {
            return Err(SailError::invalid_input(
                format!("height {}", vertex),
                mm.to_string(),
                format!("A {}-corner sail has no corner {}", self.corners, vertex),
            ));
        }
        let field = format!("height {}", vertex);
        check_length(&field, mm)?;
        let key = vertex.letter().to_string();
        if mm == 0.0 {
            self.anchor_heights.remove(&key);
        } else {
            self.anchor_heights.insert(key, mm);
        }
        Ok(())
    }

    /// Entered anchor height for a corner, if present and positive.
    pub fn anchor_height(&self, vertex: Vertex) -> Option<f64> {
        self.anchor_heights
            .get(&vertex.letter().to_string())
            .copied()
            .filter(|mm| mm.is_finite() && *mm > 0.0)
    }

    /// All N edges have positive lengths.
    pub fn is_complete_for_pricing(&self) -> bool {
        self.corners
            .edge_keys()
            .iter()
            .all(|k| self.length(k).is_some())
    }

    /// Every diagonal for this shape has been entered.
    pub fn has_all_diagonals(&self) -> bool {
        self.corners
            .diagonal_keys()
            .iter()
            .all(|k| self.length(k).is_some())
    }

    /// Sum of entered edge lengths in mm. Diagonals never count.
    pub fn perimeter_mm(&self) -> f64 {
        self.corners
            .edge_keys()
            .iter()
            .filter_map(|k| self.length(k))
            .sum()
    }

    /// Entered lengths in display order: edges first, then diagonals.
    pub fn entered_lengths(&self) -> Vec<(&'static str, f64)> {
        self.corners
            .edge_keys()
            .iter()
            .chain(self.corners.diagonal_keys())
            .filter_map(|k| self.length(k).map(|mm| (*k, mm)))
            .collect()
    }

    /// Entered anchor heights in corner order.
    pub fn entered_anchor_heights(&self) -> Vec<(Vertex, f64)> {
        self.corners
            .vertices()
            .iter()
            .filter_map(|v| self.anchor_height(*v).map(|mm| (*v, mm)))
            .collect()
    }
}

fn check_length(field: &str, mm: f64) -> SailResult<()> {
    if !mm.is_finite() {
        return Err(SailError::invalid_input(field, mm.to_string(), "Length must be a finite number"));
    }
    if mm < 0.0 {
        return Err(SailError::invalid_input(field, mm.to_string(), "Length cannot be negative"));
    }
    Ok(())
}
