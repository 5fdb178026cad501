//! # Field Validation
//!
//! Per-field checks run on every keystroke. A field ends up in exactly one
//! state:
//!
//! - **Empty** - nothing entered yet
//! - **Valid** - plausible, or outside the plausible range but within the
//!   absolute limits with no typo explanation
//! - **Suggestion** - a typo correction is proposed; it must be accepted or
//!   dismissed before the customer may continue
//! - **Invalid** - outside the absolute limits with no typo explanation
//!
//! A suggestion always suppresses the range error for the same value. Once
//! the customer dismisses a suggestion the host passes the dismissed value
//! back in, and the field is not re-flagged until its value changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::typo::{detect_typo_with, FieldClass, TypoThresholds};
use super::MeasurementSet;
use crate::errors::{SailError, SailResult};
use crate::units::{format_length, UnitSystem};

/// Outcome of checking a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldAssessment {
    Empty,
    Valid,
    Suggestion {
        entered_mm: f64,
        suggested_mm: f64,
        message: String,
    },
    Invalid { error: SailError },
}

impl FieldAssessment {
    /// Whether this field stops the customer moving to the next step.
    ///
    /// An unanswered suggestion gates progress the same way an error does.
    pub fn blocks_progress(&self) -> bool {
        matches!(self, FieldAssessment::Suggestion { .. } | FieldAssessment::Invalid { .. })
    }

    pub fn suggested_mm(&self) -> Option<f64> {
        match self {
            FieldAssessment::Suggestion { suggested_mm, .. } => Some(*suggested_mm),
            _ => None,
        }
    }
}

/// Assessment of one entered field within a measurement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReview {
    /// Two-letter length key, or a single corner letter for anchor heights
    pub key: String,
    pub class: FieldClass,
    pub assessment: FieldAssessment,
}

/// Hard-range check for one field.
///
/// Returns `Ok(())` for empty fields and whenever a typo suggestion exists,
/// since the suggestion takes precedence over the error.
pub fn validate_measurement_field(
    field: &str,
    value_mm: f64,
    unit: UnitSystem,
    class: FieldClass,
) -> SailResult<()> {
    match assess_field(field, value_mm, unit, class, &TypoThresholds::default(), None) {
        FieldAssessment::Invalid { error } => Err(error),
        _ => Ok(()),
    }
}

/// Classify one field.
///
/// `dismissed_mm` is the value for which the customer last dismissed a
/// suggestion; while the field still holds that value no new suggestion is
/// raised and only the absolute limits apply.
pub fn assess_field(
    field: &str,
    value_mm: f64,
    unit: UnitSystem,
    class: FieldClass,
    thresholds: &TypoThresholds,
    dismissed_mm: Option<f64>,
) -> FieldAssessment {
    if !value_mm.is_finite() || value_mm < 0.0 {
        return FieldAssessment::Invalid {
            error: SailError::invalid_input(
                field,
                value_mm.to_string(),
                "Length must be a non-negative number",
            ),
        };
    }
    if value_mm == 0.0 {
        return FieldAssessment::Empty;
    }

    if dismissed_mm != Some(value_mm) {
        if let Some(suggested_mm) = detect_typo_with(value_mm, unit, class, thresholds) {
            return FieldAssessment::Suggestion {
                entered_mm: value_mm,
                suggested_mm,
                message: format!(
                    "You entered {}. Did you mean {}?",
                    format_length(value_mm, unit, true),
                    format_length(suggested_mm, unit, true),
                ),
            };
        }
    }

    match check_hard_limits(field, value_mm, unit, class) {
        Ok(()) => FieldAssessment::Valid,
        Err(error) => FieldAssessment::Invalid { error },
    }
}

/// Assess every entered length and anchor height in a set.
///
/// `dismissed` maps field keys to the value at which a suggestion was
/// dismissed.
pub fn review_measurements(
    set: &MeasurementSet,
    unit: UnitSystem,
    thresholds: &TypoThresholds,
    dismissed: &BTreeMap<String, f64>,
) -> Vec<FieldReview> {
    let lengths = set.entered_lengths().into_iter().map(|(key, mm)| (key.to_string(), FieldClass::Edge, mm));
    let heights = set
        .entered_anchor_heights()
        .into_iter()
        .map(|(vertex, mm)| (vertex.letter().to_string(), FieldClass::AnchorHeight, mm));

    lengths
        .chain(heights)
        .map(|(key, class, mm)| {
            let assessment = assess_field(&key, mm, unit, class, thresholds, dismissed.get(&key).copied());
            FieldReview { key, class, assessment }
        })
        .collect()
}

fn check_hard_limits(field: &str, value_mm: f64, unit: UnitSystem, class: FieldClass) -> SailResult<()> {
    let (min_mm, max_mm) = class.hard_limits_mm();
    if value_mm < min_mm {
        let hint = match unit {
            UnitSystem::Metric => "did you enter cm instead of mm?",
            UnitSystem::Imperial => "did you enter feet instead of inches?",
        };
        return Err(SailError::out_of_range(
            field,
            format_length(value_mm, unit, true),
            format!("Below the minimum of {} - {}", format_length(min_mm, unit, true), hint),
        ));
    }
    if value_mm > max_mm {
        let hint = match unit {
            UnitSystem::Metric => "did you type an extra digit?",
            UnitSystem::Imperial => "did you enter mm instead of inches?",
        };
        return Err(SailError::out_of_range(
            field,
            format_length(value_mm, unit, true),
            format!("Above the maximum of {} - {}", format_length(max_mm, unit, true), hint),
        ));
    }
    Ok(())
}
