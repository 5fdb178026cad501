//! # Quotes
//!
//! A `Quote` is a snapshot of one configuration and the result computed from
//! it, handed to whatever stores or submits orders. The engine never stores
//! quotes itself; it only builds them and round-trips them through JSON.
//!
//! ## Structure
//!
//! ```text
//! Quote
//! ├── meta: QuoteMetadata (schema version, id, reference, timestamps)
//! ├── config: ShadeConfig
//! └── result: CalculationResult (always recomputed from config)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sail_core::calculations::ShadeConfig;
//! use sail_core::measurements::CornerCount;
//! use sail_core::quote::Quote;
//!
//! let quote = Quote::new("Backyard sail", ShadeConfig::new(CornerCount::Three));
//! let json = quote.to_json().unwrap();
//! let loaded = Quote::from_json(&json).unwrap();
//! assert_eq!(loaded.meta.id, quote.meta.id);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{compute_shade_calculation, CalculationResult, ShadeConfig};
use crate::errors::{SailError, SailResult};

/// Current schema version for serialized quotes
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Configuration plus its computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub meta: QuoteMetadata,
    pub config: ShadeConfig,
    pub result: CalculationResult,
}

impl Quote {
    /// Create a quote and compute its result.
    pub fn new(reference: impl Into<String>, config: ShadeConfig) -> Self {
        let now = Utc::now();
        let result = compute_shade_calculation(&config);
        Quote {
            meta: QuoteMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                reference: reference.into(),
                created: now,
                modified: now,
            },
            config,
            result,
        }
    }

    /// Replace the configuration and recompute.
    pub fn update_config(&mut self, config: ShadeConfig) {
        self.config = config;
        self.refresh();
    }

    /// Recompute the result from the stored configuration.
    pub fn refresh(&mut self) {
        self.result = compute_shade_calculation(&self.config);
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn to_json(&self) -> SailResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a quote, rejecting incompatible schema versions.
    ///
    /// The stored result is discarded and recomputed so a quote can never
    /// carry a price its configuration does not produce.
    pub fn from_json(json: &str) -> SailResult<Self> {
        let mut quote: Quote = serde_json::from_str(json)?;
        validate_version(&quote.meta.version)?;
        quote.result = compute_shade_calculation(&quote.config);
        Ok(quote)
    }
}

/// Quote header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    /// Customer-facing reference, e.g. an order or job name
    pub reference: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Same major version required; within 0.x a newer minor is rejected.
fn validate_version(file_version: &str) -> SailResult<()> {
    let mismatch = || SailError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}
