//! Advisory request and result types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Measurements submitted for advice.
///
/// Every field is independently optional. `None` means "no reading was
/// taken" and skips the matching rule family; it is not treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// Soil acidity (pH)
    pub soil_ph: Option<f64>,

    /// Soil moisture percentage
    pub moisture: Option<f64>,

    /// Free-text soil type ("sandy loam", "heavy clay", ...)
    pub soil_type: Option<String>,

    /// Free-text crop name
    pub crop: Option<String>,

    /// Whole days since the field was last irrigated
    pub days_since_last_water: Option<i64>,
}

impl AdviceRequest {
    /// Build a request from an untyped JSON mapping.
    ///
    /// Missing keys and wrong-typed values both become `None`, so callers
    /// can hand over raw request bodies without validating them first.
    /// A non-object value yields an empty request.
    pub fn from_json(value: &Value) -> Self {
        Self {
            soil_ph: value.get("soil_ph").and_then(Value::as_f64),
            moisture: value.get("moisture").and_then(Value::as_f64),
            soil_type: value
                .get("soil_type")
                .and_then(Value::as_str)
                .map(str::to_string),
            crop: value.get("crop").and_then(Value::as_str).map(str::to_string),
            days_since_last_water: value.get("days_since_last_water").and_then(Value::as_i64),
        }
    }
}

/// One advisory entry: what to do, why, and how firm the rule is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Short imperative action
    pub action: String,

    /// Explanation, embedding the triggering reading where there is one
    pub reason: String,

    /// Fixed per-rule confidence in `[0, 1]`
    pub confidence: f64,
}

impl Recommendation {
    /// Create a recommendation entry.
    pub fn new(action: impl Into<String>, reason: impl Into<String>, confidence: f64) -> Self {
        Self {
            action: action.into(),
            reason: reason.into(),
            confidence,
        }
    }
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResult {
    /// UTC evaluation timestamp, ISO-8601 with a trailing `Z`
    pub generated_at: String,

    /// Recommendations in rule evaluation order, never empty
    pub suggestions: Vec<Recommendation>,
}
