//! # Requirement Spec
//!
//! Engineering requirements for one POI structure analysis: the load and
//! height thresholds a reusable structure must meet, plus the schedule and
//! complexity context that adjusts the custom-design labor estimate.
//!
//! A `RequirementSpec` is an immutable value created fresh per request and
//! passed into pure engine functions; there is no shared widget state.
//!
//! ## Example
//!
//! ```rust
//! use poi_core::requirements::{RequirementSpec, Schedule, Complexity, SortKey};
//!
//! let spec = RequirementSpec {
//!     required_moment_ftkips: 2500.0,
//!     required_height_ft: 90.0,
//!     schedule: Schedule::Expedited,
//!     complexity: Complexity::High,
//!     sort_by: SortKey::Cost,
//! };
//! assert!(spec.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PoiError, PoiResult};

/// Project schedule pressure.
///
/// Adjusts the estimated engineering hours for a custom design: a relaxed
/// schedule allows efficient sequencing, an expedited one burns overtime and
/// parallel rework.
///
/// Serde accepts the synonyms "Normal" (for Moderate) and "Fast" (for
/// Expedited) used by some intake forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Schedule {
    /// Relaxed timeline: -20% engineering hours
    Slow,
    /// Typical timeline: no adjustment
    #[default]
    #[serde(alias = "Normal")]
    Moderate,
    /// Compressed timeline: +40% engineering hours
    #[serde(alias = "Fast")]
    Expedited,
}

impl Schedule {
    /// All schedule variants for UI selection
    pub const ALL: [Schedule; 3] = [Schedule::Slow, Schedule::Moderate, Schedule::Expedited];

    /// Engineering-hours adjustment factor.
    ///
    /// Fixed calibration constant, not derived from inventory data.
    pub fn hours_factor(&self) -> f64 {
        match self {
            Schedule::Slow => -0.20,
            Schedule::Moderate => 0.0,
            Schedule::Expedited => 0.40,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Schedule::Slow => "Slow - relaxed construction timeline",
            Schedule::Moderate => "Moderate - typical construction timeline",
            Schedule::Expedited => "Expedited - compressed construction timeline",
        }
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Schedule::Slow => "Slow",
            Schedule::Moderate => "Moderate",
            Schedule::Expedited => "Expedited",
        };
        write!(f, "{}", name)
    }
}

/// Site and engineering complexity.
///
/// Adjusts the estimated engineering hours for site-specific and design
/// challenges (access, foundations, clearances).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Complexity {
    /// Routine site: -10% engineering hours
    Low,
    /// Typical site: no adjustment
    #[default]
    Medium,
    /// Challenging site: +15% engineering hours
    High,
}

impl Complexity {
    /// All complexity variants for UI selection
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    /// Engineering-hours adjustment factor.
    ///
    /// Fixed calibration constant, not derived from inventory data.
    pub fn hours_factor(&self) -> f64 {
        match self {
            Complexity::Low => -0.10,
            Complexity::Medium => 0.0,
            Complexity::High => 0.15,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Complexity::Low => "Low - routine site and design",
            Complexity::Medium => "Medium - typical site challenges",
            Complexity::High => "High - difficult access or engineering",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };
        write!(f, "{}", name)
    }
}

/// Sort key for the matched-structures listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Ascending by cost_usd
    #[default]
    Cost,
    /// Ascending by weight_lbs
    Weight,
    /// Ascending by height_ft
    Height,
}

impl SortKey {
    /// All sort keys for UI selection
    pub const ALL: [SortKey; 3] = [SortKey::Cost, SortKey::Weight, SortKey::Height];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Cost => "Cost",
            SortKey::Weight => "Weight",
            SortKey::Height => "Height",
        };
        write!(f, "{}", name)
    }
}

/// Input parameters for one analysis request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "required_moment_ftkips": 2500.0,
///   "required_height_ft": 90.0,
///   "schedule": "Moderate",
///   "complexity": "Medium",
///   "sort_by": "Cost"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSpec {
    /// Minimum bending moment required at the POI (Ft-Kips)
    pub required_moment_ftkips: f64,

    /// Minimum structure height (feet)
    pub required_height_ft: f64,

    /// Project schedule pressure
    #[serde(default)]
    pub schedule: Schedule,

    /// Site and engineering complexity
    #[serde(default)]
    pub complexity: Complexity,

    /// Sort key for the matched-structures listing
    #[serde(default)]
    pub sort_by: SortKey,
}

impl Default for RequirementSpec {
    fn default() -> Self {
        RequirementSpec {
            required_moment_ftkips: 2500.0,
            required_height_ft: 90.0,
            schedule: Schedule::default(),
            complexity: Complexity::default(),
            sort_by: SortKey::default(),
        }
    }
}

impl RequirementSpec {
    /// Validate input parameters.
    pub fn validate(&self) -> PoiResult<()> {
        if !self.required_moment_ftkips.is_finite() || self.required_moment_ftkips < 0.0 {
            return Err(PoiError::invalid_input(
                "required_moment_ftkips",
                self.required_moment_ftkips.to_string(),
                "Required moment must be a non-negative number",
            ));
        }
        if !self.required_height_ft.is_finite() || self.required_height_ft < 0.0 {
            return Err(PoiError::invalid_input(
                "required_height_ft",
                self.required_height_ft.to_string(),
                "Required height must be a non-negative number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_factors() {
        assert_eq!(Schedule::Slow.hours_factor(), -0.20);
        assert_eq!(Schedule::Moderate.hours_factor(), 0.0);
        assert_eq!(Schedule::Expedited.hours_factor(), 0.40);
    }

    #[test]
    fn test_complexity_factors() {
        assert_eq!(Complexity::Low.hours_factor(), -0.10);
        assert_eq!(Complexity::Medium.hours_factor(), 0.0);
        assert_eq!(Complexity::High.hours_factor(), 0.15);
    }

    #[test]
    fn test_defaults_match_intake_form() {
        let spec = RequirementSpec::default();
        assert_eq!(spec.required_moment_ftkips, 2500.0);
        assert_eq!(spec.required_height_ft, 90.0);
        assert_eq!(spec.schedule, Schedule::Moderate);
        assert_eq!(spec.complexity, Complexity::Medium);
        assert_eq!(spec.sort_by, SortKey::Cost);
    }

    #[test]
    fn test_validate_rejects_negative_thresholds() {
        let mut spec = RequirementSpec::default();
        spec.required_moment_ftkips = -1.0;
        assert!(spec.validate().is_err());

        let mut spec = RequirementSpec::default();
        spec.required_height_ft = -0.5;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut spec = RequirementSpec::default();
        spec.required_moment_ftkips = f64::NAN;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_schedule_synonyms_deserialize() {
        let normal: Schedule = serde_json::from_str("\"Normal\"").unwrap();
        assert_eq!(normal, Schedule::Moderate);

        let fast: Schedule = serde_json::from_str("\"Fast\"").unwrap();
        assert_eq!(fast, Schedule::Expedited);
    }

    #[test]
    fn test_spec_serialization() {
        let spec = RequirementSpec {
            required_moment_ftkips: 4000.0,
            required_height_ft: 120.0,
            schedule: Schedule::Expedited,
            complexity: Complexity::High,
            sort_by: SortKey::Weight,
        };
        let json = serde_json::to_string_pretty(&spec).unwrap();
        let roundtrip: RequirementSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec.required_moment_ftkips, roundtrip.required_moment_ftkips);
        assert_eq!(spec.schedule, roundtrip.schedule);
        assert_eq!(spec.sort_by, roundtrip.sort_by);
    }

    #[test]
    fn test_spec_defaults_fill_missing_fields() {
        let json = r#"{ "required_moment_ftkips": 3000.0, "required_height_ft": 100.0 }"#;
        let spec: RequirementSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.schedule, Schedule::Moderate);
        assert_eq!(spec.complexity, Complexity::Medium);
        assert_eq!(spec.sort_by, SortKey::Cost);
    }
}
