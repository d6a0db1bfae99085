//! # Recommendation Engine
//!
//! Compares the cheapest matching existing structure against the custom
//! estimate and emits a ternary verdict.
//!
//! On an exact cost tie, reuse wins: the verdict recommends custom only when
//! the best existing option costs strictly more than the estimate.
//!
//! ## Example
//!
//! ```rust
//! use poi_core::estimator::estimate;
//! use poi_core::inventory::{EmbeddedInventory, InventorySource};
//! use poi_core::matcher::find_matches;
//! use poi_core::recommend::{recommend, Verdict};
//! use poi_core::requirements::RequirementSpec;
//!
//! let inventory = EmbeddedInventory::new().load().unwrap();
//! let spec = RequirementSpec::default();
//!
//! let matches = find_matches(&inventory, &spec);
//! let estimate = estimate(&inventory, &spec).unwrap();
//! let result = recommend(matches, &estimate);
//!
//! assert_ne!(result.verdict, Verdict::NoReusableOption);
//! ```

use serde::{Deserialize, Serialize};

use crate::estimator::CostEstimate;
use crate::inventory::StructureRecord;

/// Ternary reuse-vs-custom verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The custom estimate undercuts every matching existing structure
    RecommendCustom,

    /// At least one matching existing structure costs no more than the
    /// custom estimate
    RecommendReuse,

    /// No existing structure meets the requirements; custom is the only
    /// option
    NoReusableOption,
}

impl Verdict {
    /// Human-readable recommendation text
    pub fn description(&self) -> &'static str {
        match self {
            Verdict::RecommendCustom => {
                "Custom structure is recommended - lower cost and tailored performance"
            }
            Verdict::RecommendReuse => {
                "Consider reusing an existing structure - it may save cost if schedule or complexity are key"
            }
            Verdict::NoReusableOption => {
                "No reusable structures meet the requirements - custom structure required"
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::RecommendCustom => "RecommendCustom",
            Verdict::RecommendReuse => "RecommendReuse",
            Verdict::NoReusableOption => "NoReusableOption",
        };
        write!(f, "{}", name)
    }
}

/// One bar of the custom-vs-reuse cost chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBar {
    /// Category label ("Custom" or "Lowest Reuse")
    pub label: String,

    /// Bar magnitude (USD); zero when there is no reuse option
    pub cost_usd: f64,
}

/// Outcome of the reuse-vs-custom comparison.
///
/// ## JSON Example
///
/// ```json
/// {
///   "matches": [ { "id": "26/6B", "...": "..." } ],
///   "lowest_match_cost_usd": 41070.80,
///   "custom_cost_usd": 94755.19,
///   "verdict": "RecommendReuse",
///   "recommended": { "id": "26/6B", "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Matching structures, in the spec's sort order, with all display columns
    pub matches: Vec<StructureRecord>,

    /// Cost of the cheapest match; `None` when nothing matched
    pub lowest_match_cost_usd: Option<f64>,

    /// Total estimated custom cost
    pub custom_cost_usd: f64,

    /// The recommendation
    pub verdict: Verdict,

    /// The cheapest matching structure, for the "recommended structure" panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<StructureRecord>,
}

impl RecommendationResult {
    /// Two-category cost series for a bar-chart rendering.
    ///
    /// The reuse bar drops to zero when nothing matched, mirroring how the
    /// comparison chart renders an empty reuse option.
    pub fn cost_series(&self) -> [CostBar; 2] {
        [
            CostBar {
                label: "Custom".to_string(),
                cost_usd: self.custom_cost_usd,
            },
            CostBar {
                label: "Lowest Reuse".to_string(),
                cost_usd: self.lowest_match_cost_usd.unwrap_or(0.0),
            },
        ]
    }
}

/// Compare the cheapest match against the custom estimate.
///
/// Rules, evaluated in order:
///
/// 1. No matches -> `NoReusableOption`
/// 2. Cheapest match strictly above the estimate -> `RecommendCustom`
/// 3. Otherwise (including an exact tie) -> `RecommendReuse`
pub fn recommend(matches: Vec<StructureRecord>, estimate: &CostEstimate) -> RecommendationResult {
    let custom_cost_usd = estimate.total_usd;

    let recommended = matches
        .iter()
        .min_by(|a, b| a.cost_usd.total_cmp(&b.cost_usd))
        .cloned();
    let lowest_match_cost_usd = recommended.as_ref().map(|r| r.cost_usd);

    let verdict = match lowest_match_cost_usd {
        None => Verdict::NoReusableOption,
        Some(lowest) if lowest > custom_cost_usd => Verdict::RecommendCustom,
        Some(_) => Verdict::RecommendReuse,
    };

    RecommendationResult {
        matches,
        lowest_match_cost_usd,
        custom_cost_usd,
        verdict,
        recommended,
    }
}
