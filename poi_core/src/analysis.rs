//! # Analysis Entry Point
//!
//! The single call a presentation adapter makes per request: run the matcher,
//! the estimator, and the recommendation engine over one immutable
//! (inventory, spec) pair and return everything the front end displays.
//!
//! The whole computation is synchronous and pure; a multi-user front end can
//! share one read-only inventory across requests without locking as long as
//! each request owns its `RequirementSpec`.
//!
//! ## Example
//!
//! ```rust
//! use poi_core::analysis::analyze;
//! use poi_core::inventory::{EmbeddedInventory, InventorySource};
//! use poi_core::requirements::RequirementSpec;
//!
//! let inventory = EmbeddedInventory::new().load().unwrap();
//! let report = analyze(&inventory, &RequirementSpec::default()).unwrap();
//!
//! println!("{} match(es), custom estimate ${:.2}",
//!     report.recommendation.matches.len(),
//!     report.estimate.total_usd);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::PoiResult;
use crate::estimator::{self, CostEstimate};
use crate::matcher::find_matches;
use crate::recommend::{recommend, RecommendationResult};
use crate::inventory::StructureRecord;
use crate::requirements::RequirementSpec;

/// Complete analysis report for one request.
///
/// Carries the spec it was computed from so a rendered report is
/// self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    /// The requirements this analysis answered
    pub spec: RequirementSpec,

    /// Custom-structure cost estimate with full breakdown
    pub estimate: CostEstimate,

    /// Matches, lowest reuse cost, and the verdict
    pub recommendation: RecommendationResult,
}

/// Run the full filter-estimate-recommend pipeline.
///
/// # Errors
///
/// * `InvalidInput` - spec thresholds are negative or non-finite
/// * `InsufficientData` - inventory is empty (the estimate's averages are
///   undefined, even though the match list would simply be empty)
/// * `DivisionByZero` - inventory's average moment is zero
pub fn analyze(
    inventory: &[StructureRecord],
    spec: &RequirementSpec,
) -> PoiResult<StructureAnalysis> {
    spec.validate()?;

    let matches = find_matches(inventory, spec);
    let estimate = estimator::estimate(inventory, spec)?;
    let recommendation = recommend(matches, &estimate);

    Ok(StructureAnalysis {
        spec: spec.clone(),
        estimate,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{EmbeddedInventory, InventorySource};
    use crate::recommend::Verdict;
    use crate::requirements::{Complexity, Schedule, SortKey};

    #[test]
    fn test_default_request_against_embedded_inventory() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        let report = analyze(&inventory, &RequirementSpec::default()).unwrap();

        // Every embedded structure clears moment 2500 / height 90
        assert_eq!(report.recommendation.matches.len(), 10);
        assert_eq!(report.recommendation.lowest_match_cost_usd, Some(41070.80));

        // Cheapest match (26/6B at $41,070.80) beats the custom estimate
        assert_eq!(report.recommendation.verdict, Verdict::RecommendReuse);
        assert_eq!(report.recommendation.recommended.as_ref().unwrap().id, "26/6B");
        assert!(report.estimate.total_usd > 41070.80);
    }

    #[test]
    fn test_unreachable_thresholds_still_estimate() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        let spec = RequirementSpec {
            required_moment_ftkips: 50000.0,
            required_height_ft: 200.0,
            schedule: Schedule::Moderate,
            complexity: Complexity::Medium,
            sort_by: SortKey::Cost,
        };
        let report = analyze(&inventory, &spec).unwrap();

        assert!(report.recommendation.matches.is_empty());
        assert_eq!(report.recommendation.verdict, Verdict::NoReusableOption);
        assert_eq!(report.recommendation.lowest_match_cost_usd, None);
        assert!(report.estimate.total_usd > 0.0);
    }

    #[test]
    fn test_single_record_pipeline_end_to_end() {
        let inventory = vec![crate::inventory::StructureRecord {
            id: "A".to_string(),
            height_ft: 100.0,
            max_moment_ftkips: 3000.0,
            weight_lbs: 15000.0,
            cost_usd: 40000.0,
            engineering_hours: 400.0,
            project: None,
            structure_type: None,
            voltage_class: None,
            quote_date: None,
        }];
        let spec = RequirementSpec {
            required_moment_ftkips: 2500.0,
            required_height_ft: 90.0,
            schedule: Schedule::Moderate,
            complexity: Complexity::Low,
            sort_by: SortKey::Cost,
        };
        let report = analyze(&inventory, &spec).unwrap();

        assert_eq!(report.recommendation.matches.len(), 1);
        assert_eq!(report.recommendation.matches[0].id, "A");

        // steel = 3.50 * (2500/3000) * 15000 = 43750
        // engineering = 400 * (1 - 0.10) * 150 = 54000
        assert!((report.estimate.total_usd - 97750.0).abs() < 1e-9);

        // 40000 <= 97750, so the existing structure wins
        assert_eq!(report.recommendation.verdict, Verdict::RecommendReuse);
        assert_eq!(report.recommendation.lowest_match_cost_usd, Some(40000.0));
    }

    #[test]
    fn test_empty_inventory_fails_with_insufficient_data() {
        let error = analyze(&[], &RequirementSpec::default()).unwrap_err();
        assert_eq!(error.error_code(), "INSUFFICIENT_DATA");
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        let spec = RequirementSpec::default();

        let first = analyze(&inventory, &spec).unwrap();
        let second = analyze(&inventory, &spec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_serialization() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        let report = analyze(&inventory, &RequirementSpec::default()).unwrap();

        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: StructureAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
