//! # Requirement Matcher
//!
//! Filters the inventory down to structures that meet or exceed both of the
//! request's thresholds, then orders the survivors for display.
//!
//! ## Example
//!
//! ```rust
//! use poi_core::inventory::{EmbeddedInventory, InventorySource};
//! use poi_core::matcher::find_matches;
//! use poi_core::requirements::RequirementSpec;
//!
//! let inventory = EmbeddedInventory::new().load().unwrap();
//! let matches = find_matches(&inventory, &RequirementSpec::default());
//!
//! for record in &matches {
//!     assert!(record.meets_requirements(&RequirementSpec::default()));
//! }
//! ```

use crate::inventory::StructureRecord;
use crate::requirements::{RequirementSpec, SortKey};

impl SortKey {
    /// The record field this key orders by.
    pub fn field_value(&self, record: &StructureRecord) -> f64 {
        match self {
            SortKey::Cost => record.cost_usd,
            SortKey::Weight => record.weight_lbs,
            SortKey::Height => record.height_ft,
        }
    }
}

impl StructureRecord {
    /// Whether this structure meets or exceeds both request thresholds.
    pub fn meets_requirements(&self, spec: &RequirementSpec) -> bool {
        self.height_ft >= spec.required_height_ft
            && self.max_moment_ftkips >= spec.required_moment_ftkips
    }
}

/// Select every inventory record meeting both thresholds, ordered ascending
/// by the spec's sort key.
///
/// The sort is stable: records with equal key values keep their original
/// inventory order. An empty inventory or an empty match set yields an empty
/// vec, not an error.
pub fn find_matches(inventory: &[StructureRecord], spec: &RequirementSpec) -> Vec<StructureRecord> {
    let mut matches: Vec<StructureRecord> = inventory
        .iter()
        .filter(|record| record.meets_requirements(spec))
        .cloned()
        .collect();

    matches.sort_by(|a, b| {
        spec.sort_by
            .field_value(a)
            .total_cmp(&spec.sort_by.field_value(b))
    });

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{EmbeddedInventory, InventorySource};
    use crate::requirements::{Complexity, Schedule};

    fn record(id: &str, height_ft: f64, moment: f64, weight: f64, cost: f64) -> StructureRecord {
        StructureRecord {
            id: id.to_string(),
            height_ft,
            max_moment_ftkips: moment,
            weight_lbs: weight,
            cost_usd: cost,
            engineering_hours: 300.0,
            project: None,
            structure_type: None,
            voltage_class: None,
            quote_date: None,
        }
    }

    fn spec(moment: f64, height: f64, sort_by: SortKey) -> RequirementSpec {
        RequirementSpec {
            required_moment_ftkips: moment,
            required_height_ft: height,
            schedule: Schedule::Moderate,
            complexity: Complexity::Medium,
            sort_by,
        }
    }

    #[test]
    fn test_matches_are_sound_and_complete() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        let spec = spec(3000.0, 95.0, SortKey::Cost);
        let matches = find_matches(&inventory, &spec);

        // Soundness: every returned record satisfies both predicates
        for record in &matches {
            assert!(record.height_ft >= spec.required_height_ft);
            assert!(record.max_moment_ftkips >= spec.required_moment_ftkips);
        }

        // Completeness: no qualifying record was left out
        let qualifying = inventory.iter().filter(|r| r.meets_requirements(&spec)).count();
        assert_eq!(matches.len(), qualifying);
    }

    #[test]
    fn test_boundary_values_are_included() {
        // Thresholds are inclusive: a record exactly at both limits matches
        let inventory = vec![record("edge", 90.0, 2500.0, 10000.0, 30000.0)];
        let matches = find_matches(&inventory, &spec(2500.0, 90.0, SortKey::Cost));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_sorted_ascending_by_each_key() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        for key in SortKey::ALL {
            let matches = find_matches(&inventory, &spec(0.0, 0.0, key));
            assert_eq!(matches.len(), inventory.len());
            for pair in matches.windows(2) {
                assert!(key.field_value(&pair[0]) <= key.field_value(&pair[1]));
            }
        }
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // "71" and "72" share weight and cost; "72" comes later in inventory
        let inventory = EmbeddedInventory::new().load().unwrap();
        let matches = find_matches(&inventory, &spec(10000.0, 0.0, SortKey::Cost));

        let pos_71 = matches.iter().position(|r| r.id == "71").unwrap();
        let pos_72 = matches.iter().position(|r| r.id == "72").unwrap();
        assert!(pos_71 < pos_72);
    }

    #[test]
    fn test_empty_inventory_yields_empty_matches() {
        let matches = find_matches(&[], &spec(2500.0, 90.0, SortKey::Cost));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_unreachable_thresholds_yield_empty_matches() {
        let inventory = EmbeddedInventory::new().load().unwrap();
        let matches = find_matches(&inventory, &spec(1_000_000.0, 500.0, SortKey::Cost));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_sort_by_height() {
        let inventory = vec![
            record("tall", 140.0, 5000.0, 20000.0, 60000.0),
            record("short", 95.0, 5000.0, 22000.0, 50000.0),
        ];
        let matches = find_matches(&inventory, &spec(0.0, 0.0, SortKey::Height));
        assert_eq!(matches[0].id, "short");
        assert_eq!(matches[1].id, "tall");
    }
}
