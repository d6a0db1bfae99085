//! # Custom Cost Estimator
//!
//! Parametric cost estimate for a hypothetical custom-designed structure,
//! calibrated against the inventory of past quotes.
//!
//! ## Method
//!
//! Material cost scales the inventory's average weight by the ratio of the
//! required moment to the inventory's average moment - a simplifying linear
//! proxy, not a structural engineering calculation. Engineering cost starts
//! from the inventory's average design labor and applies the schedule and
//! complexity adjustment factors:
//!
//! ```text
//! steel_cost       = 3.50 $/lb x (M_req / M_avg) x W_avg
//! adjusted_hours   = H_avg x (1 + schedule + complexity)
//! engineering_cost = adjusted_hours x 150 $/h
//! custom_cost      = steel_cost + engineering_cost
//! ```
//!
//! Averages always run over the FULL inventory, not the filtered matches, so
//! the estimate does not move when the thresholds change which structures
//! qualify.
//!
//! ## Example
//!
//! ```rust
//! use poi_core::estimator::estimate;
//! use poi_core::inventory::{EmbeddedInventory, InventorySource};
//! use poi_core::requirements::RequirementSpec;
//!
//! let inventory = EmbeddedInventory::new().load().unwrap();
//! let estimate = estimate(&inventory, &RequirementSpec::default()).unwrap();
//!
//! assert!(estimate.total_usd > 0.0);
//! assert_eq!(
//!     estimate.total_usd,
//!     estimate.steel_cost_usd + estimate.engineering_cost_usd
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PoiError, PoiResult};
use crate::inventory::StructureRecord;
use crate::requirements::RequirementSpec;

/// Fabricated steel rate (USD per pound)
pub const STEEL_RATE_PER_LB: f64 = 3.50;

/// Engineering labor rate (USD per hour)
pub const ENGINEERING_RATE_PER_HOUR: f64 = 150.0;

/// Arithmetic means over the full inventory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Mean structure weight (lbs)
    pub avg_weight_lbs: f64,

    /// Mean bending moment capacity (Ft-Kips)
    pub avg_moment_ftkips: f64,

    /// Mean recorded design labor (hours)
    pub avg_engineering_hours: f64,
}

impl InventoryStats {
    /// Compute means over every record.
    ///
    /// Fails with `InsufficientData` on an empty inventory - an average over
    /// zero records is not a valid input to the estimate formula.
    pub fn from_inventory(inventory: &[StructureRecord]) -> PoiResult<Self> {
        if inventory.is_empty() {
            return Err(PoiError::insufficient_data(
                "Inventory is empty; averages are undefined",
            ));
        }

        let count = inventory.len() as f64;
        Ok(InventoryStats {
            avg_weight_lbs: inventory.iter().map(|r| r.weight_lbs).sum::<f64>() / count,
            avg_moment_ftkips: inventory.iter().map(|r| r.max_moment_ftkips).sum::<f64>() / count,
            avg_engineering_hours: inventory.iter().map(|r| r.engineering_hours).sum::<f64>()
                / count,
        })
    }
}

/// Full breakdown of one custom-structure estimate.
///
/// Derived per request from (inventory, spec); never persisted or cached.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stats": {
///     "avg_weight_lbs": 28856.0,
///     "avg_moment_ftkips": 7558.41,
///     "avg_engineering_hours": 409.0
///   },
///   "adjusted_hours": 409.0,
///   "steel_cost_usd": 33405.19,
///   "engineering_cost_usd": 61350.0,
///   "total_usd": 94755.19
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Inventory averages the estimate was calibrated against
    pub stats: InventoryStats,

    /// Engineering hours after schedule and complexity adjustment
    pub adjusted_hours: f64,

    /// Material cost: rate x capacity ratio x average weight (USD)
    pub steel_cost_usd: f64,

    /// Labor cost: adjusted hours x hourly rate (USD)
    pub engineering_cost_usd: f64,

    /// Total estimated custom cost (USD)
    pub total_usd: f64,
}

/// Estimate the cost of a custom-designed structure for this request.
///
/// Pure and deterministic: identical (inventory, spec) inputs always produce
/// the identical estimate. No partial results are returned on error paths.
///
/// # Errors
///
/// * `InvalidInput` - spec thresholds are negative or non-finite
/// * `InsufficientData` - inventory is empty
/// * `DivisionByZero` - inventory's average moment is zero
pub fn estimate(inventory: &[StructureRecord], spec: &RequirementSpec) -> PoiResult<CostEstimate> {
    spec.validate()?;

    let stats = InventoryStats::from_inventory(inventory)?;
    if stats.avg_moment_ftkips == 0.0 {
        return Err(PoiError::division_by_zero(
            "Average inventory moment is zero; capacity ratio is undefined",
        ));
    }

    let hours_factor = 1.0 + spec.schedule.hours_factor() + spec.complexity.hours_factor();
    let adjusted_hours = stats.avg_engineering_hours * hours_factor;

    let capacity_ratio = spec.required_moment_ftkips / stats.avg_moment_ftkips;
    let steel_cost_usd = STEEL_RATE_PER_LB * capacity_ratio * stats.avg_weight_lbs;
    let engineering_cost_usd = adjusted_hours * ENGINEERING_RATE_PER_HOUR;

    Ok(CostEstimate {
        stats,
        adjusted_hours,
        steel_cost_usd,
        engineering_cost_usd,
        total_usd: steel_cost_usd + engineering_cost_usd,
    })
}
