//! Built-in deadend structure inventory.
//!
//! Quote records for ten existing deadend structures from prior transmission
//! projects. This is the default inventory when no external file is supplied;
//! it is initialized lazily and never mutated.

use once_cell::sync::Lazy;

use crate::errors::PoiResult;
use crate::inventory::{validate_inventory, InventorySource, StructureRecord};

fn deadend(
    id: &str,
    height_ft: f64,
    max_moment_ftkips: f64,
    weight_lbs: f64,
    cost_usd: f64,
    engineering_hours: f64,
) -> StructureRecord {
    StructureRecord {
        id: id.to_string(),
        height_ft,
        max_moment_ftkips,
        weight_lbs,
        cost_usd,
        engineering_hours,
        project: None,
        structure_type: Some("Deadend".to_string()),
        voltage_class: None,
        quote_date: None,
    }
}

/// The built-in structure table, in original quote order.
static DEADEND_INVENTORY: Lazy<Vec<StructureRecord>> = Lazy::new(|| {
    vec![
        deadend("3/17A", 105.0, 2959.91, 15921.0, 49085.70, 310.0),
        deadend("3/17H", 100.0, 2794.86, 13637.0, 45381.59, 295.0),
        deadend("26/2B", 90.0, 4962.98, 17294.0, 54159.58, 330.0),
        deadend("26/2C", 90.0, 3708.0, 14164.0, 44840.39, 300.0),
        deadend("26/6A", 90.0, 3328.93, 13346.0, 42854.39, 285.0),
        deadend("26/6B", 90.0, 3073.23, 12775.0, 41070.80, 280.0),
        deadend("71", 120.5, 12375.0, 44377.0, 113870.60, 520.0),
        deadend("72", 120.6, 12375.0, 44377.0, 113870.60, 520.0),
        deadend("128", 135.5, 14624.1, 54790.0, 139692.07, 610.0),
        deadend("53", 140.6, 15382.1, 57879.0, 146899.27, 640.0),
    ]
});

/// Inventory source backed by the built-in deadend table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedInventory;

impl EmbeddedInventory {
    pub fn new() -> Self {
        EmbeddedInventory
    }
}

impl InventorySource for EmbeddedInventory {
    fn load(&self) -> PoiResult<Vec<StructureRecord>> {
        let records = DEADEND_INVENTORY.clone();
        validate_inventory(&records)?;
        Ok(records)
    }
}
