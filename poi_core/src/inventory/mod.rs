//! # Inventory Store
//!
//! The read-only table of existing structures the matcher and estimator work
//! from. Sources are pluggable behind the [`InventorySource`] trait so the
//! engine never cares whether records came from the built-in table or an
//! external delimited export.
//!
//! ## Available Sources
//!
//! - [`EmbeddedInventory`] - the built-in ten-structure deadend table
//! - [`CsvInventory`] - comma-delimited file with a header row
//!
//! ## Example
//!
//! ```rust
//! use poi_core::inventory::{EmbeddedInventory, InventorySource};
//!
//! let records = EmbeddedInventory::new().load().unwrap();
//! assert_eq!(records.len(), 10);
//! ```

pub mod csv_file;
pub mod embedded;
pub mod record;

pub use csv_file::CsvInventory;
pub use embedded::EmbeddedInventory;
pub use record::{parse_unit_suffixed, validate_inventory, StructureRecord};

use crate::errors::PoiResult;

/// A pluggable origin for the structure inventory.
///
/// Loading is idempotent and side-effect-free beyond returning the parsed
/// records: every implementation validates the load-time invariants
/// (non-negative numerics, unique ids) and fails fast on malformed data
/// rather than dropping records, since silent drops would change the
/// estimator's averages.
pub trait InventorySource {
    /// Load and validate the full record set.
    fn load(&self) -> PoiResult<Vec<StructureRecord>>;
}
