//! # poi_core - POI Structure Reuse Analysis Engine
//!
//! `poi_core` decides whether a transmission-line point-of-interconnection
//! (POI) support structure should be reused from an existing inventory or
//! custom-designed. Given engineering requirements (minimum bending moment,
//! minimum height, schedule, complexity) it searches the inventory for
//! matches, computes a parametric estimate for a custom structure, and
//! recommends the cheaper option.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an immutable inventory and a
//!   per-request spec; nothing is cached or mutated
//! - **JSON-First**: All public types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Pluggable Inventory**: Sources sit behind one `load()` contract
//!
//! ## Quick Start
//!
//! ```rust
//! use poi_core::analysis::analyze;
//! use poi_core::inventory::{EmbeddedInventory, InventorySource};
//! use poi_core::requirements::RequirementSpec;
//!
//! let inventory = EmbeddedInventory::new().load().unwrap();
//! let report = analyze(&inventory, &RequirementSpec::default()).unwrap();
//!
//! // Serialize the full report for display or transmission
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`inventory`] - Structure records and pluggable inventory sources
//! - [`requirements`] - Per-request requirement spec and adjustment enums
//! - [`matcher`] - Threshold filter and stable sort
//! - [`estimator`] - Parametric custom-cost estimate
//! - [`recommend`] - Reuse-vs-custom verdict and chart series
//! - [`analysis`] - One-call pipeline for presentation adapters
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod errors;
pub mod estimator;
pub mod inventory;
pub mod matcher;
pub mod recommend;
pub mod requirements;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, StructureAnalysis};
pub use errors::{PoiError, PoiResult};
pub use estimator::CostEstimate;
pub use inventory::{CsvInventory, EmbeddedInventory, InventorySource, StructureRecord};
pub use recommend::{RecommendationResult, Verdict};
pub use requirements::{Complexity, RequirementSpec, Schedule, SortKey};
