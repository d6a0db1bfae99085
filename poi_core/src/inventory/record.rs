//! Structure record definition and load-time validation.
//!
//! A `StructureRecord` is one existing deadend structure in the utility's
//! inventory: its capacity, size, recorded cost, and the design labor that
//! went into it. Records are read-only once loaded; nothing in the engine
//! mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{PoiError, PoiResult};

/// One existing structure in the inventory.
///
/// Numeric fields are all non-negative and the `id` is unique within a loaded
/// inventory; both invariants are enforced by `validate_inventory` at load
/// time.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "3/17A",
///   "height_ft": 105.0,
///   "max_moment_ftkips": 2959.91,
///   "weight_lbs": 15921.0,
///   "cost_usd": 49085.70,
///   "engineering_hours": 310.0,
///   "structure_type": "Deadend"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// Structure identifier (e.g., "3/17A", "128")
    pub id: String,

    /// Overall height (feet)
    pub height_ft: f64,

    /// Maximum bending moment capacity at the POI (Ft-Kips)
    pub max_moment_ftkips: f64,

    /// Total structure weight (lbs)
    pub weight_lbs: f64,

    /// Recorded quote or as-built cost (USD)
    pub cost_usd: f64,

    /// Design labor recorded for this structure (hours); feeds the custom
    /// estimate's inventory average
    pub engineering_hours: f64,

    /// Originating project name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Structure type (e.g., "Deadend")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_type: Option<String>,

    /// Voltage class (e.g., "230 kV")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_class: Option<String>,

    /// Date of the cost quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_date: Option<NaiveDate>,
}

impl std::fmt::Display for StructureRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1} ft, {:.2} Ft-Kips, ${:.2})",
            self.id, self.height_ft, self.max_moment_ftkips, self.cost_usd
        )
    }
}

/// Extract the leading numeric token from a possibly unit-suffixed field.
///
/// Inventory exports sometimes carry the unit in the cell ("2959.91 Ft-Kips");
/// the suffix is discarded and only the leading number is kept.
///
/// # Example
///
/// ```rust
/// use poi_core::inventory::parse_unit_suffixed;
///
/// assert_eq!(parse_unit_suffixed("1522.89 Ft-Kips"), Some(1522.89));
/// assert_eq!(parse_unit_suffixed("2454.22"), Some(2454.22));
/// assert_eq!(parse_unit_suffixed("n/a"), None);
/// ```
pub fn parse_unit_suffixed(raw: &str) -> Option<f64> {
    let token = raw.trim().split_whitespace().next()?;
    let token = token.trim_end_matches(|c: char| !(c.is_ascii_digit() || c == '.'));
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}

/// Check load-time invariants over a freshly parsed inventory.
///
/// Fails fast with `DataFormat` on the first violation (negative or
/// non-finite numeric, blank id, duplicate id). Row numbers are 1-based
/// record positions.
pub fn validate_inventory(records: &[StructureRecord]) -> PoiResult<()> {
    let mut seen_ids: Vec<&str> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;

        if record.id.trim().is_empty() {
            return Err(PoiError::data_format(
                row,
                "id",
                record.id.as_str(),
                "Structure id cannot be blank",
            ));
        }
        if seen_ids.contains(&record.id.as_str()) {
            return Err(PoiError::data_format(
                row,
                "id",
                record.id.as_str(),
                "Duplicate structure id",
            ));
        }
        seen_ids.push(&record.id);

        let numeric_fields = [
            ("height_ft", record.height_ft),
            ("max_moment_ftkips", record.max_moment_ftkips),
            ("weight_lbs", record.weight_lbs),
            ("cost_usd", record.cost_usd),
            ("engineering_hours", record.engineering_hours),
        ];
        for (field, value) in numeric_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PoiError::data_format(
                    row,
                    field,
                    value.to_string(),
                    "Numeric field must be non-negative and finite",
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(id: &str) -> StructureRecord {
        StructureRecord {
            id: id.to_string(),
            height_ft: 100.0,
            max_moment_ftkips: 3000.0,
            weight_lbs: 15000.0,
            cost_usd: 40000.0,
            engineering_hours: 300.0,
            project: None,
            structure_type: Some("Deadend".to_string()),
            voltage_class: None,
            quote_date: None,
        }
    }

    #[test]
    fn test_parse_unit_suffixed_with_suffix() {
        assert_eq!(parse_unit_suffixed("1522.89 Ft-Kips"), Some(1522.89));
        assert_eq!(parse_unit_suffixed("2959.91 Ft-Kips"), Some(2959.91));
    }

    #[test]
    fn test_parse_unit_suffixed_plain_number() {
        assert_eq!(parse_unit_suffixed("2454.22"), Some(2454.22));
        assert_eq!(parse_unit_suffixed("  90 "), Some(90.0));
    }

    #[test]
    fn test_parse_unit_suffixed_attached_suffix() {
        assert_eq!(parse_unit_suffixed("3708Ft-Kips"), Some(3708.0));
    }

    #[test]
    fn test_parse_unit_suffixed_rejects_non_numeric() {
        assert_eq!(parse_unit_suffixed(""), None);
        assert_eq!(parse_unit_suffixed("   "), None);
        assert_eq!(parse_unit_suffixed("n/a"), None);
        assert_eq!(parse_unit_suffixed("Ft-Kips"), None);
    }

    #[test]
    fn test_validate_accepts_clean_inventory() {
        let records = vec![test_record("A"), test_record("B")];
        assert!(validate_inventory(&records).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let records = vec![test_record("A"), test_record("A")];
        let error = validate_inventory(&records).unwrap_err();
        assert_eq!(error.error_code(), "DATA_FORMAT");
        assert!(error.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_validate_rejects_negative_numeric() {
        let mut bad = test_record("A");
        bad.weight_lbs = -100.0;
        let error = validate_inventory(&[bad]).unwrap_err();
        assert_eq!(error.error_code(), "DATA_FORMAT");
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let mut bad = test_record("A");
        bad.id = "  ".to_string();
        assert!(validate_inventory(&[bad]).is_err());
    }

    #[test]
    fn test_record_serialization_skips_empty_metadata() {
        let record = test_record("3/17A");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("voltage_class"));
        assert!(json.contains("Deadend"));

        let roundtrip: StructureRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, roundtrip);
    }
}
