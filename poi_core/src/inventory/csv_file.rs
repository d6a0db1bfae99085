//! Delimited-file inventory source.
//!
//! Loads structure records from a comma-delimited export with a header row.
//! Column lookup is by header name (case-insensitive), so column order does
//! not matter and extra columns are ignored. Both the canonical snake_case
//! names and the spreadsheet display headers are recognized:
//!
//! | Field | Accepted headers |
//! |---|---|
//! | id | `id`, `structure_id`, `Str #` |
//! | height_ft | `height_ft`, `Height (Feet)`, `height` |
//! | max_moment_ftkips | `max_moment_ftkips`, `Maximum Bending Moment (Ft-Kips)`, `moment` |
//! | weight_lbs | `weight_lbs`, `Weight (lbs)`, `weight` |
//! | cost_usd | `cost_usd`, `Cost` |
//! | engineering_hours | `engineering_hours`, `Labor Hours`, `hours` |
//!
//! Optional metadata columns: `project`, `structure_type` (or `Type`),
//! `voltage_class` (or `Voltage`), `quote_date` (ISO `YYYY-MM-DD`).
//!
//! The moment column tolerates a unit suffix in the cell
//! ("2959.91 Ft-Kips"); all other numeric columns must be plain numbers.
//! Any malformed required field fails the whole load - silently dropping
//! rows would shift the estimator's inventory averages.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::errors::{PoiError, PoiResult};
use crate::inventory::{parse_unit_suffixed, validate_inventory, InventorySource, StructureRecord};

/// Inventory source backed by a comma-delimited file.
#[derive(Debug, Clone)]
pub struct CsvInventory {
    path: PathBuf,
}

impl CsvInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvInventory { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventorySource for CsvInventory {
    fn load(&self) -> PoiResult<Vec<StructureRecord>> {
        let records = read_csv(&self.path)?;
        validate_inventory(&records)?;
        Ok(records)
    }
}

fn read_csv(path: &Path) -> PoiResult<Vec<StructureRecord>> {
    let display_path = path.display().to_string();

    let file = File::open(path).map_err(|e| {
        PoiError::file_error("open", display_path.as_str(), format!("Failed to open CSV: {}", e))
    })?;

    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| PoiError::file_error("read", display_path.as_str(), "CSV file is empty"))?
        .map_err(|e| {
            PoiError::file_error("read", display_path.as_str(), format!("Failed to read header: {}", e))
        })?;

    let headers: Vec<&str> = header_line.split(',').collect();
    let col_index = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
    };
    let required = |names: &[&str]| -> PoiResult<usize> {
        col_index(names).ok_or_else(|| {
            PoiError::file_error(
                "parse",
                display_path.as_str(),
                format!("Missing required column '{}'", names[0]),
            )
        })
    };

    // Required column indices
    let id_idx = required(&["id", "structure_id", "str #"])?;
    let height_idx = required(&["height_ft", "height (feet)", "height"])?;
    let moment_idx = required(&[
        "max_moment_ftkips",
        "maximum bending moment (ft-kips)",
        "moment",
    ])?;
    let weight_idx = required(&["weight_lbs", "weight (lbs)", "weight"])?;
    let cost_idx = required(&["cost_usd", "cost"])?;
    let hours_idx = required(&["engineering_hours", "labor hours", "hours"])?;

    // Optional metadata column indices
    let project_idx = col_index(&["project", "project name"]);
    let type_idx = col_index(&["structure_type", "type"]);
    let voltage_idx = col_index(&["voltage_class", "voltage"]);
    let date_idx = col_index(&["quote_date", "quote date"]);

    let mut records = Vec::new();
    let mut line_num = 1;

    for line_result in lines {
        line_num += 1;
        let line = line_result.map_err(|e| {
            PoiError::file_error(
                "read",
                display_path.as_str(),
                format!("Failed to read line {}: {}", line_num, e),
            )
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let cell = |idx: usize| fields.get(idx).map(|f| f.trim()).unwrap_or("");

        let parse_number = |idx: usize, field: &str| -> PoiResult<f64> {
            let raw = cell(idx);
            raw.parse().map_err(|_| {
                PoiError::data_format(line_num, field, raw, "Expected a plain numeric value")
            })
        };
        let optional_text = |idx: Option<usize>| -> Option<String> {
            idx.map(cell)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };

        let id = cell(id_idx);
        if id.is_empty() {
            return Err(PoiError::data_format(
                line_num,
                "id",
                "",
                "Structure id cannot be blank",
            ));
        }

        let moment_raw = cell(moment_idx);
        let max_moment_ftkips = parse_unit_suffixed(moment_raw).ok_or_else(|| {
            PoiError::data_format(
                line_num,
                "max_moment_ftkips",
                moment_raw,
                "Expected a number, optionally followed by a unit suffix",
            )
        })?;

        let quote_date = match date_idx.map(cell).filter(|s| !s.is_empty()) {
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                PoiError::data_format(line_num, "quote_date", raw, "Expected ISO date YYYY-MM-DD")
            })?),
            None => None,
        };

        records.push(StructureRecord {
            id: id.to_string(),
            height_ft: parse_number(height_idx, "height_ft")?,
            max_moment_ftkips,
            weight_lbs: parse_number(weight_idx, "weight_lbs")?,
            cost_usd: parse_number(cost_idx, "cost_usd")?,
            engineering_hours: parse_number(hours_idx, "engineering_hours")?,
            project: optional_text(project_idx),
            structure_type: optional_text(type_idx),
            voltage_class: optional_text(voltage_idx),
            quote_date,
        });
    }

    Ok(records)
}
