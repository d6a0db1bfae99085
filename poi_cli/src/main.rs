//! # POI Analyzer CLI
//!
//! Terminal front end for the POI structure reuse engine. Prompts for the
//! design requirements, runs the analysis, and prints the match table, cost
//! comparison, and recommendation, followed by the full report as JSON.
//!
//! Pass a CSV inventory path as the first argument to analyze an external
//! export; otherwise the built-in deadend table is used.

use std::io::{self, BufRead, Write};

use poi_core::analysis::analyze;
use poi_core::inventory::{CsvInventory, EmbeddedInventory, InventorySource, StructureRecord};
use poi_core::recommend::Verdict;
use poi_core::requirements::{Complexity, RequirementSpec, Schedule, SortKey};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_index(prompt: &str, count: usize, default: usize) -> usize {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => n - 1,
        _ => default,
    }
}

fn load_inventory() -> poi_core::PoiResult<Vec<StructureRecord>> {
    match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading inventory from: {}", path);
            CsvInventory::new(path).load()
        }
        None => {
            println!("Using built-in deadend structure inventory.");
            EmbeddedInventory::new().load()
        }
    }
}

fn print_match_table(matches: &[StructureRecord]) {
    println!(
        "  {:<8} {:>10} {:>16} {:>12} {:>12}",
        "Str #", "Height ft", "Moment Ft-Kips", "Weight lbs", "Cost $"
    );
    for record in matches {
        println!(
            "  {:<8} {:>10.1} {:>16.2} {:>12.0} {:>12.2}",
            record.id,
            record.height_ft,
            record.max_moment_ftkips,
            record.weight_lbs,
            record.cost_usd
        );
    }
}

fn verdict_icon(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::RecommendCustom => "[CUSTOM]",
        Verdict::RecommendReuse => "[REUSE]",
        Verdict::NoReusableOption => "[NO MATCH]",
    }
}

fn main() {
    println!("POI Structure Analyzer");
    println!("======================================================");
    println!("Compare the cost of reusing an existing deadend");
    println!("structure versus designing a custom one.");
    println!();

    let inventory = match load_inventory() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };
    println!("Loaded {} structure(s).", inventory.len());
    println!();

    let required_moment_ftkips =
        prompt_f64("Required bending moment (Ft-Kips) [2500.0]: ", 2500.0);
    let required_height_ft = prompt_f64("Required structure height (ft) [90.0]: ", 90.0);

    let schedule = Schedule::ALL[prompt_index(
        "Project schedule - 1) Slow  2) Moderate  3) Expedited [2]: ",
        Schedule::ALL.len(),
        1,
    )];
    let complexity = Complexity::ALL[prompt_index(
        "Project complexity - 1) Low  2) Medium  3) High [2]: ",
        Complexity::ALL.len(),
        1,
    )];
    let sort_by = SortKey::ALL[prompt_index(
        "Sort reusable structures by - 1) Cost  2) Weight  3) Height [1]: ",
        SortKey::ALL.len(),
        0,
    )];

    let spec = RequirementSpec {
        required_moment_ftkips,
        required_height_ft,
        schedule,
        complexity,
        sort_by,
    };

    match analyze(&inventory, &spec) {
        Ok(report) => {
            let rec = &report.recommendation;

            println!();
            println!("======================================================");
            println!("  REUSABLE STRUCTURES THAT MEET REQUIREMENTS");
            println!("======================================================");
            println!();
            println!(
                "Found {} structure(s) that meet or exceed requirements (sorted by {}).",
                rec.matches.len(),
                spec.sort_by
            );
            if !rec.matches.is_empty() {
                println!();
                print_match_table(&rec.matches);
            }

            println!();
            println!("Cost comparison:");
            match rec.lowest_match_cost_usd {
                Some(lowest) => println!("  Lowest reuse structure cost: ${:>12.2}", lowest),
                None => println!("  Lowest reuse structure cost:          N/A"),
            }
            println!(
                "  Estimated custom cost:       ${:>12.2}",
                rec.custom_cost_usd
            );
            println!(
                "    Steel:       ${:>12.2}  ({:.0} lbs avg at capacity ratio)",
                report.estimate.steel_cost_usd, report.estimate.stats.avg_weight_lbs
            );
            println!(
                "    Engineering: ${:>12.2}  ({:.1} h adjusted for {} / {})",
                report.estimate.engineering_cost_usd,
                report.estimate.adjusted_hours,
                spec.schedule,
                spec.complexity
            );

            println!();
            println!("======================================================");
            println!("  RESULT: {} {}", verdict_icon(rec.verdict), rec.verdict);
            println!("  {}", rec.verdict.description());
            println!("======================================================");

            if let Some(best) = &rec.recommended {
                println!();
                println!("Recommended structure:");
                println!("  Structure ID:    {}", best.id);
                println!("  Height:          {:.1} ft", best.height_ft);
                println!("  Moment capacity: {:.2} Ft-Kips", best.max_moment_ftkips);
                println!("  Cost:            ${:.2}", best.cost_usd);
            }

            println!();
            println!("Cost chart series:");
            for bar in report.recommendation.cost_series() {
                println!("  {:<14} ${:>12.2}", bar.label, bar.cost_usd);
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
