//! Command-line driver: load items and configuration from JSON, run the ABC
//! analysis and print the result as JSON on stdout.
//!
//! Usage: `forgeabc-report <items.json> [config.json]`
//!
//! The configuration path may also come from `FORGEABC_CONFIG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;

use forgeabc_inventory::{
    AnalysisConfigPatch, AnalysisResult, CategoryEntry, InventoryItem, analyze_inventory,
    generate_category_overview, validate_config,
};

const CONFIG_ENV: &str = "FORGEABC_CONFIG";

#[derive(Debug, Serialize)]
struct Report {
    result: AnalysisResult,
    category_overview: [CategoryEntry; 3],
    config_warnings: Vec<String>,
}

fn main() {
    forgeabc_observability::init();

    if let Err(e) = run() {
        tracing::error!("report failed: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let Some(items_path) = args.next().map(PathBuf::from) else {
        bail!("usage: forgeabc-report <items.json> [config.json]");
    };
    let config_path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let items = load_items(&items_path)?;
    let patch = match &config_path {
        Some(path) => load_patch(path)?,
        None => AnalysisConfigPatch::default(),
    };

    let report = build_report(&items, &patch);

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report).context("failed to write report")?;
    println!();
    Ok(())
}

fn load_items(path: &Path) -> anyhow::Result<Vec<InventoryItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items from {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("invalid items file {}", path.display()))
}

fn load_patch(path: &Path) -> anyhow::Result<AnalysisConfigPatch> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration from {}", path.display()))?;
    parse_patch(&raw).with_context(|| format!("invalid configuration file {}", path.display()))
}

fn parse_items(raw: &str) -> anyhow::Result<Vec<InventoryItem>> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_patch(raw: &str) -> anyhow::Result<AnalysisConfigPatch> {
    Ok(serde_json::from_str(raw)?)
}

fn build_report(items: &[InventoryItem], patch: &AnalysisConfigPatch) -> Report {
    // Invalid configurations still run; the caller decides what to do with warnings.
    let config_warnings = validate_config(patch);
    for warning in &config_warnings {
        tracing::warn!(%warning, "questionable analysis configuration");
    }

    let result = analyze_inventory(items, patch);
    tracing::info!(
        analyzed = result.total_items_analyzed,
        total_value = %result.total_value,
        recommendations = result.recommendations.len(),
        "analysis complete"
    );

    let category_overview = generate_category_overview(&result);
    Report {
        result,
        category_overview,
        config_warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"[
        { "id": "flour", "name": "Flour", "category": "bakery", "type": "MEASURABLE", "stock": 100, "unit_cost": "50" },
        { "id": "eggs", "name": "Eggs", "category": "bakery", "type": "COUNTABLE", "stock": 50, "unit_cost": 10 },
        { "id": "cake", "name": "Cake", "category": "desserts", "type": "ELABORATED", "stock": 0, "unit_cost": 30 }
    ]"#;

    #[test]
    fn report_includes_result_overview_and_warnings() {
        let items = parse_items(ITEMS).unwrap();
        let patch = parse_patch(r#"{ "class_a_threshold": 90, "class_b_threshold": 20 }"#).unwrap();

        let report = build_report(&items, &patch);

        assert_eq!(report.result.total_items_analyzed, 2);
        assert_eq!(report.category_overview.len(), 3);
        assert_eq!(report.config_warnings.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["category_overview"][0]["class"], "A");
    }

    #[test]
    fn malformed_items_are_reported() {
        let err = parse_items(r#"[{ "id": "x" }]"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn unknown_configuration_fields_are_rejected() {
        assert!(parse_patch(r#"{ "class_z_threshold": 5 }"#).is_err());
    }
}
