//! Analysis entry point: filter -> project -> classify -> summarize/recommend.
//!
//! Everything here is a pure function of `(items, configuration)`; there is no
//! shared state between invocations, so calls are safe to run concurrently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgeabc_core::Money;

use crate::classifier::{AnalyzedItem, classify};
use crate::config::{AnalysisConfig, AnalysisConfigPatch};
use crate::filter::filter_items;
use crate::item::InventoryItem;
use crate::projection::project_all;
use crate::recommendation::{Recommendation, recommend};
use crate::summary::{Summary, summarize};

/// Immutable output of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub generated_at: DateTime<Utc>,
    /// Fully resolved configuration the run used.
    pub config: AnalysisConfig,
    /// Item count after filtering.
    pub total_items_analyzed: usize,
    /// Sum of annual value over every analyzed item.
    pub total_value: Money,
    pub class_a: Vec<AnalyzedItem>,
    pub class_b: Vec<AnalyzedItem>,
    pub class_c: Vec<AnalyzedItem>,
    pub summary: Summary,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    /// All analyzed items, A then B then C, each in sorted order.
    pub fn items(&self) -> impl Iterator<Item = &AnalyzedItem> {
        self.class_a.iter().chain(&self.class_b).chain(&self.class_c)
    }
}

/// Run an analysis stamped with the current time.
pub fn analyze_inventory(items: &[InventoryItem], patch: &AnalysisConfigPatch) -> AnalysisResult {
    analyze_inventory_at(items, patch, Utc::now())
}

/// Run an analysis with an explicit timestamp (deterministic for tests/replays).
#[tracing::instrument(skip_all, fields(items = items.len()))]
pub fn analyze_inventory_at(
    items: &[InventoryItem],
    patch: &AnalysisConfigPatch,
    generated_at: DateTime<Utc>,
) -> AnalysisResult {
    let config = AnalysisConfig::resolve(patch);

    let filtered = filter_items(items, &config);
    tracing::debug!(kept = filtered.len(), dropped = items.len() - filtered.len(), "filtered items");

    let projected = project_all(&filtered, &config.multipliers);
    let classification = classify(projected, &config);
    tracing::debug!(
        class_a = classification.class_a.len(),
        class_b = classification.class_b.len(),
        class_c = classification.class_c.len(),
        total_value = %classification.total_value,
        "classified items"
    );

    let summary = summarize(
        &classification.class_a,
        &classification.class_b,
        &classification.class_c,
        classification.total_value,
    );
    let recommendations = recommend(&classification, &config.recommendations);

    AnalysisResult {
        generated_at,
        total_items_analyzed: classification.len(),
        total_value: classification.total_value,
        class_a: classification.class_a,
        class_b: classification.class_b,
        class_c: classification.class_c,
        summary,
        recommendations,
        config,
    }
}
