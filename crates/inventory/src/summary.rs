//! Per-class aggregates and the denormalized category overview.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use forgeabc_core::{Money, Percentage};

use crate::analysis::AnalysisResult;
use crate::classifier::{AbcClass, AnalyzedItem};

/// Aggregates for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub item_count: usize,
    pub total_value: Money,
    pub percentage_of_value: Percentage,
    pub percentage_of_items: Percentage,
    pub average_value: Money,
    pub strategy: String,
}

/// Per-class aggregates; always holds all three classes.
pub type Summary = BTreeMap<AbcClass, ClassSummary>;

/// Fixed management strategy per class.
pub fn strategy_for(class: AbcClass) -> &'static str {
    match class {
        AbcClass::A => "Tight control: frequent review, accurate records and close supplier follow-up",
        AbcClass::B => "Moderate control: periodic review with standard reorder policies",
        AbcClass::C => "Simplified control: bulk ordering and minimal oversight",
    }
}

/// Build the per-class aggregates.
pub fn summarize(
    class_a: &[AnalyzedItem],
    class_b: &[AnalyzedItem],
    class_c: &[AnalyzedItem],
    grand_total: Money,
) -> Summary {
    let total_items = class_a.len() + class_b.len() + class_c.len();

    [(AbcClass::A, class_a), (AbcClass::B, class_b), (AbcClass::C, class_c)]
        .into_iter()
        .map(|(class, items)| {
            let total_value: Money = items.iter().map(|i| i.annual_value).sum();
            let summary = ClassSummary {
                item_count: items.len(),
                total_value,
                percentage_of_value: Percentage::of(total_value, grand_total),
                percentage_of_items: Percentage::of_counts(items.len(), total_items),
                average_value: total_value.average_over(items.len()),
                strategy: strategy_for(class).to_string(),
            };
            (class, summary)
        })
        .collect()
}

/// One row of the category overview, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub class: AbcClass,
    pub title: String,
    pub description: String,
    /// Display color token.
    pub color: String,
    pub item_count: usize,
    pub value_percentage: Percentage,
    pub revenue: Money,
    pub strategy: String,
}

fn presentation(class: AbcClass) -> (&'static str, &'static str, &'static str) {
    match class {
        AbcClass::A => (
            "Class A - High value",
            "Few items that carry most of the inventory value",
            "red",
        ),
        AbcClass::B => (
            "Class B - Medium value",
            "Intermediate items with moderate value contribution",
            "amber",
        ),
        AbcClass::C => (
            "Class C - Low value",
            "Many items with a small share of total value",
            "green",
        ),
    }
}

/// Flatten a result's summary into exactly three overview entries (A, B, C).
pub fn generate_category_overview(result: &AnalysisResult) -> [CategoryEntry; 3] {
    AbcClass::ALL.map(|class| {
        let (title, description, color) = presentation(class);
        let (item_count, value_percentage, revenue, strategy) = match result.summary.get(&class) {
            Some(s) => (s.item_count, s.percentage_of_value, s.total_value, s.strategy.clone()),
            None => (0, Percentage::ZERO, Money::ZERO, strategy_for(class).to_string()),
        };
        CategoryEntry {
            class,
            title: title.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            item_count,
            value_percentage,
            revenue,
            strategy,
        }
    })
}
