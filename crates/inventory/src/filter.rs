//! Inclusion rules applied before projection.

use std::collections::HashSet;

use forgeabc_core::{ItemId, Money};

use crate::config::AnalysisConfig;
use crate::item::InventoryItem;

/// An input item that passed the inclusion rules, with its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredItem<'a> {
    pub item: &'a InventoryItem,
    /// `stock * unit_cost`.
    pub raw_value: Money,
}

/// Apply the inclusion rules, preserving input order.
///
/// Negative stock and zero unit cost are not rejected on their own; they pass
/// through with whatever raw value they imply. `min_value` is a floor only
/// when positive: zero (the default) or below means no floor, so a negative
/// raw value admitted by `include_inactive` reaches the result.
/// Items repeating an id already seen are dropped so that ids stay unique.
pub fn filter_items<'a>(items: &'a [InventoryItem], config: &AnalysisConfig) -> Vec<FilteredItem<'a>> {
    let mut seen: HashSet<&ItemId> = HashSet::with_capacity(items.len());
    let mut kept = Vec::with_capacity(items.len());

    for item in items {
        if !config.include_inactive && !item.stock.is_positive() {
            continue;
        }
        if config.exclude_categories.iter().any(|c| c == &item.category) {
            continue;
        }

        let raw_value = item.raw_value();
        if config.min_value.is_positive() && raw_value < config.min_value {
            continue;
        }

        if !seen.insert(&item.id) {
            tracing::warn!(item_id = %item.id, "duplicate item id; keeping first occurrence");
            continue;
        }

        kept.push(FilteredItem { item, raw_value });
    }

    kept
}
