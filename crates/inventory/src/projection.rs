//! Annualized consumption/value projection.

use serde::{Deserialize, Serialize};

use forgeabc_core::{Money, Quantity};

use crate::config::ProjectionMultipliers;
use crate::filter::FilteredItem;
use crate::item::InventoryItem;

/// An item with its annualized figures, not yet classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    /// `stock * multiplier[type]`.
    pub annual_consumption: Quantity,
    /// `annual_consumption * unit_cost`.
    pub annual_value: Money,
}

/// Project one filtered item.
///
/// Negative stock propagates to negative consumption and value; nothing is
/// clamped so data-quality issues stay visible downstream.
pub fn project(filtered: &FilteredItem<'_>, multipliers: &ProjectionMultipliers) -> ProjectedItem {
    let item = filtered.item;
    let annual_consumption = item.stock * multipliers.for_type(item.item_type);
    let annual_value = annual_consumption * item.unit_cost;

    ProjectedItem {
        item: item.clone(),
        annual_consumption,
        annual_value,
    }
}

/// Project every filtered item, preserving order.
pub fn project_all(filtered: &[FilteredItem<'_>], multipliers: &ProjectionMultipliers) -> Vec<ProjectedItem> {
    filtered.iter().map(|f| project(f, multipliers)).collect()
}
