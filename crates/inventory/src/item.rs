use serde::{Deserialize, Serialize};

use forgeabc_core::{ItemId, Money, Quantity};

/// How an item is stocked; drives the annualization multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    /// Bulk stock measured by weight/volume (e.g. raw ingredients).
    Measurable,
    /// Discrete units.
    Countable,
    /// Finished goods produced in-house.
    Elaborated,
}

/// Packaging information, carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packaging {
    pub size: Quantity,
    pub unit: String,
}

/// Raw inventory item as supplied by the inventory store.
///
/// The engine never mutates it. `stock` may be zero or negative (data-entry
/// anomalies are surfaced, not rejected) and `unit_cost` may be zero. Missing,
/// null or malformed numbers in either field read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, deserialize_with = "Quantity::deserialize_lenient")]
    pub stock: Quantity,
    #[serde(default, deserialize_with = "Money::deserialize_lenient")]
    pub unit_cost: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<Packaging>,
    #[serde(default)]
    pub requires_production: bool,
    #[serde(default)]
    pub auto_calculate_cost: bool,
}

impl InventoryItem {
    /// Minimal item with no packaging and both flags unset.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        item_type: ItemType,
        stock: Quantity,
        unit_cost: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            item_type,
            stock,
            unit_cost,
            packaging: None,
            requires_production: false,
            auto_calculate_cost: false,
        }
    }

    pub fn with_packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    /// `stock * unit_cost`, used only for pre-filtering.
    pub fn raw_value(&self) -> Money {
        self.stock * self.unit_cost
    }
}
