//! ABC classification by cumulative value.
//!
//! Model:
//! - Sort projected items descending by the configured criterion (stable, so
//!   ties keep input order).
//! - Walk the sorted list accumulating annual value. Class boundaries are
//!   always expressed as a share of total *value*, even when sorting by
//!   quantity.
//! - An item joins the current class while the cumulative share *before* it is
//!   below that class's bound, so the item that reaches or crosses a bound is
//!   the last member of the class it completes.
//! - Classes only advance (A -> B -> C), never go back.

use serde::{Deserialize, Serialize};

use forgeabc_core::{Money, Percentage, Quantity};

use crate::config::{AnalysisConfig, PrimaryCriteria};
use crate::item::InventoryItem;
use crate::projection::ProjectedItem;

/// ABC class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    pub const ALL: [AbcClass; 3] = [AbcClass::A, AbcClass::B, AbcClass::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        }
    }
}

impl core::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A projected item with its class assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub annual_consumption: Quantity,
    pub annual_value: Money,
    pub classification: AbcClass,
}

impl AnalyzedItem {
    fn from_projected(projected: ProjectedItem, classification: AbcClass) -> Self {
        Self {
            item: projected.item,
            annual_consumption: projected.annual_consumption,
            annual_value: projected.annual_value,
            classification,
        }
    }

    /// Estimated annual turns (`annual_consumption / stock`), if stock is non-zero.
    pub fn turnover(&self) -> Option<rust_decimal::Decimal> {
        self.annual_consumption.ratio_to(self.item.stock)
    }
}

/// Output of the classifier; each list keeps sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub class_a: Vec<AnalyzedItem>,
    pub class_b: Vec<AnalyzedItem>,
    pub class_c: Vec<AnalyzedItem>,
    /// Sum of annual value over every classified item.
    pub total_value: Money,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.class_a.len() + self.class_b.len() + self.class_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: AnalyzedItem) {
        match item.classification {
            AbcClass::A => self.class_a.push(item),
            AbcClass::B => self.class_b.push(item),
            AbcClass::C => self.class_c.push(item),
        }
    }
}

/// Sort and classify projected items.
pub fn classify(projected: Vec<ProjectedItem>, config: &AnalysisConfig) -> Classification {
    let total_value: Money = projected.iter().map(|p| p.annual_value).sum();

    let mut sorted = projected;
    match config.primary_criteria {
        PrimaryCriteria::Revenue => sorted.sort_by(|a, b| b.annual_value.cmp(&a.annual_value)),
        PrimaryCriteria::Quantity => {
            sorted.sort_by(|a, b| b.annual_consumption.cmp(&a.annual_consumption))
        }
    }

    let mut out = Classification {
        total_value,
        ..Classification::default()
    };

    // Zero total: no meaningful shares, everything is C.
    if total_value.is_zero() {
        for p in sorted {
            out.push(AnalyzedItem::from_projected(p, AbcClass::C));
        }
        return out;
    }

    let mut cumulative = Money::ZERO;
    let mut phase = AbcClass::A;
    for p in sorted {
        let share_before = Percentage::of(cumulative, total_value);
        phase = phase.max(class_for_share(share_before, config));
        cumulative = cumulative + p.annual_value;
        out.push(AnalyzedItem::from_projected(p, phase));
    }

    out
}

fn class_for_share(share_before: Percentage, config: &AnalysisConfig) -> AbcClass {
    if share_before < config.class_a_threshold {
        AbcClass::A
    } else if share_before < config.class_b_upper_bound() {
        AbcClass::B
    } else {
        AbcClass::C
    }
}
