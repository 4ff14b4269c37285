//! Business recommendations derived from a classification.
//!
//! Rules are evaluated independently and any subset may fire. Output order is
//! fixed: stock optimization, supplier consolidation, low rotation review.
//! Recommendations are informational; nothing here touches item state.

use serde::{Deserialize, Serialize};

use forgeabc_core::{ItemId, Money};

use crate::classifier::{AnalyzedItem, Classification};
use crate::config::RecommendationSettings;

/// Per-item action lines listed before the rest are summarized.
/// `affected_items` always carries the full list.
pub const MAX_LISTED_ITEMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    StockOptimization,
    SupplierConsolidation,
    LowRotationReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Estimated savings; may be zero.
    pub potential_savings: Money,
    pub action_items: Vec<String>,
    pub affected_items: Vec<ItemId>,
}

/// Evaluate every rule against a classification.
pub fn recommend(classification: &Classification, settings: &RecommendationSettings) -> Vec<Recommendation> {
    [
        stock_optimization(classification, settings),
        supplier_consolidation(classification, settings),
        low_rotation_review(classification, settings),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn total_value(items: &[AnalyzedItem]) -> Money {
    items.iter().map(|i| i.annual_value).sum()
}

fn ids(items: &[AnalyzedItem]) -> Vec<ItemId> {
    items.iter().map(|i| i.item.id.clone()).collect()
}

fn stock_optimization(c: &Classification, settings: &RecommendationSettings) -> Option<Recommendation> {
    if c.class_a.is_empty() {
        return None;
    }

    let class_a_value = total_value(&c.class_a);
    Some(Recommendation {
        kind: RecommendationKind::StockOptimization,
        priority: Priority::High,
        title: "Optimize Class A stock levels".to_string(),
        description: format!(
            "{} Class A item(s) account for {} of annual value; tighter control reduces carrying cost",
            c.class_a.len(),
            class_a_value
        ),
        potential_savings: class_a_value * settings.stock_optimization_savings_rate,
        action_items: vec![
            "Tighten reorder points and safety stock for Class A items".to_string(),
            "Negotiate pricing and delivery terms with Class A vendors".to_string(),
            "Run frequent cycle counts on Class A items".to_string(),
        ],
        affected_items: ids(&c.class_a),
    })
}

fn supplier_consolidation(c: &Classification, settings: &RecommendationSettings) -> Option<Recommendation> {
    if c.class_c.len() <= settings.supplier_consolidation_min_items {
        return None;
    }

    let class_c_value = total_value(&c.class_c);
    Some(Recommendation {
        kind: RecommendationKind::SupplierConsolidation,
        priority: Priority::Medium,
        title: "Consolidate Class C suppliers".to_string(),
        description: format!(
            "{} low-value Class C items do not justify separate supplier relationships",
            c.class_c.len()
        ),
        potential_savings: class_c_value * settings.supplier_consolidation_savings_rate,
        action_items: vec![
            "Group Class C items under fewer suppliers".to_string(),
            "Move Class C items to bulk or scheduled ordering".to_string(),
            "Reduce review frequency for Class C items".to_string(),
        ],
        affected_items: ids(&c.class_c),
    })
}

/// High-value items (A or B) turning over fewer times a year than the limit.
///
/// Annual consumption is stock times the type multiplier, so an item's
/// turnover is exactly its type's multiplier. The rule therefore selects by
/// item type: with default multipliers (and a limit of 1.0) it flags every
/// ELABORATED item in Class A or B and nothing else.
fn slow_movers<'a>(c: &'a Classification, settings: &RecommendationSettings) -> Vec<&'a AnalyzedItem> {
    c.class_a
        .iter()
        .chain(&c.class_b)
        .filter(|i| i.item.stock.is_positive())
        .filter(|i| matches!(i.turnover(), Some(t) if t < settings.low_rotation_max_turnover))
        .collect()
}

fn low_rotation_review(c: &Classification, settings: &RecommendationSettings) -> Option<Recommendation> {
    let flagged = slow_movers(c, settings);
    if flagged.is_empty() {
        return None;
    }

    let flagged_value: Money = flagged.iter().map(|i| i.annual_value).sum();
    let mut action_items = vec!["Consider markdowns or promotions to move slow stock".to_string()];
    action_items.extend(
        flagged
            .iter()
            .take(MAX_LISTED_ITEMS)
            .map(|i| format!("Review {} ({}) for markdown or discontinuation", i.item.name, i.item.id)),
    );
    if flagged.len() > MAX_LISTED_ITEMS {
        action_items.push(format!(
            "...and {} more item(s) listed under affected items",
            flagged.len() - MAX_LISTED_ITEMS
        ));
    }

    Some(Recommendation {
        kind: RecommendationKind::LowRotationReview,
        priority: Priority::Medium,
        title: "Review low-rotation high-value items".to_string(),
        description: format!(
            "{} high-value item(s) turn over less than {} time(s) a year",
            flagged.len(),
            settings.low_rotation_max_turnover
        ),
        potential_savings: flagged_value * settings.low_rotation_savings_rate,
        action_items,
        affected_items: flagged.iter().map(|i| i.item.id.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::AbcClass;
    use crate::item::{InventoryItem, ItemType};
    use forgeabc_core::Quantity;
    use rust_decimal_macros::dec;

    fn analyzed(id: &str, item_type: ItemType, stock: i64, value: i64, class: AbcClass) -> AnalyzedItem {
        let turns = match item_type {
            ItemType::Measurable => dec!(1.5),
            ItemType::Countable => dec!(1.2),
            ItemType::Elaborated => dec!(0.8),
        };
        AnalyzedItem {
            item: InventoryItem::new(id, id.to_uppercase(), "c", item_type, Quantity::from(stock), Money::from(1)),
            annual_consumption: Quantity::from(stock) * turns,
            annual_value: Money::from(value),
            classification: class,
        }
    }

    fn classification(a: Vec<AnalyzedItem>, b: Vec<AnalyzedItem>, c: Vec<AnalyzedItem>) -> Classification {
        let total_value = a.iter().chain(&b).chain(&c).map(|i| i.annual_value).sum();
        Classification {
            class_a: a,
            class_b: b,
            class_c: c,
            total_value,
        }
    }

    fn kinds(recs: &[Recommendation]) -> Vec<RecommendationKind> {
        recs.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn empty_classification_has_no_recommendations() {
        let recs = recommend(&Classification::default(), &RecommendationSettings::default());
        assert!(recs.is_empty());
    }

    #[test]
    fn stock_optimization_estimates_ten_percent_of_class_a() {
        let c = classification(
            vec![analyzed("a", ItemType::Measurable, 10, 7500, AbcClass::A)],
            Vec::new(),
            Vec::new(),
        );
        let recs = recommend(&c, &RecommendationSettings::default());
        assert_eq!(kinds(&recs), vec![RecommendationKind::StockOptimization]);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].potential_savings, Money::from(750));
        assert_eq!(recs[0].action_items.len(), 3);
        assert_eq!(recs[0].affected_items, vec![ItemId::from("a")]);
    }

    #[test]
    fn supplier_consolidation_needs_more_than_threshold_c_items() {
        let many = |n: usize| -> Vec<AnalyzedItem> {
            (0..n)
                .map(|i| analyzed(&format!("c{i}"), ItemType::Countable, 1, 2, AbcClass::C))
                .collect()
        };

        let at_threshold = classification(Vec::new(), Vec::new(), many(10));
        assert!(recommend(&at_threshold, &RecommendationSettings::default()).is_empty());

        let above = classification(Vec::new(), Vec::new(), many(11));
        let recs = recommend(&above, &RecommendationSettings::default());
        assert_eq!(kinds(&recs), vec![RecommendationKind::SupplierConsolidation]);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].potential_savings, Money::new(dec!(1.1)));
    }

    #[test]
    fn low_rotation_flags_slow_high_value_items_only() {
        let c = classification(
            vec![
                analyzed("cake", ItemType::Elaborated, 10, 900, AbcClass::A),
                analyzed("flour", ItemType::Measurable, 10, 800, AbcClass::A),
            ],
            vec![analyzed("pie", ItemType::Elaborated, 5, 100, AbcClass::B)],
            vec![analyzed("tart", ItemType::Elaborated, 5, 1, AbcClass::C)],
        );
        let recs = recommend(&c, &RecommendationSettings::default());
        assert_eq!(
            kinds(&recs),
            vec![RecommendationKind::StockOptimization, RecommendationKind::LowRotationReview]
        );

        let review = &recs[1];
        assert_eq!(review.affected_items, vec![ItemId::from("cake"), ItemId::from("pie")]);
        assert_eq!(review.potential_savings, Money::from(100));
        assert!(review.action_items.iter().any(|a| a.contains("CAKE (cake)")));
    }

    #[test]
    fn low_rotation_lists_a_bounded_number_of_items() {
        let slow: Vec<_> = (0..8)
            .map(|i| analyzed(&format!("e{i}"), ItemType::Elaborated, 10, 100, AbcClass::A))
            .collect();
        let recs = recommend(&classification(slow, Vec::new(), Vec::new()), &RecommendationSettings::default());

        let review = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::LowRotationReview)
            .unwrap();
        assert_eq!(review.affected_items.len(), 8);
        // Generic advice, five named items, one summary line.
        assert_eq!(review.action_items.len(), 1 + MAX_LISTED_ITEMS + 1);
        assert!(review.action_items[MAX_LISTED_ITEMS].contains("E4 (e4)"));
        assert!(review.action_items.last().unwrap().contains("3 more item(s)"));
    }

    #[test]
    fn settings_change_rule_thresholds() {
        let c = classification(
            vec![analyzed("flour", ItemType::Measurable, 10, 800, AbcClass::A)],
            Vec::new(),
            vec![analyzed("c0", ItemType::Countable, 1, 2, AbcClass::C)],
        );
        let settings = RecommendationSettings {
            supplier_consolidation_min_items: 0,
            low_rotation_max_turnover: dec!(2),
            stock_optimization_savings_rate: dec!(0.25),
            ..RecommendationSettings::default()
        };
        let recs = recommend(&c, &settings);
        assert_eq!(
            kinds(&recs),
            vec![
                RecommendationKind::StockOptimization,
                RecommendationKind::SupplierConsolidation,
                RecommendationKind::LowRotationReview,
            ]
        );
        assert_eq!(recs[0].potential_savings, Money::from(200));
    }
}
