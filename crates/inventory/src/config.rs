//! Analysis configuration: the caller-supplied patch and its resolved form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use forgeabc_core::{Money, Percentage};

use crate::item::ItemType;

/// Basis for sorting items before thresholds are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryCriteria {
    /// Sort by annualized value.
    #[default]
    Revenue,
    /// Sort by annualized consumption.
    Quantity,
}

/// Annual turnover multipliers per item type.
///
/// These approximate annual turn count from current stock in the absence of
/// historical consumption data. They are heuristics, hence configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionMultipliers {
    pub measurable: Decimal,
    pub countable: Decimal,
    pub elaborated: Decimal,
}

impl Default for ProjectionMultipliers {
    fn default() -> Self {
        Self {
            measurable: Decimal::new(15, 1),
            countable: Decimal::new(12, 1),
            elaborated: Decimal::new(8, 1),
        }
    }
}

impl ProjectionMultipliers {
    pub fn for_type(&self, item_type: ItemType) -> Decimal {
        match item_type {
            ItemType::Measurable => self.measurable,
            ItemType::Countable => self.countable,
            ItemType::Elaborated => self.elaborated,
        }
    }
}

/// Tuning knobs for the recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    /// Share of Class A value estimated as carrying-cost savings.
    pub stock_optimization_savings_rate: Decimal,
    /// Supplier consolidation fires when Class C has strictly more items.
    pub supplier_consolidation_min_items: usize,
    /// Share of Class C value estimated as consolidation savings.
    pub supplier_consolidation_savings_rate: Decimal,
    /// Items turning over fewer times a year are rotation-review candidates.
    pub low_rotation_max_turnover: Decimal,
    /// Share of the flagged items' annual value estimated as savings.
    pub low_rotation_savings_rate: Decimal,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            stock_optimization_savings_rate: Decimal::new(10, 2),
            supplier_consolidation_min_items: 10,
            supplier_consolidation_savings_rate: Decimal::new(5, 2),
            low_rotation_max_turnover: Decimal::ONE,
            low_rotation_savings_rate: Decimal::new(10, 2),
        }
    }
}

/// Fully resolved analysis configuration (defaults merged in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Cumulative % of total value bounding Class A.
    pub class_a_threshold: Percentage,
    /// Additional cumulative % bounding Class B.
    pub class_b_threshold: Percentage,
    pub primary_criteria: PrimaryCriteria,
    /// Items whose raw value is below this are excluded.
    pub min_value: Money,
    pub exclude_categories: Vec<String>,
    /// When false, items with `stock <= 0` are excluded.
    pub include_inactive: bool,
    pub multipliers: ProjectionMultipliers,
    pub recommendations: RecommendationSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            class_a_threshold: Percentage::from(80),
            class_b_threshold: Percentage::from(15),
            primary_criteria: PrimaryCriteria::Revenue,
            min_value: Money::ZERO,
            exclude_categories: Vec::new(),
            include_inactive: false,
            multipliers: ProjectionMultipliers::default(),
            recommendations: RecommendationSettings::default(),
        }
    }
}

impl AnalysisConfig {
    /// Merge a partial configuration over the defaults, field by field.
    pub fn resolve(patch: &AnalysisConfigPatch) -> Self {
        let defaults = Self::default();
        Self {
            class_a_threshold: patch.class_a_threshold.unwrap_or(defaults.class_a_threshold),
            class_b_threshold: patch.class_b_threshold.unwrap_or(defaults.class_b_threshold),
            primary_criteria: patch.primary_criteria.unwrap_or(defaults.primary_criteria),
            min_value: patch.min_value.unwrap_or(defaults.min_value),
            exclude_categories: patch
                .exclude_categories
                .clone()
                .unwrap_or(defaults.exclude_categories),
            include_inactive: patch.include_inactive.unwrap_or(defaults.include_inactive),
            multipliers: patch.multipliers.unwrap_or(defaults.multipliers),
            recommendations: patch.recommendations.unwrap_or(defaults.recommendations),
        }
    }

    /// Upper cumulative bound of Class B (A + B).
    pub fn class_b_upper_bound(&self) -> Percentage {
        self.class_a_threshold + self.class_b_threshold
    }
}

/// Partial configuration as supplied by callers; `None` means "use default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfigPatch {
    pub class_a_threshold: Option<Percentage>,
    pub class_b_threshold: Option<Percentage>,
    pub primary_criteria: Option<PrimaryCriteria>,
    pub min_value: Option<Money>,
    pub exclude_categories: Option<Vec<String>>,
    pub include_inactive: Option<bool>,
    pub multipliers: Option<ProjectionMultipliers>,
    pub recommendations: Option<RecommendationSettings>,
}

impl AnalysisConfigPatch {
    pub fn with_class_a_threshold(mut self, threshold: Percentage) -> Self {
        self.class_a_threshold = Some(threshold);
        self
    }

    pub fn with_class_b_threshold(mut self, threshold: Percentage) -> Self {
        self.class_b_threshold = Some(threshold);
        self
    }

    pub fn with_primary_criteria(mut self, criteria: PrimaryCriteria) -> Self {
        self.primary_criteria = Some(criteria);
        self
    }

    pub fn with_min_value(mut self, min_value: Money) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn with_excluded_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_include_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = Some(include_inactive);
        self
    }

    pub fn with_multipliers(mut self, multipliers: ProjectionMultipliers) -> Self {
        self.multipliers = Some(multipliers);
        self
    }

    pub fn with_recommendations(mut self, settings: RecommendationSettings) -> Self {
        self.recommendations = Some(settings);
        self
    }
}
