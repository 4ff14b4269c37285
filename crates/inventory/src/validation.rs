//! Configuration sanity checks, independent of any item set.

use rust_decimal::Decimal;
use thiserror::Error;

use forgeabc_core::Percentage;

use crate::config::{AnalysisConfig, AnalysisConfigPatch};

/// Lowest realistic Class A bound for an 80/20-style rule.
pub const MIN_CLASS_A_THRESHOLD: i64 = 50;
/// Highest realistic Class A bound.
pub const MAX_CLASS_A_THRESHOLD: i64 = 90;

/// A violated configuration rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("class A threshold must be between 50% and 90% (got {0}%)")]
    ClassAThresholdOutOfRange(Percentage),

    #[error("class B threshold must not be negative (got {0}%)")]
    NegativeClassBThreshold(Percentage),

    #[error("class A and class B thresholds must not add up to more than 100% (got {0}%)")]
    ThresholdSumExceedsHundred(Percentage),

    #[error("{name} multiplier must be greater than zero (got {value})")]
    NonPositiveMultiplier { name: &'static str, value: Decimal },

    #[error("{name} must be between 0 and 1 (got {value})")]
    RateOutOfRange { name: &'static str, value: Decimal },
}

/// Every violated rule for the configuration an analysis would run with.
///
/// The patch is resolved against the defaults first, so a lone
/// `class_a_threshold` is checked together with the default Class B bound.
pub fn config_violations(patch: &AnalysisConfigPatch) -> Vec<ConfigViolation> {
    let config = AnalysisConfig::resolve(patch);
    let mut violations = Vec::new();

    let class_a_range = Percentage::from(MIN_CLASS_A_THRESHOLD)..=Percentage::from(MAX_CLASS_A_THRESHOLD);
    if !class_a_range.contains(&config.class_a_threshold) {
        violations.push(ConfigViolation::ClassAThresholdOutOfRange(config.class_a_threshold));
    }

    if config.class_b_threshold.is_negative() {
        violations.push(ConfigViolation::NegativeClassBThreshold(config.class_b_threshold));
    }

    let sum = config.class_b_upper_bound();
    if sum > Percentage::from(100) {
        violations.push(ConfigViolation::ThresholdSumExceedsHundred(sum));
    }

    let m = &config.multipliers;
    for (name, value) in [
        ("measurable", m.measurable),
        ("countable", m.countable),
        ("elaborated", m.elaborated),
    ] {
        if value <= Decimal::ZERO {
            violations.push(ConfigViolation::NonPositiveMultiplier { name, value });
        }
    }

    let r = &config.recommendations;
    for (name, value) in [
        ("stock optimization savings rate", r.stock_optimization_savings_rate),
        ("supplier consolidation savings rate", r.supplier_consolidation_savings_rate),
        ("low rotation savings rate", r.low_rotation_savings_rate),
    ] {
        if value < Decimal::ZERO || value > Decimal::ONE {
            violations.push(ConfigViolation::RateOutOfRange { name, value });
        }
    }

    violations
}

/// Human-readable violation messages; empty means valid. Never fails.
pub fn validate_config(patch: &AnalysisConfigPatch) -> Vec<String> {
    config_violations(patch).iter().map(ToString::to_string).collect()
}
