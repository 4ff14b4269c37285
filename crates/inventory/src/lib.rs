//! ABC inventory classification engine.
//!
//! Partitions inventory items into value classes (A/B/C, 80/15/5 by default),
//! projects each item's annualized consumption and value with exact decimal
//! arithmetic, and derives recommendations from the classification.
//!
//! This crate is pure domain logic: no IO, no storage, no shared state.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod filter;
pub mod item;
pub mod projection;
pub mod recommendation;
pub mod summary;
pub mod validation;

pub use analysis::{AnalysisResult, analyze_inventory, analyze_inventory_at};
pub use classifier::{AbcClass, AnalyzedItem, Classification};
pub use config::{
    AnalysisConfig, AnalysisConfigPatch, PrimaryCriteria, ProjectionMultipliers, RecommendationSettings,
};
pub use item::{InventoryItem, ItemType, Packaging};
pub use recommendation::{Priority, Recommendation, RecommendationKind};
pub use summary::{CategoryEntry, ClassSummary, Summary, generate_category_overview};
pub use validation::{ConfigViolation, config_violations, validate_config};
