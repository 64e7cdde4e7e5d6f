//! Consumable categories and title classification.
//!
//! Category membership is inferred from a record's free-text title by crude,
//! case-insensitive substring matching. A title may match zero, one, or
//! several categories. Missed synonyms are an accepted limitation of the
//! keyword tables, not something to paper over with fuzzy matching.
//!
//! This module is the single owner of category inference: every call site
//! (estimators, history index, UI card logic) goes through [`classify`]
//! rather than re-deriving categories locally.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A vehicle subsystem with a finite service life tracked by the engine.
///
/// Declaration order doubles as the ranking priority among suggestions of
/// equal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    EngineOil,
    /// Brakes and tires share one category; the original logbook tracked
    /// them with a single estimator and a title-driven interval.
    BrakeTire,
    Battery,
}

/// Keyword tables. The app ships in English and Japanese, so both scripts
/// are matched.
const ENGINE_OIL_KEYWORDS: &[&str] = &["oil", "オイル"];
const BRAKE_TIRE_KEYWORDS: &[&str] = &["brake", "tire", "tyre", "ブレーキ", "タイヤ"];
const BATTERY_KEYWORDS: &[&str] = &["battery", "バッテリー"];

/// The subset of brake/tire keywords that identify tire work specifically,
/// used to pick the tire interval over the brake one.
const TIRE_KEYWORDS: &[&str] = &["tire", "tyre", "タイヤ"];

impl Category {
    /// All tracked categories, in ranking-priority order.
    pub const ALL: [Category; 3] = [Category::EngineOil, Category::BrakeTire, Category::Battery];

    /// Returns the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EngineOil => "ENGINE_OIL",
            Category::BrakeTire => "BRAKE_TIRE",
            Category::Battery => "BATTERY",
        }
    }

    /// Returns a human-friendly label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::EngineOil => "Engine Oil",
            Category::BrakeTire => "Brakes & Tires",
            Category::Battery => "Battery",
        }
    }

    /// Stable id fragment used when building suggestion ids.
    pub fn id_key(&self) -> &'static str {
        match self {
            Category::EngineOil => "engine_oil",
            Category::BrakeTire => "brake_tire",
            Category::Battery => "battery",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::EngineOil => ENGINE_OIL_KEYWORDS,
            Category::BrakeTire => BRAKE_TIRE_KEYWORDS,
            Category::Battery => BATTERY_KEYWORDS,
        }
    }

    /// Returns true if the given title belongs to this category.
    pub fn matches(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.keywords().iter().any(|kw| lowered.contains(kw))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a free-text maintenance title into consumable categories.
///
/// Non-exclusive: "oil and brake service" matches both. Unmatched titles
/// classify to the empty set and are ignored by the estimators.
pub fn classify(title: &str) -> HashSet<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|category| category.matches(title))
        .collect()
}

/// Returns true if the title describes tire work rather than brake work.
///
/// The brake/tire estimator uses the longer tire interval when the matched
/// record was a tire job.
pub fn is_tire_work(title: &str) -> bool {
    let lowered = title.to_lowercase();
    TIRE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
