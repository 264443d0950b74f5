//! Preference-driven recommendation pipeline.
//!
//! Maps raw preference codes onto catalog labels, enriches entries with
//! derived attributes, scores and ranks the catalog, and explains the
//! results.

mod engine;
mod enrich;
mod explain;
mod favorites;
mod mapping;
mod scoring;

pub use engine::{Recommendation, RecommendationEngine};
pub use enrich::{
    enhance, AgeBracket, DerivedAttributes, EnrichedExperience, MotionLevel, SkillLevel,
};
pub use explain::{explain_recommendation, DEFAULT_REASON, REASON_SEPARATOR};
pub use favorites::{similar_to_favorites, DEFAULT_MAX_SIMILAR};
pub use mapping::map_to_catalog;
pub use scoring::{match_percentage, score_experience};

/// Scores below this never surface as recommendations.
pub const MIN_MATCH_SCORE: f64 = 3.0;

/// Maximum recommendations returned per request.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Score treated as a full match when deriving the display percentage.
pub const FULL_MATCH_SCORE: f64 = 15.0;

/// Lower bound on the displayed match percentage.
pub const MIN_MATCH_PERCENT: u8 = 25;

/// Upper bound on the displayed match percentage.
pub const MAX_MATCH_PERCENT: u8 = 100;
