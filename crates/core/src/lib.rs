pub mod catalog;
pub mod config;
pub mod domain;
pub mod recommender;
pub mod search;

pub use catalog::{AttributeIndex, Catalog, CatalogError, IndexKey};
pub use domain::experience::{Experience, ExperienceId};
pub use domain::preferences::{MappedPreferences, Preferences};
pub use recommender::{
    AgeBracket, DerivedAttributes, EnrichedExperience, MotionLevel, Recommendation,
    RecommendationEngine, SkillLevel,
};
pub use search::{SearchQuery, SortKey};
