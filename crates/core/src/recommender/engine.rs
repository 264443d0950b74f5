//! Preference-driven recommendation engine.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, warn};

use super::favorites::similar_to_favorites;
use super::mapping::map_to_catalog;
use super::scoring::{match_percentage, score_experience};
use super::{MAX_RECOMMENDATIONS, MIN_MATCH_SCORE};
use crate::catalog::Catalog;
use crate::domain::experience::{Experience, ExperienceId};
use crate::domain::preferences::Preferences;

/// A catalog entry decorated with its match metrics.
///
/// Serializes with the entry's fields flattened next to `matchScore`
/// and `matchPercentage`, the shape downstream consumers receive.
#[derive(Clone, Debug, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub experience: Experience,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
}

/// Scores and ranks a catalog snapshot against preference vectors.
///
/// The engine owns its snapshot; rankings are recomputed from scratch
/// per call, with no caches, clocks, or randomness, so equal inputs
/// always produce equal output.
pub struct RecommendationEngine {
    catalog: Catalog,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog against a preference vector.
    ///
    /// Every entry is scored, entries below the qualifying floor are
    /// dropped, and the best six are returned ordered by score then
    /// rating, ties keeping catalog order. An empty vector still ranks
    /// by rating and bonuses alone; an empty catalog yields an empty
    /// list. When nothing qualifies the list is empty and callers can
    /// fall back to [`top_rated`](Self::top_rated).
    pub fn recommend(&self, preferences: &Preferences) -> Vec<Recommendation> {
        let experiences = self.catalog.experiences();
        if experiences.is_empty() {
            warn!("recommendation requested against an empty catalog");
            return Vec::new();
        }

        let mapped = map_to_catalog(preferences);
        debug!(candidates = experiences.len(), "scoring catalog against preference vector");

        let mut scored: Vec<(&Experience, f64)> = experiences
            .iter()
            .map(|experience| (experience, score_experience(experience, &mapped)))
            .collect();

        scored.retain(|(_, score)| *score >= MIN_MATCH_SCORE);
        debug!(qualifying = scored.len(), "entries above the score floor");

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.0.rating.partial_cmp(&a.0.rating).unwrap_or(Ordering::Equal))
        });
        scored.truncate(MAX_RECOMMENDATIONS);

        debug!(returned = scored.len(), "assembled recommendations");
        scored
            .into_iter()
            .map(|(experience, score)| Recommendation {
                experience: experience.clone(),
                match_score: score,
                match_percentage: match_percentage(score),
            })
            .collect()
    }

    /// The highest-rated entries, decorated the way the zero-result
    /// fallback path decorates them: double-rating score and a plain
    /// rating-out-of-five percentage with no floor applied.
    pub fn top_rated(&self, limit: usize) -> Vec<Recommendation> {
        let mut ranked: Vec<&Experience> = self.catalog.experiences().iter().collect();
        ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|experience| Recommendation {
                match_score: experience.rating * 2.0,
                match_percentage: (experience.rating / 5.0 * 100.0).round() as u8,
                experience: experience.clone(),
            })
            .collect()
    }

    /// Rank non-favorite entries by similarity to the given favorites.
    pub fn similar_to_favorites(
        &self,
        favorites: &[ExperienceId],
        limit: usize,
    ) -> Vec<Experience> {
        similar_to_favorites(self.catalog.experiences(), favorites, limit)
    }
}
