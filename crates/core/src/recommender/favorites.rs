//! Similarity ranking seeded by a user's favorite entries.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::domain::experience::{Experience, ExperienceId};
use crate::search::{sort_experiences, SortKey};

/// Default cap on favorites-based recommendations.
pub const DEFAULT_MAX_SIMILAR: usize = 6;

/// Rank catalog entries by similarity to a set of favorite ids.
///
/// With no favorites this degrades to the top-rated `limit` entries.
/// Otherwise the favorites' categories and tags are collected with
/// exact casing, every non-favorite entry is scored as 3 points for a
/// shared category plus 1 per shared tag plus its rating, and the
/// highest scores win. Ties keep catalog order.
pub fn similar_to_favorites(
    experiences: &[Experience],
    favorites: &[ExperienceId],
    limit: usize,
) -> Vec<Experience> {
    if favorites.is_empty() {
        let mut top_rated = sort_experiences(experiences, SortKey::Rating);
        top_rated.truncate(limit);
        return top_rated;
    }

    let favorite_ids: HashSet<&ExperienceId> = favorites.iter().collect();
    let mut favorite_categories: HashSet<&str> = HashSet::new();
    let mut favorite_tags: HashSet<&str> = HashSet::new();
    for id in favorites {
        if let Some(favorite) = experiences.iter().find(|experience| &experience.id == id) {
            favorite_categories.insert(favorite.category.as_str());
            for tag in &favorite.tags {
                favorite_tags.insert(tag.as_str());
            }
        }
    }

    let mut scored: Vec<(&Experience, f64)> = experiences
        .iter()
        .filter(|experience| !favorite_ids.contains(&experience.id))
        .map(|experience| {
            let mut score = experience.rating;
            if favorite_categories.contains(experience.category.as_str()) {
                score += 3.0;
            }
            score += experience
                .tags
                .iter()
                .filter(|tag| favorite_tags.contains(tag.as_str()))
                .count() as f64;
            (experience, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    debug!(
        favorites = favorites.len(),
        returned = scored.len(),
        "ranked entries by favorite similarity"
    );
    scored
        .into_iter()
        .map(|(experience, _)| experience.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_favorites_degrades_to_top_rated() {
        let catalog = sample_catalog();
        let picks = similar_to_favorites(&catalog, &[], 2);
        assert_eq!(titles(&picks), vec!["Half-Life: Alyx", "Beat Saber"]);
    }

    #[test]
    fn test_shared_category_and_tags_outrank_raw_rating() {
        let catalog = sample_catalog();
        let favorites = vec![ExperienceId::new("beat-saber")];

        // Pistol Whip shares gaming (+3) and the music tag (+1) with the
        // favorite, so it outranks Half-Life despite the lower rating.
        let picks = similar_to_favorites(&catalog, &favorites, 3);
        assert_eq!(
            titles(&picks),
            vec!["Pistol Whip", "Half-Life: Alyx", "Nature Treks VR"]
        );
    }

    #[test]
    fn test_favorites_are_excluded_from_results() {
        let catalog = sample_catalog();
        let favorites = vec![ExperienceId::new("beat-saber")];

        let picks = similar_to_favorites(&catalog, &favorites, 10);
        assert!(!titles(&picks).contains(&"Beat Saber"));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let mut catalog = sample_catalog();
        catalog.push(Experience {
            category: "Gaming".to_string(),
            rating: 4.0,
            price: 9.99,
            ..Experience::new("odd-case", "Odd Case")
        });
        let favorites = vec![ExperienceId::new("beat-saber")];

        let picks = similar_to_favorites(&catalog, &favorites, 10);
        // `Gaming` does not equal the favorite's `gaming`, so the odd
        // entry scores only its rating and lands behind Half-Life.
        let order = titles(&picks);
        let odd = order.iter().position(|title| *title == "Odd Case").unwrap();
        let alyx = order.iter().position(|title| *title == "Half-Life: Alyx").unwrap();
        assert!(odd > alyx);
    }

    #[test]
    fn test_unknown_favorite_ids_contribute_nothing() {
        let catalog = sample_catalog();
        let favorites = vec![ExperienceId::new("missing")];

        // No categories or tags are collected, so ranking is rating plus
        // nothing, like the rating sort.
        let picks = similar_to_favorites(&catalog, &favorites, 2);
        assert_eq!(titles(&picks), vec!["Half-Life: Alyx", "Beat Saber"]);
    }

    fn sample_catalog() -> Vec<Experience> {
        vec![
            entry("beat-saber", "Beat Saber", "gaming", 4.8, &["music", "rhythm"]),
            entry("alyx", "Half-Life: Alyx", "gaming", 4.9, &[]),
            entry("pistol-whip", "Pistol Whip", "gaming", 4.2, &["music", "shooter"]),
            entry("nature", "Nature Treks VR", "relaxation", 4.1, &["calm"]),
        ]
    }

    fn entry(id: &str, title: &str, category: &str, rating: f64, tags: &[&str]) -> Experience {
        Experience {
            category: category.to_string(),
            rating,
            price: 19.99,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            ..Experience::new(id, title)
        }
    }

    fn titles(experiences: &[Experience]) -> Vec<&str> {
        experiences.iter().map(|experience| experience.title.as_str()).collect()
    }
}
