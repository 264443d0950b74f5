//! Stateless linear filtering, sorting, and typeahead suggestions over
//! catalog slices.
//!
//! Every operation takes `&[Experience]` and returns a fresh vector; the
//! input slice is never reordered. Filters compose in a fixed order
//! (term, category, minimum rating) before the sort is applied, and all
//! sorts are stable so entries that compare equal keep their catalog
//! order.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::experience::Experience;

/// Default cap on typeahead suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Sort order for search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Rating, highest first.
    Rating,
    /// Price, cheapest first.
    Price,
    /// Title, case-insensitive alphabetical.
    Title,
}

impl SortKey {
    /// Parse a boundary string such as a query-string value.
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "rating" => Some(SortKey::Rating),
            "price" => Some(SortKey::Price),
            "title" => Some(SortKey::Title),
            _ => None,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Rating
    }
}

/// A composed catalog query. Absent fields apply no filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub sort: SortKey,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw form strings. Blank fields apply no
    /// filter, an unparseable minimum rating applies no filter, and an
    /// unknown sort key falls back to rating order.
    pub fn from_form(term: &str, category: &str, min_rating: &str, sort: &str) -> Self {
        SearchQuery {
            term: non_blank(term),
            category: non_blank(category),
            min_rating: min_rating.trim().parse().ok(),
            sort: SortKey::parse(sort).unwrap_or_default(),
        }
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Run a composed query over a catalog slice.
pub fn search(experiences: &[Experience], query: &SearchQuery) -> Vec<Experience> {
    let mut results: Vec<&Experience> = experiences.iter().collect();

    if let Some(term) = query.term.as_deref() {
        let needle = term.trim().to_lowercase();
        if !needle.is_empty() {
            results.retain(|experience| matches_term(experience, &needle));
        }
    }

    if let Some(category) = query.category.as_deref() {
        // Category is an exact, case-sensitive match on the stored value.
        results.retain(|experience| experience.category == category);
    }

    if let Some(min_rating) = query.min_rating {
        results.retain(|experience| experience.rating >= min_rating);
    }

    let mut matched: Vec<Experience> = results.into_iter().cloned().collect();
    sort_in_place(&mut matched, query.sort);

    debug!(
        results = matched.len(),
        candidates = experiences.len(),
        sort = ?query.sort,
        "search complete"
    );
    matched
}

/// Return a sorted copy of a catalog slice.
pub fn sort_experiences(experiences: &[Experience], key: SortKey) -> Vec<Experience> {
    let mut sorted = experiences.to_vec();
    sort_in_place(&mut sorted, key);
    sorted
}

/// Typeahead suggestions for a partial search term.
///
/// Scans catalog order, collecting each entry's matching title and then
/// its matching tags with original casing, de-duplicated preserving the
/// first occurrence, until `max` suggestions are gathered. Partials
/// shorter than two characters yield nothing.
pub fn suggestions(experiences: &[Experience], partial: &str, max: usize) -> Vec<String> {
    let term = partial.trim().to_lowercase();
    if term.chars().count() < 2 {
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::new();
    for experience in experiences {
        if found.len() >= max {
            break;
        }

        if experience.title.to_lowercase().contains(&term) && !found.contains(&experience.title) {
            found.push(experience.title.clone());
        }

        for tag in &experience.tags {
            if found.len() >= max {
                break;
            }
            if tag.to_lowercase().contains(&term) && !found.contains(tag) {
                found.push(tag.clone());
            }
        }
    }

    found
}

fn matches_term(experience: &Experience, needle: &str) -> bool {
    experience.title.to_lowercase().contains(needle)
        || experience.description.to_lowercase().contains(needle)
        || experience
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn sort_in_place(experiences: &mut [Experience], key: SortKey) {
    match key {
        SortKey::Rating => experiences
            .sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)),
        SortKey::Price => experiences
            .sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)),
        SortKey::Title => experiences
            .sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_matches_title_description_and_tags() {
        let catalog = sample_catalog();

        let by_title = search(&catalog, &SearchQuery::new().with_term("beat"));
        assert_eq!(titles(&by_title), vec!["Beat Saber"]);

        let by_description = search(&catalog, &SearchQuery::new().with_term("physics"));
        assert_eq!(titles(&by_description), vec!["Job Simulator"]);

        let by_tag = search(&catalog, &SearchQuery::new().with_term("rhythm"));
        assert_eq!(titles(&by_tag), vec!["Beat Saber"]);
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let catalog = sample_catalog();
        let results = search(&catalog, &SearchQuery::new().with_term("   "));
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn test_term_is_case_insensitive_and_trimmed() {
        let catalog = sample_catalog();
        let results = search(&catalog, &SearchQuery::new().with_term("  BEAT  "));
        assert_eq!(titles(&results), vec!["Beat Saber"]);
    }

    #[test]
    fn test_category_filter_is_exact_and_case_sensitive() {
        let catalog = sample_catalog();

        let gaming = search(&catalog, &SearchQuery::new().with_category("gaming"));
        assert_eq!(gaming.len(), 2);

        let wrong_case = search(&catalog, &SearchQuery::new().with_category("Gaming"));
        assert!(wrong_case.is_empty());
    }

    #[test]
    fn test_min_rating_keeps_boundary_values() {
        let catalog = sample_catalog();
        let results = search(&catalog, &SearchQuery::new().with_min_rating(4.8));
        assert_eq!(titles(&results), vec!["Half-Life: Alyx", "Beat Saber"]);
    }

    #[test]
    fn test_default_sort_is_rating_descending() {
        let catalog = sample_catalog();
        let results = search(&catalog, &SearchQuery::new());
        assert_eq!(
            titles(&results),
            vec!["Half-Life: Alyx", "Beat Saber", "Job Simulator", "Nature Treks VR"]
        );
    }

    #[test]
    fn test_price_sort_is_ascending_and_stable() {
        let mut catalog = sample_catalog();
        catalog.push(Experience {
            category: "gaming".to_string(),
            rating: 3.9,
            price: 19.99,
            ..Experience::new("5", "Duplicate Price")
        });

        let sorted = sort_experiences(&catalog, SortKey::Price);
        assert_eq!(
            titles(&sorted),
            vec![
                "Nature Treks VR",
                "Job Simulator",
                "Duplicate Price",
                "Beat Saber",
                "Half-Life: Alyx",
            ]
        );
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let catalog = vec![
            experience("1", "zebra habitat", "education", 4.0, 9.99),
            experience("2", "Alpha Station", "simulation", 4.0, 9.99),
            experience("3", "beta Lab", "education", 4.0, 9.99),
        ];

        let sorted = sort_experiences(&catalog, SortKey::Title);
        assert_eq!(titles(&sorted), vec!["Alpha Station", "beta Lab", "zebra habitat"]);
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = vec![
            experience("1", "First", "gaming", 4.5, 9.99),
            experience("2", "Second", "gaming", 4.5, 9.99),
            experience("3", "Third", "gaming", 4.5, 9.99),
        ];

        let sorted = sort_experiences(&catalog, SortKey::Rating);
        assert_eq!(titles(&sorted), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_from_form_treats_blank_and_garbage_as_no_filter() {
        let query = SearchQuery::from_form("", "", "not-a-number", "upside-down");
        assert_eq!(query.term, None);
        assert_eq!(query.category, None);
        assert_eq!(query.min_rating, None);
        assert_eq!(query.sort, SortKey::Rating);

        let parsed = SearchQuery::from_form("beat", "gaming", " 4.5 ", "price");
        assert_eq!(parsed.term.as_deref(), Some("beat"));
        assert_eq!(parsed.category.as_deref(), Some("gaming"));
        assert_eq!(parsed.min_rating, Some(4.5));
        assert_eq!(parsed.sort, SortKey::Price);
    }

    #[test]
    fn test_suggestions_require_two_characters() {
        let catalog = sample_catalog();
        assert!(suggestions(&catalog, "b", DEFAULT_MAX_SUGGESTIONS).is_empty());
        assert!(suggestions(&catalog, "  ", DEFAULT_MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn test_suggestions_collect_title_then_tags_per_entry() {
        let catalog = sample_catalog();
        let hits = suggestions(&catalog, "sim", DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(hits, vec!["Job Simulator", "simulation"]);
    }

    #[test]
    fn test_suggestions_deduplicate_and_cap() {
        let catalog = vec![
            tagged(
                experience("1", "Space Station", "simulation", 4.0, 9.99),
                &["space", "spacewalk"],
            ),
            tagged(
                experience("2", "Space Pirates", "gaming", 4.2, 9.99),
                &["space", "spaceship"],
            ),
        ];

        let capped = suggestions(&catalog, "space", 3);
        assert_eq!(capped, vec!["Space Station", "space", "spacewalk"]);

        let all = suggestions(&catalog, "space", 10);
        assert_eq!(
            all,
            vec!["Space Station", "space", "spacewalk", "Space Pirates", "spaceship"]
        );
    }

    fn sample_catalog() -> Vec<Experience> {
        let mut job_simulator = tagged(
            experience("3", "Job Simulator", "entertainment", 4.3, 19.99),
            &["comedy", "simulation"],
        );
        job_simulator.description = "Office physics sandbox".to_string();

        vec![
            tagged(
                experience("1", "Beat Saber", "gaming", 4.8, 29.99),
                &["rhythm", "music"],
            ),
            tagged(
                experience("2", "Half-Life: Alyx", "gaming", 4.9, 59.99),
                &["shooter", "story"],
            ),
            job_simulator,
            tagged(
                experience("4", "Nature Treks VR", "relaxation", 4.1, 9.99),
                &["calm", "nature"],
            ),
        ]
    }

    fn experience(id: &str, title: &str, category: &str, rating: f64, price: f64) -> Experience {
        Experience {
            category: category.to_string(),
            rating,
            price,
            ..Experience::new(id, title)
        }
    }

    fn tagged(mut experience: Experience, tags: &[&str]) -> Experience {
        experience.tags = tags.iter().map(|tag| tag.to_string()).collect();
        experience
    }

    fn titles(experiences: &[Experience]) -> Vec<&str> {
        experiences.iter().map(|experience| experience.title.as_str()).collect()
    }
}
