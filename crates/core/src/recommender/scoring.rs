//! Weighted preference match scoring.
//!
//! The score is additive: an entry's rating seeds it and each supplied
//! preference contributes one term. Exact canonical-field matches earn
//! the full term weight, derived attributes provide a smaller fallback,
//! and interest / intensity / duration mismatches subtract. Absent
//! preferences skip their term entirely, so an empty vector scores every
//! entry at its bare rating.

use tracing::trace;

use super::enrich::DerivedAttributes;
use super::{FULL_MATCH_SCORE, MAX_MATCH_PERCENT, MIN_MATCH_PERCENT};
use crate::domain::experience::Experience;
use crate::domain::preferences::MappedPreferences;

/// Score one entry against a mapped preference vector.
pub fn score_experience(experience: &Experience, preferences: &MappedPreferences) -> f64 {
    // Rating seeds the score at weight 1.
    let mut score = experience.rating;

    if let Some(interest) = preferences.primary_interest.as_deref() {
        score += interest_term(experience, interest);
    }
    if let Some(age_group) = preferences.age_group.as_deref() {
        score += age_term(experience, age_group);
    }
    if let Some(intensity) = preferences.vr_intensity.as_deref() {
        score += intensity_term(experience, intensity);
    }
    if let Some(duration) = preferences.session_duration.as_deref() {
        score += duration_term(experience, duration);
    }
    if let Some(level) = preferences.experience_level.as_deref() {
        score += level_term(experience, level);
    }
    if let Some(sensitivity) = preferences.motion_sensitivity.as_deref() {
        score += motion_term(experience, sensitivity);
    }

    if experience.price == 0.0 {
        score += 1.0;
        trace!(title = %experience.title, "free entry bonus: +1");
    }
    if experience.rating >= 4.5 {
        score += 1.0;
        trace!(title = %experience.title, "high rating bonus: +1");
    }

    trace!(title = %experience.title, score, "scored entry");
    score
}

/// Normalized display percentage for a score.
pub fn match_percentage(score: f64) -> u8 {
    let percent = (score / FULL_MATCH_SCORE * 100.0).round() as i64;
    percent.clamp(i64::from(MIN_MATCH_PERCENT), i64::from(MAX_MATCH_PERCENT)) as u8
}

fn interest_term(experience: &Experience, interest: &str) -> f64 {
    if experience.primary_interest.as_deref() == Some(interest) {
        trace!(title = %experience.title, "interest exact match: +20");
        return 20.0;
    }

    let category = experience.category.to_lowercase();
    if broadened_categories(interest).contains(&category.as_str()) {
        trace!(title = %experience.title, "interest category match: +10");
        10.0
    } else {
        trace!(title = %experience.title, "no interest match: -5");
        -5.0
    }
}

/// Catalog categories that still count as a partial match for each
/// canonical interest label.
fn broadened_categories(interest: &str) -> &'static [&'static str] {
    match interest {
        "Adventure & Action" => &["adventure", "gaming", "simulation"],
        "Education & Exploration" => &["education"],
        "Gaming & Competition" => &["gaming", "adventure"],
        "Relaxation & Meditation" => &["relaxation", "fitness"],
        "Sports & Fitness" => &["fitness"],
        "Art & Creativity" => &["creativity"],
        "Social & Multiplayer" => &["entertainment", "gaming"],
        "Sci-Fi & Space" => &["simulation", "education"],
        "Music & Rhythm" => &["gaming", "entertainment"],
        "Horror & Thriller" => &["horror", "gaming"],
        _ => &[],
    }
}

fn age_term(experience: &Experience, age_group: &str) -> f64 {
    if experience.age_group.as_deref() == Some(age_group) {
        trace!(title = %experience.title, "age exact match: +8");
        return 8.0;
    }

    let tag = bracket_tag(age_group);
    let derived = DerivedAttributes::derive(experience);
    if derived.age_suitability.iter().any(|bracket| bracket.label() == tag) {
        trace!(title = %experience.title, "age suitability match: +4");
        4.0
    } else {
        0.0
    }
}

/// Reduce a bracket label like `Adult (26–40)` to its lower-cased tag.
/// Note that `Young Adult (18–25)` reduces to `young adult`, which does
/// not equal the hyphenated `young-adult` suitability tag.
fn bracket_tag(age_group: &str) -> String {
    let lower = age_group.to_lowercase();
    match (lower.find(" ("), lower.rfind(')')) {
        (Some(open), Some(close)) if close > open => {
            let mut tag = String::with_capacity(lower.len());
            tag.push_str(lower[..open].trim_end());
            tag.push_str(&lower[close + 1..]);
            tag
        }
        _ => lower,
    }
}

fn intensity_term(experience: &Experience, intensity: &str) -> f64 {
    if experience.vr_intensity.as_deref() == Some(intensity) {
        trace!(title = %experience.title, "intensity exact match: +6");
        return 6.0;
    }

    let user = intensity_ordinal(intensity);
    let item = DerivedAttributes::derive(experience).intensity_score;
    if user.abs_diff(item) <= 1 {
        trace!(title = %experience.title, "intensity close match: +3");
        3.0
    } else {
        trace!(title = %experience.title, "intensity mismatch: -2");
        -2.0
    }
}

fn duration_term(experience: &Experience, duration: &str) -> f64 {
    if experience.session_duration.as_deref() == Some(duration) {
        trace!(title = %experience.title, "duration exact match: +6");
        return 6.0;
    }

    let user = duration_ordinal(duration);
    let item = DerivedAttributes::derive(experience).duration_score;
    if user.abs_diff(item) <= 1 {
        trace!(title = %experience.title, "duration close match: +3");
        3.0
    } else {
        trace!(title = %experience.title, "duration mismatch: -2");
        -2.0
    }
}

fn level_term(experience: &Experience, level: &str) -> f64 {
    if experience.vr_experience_level.as_deref() == Some(level) {
        trace!(title = %experience.title, "experience level exact match: +2");
        return 2.0;
    }

    let user = level_ordinal(level);
    let item = level_ordinal(experience.vr_experience_level.as_deref().unwrap_or(""));
    if item <= user {
        trace!(title = %experience.title, "experience level compatible: +1");
        1.0
    } else {
        0.0
    }
}

fn motion_term(experience: &Experience, sensitivity: &str) -> f64 {
    let user = sensitivity_ordinal(sensitivity);
    let item = sensitivity_ordinal(experience.motion_sensitivity.as_deref().unwrap_or(""));
    if user >= item {
        trace!(title = %experience.title, "motion sensitivity compatible: +2");
        2.0
    } else {
        0.0
    }
}

fn intensity_ordinal(label: &str) -> u8 {
    match label {
        "Light (Calm & Gentle)" => 1,
        "Moderate (Balanced)" => 2,
        "High (Fast-Paced)" => 3,
        _ => 2,
    }
}

fn duration_ordinal(label: &str) -> u8 {
    match label {
        "Short (5–15 min)" => 1,
        "Medium (15–30 min)" => 2,
        "Long (30+ min)" => 3,
        _ => 2,
    }
}

fn level_ordinal(label: &str) -> u8 {
    match label {
        "Beginner" => 1,
        "Intermediate" => 2,
        "Expert" => 3,
        _ => 1,
    }
}

fn sensitivity_ordinal(label: &str) -> u8 {
    match label {
        "Low (No sensitivity)" => 1,
        "Medium (Some sensitivity)" => 2,
        "High (Very sensitive)" => 3,
        _ => 2,
    }
}
