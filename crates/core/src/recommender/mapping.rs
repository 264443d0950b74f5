//! Translation of short form codes into the catalog's canonical
//! vocabulary.

use crate::domain::preferences::{MappedPreferences, Preferences};

/// Translate a raw preference vector to canonical long-form labels.
///
/// Codes with no table entry pass through verbatim and absent fields
/// stay absent, so this is a total function over any input vector.
pub fn map_to_catalog(preferences: &Preferences) -> MappedPreferences {
    MappedPreferences {
        age_group: map_field(&preferences.age_group, age_group_label),
        primary_interest: map_field(&preferences.primary_interest, interest_label),
        vr_intensity: map_field(&preferences.vr_intensity, intensity_label),
        session_duration: map_field(&preferences.session_duration, duration_label),
        experience_level: map_field(&preferences.experience_level, level_label),
        motion_sensitivity: map_field(&preferences.motion_sensitivity, sensitivity_label),
    }
}

fn map_field(value: &Option<String>, table: fn(&str) -> Option<&'static str>) -> Option<String> {
    value.as_ref().map(|code| match table(code) {
        Some(label) => label.to_string(),
        None => code.clone(),
    })
}

fn age_group_label(code: &str) -> Option<&'static str> {
    match code {
        "teen" => Some("Teen (13–17)"),
        "young-adult" => Some("Young Adult (18–25)"),
        "adult" => Some("Adult (26–40)"),
        "mature" => Some("Mature (40+)"),
        _ => None,
    }
}

fn interest_label(code: &str) -> Option<&'static str> {
    match code {
        "adventure" => Some("Adventure & Action"),
        "education" => Some("Education & Exploration"),
        // The catalog has no gaming or social interest labels; those
        // codes fold into the nearest catalog interest.
        "gaming" => Some("Adventure & Action"),
        "relaxation" => Some("Relaxation & Meditation"),
        "fitness" => Some("Sports & Fitness"),
        "creativity" => Some("Art & Creativity"),
        "social" => Some("Music & Rhythm"),
        "simulation" => Some("Sci-Fi & Space"),
        _ => None,
    }
}

fn intensity_label(code: &str) -> Option<&'static str> {
    match code {
        "light" => Some("Light (Calm & Gentle)"),
        "moderate" => Some("Moderate (Balanced)"),
        "high" => Some("High (Fast-Paced)"),
        _ => None,
    }
}

fn duration_label(code: &str) -> Option<&'static str> {
    match code {
        "short" => Some("Short (5–15 min)"),
        "medium" => Some("Medium (15–30 min)"),
        "long" => Some("Long (30+ min)"),
        _ => None,
    }
}

fn level_label(code: &str) -> Option<&'static str> {
    match code {
        "beginner" => Some("Beginner"),
        "intermediate" => Some("Intermediate"),
        "expert" => Some("Expert"),
        _ => None,
    }
}

fn sensitivity_label(code: &str) -> Option<&'static str> {
    match code {
        "low" => Some("Low (No sensitivity)"),
        "medium" => Some("Medium (Some sensitivity)"),
        "high" => Some("High (Very sensitive)"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preferences::Preferences;

    #[test]
    fn test_age_codes_map_to_bracket_labels() {
        assert_eq!(mapped_age("teen"), "Teen (13–17)");
        assert_eq!(mapped_age("young-adult"), "Young Adult (18–25)");
        assert_eq!(mapped_age("adult"), "Adult (26–40)");
        assert_eq!(mapped_age("mature"), "Mature (40+)");
    }

    #[test]
    fn test_gaming_and_adventure_share_an_interest_label() {
        let gaming = map_to_catalog(&Preferences::new().with_primary_interest("gaming"));
        let adventure = map_to_catalog(&Preferences::new().with_primary_interest("adventure"));
        assert_eq!(gaming.primary_interest.as_deref(), Some("Adventure & Action"));
        assert_eq!(gaming.primary_interest, adventure.primary_interest);
    }

    #[test]
    fn test_interest_codes_map_to_catalog_labels() {
        let cases = [
            ("education", "Education & Exploration"),
            ("relaxation", "Relaxation & Meditation"),
            ("fitness", "Sports & Fitness"),
            ("creativity", "Art & Creativity"),
            ("social", "Music & Rhythm"),
            ("simulation", "Sci-Fi & Space"),
        ];
        for (code, label) in cases {
            let mapped = map_to_catalog(&Preferences::new().with_primary_interest(code));
            assert_eq!(mapped.primary_interest.as_deref(), Some(label), "code {code}");
        }
    }

    #[test]
    fn test_intensity_duration_level_and_sensitivity_tables() {
        let mapped = map_to_catalog(
            &Preferences::new()
                .with_vr_intensity("moderate")
                .with_session_duration("short")
                .with_experience_level("expert")
                .with_motion_sensitivity("high"),
        );

        assert_eq!(mapped.vr_intensity.as_deref(), Some("Moderate (Balanced)"));
        assert_eq!(mapped.session_duration.as_deref(), Some("Short (5–15 min)"));
        assert_eq!(mapped.experience_level.as_deref(), Some("Expert"));
        assert_eq!(mapped.motion_sensitivity.as_deref(), Some("High (Very sensitive)"));
    }

    #[test]
    fn test_unknown_codes_pass_through_verbatim() {
        let mapped = map_to_catalog(
            &Preferences::new().with_primary_interest("puzzle").with_vr_intensity("extreme"),
        );
        assert_eq!(mapped.primary_interest.as_deref(), Some("puzzle"));
        assert_eq!(mapped.vr_intensity.as_deref(), Some("extreme"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let mapped = map_to_catalog(&Preferences::new());
        assert!(mapped.age_group.is_none());
        assert!(mapped.primary_interest.is_none());
        assert!(mapped.motion_sensitivity.is_none());
    }

    fn mapped_age(code: &str) -> String {
        map_to_catalog(&Preferences::new().with_age_group(code))
            .age_group
            .expect("age group should be present")
    }
}
