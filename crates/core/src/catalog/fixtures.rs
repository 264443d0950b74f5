//! Built-in sample catalog.
//!
//! Mirrors the supplier feed the embedding application consumes in
//! production. A representative subset of entries carries the full
//! canonical metadata; the rest are lean so both the exact-match and
//! derived-attribute scoring paths stay exercised.

use crate::domain::experience::{Experience, ExperienceId};

/// Lightweight catalog seed materialized into [`Experience`] records.
#[derive(Debug, Clone, Copy)]
struct ExperienceSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    rating: f64,
    price: f64,
    platform: &'static str,
    primary_interest: Option<&'static str>,
    age_group: Option<&'static str>,
    vr_intensity: Option<&'static str>,
    session_duration: Option<&'static str>,
    vr_experience_level: Option<&'static str>,
    motion_sensitivity: Option<&'static str>,
    estimated_calories_burned: Option<u32>,
    store_url: Option<&'static str>,
    tags: &'static [&'static str],
}

const EXPERIENCE_SEEDS: &[ExperienceSeed] = &[
    ExperienceSeed {
        id: "beat-saber",
        title: "Beat Saber",
        description: "Rhythm VR game where you slash beats with lightsabers",
        category: "gaming",
        rating: 4.8,
        price: 29.99,
        platform: "Steam VR, Oculus, PlayStation VR",
        primary_interest: Some("Adventure & Action"),
        age_group: Some("Young Adult (18–25)"),
        vr_intensity: Some("High (Fast-Paced)"),
        session_duration: Some("Short (5–15 min)"),
        vr_experience_level: Some("Beginner"),
        motion_sensitivity: Some("Low (No sensitivity)"),
        estimated_calories_burned: Some(300),
        store_url: Some("https://beatsaber.com/"),
        tags: &["rhythm", "music", "workout"],
    },
    ExperienceSeed {
        id: "half-life-alyx",
        title: "Half-Life: Alyx",
        description: "Immersive VR adventure set in the Half-Life universe",
        category: "adventure",
        rating: 4.9,
        price: 59.99,
        platform: "Steam VR, Oculus",
        primary_interest: Some("Adventure & Action"),
        age_group: Some("Adult (26–40)"),
        vr_intensity: Some("High (Fast-Paced)"),
        session_duration: Some("Long (30+ min)"),
        vr_experience_level: Some("Expert"),
        motion_sensitivity: Some("Medium (Some sensitivity)"),
        estimated_calories_burned: None,
        store_url: Some("https://store.steampowered.com/app/546560/HalfLife_Alyx/"),
        tags: &["shooter", "story", "physics"],
    },
    ExperienceSeed {
        id: "superhot-vr",
        title: "SUPERHOT VR",
        description: "Time moves only when you move. Dodge bullets, take down enemies, \
                      and navigate through a stylized world",
        category: "gaming",
        rating: 4.7,
        price: 24.99,
        platform: "Steam VR, Oculus Quest, PSVR",
        primary_interest: Some("Gaming & Competition"),
        age_group: None,
        vr_intensity: Some("Moderate (Balanced)"),
        session_duration: None,
        vr_experience_level: Some("Intermediate"),
        motion_sensitivity: None,
        estimated_calories_burned: None,
        store_url: Some("https://store.steampowered.com/app/617830/SUPERHOT_VR/"),
        tags: &["action", "strategy", "time"],
    },
    ExperienceSeed {
        id: "population-one",
        title: "Population: One",
        description: "Climb anything. Fight everywhere. Experience battle royale like \
                      never before with vertical combat in VR",
        category: "gaming",
        rating: 4.5,
        price: 29.99,
        platform: "Oculus Quest, Oculus Rift",
        primary_interest: Some("Gaming & Competition"),
        age_group: None,
        vr_intensity: None,
        session_duration: Some("Medium (15–30 min)"),
        vr_experience_level: None,
        motion_sensitivity: None,
        estimated_calories_burned: None,
        store_url: Some("https://www.oculus.com/experiences/quest/2564158073609422/"),
        tags: &["battle-royale", "multiplayer", "shooter"],
    },
    ExperienceSeed {
        id: "google-earth-vr",
        title: "Google Earth VR",
        description: "Fly over cities, stand on mountain peaks, and explore the planet \
                      from entirely new perspectives",
        category: "education",
        rating: 4.6,
        price: 0.0,
        platform: "Steam VR, Oculus Rift",
        primary_interest: Some("Education & Exploration"),
        age_group: Some("Teen (13–17)"),
        vr_intensity: Some("Light (Calm & Gentle)"),
        session_duration: Some("Long (30+ min)"),
        vr_experience_level: Some("Beginner"),
        motion_sensitivity: Some("Medium (Some sensitivity)"),
        estimated_calories_burned: None,
        store_url: Some("https://arvr.google.com/earth/"),
        tags: &["travel", "geography", "exploration"],
    },
    ExperienceSeed {
        id: "tilt-brush",
        title: "Tilt Brush",
        description: "Paint in three-dimensional space with light, fire, and stars",
        category: "creativity",
        rating: 4.4,
        price: 19.99,
        platform: "Steam VR, Oculus, PlayStation VR",
        primary_interest: Some("Art & Creativity"),
        age_group: None,
        vr_intensity: Some("Light (Calm & Gentle)"),
        session_duration: None,
        vr_experience_level: Some("Beginner"),
        motion_sensitivity: Some("Low (No sensitivity)"),
        estimated_calories_burned: None,
        store_url: None,
        tags: &["art", "painting", "creative"],
    },
    ExperienceSeed {
        id: "job-simulator",
        title: "Job Simulator",
        description: "Tongue-in-cheek office physics sandbox set in a world where robots \
                      have replaced all human jobs",
        category: "entertainment",
        rating: 4.3,
        price: 19.99,
        platform: "Steam VR, Oculus, PlayStation VR",
        primary_interest: None,
        age_group: Some("Teen (13–17)"),
        vr_intensity: None,
        session_duration: Some("Short (5–15 min)"),
        vr_experience_level: None,
        motion_sensitivity: Some("Low (No sensitivity)"),
        estimated_calories_burned: None,
        store_url: None,
        tags: &["comedy", "simulation", "physics"],
    },
    ExperienceSeed {
        id: "the-lab",
        title: "The Lab",
        description: "A compilation of room-scale VR minigames set in the Portal universe",
        category: "entertainment",
        rating: 4.7,
        price: 0.0,
        platform: "Steam VR",
        primary_interest: None,
        age_group: None,
        vr_intensity: None,
        session_duration: None,
        vr_experience_level: None,
        motion_sensitivity: None,
        estimated_calories_burned: None,
        store_url: None,
        tags: &["minigames", "valve"],
    },
    ExperienceSeed {
        id: "pistol-whip",
        title: "Pistol Whip",
        description: "Action-rhythm shooter that sends you gunslinging through a cinematic \
                      bullet hell",
        category: "gaming",
        rating: 4.6,
        price: 24.99,
        platform: "Steam VR, Oculus Quest, PSVR",
        primary_interest: Some("Music & Rhythm"),
        age_group: None,
        vr_intensity: Some("High (Fast-Paced)"),
        session_duration: Some("Short (5–15 min)"),
        vr_experience_level: Some("Intermediate"),
        motion_sensitivity: None,
        estimated_calories_burned: Some(200),
        store_url: None,
        tags: &["shooter", "rhythm", "music"],
    },
    ExperienceSeed {
        id: "fitxr",
        title: "FitXR",
        description: "Studio-style boxing and HIIT workouts led by real trainers",
        category: "fitness",
        rating: 4.2,
        price: 29.99,
        platform: "Oculus Quest",
        primary_interest: Some("Sports & Fitness"),
        age_group: None,
        vr_intensity: Some("Moderate (Balanced)"),
        session_duration: Some("Medium (15–30 min)"),
        vr_experience_level: None,
        motion_sensitivity: None,
        estimated_calories_burned: Some(400),
        store_url: None,
        tags: &["workout", "boxing", "cardio"],
    },
    ExperienceSeed {
        id: "nature-treks-vr",
        title: "Nature Treks VR",
        description: "Wander peaceful forests, beaches, and open plains at your own pace",
        category: "relaxation",
        rating: 4.1,
        price: 9.99,
        platform: "Steam VR, Oculus Quest",
        primary_interest: Some("Relaxation & Meditation"),
        age_group: None,
        vr_intensity: Some("Light (Calm & Gentle)"),
        session_duration: None,
        vr_experience_level: Some("Beginner"),
        motion_sensitivity: Some("Low (No sensitivity)"),
        estimated_calories_burned: None,
        store_url: None,
        tags: &["calm", "nature", "meditation"],
    },
    ExperienceSeed {
        id: "space-exploration-vr",
        title: "Space Exploration VR",
        description: "Journey through the solar system and walk the surface of distant worlds",
        category: "simulation",
        rating: 4.8,
        price: 39.99,
        platform: "Oculus",
        primary_interest: Some("Sci-Fi & Space"),
        age_group: Some("Adult (26–40)"),
        vr_intensity: None,
        session_duration: None,
        vr_experience_level: None,
        motion_sensitivity: None,
        estimated_calories_burned: None,
        store_url: None,
        tags: &["space", "planets", "science"],
    },
    ExperienceSeed {
        id: "vr-flight-simulator",
        title: "VR Flight Simulator",
        description: "Take the cockpit for takeoff, navigation, and landing across \
                      real-world airports",
        category: "simulation",
        rating: 4.0,
        price: 39.99,
        platform: "Steam VR",
        primary_interest: None,
        age_group: None,
        vr_intensity: None,
        session_duration: None,
        vr_experience_level: None,
        motion_sensitivity: None,
        estimated_calories_burned: None,
        store_url: None,
        tags: &["flying", "aviation", "cockpit"],
    },
    ExperienceSeed {
        id: "affected-the-manor",
        title: "Affected: The Manor",
        description: "A haunted walkthrough built purely to scare",
        category: "horror",
        rating: 3.9,
        price: 9.99,
        platform: "Steam VR, Oculus Quest, PSVR",
        primary_interest: Some("Horror & Thriller"),
        age_group: Some("Mature (40+)"),
        vr_intensity: None,
        session_duration: Some("Short (5–15 min)"),
        vr_experience_level: None,
        motion_sensitivity: None,
        estimated_calories_burned: None,
        store_url: None,
        tags: &["horror", "scary", "atmosphere"],
    },
];

/// Materialize the built-in seed table.
pub fn sample_experiences() -> Vec<Experience> {
    EXPERIENCE_SEEDS.iter().map(materialize).collect()
}

fn materialize(seed: &ExperienceSeed) -> Experience {
    Experience {
        id: ExperienceId::new(seed.id),
        title: seed.title.to_string(),
        description: seed.description.to_string(),
        category: seed.category.to_string(),
        rating: seed.rating,
        price: seed.price,
        platform: seed.platform.to_string(),
        primary_interest: seed.primary_interest.map(str::to_string),
        age_group: seed.age_group.map(str::to_string),
        vr_intensity: seed.vr_intensity.map(str::to_string),
        session_duration: seed.session_duration.map(str::to_string),
        vr_experience_level: seed.vr_experience_level.map(str::to_string),
        motion_sensitivity: seed.motion_sensitivity.map(str::to_string),
        estimated_calories_burned: seed.estimated_calories_burned,
        store_url: seed.store_url.map(str::to_string),
        video_url: None,
        image_url: None,
        tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let experiences = sample_experiences();
        let ids: HashSet<_> = experiences.iter().map(|experience| &experience.id).collect();
        assert_eq!(ids.len(), experiences.len());
    }

    #[test]
    fn test_seed_ratings_and_prices_are_in_range() {
        for experience in sample_experiences() {
            assert!(
                (0.0..=5.0).contains(&experience.rating),
                "rating out of range for {}",
                experience.title
            );
            assert!(experience.price >= 0.0, "negative price for {}", experience.title);
        }
    }

    #[test]
    fn test_seeds_cover_both_scoring_paths() {
        let experiences = sample_experiences();

        let rich = experiences
            .iter()
            .find(|experience| experience.title == "Beat Saber")
            .unwrap();
        assert_eq!(rich.primary_interest.as_deref(), Some("Adventure & Action"));
        assert_eq!(rich.motion_sensitivity.as_deref(), Some("Low (No sensitivity)"));

        let lean = experiences
            .iter()
            .find(|experience| experience.title == "The Lab")
            .unwrap();
        assert!(lean.primary_interest.is_none());
        assert!(lean.vr_intensity.is_none());
    }

    #[test]
    fn test_seeds_include_free_and_calorie_entries() {
        let experiences = sample_experiences();
        assert!(experiences.iter().any(|experience| experience.price == 0.0));
        assert!(experiences
            .iter()
            .any(|experience| experience.estimated_calories_burned.unwrap_or(0) > 50));
    }

    #[test]
    fn test_seed_categories_are_lowercase() {
        for experience in sample_experiences() {
            assert_eq!(
                experience.category,
                experience.category.to_lowercase(),
                "category not lowercase for {}",
                experience.title
            );
        }
    }
}
