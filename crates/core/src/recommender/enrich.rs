//! Derived attributes for entries that lack canonical metadata.
//!
//! Every rule is a pure function of the lower-cased `category` and
//! `title`, first match wins per attribute. Deriving twice yields the
//! same values, so enrichment can run on demand wherever a fallback
//! attribute is needed.

use crate::domain::experience::Experience;

/// Age bracket tag used in suitability checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeBracket {
    Teen,
    YoungAdult,
    Adult,
    Mature,
}

impl AgeBracket {
    /// Hyphenated tag form the suitability comparison runs against.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Teen => "teen",
            AgeBracket::YoungAdult => "young-adult",
            AgeBracket::Adult => "adult",
            AgeBracket::Mature => "mature",
        }
    }
}

/// Required familiarity with VR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Expert => "expert",
        }
    }
}

/// How much artificial locomotion the experience subjects users to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionLevel {
    Low,
    Medium,
    High,
}

impl MotionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MotionLevel::Low => "low",
            MotionLevel::Medium => "medium",
            MotionLevel::High => "high",
        }
    }
}

/// The five derived attributes. `duration_score` and `intensity_score`
/// are ordinals 1 (short/light) through 3 (long/high).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAttributes {
    pub age_suitability: &'static [AgeBracket],
    pub duration_score: u8,
    pub intensity_score: u8,
    pub experience_level: SkillLevel,
    pub motion_sensitivity: MotionLevel,
}

impl DerivedAttributes {
    /// Derive the full attribute set for one entry.
    pub fn derive(experience: &Experience) -> Self {
        let category = experience.category.to_lowercase();
        let title = experience.title.to_lowercase();

        Self {
            age_suitability: age_suitability(&category, &title),
            duration_score: duration_score(&category, &title),
            intensity_score: intensity_score(&category, &title),
            experience_level: experience_level(&category, &title),
            motion_sensitivity: motion_sensitivity(&category, &title),
        }
    }
}

/// An entry together with its derived attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedExperience {
    pub experience: Experience,
    pub derived: DerivedAttributes,
}

/// Attach derived attributes to an entry. The entry itself is not
/// modified; an empty `category` or `title` simply fails every keyword
/// test and lands on the defaults.
pub fn enhance(experience: &Experience) -> EnrichedExperience {
    EnrichedExperience {
        experience: experience.clone(),
        derived: DerivedAttributes::derive(experience),
    }
}

fn age_suitability(category: &str, title: &str) -> &'static [AgeBracket] {
    use AgeBracket::{Adult, Mature, Teen, YoungAdult};

    match category {
        "education" => &[Teen, YoungAdult, Adult, Mature],
        "gaming" if title.contains("beat saber") || title.contains("pistol whip") => {
            &[Teen, YoungAdult, Adult]
        }
        "gaming" => &[YoungAdult, Adult, Mature],
        "fitness" => &[YoungAdult, Adult, Mature],
        "simulation" => &[Adult, Mature],
        "entertainment" => &[Teen, YoungAdult, Adult, Mature],
        _ => &[YoungAdult, Adult],
    }
}

fn duration_score(category: &str, title: &str) -> u8 {
    if category == "fitness" || title.contains("beat saber") || title.contains("pistol whip") {
        return 2;
    }
    if category == "education" && title.contains("google earth") {
        return 3;
    }
    if category == "entertainment" && (title.contains("job simulator") || title.contains("the lab"))
    {
        return 1;
    }
    if category == "simulation" {
        return 3;
    }
    2
}

fn intensity_score(category: &str, title: &str) -> u8 {
    if title.contains("half-life") || title.contains("pistol whip") {
        return 3;
    }
    if title.contains("beat saber") || category == "fitness" {
        return 2;
    }
    if title.contains("google earth") || title.contains("tilt brush") || category == "education" {
        return 1;
    }
    if category == "simulation" {
        return 2;
    }
    2
}

fn experience_level(category: &str, title: &str) -> SkillLevel {
    if title.contains("half-life") || category == "simulation" {
        return SkillLevel::Expert;
    }
    if title.contains("beat saber") || title.contains("pistol whip") || category == "gaming" {
        return SkillLevel::Intermediate;
    }
    SkillLevel::Beginner
}

fn motion_sensitivity(category: &str, title: &str) -> MotionLevel {
    if title.contains("flight simulator") || title.contains("half-life") {
        return MotionLevel::High;
    }
    if category == "gaming" && !title.contains("beat saber") {
        return MotionLevel::Medium;
    }
    MotionLevel::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::experience::Experience;

    #[test]
    fn test_education_suits_all_ages() {
        let derived = DerivedAttributes::derive(&experience("Google Earth VR", "education"));
        let labels: Vec<_> = derived.age_suitability.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["teen", "young-adult", "adult", "mature"]);
    }

    #[test]
    fn test_google_earth_is_long_and_light() {
        let derived = DerivedAttributes::derive(&experience("Google Earth VR", "education"));
        assert_eq!(derived.duration_score, 3);
        assert_eq!(derived.intensity_score, 1);
    }

    #[test]
    fn test_rhythm_titles_are_teen_friendly_gaming() {
        let derived = DerivedAttributes::derive(&experience("Beat Saber", "gaming"));
        assert_eq!(
            derived.age_suitability,
            [AgeBracket::Teen, AgeBracket::YoungAdult, AgeBracket::Adult]
        );
        assert_eq!(derived.duration_score, 2);
        assert_eq!(derived.intensity_score, 2);
        assert_eq!(derived.experience_level, SkillLevel::Intermediate);
        assert_eq!(derived.motion_sensitivity, MotionLevel::Low);
    }

    #[test]
    fn test_other_gaming_titles_carry_medium_motion() {
        let derived = DerivedAttributes::derive(&experience("SUPERHOT VR", "gaming"));
        assert_eq!(derived.motion_sensitivity, MotionLevel::Medium);
        assert_eq!(
            derived.age_suitability,
            [AgeBracket::YoungAdult, AgeBracket::Adult, AgeBracket::Mature]
        );
    }

    #[test]
    fn test_simulation_targets_experts() {
        let derived = DerivedAttributes::derive(&experience("VTOL VR", "simulation"));
        assert_eq!(derived.experience_level, SkillLevel::Expert);
        assert_eq!(derived.duration_score, 3);
        assert_eq!(derived.intensity_score, 2);
        assert_eq!(derived.age_suitability, [AgeBracket::Adult, AgeBracket::Mature]);
    }

    #[test]
    fn test_flight_simulators_demand_motion_tolerance() {
        let derived =
            DerivedAttributes::derive(&experience("Microsoft Flight Simulator VR", "simulation"));
        assert_eq!(derived.motion_sensitivity, MotionLevel::High);
    }

    #[test]
    fn test_half_life_is_intense_expert_content() {
        let derived = DerivedAttributes::derive(&experience("Half-Life: Alyx", "adventure"));
        assert_eq!(derived.intensity_score, 3);
        assert_eq!(derived.experience_level, SkillLevel::Expert);
        assert_eq!(derived.motion_sensitivity, MotionLevel::High);
    }

    #[test]
    fn test_blank_entry_lands_on_defaults() {
        let derived = DerivedAttributes::derive(&experience("", ""));
        assert_eq!(derived.age_suitability, [AgeBracket::YoungAdult, AgeBracket::Adult]);
        assert_eq!(derived.duration_score, 2);
        assert_eq!(derived.intensity_score, 2);
        assert_eq!(derived.experience_level, SkillLevel::Beginner);
        assert_eq!(derived.motion_sensitivity, MotionLevel::Low);
    }

    #[test]
    fn test_enhance_is_idempotent() {
        let original = experience("Job Simulator", "entertainment");
        let once = enhance(&original);
        let twice = enhance(&once.experience);
        assert_eq!(once.derived, twice.derived);
        assert_eq!(once.experience, original);
    }

    fn experience(title: &str, category: &str) -> Experience {
        Experience { category: category.to_string(), ..Experience::new("test", title) }
    }
}
