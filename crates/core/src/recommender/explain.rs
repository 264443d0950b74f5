//! Display explanations for recommended entries.

use crate::domain::experience::Experience;
use crate::domain::preferences::Preferences;

/// Separator between reason clauses.
pub const REASON_SEPARATOR: &str = " • ";

/// Fallback text when no concrete reason applies.
pub const DEFAULT_REASON: &str = "AI-curated match for your preferences";

/// Build the one-line explanation shown next to a recommendation.
///
/// This reads the raw preference codes as submitted, not the mapped
/// catalog labels, so the field-equality clauses fire only when a
/// catalog field carries the same spelling as the form value.
pub fn explain_recommendation(experience: &Experience, preferences: &Preferences) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if experience.rating >= 4.5 {
        reasons.push("Highly rated by users".to_string());
    }

    if let Some(interest) = preferences.primary_interest.as_deref() {
        if experience.primary_interest.as_deref() == Some(interest) {
            reasons.push(format!("Perfect match for {}", interest.to_lowercase()));
        }
    }

    if let Some(intensity) = preferences.vr_intensity.as_deref() {
        if experience.vr_intensity.as_deref() == Some(intensity) {
            reasons.push(format!("Ideal {} intensity", intensity.to_lowercase()));
        }
    }

    if let Some(duration) = preferences.session_duration.as_deref() {
        if experience.session_duration.as_deref() == Some(duration) {
            reasons.push(format!("Perfect {} session length", duration.to_lowercase()));
        }
    }

    if let Some(level) = preferences.experience_level.as_deref() {
        if experience.vr_experience_level.as_deref() == Some(level) {
            reasons.push(format!("Designed for {level} users"));
        }
    }

    if let Some(age_group) = preferences.age_group.as_deref() {
        if experience.age_group.as_deref() == Some(age_group) {
            reasons.push("Age-appropriate content".to_string());
        }
    }

    if preferences.motion_sensitivity.as_deref() == Some("high")
        && experience.motion_sensitivity.as_deref() == Some("Low (No sensitivity)")
    {
        reasons.push("Motion-sickness friendly".to_string());
    }

    if experience.price == 0.0 {
        reasons.push("Free to experience".to_string());
    }

    if let Some(calories) = experience.estimated_calories_burned {
        if calories > 50 {
            reasons.push(format!("Great workout ({calories} calories)"));
        }
    }

    if reasons.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    }
}
