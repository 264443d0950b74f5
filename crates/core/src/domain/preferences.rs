use serde::{Deserialize, Deserializer, Serialize};

/// The six-field preference vector collected by the preference form,
/// carrying short UI codes (for example `gaming`, `young-adult`, `high`).
///
/// A field is either absent or one code from a small closed vocabulary.
/// The form submits empty strings for untouched selects; those normalize
/// to `None` at the boundary so "no preference" is explicit everywhere
/// else.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    #[serde(deserialize_with = "blank_as_none")]
    pub age_group: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub primary_interest: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub vr_intensity: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub session_duration: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub motion_sensitivity: Option<String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no preference at all is set. Callers typically refuse
    /// to rank against an all-empty vector.
    pub fn is_empty(&self) -> bool {
        self.age_group.is_none()
            && self.primary_interest.is_none()
            && self.vr_intensity.is_none()
            && self.session_duration.is_none()
            && self.experience_level.is_none()
            && self.motion_sensitivity.is_none()
    }

    pub fn with_age_group(mut self, value: impl Into<String>) -> Self {
        self.age_group = non_blank(value.into());
        self
    }

    pub fn with_primary_interest(mut self, value: impl Into<String>) -> Self {
        self.primary_interest = non_blank(value.into());
        self
    }

    pub fn with_vr_intensity(mut self, value: impl Into<String>) -> Self {
        self.vr_intensity = non_blank(value.into());
        self
    }

    pub fn with_session_duration(mut self, value: impl Into<String>) -> Self {
        self.session_duration = non_blank(value.into());
        self
    }

    pub fn with_experience_level(mut self, value: impl Into<String>) -> Self {
        self.experience_level = non_blank(value.into());
        self
    }

    pub fn with_motion_sensitivity(mut self, value: impl Into<String>) -> Self {
        self.motion_sensitivity = non_blank(value.into());
        self
    }
}

/// Preference vector after translation into the catalog's canonical
/// long-form vocabulary. Produced by the preference mapper; values with
/// no mapping entry pass through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappedPreferences {
    pub age_group: Option<String>,
    pub primary_interest: Option<String>,
    pub vr_intensity: Option<String>,
    pub session_duration: Option<String>,
    pub experience_level: Option<String>,
    pub motion_sensitivity: Option<String>,
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_empty()))
}
