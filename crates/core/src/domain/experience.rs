use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of a catalog document.
///
/// Supplier feeds disagree on representation: the document store emits
/// string ids while the legacy feed used integers. Both deserialize to
/// the string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ExperienceId(pub String);

impl ExperienceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExperienceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdRepr {
            Text(String),
            Number(i64),
        }

        Ok(match IdRepr::deserialize(deserializer)? {
            IdRepr::Text(id) => ExperienceId(id),
            IdRepr::Number(id) => ExperienceId(id.to_string()),
        })
    }
}

/// One catalog entry describing a VR experience.
///
/// Only `id` and `title` are required in source documents; everything
/// else defaults because supplier metadata is uneven. The canonical
/// attribute fields, when present, carry the catalog's long-form labels
/// (for example `Adult (26–40)` or `Moderate (Balanced)`); entries
/// without them rely on derived attributes instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub primary_interest: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub vr_intensity: Option<String>,
    #[serde(default)]
    pub session_duration: Option<String>,
    #[serde(default)]
    pub vr_experience_level: Option<String>,
    #[serde(default)]
    pub motion_sensitivity: Option<String>,
    #[serde(default)]
    pub estimated_calories_burned: Option<u32>,
    #[serde(default, alias = "officialUrl")]
    pub store_url: Option<String>,
    #[serde(default, rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Experience {
    /// Minimal entry with all optional metadata left empty. Useful when
    /// assembling a catalog programmatically; loaded documents go
    /// through serde instead.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ExperienceId::new(id),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            rating: 0.0,
            price: 0.0,
            platform: String::new(),
            primary_interest: None,
            age_group: None,
            vr_intensity: None,
            session_duration: None,
            vr_experience_level: None,
            motion_sensitivity: None,
            estimated_calories_burned: None,
            store_url: None,
            video_url: None,
            image_url: None,
            tags: Vec::new(),
        }
    }
}
