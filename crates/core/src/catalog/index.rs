//! Sorted attribute index over a catalog snapshot.
//!
//! Supports the same exact and inclusive-range lookups the engine's
//! ranking spine needs, over either the stored rating or the derived
//! duration and intensity scores. Entries with equal keys keep catalog
//! order.

use std::cmp::Ordering;

use crate::domain::experience::Experience;
use crate::recommender::DerivedAttributes;

/// Attribute an index is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKey {
    Rating,
    DurationScore,
    IntensityScore,
}

impl IndexKey {
    fn extract(self, experience: &Experience) -> f64 {
        match self {
            IndexKey::Rating => experience.rating,
            IndexKey::DurationScore => {
                f64::from(DerivedAttributes::derive(experience).duration_score)
            }
            IndexKey::IntensityScore => {
                f64::from(DerivedAttributes::derive(experience).intensity_score)
            }
        }
    }
}

/// A catalog view sorted ascending by one attribute.
pub struct AttributeIndex<'a> {
    key: IndexKey,
    entries: Vec<(f64, &'a Experience)>,
}

impl<'a> AttributeIndex<'a> {
    pub fn build(experiences: &'a [Experience], key: IndexKey) -> Self {
        let mut entries: Vec<(f64, &Experience)> = experiences
            .iter()
            .map(|experience| (key.extract(experience), experience))
            .collect();
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        Self { key, entries }
    }

    pub fn key(&self) -> IndexKey {
        self.key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn in_order(&self) -> impl Iterator<Item = &'a Experience> + '_ {
        self.entries.iter().map(|(_, experience)| *experience)
    }

    /// The first entry, in catalog order, whose key equals `key`.
    pub fn exact(&self, key: f64) -> Option<&'a Experience> {
        let start = self.entries.partition_point(|(entry_key, _)| *entry_key < key);
        self.entries
            .get(start)
            .filter(|(entry_key, _)| *entry_key == key)
            .map(|(_, experience)| *experience)
    }

    /// Entries whose key lies in `min..=max`, ascending.
    pub fn range(&self, min: f64, max: f64) -> Vec<&'a Experience> {
        if min > max {
            return Vec::new();
        }
        let start = self.entries.partition_point(|(key, _)| *key < min);
        let end = self.entries.partition_point(|(key, _)| *key <= max);
        self.entries[start..end]
            .iter()
            .map(|(_, experience)| *experience)
            .collect()
    }
}
