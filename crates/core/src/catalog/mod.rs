//! Catalog snapshot: loading, lookup, and derived indexes.
//!
//! A [`Catalog`] owns the ordered, session-immutable list of entries
//! every other module computes over. Snapshots load from the built-in
//! fixture table, from a JSON document file, or from a raw payload in
//! either of the two feed shapes (a bare document array, or the
//! `{ "success": .., "data": [..], "count": .. }` envelope the legacy
//! HTTP feed produced).

mod fixtures;
mod index;

pub use fixtures::sample_experiences;
pub use index::{AttributeIndex, IndexKey};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::{CatalogConfig, CatalogSource};
use crate::domain::experience::{Experience, ExperienceId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("could not parse catalog payload: {0}")]
    Parse(serde_json::Error),
    #[error("catalog source is `file` but no path is configured")]
    MissingSourcePath,
}

/// Feed payload shapes accepted by the loaders.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Documents(Vec<Experience>),
    Envelope { data: Vec<Experience> },
}

impl CatalogPayload {
    fn into_experiences(self) -> Vec<Experience> {
        match self {
            CatalogPayload::Documents(experiences) => experiences,
            CatalogPayload::Envelope { data } => data,
        }
    }
}

/// The in-memory catalog snapshot.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    experiences: Vec<Experience>,
}

impl Catalog {
    pub fn new(experiences: Vec<Experience>) -> Self {
        Self { experiences }
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        let catalog = Self::new(sample_experiences());
        info!(count = catalog.len(), "loaded built-in sample catalog");
        catalog
    }

    /// Build a snapshot from the configured source.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match config.source {
            CatalogSource::Builtin => Ok(Self::sample()),
            CatalogSource::File => {
                let path = config.path.as_ref().ok_or(CatalogError::MissingSourcePath)?;
                Self::load_from_file(path)
            }
        }
    }

    /// Parse a snapshot from a raw JSON payload.
    pub fn from_json_str(payload: &str) -> Result<Self, CatalogError> {
        let payload: CatalogPayload =
            serde_json::from_str(payload).map_err(CatalogError::Parse)?;
        let catalog = Self::new(payload.into_experiences());
        info!(count = catalog.len(), "loaded catalog from payload");
        Ok(catalog)
    }

    /// Parse a snapshot from a JSON reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let payload: CatalogPayload =
            serde_json::from_reader(reader).map_err(CatalogError::Parse)?;
        let catalog = Self::new(payload.into_experiences());
        info!(count = catalog.len(), "loaded catalog from reader");
        Ok(catalog)
    }

    /// Load a snapshot from a JSON document file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let payload: CatalogPayload =
            serde_json::from_str(&raw).map_err(|source| CatalogError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(payload.into_experiences());
        info!(count = catalog.len(), path = %path.display(), "loaded catalog file");
        Ok(catalog)
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn find(&self, id: &ExperienceId) -> Option<&Experience> {
        self.experiences.iter().find(|experience| &experience.id == id)
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    /// Build a sorted attribute index over this snapshot.
    pub fn index_by(&self, key: IndexKey) -> AttributeIndex<'_> {
        AttributeIndex::build(&self.experiences, key)
    }
}
