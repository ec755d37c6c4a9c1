//! Local file source. `.yaml`/`.yml` files are read as YAML, anything else
//! as JSON. Either way the document is a list of places.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fomo_core::Place;

use crate::error::SourceError;
use crate::source::{validate_places, PlacesSource};

#[derive(Debug, Clone)]
pub struct FilePlacesSource {
    path: PathBuf,
}

impl FilePlacesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
    }

    fn parse(&self, content: &str) -> Result<Vec<Place>, SourceError> {
        let context = self.path.display().to_string();
        if self.is_yaml() {
            serde_yaml::from_str(content)
                .map_err(|source| SourceError::Yaml { context, source })
        } else {
            serde_json::from_str(content)
                .map_err(|source| SourceError::Deserialize { context, source })
        }
    }
}

#[async_trait]
impl PlacesSource for FilePlacesSource {
    async fn fetch(&self) -> Result<Vec<Place>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                path: self.path.display().to_string(),
                source: e,
            })?;

        let places = self.parse(&content)?;
        validate_places(&places)?;

        tracing::info!(path = %self.path.display(), count = places.len(), "loaded places file");
        Ok(places)
    }
}
