use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Maximum number of trending notes shown for a place.
pub const HEADLINE_NOTES: usize = 3;

/// One trending point of interest.
///
/// Places are produced by a places source and never mutated afterwards.
/// Two places are equal when their `id`s are equal; the remaining fields
/// do not take part in comparisons or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub short_description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area: String,
    pub why_trending: String,
    #[serde(default)]
    pub trending_notes: Vec<String>,
    pub trending_score: i32,
    pub apple_maps_url: String,
    #[serde(default, rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

/// Whether a place is currently open. `Unknown` when the source did not say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

impl std::fmt::Display for OpenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenStatus::Open => write!(f, "open"),
            OpenStatus::Closed => write!(f, "closed"),
            OpenStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl Place {
    /// Returns `true` if both values describe the same place.
    #[must_use]
    pub fn same_place(&self, other: &Place) -> bool {
        self.id == other.id
    }

    /// The first few trending notes, in source order.
    #[must_use]
    pub fn headline_notes(&self) -> &[String] {
        let end = self.trending_notes.len().min(HEADLINE_NOTES);
        &self.trending_notes[..end]
    }

    #[must_use]
    pub fn open_status(&self) -> OpenStatus {
        match self.open_now {
            Some(true) => OpenStatus::Open,
            Some(false) => OpenStatus::Closed,
            None => OpenStatus::Unknown,
        }
    }

    /// Spoken label for assistive technologies.
    #[must_use]
    pub fn accessibility_label(&self) -> String {
        format!(
            "{}, {}, puntuacion {}",
            self.name, self.category, self.trending_score
        )
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.same_place(other)
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
