//! Built-in Madrid list, served without any I/O.

use async_trait::async_trait;
use fomo_core::Place;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::SourceError;
use crate::source::PlacesSource;

/// Source that always returns the same in-memory list.
#[derive(Debug, Clone)]
pub struct StaticPlacesSource {
    places: Vec<Place>,
}

impl StaticPlacesSource {
    /// Source serving the built-in Madrid list.
    #[must_use]
    pub fn madrid() -> Self {
        Self::with_places(madrid_places())
    }

    #[must_use]
    pub fn with_places(places: Vec<Place>) -> Self {
        Self { places }
    }
}

impl Default for StaticPlacesSource {
    fn default() -> Self {
        Self::madrid()
    }
}

#[async_trait]
impl PlacesSource for StaticPlacesSource {
    async fn fetch(&self) -> Result<Vec<Place>, SourceError> {
        tracing::debug!(count = self.places.len(), "serving static places");
        Ok(self.places.clone())
    }
}

/// Apple Maps search link for a place name.
fn apple_maps_url(name: &str) -> String {
    let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
    format!("https://maps.apple.com/?q={encoded}")
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    category: &str,
    short_description: &str,
    (latitude, longitude): (f64, f64),
    area: &str,
    why_trending: &str,
    notes: [&str; 3],
    trending_score: i32,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        short_description: short_description.to_string(),
        latitude,
        longitude,
        area: area.to_string(),
        why_trending: why_trending.to_string(),
        trending_notes: notes.iter().map(|n| (*n).to_string()).collect(),
        trending_score,
        apple_maps_url: apple_maps_url(name),
        image_url: None,
        price_range: None,
        rating: None,
        open_now: None,
    }
}

/// The six Madrid places shipped with the app.
#[must_use]
pub fn madrid_places() -> Vec<Place> {
    vec![
        seed(
            "madrid-001",
            "Cafe Angelica",
            "Coffee",
            "Sunny corner cafe with pastelitos and cold brew.",
            (40.4269, -3.7036),
            "Malasana",
            "Locals are lining up for the new olive oil latte.",
            [
                "New olive oil latte just launched",
                "Morning queue is back this week",
                "Great sunny corner seating",
            ],
            92,
        ),
        seed(
            "madrid-002",
            "Mercado Norte",
            "Food Hall",
            "Compact market with rotating chefs and wine taps.",
            (40.4158, -3.7074),
            "Centro",
            "A chef pop-up is drawing a dinner crowd all week.",
            [
                "Chef pop-up runs all week",
                "Wine taps got a refresh",
                "Live tapas station tonight",
            ],
            88,
        ),
        seed(
            "madrid-003",
            "Rio Verde Walk",
            "Outdoors",
            "Riverside loop with street art and sunset views.",
            (40.4059, -3.7210),
            "Arganzuela",
            "Evening crowds are building for the golden hour.",
            [
                "Golden hour views are popular",
                "Fresh mural just dropped",
                "Easy river loop for walks",
            ],
            84,
        ),
        seed(
            "madrid-004",
            "Luna Vinyl Bar",
            "Nightlife",
            "Listening bar with curated sets and small plates.",
            (40.4212, -3.6992),
            "Chueca",
            "A guest DJ series is boosting late-night traffic.",
            [
                "Guest DJ series this weekend",
                "Limited seats at the bar",
                "Small-plate menu is new",
            ],
            90,
        ),
        seed(
            "madrid-005",
            "Museo Patio",
            "Culture",
            "Small gallery with a quiet courtyard cafe.",
            (40.4134, -3.7005),
            "Las Letras",
            "A new street photography exhibit just opened.",
            [
                "New street photo exhibit",
                "Courtyard cafe reopened",
                "Quiet mid-day vibe",
            ],
            81,
        ),
        seed(
            "madrid-006",
            "Azotea Aurora",
            "Rooftop",
            "Open-air terrace with skyline views and spritz.",
            (40.4183, -3.7079),
            "Gran Via",
            "Golden-hour tables are booking out fast.",
            [
                "Sunset tables are booking fast",
                "New spritz menu launched",
                "Skyline view at dusk",
            ],
            95,
        ),
    ]
}
