use fomo_core::Place;

use crate::store::PlacesStore;

/// Visible map area, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Central Madrid.
    pub const MADRID: MapRegion = MapRegion {
        center_latitude: 40.4168,
        center_longitude: -3.7038,
        latitude_delta: 0.06,
        longitude_delta: 0.06,
    };

    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (latitude - self.center_latitude).abs() <= self.latitude_delta / 2.0
            && (longitude - self.center_longitude).abs() <= self.longitude_delta / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker<'a> {
    pub place_id: &'a str,
    pub title: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    /// Whether the marker falls inside the screen's visible region.
    pub in_region: bool,
}

#[derive(Debug, Clone)]
pub struct MapScreen {
    region: MapRegion,
}

impl Default for MapScreen {
    fn default() -> Self {
        Self {
            region: MapRegion::MADRID,
        }
    }
}

impl MapScreen {
    #[must_use]
    pub fn new(region: MapRegion) -> Self {
        Self { region }
    }

    #[must_use]
    pub fn region(&self) -> MapRegion {
        self.region
    }

    /// Unlike the feed, the map only loads when nothing is loaded yet.
    pub async fn appear(&self, store: &PlacesStore) -> bool {
        store.load_if_empty().await
    }

    /// One marker per place, in list order.
    #[must_use]
    pub fn markers<'a>(&self, places: &'a [Place]) -> Vec<MapMarker<'a>> {
        places
            .iter()
            .map(|p| MapMarker {
                place_id: &p.id,
                title: &p.name,
                latitude: p.latitude,
                longitude: p.longitude,
                in_region: self.region.contains(p.latitude, p.longitude),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use fomo_source::madrid_places;

    use super::*;

    #[test]
    fn one_marker_per_place() {
        let places = madrid_places();
        let markers = MapScreen::default().markers(&places);
        assert_eq!(markers.len(), 6);
        assert_eq!(markers[0].title, "Cafe Angelica");
        assert_eq!(markers[0].place_id, "madrid-001");
        assert!((markers[0].latitude - 40.4269).abs() < f64::EPSILON);
        assert!(markers.iter().all(|m| m.in_region));
    }

    #[test]
    fn markers_outside_region_are_flagged() {
        let mut places = madrid_places();
        places[1].latitude = 41.3874;
        places[1].longitude = 2.1686;
        let markers = MapScreen::default().markers(&places);
        assert_eq!(markers.len(), 6);
        assert!(!markers[1].in_region);
        assert!(markers[0].in_region);
    }

    #[test]
    fn madrid_region_covers_builtin_places() {
        let region = MapScreen::default().region();
        assert!(madrid_places()
            .iter()
            .all(|p| region.contains(p.latitude, p.longitude)));
        assert!(!region.contains(41.3874, 2.1686));
    }
}
