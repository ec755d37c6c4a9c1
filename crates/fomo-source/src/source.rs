//! The places source contract.

use std::collections::HashSet;

use async_trait::async_trait;
use fomo_core::Place;

use crate::error::SourceError;

/// Asynchronous provider of the current trending places.
///
/// Each call returns the full list; callers replace whatever they held
/// before. Implementations must hand out lists with unique ids.
#[async_trait]
pub trait PlacesSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Place>, SourceError>;
}

/// Check the invariants every source guarantees to its consumers.
///
/// # Errors
///
/// Returns [`SourceError::Validation`] on an empty name or a repeated id.
pub fn validate_places(places: &[Place]) -> Result<(), SourceError> {
    let mut seen_ids = HashSet::new();

    for place in places {
        if place.name.trim().is_empty() {
            return Err(SourceError::Validation(format!(
                "place '{}' has an empty name",
                place.id
            )));
        }

        if !seen_ids.insert(place.id.as_str()) {
            return Err(SourceError::Validation(format!(
                "duplicate place id: '{}'",
                place.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_source::madrid_places;

    #[test]
    fn validate_accepts_builtin_list() {
        assert!(validate_places(&madrid_places()).is_ok());
    }

    #[test]
    fn validate_accepts_empty_list() {
        assert!(validate_places(&[]).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_id() {
        let mut places = madrid_places();
        places[1].id = places[0].id.clone();
        let err = validate_places(&places).unwrap_err();
        assert!(err.to_string().contains("duplicate place id: 'madrid-001'"));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut places = madrid_places();
        places[2].name = "   ".to_string();
        let err = validate_places(&places).unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }
}
