use fomo_core::{category_attributes, score_tier, CategoryAttributes, Place, ScoreTier};

const NOTE_ICONS: [&str; 3] = ["sparkles", "person.2.fill", "sun.max.fill"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingNote<'a> {
    pub icon: &'static str,
    pub text: &'a str,
}

/// Detail sheet for a single place.
#[derive(Debug, Clone)]
pub struct PlaceDetail<'a> {
    pub place: &'a Place,
    pub subtitle: String,
    pub attributes: CategoryAttributes,
    pub score_tier: ScoreTier,
    pub notes: Vec<TrendingNote<'a>>,
}

impl<'a> PlaceDetail<'a> {
    #[must_use]
    pub fn new(place: &'a Place) -> Self {
        let notes = place
            .headline_notes()
            .iter()
            .enumerate()
            .map(|(i, text)| TrendingNote {
                icon: NOTE_ICONS[i % NOTE_ICONS.len()],
                text,
            })
            .collect();

        Self {
            place,
            subtitle: format!("{} · {}", place.category, place.area),
            attributes: category_attributes(&place.category),
            score_tier: score_tier(place.trending_score),
            notes,
        }
    }

    /// Look up `id` in `places` and build its detail sheet.
    #[must_use]
    pub fn find(places: &'a [Place], id: &str) -> Option<Self> {
        places.iter().find(|p| p.id == id).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use fomo_core::{Color, Icon};
    use fomo_source::madrid_places;

    use super::*;

    #[test]
    fn detail_for_rooftop() {
        let places = madrid_places();
        let detail = PlaceDetail::find(&places, "madrid-006").expect("known id");
        assert_eq!(detail.subtitle, "Rooftop · Gran Via");
        assert_eq!(detail.score_tier, ScoreTier::Peak);
        assert_eq!(detail.attributes.icon, Icon::MapPin);
        assert_eq!(detail.attributes.color, Color::Blue);
        assert_eq!(
            detail.notes,
            vec![
                TrendingNote {
                    icon: "sparkles",
                    text: "Sunset tables are booking fast",
                },
                TrendingNote {
                    icon: "person.2.fill",
                    text: "New spritz menu launched",
                },
                TrendingNote {
                    icon: "sun.max.fill",
                    text: "Skyline view at dusk",
                },
            ]
        );
    }

    #[test]
    fn notes_are_capped_at_three() {
        let mut places = madrid_places();
        places[0].trending_notes.push("Hidden fourth note".to_string());
        let detail = PlaceDetail::new(&places[0]);
        assert_eq!(detail.notes.len(), 3);
    }

    #[test]
    fn unknown_id_has_no_detail() {
        let places = madrid_places();
        assert!(PlaceDetail::find(&places, "madrid-404").is_none());
    }
}
