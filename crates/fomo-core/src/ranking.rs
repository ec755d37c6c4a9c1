//! Ranking and partitioning of a place list for presentation.
//!
//! All functions are pure and recompute from the list they are given; the
//! order a source returns places in carries no meaning of its own.

use std::collections::BTreeSet;

use crate::place::Place;

/// Display density of a card in the Today feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTier {
    Hero,
    Medium,
    Compact,
}

impl std::fmt::Display for CardTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardTier::Hero => write!(f, "hero"),
            CardTier::Medium => write!(f, "medium"),
            CardTier::Compact => write!(f, "compact"),
        }
    }
}

/// The place with the highest trending score.
///
/// Among places sharing the maximum score, the first one in input order
/// wins. Returns `None` for an empty list.
#[must_use]
pub fn hero_place(places: &[Place]) -> Option<&Place> {
    places.iter().fold(None, |best: Option<&Place>, place| match best {
        Some(current) if current.trending_score >= place.trending_score => Some(current),
        _ => Some(place),
    })
}

/// Every place except `hero`, in input order.
///
/// Exclusion is by `id`. With no hero, all places are returned.
#[must_use]
pub fn secondary_places<'a>(places: &'a [Place], hero: Option<&Place>) -> Vec<&'a Place> {
    match hero {
        Some(hero) => places.iter().filter(|p| p.id != hero.id).collect(),
        None => places.iter().collect(),
    }
}

/// Keep only places whose category equals `selected` exactly.
///
/// The comparison is case-sensitive. `None` keeps everything.
pub fn category_filter<'a, I>(places: I, selected: Option<&str>) -> Vec<&'a Place>
where
    I: IntoIterator<Item = &'a Place>,
{
    match selected {
        Some(category) => places
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
        None => places.into_iter().collect(),
    }
}

/// Distinct categories present in `places`, sorted ascending.
#[must_use]
pub fn available_categories(places: &[Place]) -> Vec<String> {
    places
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Classify a feed card by its position and score.
///
/// `index` is the 0-based position within the hero-excluded (and possibly
/// filtered) feed.
#[must_use]
pub fn card_tier(index: usize, score: i32) -> CardTier {
    if index < 2 && score >= 85 {
        CardTier::Hero
    } else if score >= 80 {
        CardTier::Medium
    } else {
        CardTier::Compact
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn place(id: &str, category: &str, score: i32) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {id}"),
            category: category.to_string(),
            short_description: String::new(),
            latitude: 40.4168,
            longitude: -3.7038,
            area: "Centro".to_string(),
            why_trending: String::new(),
            trending_notes: vec![],
            trending_score: score,
            apple_maps_url: format!("https://maps.apple.com/?q={id}"),
            image_url: None,
            price_range: None,
            rating: None,
            open_now: None,
        }
    }

    fn madrid_scores() -> Vec<Place> {
        [92, 88, 84, 90, 81, 95]
            .iter()
            .enumerate()
            .map(|(i, score)| place(&format!("madrid-00{}", i + 1), "Tapas", *score))
            .collect()
    }

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn hero_is_unique_maximum() {
        let places = madrid_scores();
        let hero = hero_place(&places).expect("non-empty list has a hero");
        assert_eq!(hero.id, "madrid-006");
        assert_eq!(hero.trending_score, 95);
    }

    #[test]
    fn hero_of_empty_list_is_none() {
        assert!(hero_place(&[]).is_none());
    }

    #[test]
    fn hero_tie_break_prefers_first_in_input_order() {
        let places = vec![
            place("a", "Tapas", 70),
            place("b", "Tapas", 90),
            place("c", "Tapas", 90),
            place("d", "Tapas", 90),
        ];
        assert_eq!(hero_place(&places).unwrap().id, "b");
    }

    #[test]
    fn hero_score_dominates_every_other_score() {
        let places = vec![
            place("a", "Tapas", -5),
            place("b", "Tapas", 0),
            place("c", "Tapas", 100),
            place("d", "Tapas", 101),
        ];
        let hero = hero_place(&places).unwrap();
        assert!(places.iter().all(|p| hero.trending_score >= p.trending_score));
    }

    #[test]
    fn secondary_excludes_hero_and_keeps_order() {
        let places = madrid_scores();
        let hero = hero_place(&places);
        let rest = secondary_places(&places, hero);
        assert_eq!(
            ids(&rest),
            vec!["madrid-001", "madrid-002", "madrid-003", "madrid-004", "madrid-005"]
        );
    }

    #[test]
    fn secondary_plus_hero_covers_input_exactly() {
        let places = vec![
            place("x", "Asador", 50),
            place("y", "Tapas", 80),
            place("z", "Tapas", 80),
        ];
        let hero = hero_place(&places).unwrap();
        let rest = secondary_places(&places, Some(hero));

        let mut seen: HashSet<&str> = rest.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(seen.len(), rest.len(), "no duplicates in secondary list");
        assert!(seen.insert(hero.id.as_str()), "hero not repeated in secondary list");
        let input: HashSet<&str> = places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(seen, input);
    }

    #[test]
    fn secondary_without_hero_returns_everything() {
        let places = madrid_scores();
        assert_eq!(secondary_places(&places, None).len(), places.len());
    }

    #[test]
    fn available_categories_sorted_and_deduped() {
        let places = vec![
            place("1", "Tapas", 80),
            place("2", "Asador", 80),
            place("3", "Tapas", 80),
        ];
        assert_eq!(available_categories(&places), vec!["Asador", "Tapas"]);
    }

    #[test]
    fn available_categories_strictly_ascending() {
        let places = vec![
            place("1", "Taberna", 1),
            place("2", "Casera", 1),
            place("3", "asador", 1),
            place("4", "Asador", 1),
            place("5", "Casera", 1),
        ];
        let categories = available_categories(&places);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn category_filter_is_exact_and_ordered() {
        let places = vec![
            place("1", "Tapas", 80),
            place("2", "Asador", 80),
            place("3", "Tapas", 80),
            place("4", "tapas", 80),
        ];
        let filtered = category_filter(&places, Some("Tapas"));
        assert_eq!(ids(&filtered), vec!["1", "3"]);
    }

    #[test]
    fn category_filter_without_selection_is_identity() {
        let places = madrid_scores();
        assert_eq!(category_filter(&places, None).len(), places.len());
    }

    #[test]
    fn category_filter_composes_with_secondary_places() {
        let places = vec![
            place("1", "Tapas", 99),
            place("2", "Asador", 80),
            place("3", "Tapas", 80),
        ];
        let rest = secondary_places(&places, hero_place(&places));
        let filtered = category_filter(rest, Some("Tapas"));
        assert_eq!(ids(&filtered), vec!["3"]);
    }

    #[test]
    fn card_tier_boundaries() {
        assert_eq!(card_tier(0, 85), CardTier::Hero);
        assert_eq!(card_tier(1, 100), CardTier::Hero);
        assert_eq!(card_tier(0, 84), CardTier::Medium);
        assert_eq!(card_tier(2, 95), CardTier::Medium);
        assert_eq!(card_tier(5, 80), CardTier::Medium);
        assert_eq!(card_tier(0, 79), CardTier::Compact);
        assert_eq!(card_tier(7, 10), CardTier::Compact);
    }
}
