//! The "Today" feed: one hero place, a category filter bar and a list of
//! cards sized by position and score.

use fomo_core::{
    available_categories, card_tier, category_attributes, category_filter, hero_place,
    score_tier, secondary_places, CardTier, CategoryAttributes, Place, ScoreTier,
};

use crate::store::PlacesStore;

pub const LOADING_MESSAGE: &str = "Descubriendo Madrid...";
pub const RETRY_LABEL: &str = "Reintentar";

#[derive(Debug, Clone, Copy)]
pub struct FeedCard<'a> {
    pub place: &'a Place,
    pub tier: CardTier,
    pub attributes: CategoryAttributes,
    pub score_tier: ScoreTier,
}

#[derive(Debug, Clone)]
pub struct FeedLayout<'a> {
    pub hero: Option<&'a Place>,
    pub categories: Vec<String>,
    pub cards: Vec<FeedCard<'a>>,
}

/// Feed screen state. Only the category selection belongs to the screen;
/// places always come from the store.
#[derive(Debug, Clone, Default)]
pub struct TodayFeed {
    selected_category: Option<String>,
}

impl TodayFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// Tapping the selected category clears the filter; any other selects it.
    pub fn toggle_category(&mut self, category: &str) {
        if self.selected_category.as_deref() == Some(category) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(category.to_string());
        }
    }

    /// The feed reloads every time it appears.
    pub async fn appear(&self, store: &PlacesStore) {
        store.load().await;
    }

    /// Lay out the feed for `places`.
    ///
    /// The hero never appears among the cards. Categories are listed from
    /// the whole list, hero included, so the filter bar does not change
    /// when the hero does.
    #[must_use]
    pub fn render<'a>(&self, places: &'a [Place]) -> FeedLayout<'a> {
        let hero = hero_place(places);
        let rest = secondary_places(places, hero);
        let cards = category_filter(rest, self.selected_category())
            .into_iter()
            .enumerate()
            .map(|(index, place)| FeedCard {
                place,
                tier: card_tier(index, place.trending_score),
                attributes: category_attributes(&place.category),
                score_tier: score_tier(place.trending_score),
            })
            .collect();

        FeedLayout {
            hero,
            categories: available_categories(places),
            cards,
        }
    }
}
