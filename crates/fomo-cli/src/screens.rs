//! Text rendering of the app screens.
//!
//! Each handler runs the screen's load trigger, then prints whichever of
//! the loading, error or loaded views the store state calls for.

use std::fmt::{self, Write};

use fomo_core::Place;
use fomo_store::feed::{LOADING_MESSAGE, RETRY_LABEL};
use fomo_store::{FeedLayout, MapScreen, PlaceDetail, PlacesStore, TodayFeed, ViewState};

pub(crate) async fn today(store: &PlacesStore, category: Option<String>) -> anyhow::Result<()> {
    let mut feed = TodayFeed::new();
    feed.select_category(category);
    feed.appear(store).await;

    let state = store.snapshot();
    match state.view_state() {
        ViewState::Loaded(places) => {
            let mut out = String::new();
            write_feed(&mut out, &feed.render(places))?;
            print!("{out}");
        }
        other => print!("{}", render_unloaded(other)),
    }
    Ok(())
}

pub(crate) async fn map(store: &PlacesStore) -> anyhow::Result<()> {
    let screen = MapScreen::default();
    screen.appear(store).await;

    let state = store.snapshot();
    match state.view_state() {
        ViewState::Loaded(places) => {
            let mut out = String::new();
            write_map(&mut out, &screen, places)?;
            print!("{out}");
        }
        other => print!("{}", render_unloaded(other)),
    }
    Ok(())
}

pub(crate) async fn detail(store: &PlacesStore, id: &str) -> anyhow::Result<()> {
    store.load_if_empty().await;

    let state = store.snapshot();
    match state.view_state() {
        ViewState::Loaded(places) => {
            let detail = PlaceDetail::find(places, id)
                .ok_or_else(|| anyhow::anyhow!("place '{id}' not found"))?;
            let mut out = String::new();
            write_detail(&mut out, &detail)?;
            print!("{out}");
        }
        other => print!("{}", render_unloaded(other)),
    }
    Ok(())
}

pub(crate) async fn categories(store: &PlacesStore) -> anyhow::Result<()> {
    store.load_if_empty().await;

    let state = store.snapshot();
    match state.view_state() {
        ViewState::Loaded(places) => {
            for category in fomo_core::available_categories(places) {
                let attrs = fomo_core::category_attributes(&category);
                println!("{category} ({}, {})", attrs.color, attrs.icon.symbol_name());
            }
        }
        other => print!("{}", render_unloaded(other)),
    }
    Ok(())
}

pub(crate) fn render_unloaded(view: ViewState<'_>) -> String {
    match view {
        ViewState::Loading => format!("{LOADING_MESSAGE}\n"),
        ViewState::Error(message) => format!("{message}\n[{RETRY_LABEL}]\n"),
        ViewState::Loaded(_) => String::new(),
    }
}

fn score_line(place: &Place) -> String {
    let tier = fomo_core::score_tier(place.trending_score);
    format!("{} pts · {} ({})", place.trending_score, tier.label(), tier.color())
}

pub(crate) fn write_feed(out: &mut impl Write, layout: &FeedLayout<'_>) -> fmt::Result {
    if let Some(hero) = layout.hero {
        writeln!(out, "🔥 {} · {} · {}", hero.name, hero.category, hero.area)?;
        writeln!(out, "   {}", score_line(hero))?;
        writeln!(out, "   {}", hero.why_trending)?;
    }

    if !layout.categories.is_empty() {
        writeln!(out, "Categorías: {}", layout.categories.join(" | "))?;
    }

    for card in &layout.cards {
        let place = card.place;
        writeln!(
            out,
            "[{}] {} ({}, {}) · {} · {}",
            card.tier,
            place.name,
            place.category,
            card.attributes.color,
            place.area,
            score_line(place)
        )?;
    }

    Ok(())
}

pub(crate) fn write_map(
    out: &mut impl Write,
    screen: &MapScreen,
    places: &[Place],
) -> fmt::Result {
    let region = screen.region();
    writeln!(
        out,
        "Map centred on ({:.4}, {:.4}), span {:.2}°",
        region.center_latitude, region.center_longitude, region.latitude_delta
    )?;
    for marker in screen.markers(places) {
        write!(
            out,
            "  {:<12} {:<20} ({:.4}, {:.4})",
            marker.place_id, marker.title, marker.latitude, marker.longitude
        )?;
        if !marker.in_region {
            write!(out, " [outside view]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub(crate) fn write_detail(out: &mut impl Write, detail: &PlaceDetail<'_>) -> fmt::Result {
    let place = detail.place;

    writeln!(out, "{}", place.name)?;
    writeln!(out, "{}", detail.subtitle)?;
    writeln!(out, "{}", place.short_description)?;
    writeln!(
        out,
        "Trending score: {} ({})",
        place.trending_score,
        detail.score_tier.label()
    )?;
    if let Some(rating) = place.rating {
        writeln!(out, "Rating: {rating:.1}")?;
    }
    if let Some(price) = &place.price_range {
        writeln!(out, "Price: {price}")?;
    }
    writeln!(out, "Open now: {}", place.open_status())?;
    writeln!(out, "Why it's trending")?;
    for note in &detail.notes {
        writeln!(out, "  ({}) {}", note.icon, note.text)?;
    }
    writeln!(out, "{}", place.apple_maps_url)
}
