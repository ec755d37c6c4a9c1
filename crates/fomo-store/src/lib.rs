//! Presentation state for the trending places screens.
//!
//! [`PlacesStore`] owns the loaded list and its loading/error flags. The
//! screen modules turn a snapshot of that state into what the Today feed,
//! the map and the detail sheet display.

pub mod detail;
pub mod feed;
pub mod map;
pub mod store;

pub use detail::{PlaceDetail, TrendingNote};
pub use feed::{FeedCard, FeedLayout, TodayFeed};
pub use map::{MapMarker, MapRegion, MapScreen};
pub use store::{PlacesState, PlacesStore, ViewState, LOAD_ERROR_MESSAGE};
