//! Loading state machine for the places list.
//!
//! States are `Idle` (nothing loaded yet), `Loading`, `Loaded` and
//! `Failed`; every call to [`PlacesStore::load`] goes back through
//! `Loading`. State lives in a `tokio::sync::watch` channel so each
//! transition is published as one whole snapshot.
//!
//! Overlapping `load()` calls are not serialized: each one fetches on its
//! own and the last to complete overwrites the state.

use std::sync::Arc;

use fomo_core::Place;
use fomo_source::PlacesSource;
use tokio::sync::watch;

/// Message shown when the source fails. The underlying error is logged only.
pub const LOAD_ERROR_MESSAGE: &str = "No se pudieron cargar los lugares.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacesState {
    pub places: Vec<Place>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// Which of the three mutually exclusive screens to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Error(&'a str),
    Loaded(&'a [Place]),
}

impl PlacesState {
    /// Loading takes precedence over an error, and an error hides any
    /// places still held from an earlier load.
    #[must_use]
    pub fn view_state(&self) -> ViewState<'_> {
        if self.is_loading {
            ViewState::Loading
        } else if let Some(message) = self.error_message.as_deref() {
            ViewState::Error(message)
        } else {
            ViewState::Loaded(&self.places)
        }
    }
}

pub struct PlacesStore {
    source: Arc<dyn PlacesSource>,
    state: watch::Sender<PlacesState>,
}

impl PlacesStore {
    pub fn new(source: Arc<dyn PlacesSource>) -> Self {
        let (state, _) = watch::channel(PlacesState::default());
        Self { source, state }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PlacesState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PlacesState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().places.is_empty()
    }

    /// Fetch the full list from the source and replace the current one.
    ///
    /// `is_loading` is set and any previous error cleared before the first
    /// await. On failure the previous places are kept and
    /// [`LOAD_ERROR_MESSAGE`] is recorded; no error escapes this method.
    pub async fn load(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error_message = None;
        });

        let result = self.source.fetch().await;

        self.state.send_modify(|state| {
            match result {
                Ok(places) => {
                    tracing::info!(count = places.len(), "places loaded");
                    state.places = places;
                }
                Err(e) => {
                    tracing::warn!(error = %e, kept = state.places.len(), "places load failed");
                    state.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
                }
            }
            state.is_loading = false;
        });
    }

    /// Load only when nothing has been loaded yet. Returns whether a load ran.
    pub async fn load_if_empty(&self) -> bool {
        if !self.is_empty() {
            tracing::debug!("places already loaded; skipping");
            return false;
        }
        self.load().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use fomo_source::StaticPlacesSource;

    use super::*;

    fn madrid_store() -> PlacesStore {
        PlacesStore::new(Arc::new(StaticPlacesSource::madrid()))
    }

    #[test]
    fn initial_state_is_idle() {
        let store = madrid_store();
        let state = store.snapshot();
        assert!(state.places.is_empty());
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert_eq!(state.view_state(), ViewState::Loaded(&[]));
    }

    #[tokio::test]
    async fn load_replaces_places() {
        let store = madrid_store();
        store.load().await;
        let state = store.snapshot();
        assert_eq!(state.places.len(), 6);
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[tokio::test]
    async fn load_if_empty_runs_once() {
        let store = madrid_store();
        assert!(store.load_if_empty().await);
        assert!(!store.load_if_empty().await);
        assert_eq!(store.snapshot().places.len(), 6);
    }

    #[test]
    fn view_state_precedence() {
        let mut state = PlacesState {
            places: fomo_source::madrid_places(),
            is_loading: false,
            error_message: Some(LOAD_ERROR_MESSAGE.to_string()),
        };
        assert_eq!(state.view_state(), ViewState::Error(LOAD_ERROR_MESSAGE));

        state.is_loading = true;
        assert_eq!(state.view_state(), ViewState::Loading);

        state.is_loading = false;
        state.error_message = None;
        assert!(matches!(state.view_state(), ViewState::Loaded(places) if places.len() == 6));
    }
}
