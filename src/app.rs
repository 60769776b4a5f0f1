//! Root Dioxus application component
//!
//! This module contains the main App component and the page state it
//! synchronizes against the quotes API.

use crate::api::ApiClient;
use crate::settings::load_settings;
use crate::types::Quote;
use crate::ui::Home;
use dioxus::prelude::*;

static MAIN_CSS: Asset = asset!("/assets/main.css");

/// Global application state shared across components
///
/// One signal per state field; every field is replaced wholesale by the
/// fetch that produced it. There is no request cancellation anywhere: when
/// two fetches race, the last response to land wins.
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub quotes: Signal<Vec<Quote>>,
    pub categories: Signal<Vec<String>>,
    pub active_category: Signal<Option<String>>,
    pub featured: Signal<Option<Quote>>,
    pub loading: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        tracing::info!("Using quotes API at {}", settings.api_url);

        Self {
            client: ApiClient::new(settings.api_url),
            quotes: Signal::new(Vec::new()),
            categories: Signal::new(Vec::new()),
            active_category: Signal::new(None),
            featured: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    /// Initial three-way fetch, run once on mount
    ///
    /// All three requests must succeed; a single failure drops the whole
    /// batch, leaving the prior (empty) values in place. `loading` is
    /// cleared either way so the UI never hangs on the loading screen.
    pub async fn load(&self) {
        let mut quotes = self.quotes;
        let mut categories = self.categories;
        let mut featured = self.featured;
        let mut loading = self.loading;

        match self.client.initial_load().await {
            Ok((all_quotes, all_categories, random)) => {
                quotes.set(all_quotes);
                categories.set(all_categories);
                featured.set(Some(random));
            }
            Err(e) => tracing::error!("Failed to load quotes: {}", e),
        }

        loading.set(false);
    }

    /// Replace the grid with the quotes of a single category
    pub async fn filter_by_category(&self, category: &str) {
        let mut quotes = self.quotes;
        match self.client.quotes(Some(category)).await {
            Ok(filtered) => quotes.set(filtered),
            Err(e) => tracing::error!("Failed to filter quotes by '{}': {}", category, e),
        }
    }

    /// Drop the category filter and restore the unfiltered grid
    pub async fn clear_filter(&self) {
        let mut active_category = self.active_category;
        let mut quotes = self.quotes;

        active_category.set(None);
        match self.client.quotes(None).await {
            Ok(all_quotes) => quotes.set(all_quotes),
            Err(e) => tracing::error!("Failed to reload quotes: {}", e),
        }
    }

    /// Swap the featured quote for a fresh random one
    pub async fn refresh_featured(&self) {
        let mut featured = self.featured;
        match self.client.random_quote().await {
            Ok(quote) => featured.set(Some(quote)),
            Err(e) => tracing::error!("Failed to refresh featured quote: {}", e),
        }
    }
}

#[component]
pub fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Initial load, once on mount
    {
        let state = state.clone();
        use_effect(move || {
            let state = state.clone();
            spawn(async move {
                state.load().await;
            });
        });
    }

    // Re-fetch whenever a category is selected. Setting the selector back
    // to None (the "All" action) does not fire a fetch from here.
    {
        let state = state.clone();
        let active_category = state.active_category;
        use_effect(move || {
            let Some(category) = active_category() else {
                return;
            };
            let state = state.clone();
            spawn(async move {
                state.filter_by_category(&category).await;
            });
        });
    }

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Home {}
    }
}
