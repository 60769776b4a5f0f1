//! Home page
//!
//! The single page of the app: loading gate, featured spotlight, category
//! filter and the quote grid, rendered purely from the current state.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::ui::featured::FeaturedQuote;
use crate::ui::filter::CategoryFilter;
use crate::ui::grid::QuoteGrid;

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let loading = state.loading;
    let featured = state.featured;

    // While the initial load is in flight, nothing else renders.
    if loading() {
        return rsx! {
            LoadingScreen {}
        };
    }

    rsx! {
        div { class: "page",
            header { class: "page-header",
                div { class: "page-header-inner",
                    div { class: "logo-mark", "“" }
                    div {
                        h1 { class: "page-title", "QuoteDeck" }
                        p { class: "page-tagline", "Timeless quotes to inspire your day" }
                    }
                }
            }

            main { class: "page-body",
                {featured().map(|quote| rsx! {
                    FeaturedQuote { quote }
                })}

                CategoryFilter {}
                QuoteGrid {}
            }

            footer { class: "page-footer", "QuoteDeck — built with Dioxus" }
        }
    }
}

#[component]
fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            p { class: "loading-label", "Loading quotes..." }
        }
    }
}
